use std::collections::BTreeSet;

use rand::Rng;
use tracing::debug;

use crate::Error;
use crate::Result;

/// Randomly pick `count` distinct items from `items`.
///
/// A `count` of 0 means take everything, and `items` are returned
/// untouched. Otherwise every subset of size `count` is equally
/// likely to be chosen. Chosen items keep their relative order.
///
/// # Errors
///
/// [`Error::InvalidSampleSize`] when `count` is larger than the
/// number of items.
pub fn sample<T, R>(items: Vec<T>, count: usize, rng: &mut R) -> Result<Vec<T>>
where
    R: Rng + ?Sized,
{
    let available = items.len();

    if count == 0 {
        debug!(available, "no sampling, take all");
        return Ok(items);
    }

    if count > available {
        return Err(Error::InvalidSampleSize {
            requested: count,
            available,
        });
    }

    let picked: BTreeSet<usize> =
        rand::seq::index::sample(rng, available, count)
            .into_iter()
            .collect();

    debug!(available, count, "sampled");

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, it)| picked.contains(&idx).then_some(it))
        .collect())
}
