use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use tracing::debug;
use tracing::instrument;

use crate::Error;
use crate::Result;

/// Write each path followed by a `\n` into `sink`, in order.
///
/// Paths are written byte for byte, nothing is escaped or
/// normalized.
///
/// # Errors
///
/// Whatever `sink` fails with.
pub fn write_lines<W, P>(
    sink: &mut W,
    paths: impl IntoIterator<Item = P>,
) -> std::io::Result<()>
where
    W: Write + ?Sized,
    P: AsRef<Path>,
{
    for path in paths {
        sink.write_all(path.as_ref().as_os_str().as_encoded_bytes())?;
        sink.write_all(b"\n")?;
    }
    Ok(())
}

/// Create or truncate `output` and write `paths` into it, one per line.
///
/// # Errors
///
/// When `output` can't be created or written.
#[instrument(skip(paths))]
pub fn store<P>(output: &Path, paths: &[P]) -> Result<()>
where
    P: AsRef<Path>,
{
    let file = File::create(output).map_err(Error::io(output))?;
    let mut writer = BufWriter::new(file);

    write_lines(&mut writer, paths).map_err(Error::io(output))?;
    writer.flush().map_err(Error::io(output))?;

    debug!(count = paths.len(), "stored file list");

    Ok(())
}
