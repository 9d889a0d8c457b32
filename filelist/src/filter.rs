use std::convert::Infallible;
use std::ffi::OsStr;
use std::str::FromStr;

/// File name filter written like a glob, e.g. `*.png`.
///
/// Only the part after the first character is used, and it is
/// matched as a plain suffix: `*.png` keeps every name ending in
/// `.png`, `?.png` does exactly the same, and `x_a.png` keeps names
/// ending in `_a.png`. There is no real pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuffixFilter {
    suffix: String,
}

impl SuffixFilter {
    /// Build the filter from a pattern, dropping its first character.
    #[must_use]
    pub fn from_pattern(pattern: &str) -> Self {
        let mut chars = pattern.chars();
        chars.next();
        Self {
            suffix: chars.as_str().to_owned(),
        }
    }

    /// The suffix names are tested against.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether `name` ends with the suffix. Compared byte-wise, so
    /// names which aren't valid UTF-8 still work.
    #[must_use]
    pub fn matches(&self, name: &OsStr) -> bool {
        name.as_encoded_bytes().ends_with(self.suffix.as_bytes())
    }
}

impl FromStr for SuffixFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_pattern(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, name: &str) -> bool {
        SuffixFilter::from_pattern(pattern).matches(OsStr::new(name))
    }

    #[test]
    fn drops_first_char() {
        assert_eq!(SuffixFilter::from_pattern("*.png").suffix(), ".png");
        assert_eq!(SuffixFilter::from_pattern("x.png").suffix(), ".png");
        assert_eq!(SuffixFilter::from_pattern("é.png").suffix(), ".png");
        assert_eq!(SuffixFilter::from_pattern("*").suffix(), "");
        assert_eq!(SuffixFilter::from_pattern("").suffix(), "");
    }

    #[test]
    fn plain_suffix_test() {
        assert!(matches("*.png", "1.png"));
        assert!(matches("*.png", ".png"));
        assert!(!matches("*.png", "1.jpg"));
        assert!(!matches("*.png", "1.PNG"));
        assert!(!matches("*.png", "1.png.bak"));
        // not a glob
        assert!(!matches("*.p?g", "1.png"));
        assert!(matches("*.p?g", "1.p?g"));
        assert!(matches("*_a.png", "x_a.png"));
    }

    #[test]
    fn empty_suffix_matches_everything() {
        assert!(matches("*", "anything"));
        assert!(matches("", "anything"));
        assert!(matches("", ""));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;
        let name = OsStr::from_bytes(b"\xff\xfe.png");
        assert!(SuffixFilter::from_pattern("*.png").matches(name));
        assert!(!SuffixFilter::from_pattern("*.jpg").matches(name));
    }
}
