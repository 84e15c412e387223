//! Per-issuer card format descriptions.

/// The format rules for a single issuer family.
///
/// A `CardSpec` is a pure value: construct it once, read it forever. The
/// classifier never mutates specs after construction, which is what makes
/// concurrent resolution safe without locking.
///
/// Two patterns are carried per issuer. The loose `pattern` is anchored at
/// the start only and matches partial input, enough to guess the issuer
/// while the user is still typing. The strict `pattern_strict` is anchored
/// at both ends and accepts only a complete, correctly shaped number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardSpec {
    pattern: String,
    pattern_strict: String,
    char_lengths: Vec<usize>,
    char_grouping: Vec<usize>,
    cvc_length: usize,
}

impl CardSpec {
    /// Creates a spec from its five format rules.
    ///
    /// `char_lengths` lists the permitted total digit counts; leave it
    /// empty to skip length checking entirely. `char_grouping` is a
    /// display-only segmentation (e.g. `[4, 4, 4, 4]`) and never affects
    /// validation. Cross-field consistency (grouping sums vs. lengths,
    /// pattern compilability) is checked when a classifier is built from
    /// the spec, not here.
    pub fn new(
        pattern: &str,
        pattern_strict: &str,
        char_lengths: &[usize],
        char_grouping: &[usize],
        cvc_length: usize,
    ) -> Self {
        Self {
            pattern: pattern.to_owned(),
            pattern_strict: pattern_strict.to_owned(),
            char_lengths: char_lengths.to_vec(),
            char_grouping: char_grouping.to_vec(),
            cvc_length,
        }
    }

    /// The loose, prefix-style pattern.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The strict, full-format pattern.
    #[inline]
    pub fn pattern_strict(&self) -> &str {
        &self.pattern_strict
    }

    /// Permitted total digit counts. Empty means unconstrained.
    #[inline]
    pub fn char_lengths(&self) -> &[usize] {
        &self.char_lengths
    }

    /// Display grouping of digits, e.g. `[4, 6, 5]` for Amex.
    #[inline]
    pub fn char_grouping(&self) -> &[usize] {
        &self.char_grouping
    }

    /// Expected security-code digit count.
    #[inline]
    pub const fn cvc_length(&self) -> usize {
        self.cvc_length
    }

    /// Returns true if `len` is a permitted digit count for this spec.
    ///
    /// An empty `char_lengths` set accepts every length.
    #[inline]
    pub fn accepts_length(&self, len: usize) -> bool {
        self.char_lengths.is_empty() || self.char_lengths.contains(&len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visa_like() -> CardSpec {
        CardSpec::new("^4", "^4[0-9]{12}(?:[0-9]{3})?$", &[13, 16], &[4, 4, 4, 4], 3)
    }

    #[test]
    fn test_accessors() {
        let spec = visa_like();
        assert_eq!(spec.pattern(), "^4");
        assert_eq!(spec.pattern_strict(), "^4[0-9]{12}(?:[0-9]{3})?$");
        assert_eq!(spec.char_lengths(), &[13, 16]);
        assert_eq!(spec.char_grouping(), &[4, 4, 4, 4]);
        assert_eq!(spec.cvc_length(), 3);
    }

    #[test]
    fn test_accepts_length_membership() {
        let spec = visa_like();
        assert!(spec.accepts_length(13));
        assert!(spec.accepts_length(16));
        assert!(!spec.accepts_length(15));
        assert!(!spec.accepts_length(0));
    }

    #[test]
    fn test_empty_lengths_accept_everything() {
        let spec = CardSpec::new("^9", "^9[0-9]*$", &[], &[4, 4], 3);
        assert!(spec.accepts_length(1));
        assert!(spec.accepts_length(40));
    }
}
