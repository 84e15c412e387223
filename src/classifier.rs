//! Issuer resolution and card number validation.
//!
//! A [`CardClassifier`] pairs a spec table with an ordered allowed-issuer
//! list. Both are frozen at construction, so one instance answers every
//! query identically for its whole lifetime and can be shared across
//! threads freely.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::defaults;
use crate::error::ClassifierError;
use crate::format;
use crate::issuer::IssuerType;
use crate::luhn;
use crate::matcher::{PatternMatcher, RegexMatcher};
use crate::spec::CardSpec;

static SHARED: Lazy<CardClassifier> = Lazy::new(|| {
    CardClassifier::new(defaults::specs(), defaults::allowed_types())
        .expect("built-in card specs compile and are self-consistent")
});

/// Classifies card number strings against a fixed set of issuer specs.
///
/// Resolution walks the allowed issuers in their declared order and returns
/// the first whose pattern matches: the ordering is the tie-break when
/// prefixes overlap, and callers control it by constructing the classifier
/// with their own list.
///
/// Input is matched exactly as supplied. The classifier performs no
/// normalization, so strip spaces and dashes before calling if your input
/// carries them.
///
/// # Example
///
/// ```
/// use cardtype::{CardClassifier, IssuerType};
///
/// let classifier = CardClassifier::shared();
///
/// assert_eq!(classifier.resolve_type("4111111111111111"), Some(IssuerType::Visa));
/// assert_eq!(classifier.resolve_type_with("4", false), Some(IssuerType::Visa));
/// assert!(classifier.validate("4111111111111111"));
/// assert!(!classifier.validate("4111111111111112"));
/// ```
pub struct CardClassifier {
    specs: HashMap<IssuerType, CardSpec>,
    allowed_types: Vec<IssuerType>,
    matcher: Box<dyn PatternMatcher>,
}

impl CardClassifier {
    /// Builds a classifier over `specs` with resolution priority
    /// `allowed_types`, matching through the regex engine.
    ///
    /// Every pattern in the table is compiled here, once; resolution and
    /// validation never compile anything afterwards. Construction fails if
    /// a pattern does not compile, if an allowed issuer has no spec, or if
    /// a spec's grouping sum falls outside its non-empty length set.
    pub fn new(
        specs: HashMap<IssuerType, CardSpec>,
        allowed_types: Vec<IssuerType>,
    ) -> Result<Self, ClassifierError> {
        let mut matcher = RegexMatcher::new();
        for (&issuer, spec) in &specs {
            for pattern in [spec.pattern(), spec.pattern_strict()] {
                matcher
                    .precompile(pattern)
                    .map_err(|e| ClassifierError::InvalidPattern {
                        issuer,
                        pattern: pattern.to_owned(),
                        message: e.to_string(),
                    })?;
            }
        }
        Self::with_matcher(specs, allowed_types, matcher)
    }

    /// Builds a classifier with a caller-supplied [`PatternMatcher`].
    ///
    /// This is the seam for substituting a deterministic matcher in tests.
    /// The same structural checks as [`CardClassifier::new`] apply; pattern
    /// compilation is the matcher's concern and is not attempted here.
    pub fn with_matcher<M>(
        specs: HashMap<IssuerType, CardSpec>,
        allowed_types: Vec<IssuerType>,
        matcher: M,
    ) -> Result<Self, ClassifierError>
    where
        M: PatternMatcher + 'static,
    {
        for &issuer in &allowed_types {
            if !specs.contains_key(&issuer) {
                return Err(ClassifierError::MissingSpec { issuer });
            }
        }

        for (&issuer, spec) in &specs {
            if spec.char_grouping().is_empty() || spec.char_lengths().is_empty() {
                continue;
            }
            let grouping_sum: usize = spec.char_grouping().iter().sum();
            if !spec.accepts_length(grouping_sum) {
                return Err(ClassifierError::GroupingMismatch {
                    issuer,
                    grouping_sum,
                    char_lengths: spec.char_lengths().to_vec(),
                });
            }
        }

        Ok(Self {
            specs,
            allowed_types,
            matcher: Box::new(matcher),
        })
    }

    /// The process-wide classifier over the built-in tables.
    ///
    /// Built once on first use; later calls return the same instance.
    pub fn shared() -> &'static CardClassifier {
        &SHARED
    }

    /// The spec registered for `issuer`, if any.
    #[inline]
    pub fn spec_for(&self, issuer: IssuerType) -> Option<&CardSpec> {
        self.specs.get(&issuer)
    }

    /// The allowed issuers in resolution-priority order.
    #[inline]
    pub fn allowed_types(&self) -> &[IssuerType] {
        &self.allowed_types
    }

    /// Returns the matching pattern registered for `issuer`: the strict
    /// full-format pattern when `strict` is true, the loose prefix pattern
    /// otherwise.
    ///
    /// # Panics
    ///
    /// Panics if no spec is registered for `issuer`. Asking for the pattern
    /// of an unconfigured issuer is a setup bug, not bad user input;
    /// construction guarantees every allowed issuer has a spec, so
    /// resolution itself can never trip this.
    pub fn pattern_for(&self, issuer: IssuerType, strict: bool) -> &str {
        let spec = self
            .specs
            .get(&issuer)
            .unwrap_or_else(|| panic!("no card spec configured for {issuer}"));
        if strict {
            spec.pattern_strict()
        } else {
            spec.pattern()
        }
    }

    /// Resolves `input` to an issuer using strict patterns.
    ///
    /// Equivalent to `resolve_type_with(input, true)`.
    #[inline]
    pub fn resolve_type(&self, input: &str) -> Option<IssuerType> {
        self.resolve_type_with(input, true)
    }

    /// Resolves `input` to an issuer.
    ///
    /// Walks the allowed issuers in order and returns the first whose
    /// pattern (strict or loose, per the flag) matches. `None` means no
    /// allowed issuer matched; that is an ordinary outcome, distinct from
    /// [`IssuerType::Unsupported`], which is a real issuer value reserved
    /// for permissive configurations.
    ///
    /// Loose matching is what powers as-you-type hinting: `"4"` already
    /// resolves to Visa, while strict matching requires the complete
    /// number.
    pub fn resolve_type_with(&self, input: &str, strict: bool) -> Option<IssuerType> {
        self.allowed_types
            .iter()
            .copied()
            .find(|&issuer| self.matcher.is_match(self.pattern_for(issuer, strict), input))
    }

    /// Validates `input` as a complete card number, inferring the issuer.
    ///
    /// The issuer is resolved with strict patterns first; an unresolvable
    /// input fails outright. Otherwise this is `validate_for` with the
    /// resolved issuer.
    pub fn validate(&self, input: &str) -> bool {
        match self.resolve_type(input) {
            Some(issuer) => self.validate_for(input, issuer),
            None => false,
        }
    }

    /// Validates `input` as a complete card number for a known issuer.
    ///
    /// Three checks, all of which must pass: a spec exists for `issuer`;
    /// the digit count is one of the spec's permitted lengths (skipped when
    /// the spec declares none); and the Luhn checksum holds. The result is
    /// a plain boolean with no partial-success states; callers that need
    /// the failing check re-run the pieces individually.
    pub fn validate_for(&self, input: &str, issuer: IssuerType) -> bool {
        let Some(spec) = self.specs.get(&issuer) else {
            return false;
        };

        let digit_count = input.chars().filter(|c| c.is_ascii_digit()).count();
        if !spec.accepts_length(digit_count) {
            return false;
        }

        luhn::validate(input)
    }

    /// Validates a security code against `issuer`'s expected CVC length.
    ///
    /// The code must be exactly the spec's declared number of ASCII digits.
    /// False for an unconfigured issuer.
    pub fn validate_cvc(&self, input: &str, issuer: IssuerType) -> bool {
        let Some(spec) = self.specs.get(&issuer) else {
            return false;
        };
        input.len() == spec.cvc_length() && input.bytes().all(|b| b.is_ascii_digit())
    }

    /// Formats the digits of `input` with `issuer`'s display grouping.
    ///
    /// Display only; the output of this function is not valid classifier
    /// input without stripping the separators again. An unconfigured issuer
    /// yields the bare digits.
    pub fn format_number(&self, input: &str, issuer: IssuerType) -> String {
        match self.specs.get(&issuer) {
            Some(spec) => format::group_digits(input, spec.char_grouping(), " "),
            None => format::group_digits(input, &[], " "),
        }
    }
}

impl std::fmt::Debug for CardClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardClassifier")
            .field("allowed_types", &self.allowed_types)
            .field("specs", &self.specs.len())
            .finish()
    }
}
