//! The pattern-matching seam between classification policy and the regex
//! engine.
//!
//! The classifier owns pattern *selection* (which issuer's pattern to try,
//! in what order); whether a candidate string matches a given pattern is
//! delegated through [`PatternMatcher`]. Production code uses
//! [`RegexMatcher`]; tests can plug in a deterministic fake to exercise
//! resolution policy without a regex engine in the loop.

use std::collections::HashMap;

use regex::Regex;

/// Answers "does `candidate` match `pattern`?" for the classifier.
///
/// Anchoring semantics are the pattern author's responsibility: strict
/// patterns carry `^...$`, loose patterns carry only `^`, and
/// implementations must evaluate the pattern text as authored.
pub trait PatternMatcher: Send + Sync {
    /// Tests `candidate` against `pattern`.
    fn is_match(&self, pattern: &str, candidate: &str) -> bool;
}

/// [`PatternMatcher`] backed by the `regex` crate.
///
/// Patterns are compiled once, up front, via [`RegexMatcher::precompile`];
/// matching then only reads the compiled map, so a populated matcher is
/// safe to share across threads. A pattern that was never precompiled is
/// compiled on the fly per call and, if it fails to compile, treated as a
/// non-match; classifiers precompile their entire spec table during
/// construction so neither slow path is reachable through them.
#[derive(Debug, Default)]
pub struct RegexMatcher {
    compiled: HashMap<String, Regex>,
}

impl RegexMatcher {
    /// Creates an empty matcher with no compiled patterns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles `pattern` and caches it for later [`is_match`] calls.
    ///
    /// [`is_match`]: PatternMatcher::is_match
    pub fn precompile(&mut self, pattern: &str) -> Result<(), regex::Error> {
        if !self.compiled.contains_key(pattern) {
            let regex = Regex::new(pattern)?;
            self.compiled.insert(pattern.to_owned(), regex);
        }
        Ok(())
    }

    /// Number of distinct compiled patterns.
    #[inline]
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    /// True if no patterns have been compiled yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}

impl PatternMatcher for RegexMatcher {
    fn is_match(&self, pattern: &str, candidate: &str) -> bool {
        match self.compiled.get(pattern) {
            Some(regex) => regex.is_match(candidate),
            None => match Regex::new(pattern) {
                Ok(regex) => regex.is_match(candidate),
                Err(_) => false,
            },
        }
    }
}
