//! # cardtype
//!
//! Payment card issuer classification and checksum validation.
//!
//! The crate answers two questions about a numeric string: which issuer
//! family does it belong to, and is it a well-formed, checksum-correct
//! number for that family. Classification runs off per-issuer specs (a
//! loose prefix pattern, a strict full-format pattern, permitted lengths,
//! display grouping, CVC length) tried in a configurable priority order;
//! validation adds a length check and the Luhn checksum.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardtype::{CardClassifier, IssuerType, luhn};
//!
//! let classifier = CardClassifier::shared();
//!
//! // Full numbers resolve strictly
//! assert_eq!(classifier.resolve_type("4111111111111111"), Some(IssuerType::Visa));
//! assert_eq!(classifier.resolve_type("378282246310005"), Some(IssuerType::Amex));
//!
//! // Loose matching identifies the issuer as the user types
//! assert_eq!(classifier.resolve_type_with("37", false), Some(IssuerType::Amex));
//! assert_eq!(classifier.resolve_type_with("37", true), None);
//!
//! // Validation = resolution + length + Luhn
//! assert!(classifier.validate("4111111111111111"));
//! assert!(!classifier.validate("4111111111111112"));
//!
//! // The Luhn check is also available standalone
//! assert!(luhn::validate("4111111111111111"));
//! ```
//!
//! ## Custom configuration
//!
//! The shared instance covers the common case; applications with their own
//! brand policy build an instance directly. Configuration is frozen at
//! construction, so a classifier always answers the same way for its whole
//! lifetime:
//!
//! ```rust
//! use cardtype::{defaults, CardClassifier, IssuerType};
//!
//! // Accept only Visa and Mastercard, in that priority order.
//! let classifier = CardClassifier::new(
//!     defaults::specs(),
//!     vec![IssuerType::Visa, IssuerType::Mastercard],
//! )
//! .unwrap();
//!
//! assert_eq!(classifier.resolve_type("4111111111111111"), Some(IssuerType::Visa));
//! assert_eq!(classifier.resolve_type("378282246310005"), None);
//! ```
//!
//! ## Matching semantics
//!
//! Input is matched exactly as supplied: no separator stripping, no
//! trimming. Loose patterns are anchored at the start only (prefix match),
//! strict patterns at both ends, and pattern evaluation is delegated to
//! the regex engine through the narrow [`PatternMatcher`] seam, which
//! tests can replace with a deterministic fake.
//!
//! ## Supported issuers
//!
//! | Issuer | Prefix | Length | CVC |
//! |--------|--------|--------|-----|
//! | American Express | 34, 37 | 15 | 4 |
//! | Visa | 4 | 13, 16 | 3 |
//! | Mastercard | 51-55, 2221-2720 | 16 | 3 |
//! | Discover | 6011, 644-649, 65 | 16 | 3 |
//! | Diners Club | 300-305, 36, 38 | 14 | 3 |
//! | JCB | 2131, 1800, 35 | 15, 16 | 3 |
//! | UnionPay | 62 | 16-19 | 3 |
//! | Hiper | 637095, 637568, ... | 16 | 3 |
//! | Elo | selected 4-digit BINs | 16 | 3 |
//!
//! Where BIN ranges overlap across brands, the allowed-issuer ordering
//! decides; see [`defaults::allowed_types`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod classifier;
pub mod defaults;
pub mod error;
pub mod format;
pub mod issuer;
pub mod luhn;
pub mod matcher;
pub mod spec;

// Re-export main types at crate root
pub use classifier::CardClassifier;
pub use error::ClassifierError;
pub use issuer::IssuerType;
pub use matcher::{PatternMatcher, RegexMatcher};
pub use spec::CardSpec;
