//! Fuzz target for type resolution.
//!
//! Tests that resolution never panics, strict or loose.

#![no_main]

use cardtype::CardClassifier;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let classifier = CardClassifier::shared();
    let _ = classifier.resolve_type(data);
    let _ = classifier.resolve_type_with(data, false);
});
