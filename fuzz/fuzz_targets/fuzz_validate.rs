//! Fuzz target for card validation.
//!
//! Tests that validation never panics on arbitrary input, for every
//! configured issuer.

#![no_main]

use cardtype::CardClassifier;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let classifier = CardClassifier::shared();
    let _ = classifier.validate(data);
    for &issuer in classifier.allowed_types() {
        let _ = classifier.validate_for(data, issuer);
        let _ = classifier.validate_cvc(data, issuer);
    }
});
