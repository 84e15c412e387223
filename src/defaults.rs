//! Built-in spec table and allowed-issuer ordering.
//!
//! Loose patterns are anchored at the start only, so partial input matches
//! as soon as the prefix is unambiguous. Strict patterns are anchored at
//! both ends and accept only lengths listed in the spec's `char_lengths`.
//!
//! Several real-world BIN ranges overlap across brands (Elo shares leading
//! digits with Visa, UnionPay and Discover). The ordering returned by
//! [`allowed_types`] decides those ties; callers that need different
//! precedence build a classifier with their own ordering.

use std::collections::HashMap;

use crate::issuer::IssuerType;
use crate::spec::CardSpec;

/// The built-in `IssuerType` to `CardSpec` table.
pub fn specs() -> HashMap<IssuerType, CardSpec> {
    HashMap::from([
        (
            IssuerType::Amex,
            CardSpec::new("^3[47]", "^3[47][0-9]{13}$", &[15], &[4, 6, 5], 4),
        ),
        (
            IssuerType::Visa,
            CardSpec::new("^4", "^4[0-9]{12}(?:[0-9]{3})?$", &[13, 16], &[4, 4, 4, 4], 3),
        ),
        (
            IssuerType::Mastercard,
            CardSpec::new(
                "^(?:5[1-5]|2[2-7])",
                "^(?:5[1-5][0-9]{2}|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}$",
                &[16],
                &[4, 4, 4, 4],
                3,
            ),
        ),
        (
            IssuerType::Discover,
            CardSpec::new(
                "^6(?:011|5|4[4-9])",
                "^6(?:011|5[0-9]{2}|4[4-9][0-9])[0-9]{12}$",
                &[16],
                &[4, 4, 4, 4],
                3,
            ),
        ),
        (
            IssuerType::DinersClub,
            CardSpec::new(
                "^3(?:0[0-5]|[68])",
                "^3(?:0[0-5]|[68][0-9])[0-9]{11}$",
                &[14],
                &[4, 6, 4],
                3,
            ),
        ),
        (
            IssuerType::Jcb,
            CardSpec::new(
                "^(?:2131|1800|35)",
                "^(?:2131[0-9]{11}|1800[0-9]{11}|35[0-9]{14})$",
                &[15, 16],
                &[4, 4, 4, 4],
                3,
            ),
        ),
        (
            IssuerType::UnionPay,
            CardSpec::new("^62", "^62[0-9]{14,17}$", &[16, 17, 18, 19], &[4, 4, 4, 4], 3),
        ),
        (
            IssuerType::Hiper,
            CardSpec::new(
                "^63(?:7095|7374|7433|7568|7599|7609|7612)",
                "^(?:637095[0-9]{10}|63737423[0-9]{8}|63743358[0-9]{8}|637568[0-9]{10}|637599[0-9]{10}|637609[0-9]{10}|637612[0-9]{10})$",
                &[16],
                &[4, 4, 4, 4],
                3,
            ),
        ),
        (
            IssuerType::Elo,
            CardSpec::new(
                "^(?:4011|4312|4389|4514|4573|4576|5041|5066|5067|509|6277|6362|6363|650|6516|6550)",
                "^(?:4011|4312|4389|4514|4573|4576|5041|5066|5067|509[0-9]|6277|6362|6363|6504|6505|6516|6550)[0-9]{12}$",
                &[16],
                &[4, 4, 4, 4],
                3,
            ),
        ),
    ])
}

/// The default allowed-issuer list, in resolution-priority order.
///
/// The order is the tie-break for overlapping prefixes: under it, Elo BINs
/// that begin with 4 resolve as Visa, 6277 as UnionPay and 65xx as
/// Discover.
pub fn allowed_types() -> Vec<IssuerType> {
    vec![
        IssuerType::Amex,
        IssuerType::Visa,
        IssuerType::Mastercard,
        IssuerType::Discover,
        IssuerType::DinersClub,
        IssuerType::Jcb,
        IssuerType::UnionPay,
        IssuerType::Hiper,
        IssuerType::Elo,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_allowed_type_has_a_spec() {
        let specs = specs();
        for issuer in allowed_types() {
            assert!(specs.contains_key(&issuer), "missing spec for {}", issuer);
        }
    }

    #[test]
    fn test_unsupported_has_no_spec() {
        assert!(!specs().contains_key(&IssuerType::Unsupported));
        assert!(!allowed_types().contains(&IssuerType::Unsupported));
    }

    #[test]
    fn test_grouping_sums_are_permitted_lengths() {
        for (issuer, spec) in specs() {
            let sum: usize = spec.char_grouping().iter().sum();
            assert!(
                spec.accepts_length(sum),
                "{} grouping sum {} not in {:?}",
                issuer,
                sum,
                spec.char_lengths()
            );
        }
    }

    #[test]
    fn test_cvc_lengths() {
        let specs = specs();
        assert_eq!(specs[&IssuerType::Amex].cvc_length(), 4);
        for issuer in allowed_types() {
            if issuer != IssuerType::Amex {
                assert_eq!(specs[&issuer].cvc_length(), 3, "{}", issuer);
            }
        }
    }
}
