//! Issuer identification for payment card networks.
//!
//! `IssuerType` is the closed set of card families the classifier knows
//! about. Variant order matters: it is the default resolution priority used
//! when prefix patterns overlap (see [`crate::defaults::allowed_types`]).

use std::fmt;

/// A payment-card issuer family.
///
/// The concrete variants are listed in default resolution-priority order.
/// [`IssuerType::Unsupported`] is a reserved value for cards that pass the
/// generic checks (Luhn, length) without matching any configured brand
/// pattern; no spec is registered for it by default, so it only becomes
/// meaningful in permissive flows where a caller registers one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IssuerType {
    /// American Express - prefix 34, 37, length 15
    Amex,
    /// Visa - prefix 4, lengths 13, 16
    Visa,
    /// Mastercard - prefix 51-55, 2221-2720, length 16
    Mastercard,
    /// Discover - prefix 6011, 644-649, 65, length 16
    Discover,
    /// Diners Club - prefix 300-305, 36, 38, length 14
    DinersClub,
    /// JCB - prefix 2131, 1800, 35, lengths 15, 16
    Jcb,
    /// UnionPay - prefix 62, lengths 16-19
    UnionPay,
    /// Hiper - Brazilian network, prefix 637095 and friends, length 16
    Hiper,
    /// Elo - Brazilian network, assorted 4-digit prefixes, length 16
    Elo,
    /// Passed basic checks but matched no configured brand.
    Unsupported,
}

impl IssuerType {
    /// Every issuer value, concrete brands first, in priority order.
    pub const ALL: [IssuerType; 10] = [
        Self::Amex,
        Self::Visa,
        Self::Mastercard,
        Self::Discover,
        Self::DinersClub,
        Self::Jcb,
        Self::UnionPay,
        Self::Hiper,
        Self::Elo,
        Self::Unsupported,
    ];

    /// Returns a human-readable name for the issuer.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Amex => "American Express",
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Discover => "Discover",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::UnionPay => "UnionPay",
            Self::Hiper => "Hiper",
            Self::Elo => "Elo",
            Self::Unsupported => "Unsupported",
        }
    }

    /// Looks an issuer up by its exact display name.
    ///
    /// The lookup is exact-match only: no trimming, no case folding, no
    /// substrings. It is independent of any classifier configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtype::IssuerType;
    ///
    /// assert_eq!(IssuerType::from_name("Visa"), Some(IssuerType::Visa));
    /// assert_eq!(IssuerType::from_name("visa"), None);
    /// assert_eq!(IssuerType::from_name("Vis"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<IssuerType> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }
}

impl fmt::Display for IssuerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(IssuerType::Amex.name(), "American Express");
        assert_eq!(IssuerType::DinersClub.name(), "Diners Club");
        assert_eq!(IssuerType::Jcb.to_string(), "JCB");
    }

    #[test]
    fn test_from_name_exact_match() {
        for issuer in IssuerType::ALL {
            assert_eq!(IssuerType::from_name(issuer.name()), Some(issuer));
        }
    }

    #[test]
    fn test_from_name_rejects_near_misses() {
        assert_eq!(IssuerType::from_name("VISA"), None);
        assert_eq!(IssuerType::from_name("Visa "), None);
        assert_eq!(IssuerType::from_name("American"), None);
        assert_eq!(IssuerType::from_name(""), None);
    }

    #[test]
    fn test_priority_order_is_stable() {
        // Amex resolves before Visa, Visa before everything 5x/6x.
        assert_eq!(IssuerType::ALL[0], IssuerType::Amex);
        assert_eq!(IssuerType::ALL[1], IssuerType::Visa);
        assert_eq!(IssuerType::ALL[9], IssuerType::Unsupported);
    }

    #[test]
    fn test_issuer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IssuerType>();
    }
}
