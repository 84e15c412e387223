//! Display grouping for card numbers.
//!
//! Grouping is presentation only. Nothing here feeds back into resolution
//! or validation; the classifier matches input exactly as the caller
//! supplies it.

/// Groups the digits of `input` per `grouping`, joined by `separator`.
///
/// Non-digit characters in the input are dropped before grouping (this is
/// a display helper, so it re-formats already-separated numbers too).
/// Digits beyond the grouping layout are appended as one trailing group;
/// an empty layout yields the bare digits.
///
/// # Example
///
/// ```
/// use cardtype::format::group_digits;
///
/// assert_eq!(group_digits("4111111111111111", &[4, 4, 4, 4], " "), "4111 1111 1111 1111");
/// assert_eq!(group_digits("378282246310005", &[4, 6, 5], " "), "3782 822463 10005");
/// assert_eq!(group_digits("4111-1111", &[4, 4, 4, 4], " "), "4111 1111");
/// ```
pub fn group_digits(input: &str, grouping: &[usize], separator: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return String::new();
    }

    let mut result = String::with_capacity(digits.len() + grouping.len() * separator.len());
    let mut pos = 0;

    for &size in grouping {
        if pos >= digits.len() {
            break;
        }
        if pos > 0 {
            result.push_str(separator);
        }
        let end = (pos + size).min(digits.len());
        result.extend(&digits[pos..end]);
        pos = end;
    }

    if pos < digits.len() {
        if pos > 0 {
            result.push_str(separator);
        }
        result.extend(&digits[pos..]);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visa_grouping() {
        assert_eq!(
            group_digits("4111111111111111", &[4, 4, 4, 4], " "),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_amex_grouping() {
        assert_eq!(
            group_digits("378282246310005", &[4, 6, 5], " "),
            "3782 822463 10005"
        );
    }

    #[test]
    fn test_diners_grouping() {
        assert_eq!(
            group_digits("30569309025904", &[4, 6, 4], " "),
            "3056 930902 5904"
        );
    }

    #[test]
    fn test_partial_input_groups_what_exists() {
        assert_eq!(group_digits("41111", &[4, 4, 4, 4], " "), "4111 1");
        assert_eq!(group_digits("4111", &[4, 4, 4, 4], " "), "4111");
        assert_eq!(group_digits("41", &[4, 4, 4, 4], " "), "41");
    }

    #[test]
    fn test_overflow_digits_become_trailing_group() {
        // 19 digits against a 16-digit layout
        assert_eq!(
            group_digits("6212345678901234567", &[4, 4, 4, 4], " "),
            "6212 3456 7890 1234 567"
        );
    }

    #[test]
    fn test_reformats_separated_input() {
        assert_eq!(
            group_digits("4111-1111-1111-1111", &[4, 4, 4, 4], " "),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(
            group_digits("4111111111111111", &[4, 4, 4, 4], "-"),
            "4111-1111-1111-1111"
        );
    }

    #[test]
    fn test_empty_layout_and_empty_input() {
        assert_eq!(group_digits("4111", &[], " "), "4111");
        assert_eq!(group_digits("", &[4, 4], " "), "");
        assert_eq!(group_digits("----", &[4, 4], " "), "");
    }
}
