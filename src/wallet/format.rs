/// Shorten an address for display: first 4 and last 4 characters.
///
/// Returns an empty string for `None` or an empty address. Addresses
/// shorter than 8 characters keep the same slicing, so head and tail
/// overlap (`"abc"` becomes `"abc...abc"`).
///
/// # Examples
/// ```
/// use daoscope::wallet::format_address;
///
/// assert_eq!(
///     format_address(Some("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU")),
///     "7xKX...gAsU"
/// );
/// assert_eq!(format_address(None), "");
/// ```
pub fn format_address(address: Option<&str>) -> String {
    let Some(address) = address else {
        return String::new();
    };

    if address.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = address.chars().collect();
    let head: String = chars[..chars.len().min(4)].iter().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mock_address() {
        assert_eq!(
            format_address(Some("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU")),
            "7xKX...gAsU"
        );
    }

    #[test]
    fn test_format_none() {
        assert_eq!(format_address(None), "");
    }

    #[test]
    fn test_format_empty_and_short() {
        assert_eq!(format_address(Some("")), "");
        assert_eq!(format_address(Some("abcdefgh")), "abcd...efgh");
        assert_eq!(format_address(Some("abcdefghi")), "abcd...fghi");
    }

    #[test]
    fn test_format_under_eight_chars_overlaps() {
        assert_eq!(format_address(Some("abcdef")), "abcd...cdef");
        assert_eq!(format_address(Some("abc")), "abc...abc");
        assert_eq!(format_address(Some("x")), "x...x");
    }

    #[test]
    fn test_format_multibyte() {
        assert_eq!(format_address(Some("ééééxxxxüüüü")), "éééé...üüüü");
    }
}
