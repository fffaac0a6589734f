// Lenient parsing of currency-formatted amount text.

/// Parses text such as "$1,234.56" into a number.
///
/// Every character other than an ASCII digit, '.' or '-' is dropped, then the
/// longest numeric prefix of what remains is read ("1.2.3" reads as 1.2,
/// "12-3" as 12). Anything without a digit in that prefix reads as 0.
///
/// Separators are not locale-aware: "1.234,56" reads as 1.23456.
pub fn parse_amount(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let prefix = numeric_prefix(&cleaned);
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

// Longest prefix shaped like `-?digits?(.digits?)?`, or "" when it holds no digit.
fn numeric_prefix(cleaned: &str) -> &str {
    let bytes = cleaned.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        ""
    } else {
        &cleaned[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_amount("1234.56"), 1234.56);
    }

    #[test]
    fn test_parse_symbol_and_thousands() {
        assert_eq!(parse_amount("$1,234.56"), 1234.56);
        assert_eq!(parse_amount("€ 600,822,115.84"), 600822115.84);
        assert_eq!(parse_amount("USD 1,000"), 1000.0);
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(parse_amount("-$45.10"), -45.10);
        assert_eq!(parse_amount("$-45.10"), -45.10);
    }

    #[test]
    fn test_parse_non_numeric_is_zero() {
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("N/A"), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("--5"), 0.0);
    }

    #[test]
    fn test_parse_takes_leading_number_only() {
        assert_eq!(parse_amount("1.2.3"), 1.2);
        assert_eq!(parse_amount("12-3"), 12.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("7."), 7.0);
    }

    #[test]
    fn test_parse_comma_decimal_is_not_locale_aware() {
        assert_eq!(parse_amount("1.234,56"), 1.23456);
    }
}
