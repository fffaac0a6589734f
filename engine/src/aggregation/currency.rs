// Currency display formatting, fixed to en-US conventions so output never
// depends on the host locale.
use rust_decimal::prelude::*;

const NO_BREAK_SPACE: char = '\u{a0}';

struct CurrencyStyle {
    code: &'static str,
    symbol: &'static str,
    fraction_digits: usize,
}

const fn style(code: &'static str, symbol: &'static str, fraction_digits: usize) -> CurrencyStyle {
    CurrencyStyle { code, symbol, fraction_digits }
}

// en-US symbols. Codes missing here render as "CODE 1,000.00".
const KNOWN_CURRENCIES: &[CurrencyStyle] = &[
    style("USD", "$", 2),
    style("EUR", "€", 2),
    style("GBP", "£", 2),
    style("JPY", "¥", 0),
    style("INR", "₹", 2),
    style("CAD", "CA$", 2),
    style("AUD", "A$", 2),
    style("CNY", "CN¥", 2),
    style("MXN", "MX$", 2),
    style("BRL", "R$", 2),
    style("KRW", "₩", 0),
    style("HKD", "HK$", 2),
    style("NZD", "NZ$", 2),
    style("ILS", "₪", 2),
    style("TWD", "NT$", 2),
    style("PHP", "₱", 2),
    style("VND", "₫", 0),
];

const DEFAULT_FRACTION_DIGITS: usize = 2;

/// Formats `amount` for display in `currency_code`, e.g. `1000.0, "USD"` as "$1,000.00".
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    let code = currency_code.trim().to_uppercase();
    let known = KNOWN_CURRENCIES.iter().find(|c| c.code == code);

    let prefix = match known {
        Some(currency) => currency.symbol.to_string(),
        None if code.is_empty() => String::new(),
        None => format!("{}{}", code, NO_BREAK_SPACE),
    };
    let fraction_digits = known.map_or(DEFAULT_FRACTION_DIGITS, |c| c.fraction_digits);

    if !amount.is_finite() {
        let magnitude = if amount.is_nan() { "NaN" } else { "∞" };
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}{}", sign, prefix, magnitude);
    }

    let rounded = round_half_away_from_zero(amount.abs(), fraction_digits);
    let (integer_part, fraction_part) = match rounded.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (rounded.as_str(), None),
    };

    let rounds_to_zero = rounded.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if amount < 0.0 && !rounds_to_zero { "-" } else { "" };

    let mut formatted = format!("{}{}{}", sign, prefix, group_thousands(integer_part));
    if let Some(frac) = fraction_part {
        formatted.push('.');
        formatted.push_str(frac);
    }
    formatted
}

// Exact ties round away from zero, as en-US currency display does. The binary
// value is kept as is, so 1.005 (really 1.00499..) still rounds down.
fn round_half_away_from_zero(magnitude: f64, fraction_digits: usize) -> String {
    match Decimal::from_f64_retain(magnitude) {
        Some(value) => {
            let rounded = value.round_dp_with_strategy(fraction_digits as u32, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", fraction_digits, rounded)
        }
        // Beyond Decimal's range; only ties could differ and none survive at that magnitude.
        None => format!("{:.*}", fraction_digits, magnitude),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_currency(1000.0, "USD"), "$1,000.00");
        assert_eq!(format_currency(300.0, "USD"), "$300.00");
        assert_eq!(format_currency(0.0, "USD"), "$0.00");
        assert_eq!(format_currency(1234567.891, "USD"), "$1,234,567.89");
    }

    #[test]
    fn test_format_other_symbols() {
        assert_eq!(format_currency(1234.5, "EUR"), "€1,234.50");
        assert_eq!(format_currency(99.99, "GBP"), "£99.99");
        assert_eq!(format_currency(2500.0, "CAD"), "CA$2,500.00");
    }

    #[test]
    fn test_format_zero_decimal_currencies() {
        assert_eq!(format_currency(1234.4, "JPY"), "¥1,234");
        assert_eq!(format_currency(1000000.0, "KRW"), "₩1,000,000");
    }

    #[test]
    fn test_format_code_is_case_insensitive() {
        assert_eq!(format_currency(5.0, "usd"), "$5.00");
    }

    #[test]
    fn test_format_unknown_code_uses_code_prefix() {
        assert_eq!(format_currency(1000.0, "CHF"), "CHF\u{a0}1,000.00");
        assert_eq!(format_currency(12.0, ""), "12.00");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_currency(-1500.25, "USD"), "-$1,500.25");
        assert_eq!(format_currency(-0.001, "USD"), "$0.00");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_currency(f64::INFINITY, "USD"), "$∞");
        assert_eq!(format_currency(f64::NEG_INFINITY, "EUR"), "-€∞");
    }

    #[test]
    fn test_format_exact_half_rounds_away_from_zero() {
        assert_eq!(format_currency(0.125, "USD"), "$0.13");
        assert_eq!(format_currency(-0.125, "USD"), "-$0.13");
        assert_eq!(format_currency(2.5, "JPY"), "¥3");
        assert_eq!(format_currency(1234.5, "KRW"), "₩1,235");
    }

    #[test]
    fn test_format_near_half_follows_binary_value() {
        // 1.005 is stored as 1.00499..
        assert_eq!(format_currency(1.005, "USD"), "$1.00");
        assert_eq!(format_currency(600822115.84, "USD"), "$600,822,115.84");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
