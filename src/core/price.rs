use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to cents using the half-away-from-zero rule.
#[must_use]
pub fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Formats a price as US dollars, e.g. `$1,234.50`.
#[must_use]
pub fn format_price_usd(value: Decimal) -> String {
    let rounded = round_to_cents(value);
    let text = rounded.abs().to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}

/// Normalizes free-form price text (`"$ 12.5"`, `"USD 9"`) to two decimals.
///
/// Everything except digits and dots is discarded and the longest numeric
/// prefix is used, so `"1.2.3"` reads as `1.2`. Returns `None` when no digits
/// remain.
#[must_use]
pub fn normalize_price_text(text: &str) -> Option<String> {
    let filtered: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut numeric = String::with_capacity(filtered.len());
    let mut seen_dot = false;
    for c in filtered.chars() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        numeric.push(c);
    }

    if !numeric.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    if numeric.starts_with('.') {
        numeric.insert(0, '0');
    }
    if numeric.ends_with('.') {
        numeric.pop();
    }

    let value = Decimal::from_str(&numeric).ok()?;
    Some(round_to_cents(value).to_string())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{format_price_usd, normalize_price_text};

    #[test]
    fn usd_groups_thousands_and_pads_cents() {
        assert_eq!(format_price_usd(Decimal::new(123_450, 2)), "$1,234.50");
        assert_eq!(format_price_usd(Decimal::new(5, 0)), "$5.00");
        assert_eq!(format_price_usd(Decimal::new(-1_999, 3)), "-$2.00");
        assert_eq!(format_price_usd(Decimal::new(1_000_000, 0)), "$1,000,000.00");
    }

    #[test]
    fn price_text_is_cleaned_and_rounded() {
        assert_eq!(normalize_price_text("$ 12.5").as_deref(), Some("12.50"));
        assert_eq!(normalize_price_text("USD 9").as_deref(), Some("9.00"));
        assert_eq!(normalize_price_text("1.2.3").as_deref(), Some("1.20"));
        assert_eq!(normalize_price_text("19.999").as_deref(), Some("20.00"));
        assert_eq!(normalize_price_text(".5").as_deref(), Some("0.50"));
        assert_eq!(normalize_price_text("n/a"), None);
    }
}
