//! Display formatting for rates and currency amounts (en-US conventions).

use serde::Serialize;

use crate::salary::converter::SalaryBreakdown;

/// Formats an optional amount as US currency.
///
/// Whole amounts render without decimals, anything else with exactly two.
/// Missing or non-finite amounts render as `$0`.
pub fn format_currency(amount: Option<f64>) -> String {
    match amount {
        Some(a) if a.is_finite() => format_amount(a),
        _ => "$0".to_string(),
    }
}

/// `format_currency` for an amount that is known to be present.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }
    let sign = if amount < 0.0 && (amount.abs() * 100.0).round() > 0.0 {
        "-"
    } else {
        ""
    };
    format!("{sign}${}", format_number(amount.abs()))
}

/// Largest magnitude at which an f64 still resolves whole cents (2^53 / 100).
const CENT_PRECISION_LIMIT: f64 = 9_007_199_254_740_992.0 / 100.0;

/// Groups thousands and keeps two decimals only when there are cents: `2,080`, `173.33`.
///
/// Works from the shortest decimal form of the value, so amounts far beyond the integer
/// range still print every digit.
pub fn format_number(value: f64) -> String {
    let value = value.abs();
    let rounded = if value < CENT_PRECISION_LIMIT {
        (value * 100.0).round() / 100.0
    } else {
        value.round()
    };
    let text = rounded.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let whole = group_thousands(whole);
    match fraction {
        "" => whole,
        fraction => format!("{whole}.{fraction:0<2}"),
    }
}

/// Whole-dollar form of a rate for URLs: `24.6` is `25`, `1e20` keeps all its digits.
pub fn whole_dollars(rate: f64) -> String {
    let rounded = rate.round();
    if rounded == 0.0 {
        // Drops the sign of -0.
        return "0".to_string();
    }
    rounded.to_string()
}

/// A `SalaryBreakdown` with every amount passed through `format_amount`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedBreakdown {
    pub daily: String,
    pub weekly: String,
    pub biweekly: String,
    pub monthly: String,
    pub yearly: String,
}

impl FormattedBreakdown {
    /// Formats a breakdown that may be missing. Every amount of a missing one is `$0`.
    pub fn from_optional(breakdown: Option<&SalaryBreakdown>) -> Self {
        let amount = |pick: fn(&SalaryBreakdown) -> f64| format_currency(breakdown.map(pick));
        Self {
            daily: amount(|b| b.daily),
            weekly: amount(|b| b.weekly),
            biweekly: amount(|b| b.biweekly),
            monthly: amount(|b| b.monthly),
            yearly: amount(|b| b.yearly),
        }
    }
}

impl From<&SalaryBreakdown> for FormattedBreakdown {
    fn from(b: &SalaryBreakdown) -> Self {
        Self {
            daily: format_amount(b.daily),
            weekly: format_amount(b.weekly),
            biweekly: format_amount(b.biweekly),
            monthly: format_amount(b.monthly),
            yearly: format_amount(b.yearly),
        }
    }
}

/// Renders an hourly rate for headlines: `30`, `13.5`, `24.04`.
pub fn display_rate(rate: f64) -> String {
    trim_decimal(rate)
}

/// Renders a yearly amount in thousands for the `$50k a year` headline form.
pub fn thousands(amount: f64) -> String {
    format!("{}k", trim_decimal(amount / 1000.0))
}

/// Rounds to two decimal places and drops trailing zeros.
fn trim_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        return value.to_string();
    }
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amount_has_no_decimals() {
        assert_eq!(format_currency(Some(50_000.0)), "$50,000");
        assert_eq!(format_currency(Some(240.0)), "$240");
    }

    #[test]
    fn test_fractional_amount_has_two_decimals() {
        assert_eq!(format_currency(Some(38.46)), "$38.46");
        assert_eq!(format_currency(Some(38.5)), "$38.50");
        assert_eq!(format_currency(Some(1_234_567.891)), "$1,234,567.89");
    }

    #[test]
    fn test_missing_amount_is_zero() {
        assert_eq!(format_currency(None), "$0");
        assert_eq!(format_currency(Some(f64::NAN)), "$0");
    }

    #[test]
    fn test_rounding_to_whole_cents_drops_decimals() {
        assert_eq!(format_currency(Some(79_999.999)), "$80,000");
    }

    #[test]
    fn test_negative_amount_keeps_sign() {
        assert_eq!(format_currency(Some(-1500.0)), "-$1,500");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2080.0), "2,080");
        assert_eq!(format_number(173.33), "173.33");
        assert_eq!(format_number(40.0), "40");
    }

    #[test]
    fn test_grouping_boundaries() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("100000"), "100,000");
        assert_eq!(group_thousands("1000000"), "1,000,000");
    }

    #[test]
    fn test_huge_amounts_keep_every_digit() {
        assert_eq!(format_amount(2.08e23), "$208,000,000,000,000,000,000,000");
        assert_eq!(format_amount(1e20), "$100,000,000,000,000,000,000");
        assert_eq!(format_amount(-4e18), "-$4,000,000,000,000,000,000");
        assert_eq!(format_number(12_345_678_901.25), "12,345,678,901.25");
    }

    #[test]
    fn test_whole_dollars() {
        assert_eq!(whole_dollars(24.6), "25");
        assert_eq!(whole_dollars(13.5), "14");
        assert_eq!(whole_dollars(-0.4), "0");
        assert_eq!(whole_dollars(-5.0), "-5");
        assert_eq!(whole_dollars(1e20), "100000000000000000000");
    }

    #[test]
    fn test_from_optional() {
        let missing = FormattedBreakdown::from_optional(None);
        assert_eq!(missing.daily, "$0");
        assert_eq!(missing.yearly, "$0");

        let b = SalaryBreakdown {
            daily: 200.0,
            weekly: 1000.0,
            biweekly: 2000.0,
            monthly: 4333.333,
            yearly: 52000.0,
        };
        assert_eq!(
            FormattedBreakdown::from_optional(Some(&b)),
            FormattedBreakdown::from(&b)
        );
    }

    #[test]
    fn test_formatted_breakdown() {
        let b = SalaryBreakdown {
            daily: 200.0,
            weekly: 1000.0,
            biweekly: 2000.0,
            monthly: 4333.333,
            yearly: 52000.0,
        };
        let f = FormattedBreakdown::from(&b);
        assert_eq!(f.weekly, "$1,000");
        assert_eq!(f.monthly, "$4,333.33");
        assert_eq!(f.yearly, "$52,000");
    }

    #[test]
    fn test_display_rate() {
        assert_eq!(display_rate(30.0), "30");
        assert_eq!(display_rate(13.5), "13.5");
        assert_eq!(display_rate(50_000.0 / 2080.0), "24.04");
        assert_eq!(display_rate(9.999), "10");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(50_000.0), "50k");
        assert_eq!(thousands(62_400.0), "62.4k");
        assert_eq!(thousands(80_000.000_000_01), "80k");
    }
}
