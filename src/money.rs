//! Currency text helpers.
//!
//! Amounts are displayed as `$` followed by a thousands-separated value with two decimals, e.g.
//! `$12,500.00`. The same text is parsed back when a table total is computed, so parsing accepts
//! anything [`format_money`] produces plus bare numbers.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Outcome of parsing a currency cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsedAmount {
    /// The cell held a number once `$` and `,` were stripped.
    Value(Decimal),
    /// The cell held something else, e.g. a column header or `N/A`.
    Unparsable,
}

impl ParsedAmount {
    /// Returns the parsed value, if any.
    pub fn value(self) -> Option<Decimal> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unparsable => None,
        }
    }
}

/// Parses currency text by removing every `$` and `,` and reading the remainder as a decimal.
pub fn parse_amount(text: &str) -> ParsedAmount {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    if cleaned.is_empty() {
        return ParsedAmount::Unparsable;
    }

    match Decimal::from_str(&cleaned) {
        Ok(value) => ParsedAmount::Value(value),
        Err(_) => ParsedAmount::Unparsable,
    }
}

/// Formats a value as currency text: `$1,234.56`, or `-$1,234.56` for negative values.
pub fn format_money(value: impl Into<Decimal>) -> String {
    let value = value.into().round_dp(2);
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    let magnitude = value.abs().to_f64().unwrap_or_default();
    format!("{sign}${}", format_num::format_num!(",.2f", magnitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_separators_and_cents() {
        assert_eq!(format_money(0), "$0.00");
        assert_eq!(format_money(1), "$1.00");
        assert_eq!(format_money(1000), "$1,000.00");
        assert_eq!(format_money(500_000), "$500,000.00");
        assert_eq!(format_money(1_234_567), "$1,234,567.00");
    }

    #[test]
    fn formats_negative_values_with_leading_sign() {
        assert_eq!(format_money(-2500), "-$2,500.00");
    }

    #[test]
    fn formatted_integers_parse_back() {
        for n in [0i64, 1, 1000, 500_000] {
            let text = format_money(n);
            assert_eq!(parse_amount(&text), ParsedAmount::Value(Decimal::from(n)), "{text}");
        }
    }

    #[test]
    fn parses_bare_and_fractional_numbers() {
        assert_eq!(
            parse_amount("1234.5").value(),
            Some(Decimal::from_str("1234.5").unwrap())
        );
        assert_eq!(
            parse_amount(" $12,000.75 ").value(),
            Some(Decimal::from_str("12000.75").unwrap())
        );
    }

    #[test]
    fn text_cells_are_unparsable() {
        assert_eq!(parse_amount("N/A"), ParsedAmount::Unparsable);
        assert_eq!(parse_amount("Amount"), ParsedAmount::Unparsable);
        assert_eq!(parse_amount(""), ParsedAmount::Unparsable);
        assert_eq!(parse_amount("$"), ParsedAmount::Unparsable);
    }
}
