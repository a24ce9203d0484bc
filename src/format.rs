//! Display helpers for calculator results
//!
//! Monetary values are shown in Indian Rupees with Indian digit grouping
//! (`12,34,567`) and no fraction digits.

use num_format::{Buffer, Locale};
use serde::Serialize;

use crate::calculators::Breakdown;

/// Rupee sign used as currency prefix
pub const RUPEE: &str = "\u{20b9}";

/// Shown in place of an amount that cannot be displayed as whole rupees
pub const UNAVAILABLE: &str = "n/a";

/// Group an integer the Indian way: `1234567` -> `12,34,567`
pub fn group_indian(value: i128) -> String {
    let mut buf = Buffer::new();
    buf.write_formatted(&value.unsigned_abs(), &Locale::en_IN);
    if value < 0 {
        format!("-{}", buf.as_str())
    } else {
        buf.to_string()
    }
}

/// Whole rupees, or `None` when the amount is not finite or too large to group
fn whole_rupees(amount: f64) -> Option<i128> {
    let rounded = amount.round();
    if rounded.is_finite() && rounded.abs() < i128::MAX as f64 {
        Some(rounded as i128)
    } else {
        None
    }
}

/// Format an amount as whole rupees, e.g. `₹11,61,695`
///
/// Rounds half away from zero. Non-finite amounts render as [`UNAVAILABLE`].
pub fn format_inr(amount: f64) -> String {
    match whole_rupees(amount) {
        Some(rupees) if rupees < 0 => format!("-{}{}", RUPEE, group_indian(-rupees)),
        Some(rupees) => format!("{}{}", RUPEE, group_indian(rupees)),
        None => UNAVAILABLE.to_string(),
    }
}

/// Format a plain number for messages: grouped when whole, shortest decimal otherwise
pub fn format_number(value: f64) -> String {
    match whole_rupees(value) {
        Some(whole) if value.fract() == 0.0 => group_indian(whole),
        _ => format!("{}", value),
    }
}

/// Share of the maturity amount made up by invested capital and by returns,
/// in percent. Drives the proportion chart next to each result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Proportions {
    pub invested_pct: f64,
    pub returns_pct: f64,
}

impl Proportions {
    pub fn of<B: Breakdown + ?Sized>(result: &B) -> Self {
        let maturity = result.maturity();
        if maturity <= 0.0 || !maturity.is_finite() {
            return Self {
                invested_pct: 0.0,
                returns_pct: 0.0,
            };
        }
        let invested_pct = result.invested() / maturity * 100.0;
        Self {
            invested_pct,
            returns_pct: 100.0 - invested_pct,
        }
    }
}

/// One labelled, currency-formatted figure of a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

/// The three headline figures every calculator displays
pub fn summary_lines<B: Breakdown + ?Sized>(result: &B) -> Vec<SummaryLine> {
    let labels = result.labels();
    vec![
        SummaryLine {
            label: labels.invested,
            value: format_inr(result.invested()),
        },
        SummaryLine {
            label: labels.returns,
            value: format_inr(result.returns()),
        },
        SummaryLine {
            label: labels.maturity,
            value: format_inr(result.maturity()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::BreakdownLabels;
    use approx::assert_abs_diff_eq;

    struct Fixed(f64, f64);

    impl Breakdown for Fixed {
        fn invested(&self) -> f64 {
            self.0
        }
        fn returns(&self) -> f64 {
            self.1
        }
        fn labels(&self) -> BreakdownLabels {
            BreakdownLabels::INVESTMENT
        }
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1_000), "1,000");
        assert_eq!(group_indian(150_000), "1,50,000");
        assert_eq!(group_indian(1_161_695), "11,61,695");
        assert_eq!(group_indian(-25_000), "-25,000");
    }

    #[test]
    fn test_format_inr_rounds_to_whole_rupees() {
        assert_eq!(format_inr(1_161_695.4), "\u{20b9}11,61,695");
        assert_eq!(format_inr(107_185.90), "\u{20b9}1,07,186");
        assert_eq!(format_inr(0.5), "\u{20b9}1");
        assert_eq!(format_inr(-1_500.0), "-\u{20b9}1,500");
    }

    #[test]
    fn test_format_inr_large_and_non_finite() {
        assert_eq!(format_inr(1e12), "\u{20b9}10,00,00,00,00,000");
        assert_eq!(format_inr(1e20), "\u{20b9}10,00,00,00,00,00,00,00,00,000");
        assert_eq!(format_inr(f64::NAN), UNAVAILABLE);
        assert_eq!(format_inr(f64::INFINITY), UNAVAILABLE);
        assert_eq!(format_inr(f64::NEG_INFINITY), UNAVAILABLE);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1_000_000.0), "10,00,000");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(1e12), "10,00,00,00,00,000");
    }

    #[test]
    fn test_proportions_sum_to_hundred() {
        let p = Proportions::of(&Fixed(600_000.0, 561_695.0));
        assert_abs_diff_eq!(p.invested_pct + p.returns_pct, 100.0, epsilon = 1e-9);
        assert!(p.invested_pct > 50.0);

        let empty = Proportions::of(&Fixed(0.0, 0.0));
        assert_eq!(empty.invested_pct, 0.0);
        assert_eq!(empty.returns_pct, 0.0);
    }

    #[test]
    fn test_summary_lines() {
        let lines = summary_lines(&Fixed(100_000.0, 7_000.0));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].label, "Invested amount");
        assert_eq!(lines[2].value, "\u{20b9}1,07,000");
    }
}
