//! Product calculators
//!
//! Each calculator pairs an input record with a result record:
//! 1. `validate` checks the input against the product's declared field ranges
//! 2. `compute` applies the product's formula to validated input
//!
//! None of them share state or call each other; the arithmetic lives in
//! [`crate::primitives`].

mod fd;
mod lumpsum;
mod nps;
mod ppf;
mod rd;
mod sip;

#[cfg(test)]
mod properties;

pub use fd::{FdCalculator, FdInput, FdResult};
pub use lumpsum::{LumpsumCalculator, LumpsumInput, LumpsumResult};
pub use nps::{NpsCalculator, NpsInput, NpsResult};
pub use ppf::{PpfCalculator, PpfInput, PpfResult, PpfYear};
pub use rd::{RdCalculator, RdInput, RdResult};
pub use sip::{SipCalculator, SipInput, SipResult};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FieldErrors, ParseError};
use crate::validation::Validated;

/// Ceiling for amount fields that have no product limit (₹1 lakh crore).
/// Keeps every result finite at the longest tenure and highest rate.
pub const MAX_AMOUNT: f64 = 1e12;

/// Display labels for the three headline figures of a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakdownLabels {
    pub invested: &'static str,
    pub returns: &'static str,
    pub maturity: &'static str,
}

impl BreakdownLabels {
    /// Deposit products (FD, RD, PPF)
    pub const DEPOSIT: Self = Self {
        invested: "Principal amount",
        returns: "Interest earned",
        maturity: "Maturity amount",
    };

    /// Market-linked products (SIP, Lumpsum, NPS)
    pub const INVESTMENT: Self = Self {
        invested: "Invested amount",
        returns: "Estimated returns",
        maturity: "Total value",
    };
}

/// Headline split of a result: what went in, what it earned, what comes out
pub trait Breakdown {
    fn invested(&self) -> f64;

    fn returns(&self) -> f64;

    fn maturity(&self) -> f64 {
        self.invested() + self.returns()
    }

    fn labels(&self) -> BreakdownLabels;
}

/// A validate-then-compute calculator for one product
pub trait Calculator {
    type Input;
    type Output: Breakdown;

    /// Short product name, used in logs and CLI output
    const NAME: &'static str;

    /// Check every field; all failures are reported together
    fn validate(&self, input: &Self::Input) -> Result<Validated<Self::Input>, FieldErrors>;

    /// Apply the product formula. Cannot fail on validated input.
    fn compute(&self, input: &Validated<Self::Input>) -> Self::Output;

    /// Validate, then compute
    fn calculate(&self, input: &Self::Input) -> Result<Self::Output, FieldErrors> {
        let valid = self.validate(input)?;
        Ok(self.compute(&valid))
    }
}

/// How often interest is credited to a deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compounding {
    Annually,
    HalfYearly,
    #[default]
    Quarterly,
    Monthly,
}

impl Compounding {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Compounding::Annually => 1,
            Compounding::HalfYearly => 2,
            Compounding::Quarterly => 4,
            Compounding::Monthly => 12,
        }
    }

    pub fn from_periods(periods: u32) -> Option<Self> {
        match periods {
            1 => Some(Compounding::Annually),
            2 => Some(Compounding::HalfYearly),
            4 => Some(Compounding::Quarterly),
            12 => Some(Compounding::Monthly),
            _ => None,
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Compounding::Annually => "annually",
            Compounding::HalfYearly => "half-yearly",
            Compounding::Quarterly => "quarterly",
            Compounding::Monthly => "monthly",
        };
        f.write_str(s)
    }
}

impl FromStr for Compounding {
    type Err = ParseError;

    /// Accepts the selector's period count (`"4"`) or its name (`"quarterly"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(periods) = s.parse::<u32>() {
            return Self::from_periods(periods)
                .ok_or_else(|| ParseError::Compounding(s.to_string()));
        }
        match s.to_ascii_lowercase().as_str() {
            "annually" | "yearly" => Ok(Compounding::Annually),
            "half-yearly" | "half_yearly" | "semi-annually" => Ok(Compounding::HalfYearly),
            "quarterly" => Ok(Compounding::Quarterly),
            "monthly" => Ok(Compounding::Monthly),
            _ => Err(ParseError::Compounding(s.to_string())),
        }
    }
}

/// How a PPF yearly investment is paid in over the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionFrequency {
    #[default]
    Yearly,
    HalfYearly,
    Quarterly,
    Monthly,
}

impl ContributionFrequency {
    pub fn installments_per_year(&self) -> u32 {
        match self {
            ContributionFrequency::Yearly => 1,
            ContributionFrequency::HalfYearly => 2,
            ContributionFrequency::Quarterly => 4,
            ContributionFrequency::Monthly => 12,
        }
    }
}

impl FromStr for ContributionFrequency {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "yearly" | "annually" => Ok(ContributionFrequency::Yearly),
            "2" | "half-yearly" | "half_yearly" => Ok(ContributionFrequency::HalfYearly),
            "4" | "quarterly" => Ok(ContributionFrequency::Quarterly),
            "12" | "monthly" => Ok(ContributionFrequency::Monthly),
            other => Err(ParseError::ContributionFrequency(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compounding_from_str() {
        assert_eq!("4".parse::<Compounding>(), Ok(Compounding::Quarterly));
        assert_eq!("Monthly".parse::<Compounding>(), Ok(Compounding::Monthly));
        assert_eq!("half-yearly".parse::<Compounding>(), Ok(Compounding::HalfYearly));
        assert!("3".parse::<Compounding>().is_err());
        assert!("weekly".parse::<Compounding>().is_err());
    }

    #[test]
    fn test_compounding_round_trips_period_count() {
        for c in [
            Compounding::Annually,
            Compounding::HalfYearly,
            Compounding::Quarterly,
            Compounding::Monthly,
        ] {
            assert_eq!(Compounding::from_periods(c.periods_per_year()), Some(c));
        }
    }

    #[test]
    fn test_contribution_frequency_from_str() {
        assert_eq!("12".parse::<ContributionFrequency>(), Ok(ContributionFrequency::Monthly));
        assert_eq!("yearly".parse::<ContributionFrequency>(), Ok(ContributionFrequency::Yearly));
        assert_eq!(
            "6".parse::<ContributionFrequency>(),
            Err(ParseError::ContributionFrequency("6".to_string()))
        );
    }
}
