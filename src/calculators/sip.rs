//! Systematic investment plan: monthly contributions at an expected return

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Breakdown, BreakdownLabels, Calculator};
use crate::error::FieldErrors;
use crate::form::RawForm;
use crate::primitives::periodic_annuity;
use crate::validation::{Checker, FieldSpec, Range, Unit, Validated};

pub const MONTHLY_AMOUNT: FieldSpec = FieldSpec::new(
    "monthly_amount",
    "Monthly investment",
    Range::between(500.0, 1_000_000.0),
    Unit::Amount,
);
pub const YEARS: FieldSpec =
    FieldSpec::new("years", "Investment period", Range::between(1.0, 50.0), Unit::Years);
pub const RATE: FieldSpec =
    FieldSpec::new("rate", "Expected return rate", Range::between(1.0, 30.0), Unit::Percent);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_amount: f64,
    pub years: f64,
    /// Expected annual return in percent
    pub rate: f64,
}

impl SipInput {
    pub fn from_raw(raw: &RawForm) -> (Self, FieldErrors) {
        let input = Self {
            monthly_amount: raw.number(MONTHLY_AMOUNT.name),
            years: raw.number(YEARS.name),
            rate: raw.number(RATE.name),
        };
        (input, FieldErrors::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    pub invested: f64,
    pub returns: f64,
    pub maturity: f64,
    pub installments: u32,
    /// `maturity / invested`
    pub wealth_gain_multiple: f64,
}

impl Breakdown for SipResult {
    fn invested(&self) -> f64 {
        self.invested
    }
    fn returns(&self) -> f64 {
        self.returns
    }
    fn maturity(&self) -> f64 {
        self.maturity
    }
    fn labels(&self) -> BreakdownLabels {
        BreakdownLabels::INVESTMENT
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SipCalculator;

impl Calculator for SipCalculator {
    type Input = SipInput;
    type Output = SipResult;

    const NAME: &'static str = "sip";

    fn validate(&self, input: &SipInput) -> Result<Validated<SipInput>, FieldErrors> {
        let mut checker = Checker::new();
        checker.check(&MONTHLY_AMOUNT, input.monthly_amount);
        checker.check(&YEARS, input.years);
        checker.check(&RATE, input.rate);
        checker.finish(input.clone())
    }

    fn compute(&self, input: &Validated<SipInput>) -> SipResult {
        // Partial final months are not invested
        let installments = (input.years * 12.0).floor() as u32;
        let maturity = periodic_annuity(input.monthly_amount, input.rate, installments);
        let invested = input.monthly_amount * installments as f64;
        debug!(
            "sip: monthly={:.2} rate={} months={} -> maturity={:.2}",
            input.monthly_amount, input.rate, installments, maturity
        );
        SipResult {
            invested,
            returns: maturity - invested,
            maturity,
            installments,
            wealth_gain_multiple: maturity / invested,
        }
    }
}
