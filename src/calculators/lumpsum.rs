//! One-time investment grown at an expected annual return

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Breakdown, BreakdownLabels, Calculator, Compounding, MAX_AMOUNT};
use crate::error::FieldErrors;
use crate::form::RawForm;
use crate::primitives::{compound_interest, effective_annual_rate};
use crate::validation::{Checker, FieldSpec, Range, Unit, Validated};

pub const AMOUNT: FieldSpec = FieldSpec::new(
    "amount",
    "Investment amount",
    Range::between(500.0, MAX_AMOUNT),
    Unit::Amount,
);
pub const YEARS: FieldSpec =
    FieldSpec::new("years", "Time period", Range::between(1.0, 50.0), Unit::Years);
pub const RATE: FieldSpec =
    FieldSpec::new("rate", "Expected return rate", Range::between(1.0, 30.0), Unit::Percent);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumpsumInput {
    pub amount: f64,
    pub years: f64,
    /// Expected annual return in percent
    pub rate: f64,
    #[serde(default = "annual")]
    pub compounding: Compounding,
}

fn annual() -> Compounding {
    Compounding::Annually
}

impl LumpsumInput {
    pub fn new(amount: f64, years: f64, rate: f64) -> Self {
        Self {
            amount,
            years,
            rate,
            compounding: Compounding::Annually,
        }
    }

    pub fn from_raw(raw: &RawForm) -> (Self, FieldErrors) {
        let mut errors = FieldErrors::new();
        let compounding = raw.select("compounding", Compounding::Annually, &mut errors);
        let input = Self {
            amount: raw.number(AMOUNT.name),
            years: raw.number(YEARS.name),
            rate: raw.number(RATE.name),
            compounding,
        };
        (input, errors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumpsumResult {
    pub invested: f64,
    pub returns: f64,
    pub maturity: f64,
    /// `maturity / invested`
    pub growth_multiple: f64,
    pub effective_rate: f64,
}

impl Breakdown for LumpsumResult {
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
pub struct LumpsumCalculator;

impl Calculator for LumpsumCalculator {
    type Input = LumpsumInput;
    type Output = LumpsumResult;

    const NAME: &'static str = "lumpsum";

    fn validate(&self, input: &LumpsumInput) -> Result<Validated<LumpsumInput>, FieldErrors> {
        let mut checker = Checker::new();
        checker.check(&AMOUNT, input.amount);
        checker.check(&YEARS, input.years);
        checker.check(&RATE, input.rate);
        checker.finish(input.clone())
    }

    fn compute(&self, input: &Validated<LumpsumInput>) -> LumpsumResult {
        let maturity = compound_interest(
            input.amount,
            input.rate,
            input.years,
            input.compounding.periods_per_year(),
        );
        debug!(
            "lumpsum: amount={:.2} rate={} years={} -> maturity={:.2}",
            input.amount, input.rate, input.years, maturity
        );
        LumpsumResult {
            invested: input.amount,
            returns: maturity - input.amount,
            maturity,
            growth_multiple: maturity / input.amount,
            effective_rate: effective_annual_rate(input.amount, maturity, input.years),
        }
    }
}
