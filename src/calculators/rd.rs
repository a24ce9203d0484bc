//! Recurring deposit: a fixed amount paid in every month

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Breakdown, BreakdownLabels, Calculator, MAX_AMOUNT};
use crate::error::FieldErrors;
use crate::form::RawForm;
use crate::primitives::periodic_annuity;
use crate::validation::{Checker, FieldSpec, Range, Unit, Validated};

pub const MONTHLY_AMOUNT: FieldSpec = FieldSpec::new(
    "monthly_amount",
    "Monthly deposit",
    Range::positive_up_to(MAX_AMOUNT),
    Unit::Amount,
);
pub const RATE: FieldSpec =
    FieldSpec::new("rate", "Interest rate", Range::positive_up_to(50.0), Unit::Percent);
pub const MONTHS: FieldSpec =
    FieldSpec::new("months", "Tenure", Range::between(1.0, 600.0), Unit::Months);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RdInput {
    pub monthly_amount: f64,
    /// Annual rate in percent
    pub rate: f64,
    /// Number of monthly installments
    pub months: f64,
}

impl RdInput {
    /// Read a submitted form. RD has no selectors, so the error set is always empty.
    pub fn from_raw(raw: &RawForm) -> (Self, FieldErrors) {
        let input = Self {
            monthly_amount: raw.number(MONTHLY_AMOUNT.name),
            rate: raw.number(RATE.name),
            months: raw.number(MONTHS.name),
        };
        (input, FieldErrors::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RdResult {
    pub invested: f64,
    pub interest: f64,
    pub maturity: f64,
    pub installments: u32,
}

impl Breakdown for RdResult {
    fn invested(&self) -> f64 {
        self.invested
    }
    fn returns(&self) -> f64 {
        self.interest
    }
    fn maturity(&self) -> f64 {
        self.maturity
    }
    fn labels(&self) -> BreakdownLabels {
        BreakdownLabels::DEPOSIT
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RdCalculator;

impl Calculator for RdCalculator {
    type Input = RdInput;
    type Output = RdResult;

    const NAME: &'static str = "rd";

    fn validate(&self, input: &RdInput) -> Result<Validated<RdInput>, FieldErrors> {
        let mut checker = Checker::new();
        checker.check(&MONTHLY_AMOUNT, input.monthly_amount);
        checker.check(&RATE, input.rate);
        if checker.check(&MONTHS, input.months) && input.months.fract() != 0.0 {
            checker.reject(MONTHS.name, "Tenure must be a whole number of months");
        }
        checker.finish(input.clone())
    }

    fn compute(&self, input: &Validated<RdInput>) -> RdResult {
        let installments = input.months as u32;
        let maturity = periodic_annuity(input.monthly_amount, input.rate, installments);
        let invested = input.monthly_amount * installments as f64;
        debug!(
            "rd: monthly={:.2} rate={} months={} -> maturity={:.2}",
            input.monthly_amount, input.rate, installments, maturity
        );
        RdResult {
            invested,
            interest: maturity - invested,
            maturity,
            installments,
        }
    }
}
