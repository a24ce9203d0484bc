//! Public Provident Fund: yearly contributions with annual compounding
//!
//! The only calculator that steps through time. Each year the year's
//! contributions join the running balance, then one year of interest is
//! applied to the new balance.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Breakdown, BreakdownLabels, Calculator, ContributionFrequency};
use crate::error::FieldErrors;
use crate::form::RawForm;
use crate::primitives::compound_interest;
use crate::validation::{Checker, FieldSpec, Range, Unit, Validated};

pub const YEARLY_INVESTMENT: FieldSpec = FieldSpec::new(
    "yearly_investment",
    "Yearly investment",
    Range::between(500.0, 150_000.0),
    Unit::Amount,
);
pub const YEARS: FieldSpec =
    FieldSpec::new("years", "Time period", Range::between(1.0, 50.0), Unit::Years);
pub const RATE: FieldSpec =
    FieldSpec::new("rate", "Interest rate", Range::between(1.0, 15.0), Unit::Percent);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfInput {
    pub yearly_investment: f64,
    pub years: f64,
    /// Annual rate in percent
    pub rate: f64,
    #[serde(default)]
    pub frequency: ContributionFrequency,
}

impl PpfInput {
    pub fn from_raw(raw: &RawForm) -> (Self, FieldErrors) {
        let mut errors = FieldErrors::new();
        let frequency = raw.select("frequency", ContributionFrequency::default(), &mut errors);
        let input = Self {
            yearly_investment: raw.number(YEARLY_INVESTMENT.name),
            years: raw.number(YEARS.name),
            rate: raw.number(RATE.name),
            frequency,
        };
        (input, errors)
    }
}

/// One row of the year-by-year schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfYear {
    pub year: u32,
    pub investment: f64,
    pub interest: f64,
    /// Closing balance after interest
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfResult {
    pub total_investment: f64,
    pub total_interest: f64,
    pub maturity_amount: f64,
    /// Amount paid per installment at the chosen contribution frequency
    pub installment_amount: f64,
    pub schedule: Vec<PpfYear>,
}

impl Breakdown for PpfResult {
    fn invested(&self) -> f64 {
        self.total_investment
    }
    fn returns(&self) -> f64 {
        self.total_interest
    }
    fn maturity(&self) -> f64 {
        self.maturity_amount
    }
    fn labels(&self) -> BreakdownLabels {
        BreakdownLabels::DEPOSIT
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PpfCalculator;

impl Calculator for PpfCalculator {
    type Input = PpfInput;
    type Output = PpfResult;

    const NAME: &'static str = "ppf";

    fn validate(&self, input: &PpfInput) -> Result<Validated<PpfInput>, FieldErrors> {
        let mut checker = Checker::new();
        checker.check(&YEARLY_INVESTMENT, input.yearly_investment);
        if checker.check(&YEARS, input.years) && input.years.fract() != 0.0 {
            checker.reject(YEARS.name, "Time period must be a whole number of years");
        }
        checker.check(&RATE, input.rate);
        checker.finish(input.clone())
    }

    fn compute(&self, input: &Validated<PpfInput>) -> PpfResult {
        let years = input.years as u32;
        let mut schedule = Vec::with_capacity(years as usize);
        let mut balance = 0.0;

        for year in 1..=years {
            let opening = balance + input.yearly_investment;
            balance = compound_interest(opening, input.rate, 1.0, 1);
            schedule.push(PpfYear {
                year,
                investment: input.yearly_investment,
                interest: balance - opening,
                balance,
            });
        }

        let total_investment: f64 = schedule.iter().map(|y| y.investment).sum();
        let maturity_amount = schedule.last().map(|y| y.balance).unwrap_or(0.0);
        debug!(
            "ppf: yearly={:.2} rate={} years={} -> maturity={:.2}",
            input.yearly_investment, input.rate, years, maturity_amount
        );

        PpfResult {
            total_investment,
            total_interest: maturity_amount - total_investment,
            maturity_amount,
            installment_amount: input.yearly_investment
                / input.frequency.installments_per_year() as f64,
            schedule,
        }
    }
}
