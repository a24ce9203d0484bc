//! National Pension System: SIP accumulation to retirement, then a
//! lump-sum / annuity split of the corpus

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Breakdown, BreakdownLabels, Calculator};
use crate::error::FieldErrors;
use crate::form::RawForm;
use crate::primitives::periodic_annuity;
use crate::validation::{Checker, FieldSpec, Range, Unit, Validated};

pub const MAX_RETIREMENT_AGE: f64 = 75.0;

pub const CURRENT_AGE: FieldSpec =
    FieldSpec::new("current_age", "Current age", Range::between(18.0, 65.0), Unit::Years);
/// Lower limit shown here applies when the current age itself is invalid;
/// otherwise it is `current_age + 1`.
pub const RETIREMENT_AGE: FieldSpec = FieldSpec::new(
    "retirement_age",
    "Retirement age",
    Range::between(19.0, MAX_RETIREMENT_AGE),
    Unit::Years,
);
pub const MONTHLY_CONTRIBUTION: FieldSpec = FieldSpec::new(
    "monthly_contribution",
    "Monthly contribution",
    Range::between(500.0, 200_000.0),
    Unit::Amount,
);
pub const EXPECTED_RETURN: FieldSpec =
    FieldSpec::new("expected_return", "Expected return", Range::between(1.0, 30.0), Unit::Percent);
pub const WITHDRAWAL_PCT: FieldSpec = FieldSpec::new(
    "withdrawal_pct",
    "Lump-sum withdrawal",
    Range::between(0.0, 60.0),
    Unit::Percent,
);
pub const ANNUITY_RETURN: FieldSpec =
    FieldSpec::new("annuity_return", "Annuity return", Range::between(1.0, 15.0), Unit::Percent);
pub const PENSION_YEARS: FieldSpec = FieldSpec::new(
    "pension_years",
    "Years in retirement",
    Range::between(5.0, 40.0),
    Unit::Years,
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpsInput {
    pub current_age: f64,
    pub retirement_age: f64,
    pub monthly_contribution: f64,
    /// Expected annual return during accumulation, percent
    pub expected_return: f64,
    /// Share of the corpus taken as lump sum at retirement, percent
    pub withdrawal_pct: f64,
    /// Annual return on the purchased annuity, percent
    pub annuity_return: f64,
    /// Expected years of pension after retirement
    pub pension_years: f64,
}

impl NpsInput {
    pub fn from_raw(raw: &RawForm) -> (Self, FieldErrors) {
        let input = Self {
            current_age: raw.number(CURRENT_AGE.name),
            retirement_age: raw.number(RETIREMENT_AGE.name),
            monthly_contribution: raw.number(MONTHLY_CONTRIBUTION.name),
            expected_return: raw.number(EXPECTED_RETURN.name),
            withdrawal_pct: raw.number(WITHDRAWAL_PCT.name),
            annuity_return: raw.number(ANNUITY_RETURN.name),
            pension_years: raw.number(PENSION_YEARS.name),
        };
        (input, FieldErrors::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpsResult {
    pub total_invested: f64,
    pub total_returns: f64,
    pub corpus_at_retirement: f64,
    pub lump_sum_amount: f64,
    pub annuity_amount: f64,
    pub monthly_pension: f64,
    /// Pension received over the expected years in retirement
    pub total_pension: f64,
    pub contribution_months: u32,
}

impl Breakdown for NpsResult {
    fn invested(&self) -> f64 {
        self.total_invested
    }
    fn returns(&self) -> f64 {
        self.total_returns
    }
    fn maturity(&self) -> f64 {
        self.corpus_at_retirement
    }
    fn labels(&self) -> BreakdownLabels {
        BreakdownLabels::INVESTMENT
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NpsCalculator;

impl Calculator for NpsCalculator {
    type Input = NpsInput;
    type Output = NpsResult;

    const NAME: &'static str = "nps";

    fn validate(&self, input: &NpsInput) -> Result<Validated<NpsInput>, FieldErrors> {
        let mut checker = Checker::new();

        let retirement = if checker.check(&CURRENT_AGE, input.current_age) {
            RETIREMENT_AGE.with_range(Range::between(input.current_age + 1.0, MAX_RETIREMENT_AGE))
        } else {
            RETIREMENT_AGE
        };
        checker.check(&retirement, input.retirement_age);

        checker.check(&MONTHLY_CONTRIBUTION, input.monthly_contribution);
        checker.check(&EXPECTED_RETURN, input.expected_return);
        checker.check(&WITHDRAWAL_PCT, input.withdrawal_pct);
        checker.check(&ANNUITY_RETURN, input.annuity_return);
        checker.check(&PENSION_YEARS, input.pension_years);
        checker.finish(input.clone())
    }

    fn compute(&self, input: &Validated<NpsInput>) -> NpsResult {
        let months = ((input.retirement_age - input.current_age) * 12.0).round() as u32;
        let corpus = periodic_annuity(input.monthly_contribution, input.expected_return, months);
        let invested = input.monthly_contribution * months as f64;

        let lump_sum_amount = corpus * input.withdrawal_pct / 100.0;
        let annuity_amount = corpus - lump_sum_amount;
        let monthly_pension = annuity_amount * input.annuity_return / 100.0 / 12.0;

        debug!(
            "nps: monthly={:.2} months={} -> corpus={:.2} pension={:.2}/month",
            input.monthly_contribution, months, corpus, monthly_pension
        );

        NpsResult {
            total_invested: invested,
            total_returns: corpus - invested,
            corpus_at_retirement: corpus,
            lump_sum_amount,
            annuity_amount,
            monthly_pension,
            total_pension: monthly_pension * 12.0 * input.pension_years,
            contribution_months: months,
        }
    }
}
