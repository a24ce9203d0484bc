//! Fixed deposit: a single deposit compounded at a chosen frequency

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Breakdown, BreakdownLabels, Calculator, Compounding, MAX_AMOUNT};
use crate::error::FieldErrors;
use crate::form::RawForm;
use crate::primitives::{compound_interest, effective_annual_rate};
use crate::validation::{Checker, FieldSpec, Range, Unit, Validated};

pub const PRINCIPAL: FieldSpec = FieldSpec::new(
    "principal",
    "Principal amount",
    Range::between(1_000.0, MAX_AMOUNT),
    Unit::Amount,
);
pub const RATE: FieldSpec =
    FieldSpec::new("rate", "Interest rate", Range::between(0.1, 20.0), Unit::Percent);
pub const YEARS: FieldSpec =
    FieldSpec::new("years", "Time period", Range::between(0.25, 30.0), Unit::Years);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FdInput {
    pub principal: f64,
    /// Annual rate in percent
    pub rate: f64,
    pub years: f64,
    #[serde(default)]
    pub compounding: Compounding,
}

impl FdInput {
    /// Read a submitted form. Unknown selector values come back as field
    /// errors alongside the input, which then carries the selector default.
    pub fn from_raw(raw: &RawForm) -> (Self, FieldErrors) {
        let mut errors = FieldErrors::new();
        let compounding = raw.select("compounding", Compounding::default(), &mut errors);
        let input = Self {
            principal: raw.number(PRINCIPAL.name),
            rate: raw.number(RATE.name),
            years: raw.number(YEARS.name),
            compounding,
        };
        (input, errors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FdResult {
    pub principal: f64,
    pub interest: f64,
    pub maturity: f64,
    /// Annualised yield in percent, after compounding
    pub effective_rate: f64,
}

impl Breakdown for FdResult {
    fn invested(&self) -> f64 {
        self.principal
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
pub struct FdCalculator;

impl Calculator for FdCalculator {
    type Input = FdInput;
    type Output = FdResult;

    const NAME: &'static str = "fd";

    fn validate(&self, input: &FdInput) -> Result<Validated<FdInput>, FieldErrors> {
        let mut checker = Checker::new();
        checker.check(&PRINCIPAL, input.principal);
        checker.check(&RATE, input.rate);
        checker.check(&YEARS, input.years);
        checker.finish(input.clone())
    }

    fn compute(&self, input: &Validated<FdInput>) -> FdResult {
        let maturity = compound_interest(
            input.principal,
            input.rate,
            input.years,
            input.compounding.periods_per_year(),
        );
        let result = FdResult {
            principal: input.principal,
            interest: maturity - input.principal,
            maturity,
            effective_rate: effective_annual_rate(input.principal, maturity, input.years),
        };
        debug!(
            "fd: principal={:.2} rate={} years={} compounding={} -> maturity={:.2}",
            input.principal, input.rate, input.years, input.compounding, result.maturity
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn input(principal: f64, rate: f64, years: f64, compounding: Compounding) -> FdInput {
        FdInput {
            principal,
            rate,
            years,
            compounding,
        }
    }

    #[test]
    fn test_annual_compounding_reference() {
        let r = FdCalculator
            .calculate(&input(100_000.0, 7.0, 1.0, Compounding::Annually))
            .unwrap();
        assert_abs_diff_eq!(r.maturity, 107_000.00, epsilon = 0.005);
        assert_abs_diff_eq!(r.interest, 7_000.00, epsilon = 0.005);
        assert_abs_diff_eq!(r.effective_rate, 7.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quarterly_beats_annual() {
        let annual = FdCalculator
            .calculate(&input(100_000.0, 7.0, 1.0, Compounding::Annually))
            .unwrap();
        let quarterly = FdCalculator
            .calculate(&input(100_000.0, 7.0, 1.0, Compounding::Quarterly))
            .unwrap();

        assert_abs_diff_eq!(quarterly.maturity, 107_185.90, epsilon = 0.01);
        assert!(quarterly.maturity > annual.maturity);
        assert!(quarterly.effective_rate > 7.0);
    }

    #[test]
    fn test_more_frequent_compounding_is_monotone() {
        let maturities: Vec<f64> = [
            Compounding::Annually,
            Compounding::HalfYearly,
            Compounding::Quarterly,
            Compounding::Monthly,
        ]
        .iter()
        .map(|&c| FdCalculator.calculate(&input(250_000.0, 6.5, 3.0, c)).unwrap().maturity)
        .collect();

        for pair in maturities.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_bounds_inclusive() {
        assert!(FdCalculator.validate(&input(1_000.0, 0.1, 0.25, Compounding::Quarterly)).is_ok());
        assert!(FdCalculator.validate(&input(1_000.0, 20.0, 30.0, Compounding::Quarterly)).is_ok());
    }

    #[test]
    fn test_bounds_rejected() {
        let errors = FdCalculator
            .validate(&input(999.0, 20.1, 30.25, Compounding::Quarterly))
            .unwrap_err();
        assert_eq!(
            errors.get("principal"),
            Some("Principal amount must be between 1,000 and 10,00,00,00,00,000")
        );
        assert_eq!(errors.get("rate"), Some("Interest rate must be between 0.1% and 20%"));
        assert_eq!(errors.get("years"), Some("Time period must be between 0.25 and 30 years"));

        let errors = FdCalculator
            .validate(&input(5_000.0, 0.09, 0.24, Compounding::Monthly))
            .unwrap_err();
        assert!(!errors.contains("principal"));
        assert!(errors.contains("rate"));
        assert!(errors.contains("years"));
    }

    #[test]
    fn test_from_raw_blank_principal_fails_validation() {
        let raw = RawForm::from_pairs([
            ("principal", ""),
            ("rate", "7"),
            ("years", "1"),
            ("compounding", "12"),
        ]);
        let (parsed, selector_errors) = FdInput::from_raw(&raw);
        assert!(selector_errors.is_empty());
        assert_eq!(parsed.compounding, Compounding::Monthly);

        let errors = FdCalculator.validate(&parsed).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("principal"));
    }

    #[test]
    fn test_from_raw_unknown_compounding() {
        let raw = RawForm::from_pairs([
            ("principal", "5000"),
            ("rate", "7"),
            ("years", "1"),
            ("compounding", "3"),
        ]);
        let (parsed, errors) = FdInput::from_raw(&raw);
        assert_eq!(parsed.compounding, Compounding::Quarterly);
        assert_eq!(parsed.principal, 5_000.0);
        assert_eq!(
            errors.get("compounding"),
            Some("Compounding frequency must be one of 1, 2, 4 or 12")
        );
    }

    #[test]
    fn test_principal_ceiling() {
        let top = FdCalculator
            .calculate(&input(MAX_AMOUNT, 20.0, 30.0, Compounding::Monthly))
            .unwrap();
        assert!(top.maturity.is_finite());
        assert!((top.principal + top.interest - top.maturity).abs() <= top.maturity * 1e-12);

        let errors = FdCalculator
            .validate(&input(1e307, 20.0, 30.0, Compounding::Monthly))
            .unwrap_err();
        assert_eq!(
            errors.get("principal"),
            Some("Principal amount must be between 1,000 and 10,00,00,00,00,000")
        );
    }
}
