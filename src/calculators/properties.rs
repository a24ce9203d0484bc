//! Properties every calculator must hold across its whole valid input space

use proptest::prelude::*;

use super::*;
use crate::format::{summary_lines, Proportions, RUPEE};

fn compounding() -> impl Strategy<Value = Compounding> {
    prop_oneof![
        Just(Compounding::Annually),
        Just(Compounding::HalfYearly),
        Just(Compounding::Quarterly),
        Just(Compounding::Monthly),
    ]
}

fn fd_input() -> impl Strategy<Value = FdInput> {
    (1_000.0..=MAX_AMOUNT, 0.1..19.0f64, 0.25..30.0f64, compounding()).prop_map(
        |(principal, rate, years, compounding)| FdInput {
            principal,
            rate,
            years,
            compounding,
        },
    )
}

fn rd_input() -> impl Strategy<Value = RdInput> {
    (1.0..=MAX_AMOUNT, 0.5..49.0f64, 1u32..=600).prop_map(|(monthly_amount, rate, months)| {
        RdInput {
            monthly_amount,
            rate,
            months: months as f64,
        }
    })
}

fn sip_input() -> impl Strategy<Value = SipInput> {
    (500.0..1_000_000.0f64, 1u32..=50, 1.0..29.0f64).prop_map(|(monthly_amount, years, rate)| {
        SipInput {
            monthly_amount,
            years: years as f64,
            rate,
        }
    })
}

fn lumpsum_input() -> impl Strategy<Value = LumpsumInput> {
    (500.0..=MAX_AMOUNT, 1.0..50.0f64, 1.0..29.0f64)
        .prop_map(|(amount, years, rate)| LumpsumInput::new(amount, years, rate))
}

fn ppf_input() -> impl Strategy<Value = PpfInput> {
    (500.0..=150_000.0f64, 1u32..=50, 1.0..14.0f64).prop_map(|(yearly_investment, years, rate)| {
        PpfInput {
            yearly_investment,
            years: years as f64,
            rate,
            frequency: ContributionFrequency::Yearly,
        }
    })
}

fn nps_input() -> impl Strategy<Value = NpsInput> {
    let ages = (18u32..=65, 1u32..=10);
    let amounts = (500.0..=200_000.0f64, 1.0..29.0f64, 0.0..=60.0f64, 1.0..=15.0f64, 5u32..=40);
    (ages, amounts).prop_map(
        |((age, span), (monthly, ret, withdrawal, annuity, pension_years))| NpsInput {
            current_age: age as f64,
            retirement_age: (age + span).min(75) as f64,
            monthly_contribution: monthly,
            expected_return: ret,
            withdrawal_pct: withdrawal,
            annuity_return: annuity,
            pension_years: pension_years as f64,
        },
    )
}

/// Two-decimal agreement, widened to float resolution for very large balances
fn tolerance(amount: f64) -> f64 {
    0.005_f64.max(amount.abs() * 1e-12)
}

fn assert_round_trip<B: Breakdown>(result: &B) {
    let diff = (result.invested() + result.returns() - result.maturity()).abs();
    assert!(
        diff <= tolerance(result.maturity()),
        "invested + returns differs from maturity by {}",
        diff
    );
    let p = Proportions::of(result);
    assert!((p.invested_pct + p.returns_pct - 100.0).abs() < 1e-9);
    for line in summary_lines(result) {
        assert!(line.value.starts_with(RUPEE), "{}", line.value);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_fd_round_trip_and_monotone(input in fd_input()) {
        let base = FdCalculator.calculate(&input).unwrap();
        assert_round_trip(&base);

        let higher = FdInput { rate: input.rate + 1.0, ..input };
        prop_assert!(FdCalculator.calculate(&higher).unwrap().maturity > base.maturity);
    }

    #[test]
    fn test_rd_round_trip_and_monotone(input in rd_input()) {
        let base = RdCalculator.calculate(&input).unwrap();
        assert_round_trip(&base);

        let higher = RdInput { rate: input.rate + 1.0, ..input };
        prop_assert!(RdCalculator.calculate(&higher).unwrap().maturity > base.maturity);
    }

    #[test]
    fn test_sip_round_trip_and_monotone(input in sip_input()) {
        let base = SipCalculator.calculate(&input).unwrap();
        assert_round_trip(&base);
        prop_assert!(base.maturity > base.invested);

        let higher = SipInput { rate: input.rate + 1.0, ..input };
        prop_assert!(SipCalculator.calculate(&higher).unwrap().maturity > base.maturity);
    }

    #[test]
    fn test_lumpsum_round_trip_and_monotone(input in lumpsum_input()) {
        let base = LumpsumCalculator.calculate(&input).unwrap();
        assert_round_trip(&base);

        let higher = LumpsumInput { rate: input.rate + 1.0, ..input };
        prop_assert!(LumpsumCalculator.calculate(&higher).unwrap().maturity > base.maturity);
    }

    #[test]
    fn test_ppf_schedule_and_monotone(input in ppf_input()) {
        let base = PpfCalculator.calculate(&input).unwrap();
        assert_round_trip(&base);

        let invested: f64 = base.schedule.iter().map(|y| y.investment).sum();
        prop_assert!((invested - base.total_investment).abs() <= tolerance(base.total_investment));
        prop_assert_eq!(base.schedule.last().map(|y| y.balance), Some(base.maturity_amount));

        let higher = PpfInput { rate: input.rate + 1.0, ..input };
        let higher = PpfCalculator.calculate(&higher).unwrap();
        prop_assert!(higher.maturity_amount > base.maturity_amount);
    }

    #[test]
    fn test_nps_split_and_monotone(input in nps_input()) {
        let base = NpsCalculator.calculate(&input).unwrap();
        assert_round_trip(&base);

        let corpus = base.corpus_at_retirement;
        let split = base.lump_sum_amount + base.annuity_amount;
        prop_assert!((split - corpus).abs() <= tolerance(corpus));
        let pension = base.annuity_amount * input.annuity_return / 100.0 / 12.0;
        prop_assert!((pension - base.monthly_pension).abs() <= tolerance(base.monthly_pension));

        let higher = NpsInput { expected_return: input.expected_return + 1.0, ..input };
        let higher = NpsCalculator.calculate(&higher).unwrap();
        prop_assert!(higher.corpus_at_retirement > corpus);
    }
}
