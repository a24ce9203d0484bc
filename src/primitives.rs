//! Interest primitives shared by every calculator
//!
//! Rates are annual percentages (7.0 for 7%), as entered on the forms.

/// Future value of a single deposit with periodic compounding.
///
/// `P × (1 + r/n)^(n×t)`. `n × t` may be fractional (a quarter-year FD
/// compounded monthly runs three periods).
pub fn compound_interest(
    principal: f64,
    annual_rate_pct: f64,
    years: f64,
    periods_per_year: u32,
) -> f64 {
    let n = periods_per_year as f64;
    let periodic_rate = annual_rate_pct / 100.0 / n;
    principal * (1.0 + periodic_rate).powf(n * years)
}

/// Future value of equal monthly installments paid at the start of each month.
///
/// `P × [((1+i)^m − 1) / i] × (1+i)` with `i = r/12`. A zero rate leaves
/// just the sum of installments.
pub fn periodic_annuity(installment: f64, annual_rate_pct: f64, installments: u32) -> f64 {
    let i = annual_rate_pct / 100.0 / 12.0;
    let m = installments as f64;

    if i.abs() < 1e-12 {
        return installment * m;
    }

    installment * (((1.0 + i).powf(m) - 1.0) / i) * (1.0 + i)
}

/// Annualised growth rate (percent) that turns `principal` into `maturity` over `years`
pub fn effective_annual_rate(principal: f64, maturity: f64, years: f64) -> f64 {
    if principal <= 0.0 || years <= 0.0 {
        return 0.0;
    }
    ((maturity / principal).powf(1.0 / years) - 1.0) * 100.0
}
