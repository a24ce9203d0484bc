//! Invest Calc - calculation engine for Indian retail-investment calculators
//!
//! This library provides:
//! - Fixed and recurring deposit maturity (FD, RD)
//! - SIP and lumpsum growth at an expected return
//! - PPF year-by-year accumulation
//! - NPS corpus, lump-sum / annuity split and monthly pension
//! - Field-level input validation and Indian-rupee display formatting
//!
//! Every calculator is a pure `validate` → `compute` pipeline; form state
//! and timing live in [`form`].

pub mod calculators;
pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod primitives;
pub mod validation;

// Re-export commonly used types
pub use calculators::{
    Breakdown, Calculator, Compounding, ContributionFrequency, FdCalculator, FdInput, FdResult,
    LumpsumCalculator, LumpsumInput, LumpsumResult, NpsCalculator, NpsInput, NpsResult,
    PpfCalculator, PpfInput, PpfResult, PpfYear, RdCalculator, RdInput, RdResult, SipCalculator,
    SipInput, SipResult,
};
pub use config::Settings;
pub use error::{FieldErrors, ParseError};
pub use form::{CalculatorForm, RawForm};
pub use format::{format_inr, Proportions};
pub use validation::Validated;
