//! UI-layer form state
//!
//! The calculators themselves are pure. This module owns what a form needs
//! around them: the raw text the user typed, the inline error per field,
//! and a short reveal delay before a computed result is shown. The delay is
//! a plain deadline checked with [`CalculatorForm::poll`]; nothing sleeps.

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::calculators::Calculator;
use crate::error::FieldErrors;
use crate::validation::{parse_field, Validated};

/// Raw text values of a submitted form, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawForm {
    values: HashMap<String, String>,
}

impl RawForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Numeric value of a field; missing or blank reads as NaN
    pub fn number(&self, field: &str) -> f64 {
        self.values.get(field).map_or(f64::NAN, |raw| parse_field(raw))
    }

    /// Value of a selector field. A missing selector takes `default`; an
    /// unknown value is recorded in `errors` and also reads as `default`,
    /// so the numeric fields can still be checked in the same pass.
    pub fn select<T>(&self, field: &'static str, default: T, errors: &mut FieldErrors) -> T
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.values.get(field).map(|raw| raw.parse::<T>()) {
            None => default,
            Some(Ok(value)) => value,
            Some(Err(e)) => {
                errors.insert(field, e.to_string());
                default
            }
        }
    }
}

/// What the result panel of a form currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum ResultState<T> {
    /// Nothing submitted yet, or the pending result was cancelled
    Empty,
    /// Result computed, shown once `ready_at` passes
    Loading { result: T, ready_at: Instant },
    Ready(T),
}

/// Form state for one calculator
pub struct CalculatorForm<C: Calculator> {
    calculator: C,
    reveal_delay: Duration,
    errors: FieldErrors,
    state: ResultState<C::Output>,
}

impl<C: Calculator> CalculatorForm<C> {
    pub fn new(calculator: C, reveal_delay: Duration) -> Self {
        Self {
            calculator,
            reveal_delay,
            errors: FieldErrors::new(),
            state: ResultState::Empty,
        }
    }

    /// Validate and, when valid, compute and stage the result.
    ///
    /// On invalid input the field errors are replaced and a result still
    /// waiting to be revealed is dropped; one already shown stays on screen.
    /// Returns whether the input was accepted.
    pub fn submit(&mut self, input: &C::Input, now: Instant) -> bool {
        match self.calculator.validate(input) {
            Ok(valid) => {
                self.stage(&valid, now);
                true
            }
            Err(errors) => {
                self.reject(errors);
                false
            }
        }
    }

    /// Submit a raw form. `parse` returns the input read from it plus any
    /// selector values it could not read; those are reported together with
    /// the numeric field failures.
    pub fn submit_raw<F>(&mut self, raw: &RawForm, parse: F, now: Instant) -> bool
    where
        F: FnOnce(&RawForm) -> (C::Input, FieldErrors),
    {
        let (input, selector_errors) = parse(raw);
        match self.calculator.validate(&input) {
            Ok(valid) if selector_errors.is_empty() => {
                self.stage(&valid, now);
                true
            }
            outcome => {
                let mut errors = outcome.err().unwrap_or_default();
                errors.merge(selector_errors);
                self.reject(errors);
                false
            }
        }
    }

    fn stage(&mut self, valid: &Validated<C::Input>, now: Instant) {
        self.errors = FieldErrors::new();
        self.state = ResultState::Loading {
            result: self.calculator.compute(valid),
            ready_at: now + self.reveal_delay,
        };
    }

    fn reject(&mut self, errors: FieldErrors) {
        self.errors = errors;
        self.cancel();
    }

    /// Advance the reveal timer; returns the result once it is visible
    pub fn poll(&mut self, now: Instant) -> Option<&C::Output> {
        if let ResultState::Loading { ready_at, .. } = &self.state {
            if now >= *ready_at {
                let state = std::mem::replace(&mut self.state, ResultState::Empty);
                if let ResultState::Loading { result, .. } = state {
                    self.state = ResultState::Ready(result);
                }
            }
        }
        self.result()
    }

    /// Drop a result that has not been revealed yet
    pub fn cancel(&mut self) {
        if matches!(self.state, ResultState::Loading { .. }) {
            self.state = ResultState::Empty;
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ResultState::Loading { .. })
    }

    pub fn result(&self) -> Option<&C::Output> {
        match &self.state {
            ResultState::Ready(result) => Some(result),
            _ => None,
        }
    }

    pub fn state(&self) -> &ResultState<C::Output> {
        &self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Inline message for one field, if it failed validation
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }
}
