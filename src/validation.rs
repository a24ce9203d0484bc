//! Input validation for calculator forms
//!
//! Every calculator declares a [`FieldSpec`] per numeric input. A value is
//! accepted only when it is finite and inside the declared range; anything
//! else (including a blank form field) gets the field's single message.

use crate::error::FieldErrors;
use crate::format::format_number;

/// Lower limit of a field's range
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lower {
    /// `value >= limit`
    Inclusive(f64),
    /// `value > limit`
    Exclusive(f64),
}

/// Numeric range for a field. The upper limit is inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: Lower,
    pub max: f64,
}

impl Range {
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Lower::Inclusive(min),
            max,
        }
    }

    pub const fn positive_up_to(max: f64) -> Self {
        Self {
            min: Lower::Exclusive(0.0),
            max,
        }
    }

    /// NaN never passes: every comparison with it is false
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let above_min = match self.min {
            Lower::Inclusive(min) => value >= min,
            Lower::Exclusive(min) => value > min,
        };
        above_min && value <= self.max
    }
}

/// Unit appended to the limits in a field's message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Amount,
    Percent,
    Years,
    Months,
}

/// Declared name, label and range of one numeric input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub range: Range,
    pub unit: Unit,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, range: Range, unit: Unit) -> Self {
        Self {
            name,
            label,
            range,
            unit,
        }
    }

    /// Same field with a different range (used for bounds that depend on other fields)
    pub const fn with_range(self, range: Range) -> Self {
        Self { range, ..self }
    }

    /// The one message shown for this field whenever its value is rejected
    pub fn message(&self) -> String {
        let limit = |v: f64| match self.unit {
            Unit::Percent => format!("{}%", format_number(v)),
            _ => format_number(v),
        };
        let suffix = match self.unit {
            Unit::Years => " years",
            Unit::Months => " months",
            Unit::Amount | Unit::Percent => "",
        };

        let max = limit(self.range.max);
        match self.range.min {
            Lower::Inclusive(min) => {
                format!("{} must be between {} and {}{}", self.label, limit(min), max, suffix)
            }
            Lower::Exclusive(min) => format!(
                "{} must be greater than {} and at most {}{}",
                self.label,
                limit(min),
                max,
                suffix
            ),
        }
    }
}

/// Input that has passed its calculator's validation.
///
/// Only [`Checker::finish`] constructs one, so compute functions taking a
/// `&Validated<T>` never see out-of-range input.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated<T>(T);

impl<T> Validated<T> {
    pub fn inner(&self) -> &T {
        &self.0
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// Collects field failures for one input record
#[derive(Debug, Default)]
pub struct Checker {
    errors: FieldErrors,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a value against its spec; returns whether it passed
    pub fn check(&mut self, spec: &FieldSpec, value: f64) -> bool {
        let ok = spec.range.contains(value);
        if !ok {
            self.errors.insert(spec.name, spec.message());
        }
        ok
    }

    /// Record a failure that is not a numeric range (e.g. a selector value)
    pub fn reject(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message);
    }

    pub fn finish<T>(self, input: T) -> Result<Validated<T>, FieldErrors> {
        self.errors.into_result().map(|()| Validated(input))
    }
}

/// Parse a raw form value. Blank or unparseable text becomes NaN, which
/// then fails every range check with the field's usual message.
pub fn parse_field(raw: &str) -> f64 {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return f64::NAN;
    }
    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}
