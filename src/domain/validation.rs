use serde::{Deserialize, Serialize};

// ============================================================================
// Bounded Numeric Field - Reusable Validation Contract
// ============================================================================
//
// One `BoundedNumericField` is declared per validated field per entity *type*
// (as an associated const) and shared by every value of that type. The field
// value itself is stored per entity; only the name and bounds live here.
//
// ============================================================================

/// Default lower bound applied to every field unless overridden.
pub const DEFAULT_MIN_VALUE: f64 = 0.0;

/// Upper bound for an order item's unit price.
pub const MAX_PRICE: f64 = 10.0;

/// An exact numeric value, kept as assigned (no int/float coercion).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value.into())
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Int(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value.into())
    }
}

/// A loosely-typed candidate value presented for validation.
///
/// Callers hand over whatever they received (text from a form, a decoded JSON
/// scalar, a literal); the contract decides at runtime whether it is numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(Number),
    Text(String),
    Bool(bool),
}

impl From<Number> for Scalar {
    fn from(value: Number) -> Self {
        Scalar::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

// ============================================================================
// Validation Errors
// ============================================================================

/// The two categories of validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Candidate is not numeric.
    Type,
    /// Candidate is numeric but outside the configured bounds.
    Range,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("the value of '{field}' must be an int or a float.")]
    NotNumeric { field: &'static str },

    #[error("the value of '{field}' must not be less than {min}.")]
    BelowMinimum { field: &'static str, min: f64 },

    #[error("the value of '{field}' must not be greater than {max}.")]
    AboveMaximum { field: &'static str, max: f64 },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::NotNumeric { .. } => ErrorKind::Type,
            ValidationError::BelowMinimum { .. } | ValidationError::AboveMaximum { .. } => {
                ErrorKind::Range
            }
        }
    }

    /// Name of the field that rejected the candidate.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NotNumeric { field }
            | ValidationError::BelowMinimum { field, .. }
            | ValidationError::AboveMaximum { field, .. } => field,
        }
    }
}

// ============================================================================
// Contract
// ============================================================================

/// A numeric-bounds validation rule bound to a field name.
///
/// Bounds are inclusive and immutable after construction; either side may be
/// absent. The default contract requires a non-negative number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedNumericField {
    name: &'static str,
    min_value: Option<f64>,
    max_value: Option<f64>,
}

impl BoundedNumericField {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            min_value: Some(DEFAULT_MIN_VALUE),
            max_value: None,
        }
    }

    pub const fn with_min(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    pub const fn with_max(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    pub const fn unbounded_min(mut self) -> Self {
        self.min_value = None;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn min_value(&self) -> Option<f64> {
        self.min_value
    }

    pub fn max_value(&self) -> Option<f64> {
        self.max_value
    }

    /// Check `candidate` against this contract.
    ///
    /// Returns the candidate's numeric value unchanged on success. Checks run
    /// in order (type, minimum, maximum) and the first violation wins.
    pub fn validate(&self, candidate: Scalar) -> Result<Number, ValidationError> {
        let number = match candidate {
            Scalar::Number(n) => n,
            other => {
                tracing::debug!(
                    field = %self.name,
                    candidate = ?other,
                    "rejected non-numeric candidate"
                );
                return Err(ValidationError::NotNumeric { field: self.name });
            }
        };

        if let Some(min) = self.min_value {
            if number.as_f64() < min {
                tracing::debug!(
                    field = %self.name,
                    candidate = %number,
                    min = min,
                    "rejected candidate below minimum"
                );
                return Err(ValidationError::BelowMinimum {
                    field: self.name,
                    min,
                });
            }
        }

        if let Some(max) = self.max_value {
            if number.as_f64() > max {
                tracing::debug!(
                    field = %self.name,
                    candidate = %number,
                    max = max,
                    "rejected candidate above maximum"
                );
                return Err(ValidationError::AboveMaximum {
                    field: self.name,
                    max,
                });
            }
        }

        Ok(number)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
