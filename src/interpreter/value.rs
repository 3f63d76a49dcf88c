use compact_str::{format_compact, CompactString};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    #[error("cannot apply '{operator}' to {lhs} and {rhs}")]
    NonNumerics {
        operator: char,
        lhs: &'static str,
        rhs: &'static str,
    },
    #[error("/ by zero")]
    DivisionByZero,
}

/// A runtime value. Every variable stores one of these together with its
/// declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Text(CompactString),
    Bool(bool),
    Float(f64),
    Char(char),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Char(v) => write!(f, "{v}"),
        }
    }
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Text(_) => "text",
            Value::Bool(_) => "boolean",
            Value::Float(_) => "floating",
            Value::Char(_) => "character",
        }
    }

    fn integers(
        &self,
        other: &Value,
        operator: char,
    ) -> Result<(i32, i32), ValueError> {
        match (self, other) {
            (Value::Int(lhs), Value::Int(rhs)) => Ok((*lhs, *rhs)),
            (lhs, rhs) => Err(ValueError::NonNumerics {
                operator,
                lhs: lhs.type_name(),
                rhs: rhs.type_name(),
            }),
        }
    }
}

// Arithmetic + string concatenation. Integer arithmetic wraps.
impl Value {
    pub fn add(&self, other: &Value) -> Result<Value, ValueError> {
        match (self, other) {
            (Value::Text(_), _) | (_, Value::Text(_)) => {
                Ok(Value::Text(format_compact!("{self}{other}")))
            }
            (lhs, rhs) => {
                let (lhs, rhs) = lhs.integers(rhs, '+')?;
                Ok(Value::Int(lhs.wrapping_add(rhs)))
            }
        }
    }

    pub fn subtract(&self, other: &Value) -> Result<Value, ValueError> {
        let (lhs, rhs) = self.integers(other, '-')?;
        Ok(Value::Int(lhs.wrapping_sub(rhs)))
    }

    pub fn multiply(&self, other: &Value) -> Result<Value, ValueError> {
        let (lhs, rhs) = self.integers(other, '*')?;
        Ok(Value::Int(lhs.wrapping_mul(rhs)))
    }

    /// Truncates toward zero.
    pub fn divide(&self, other: &Value) -> Result<Value, ValueError> {
        let (lhs, rhs) = self.integers(other, '/')?;
        if rhs == 0 {
            return Err(ValueError::DivisionByZero);
        }
        Ok(Value::Int(lhs.wrapping_div(rhs)))
    }

    pub fn remainder(&self, other: &Value) -> Result<Value, ValueError> {
        let (lhs, rhs) = self.integers(other, '%')?;
        if rhs == 0 {
            return Err(ValueError::DivisionByZero);
        }
        Ok(Value::Int(lhs.wrapping_rem(rhs)))
    }
}
