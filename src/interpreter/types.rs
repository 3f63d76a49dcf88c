use super::value::Value;
use std::str::FromStr;

/// Type named in a declaration, e.g. the `int` of `var(int) x = 1;`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType {
    Int,
    Byte,
    Boolean,
    Char,
    Float,
    Double,
    String,
}

impl DeclaredType {
    pub const fn name(&self) -> &'static str {
        match self {
            DeclaredType::Int => "INT",
            DeclaredType::Byte => "BYTE",
            DeclaredType::Boolean => "BOOLEAN",
            DeclaredType::Char => "CHAR",
            DeclaredType::Float => "FLOAT",
            DeclaredType::Double => "DOUBLE",
            DeclaredType::String => "STRING",
        }
    }

    /// Whether `value` may be stored in a variable of this type.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (DeclaredType::Int, Value::Int(_)) => true,
            (DeclaredType::Byte, Value::Int(v)) => (-128..=127).contains(v),
            (DeclaredType::Boolean, Value::Bool(_)) => true,
            (DeclaredType::Char, Value::Char(_)) => true,
            (DeclaredType::Char, Value::Text(text)) => text.chars().count() == 1,
            (DeclaredType::Float | DeclaredType::Double, Value::Float(_)) => true,
            (DeclaredType::String, Value::Text(_)) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DeclaredType {
    type Err = ();

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INT" => Ok(DeclaredType::Int),
            "BYTE" => Ok(DeclaredType::Byte),
            "BOOLEAN" => Ok(DeclaredType::Boolean),
            "CHAR" => Ok(DeclaredType::Char),
            "FLOAT" => Ok(DeclaredType::Float),
            "DOUBLE" => Ok(DeclaredType::Double),
            "STRING" => Ok(DeclaredType::String),
            _ => Err(()),
        }
    }
}
