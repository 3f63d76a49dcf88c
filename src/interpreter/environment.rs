use super::types::DeclaredType;
use super::value::Value;
use compact_str::CompactString;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub ty: DeclaredType,
    pub value: Value,
}

/// All variables of one run. There is a single flat scope.
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<CompactString, Variable>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn access(&self, name: &str) -> Option<&Variable> {
        self.values.get(name)
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name).map(|variable| &variable.value)
    }

    /// Returns false without touching the environment if `name` exists.
    pub fn declare(&mut self, name: &str, ty: DeclaredType, value: Value) -> bool {
        if self.values.contains_key(name) {
            return false;
        }
        self.values.insert(name.into(), Variable { ty, value });
        true
    }

    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), ()> {
        match self.values.get_mut(name) {
            Some(variable) => {
                variable.value = value;
                Ok(())
            }
            None => Err(()),
        }
    }
}
