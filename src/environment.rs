use crate::error::ErrorKind;
use crate::value::Value;
use std::collections::HashMap;

/// Variable bindings for one run. Bindings are only ever created or replaced.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Bind `name`, replacing any previous value and its type.
    pub fn assign(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn lookup(&self, name: &str) -> Result<Value, ErrorKind> {
        self.get(name)
            .copied()
            .ok_or_else(|| ErrorKind::UnknownVariable(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
