//! Columns and the condition algebra built on top of them.

mod condition;
mod node;
mod query;

#[cfg(test)]
mod tests;

use crate::{
    error::Error,
    payload::Payload,
    type_key::{Reify, TypeKey},
    value::Value,
};

// re-exports
pub use condition::Condition;
pub use node::ConditionNode;
pub use query::ColumnQuery;

///
/// Column
///
/// Immutable name/value pair; the atomic unit of both stored data and
/// predicates. Equality is name plus structural value equality.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    name: String,
    value: Value,
}

impl Column {
    /// Build a column; the name must not be blank.
    pub fn of(name: impl Into<String>, value: impl Into<Value>) -> Result<Self, Error> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::NullArgument { argument: "name" });
        }

        Ok(Self {
            name,
            value: value.into(),
        })
    }

    // Canonical field names are never blank.
    pub(crate) fn synthetic(name: &'static str, value: Value) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    pub fn get<T: Payload>(&self) -> Result<T, Error> {
        self.value.get()
    }

    pub fn get_as<T: Reify>(&self, key: &TypeKey<T>) -> Result<T, Error> {
        self.value.get_as(key)
    }

    #[must_use]
    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.value)
    }
}

crate::impl_payload!(Column);
