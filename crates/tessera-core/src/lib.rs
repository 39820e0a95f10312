//! Core runtime for Tessera: raw payloads, type keys, the conversion registry,
//! and the column/condition algebra used to build query predicates.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod column;
pub mod error;
pub mod payload;
pub mod reader;
pub mod registry;
pub mod type_key;
pub mod types;
pub mod value;

// re-exports
pub use error::{Error, ErrorClass};

///
/// Prelude
///
/// Domain vocabulary only: columns, conditions, values and type keys.
/// Readers and registry internals stay one level down.
///

pub mod prelude {
    pub use crate::{
        column::{Column, ColumnQuery, Condition, ConditionNode},
        payload::Payload,
        registry::ConversionRegistry,
        type_key::TypeKey,
        types::{AtomicLong, Null},
        value::Value,
    };
}
