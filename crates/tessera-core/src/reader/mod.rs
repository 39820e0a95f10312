//! Reader capabilities and the standard reader set.
//!
//! A `ValueReader` converts a payload into one raw target type; a
//! `TypeKeyReader` converts a payload into a parameterized target described
//! by a `TypeDescriptor`. Both are plain capability traits: the registry
//! owns an ordered list of each and the first compatible reader wins.

mod atomic;
mod map;
mod optional;
mod scalar;
mod sequence;
mod temporal;

#[cfg(test)]
mod tests;

use crate::{
    error::Error,
    payload::{Boxed, Payload},
    registry::ConversionRegistry,
    type_key::{RawType, TypeDescriptor, TypeShape},
};
use std::sync::Arc;

// re-exports
pub use atomic::AtomicLongReader;
pub use map::MapTypeKeyReader;
pub use optional::OptionalTypeKeyReader;
pub use scalar::{BoolReader, CharReader, NumberReader, NumericTarget, StringReader};
pub use sequence::SequenceTypeKeyReader;
pub use temporal::{DateReader, DateTimeReader};

///
/// ValueReader
///

pub trait ValueReader: Send + Sync {
    fn is_compatible(&self, target: RawType) -> bool;

    fn read(&self, target: RawType, value: &dyn Payload) -> Result<Boxed, Error>;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

///
/// TypeKeyReader
///
/// Element conversion goes back through the registry, so a keyed reader
/// never needs to know how its arguments are read.
///

pub trait TypeKeyReader: Send + Sync {
    fn is_compatible(&self, descriptor: &TypeDescriptor) -> bool;

    fn convert(
        &self,
        descriptor: &TypeDescriptor,
        value: &dyn Payload,
        registry: &ConversionRegistry,
    ) -> Result<Boxed, Error>;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Value readers in the order the standard registry consults them.
#[must_use]
pub fn standard_value_readers() -> Vec<Arc<dyn ValueReader>> {
    vec![
        Arc::new(StringReader),
        Arc::new(BoolReader),
        Arc::new(CharReader),
        Arc::new(NumberReader::<i8>::new()),
        Arc::new(NumberReader::<i16>::new()),
        Arc::new(NumberReader::<i32>::new()),
        Arc::new(NumberReader::<i64>::new()),
        Arc::new(NumberReader::<u8>::new()),
        Arc::new(NumberReader::<u16>::new()),
        Arc::new(NumberReader::<u32>::new()),
        Arc::new(NumberReader::<u64>::new()),
        Arc::new(NumberReader::<f32>::new()),
        Arc::new(NumberReader::<f64>::new()),
        Arc::new(AtomicLongReader),
        Arc::new(DateReader),
        Arc::new(DateTimeReader),
    ]
}

/// Keyed readers in the order the standard registry consults them.
#[must_use]
pub fn standard_key_readers() -> Vec<Arc<dyn TypeKeyReader>> {
    vec![
        Arc::new(OptionalTypeKeyReader),
        Arc::new(SequenceTypeKeyReader::new(TypeShape::List)),
        Arc::new(SequenceTypeKeyReader::new(TypeShape::Set)),
        Arc::new(SequenceTypeKeyReader::new(TypeShape::Queue)),
        Arc::new(MapTypeKeyReader),
    ]
}

/// Clone `value` when it is already the requested type.
pub(crate) fn as_is(target: RawType, value: &dyn Payload) -> Option<Boxed> {
    target.matches(value).then(|| value.clone_payload())
}

/// Assembler mismatch: the descriptor built something other than the
/// parts the registry handed it.
pub(crate) fn assembly_failed(descriptor: &TypeDescriptor, value: &dyn Payload) -> Error {
    Error::no_such_converter(descriptor, value.type_name())
}
