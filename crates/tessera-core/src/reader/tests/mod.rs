mod keyed;

use crate::{
    error::Error,
    payload::{Payload, downcast},
    reader::{TypeKeyReader, ValueReader},
    registry::ConversionRegistry,
    type_key::{RawType, Reify},
};

// ---- helpers ----

fn read<T: Payload>(reader: &dyn ValueReader, value: &dyn Payload) -> Result<T, Error> {
    reader
        .read(RawType::of::<T>(), value)
        .map(|boxed| downcast::<T>(boxed).expect("reader output type"))
}

fn convert<T: Reify>(reader: &dyn TypeKeyReader, value: &dyn Payload) -> Result<T, Error> {
    let registry = ConversionRegistry::standard();

    reader
        .convert(&T::descriptor(), value, &registry)
        .map(|boxed| downcast::<T>(boxed).expect("reader output type"))
}
