use crate::{
    error::Error,
    payload::{Boxed, Payload, RawView},
    reader::{NumericTarget, ValueReader, as_is, scalar::parse_literal},
    type_key::RawType,
    types::AtomicLong,
};

///
/// AtomicLongReader
///
/// An existing counter is returned as-is, a number is wrapped through its
/// 64-bit integer value, and anything else is stringified and parsed as a 64-bit
/// integer. A literal that does not parse is a conversion failure.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct AtomicLongReader;

impl ValueReader for AtomicLongReader {
    fn is_compatible(&self, target: RawType) -> bool {
        target.is::<AtomicLong>()
    }

    fn read(&self, target: RawType, value: &dyn Payload) -> Result<Boxed, Error> {
        if let Some(same) = as_is(target, value) {
            return Ok(same);
        }

        let counter = match value.view() {
            RawView::Number(number) => i64::from_number(number)
                .map(AtomicLong::new)
                .ok_or_else(|| Error::malformed(target, number.to_string(), "out of range"))?,
            _ => AtomicLong::new(parse_literal::<i64>(target, value)?),
        };

        Ok(Box::new(counter))
    }
}
