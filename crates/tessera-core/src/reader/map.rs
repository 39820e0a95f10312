use crate::{
    error::Error,
    payload::{Boxed, Payload, RawView},
    reader::{TypeKeyReader, as_is, assembly_failed},
    registry::ConversionRegistry,
    type_key::{Assembler, TypeDescriptor, TypeShape},
};

///
/// MapTypeKeyReader
///
/// Keys and values are converted independently. Only payloads exposing
/// entries (or absent payloads, read as an empty map) are accepted.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct MapTypeKeyReader;

impl TypeKeyReader for MapTypeKeyReader {
    fn is_compatible(&self, descriptor: &TypeDescriptor) -> bool {
        descriptor.is_shape(TypeShape::Map)
    }

    fn convert(
        &self,
        descriptor: &TypeDescriptor,
        value: &dyn Payload,
        registry: &ConversionRegistry,
    ) -> Result<Boxed, Error> {
        if let Some(same) = as_is(descriptor.raw(), value) {
            return Ok(same);
        }

        let ([key_type, value_type], Some(Assembler::Map { collect })) =
            (descriptor.args(), descriptor.assembler())
        else {
            return Err(assembly_failed(descriptor, value));
        };

        let entries = match value.view() {
            RawView::Absent | RawView::Optional(None) => Vec::new(),
            RawView::Entries(entries) => entries
                .into_iter()
                .map(|(key, entry)| {
                    Ok((
                        registry.read_descriptor(key_type, key)?,
                        registry.read_descriptor(value_type, entry)?,
                    ))
                })
                .collect::<Result<Vec<_>, Error>>()?,
            _ => return Err(Error::no_such_converter(descriptor, value.type_name())),
        };

        collect(entries).ok_or_else(|| assembly_failed(descriptor, value))
    }
}
