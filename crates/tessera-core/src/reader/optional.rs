use crate::{
    error::Error,
    payload::{Boxed, Payload, RawView},
    reader::{TypeKeyReader, as_is, assembly_failed},
    registry::ConversionRegistry,
    type_key::{Assembler, TypeDescriptor, TypeShape},
};

///
/// OptionalTypeKeyReader
///
/// Accepts exactly the one-argument optional shape. The payload is
/// converted to the element type and wrapped as present; an absent payload
/// becomes the empty optional instead of an error, and so does blank text
/// unless the element type is `String`.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct OptionalTypeKeyReader;

impl TypeKeyReader for OptionalTypeKeyReader {
    fn is_compatible(&self, descriptor: &TypeDescriptor) -> bool {
        descriptor.is_shape(TypeShape::Optional)
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

        let (Some(element), Some(Assembler::Optional { present, empty })) =
            (descriptor.element(), descriptor.assembler())
        else {
            return Err(assembly_failed(descriptor, value));
        };

        let inner = match value.view() {
            RawView::Absent | RawView::Optional(None) => return Ok(empty()),
            RawView::Optional(Some(inner)) => inner,
            _ => value,
        };
        if is_blank(inner) && !element.raw().is::<String>() {
            return Ok(empty());
        }

        let converted = registry.read_descriptor(element, inner)?;

        present(converted).ok_or_else(|| assembly_failed(descriptor, value))
    }
}

fn is_blank(value: &dyn Payload) -> bool {
    matches!(value.view(), RawView::Text(text) if text.trim().is_empty())
}
