use crate::{
    error::Error,
    payload::{Boxed, Payload, RawView},
    reader::{TypeKeyReader, as_is, assembly_failed},
    registry::ConversionRegistry,
    type_key::{Assembler, TypeDescriptor, TypeShape},
};

///
/// SequenceTypeKeyReader
///
/// Reads one collection shape (`List`, `Set` or `Queue`). Iterable payloads
/// are converted element by element in iteration order; an absent payload
/// is an empty collection and any other payload a single-element one.
///

#[derive(Clone, Copy, Debug)]
pub struct SequenceTypeKeyReader {
    shape: TypeShape,
}

impl SequenceTypeKeyReader {
    #[must_use]
    pub const fn new(shape: TypeShape) -> Self {
        Self { shape }
    }

    #[must_use]
    pub const fn shape(&self) -> TypeShape {
        self.shape
    }
}

impl TypeKeyReader for SequenceTypeKeyReader {
    fn is_compatible(&self, descriptor: &TypeDescriptor) -> bool {
        descriptor.is_shape(self.shape)
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

        let (Some(element), Some(Assembler::Sequence { collect })) =
            (descriptor.element(), descriptor.assembler())
        else {
            return Err(assembly_failed(descriptor, value));
        };

        let items = match value.view() {
            RawView::Absent | RawView::Optional(None) => Vec::new(),
            RawView::Items(items) => items
                .into_iter()
                .map(|item| registry.read_descriptor(element, item))
                .collect::<Result<Vec<_>, _>>()?,
            RawView::Optional(Some(inner)) => vec![registry.read_descriptor(element, inner)?],
            _ => vec![registry.read_descriptor(element, value)?],
        };

        collect(items).ok_or_else(|| assembly_failed(descriptor, value))
    }
}
