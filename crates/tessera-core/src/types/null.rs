use crate::payload::RawView;

///
/// Null
///
/// Explicit absence. A `Value` only holds `Null` when it was constructed
/// to do so (`Value::null`); reads of it yield empty optionals and empty
/// collections.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Null;

crate::impl_payload!(Null, |_null| RawView::Absent);
