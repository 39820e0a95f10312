use crate::{
    error::Error,
    payload::{Payload, RawView},
    registry::ConversionRegistry,
    type_key::{Reify, TypeKey},
    types::Null,
};
use std::{fmt, sync::Arc};

///
/// Value
///
/// Holder for one immutable raw payload plus the registry used to read it.
/// Every read goes through the registry and produces a fresh value; the
/// stored payload is never touched.
///

#[derive(Clone)]
pub struct Value {
    payload: Arc<dyn Payload>,
    registry: Arc<ConversionRegistry>,
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Wrap `payload`, reading through the process-wide registry.
    pub fn new(payload: impl Payload) -> Self {
        Self::with_registry(payload, ConversionRegistry::global())
    }

    pub fn with_registry(payload: impl Payload, registry: Arc<ConversionRegistry>) -> Self {
        Self {
            payload: Arc::new(payload),
            registry,
        }
    }

    /// An explicitly null value.
    #[must_use]
    pub fn null() -> Self {
        Self::new(Null)
    }

    /// Wrap a payload that may be missing; a missing payload is rejected
    /// rather than silently turned into `null()`.
    pub fn try_new<P: Payload>(payload: Option<P>) -> Result<Self, Error> {
        payload
            .map(Self::new)
            .ok_or(Error::NullArgument { argument: "value" })
    }

    /// Same payload, read through another registry.
    #[must_use]
    pub fn rebind(&self, registry: Arc<ConversionRegistry>) -> Self {
        Self {
            payload: Arc::clone(&self.payload),
            registry,
        }
    }

    ///
    /// READS
    ///

    pub fn get<T: Payload>(&self) -> Result<T, Error> {
        self.registry.read_as::<T>(self.raw())
    }

    pub fn get_as<T: Reify>(&self, key: &TypeKey<T>) -> Result<T, Error> {
        self.registry.read_key(self.raw(), key)
    }

    /// The stored payload, unconverted.
    #[must_use]
    pub fn raw(&self) -> &dyn Payload {
        &*self.payload
    }

    /// Borrow the payload as `T` without conversion.
    #[must_use]
    pub fn downcast_ref<T: Payload>(&self) -> Option<&T> {
        self.payload.as_any().downcast_ref::<T>()
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.payload.view(), RawView::Absent)
    }

    #[must_use]
    pub const fn registry(&self) -> &Arc<ConversionRegistry> {
        &self.registry
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.payload.eq_payload(other.raw())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Value").field(&self.payload).finish()
    }
}

impl<P: Payload> From<P> for Value {
    fn from(payload: P) -> Self {
        Self::new(payload)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::new(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{payload::Payload, types::AtomicLong};

    #[test]
    fn get_converts_without_touching_the_payload() {
        let value = Value::from("12");

        assert_eq!(value.get::<i64>().expect("text parses"), 12);
        assert_eq!(value.get::<f64>().expect("text parses"), 12.0);
        assert_eq!(value.downcast_ref::<String>(), Some(&"12".to_string()));
    }

    #[test]
    fn get_on_own_type_returns_equal_value() {
        let value = Value::new(AtomicLong::new(3));

        assert_eq!(value.get::<AtomicLong>().expect("as-is"), AtomicLong::new(3));
    }

    #[test]
    fn equality_is_payload_equality() {
        assert_eq!(Value::new(10_i64), Value::new(10_i64));
        assert_ne!(Value::new(10_i64), Value::new(10_i32));
        assert_ne!(Value::from("10"), Value::new(10_i64));
    }

    #[test]
    fn null_is_explicit() {
        assert!(Value::null().is_null());
        assert!(!Value::new(0_u8).is_null());

        let err = Value::try_new::<String>(None).expect_err("missing payload");
        assert_eq!(err, Error::NullArgument { argument: "value" });
    }

    #[test]
    fn rebind_keeps_payload() {
        let registry = Arc::new(ConversionRegistry::standard());
        let value = Value::new(7_u16);
        let rebound = value.rebind(Arc::clone(&registry));

        assert_eq!(rebound, value);
        assert!(Arc::ptr_eq(rebound.registry(), &registry));
        assert_eq!(rebound.raw().type_name(), "u16");
    }
}
