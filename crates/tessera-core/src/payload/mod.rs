//! Raw payloads: the opaque values stored inside a `Value`.
//!
//! A payload is any `'static` value that can be cloned, compared and
//! classified through a borrowed `RawView`. Readers only ever look at
//! payloads through this trait; they never assume a closed set of types.

mod impls;


use std::{any::Any, fmt};

///
/// Boxed
///
/// Owned, type-erased payload produced by readers and assemblers.
///

pub type Boxed = Box<dyn Payload>;

///
/// Payload
///
/// Use `impl_payload!` for concrete types; the generic containers in
/// `impls` are written out by hand.
///

pub trait Payload: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn clone_payload(&self) -> Boxed;

    /// Structural equality across trait objects; false for different
    /// concrete types.
    fn eq_payload(&self, other: &dyn Payload) -> bool;

    fn type_name(&self) -> &'static str;

    fn view(&self) -> RawView<'_> {
        RawView::Object
    }
}

impl Clone for Boxed {
    fn clone(&self) -> Self {
        self.clone_payload()
    }
}

impl PartialEq for dyn Payload {
    fn eq(&self, other: &Self) -> bool {
        self.eq_payload(other)
    }
}

///
/// RawView
///
/// Borrowed classification of a payload. This is the only shape readers
/// reason about when the payload is not already of the requested type.
///

#[derive(Clone, Debug)]
pub enum RawView<'a> {
    Absent,
    Bool(bool),
    Char(char),
    Number(Number),
    Text(&'a str),
    Optional(Option<&'a dyn Payload>),
    Items(Vec<&'a dyn Payload>),
    Entries(Vec<(&'a dyn Payload, &'a dyn Payload)>),
    Object,
}

impl RawView<'_> {
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent | Self::Optional(None))
    }
}

///
/// Number
///
/// Numeric payload classification. Narrowing follows primitive `as`
/// semantics: floats truncate toward zero and saturate, integers wrap.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
impl Number {
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::Signed(v) => v,
            Self::Unsigned(v) => v as i64,
            Self::Float(v) => v as i64,
        }
    }

    #[must_use]
    pub const fn as_u64(self) -> u64 {
        match self {
            Self::Signed(v) => v as u64,
            Self::Unsigned(v) => v,
            Self::Float(v) => v as u64,
        }
    }

    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Signed(v) => v as f64,
            Self::Unsigned(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Signed(v) => v == 0,
            Self::Unsigned(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Literal text of a payload, if it has one.
#[must_use]
pub fn render(value: &dyn Payload) -> Option<String> {
    match value.view() {
        RawView::Text(text) => Some(text.to_owned()),
        RawView::Number(number) => Some(number.to_string()),
        RawView::Bool(flag) => Some(flag.to_string()),
        RawView::Char(ch) => Some(ch.to_string()),
        RawView::Optional(Some(inner)) => render(inner),
        _ => None,
    }
}

/// Literal text of a payload, falling back to its `Debug` form.
#[must_use]
pub fn literal(value: &dyn Payload) -> String {
    render(value).unwrap_or_else(|| format!("{value:?}"))
}

/// Concrete type id of a payload (not of `dyn Payload`).
#[must_use]
pub fn type_id_of(value: &dyn Payload) -> std::any::TypeId {
    value.as_any().type_id()
}

/// Take ownership of a boxed payload as `T`.
///
/// On mismatch the concrete type name of the payload is returned.
pub fn downcast<T: Payload>(value: Boxed) -> Result<T, &'static str> {
    if !value.as_any().is::<T>() {
        return Err(value.type_name());
    }

    value
        .into_any()
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| std::any::type_name::<T>())
}

//
// MACROS
//

/// Expands the type-erasure plumbing shared by every payload impl.
#[doc(hidden)]
#[macro_export]
macro_rules! __payload_common {
    () => {
        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> {
            self
        }

        fn clone_payload(&self) -> $crate::payload::Boxed {
            ::std::boxed::Box::new(::std::clone::Clone::clone(self))
        }

        fn eq_payload(&self, other: &dyn $crate::payload::Payload) -> bool {
            other
                .as_any()
                .downcast_ref::<Self>()
                .is_some_and(|other| other == self)
        }

        fn type_name(&self) -> &'static str {
            ::std::any::type_name::<Self>()
        }
    };
}

/// Implement `Payload` and scalar `Reify` for a concrete type.
///
/// ```ignore
/// impl_payload!(MyQuery);
/// impl_payload!(Email, |email| RawView::Text(email.as_str()));
/// ```
#[macro_export]
macro_rules! impl_payload {
    ($ty:ty) => {
        $crate::impl_payload!($ty, |_value| $crate::payload::RawView::Object);
    };
    ($ty:ty, |$value:ident| $view:expr) => {
        impl $crate::payload::Payload for $ty {
            $crate::__payload_common!();

            fn view(&self) -> $crate::payload::RawView<'_> {
                let $value = self;
                $view
            }
        }

        impl $crate::type_key::Reify for $ty {
            fn descriptor() -> $crate::type_key::TypeDescriptor {
                $crate::type_key::TypeDescriptor::scalar::<Self>()
            }
        }
    };
}
