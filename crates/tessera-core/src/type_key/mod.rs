//! Type keys: descriptors that capture a full parameterized target type.
//!
//! `TypeId` alone cannot tell a reader how to build an `Option<T>` for a
//! `T` it only knows at runtime. A `TypeDescriptor` carries the outer shape,
//! the argument descriptors, and an `Assembler` holding the monomorphized
//! constructors for the container, so keyed readers can convert the parts
//! and let the descriptor put the result together.

mod reify;

#[cfg(test)]
mod tests;

use crate::{
    error::Error,
    payload::{Boxed, Payload},
};
use derive_more::Deref;
use std::{
    any::{TypeId, type_name},
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

// re-exports
pub use reify::Reify;

///
/// RawType
///
/// Raw type token: the concrete type id plus its name for diagnostics.
/// Equality and hashing use the type id only.
///

#[derive(Clone, Copy, Debug)]
pub struct RawType {
    id: TypeId,
    name: &'static str,
}

impl RawType {
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    #[must_use]
    pub const fn id(self) -> TypeId {
        self.id
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn is<T: ?Sized + 'static>(self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Whether `value` is already an instance of this type.
    #[must_use]
    pub fn matches(self, value: &dyn Payload) -> bool {
        crate::payload::type_id_of(value) == self.id
    }
}

impl PartialEq for RawType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RawType {}

impl Hash for RawType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for RawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

///
/// TypeShape
///
/// Outer shape of a described type. Collections of different concrete
/// types share a shape (`BTreeSet` and `HashSet` are both `Set`).
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeShape {
    Scalar,
    Optional,
    List,
    Set,
    Queue,
    Map,
}

impl TypeShape {
    /// Number of type arguments a fully parameterized instance carries.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Scalar => 0,
            Self::Optional | Self::List | Self::Set | Self::Queue => 1,
            Self::Map => 2,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scalar => "Scalar",
            Self::Optional => "Optional",
            Self::List => "List",
            Self::Set => "Set",
            Self::Queue => "Queue",
            Self::Map => "Map",
        }
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

///
/// Assembler
///
/// Monomorphized constructors for a container type. Each returns `None`
/// when a part is not of the argument type the descriptor declared.
///

#[derive(Clone, Copy)]
pub enum Assembler {
    Optional {
        present: fn(Boxed) -> Option<Boxed>,
        empty: fn() -> Boxed,
    },
    Sequence {
        collect: fn(Vec<Boxed>) -> Option<Boxed>,
    },
    Map {
        collect: fn(Vec<(Boxed, Boxed)>) -> Option<Boxed>,
    },
}

impl fmt::Debug for Assembler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Optional { .. } => "Assembler::Optional",
            Self::Sequence { .. } => "Assembler::Sequence",
            Self::Map { .. } => "Assembler::Map",
        };

        f.write_str(label)
    }
}

///
/// TypeDescriptor
///
/// Structural description of a type. Equality is structural over shape,
/// raw type and arguments; the assembler does not take part.
///

#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    shape: TypeShape,
    raw: RawType,
    args: Vec<Self>,
    assembler: Option<Assembler>,
}

impl TypeDescriptor {
    /// Descriptor for a type with no type arguments.
    #[must_use]
    pub fn scalar<T: Payload>() -> Self {
        Self {
            shape: TypeShape::Scalar,
            raw: RawType::of::<T>(),
            args: Vec::new(),
            assembler: None,
        }
    }

    pub(crate) fn parameterized<T: Payload>(
        shape: TypeShape,
        args: Vec<Self>,
        assembler: Assembler,
    ) -> Self {
        debug_assert_eq!(shape.arity(), args.len(), "arity mismatch for {shape}");

        Self {
            shape,
            raw: RawType::of::<T>(),
            args,
            assembler: Some(assembler),
        }
    }

    /// Descriptor for an outer shape whose type arguments are unknown.
    ///
    /// Such a descriptor cannot back a `TypeKey`, and no keyed reader
    /// accepts it.
    #[must_use]
    pub const fn erased(shape: TypeShape, raw: RawType) -> Self {
        Self {
            shape,
            raw,
            args: Vec::new(),
            assembler: None,
        }
    }

    #[must_use]
    pub const fn shape(&self) -> TypeShape {
        self.shape
    }

    #[must_use]
    pub const fn raw(&self) -> RawType {
        self.raw
    }

    #[must_use]
    pub fn args(&self) -> &[Self] {
        &self.args
    }

    /// The single type argument of a one-argument shape.
    #[must_use]
    pub fn element(&self) -> Option<&Self> {
        match self.args.as_slice() {
            [element] => Some(element),
            _ => None,
        }
    }

    #[must_use]
    pub const fn assembler(&self) -> Option<Assembler> {
        self.assembler
    }

    /// True when the shape expects arguments the descriptor does not carry.
    #[must_use]
    pub fn is_erased(&self) -> bool {
        self.args.len() != self.shape.arity()
            || (self.shape != TypeShape::Scalar && self.assembler.is_none())
    }

    /// True when this is exactly `shape` with its full set of arguments.
    #[must_use]
    pub fn is_shape(&self, shape: TypeShape) -> bool {
        self.shape == shape && !self.is_erased()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.raw == other.raw && self.args == other.args
    }
}

impl Eq for TypeDescriptor {}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shape == TypeShape::Scalar {
            return write!(f, "{}", self.raw);
        }
        if self.args.is_empty() {
            return write!(f, "{}<?>", self.shape);
        }

        write!(f, "{}<", self.shape)?;
        for (index, arg) in self.args.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(">")
    }
}

///
/// TypeKey
///
/// Typed handle on a `TypeDescriptor` for `T`. Built from `T`'s own
/// description, so the full parameterization is always present.
///

#[derive(Deref)]
pub struct TypeKey<T> {
    #[deref]
    descriptor: TypeDescriptor,
    marker: PhantomData<fn() -> T>,
}

impl<T: Reify> TypeKey<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptor: T::descriptor(),
            marker: PhantomData,
        }
    }

    /// Build a key from a runtime descriptor.
    ///
    /// Fails when the descriptor is erased or describes another type.
    pub fn from_descriptor(descriptor: TypeDescriptor) -> Result<Self, Error> {
        if descriptor.is_erased() {
            return Err(Error::IncompatibleType {
                descriptor: descriptor.to_string(),
                reason: "type key constructed without actual type information".to_string(),
            });
        }

        let expected = T::descriptor();
        if descriptor != expected {
            return Err(Error::IncompatibleType {
                descriptor: descriptor.to_string(),
                reason: format!("descriptor does not describe {expected}"),
            });
        }

        Ok(Self {
            descriptor: expected,
            marker: PhantomData,
        })
    }
}

impl<T> TypeKey<T> {
    #[must_use]
    pub const fn get(&self) -> &TypeDescriptor {
        &self.descriptor
    }
}

impl<T: Reify> Default for TypeKey<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypeKey<T> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for TypeKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeKey")
            .field("type", &format_args!("{}", self.descriptor))
            .finish()
    }
}
