use crate::column::Condition;
use derive_more::Display;
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Every failure surfaced by the core. All operations are pure and
/// deterministic, so none of these are retried internally.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    /// A type key was requested from a descriptor that does not carry the
    /// full parameterization of the target type.
    #[error("incompatible type key {descriptor}: {reason}")]
    IncompatibleType { descriptor: String, reason: String },

    #[error("invalid operand for {condition}: {reason}")]
    InvalidOperand {
        condition: Condition,
        reason: String,
    },

    /// A literal could not be parsed into the requested type.
    #[error("cannot parse '{literal}' as {requested}: {reason}")]
    MalformedLiteral {
        requested: String,
        literal: String,
        reason: String,
    },

    /// No reader (raw or keyed) matched and the fallback path did not apply.
    #[error("no converter reads {actual} as {requested}")]
    NoSuchConverter {
        requested: String,
        actual: &'static str,
    },

    #[error("required argument '{argument}' is missing")]
    NullArgument { argument: &'static str },

    /// A reader returned a payload of a different concrete type than the
    /// one it was dispatched for.
    #[error("reader produced {found} where {expected} was requested")]
    ReaderMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("a process-wide conversion registry is already installed")]
    RegistryInstalled,
}

impl Error {
    pub(crate) fn no_such_converter(requested: impl fmt::Display, actual: &'static str) -> Self {
        Self::NoSuchConverter {
            requested: requested.to_string(),
            actual,
        }
    }

    pub(crate) fn malformed(
        requested: impl fmt::Display,
        literal: impl Into<String>,
        reason: impl fmt::Display,
    ) -> Self {
        Self::MalformedLiteral {
            requested: requested.to_string(),
            literal: literal.into(),
            reason: reason.to_string(),
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidOperand { .. } | Self::NullArgument { .. } => ErrorClass::Argument,
            Self::IncompatibleType { .. } => ErrorClass::Type,
            Self::MalformedLiteral { .. } | Self::NoSuchConverter { .. } => {
                ErrorClass::Conversion
            }
            Self::ReaderMismatch { .. } => ErrorClass::Internal,
            Self::RegistryInstalled => ErrorClass::Configuration,
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

///
/// ErrorClass
///
/// Coarse classification for callers that only care about the kind of
/// failure, not its payload.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    #[display("argument")]
    Argument,
    #[display("configuration")]
    Configuration,
    #[display("conversion")]
    Conversion,
    #[display("internal")]
    Internal,
    #[display("type")]
    Type,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_groups_variants() {
        assert_eq!(
            Error::NullArgument { argument: "nodes" }.class(),
            ErrorClass::Argument
        );
        assert_eq!(
            Error::no_such_converter("u8", "bool").class(),
            ErrorClass::Conversion
        );
        assert_eq!(Error::RegistryInstalled.class(), ErrorClass::Configuration);
    }

    #[test]
    fn display_with_class_prefixes_message() {
        let err = Error::malformed("i64", "abc", "invalid digit found in string");

        assert_eq!(
            err.display_with_class(),
            "conversion: cannot parse 'abc' as i64: invalid digit found in string"
        );
    }
}
