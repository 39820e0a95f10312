//! Conversion registry: ordered readers plus the dispatch that picks the
//! first compatible one.
//!
//! The registry is assembled once (usually `ConversionRegistry::standard`)
//! and immutable afterwards, so any number of callers may read through it
//! concurrently without locking.

mod config;


use crate::{
    error::Error,
    payload::{Boxed, Payload, downcast, render},
    reader::{self, TypeKeyReader, ValueReader},
    type_key::{RawType, Reify, TypeDescriptor, TypeKey, TypeShape},
};
use std::{
    any::type_name,
    fmt,
    str::FromStr,
    sync::{Arc, OnceLock},
};

// re-exports
pub use config::{FallbackPolicy, RegistryConfig};

static GLOBAL: OnceLock<Arc<ConversionRegistry>> = OnceLock::new();

///
/// TextParser
///
/// Last-resort conversion for one target: parse the payload's literal text.
///

#[derive(Clone, Copy)]
struct TextParser {
    target: RawType,
    parse: fn(&str) -> Result<Boxed, String>,
}

///
/// ConversionRegistry
///

pub struct ConversionRegistry {
    value_readers: Vec<Arc<dyn ValueReader>>,
    key_readers: Vec<Arc<dyn TypeKeyReader>>,
    parsers: Vec<TextParser>,
    policy: FallbackPolicy,
}

impl ConversionRegistry {
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry holding the standard readers in their fixed order.
    #[must_use]
    pub fn standard() -> Self {
        Self::builder().standard_readers().build()
    }

    /// Standard readers under the fallback policy from `config`.
    #[must_use]
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::builder()
            .standard_readers()
            .fallback(config.fallback)
            .build()
    }

    ///
    /// PROCESS-WIDE REGISTRY
    ///

    /// The process-wide registry, initialized to `standard()` on first use
    /// unless one was installed earlier.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(|| {
            log::debug!("conversion registry: initializing standard registry");
            Arc::new(Self::standard())
        }))
    }

    /// Publish `registry` as the process-wide registry.
    ///
    /// Only one publication can happen; it must precede the first call to
    /// `global()`.
    pub fn install(registry: Self) -> Result<Arc<Self>, Error> {
        let registry = Arc::new(registry);
        GLOBAL
            .set(Arc::clone(&registry))
            .map_err(|_| Error::RegistryInstalled)?;

        log::debug!("conversion registry: installed {registry:?}");

        Ok(registry)
    }

    ///
    /// TYPED READS
    ///

    /// Read `value` as the raw type `T`.
    pub fn read_as<T: Payload>(&self, value: &dyn Payload) -> Result<T, Error> {
        let converted = self.read_raw(RawType::of::<T>(), value)?;

        expect::<T>(converted)
    }

    /// Read `value` as the parameterized type captured by `key`.
    pub fn read_key<T: Reify>(&self, value: &dyn Payload, key: &TypeKey<T>) -> Result<T, Error> {
        let converted = self.read_descriptor(key.get(), value)?;

        expect::<T>(converted)
    }

    ///
    /// DYNAMIC READS
    ///

    /// Raw dispatch: the first compatible value reader converts, otherwise
    /// the fallback policy applies.
    pub fn read_raw(&self, target: RawType, value: &dyn Payload) -> Result<Boxed, Error> {
        if let Some(reader) = self.value_readers.iter().find(|r| r.is_compatible(target)) {
            log::trace!(
                "read {} as {target} via {}",
                value.type_name(),
                reader.name()
            );

            return reader.read(target, value);
        }

        self.fallback(target, value)
    }

    /// Keyed dispatch. Scalar descriptors go through raw dispatch.
    pub fn read_descriptor(
        &self,
        descriptor: &TypeDescriptor,
        value: &dyn Payload,
    ) -> Result<Boxed, Error> {
        if descriptor.shape() == TypeShape::Scalar {
            return self.read_raw(descriptor.raw(), value);
        }

        if let Some(reader) = self
            .key_readers
            .iter()
            .find(|r| r.is_compatible(descriptor))
        {
            log::trace!(
                "read {} as {descriptor} via {}",
                value.type_name(),
                reader.name()
            );

            return reader.convert(descriptor, value, self);
        }

        if self.policy.allows_identity() && descriptor.raw().matches(value) {
            log::debug!("no keyed reader for {descriptor}; returning payload unchanged");

            return Ok(value.clone_payload());
        }

        Err(Error::no_such_converter(descriptor, value.type_name()))
    }

    ///
    /// INTROSPECTION
    ///

    #[must_use]
    pub const fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Whether some value reader accepts `target`.
    #[must_use]
    pub fn reads(&self, target: RawType) -> bool {
        self.value_readers.iter().any(|r| r.is_compatible(target))
    }

    /// Whether some keyed reader accepts `descriptor`.
    #[must_use]
    pub fn reads_key(&self, descriptor: &TypeDescriptor) -> bool {
        self.key_readers.iter().any(|r| r.is_compatible(descriptor))
    }

    // Identity first, then the registered text parser, then failure.
    fn fallback(&self, target: RawType, value: &dyn Payload) -> Result<Boxed, Error> {
        if self.policy.allows_identity() && target.matches(value) {
            log::debug!("no value reader for {target}; returning payload unchanged");

            return Ok(value.clone_payload());
        }

        if self.policy.allows_text()
            && let Some(parser) = self.parsers.iter().find(|p| p.target == target)
            && let Some(text) = render(value)
        {
            log::debug!("no value reader for {target}; parsing literal '{text}'");

            return (parser.parse)(&text).map_err(|reason| Error::malformed(target, text, reason));
        }

        Err(Error::no_such_converter(target, value.type_name()))
    }
}

impl Default for ConversionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for ConversionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value_readers: Vec<_> = self.value_readers.iter().map(|r| r.name()).collect();
        let key_readers: Vec<_> = self.key_readers.iter().map(|r| r.name()).collect();
        let parsers: Vec<_> = self.parsers.iter().map(|p| p.target.name()).collect();

        f.debug_struct("ConversionRegistry")
            .field("value_readers", &value_readers)
            .field("key_readers", &key_readers)
            .field("parsers", &parsers)
            .field("policy", &self.policy)
            .finish()
    }
}

///
/// RegistryBuilder
///
/// Readers are consulted in the order they are added.
///

#[derive(Default)]
pub struct RegistryBuilder {
    value_readers: Vec<Arc<dyn ValueReader>>,
    key_readers: Vec<Arc<dyn TypeKeyReader>>,
    parsers: Vec<TextParser>,
    policy: FallbackPolicy,
}

impl RegistryBuilder {
    #[must_use]
    pub fn standard_readers(mut self) -> Self {
        self.value_readers.extend(reader::standard_value_readers());
        self.key_readers.extend(reader::standard_key_readers());
        self
    }

    #[must_use]
    pub fn value_reader(mut self, reader: impl ValueReader + 'static) -> Self {
        self.value_readers.push(Arc::new(reader));
        self
    }

    #[must_use]
    pub fn key_reader(mut self, reader: impl TypeKeyReader + 'static) -> Self {
        self.key_readers.push(Arc::new(reader));
        self
    }

    /// Register `T` for the text fallback: when no reader accepts `T`, the
    /// payload's literal is parsed with `FromStr`.
    #[must_use]
    pub fn text_parser<T>(mut self) -> Self
    where
        T: Payload + FromStr<Err: fmt::Display>,
    {
        self.parsers.push(TextParser {
            target: RawType::of::<T>(),
            parse: parse_text::<T>,
        });
        self
    }

    #[must_use]
    pub const fn fallback(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn build(self) -> ConversionRegistry {
        ConversionRegistry {
            value_readers: self.value_readers,
            key_readers: self.key_readers,
            parsers: self.parsers,
            policy: self.policy,
        }
    }
}

fn parse_text<T>(text: &str) -> Result<Boxed, String>
where
    T: Payload + FromStr<Err: fmt::Display>,
{
    text.parse::<T>()
        .map(|parsed| Box::new(parsed) as Boxed)
        .map_err(|err| err.to_string())
}

fn expect<T: Payload>(converted: Boxed) -> Result<T, Error> {
    downcast::<T>(converted).map_err(|found| Error::ReaderMismatch {
        expected: type_name::<T>(),
        found,
    })
}
