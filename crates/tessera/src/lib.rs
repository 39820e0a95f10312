//! ## Crate layout
//! - `core`: payloads, type keys, the conversion registry, and the
//!   column/condition algebra.
//! - `config`: TOML configuration for the conversion registry.
//!
//! The `prelude` module is the surface most callers need to build
//! predicates and read column values.

pub use tessera_core as core;

pub mod config;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::{Config, ConfigError};
pub use tessera_core::{Error, ErrorClass};

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        prelude::*,
        registry::{FallbackPolicy, RegistryConfig},
    };
}
