use serde::Deserialize;

///
/// FallbackPolicy
///
/// What the registry does when no reader accepts the requested type.
///
/// Strict           → fail with NoSuchConverter.
/// Identity         → return the payload unchanged when it already is the
///                    requested type, otherwise fail.
/// IdentityThenText → identity, then parse the payload's literal text when
///                    a text parser is registered for the target.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    Strict,
    Identity,
    #[default]
    IdentityThenText,
}

impl FallbackPolicy {
    #[must_use]
    pub const fn allows_identity(self) -> bool {
        matches!(self, Self::Identity | Self::IdentityThenText)
    }

    #[must_use]
    pub const fn allows_text(self) -> bool {
        matches!(self, Self::IdentityThenText)
    }
}

///
/// RegistryConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    pub fallback: FallbackPolicy,
}
