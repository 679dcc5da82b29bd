//! Container settings.

use serde::{Deserialize, Serialize};

/// Default bound on nested resolutions.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Behaviour switches for a [`Container`](crate::container::Container).
///
/// Every field has a default, so partial settings deserialize:
///
/// ```
/// use bindery_container::settings::ContainerSettings;
///
/// let settings = ContainerSettings::default();
/// assert!(settings.auto_bind);
/// assert!(settings.allow_override);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSettings {
    /// Resolving a key with no binding binds it to itself (Temporal)
    /// first. When off, such a resolution fails with `NotBound`.
    pub auto_bind: bool,

    /// A second `bind` for the same key replaces the first. When off, it
    /// fails with `AlreadyBound`.
    pub allow_override: bool,

    /// Maximum number of nested resolutions on one thread.
    pub max_depth: usize,

    /// Run [`Container::validate`](crate::container::Container::validate)
    /// at the end of `ContainerBuilder::build`.
    pub validate_on_build: bool,
}

impl Default for ContainerSettings {
    fn default() -> Self {
        Self {
            auto_bind: true,
            allow_override: true,
            max_depth: DEFAULT_MAX_DEPTH,
            validate_on_build: false,
        }
    }
}
