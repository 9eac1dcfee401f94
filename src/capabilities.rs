use std::collections::HashSet;

use crate::config::ValidationConfig;
use crate::vulkan::{extensions_registry, layers_registry};

/// Checks that every requested name is advertised by the platform.
///
/// Matching is exact and case sensitive; ordering of either list does not
/// matter. An empty request is treated as unsupported. On failure the
/// missing names are returned in request order.
pub fn check_support<R, A>(requested: &[R], available: &[A]) -> Result<(), Vec<String>>
where
    R: AsRef<str>,
    A: AsRef<str>,
{
    let available = available
        .iter()
        .map(|name| name.as_ref())
        .collect::<HashSet<_>>();

    let missing = requested
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| !available.contains(name))
        .map(|name| name.to_owned())
        .collect::<Vec<_>>();

    if requested.is_empty() || !missing.is_empty() {
        return Err(missing);
    }
    Ok(())
}

/// Instance extensions and layers to enable, fixed before the instance is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredCapabilities {
    pub extensions: Vec<String>,
    pub layers: Vec<String>,
    /// When false the layer list is empty and is not checked.
    pub validation_enabled: bool,
}

impl RequiredCapabilities {
    /// Combines the window system's mandatory extensions with whatever the
    /// validation setup needs.
    pub fn gather(window_extensions: Vec<String>, validation: &ValidationConfig) -> Self {
        Self {
            extensions: extensions_registry::get_names(window_extensions, validation.enabled),
            layers: layers_registry::get_names(validation),
            validation_enabled: validation.enabled,
        }
    }
}
