use tracing::debug;

use crate::config::ValidationConfig;

/// Returns the layers to enable. Empty unless validations are enabled.
pub fn get_names(validation: &ValidationConfig) -> Vec<String> {
    let layer_names = if validation.enabled {
        validation.layers.clone()
    } else {
        vec![]
    };
    debug!("Layers to enable: {}", layer_names.join(", "));
    layer_names
}
