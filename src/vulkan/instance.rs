use tracing::{debug, info};

use crate::{
    capabilities::{check_support, RequiredCapabilities},
    config::ApplicationDescriptor,
    vulkan::api::VulkanApi,
    SetupError,
};

/// Validates `required` against what the loader advertises, then creates
/// the instance. Nothing is created unless every check passes.
pub fn create_instance<A: VulkanApi>(
    api: &A,
    descriptor: &ApplicationDescriptor,
    required: &RequiredCapabilities,
) -> Result<A::Instance, SetupError> {
    if required.validation_enabled {
        let available_layers = api.enumerate_layer_names()?;
        debug!("Available layers: {:?}", available_layers);
        check_support(&required.layers, &available_layers)
            .map_err(|missing| SetupError::ValidationLayerUnsupported { missing })?;
    }

    let available_extensions = api.enumerate_extension_names()?;
    debug!("Available extensions: {:?}", available_extensions);
    debug!("Required extensions: {:?}", required.extensions);
    check_support(&required.extensions, &available_extensions)
        .map_err(|missing| SetupError::ExtensionUnsupported { missing })?;

    let instance = api.create_instance(descriptor, required)?;
    info!(
        "Created instance for {} ({} extensions, {} layers)",
        descriptor.application_name,
        required.extensions.len(),
        required.layers.len()
    );
    Ok(instance)
}
