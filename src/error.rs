use std::ffi::NulError;

use ash::vk;
use thiserror::Error;

/// Everything that can abort the setup sequence before the event loop starts.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Failed to initialize the window system: {0}")]
    WindowSystemInit(String),
    #[error("The window system cannot present with Vulkan")]
    WindowSystemVulkanUnsupported,
    #[error("Failed to create window")]
    WindowCreation,
    #[error("Require validation layers, but not available: {missing:?}")]
    ValidationLayerUnsupported { missing: Vec<String> },
    #[error("Require extensions, but not available: {missing:?}")]
    ExtensionUnsupported { missing: Vec<String> },
    #[error("Failed to create instance: {0}")]
    InstanceCreation(vk::Result),
    #[error("Extension entry point {0} is not present")]
    ExtensionUnavailable(String),
    #[error("Failed to set up debug callback: {0}")]
    DebugMessengerCreation(vk::Result),
    #[error("Failed to find a suitable GPU ({enumerated} enumerated)")]
    NoSuitableDevice { enumerated: usize },
    #[error("Name contains an interior nul byte: {0}")]
    InvalidName(#[from] NulError),
    #[error("Vulkan call failed: {0}")]
    Vulkan(#[from] vk::Result),
}
