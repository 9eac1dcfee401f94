pub mod api;
mod ash_api;
pub mod debug_messenger;
pub mod extensions_registry;
mod instance;
mod instance_guard;
pub mod layers_registry;
pub mod physical_device_manager;

pub use api::{DeviceProperties, VulkanApi, VulkanInstance};
pub use ash_api::AshVulkanApi;
pub use instance::create_instance;
pub use instance_guard::VkInstanceGuard;
pub use physical_device_manager::PhysicalDeviceManager;
