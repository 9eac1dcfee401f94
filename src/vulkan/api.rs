use std::ffi::CStr;

use ash::vk::{PhysicalDevice, PhysicalDeviceFeatures, PhysicalDeviceType, QueueFamilyProperties};

use crate::{
    capabilities::RequiredCapabilities, config::ApplicationDescriptor,
    vulkan::debug_messenger::MessengerFilter, SetupError,
};

/// Loader level entry points: what exists before any instance does.
pub trait VulkanApi {
    type Instance: VulkanInstance;

    fn enumerate_extension_names(&self) -> Result<Vec<String>, SetupError>;

    fn enumerate_layer_names(&self) -> Result<Vec<String>, SetupError>;

    /// Issues the creation call. Callers are expected to have validated
    /// `required` already.
    fn create_instance(
        &self,
        descriptor: &ApplicationDescriptor,
        required: &RequiredCapabilities,
    ) -> Result<Self::Instance, SetupError>;
}

/// An instance owns everything derived from it; dropping it destroys the
/// underlying handle, so it must outlive its messenger.
pub trait VulkanInstance {
    /// RAII handle for a registered debug messenger
    type Messenger;

    /// Whether `name` resolves to a function pointer through this instance.
    fn has_entry_point(&self, name: &CStr) -> bool;

    fn create_debug_messenger(
        &self,
        filter: &MessengerFilter,
    ) -> Result<Self::Messenger, SetupError>;

    fn enumerate_physical_devices(&self) -> Result<Vec<PhysicalDevice>, SetupError>;

    fn physical_device_properties(&self, device: PhysicalDevice) -> DeviceProperties;

    fn physical_device_features(&self, device: PhysicalDevice) -> PhysicalDeviceFeatures;

    fn queue_family_properties(&self, device: PhysicalDevice) -> Vec<QueueFamilyProperties>;
}

/// The subset of `VkPhysicalDeviceProperties` used for selection and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceProperties {
    pub name: String,
    pub device_type: PhysicalDeviceType,
}
