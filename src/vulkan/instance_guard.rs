use std::ffi::CStr;

use ash::{
    vk::{PhysicalDevice, PhysicalDeviceFeatures, QueueFamilyProperties},
    Entry, Instance,
};
use tracing::debug;

use crate::{
    vulkan::{
        api::{DeviceProperties, VulkanInstance},
        ash_api::name_from_raw,
        debug_messenger::MessengerFilter,
        extensions_registry::{entry_point_available, DebugUtilsGuard},
    },
    SetupError,
};

/// RAII for Instance
pub struct VkInstanceGuard {
    entry: Entry,
    instance: Instance,
}

impl VkInstanceGuard {
    pub(crate) fn new(entry: Entry, instance: Instance) -> Self {
        Self { entry, instance }
    }
}

impl VulkanInstance for VkInstanceGuard {
    type Messenger = DebugUtilsGuard;

    fn has_entry_point(&self, name: &CStr) -> bool {
        entry_point_available(&self.entry, self.instance.handle(), name)
    }

    fn create_debug_messenger(
        &self,
        filter: &MessengerFilter,
    ) -> Result<Self::Messenger, SetupError> {
        DebugUtilsGuard::try_new(&self.entry, &self.instance, filter)
    }

    fn enumerate_physical_devices(&self) -> Result<Vec<PhysicalDevice>, SetupError> {
        Ok(unsafe { self.instance.enumerate_physical_devices()? })
    }

    fn physical_device_properties(&self, device: PhysicalDevice) -> DeviceProperties {
        let props = unsafe { self.instance.get_physical_device_properties(device) };
        DeviceProperties {
            name: name_from_raw(&props.device_name),
            device_type: props.device_type,
        }
    }

    fn physical_device_features(&self, device: PhysicalDevice) -> PhysicalDeviceFeatures {
        unsafe { self.instance.get_physical_device_features(device) }
    }

    fn queue_family_properties(&self, device: PhysicalDevice) -> Vec<QueueFamilyProperties> {
        unsafe {
            self.instance
                .get_physical_device_queue_family_properties(device)
        }
    }
}

impl Drop for VkInstanceGuard {
    fn drop(&mut self) {
        debug!("Dropping VkInstanceGuard");
        unsafe { self.instance.destroy_instance(None) }
    }
}
