use ash::vk::{
    self, PhysicalDeviceFeatures, PhysicalDeviceType, QueueFamilyProperties, QueueFlags,
};

use crate::vulkan::api::DeviceProperties;

/// Holds the indexes of the relevant queue families for a given
/// physical device. Created from [`find_queue_families`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueFamilyIndices {
    /// The graphics queue family index, if one is available
    pub graphics_family: Option<u32>,
}

impl QueueFamilyIndices {
    /// True if all queue families are available for this physical device.
    pub fn is_complete(&self) -> bool {
        self.graphics_family.is_some()
    }
}

/// Records the first family that has queues and can run graphics work.
pub fn find_queue_families(queue_family_props: &[QueueFamilyProperties]) -> QueueFamilyIndices {
    let graphics_family = queue_family_props
        .iter()
        .position(|props| props.queue_count > 0 && props.queue_flags.contains(QueueFlags::GRAPHICS))
        .map(|index| index as u32);
    QueueFamilyIndices { graphics_family }
}

/// A physical device with what selection needs to know about it. Owns nothing; the
/// handle is only valid while the instance it came from is alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalDevice {
    pub physical_device: vk::PhysicalDevice,
    pub props: DeviceProperties,
    pub queue_families: QueueFamilyIndices,
}

/// Discrete GPU, geometry shaders, and a graphics capable queue family.
pub fn is_device_suitable(
    props: &DeviceProperties,
    features: &PhysicalDeviceFeatures,
    queue_families: &QueueFamilyIndices,
) -> bool {
    props.device_type == PhysicalDeviceType::DISCRETE_GPU
        && features.geometry_shader == vk::TRUE
        && queue_families.is_complete()
}
