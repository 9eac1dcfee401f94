mod physical_device;

use tracing::{debug, info};

use crate::{vulkan::api::VulkanInstance, SetupError};

pub use self::physical_device::{
    find_queue_families, is_device_suitable, PhysicalDevice, QueueFamilyIndices,
};

/// Wraps the Vulkan APIs to interact with physical devices
pub struct PhysicalDeviceManager<'instance, I> {
    instance: &'instance I,
}

impl<'instance, I: VulkanInstance> PhysicalDeviceManager<'instance, I> {
    /// Creates a new PhysicalDeviceManager for the given instance.
    pub fn new(instance: &'instance I) -> Self {
        Self { instance }
    }

    /// Queries the physical devices available on this machine and returns
    /// them in enumeration order.
    pub fn query_physical_devices(&self) -> Result<Vec<PhysicalDevice>, SetupError> {
        let physical_devices = self
            .instance
            .enumerate_physical_devices()?
            .into_iter()
            .map(|physical_device| PhysicalDevice {
                physical_device,
                props: self.instance.physical_device_properties(physical_device),
                queue_families: find_queue_families(
                    &self.instance.queue_family_properties(physical_device),
                ),
            })
            .collect::<Vec<_>>();
        debug!(
            "Available devices: {:?}",
            physical_devices
                .iter()
                .map(|pd| pd.props.name.as_str())
                .collect::<Vec<_>>()
        );
        Ok(physical_devices)
    }

    /// Picks the first device, in enumeration order, that is suitable for
    /// this application. No ranking is applied.
    pub fn pick_physical_device(&self) -> Result<PhysicalDevice, SetupError> {
        let physical_devices = self.query_physical_devices()?;
        let enumerated = physical_devices.len();

        let physical_device = physical_devices
            .into_iter()
            .find(|pd| {
                let features = self.instance.physical_device_features(pd.physical_device);
                is_device_suitable(&pd.props, &features, &pd.queue_families)
            })
            .ok_or(SetupError::NoSuitableDevice { enumerated })?;

        info!("Selected device: {}", physical_device.props.name);
        Ok(physical_device)
    }
}
