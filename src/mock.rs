//! In-memory stand-ins for the window system and Vulkan, recording every
//! acquisition and release into a shared [`EventLog`].

use std::{cell::RefCell, ffi::CStr, rc::Rc};

use ash::vk::{
    self, Handle, PhysicalDevice, PhysicalDeviceFeatures, PhysicalDeviceType,
    QueueFamilyProperties, QueueFlags,
};

use crate::{
    capabilities::RequiredCapabilities,
    config::{ApplicationDescriptor, WindowConfig},
    vulkan::{
        debug_messenger::{self, MessengerFilter},
        DeviceProperties, VulkanApi, VulkanInstance,
    },
    window::{Window, WindowSystem},
    SetupError,
};

#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<String>>>);

impl EventLog {
    pub fn push(&self, event: &str) {
        self.0.borrow_mut().push(event.to_owned());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn contains(&self, event: &str) -> bool {
        self.0.borrow().iter().any(|logged| logged == event)
    }
}

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

pub struct MockWindowSystem {
    log: EventLog,
    polls: Rc<RefCell<usize>>,
    close_after: usize,
    fail_window: bool,
}

impl MockWindowSystem {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            polls: Rc::default(),
            close_after: 1,
            fail_window: false,
        }
    }

    /// The window reports close once this many polls have happened.
    pub fn closing_after(mut self, polls: usize) -> Self {
        self.close_after = polls;
        self
    }

    pub fn failing_window(mut self) -> Self {
        self.fail_window = true;
        self
    }
}

impl WindowSystem for MockWindowSystem {
    type Window = MockWindow;

    fn create_window(&mut self, _config: &WindowConfig) -> Result<Self::Window, SetupError> {
        if self.fail_window {
            return Err(SetupError::WindowCreation);
        }
        self.log.push("create window");
        Ok(MockWindow {
            log: self.log.clone(),
            polls: Rc::clone(&self.polls),
            close_after: self.close_after,
        })
    }

    fn required_instance_extensions(&self) -> Result<Vec<String>, SetupError> {
        Ok(names(&["VK_KHR_surface", "VK_KHR_xcb_surface"]))
    }

    fn poll_events(&mut self) {
        self.log.push("poll events");
        *self.polls.borrow_mut() += 1;
    }
}

impl Drop for MockWindowSystem {
    fn drop(&mut self) {
        self.log.push("terminate");
    }
}

pub struct MockWindow {
    log: EventLog,
    polls: Rc<RefCell<usize>>,
    close_after: usize,
}

impl Window for MockWindow {
    fn should_close(&self) -> bool {
        *self.polls.borrow() >= self.close_after
    }
}

impl Drop for MockWindow {
    fn drop(&mut self) {
        self.log.push("destroy window");
    }
}

#[derive(Debug, Clone)]
pub struct MockDevice {
    props: DeviceProperties,
    geometry_shader: bool,
    queue_families: Vec<QueueFamilyProperties>,
}

impl MockDevice {
    /// A device that passes every suitability check.
    pub fn discrete(name: &str) -> Self {
        Self {
            props: DeviceProperties {
                name: name.to_owned(),
                device_type: PhysicalDeviceType::DISCRETE_GPU,
            },
            geometry_shader: true,
            queue_families: vec![QueueFamilyProperties {
                queue_flags: QueueFlags::GRAPHICS | QueueFlags::COMPUTE | QueueFlags::TRANSFER,
                queue_count: 16,
                ..Default::default()
            }],
        }
    }

    pub fn with_type(mut self, device_type: PhysicalDeviceType) -> Self {
        self.props.device_type = device_type;
        self
    }

    pub fn without_geometry_shader(mut self) -> Self {
        self.geometry_shader = false;
        self
    }

    pub fn with_queue_families(mut self, families: &[(QueueFlags, u32)]) -> Self {
        self.queue_families = families
            .iter()
            .map(|(queue_flags, queue_count)| QueueFamilyProperties {
                queue_flags: *queue_flags,
                queue_count: *queue_count,
                ..Default::default()
            })
            .collect();
        self
    }
}

pub struct MockApi {
    log: EventLog,
    extensions: Vec<String>,
    layers: Vec<String>,
    devices: Vec<MockDevice>,
    debug_entry_points: bool,
    destroy_entry_point: bool,
    messenger_failure: Option<vk::Result>,
    creation_failure: Option<vk::Result>,
    created_with: RefCell<Option<RequiredCapabilities>>,
}

impl MockApi {
    /// Advertises everything the default configuration asks for, but no devices.
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            extensions: names(&[
                "VK_KHR_surface",
                "VK_KHR_xcb_surface",
                "VK_EXT_debug_utils",
            ]),
            layers: names(&["VK_LAYER_KHRONOS_validation"]),
            devices: vec![],
            debug_entry_points: true,
            destroy_entry_point: true,
            messenger_failure: None,
            creation_failure: None,
            created_with: RefCell::default(),
        }
    }

    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = names(extensions);
        self
    }

    pub fn with_layers(mut self, layers: &[&str]) -> Self {
        self.layers = names(layers);
        self
    }

    pub fn with_devices(mut self, devices: Vec<MockDevice>) -> Self {
        self.devices = devices;
        self
    }

    pub fn without_debug_entry_points(mut self) -> Self {
        self.debug_entry_points = false;
        self
    }

    /// The messenger can be created, but its destroy function does not resolve.
    pub fn without_destroy_entry_point(mut self) -> Self {
        self.destroy_entry_point = false;
        self
    }

    pub fn failing_messenger(mut self, result: vk::Result) -> Self {
        self.messenger_failure = Some(result);
        self
    }

    pub fn failing_creation(mut self, result: vk::Result) -> Self {
        self.creation_failure = Some(result);
        self
    }

    pub fn created_with(&self) -> Option<RequiredCapabilities> {
        self.created_with.borrow().clone()
    }
}

impl VulkanApi for MockApi {
    type Instance = MockInstance;

    fn enumerate_extension_names(&self) -> Result<Vec<String>, SetupError> {
        Ok(self.extensions.clone())
    }

    fn enumerate_layer_names(&self) -> Result<Vec<String>, SetupError> {
        Ok(self.layers.clone())
    }

    fn create_instance(
        &self,
        _descriptor: &ApplicationDescriptor,
        required: &RequiredCapabilities,
    ) -> Result<Self::Instance, SetupError> {
        if let Some(result) = self.creation_failure {
            return Err(SetupError::InstanceCreation(result));
        }
        *self.created_with.borrow_mut() = Some(required.clone());
        self.log.push("create instance");
        let mut instance = MockInstance::new(&self.log, self.devices.clone());
        instance.debug_entry_points = self.debug_entry_points;
        instance.destroy_entry_point = self.destroy_entry_point;
        instance.messenger_failure = self.messenger_failure;
        instance.required = required.clone();
        Ok(instance)
    }
}

pub struct MockInstance {
    log: EventLog,
    devices: Vec<MockDevice>,
    debug_entry_points: bool,
    destroy_entry_point: bool,
    messenger_failure: Option<vk::Result>,
    required: RequiredCapabilities,
}

impl MockInstance {
    pub fn new(log: &EventLog, devices: Vec<MockDevice>) -> Self {
        Self {
            log: log.clone(),
            devices,
            debug_entry_points: true,
            destroy_entry_point: true,
            messenger_failure: None,
            required: RequiredCapabilities {
                extensions: vec![],
                layers: vec![],
                validation_enabled: false,
            },
        }
    }

    pub fn without_debug_entry_points(mut self) -> Self {
        self.debug_entry_points = false;
        self
    }

    pub fn failing_messenger(mut self, result: vk::Result) -> Self {
        self.messenger_failure = Some(result);
        self
    }

    pub fn created_with(&self) -> &RequiredCapabilities {
        &self.required
    }

    fn device(&self, device: PhysicalDevice) -> &MockDevice {
        &self.devices[device.as_raw() as usize - 1]
    }
}

impl VulkanInstance for MockInstance {
    type Messenger = MockMessenger;

    fn has_entry_point(&self, _name: &CStr) -> bool {
        self.debug_entry_points
    }

    fn create_debug_messenger(
        &self,
        _filter: &MessengerFilter,
    ) -> Result<Self::Messenger, SetupError> {
        if let Some(result) = self.messenger_failure {
            return Err(SetupError::DebugMessengerCreation(result));
        }
        self.log.push("create debug messenger");
        Ok(MockMessenger {
            log: self.log.clone(),
            destroy_entry_point: self.destroy_entry_point,
        })
    }

    fn enumerate_physical_devices(&self) -> Result<Vec<PhysicalDevice>, SetupError> {
        Ok((1..=self.devices.len() as u64)
            .map(PhysicalDevice::from_raw)
            .collect())
    }

    fn physical_device_properties(&self, device: PhysicalDevice) -> DeviceProperties {
        self.device(device).props.clone()
    }

    fn physical_device_features(&self, device: PhysicalDevice) -> PhysicalDeviceFeatures {
        PhysicalDeviceFeatures {
            geometry_shader: if self.device(device).geometry_shader {
                vk::TRUE
            } else {
                vk::FALSE
            },
            ..Default::default()
        }
    }

    fn queue_family_properties(&self, device: PhysicalDevice) -> Vec<QueueFamilyProperties> {
        self.device(device).queue_families.clone()
    }
}

impl Drop for MockInstance {
    fn drop(&mut self) {
        self.log.push("destroy instance");
    }
}

pub struct MockMessenger {
    log: EventLog,
    destroy_entry_point: bool,
}

impl Drop for MockMessenger {
    fn drop(&mut self) {
        debug_messenger::release(
            |_| self.destroy_entry_point,
            || self.log.push("destroy debug messenger"),
        );
    }
}
