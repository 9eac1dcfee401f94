use tracing::{debug, info};

use crate::{
    capabilities::RequiredCapabilities,
    config::AppConfig,
    vulkan::{
        create_instance,
        debug_messenger::{self, MessengerFilter},
        physical_device_manager::PhysicalDevice,
        PhysicalDeviceManager, VulkanApi, VulkanInstance,
    },
    window::{Window, WindowSystem},
    SetupError,
};

/// Where the application is in its one-way setup → run → teardown sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    WindowReady,
    InstanceReady,
    DebugReady,
    DeviceSelected,
    Running,
    TornDown,
}

fn transition(state: &mut LifecycleState, next: LifecycleState) {
    debug!("Lifecycle: {:?} -> {:?}", state, next);
    *state = next;
}

type Messenger<A> = <<A as VulkanApi>::Instance as VulkanInstance>::Messenger;

/// Owns every resource of one run.
///
/// Fields are dropped in declaration order, which is the exact reverse of
/// acquisition: messenger, instance, window, window system, then the
/// loader.
pub struct App<A: VulkanApi, W: WindowSystem> {
    state: LifecycleState,
    /// Non-owning, valid while `instance` is alive
    physical_device: Option<PhysicalDevice>,
    /// The debug utils messenger, if validations are enabled
    debug_messenger: Option<Messenger<A>>,
    /// The instance for interacting with Vulkan core
    instance: A::Instance,
    /// The window presented to the user
    window: W::Window,
    window_system: W,
    _api: A,
}

impl<A: VulkanApi, W: WindowSystem> App<A, W> {
    /// Runs every setup step in order. When a step fails, whatever was
    /// acquired so far is released in reverse order before the error is
    /// returned.
    pub fn try_new(api: A, mut window_system: W, config: &AppConfig) -> Result<Self, SetupError> {
        let mut state = LifecycleState::Uninitialized;

        let window = window_system.create_window(&config.window)?;
        transition(&mut state, LifecycleState::WindowReady);

        let required = RequiredCapabilities::gather(
            window_system.required_instance_extensions()?,
            &config.validation,
        );
        let instance = create_instance(&api, &config.application, &required)?;
        transition(&mut state, LifecycleState::InstanceReady);

        let debug_messenger = if config.validation.enabled {
            let messenger = debug_messenger::register(&instance, &MessengerFilter::default())?;
            transition(&mut state, LifecycleState::DebugReady);
            Some(messenger)
        } else {
            None
        };

        let physical_device = if config.select_physical_device {
            let physical_device = PhysicalDeviceManager::new(&instance).pick_physical_device()?;
            transition(&mut state, LifecycleState::DeviceSelected);
            Some(physical_device)
        } else {
            None
        };

        Ok(Self {
            state,
            physical_device,
            debug_messenger,
            instance,
            window,
            window_system,
            _api: api,
        })
    }

    /// Polls window events until the window is asked to close.
    pub fn run(&mut self) {
        transition(&mut self.state, LifecycleState::Running);
        while !self.window.should_close() {
            self.window_system.poll_events();
        }
        info!("Window closed, shutting down");
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn physical_device(&self) -> Option<&PhysicalDevice> {
        self.physical_device.as_ref()
    }

    pub fn instance(&self) -> &A::Instance {
        &self.instance
    }
}

impl<A: VulkanApi, W: WindowSystem> Drop for App<A, W> {
    fn drop(&mut self) {
        transition(&mut self.state, LifecycleState::TornDown);
    }
}
