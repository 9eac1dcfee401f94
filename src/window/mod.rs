mod glfw_window;

use crate::{config::WindowConfig, SetupError};

pub use self::glfw_window::{GlfwWindow, GlfwWindowSystem};

/// The OS windowing library. Dropping it shuts the library down, so every
/// window it created must be dropped first.
pub trait WindowSystem {
    type Window: Window;

    /// Opens a window with no client rendering API attached.
    fn create_window(&mut self, config: &WindowConfig) -> Result<Self::Window, SetupError>;

    /// Instance extensions the window system needs to present with Vulkan.
    fn required_instance_extensions(&self) -> Result<Vec<String>, SetupError>;

    /// Processes pending OS events without blocking.
    fn poll_events(&mut self);
}

pub trait Window {
    fn should_close(&self) -> bool;
}
