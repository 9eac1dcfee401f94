mod app;
mod capabilities;
pub mod config;
mod error;
pub mod logging;
#[cfg(test)]
mod mock;
pub mod vulkan;
pub mod window;

pub use app::{App, LifecycleState};
pub use capabilities::{check_support, RequiredCapabilities};
pub use error::SetupError;
pub use vulkan::{AshVulkanApi, VkInstanceGuard};
pub use window::GlfwWindowSystem;
