use glfw::{ClientApiHint, Glfw, GlfwReceiver, PWindow, WindowEvent, WindowHint, WindowMode};
use tracing::{debug, error};

use super::{Window, WindowSystem};
use crate::{config::WindowConfig, SetupError};

pub struct GlfwWindowSystem {
    glfw: Glfw,
}

impl GlfwWindowSystem {
    pub fn try_new() -> Result<Self, SetupError> {
        let glfw = glfw::init(report_glfw_error)
            .map_err(|err| SetupError::WindowSystemInit(format!("{:?}", err)))?;
        Ok(Self { glfw })
    }
}

/// GLFW error callback. It runs from an `extern "C"` trampoline, so it must
/// not panic; failures surface through the return values of the GLFW calls.
pub(crate) fn report_glfw_error(err: glfw::Error, description: String) {
    error!("GLFW error {:?}: {}", err, description);
}

impl WindowSystem for GlfwWindowSystem {
    type Window = GlfwWindow;

    fn create_window(&mut self, config: &WindowConfig) -> Result<Self::Window, SetupError> {
        self.glfw
            .window_hint(WindowHint::ClientApi(ClientApiHint::NoApi));
        self.glfw.window_hint(WindowHint::Resizable(config.resizable));

        let (window, events) = self
            .glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                WindowMode::Windowed,
            )
            .ok_or(SetupError::WindowCreation)?;
        debug!(
            "Created {}x{} window \"{}\"",
            config.width, config.height, config.title
        );

        Ok(GlfwWindow {
            window,
            _events: events,
        })
    }

    fn required_instance_extensions(&self) -> Result<Vec<String>, SetupError> {
        let extensions = self
            .glfw
            .get_required_instance_extensions()
            .ok_or(SetupError::WindowSystemVulkanUnsupported)?;
        debug!("GLFW extensions: {:?}", extensions);
        Ok(extensions)
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }
}

impl Drop for GlfwWindowSystem {
    fn drop(&mut self) {
        // `Glfw` terminates the library once its last handle drops
        debug!("Terminating GLFW");
    }
}

pub struct GlfwWindow {
    window: PWindow,
    // no event polling is enabled, the receiver only has to stay alive
    _events: GlfwReceiver<(f64, WindowEvent)>,
}

impl Window for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }
}
