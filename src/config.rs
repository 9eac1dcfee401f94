use ash::vk::{make_api_version, API_VERSION_1_0};

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;
const WINDOW_TITLE: &str = "Vulkan";

const APPLICATION_NAME: &str = "Hello Triangle";
const ENGINE_NAME: &str = "No Engine";

const VALIDATION_LAYERS: &[&str] = &["VK_LAYER_KHRONOS_validation"];

#[cfg(any(feature = "enable_validations", debug_assertions))]
const ENABLE_VALIDATIONS: bool = true;
#[cfg(not(any(feature = "enable_validations", debug_assertions)))]
const ENABLE_VALIDATIONS: bool = false;

/// A `major.minor.patch` triple, packed the Vulkan way when handed to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn to_raw(self) -> u32 {
        make_api_version(0, self.major, self.minor, self.patch)
    }
}

/// Describes the application to the driver. Built once and only read afterwards.
#[derive(Debug, Clone)]
pub struct ApplicationDescriptor {
    pub application_name: String,
    pub application_version: Version,
    pub engine_name: String,
    pub engine_version: Version,
    /// Already packed, e.g. `API_VERSION_1_0`
    pub api_version: u32,
}

impl Default for ApplicationDescriptor {
    fn default() -> Self {
        Self {
            application_name: APPLICATION_NAME.to_owned(),
            application_version: Version::new(1, 0, 0),
            engine_name: ENGINE_NAME.to_owned(),
            engine_version: Version::new(1, 0, 0),
            api_version: API_VERSION_1_0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            title: WINDOW_TITLE.to_owned(),
            resizable: false,
        }
    }
}

/// Whether validation layers and the debug messenger are wanted, and which layers.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    pub enabled: bool,
    pub layers: Vec<String>,
}

impl ValidationConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            layers: vec![],
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: ENABLE_VALIDATIONS,
            layers: VALIDATION_LAYERS
                .iter()
                .map(|layer| (*layer).to_owned())
                .collect(),
        }
    }
}

/// Top level configuration for one run of the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub application: ApplicationDescriptor,
    pub window: WindowConfig,
    pub validation: ValidationConfig,
    /// Pick a physical device after the instance is up. Off for the bare
    /// window + instance variant.
    pub select_physical_device: bool,
}

impl AppConfig {
    /// Window and instance only: no validation, no device selection. Not
    /// reachable from the binary, which always runs the default config.
    pub fn minimal() -> Self {
        Self {
            validation: ValidationConfig::disabled(),
            select_physical_device: false,
            ..Default::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            application: ApplicationDescriptor::default(),
            window: WindowConfig::default(),
            validation: ValidationConfig::default(),
            select_physical_device: true,
        }
    }
}
