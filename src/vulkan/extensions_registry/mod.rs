mod debug_utils_guard;

use std::ffi::CStr;

use ash::{extensions::ext::DebugUtils, vk, Entry};
use tracing::debug;

pub use self::debug_utils_guard::DebugUtilsGuard;

pub const CREATE_DEBUG_UTILS_MESSENGER: &CStr = c"vkCreateDebugUtilsMessengerEXT";
pub const DESTROY_DEBUG_UTILS_MESSENGER: &CStr = c"vkDestroyDebugUtilsMessengerEXT";

/// Returns the instance extensions to enable: whatever the window system
/// needs to present, plus debug utils when validations are enabled.
pub fn get_names(window_extensions: Vec<String>, validation_enabled: bool) -> Vec<String> {
    let mut extension_names = window_extensions;
    if validation_enabled {
        extension_names.push(DebugUtils::name().to_string_lossy().into_owned());
    }
    debug!("Instance extension names: {:?}", extension_names);
    extension_names
}

/// Extension functions are not part of the core API, so their addresses
/// have to be looked up at runtime.
pub(crate) fn entry_point_available(entry: &Entry, instance: vk::Instance, name: &CStr) -> bool {
    unsafe { entry.get_instance_proc_addr(instance, name.as_ptr()) }.is_some()
}
