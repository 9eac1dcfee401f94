use std::ffi::CStr;

use ash::vk::{
    self, Bool32, DebugUtilsMessageSeverityFlagsEXT, DebugUtilsMessageTypeFlagsEXT,
    DebugUtilsMessengerCallbackDataEXT, DebugUtilsMessengerCreateInfoEXT,
    DebugUtilsMessengerCreateInfoEXTBuilder,
};
use tracing::{debug, event, warn, Level};

use crate::{
    vulkan::{
        api::VulkanInstance,
        extensions_registry::{CREATE_DEBUG_UTILS_MESSENGER, DESTROY_DEBUG_UTILS_MESSENGER},
    },
    SetupError,
};

/// Which messages the driver forwards to [`vulkan_debug_utils_callback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessengerFilter {
    pub severity: DebugUtilsMessageSeverityFlagsEXT,
    pub message_type: DebugUtilsMessageTypeFlagsEXT,
}

impl Default for MessengerFilter {
    fn default() -> Self {
        Self {
            // info is too chatty to be useful
            severity: DebugUtilsMessageSeverityFlagsEXT::VERBOSE
                | DebugUtilsMessageSeverityFlagsEXT::WARNING
                | DebugUtilsMessageSeverityFlagsEXT::ERROR,
            message_type: DebugUtilsMessageTypeFlagsEXT::GENERAL
                | DebugUtilsMessageTypeFlagsEXT::VALIDATION
                | DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
        }
    }
}

impl MessengerFilter {
    pub fn create_info<'a>(&self) -> DebugUtilsMessengerCreateInfoEXTBuilder<'a> {
        DebugUtilsMessengerCreateInfoEXT::builder()
            .message_severity(self.severity)
            .message_type(self.message_type)
            .pfn_user_callback(Some(vulkan_debug_utils_callback))
    }
}

/// Registers the debug callback on `instance`.
///
/// Fails with [`SetupError::ExtensionUnavailable`] when the creation entry
/// point cannot be resolved. The instance is left untouched in that case.
pub fn register<I: VulkanInstance>(
    instance: &I,
    filter: &MessengerFilter,
) -> Result<I::Messenger, SetupError> {
    if !instance.has_entry_point(CREATE_DEBUG_UTILS_MESSENGER) {
        return Err(SetupError::ExtensionUnavailable(
            CREATE_DEBUG_UTILS_MESSENGER.to_string_lossy().into_owned(),
        ));
    }
    let messenger = instance.create_debug_messenger(filter)?;
    debug!("Debug messenger registered");
    Ok(messenger)
}

/// Tears a messenger down through `destroy`, provided `has_entry_point`
/// resolves the destroy function. Cleanup is best effort: when it does not
/// resolve the messenger is leaked and `false` is returned.
pub fn release<L, D>(has_entry_point: L, destroy: D) -> bool
where
    L: FnOnce(&CStr) -> bool,
    D: FnOnce(),
{
    if !has_entry_point(DESTROY_DEBUG_UTILS_MESSENGER) {
        warn!("vkDestroyDebugUtilsMessengerEXT not present, skipping messenger cleanup");
        return false;
    }
    destroy();
    true
}

pub unsafe extern "system" fn vulkan_debug_utils_callback(
    message_severity: DebugUtilsMessageSeverityFlagsEXT,
    message_type: DebugUtilsMessageTypeFlagsEXT,
    p_callback_data: *const DebugUtilsMessengerCallbackDataEXT,
    _p_user_data: *mut std::ffi::c_void,
) -> Bool32 {
    let message = match p_callback_data.as_ref() {
        Some(data) if !data.p_message.is_null() => {
            CStr::from_ptr(data.p_message).to_string_lossy().into_owned()
        }
        _ => String::from("<no message>"),
    };
    let ty = format!("{:?}", message_type).to_lowercase();

    match message_severity {
        DebugUtilsMessageSeverityFlagsEXT::VERBOSE => {
            event!(Level::TRACE, message = message, ty = ty)
        }
        DebugUtilsMessageSeverityFlagsEXT::INFO => {
            event!(Level::INFO, message = message, ty = ty)
        }
        DebugUtilsMessageSeverityFlagsEXT::WARNING => {
            event!(Level::WARN, message = message, ty = ty)
        }
        DebugUtilsMessageSeverityFlagsEXT::ERROR => {
            event!(Level::ERROR, message = message, ty = ty)
        }
        _ => event!(Level::DEBUG, message = message, ty = ty),
    }
    // dont skip driver
    vk::FALSE
}
