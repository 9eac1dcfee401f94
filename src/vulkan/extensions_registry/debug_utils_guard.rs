use ash::{
    extensions::ext::DebugUtils,
    vk::{self, DebugUtilsMessengerEXT},
    Entry, Instance,
};
use tracing::debug;

use super::entry_point_available;
use crate::{
    vulkan::debug_messenger::{self, MessengerFilter},
    SetupError,
};

/// RAII for a registered debug utils messenger.
///
/// Does not borrow the instance; whoever owns both has to drop this first.
pub struct DebugUtilsGuard {
    debug_utils: DebugUtils,
    messenger: DebugUtilsMessengerEXT,
    entry: Entry,
    instance: vk::Instance,
}

impl DebugUtilsGuard {
    pub fn try_new(
        entry: &Entry,
        instance: &Instance,
        filter: &MessengerFilter,
    ) -> Result<Self, SetupError> {
        let debug_utils = DebugUtils::new(entry, instance);
        let create_info = filter.create_info();
        let messenger = unsafe { debug_utils.create_debug_utils_messenger(&create_info, None) }
            .map_err(SetupError::DebugMessengerCreation)?;
        Ok(Self {
            debug_utils,
            messenger,
            entry: entry.clone(),
            instance: instance.handle(),
        })
    }
}

impl Drop for DebugUtilsGuard {
    fn drop(&mut self) {
        debug!("Dropping DebugUtilsGuard");
        debug_messenger::release(
            |name| entry_point_available(&self.entry, self.instance, name),
            || unsafe {
                self.debug_utils
                    .destroy_debug_utils_messenger(self.messenger, None)
            },
        );
    }
}
