use std::ffi::{c_char, CStr, CString};

use ash::{
    vk::{ApplicationInfo, InstanceCreateInfo},
    Entry,
};

use crate::{
    capabilities::RequiredCapabilities,
    config::ApplicationDescriptor,
    vulkan::{api::VulkanApi, instance_guard::VkInstanceGuard},
    SetupError,
};

/// The Vulkan loader, statically linked.
pub struct AshVulkanApi {
    entry: Entry,
}

impl AshVulkanApi {
    pub fn linked() -> Self {
        Self {
            entry: Entry::linked(),
        }
    }
}

impl VulkanApi for AshVulkanApi {
    type Instance = VkInstanceGuard;

    fn enumerate_extension_names(&self) -> Result<Vec<String>, SetupError> {
        let extensions = self.entry.enumerate_instance_extension_properties(None)?;
        Ok(extensions
            .iter()
            .map(|extension| name_from_raw(&extension.extension_name))
            .collect())
    }

    fn enumerate_layer_names(&self) -> Result<Vec<String>, SetupError> {
        let layers = self.entry.enumerate_instance_layer_properties()?;
        Ok(layers
            .iter()
            .map(|layer| name_from_raw(&layer.layer_name))
            .collect())
    }

    fn create_instance(
        &self,
        descriptor: &ApplicationDescriptor,
        required: &RequiredCapabilities,
    ) -> Result<Self::Instance, SetupError> {
        let application_name = CString::new(descriptor.application_name.as_str())?;
        let engine_name = CString::new(descriptor.engine_name.as_str())?;

        let app_info = ApplicationInfo::builder()
            .application_name(&application_name)
            .application_version(descriptor.application_version.to_raw())
            .engine_name(&engine_name)
            .engine_version(descriptor.engine_version.to_raw())
            .api_version(descriptor.api_version);

        let extension_names = to_c_strings(&required.extensions)?;
        let extension_name_pointers = extension_names
            .iter()
            .map(|extension_name| extension_name.as_ptr())
            .collect::<Vec<*const c_char>>();

        let layer_names = if required.validation_enabled {
            to_c_strings(&required.layers)?
        } else {
            vec![]
        };
        let layer_name_pointers = layer_names
            .iter()
            .map(|layer_name| layer_name.as_ptr())
            .collect::<Vec<*const c_char>>();

        let create_info = InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_extension_names(&extension_name_pointers)
            .enabled_layer_names(&layer_name_pointers);

        let instance = unsafe { self.entry.create_instance(&create_info, None) }
            .map_err(SetupError::InstanceCreation)?;

        Ok(VkInstanceGuard::new(self.entry.clone(), instance))
    }
}

fn to_c_strings(names: &[String]) -> Result<Vec<CString>, SetupError> {
    names
        .iter()
        .map(|name| CString::new(name.as_str()).map_err(SetupError::from))
        .collect()
}

/// Reads one of the fixed size, nul terminated name arrays Vulkan fills in.
pub(crate) fn name_from_raw(raw: &[c_char]) -> String {
    let bytes = raw.iter().map(|c| *c as u8).collect::<Vec<_>>();
    match CStr::from_bytes_until_nul(&bytes) {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
    }
}
