//! Vulkan instance bootstrap
//!
//! Builds the extension and layer enable-lists, negotiates them against
//! what the runtime reports, creates the `VkInstance`, and owns its
//! teardown. Missing extensions are downgraded to warnings; missing
//! validation layers abort bootstrap, since silently running without the
//! requested diagnostics would hide misconfiguration.

use ash::extensions::ext::DebugUtils;
use ash::vk;
use ash::{Entry, Instance};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use thiserror::Error;

use crate::capability::negotiate;
use crate::config::BootstrapConfig;

/// Instance bootstrap errors
#[derive(Error, Debug)]
pub enum InstanceError {
    /// The Vulkan loader could not be found or initialized
    #[error("Failed to load Vulkan: {0}")]
    LoadingFailed(String),

    /// Extension or layer enumeration failed
    #[error("Vulkan enumeration error: {0:?}")]
    Enumeration(vk::Result),

    /// A requested validation layer is not provided by the runtime
    #[error("Missing validation layer: {0}")]
    MissingValidationLayer(String),

    /// The driver rejected instance creation
    #[error("Instance creation failed: {0:?}")]
    Creation(vk::Result),

    /// Debug messenger registration failed
    #[error("Debug messenger creation failed: {0:?}")]
    DebugMessenger(vk::Result),
}

/// Result type for instance operations
pub type InstanceResult<T> = Result<T, InstanceError>;

/// Full instance extension request list: the platform-mandated surface
/// extensions plus the debug-reporting extension when validation is on.
#[must_use]
pub fn requested_extensions(platform: &[String], enable_validation: bool) -> Vec<String> {
    let mut extensions: Vec<String> = platform.to_vec();
    if enable_validation {
        extensions.push(DebugUtils::name().to_string_lossy().into_owned());
    }
    extensions
}

/// Layer request list: empty unless validation is enabled.
#[must_use]
pub fn requested_layers(config: &BootstrapConfig) -> Vec<String> {
    if config.enable_validation {
        config.validation_layers.clone()
    } else {
        Vec::new()
    }
}

/// Verify every requested layer is available, returning the enable-list.
///
/// Layers are mandatory when requested, unlike extensions.
pub fn check_layer_support(
    requested: &[String],
    available: &[String],
) -> InstanceResult<Vec<String>> {
    let negotiation = negotiate(requested, available);
    if negotiation.fully_satisfied() {
        Ok(negotiation.supported)
    } else {
        Err(InstanceError::MissingValidationLayer(
            negotiation.unsupported.join(", "),
        ))
    }
}

/// Vulkan instance wrapper with RAII cleanup
pub struct VulkanInstance {
    entry: Entry,
    instance: Instance,
    debug_utils: Option<DebugUtils>,
    debug_messenger: Option<vk::DebugUtilsMessengerEXT>,
}

impl VulkanInstance {
    /// Negotiate capabilities and create the instance.
    ///
    /// `platform_extensions` comes from the window session; the debug
    /// extension and validation layers are added per `config`. Exactly
    /// one instance should exist per process run.
    pub fn new(config: &BootstrapConfig, platform_extensions: &[String]) -> InstanceResult<Self> {
        let entry = unsafe { Entry::load() }
            .map_err(|e| InstanceError::LoadingFailed(format!("{e:?}")))?;

        let requested = requested_extensions(platform_extensions, config.enable_validation);
        let available = enumerate_extension_names(&entry)?;

        log::info!("{} instance extensions available", available.len());
        for name in &available {
            log::debug!("  {name}");
        }

        // Extensions are best-effort: the driver will reject creation
        // itself if something truly required is absent.
        let negotiation = negotiate(&requested, &available);
        for name in &negotiation.unsupported {
            log::warn!("Requested instance extension not supported: {name}");
        }
        let extensions = negotiation.supported;

        let layers = if config.enable_validation {
            let available_layers = enumerate_layer_names(&entry)?;
            check_layer_support(&requested_layers(config), &available_layers)?
        } else {
            Vec::new()
        };

        let app_name = CString::new(config.app_name.as_str()).unwrap();
        let engine_name = CString::new("No Engine").unwrap();
        let app_info = vk::ApplicationInfo::builder()
            .application_name(&app_name)
            .application_version(vk::make_api_version(0, 1, 0, 0))
            .engine_name(&engine_name)
            .engine_version(vk::make_api_version(0, 1, 0, 0))
            .api_version(vk::API_VERSION_1_0);

        let extension_cstrs: Vec<CString> = extensions
            .iter()
            .map(|name| CString::new(name.as_str()).unwrap())
            .collect();
        let extension_ptrs: Vec<*const c_char> =
            extension_cstrs.iter().map(|name| name.as_ptr()).collect();

        let layer_cstrs: Vec<CString> = layers
            .iter()
            .map(|name| CString::new(name.as_str()).unwrap())
            .collect();
        let layer_ptrs: Vec<*const c_char> =
            layer_cstrs.iter().map(|name| name.as_ptr()).collect();

        let create_info = vk::InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_extension_names(&extension_ptrs)
            .enabled_layer_names(&layer_ptrs);

        let instance = unsafe {
            entry
                .create_instance(&create_info, None)
                .map_err(InstanceError::Creation)?
        };
        log::info!(
            "Vulkan instance created ({} extensions, {} layers)",
            extension_ptrs.len(),
            layer_ptrs.len()
        );

        // Take ownership before attaching the messenger so a failure
        // below unwinds the instance through Drop.
        let mut bootstrap = Self {
            entry,
            instance,
            debug_utils: None,
            debug_messenger: None,
        };

        if config.enable_validation {
            let debug_utils = DebugUtils::new(&bootstrap.entry, &bootstrap.instance);
            let messenger = setup_debug_messenger(&debug_utils)?;
            bootstrap.debug_utils = Some(debug_utils);
            bootstrap.debug_messenger = Some(messenger);
        }

        Ok(bootstrap)
    }

    /// Get a reference to the Vulkan entry
    #[must_use]
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Get a reference to the raw instance
    #[must_use]
    pub fn handle(&self) -> &Instance {
        &self.instance
    }
}

impl Drop for VulkanInstance {
    fn drop(&mut self) {
        unsafe {
            if let (Some(debug_utils), Some(messenger)) =
                (&self.debug_utils, self.debug_messenger.take())
            {
                debug_utils.destroy_debug_utils_messenger(messenger, None);
            }
            self.instance.destroy_instance(None);
        }
    }
}

fn enumerate_extension_names(entry: &Entry) -> InstanceResult<Vec<String>> {
    let properties = entry
        .enumerate_instance_extension_properties(None)
        .map_err(InstanceError::Enumeration)?;
    Ok(properties
        .iter()
        .map(|p| {
            unsafe { CStr::from_ptr(p.extension_name.as_ptr()) }
                .to_string_lossy()
                .into_owned()
        })
        .collect())
}

fn enumerate_layer_names(entry: &Entry) -> InstanceResult<Vec<String>> {
    let properties = entry
        .enumerate_instance_layer_properties()
        .map_err(InstanceError::Enumeration)?;
    Ok(properties
        .iter()
        .map(|p| {
            unsafe { CStr::from_ptr(p.layer_name.as_ptr()) }
                .to_string_lossy()
                .into_owned()
        })
        .collect())
}

fn setup_debug_messenger(debug_utils: &DebugUtils) -> InstanceResult<vk::DebugUtilsMessengerEXT> {
    let create_info = vk::DebugUtilsMessengerCreateInfoEXT::builder()
        .message_severity(
            vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
                | vk::DebugUtilsMessageSeverityFlagsEXT::ERROR,
        )
        .message_type(
            vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
                | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
                | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
        )
        .pfn_user_callback(Some(debug_callback));

    unsafe {
        debug_utils
            .create_debug_utils_messenger(&create_info, None)
            .map_err(InstanceError::DebugMessenger)
    }
}

/// Debug callback for validation layers.
///
/// Forwards the message to the logger and always returns `vk::FALSE` so
/// the triggering call is never aborted.
unsafe extern "system" fn debug_callback(
    message_severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    callback_data: *const vk::DebugUtilsMessengerCallbackDataEXT,
    _user_data: *mut std::ffi::c_void,
) -> vk::Bool32 {
    let callback_data = *callback_data;
    let message = CStr::from_ptr(callback_data.p_message).to_string_lossy();

    if message_severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR) {
        log::error!("[Vulkan] {:?} - {}", message_type, message);
    } else if message_severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING) {
        log::warn!("[Vulkan] {:?} - {}", message_type, message);
    } else {
        log::debug!("[Vulkan] {:?} - {}", message_type, message);
    }

    vk::FALSE
}
