//! # Vulkan Bootstrap
//!
//! Minimal Vulkan execution-context bootstrap: opens a GLFW window
//! configured for Vulkan, negotiates instance extensions and validation
//! layers against what the runtime reports, creates the `VkInstance`,
//! polls events until the user closes the window, and tears everything
//! down in reverse-creation order.
//!
//! Device selection, swapchains, and rendering are intentionally out of
//! scope; this crate ends where the instance begins to be used.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vk_bootstrap::{run, BootstrapConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     vk_bootstrap::logging::init();
//!     run(&BootstrapConfig::default())?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod app;
pub mod capability;
pub mod config;
pub mod error;
pub mod instance;
pub mod logging;
pub mod window;

pub use app::run;
pub use capability::{negotiate, Negotiation};
pub use config::{BootstrapConfig, ConfigError};
pub use error::BootstrapError;
pub use instance::{InstanceError, VulkanInstance};
pub use window::{WindowError, WindowSession};
