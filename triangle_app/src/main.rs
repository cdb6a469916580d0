//! Vulkan bootstrap demo: opens a window, creates the instance, and
//! polls until the window is closed.

use vk_bootstrap::BootstrapConfig;

const CONFIG_PATH: &str = "bootstrap.toml";

fn main() {
    vk_bootstrap::logging::init();

    let config = if std::path::Path::new(CONFIG_PATH).exists() {
        match BootstrapConfig::load_from_file(CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {CONFIG_PATH}: {e}");
                std::process::exit(1);
            }
        }
    } else {
        BootstrapConfig::default()
    };

    log::info!(
        "Starting {} (validation: {})",
        config.app_name,
        config.enable_validation
    );

    if let Err(e) = vk_bootstrap::run(&config) {
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}
