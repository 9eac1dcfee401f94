use anyhow::Result;
use tracing::info;
use vktutorial::{config::AppConfig, logging, App, AshVulkanApi, GlfwWindowSystem};

fn main() -> Result<()> {
    logging::init()?;

    let config = AppConfig::default();
    info!(
        "Starting (validations {})",
        if config.validation.enabled { "on" } else { "off" }
    );

    let window_system = GlfwWindowSystem::try_new()?;
    let mut app = App::try_new(AshVulkanApi::linked(), window_system, &config)?;
    app.run();

    Ok(())
}
