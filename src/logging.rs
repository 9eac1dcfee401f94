use anyhow::Result;
use simple_logger::{set_up_color_terminal, SimpleLogger};

/// Installs the terminal logger. `tracing` events reach it through the
/// `log-always` bridge, so this must run before anything else logs.
pub fn init() -> Result<()> {
    set_up_color_terminal();
    let logger = SimpleLogger::new();
    logger.init()?;
    Ok(())
}
