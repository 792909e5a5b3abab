#![windows_subsystem = "windows"]

use anyhow::Result;
use ethtx::{config::Config, gui, user_settings::UserSettings};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    // Saved settings win over the environment, which wins over built-in defaults
    let settings = UserSettings::load();
    let config = Config::from_settings(&settings);
    gui::launch(config, settings)?;

    Ok(())
}
