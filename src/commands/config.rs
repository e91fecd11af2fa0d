//! `aiterm config` — inspect and modify status-line options.

use anyhow::{Result, bail};
use color_print::cformat;

use aiterm::statusline::config::KEYS;
use aiterm::statusline::{ConfigValue, StatusLineConfig};
use aiterm::styling::println;

pub fn get(key: &str) -> Result<()> {
    let config = StatusLineConfig::load();
    match config.get(key) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => bail!("unknown config key '{key}'"),
    }
}

pub fn set(key: &str, value: &str) -> Result<()> {
    let mut config = StatusLineConfig::load();
    config.set(key, ConfigValue::parse(value))?;
    config.save()?;
    println!("{}", cformat!("<green>{}</> = {}", key, value));
    Ok(())
}

pub fn list() -> Result<()> {
    let config = StatusLineConfig::load();
    for key in KEYS {
        if let Some(value) = config.get(key) {
            println!("{}", cformat!("<dim>{}</> = {}", key, value));
        }
    }
    Ok(())
}
