use std::path::Path;

use crate::dynamics::state::SimConfig;
use crate::error::SimError;

/// Parse a TOML config. Missing keys keep their defaults.
pub fn parse_config(text: &str) -> Result<SimConfig, SimError> {
    let config: SimConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Load a TOML config from disk.
pub fn load_config(path: impl AsRef<Path>) -> Result<SimConfig, SimError> {
    let path = path.as_ref();
    log::debug!("loading config from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse_config(&text)
}
