use mailgate_domain::{CliOverrides, Config};
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "mailgate.toml";

/// Loads the TOML configuration and layers CLI overrides on top. An
/// explicitly given path must exist; the default path is optional.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("cannot read config file {path}: {e}"))?;
            Config::from_toml(&raw)?
        }
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            let raw = std::fs::read_to_string(DEFAULT_CONFIG_PATH)?;
            Config::from_toml(&raw)?
        }
        None => Config::default(),
    };

    config.apply_overrides(overrides);
    Ok(config)
}
