// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::config::{default_config_path, Config};
use crate::error::{Error, Result};

/// Print the resolved configuration as TOML.
pub fn show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the default config file location. Never reads the file.
pub fn path() -> Result<()> {
    println!("{}", config_path()?);
    Ok(())
}

/// Returns the default config file location for display.
fn config_path() -> Result<String> {
    default_config_path()
        .map(|path| path.display().to_string())
        .ok_or_else(|| Error::Config("could not determine the user config directory".to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
