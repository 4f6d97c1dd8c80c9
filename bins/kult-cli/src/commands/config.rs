//! Config commands.

use crate::config::Config;
use crate::error::CliError;

pub fn show(config: &Config) -> Result<(), CliError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| CliError::Config(format!("Serialize error: {}", e)))?;

    println!("# {}", Config::config_path().display());
    print!("{}", contents);
    Ok(())
}
