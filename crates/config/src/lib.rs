//! Configuration management for minievm
//!
//! This crate provides functionality for managing the persisted minievm configuration,
//! including loading, saving, updating, and deleting the defaults the `run` command executes
//! bytecode under.

/// Error types for the configuration module
pub mod error;

use crate::error::Error;
use clap::Parser;
use minievm_common::utils::io::file::{delete_path, read_file, write_file};
use minievm_vm::core::vm::{ExecutionConfig, OpcodePolicy};
use serde::{Deserialize, Serialize};
#[allow(deprecated)]
use std::env::home_dir;
use std::{path::PathBuf, str::FromStr};
use tracing::{debug, error, info};

/// Environment variable that overrides the location of the configuration file.
pub const CONFIG_PATH_ENV: &str = "MINIEVM_CONFIG";

/// The value `update` accepts to clear an optional limit.
const UNSET: &str = "none";

/// Command line arguments for the configuration command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display and edit the current configuration",
    override_usage = "minievm config [KEY] [VALUE]"
)]
pub struct ConfigArgs {
    /// The target key to update.
    #[clap(required = false, default_value = "")]
    key: String,

    /// The value to set the key to. Use `none` to clear a limit.
    #[clap(required = false, default_value = "")]
    value: String,
}

/// The [`Configuration`] struct represents the persisted execution defaults of the CLI. Flags
/// passed to `minievm run` take precedence over these values.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Reject unrecognized opcodes instead of skipping them
    #[serde(default)]
    pub strict_opcodes: bool,

    /// Maximum operand stack depth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_limit: Option<usize>,

    /// Maximum memory size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_limit: Option<usize>,

    /// Maximum number of instructions per run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_limit: Option<u64>,
}

/// Resolves the configuration file path: `$MINIEVM_CONFIG` if set, otherwise
/// `$HOME/.minievm/config.toml`.
#[allow(deprecated)]
pub fn config_path() -> Result<PathBuf, Error> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|path| !path.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let mut home = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    home.push(".minievm");
    home.push("config.toml");
    Ok(home)
}

fn config_path_str() -> Result<String, Error> {
    config_path()?
        .to_str()
        .map(str::to_owned)
        .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))
}

/// Parses an optional limit, where `none` clears it.
fn parse_limit<T: FromStr>(key: &str, value: &str) -> Result<Option<T>, Error>
where
    T::Err: std::fmt::Display,
{
    if value.eq_ignore_ascii_case(UNSET) {
        return Ok(None);
    }

    value.parse::<T>().map(Some).map_err(|e| Error::InvalidValue {
        key: key.to_string(),
        reason: format!("expected a non-negative integer or '{UNSET}': {e}"),
    })
}

impl Configuration {
    /// Returns the current configuration, creating the file with defaults if it is missing.
    pub fn load() -> Result<Self, Error> {
        let path = config_path()?;

        // if the config file doesn't exist, create it
        if !path.exists() {
            debug!(path = %path.display(), "creating default config file");
            let config = Configuration::default();
            config.save()?;
        }

        // read the config file
        let contents = read_file(&config_path_str()?)
            .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;

        // parse the config file
        toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> Result<(), Error> {
        write_file(
            &config_path_str()?,
            &toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))?;

        Ok(())
    }

    /// Deletes the configuration file.
    pub fn delete() -> Result<(), Error> {
        delete_path(&config_path_str()?);
        Ok(())
    }

    /// Update a single key/value pair in the configuration and persist it.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        // update the key in the struct and ensure it's the correct type
        match key {
            "strict_opcodes" => {
                self.strict_opcodes = value.parse::<bool>().map_err(|_| Error::InvalidValue {
                    key: key.to_string(),
                    reason: "expected 'true' or 'false'".to_string(),
                })?;
            }
            "stack_limit" => {
                self.stack_limit = parse_limit(key, value)?;
            }
            "memory_limit" => {
                self.memory_limit = parse_limit(key, value)?;
            }
            "step_limit" => {
                self.step_limit = parse_limit(key, value)?;
            }
            _ => return Err(Error::InvalidKey(key.to_string())),
        }

        // write the updated config to disk
        self.save()?;

        Ok(())
    }

    /// The VM policy these defaults describe.
    ///
    /// ```
    /// use minievm_config::Configuration;
    /// use minievm_vm::core::vm::OpcodePolicy;
    ///
    /// let config = Configuration { strict_opcodes: true, step_limit: Some(10), ..Default::default() };
    /// let execution = config.execution_config();
    ///
    /// assert_eq!(execution.opcode_policy, OpcodePolicy::Strict);
    /// assert_eq!(execution.step_limit, Some(10));
    /// assert_eq!(execution.stack_limit, None);
    /// ```
    pub fn execution_config(&self) -> ExecutionConfig {
        ExecutionConfig {
            opcode_policy: if self.strict_opcodes {
                OpcodePolicy::Strict
            } else {
                OpcodePolicy::Lenient
            },
            stack_limit: self.stack_limit,
            memory_limit: self.memory_limit,
            step_limit: self.step_limit,
        }
    }
}

/// The `config` command is used to display and edit the current configuration.
pub fn config(args: ConfigArgs) -> Result<(), Error> {
    if !args.key.is_empty() {
        if !args.value.is_empty() {
            // read the config file and update the key/value pair
            let mut config = Configuration::load()?;
            config.update(&args.key, &args.value)?;
            info!("updated configuration! Set \'{}\' = \'{}\' .", &args.key, &args.value);
        } else {
            // key is set, but no value is set
            error!("found key but no value to set. Please specify a value to set, use `minievm config --help` for more information.");
        }
    } else {
        // no key is set, print the config file
        let config = Configuration::load()?;
        println!("# {}", config_path()?.display());
        print!(
            "{}",
            toml::to_string(&config)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?
        );
        info!("use `minievm config <KEY> <VALUE>` to set a key/value pair.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Points the config file at a scratch location for the duration of a test.
    fn use_scratch_config(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("minievm-config-{name}")).join("config.toml");
        std::env::set_var(CONFIG_PATH_ENV, &path);
        Configuration::delete().expect("failed to delete config file");
        path
    }

    // Test default configuration
    #[test]
    #[serial]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert!(!config.strict_opcodes);
        assert_eq!(config.stack_limit, None);
        assert_eq!(config.memory_limit, None);
        assert_eq!(config.step_limit, None);
        assert_eq!(config.execution_config(), ExecutionConfig::default());
    }

    // Test loading configuration from a file
    #[test]
    #[serial]
    fn test_load_configuration_creates_file() {
        let path = use_scratch_config("load");
        let config = Configuration::load().expect("failed to load config file");

        assert!(path.exists());
        assert_eq!(config, Configuration::default());
    }

    // Test saving configuration to a file
    #[test]
    #[serial]
    fn test_save_configuration() {
        use_scratch_config("save");
        let mut config = Configuration::default();

        config.update("strict_opcodes", "true").expect("failed to update strict_opcodes");
        config.update("stack_limit", "1024").expect("failed to update stack_limit");
        config.update("step_limit", "100").expect("failed to update step_limit");

        let loaded_config = Configuration::load().expect("failed to load config file");
        assert!(loaded_config.strict_opcodes);
        assert_eq!(loaded_config.stack_limit, Some(1024));
        assert_eq!(loaded_config.memory_limit, None);
        assert_eq!(loaded_config.step_limit, Some(100));
    }

    #[test]
    #[serial]
    fn test_update_clears_limit() {
        use_scratch_config("clear");
        let mut config = Configuration::load().expect("failed to load config file");

        config.update("memory_limit", "4096").expect("failed to update memory_limit");
        assert_eq!(config.memory_limit, Some(4096));
        config.update("memory_limit", "none").expect("failed to clear memory_limit");

        let loaded_config = Configuration::load().expect("failed to load config file");
        assert_eq!(loaded_config.memory_limit, None);
    }

    #[test]
    #[serial]
    fn test_update_rejects_bad_input() {
        use_scratch_config("reject");
        let mut config = Configuration::default();

        assert!(matches!(config.update("rpc_url", "x"), Err(Error::InvalidKey(_))));
        assert!(matches!(
            config.update("stack_limit", "-1"),
            Err(Error::InvalidValue { .. })
        ));
        assert!(matches!(
            config.update("strict_opcodes", "yes"),
            Err(Error::InvalidValue { .. })
        ));
        assert_eq!(config, Configuration::default());
    }

    // Test deleting configuration file
    #[test]
    #[serial]
    fn test_delete_configuration() {
        let path = use_scratch_config("delete");
        let mut config = Configuration::load().expect("failed to load config file");
        config.update("step_limit", "5").expect("failed to update step_limit");

        Configuration::delete().expect("failed to delete config file");
        assert!(!path.exists());

        let config = Configuration::load().expect("failed to load config file");
        assert_eq!(config.step_limit, None);
    }

    #[test]
    #[serial]
    fn test_malformed_file_is_a_parse_error() {
        let path = use_scratch_config("malformed");
        write_file(&path.to_string_lossy(), "stack_limit = \"lots\"").expect("failed to write");

        assert!(matches!(Configuration::load(), Err(Error::ParseError(_))));
    }
}
