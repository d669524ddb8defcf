#[cfg(feature = "cli")]
pub mod cli;
pub mod messages;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use messages::Messages;

use crate::domain::model::ExecutionType;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime knobs for the command manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Global execution mode; individual commands may still opt into async.
    pub execution: ExecutionType,
    /// Log every executed command at info level.
    pub log_commands: bool,
    /// Whether console senders are subject to cooldowns.
    pub cooldowns_for_console: bool,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            execution: ExecutionType::Sync,
            log_commands: true,
            cooldowns_for_console: false,
        }
    }
}

impl Validate for ManagerConfig {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Whole-framework configuration as loaded from one TOML file:
///
/// ```toml
/// [manager]
/// execution = "sync"
///
/// [messages]
/// unknown_command = "&7No such command: %command%"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlameConfig {
    pub manager: ManagerConfig,
    pub messages: Messages,
}

impl FlameConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FlameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for FlameConfig {
    fn validate(&self) -> Result<()> {
        self.manager.validate()?;
        self.messages.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ManagerConfig::default();
        assert_eq!(config.execution, ExecutionType::Sync);
        assert!(config.log_commands);
        assert!(!config.cooldowns_for_console);
    }

    #[test]
    fn test_parse_full_config() {
        let config: FlameConfig = toml::from_str(
            r#"
            [manager]
            execution = "async"
            cooldowns_for_console = true

            [messages]
            usage = "&7Try: %usage%"
            "#,
        )
        .unwrap();
        assert_eq!(config.manager.execution, ExecutionType::Async);
        assert!(config.manager.cooldowns_for_console);
        assert_eq!(config.messages.usage, "&7Try: %usage%");
        assert!(config.validate().is_ok());
    }
}
