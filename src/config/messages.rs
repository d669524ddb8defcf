use crate::utils::error::{FlameError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Customizable user-facing messages, so embedders can reword every reply
/// without touching framework code. `%placeholders%` are substituted at
/// reply time; unknown placeholders pass through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub not_allowed: String,
    pub not_enough_permission: String,
    pub not_in_range: String,
    pub cooldown_active: String,
    pub usage: String,
    pub unknown_command: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            not_allowed: "You are not allowed to execute this command.".to_string(),
            not_enough_permission: "You don't have enough permission to execute this command."
                .to_string(),
            not_in_range: "Number %arg% is not in range %min% to %max%.".to_string(),
            cooldown_active: "You must wait %seconds%s before using this command again."
                .to_string(),
            usage: "Usage: %usage%".to_string(),
            unknown_command: "Unknown command: %command%".to_string(),
        }
    }
}

impl Messages {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let messages: Messages = toml::from_str(&content)?;
        messages.validate()?;
        Ok(messages)
    }

    /// The chat text for a chat-level error.
    pub fn for_error(&self, err: &FlameError) -> String {
        match err {
            FlameError::UnknownCommand(command) => {
                self.unknown_command.replace("%command%", command)
            }
            FlameError::Usage(usage) => self.usage.replace("%usage%", usage),
            FlameError::NotInRange { arg, min, max } => self
                .not_in_range
                .replace("%arg%", arg)
                .replace("%min%", &fmt_number(*min))
                .replace("%max%", &fmt_number(*max)),
            FlameError::CooldownActive { remaining_secs } => self
                .cooldown_active
                .replace("%seconds%", &remaining_secs.to_string()),
            FlameError::NotAllowed => self.not_enough_permission.clone(),
            FlameError::SenderNotPlayer | FlameError::SenderNotConsole => self.not_allowed.clone(),
            other => other.to_string(),
        }
    }
}

impl Validate for Messages {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("not_allowed", &self.not_allowed)?;
        validate_non_empty_string("not_enough_permission", &self.not_enough_permission)?;
        validate_non_empty_string("not_in_range", &self.not_in_range)?;
        validate_non_empty_string("cooldown_active", &self.cooldown_active)?;
        validate_non_empty_string("usage", &self.usage)?;
        validate_non_empty_string("unknown_command", &self.unknown_command)?;
        Ok(())
    }
}

/// Range bounds are carried as f64 but usually declared as integers;
/// render `1` rather than `1.0` when the value is whole.
fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_render() {
        let messages = Messages::default();
        assert_eq!(
            messages.for_error(&FlameError::UnknownCommand("warp".into())),
            "Unknown command: warp"
        );
        assert_eq!(
            messages.for_error(&FlameError::NotInRange {
                arg: "amount".into(),
                min: 1.0,
                max: 64.0
            }),
            "Number amount is not in range 1 to 64."
        );
        assert_eq!(
            messages.for_error(&FlameError::CooldownActive { remaining_secs: 3 }),
            "You must wait 3s before using this command again."
        );
        assert_eq!(
            messages.for_error(&FlameError::Usage("/give <target>".into())),
            "Usage: /give <target>"
        );
    }

    #[test]
    fn test_fractional_bounds_keep_decimals() {
        let messages = Messages::default();
        assert_eq!(
            messages.for_error(&FlameError::NotInRange {
                arg: "speed".into(),
                min: 0.5,
                max: 2.5
            }),
            "Number speed is not in range 0.5 to 2.5."
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let messages: Messages =
            toml::from_str("unknown_command = \"&7No such command: %command%\"").unwrap();
        assert_eq!(
            messages.for_error(&FlameError::UnknownCommand("x".into())),
            "&7No such command: x"
        );
        assert_eq!(messages.usage, Messages::default().usage);
    }

    #[test]
    fn test_empty_message_rejected() {
        let messages = Messages {
            usage: "  ".to_string(),
            ..Messages::default()
        };
        assert!(messages.validate().is_err());
    }
}
