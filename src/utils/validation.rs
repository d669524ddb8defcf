use crate::utils::error::{FlameError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FlameError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Command and alias words are single chat tokens; whitespace would make
/// them unreachable from `dispatch`.
pub fn validate_command_word(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(FlameError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Command words cannot contain whitespace".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FlameError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "greet").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_command_word() {
        assert!(validate_command_word("name", "greet").is_ok());
        assert!(validate_command_word("name", "gr eet").is_err());
        assert!(validate_command_word("name", "").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("cooldown_secs", 5u64, 0, 3600).is_ok());
        assert!(validate_range("cooldown_secs", 5000u64, 0, 3600).is_err());
    }
}
