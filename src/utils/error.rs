use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlameError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Failed to parse argument '{arg}': {reason}")]
    ArgumentParse { arg: String, reason: String },

    #[error("Value {arg} must be between {min} and {max}")]
    NotInRange { arg: String, min: f64, max: f64 },

    #[error("Command is on cooldown for {remaining_secs} more second(s)")]
    CooldownActive { remaining_secs: u64 },

    #[error("Sender is not allowed to execute this command")]
    NotAllowed,

    #[error("Sender expected to be a player but found console")]
    SenderNotPlayer,

    #[error("Sender expected to be console but found a player")]
    SenderNotConsole,

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Registration error: {message}")]
    Registration { message: String },

    #[error("Configuration error in '{field}': value '{value}' is invalid: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfig { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

impl FlameError {
    /// Chat-level errors are reported to the sender and swallowed by
    /// dispatch; everything else bubbles up to the embedder.
    pub fn is_chat_error(&self) -> bool {
        matches!(
            self,
            FlameError::UnknownCommand(_)
                | FlameError::ArgumentParse { .. }
                | FlameError::NotInRange { .. }
                | FlameError::CooldownActive { .. }
                | FlameError::NotAllowed
                | FlameError::SenderNotPlayer
                | FlameError::SenderNotConsole
                | FlameError::Usage(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FlameError>;
