pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{FlameConfig, ManagerConfig, Messages};

pub use crate::core::{CommandManager, DispatchOutcome};
pub use crate::domain::model::{ArgKind, ArgSpec, ArgValue, CommandSpec, ExecutionType, ParsedArgs};
pub use crate::domain::ports::{CommandActor, CommandHandler, Context};
pub use crate::utils::error::{FlameError, Result};
pub use crate::utils::text::{colorize, strip_codes, ChatColor};
