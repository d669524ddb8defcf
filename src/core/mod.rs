pub mod arguments;
pub mod cooldowns;
pub mod manager;
pub mod suggestions;

pub use crate::domain::model::{ArgKind, ArgSpec, ArgValue, CommandSpec, ExecutionType, ParsedArgs};
pub use crate::domain::ports::{CommandActor, CommandHandler, Context};
pub use crate::utils::error::Result;
pub use manager::{CommandManager, DispatchOutcome};
