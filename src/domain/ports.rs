use crate::domain::model::ParsedArgs;
use crate::utils::error::{FlameError, Result};
use crate::utils::text;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// The command actor that works with each and every platform. Implement
/// this to bridge the framework to a platform sender (player, console,
/// RCON, ...).
pub trait CommandActor: Send + Sync {
    /// Deliver a raw, already-rendered line to the sender.
    fn send_raw(&self, message: &str);

    /// The display name of the actor. Not stable across sessions; use
    /// [`CommandActor::id`] for anything persistent.
    fn name(&self) -> &str;

    /// A stable unique id for cooldown bookkeeping.
    fn id(&self) -> Uuid;

    fn has_permission(&self, permission: &str) -> bool;

    fn is_console(&self) -> bool {
        false
    }

    /// Send a `&`-coded message: colorized for players, codes stripped for
    /// consoles that cannot render them.
    fn reply(&self, message: &str) {
        let rendered = text::colorize(message);
        if self.is_console() {
            self.send_raw(&text::strip_codes(&rendered));
        } else {
            self.send_raw(&rendered);
        }
    }
}

/// Everything a handler invocation gets to see.
#[derive(Clone)]
pub struct Context {
    pub actor: Arc<dyn CommandActor>,
    pub command: String,
    pub args: ParsedArgs,
}

impl Context {
    /// Errors when the command was sent from a console.
    pub fn require_player(&self) -> Result<()> {
        if self.actor.is_console() {
            Err(FlameError::SenderNotPlayer)
        } else {
            Ok(())
        }
    }

    /// Errors when the command was sent by a player.
    pub fn require_console(&self) -> Result<()> {
        if self.actor.is_console() {
            Ok(())
        } else {
            Err(FlameError::SenderNotConsole)
        }
    }
}

#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, ctx: Context) -> Result<()>;
}

/// Blanket impl so closures can be registered directly as handlers.
#[async_trait]
impl<F> CommandHandler for F
where
    F: Fn(Context) -> Result<()> + Send + Sync,
{
    async fn handle(&self, ctx: Context) -> Result<()> {
        self(ctx)
    }
}
