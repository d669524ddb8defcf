use crate::config::{ManagerConfig, Messages};
use crate::core::arguments::ArgumentHandler;
use crate::core::cooldowns::CooldownMap;
use crate::core::suggestions::SuggestionRegistry;
use crate::domain::model::{CommandSpec, ExecutionType};
use crate::domain::ports::{CommandActor, CommandHandler, Context};
use crate::utils::error::{FlameError, Result};
use crate::utils::validation::validate_command_word;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

struct RegisteredCommand {
    spec: CommandSpec,
    handler: Arc<dyn CommandHandler>,
    subcommands: RwLock<HashMap<String, Arc<RegisteredCommand>>>,
    sub_aliases: RwLock<HashMap<String, String>>,
}

impl RegisteredCommand {
    fn new(spec: CommandSpec, handler: Arc<dyn CommandHandler>) -> Self {
        Self {
            spec,
            handler,
            subcommands: RwLock::new(HashMap::new()),
            sub_aliases: RwLock::new(HashMap::new()),
        }
    }

    fn subcommand(&self, label: &str) -> Option<Arc<RegisteredCommand>> {
        let label = label.to_lowercase();
        let subcommands = self.subcommands.read();
        if let Some(sub) = subcommands.get(&label) {
            return Some(Arc::clone(sub));
        }
        let sub_aliases = self.sub_aliases.read();
        sub_aliases
            .get(&label)
            .and_then(|name| subcommands.get(name))
            .map(Arc::clone)
    }

    fn allowed(&self, actor: &dyn CommandActor) -> bool {
        self.spec.permission.is_empty() || actor.has_permission(&self.spec.permission)
    }
}

/// What `dispatch` did with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Handler ran to completion on this task.
    Completed,
    /// Handler was spawned onto the runtime (async execution).
    Spawned,
    /// A chat-level failure was reported to the sender.
    Rejected,
    /// The line was empty.
    Ignored,
}

/// The command manager: registry, dispatch and completion.
///
/// Cheap to share (`Arc`) and safe to dispatch from any number of tasks.
pub struct CommandManager {
    config: ManagerConfig,
    messages: Messages,
    commands: RwLock<HashMap<String, Arc<RegisteredCommand>>>,
    aliases: RwLock<HashMap<String, String>>,
    arguments: ArgumentHandler,
    suggestions: SuggestionRegistry,
    cooldowns: CooldownMap,
}

impl CommandManager {
    pub fn new(config: ManagerConfig) -> Self {
        Self::with_messages(config, Messages::default())
    }

    pub fn with_messages(config: ManagerConfig, messages: Messages) -> Self {
        Self {
            config,
            messages,
            commands: RwLock::new(HashMap::new()),
            aliases: RwLock::new(HashMap::new()),
            arguments: ArgumentHandler::new(),
            suggestions: SuggestionRegistry::new(),
            cooldowns: CooldownMap::new(),
        }
    }

    pub fn arguments(&self) -> &ArgumentHandler {
        &self.arguments
    }

    pub fn suggestions(&self) -> &SuggestionRegistry {
        &self.suggestions
    }

    pub fn cooldowns(&self) -> &CooldownMap {
        &self.cooldowns
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.read().keys().cloned().collect();
        names.sort();
        names
    }

    fn validate_spec(&self, spec: &CommandSpec) -> Result<()> {
        validate_command_word("name", &spec.name)?;
        for alias in &spec.aliases {
            validate_command_word("alias", alias)?;
        }
        for (index, arg) in spec.args.iter().enumerate() {
            if !self.arguments.has_parser(arg.kind.name()) {
                return Err(FlameError::Registration {
                    message: format!(
                        "Command '{}': argument '{}' uses unregistered kind '{}'",
                        spec.name,
                        arg.name,
                        arg.kind.name()
                    ),
                });
            }
            if arg.join_delimiter.is_some() && index + 1 != spec.args.len() {
                return Err(FlameError::Registration {
                    message: format!(
                        "Command '{}': greedy argument '{}' must be last",
                        spec.name, arg.name
                    ),
                });
            }
        }
        Ok(())
    }

    /// Registers a command. Fails on duplicate names/aliases, malformed
    /// command words, unregistered argument kinds and non-trailing greedy
    /// arguments.
    pub fn register(
        &self,
        spec: CommandSpec,
        handler: impl CommandHandler + 'static,
    ) -> Result<()> {
        self.validate_spec(&spec)?;

        let mut commands = self.commands.write();
        let mut aliases = self.aliases.write();
        if commands.contains_key(&spec.name) || aliases.contains_key(&spec.name) {
            return Err(FlameError::Registration {
                message: format!("Command '{}' is already registered", spec.name),
            });
        }
        for alias in &spec.aliases {
            if commands.contains_key(alias) || aliases.contains_key(alias) {
                return Err(FlameError::Registration {
                    message: format!("Alias '{}' is already registered", alias),
                });
            }
        }

        for alias in &spec.aliases {
            aliases.insert(alias.clone(), spec.name.clone());
        }
        tracing::debug!(command = %spec.name, "registered command");
        commands.insert(
            spec.name.clone(),
            Arc::new(RegisteredCommand::new(spec, Arc::new(handler))),
        );
        Ok(())
    }

    /// Registers a subcommand under an already registered command. `parent`
    /// is a path (`"home"` or `"home set"` for deeper nesting); each
    /// subcommand carries its own permission, usage, args and cooldown.
    pub fn register_subcommand(
        &self,
        parent: &str,
        spec: CommandSpec,
        handler: impl CommandHandler + 'static,
    ) -> Result<()> {
        self.validate_spec(&spec)?;

        let mut path = parent.split_whitespace();
        let root = path.next().ok_or_else(|| FlameError::Registration {
            message: "Parent command path cannot be empty".to_string(),
        })?;
        let mut command = self.resolve(root).ok_or_else(|| FlameError::Registration {
            message: format!("Unknown parent command '{}'", root),
        })?;
        for label in path {
            command = command
                .subcommand(label)
                .ok_or_else(|| FlameError::Registration {
                    message: format!("Unknown parent subcommand '{}' under '{}'", label, parent),
                })?;
        }

        let mut subcommands = command.subcommands.write();
        let mut sub_aliases = command.sub_aliases.write();
        if subcommands.contains_key(&spec.name) || sub_aliases.contains_key(&spec.name) {
            return Err(FlameError::Registration {
                message: format!(
                    "Subcommand '{}' is already registered under '{}'",
                    spec.name, parent
                ),
            });
        }
        for alias in &spec.aliases {
            if subcommands.contains_key(alias) || sub_aliases.contains_key(alias) {
                return Err(FlameError::Registration {
                    message: format!(
                        "Subcommand alias '{}' is already registered under '{}'",
                        alias, parent
                    ),
                });
            }
        }

        for alias in &spec.aliases {
            sub_aliases.insert(alias.clone(), spec.name.clone());
        }
        tracing::debug!(parent = %parent, subcommand = %spec.name, "registered subcommand");
        subcommands.insert(
            spec.name.clone(),
            Arc::new(RegisteredCommand::new(spec, Arc::new(handler))),
        );
        Ok(())
    }

    fn resolve(&self, label: &str) -> Option<Arc<RegisteredCommand>> {
        let label = label.to_lowercase();
        let commands = self.commands.read();
        if let Some(command) = commands.get(&label) {
            return Some(Arc::clone(command));
        }
        let aliases = self.aliases.read();
        aliases
            .get(&label)
            .and_then(|name| commands.get(name))
            .map(Arc::clone)
    }

    /// Dispatches one raw chat line for an actor.
    ///
    /// Leading tokens matching registered subcommands descend into them;
    /// unmatched tokens stay as arguments of the command reached so far.
    /// All chat-level failures (unknown command, permissions, cooldowns,
    /// argument errors) are replied to the sender in red and reported as
    /// [`DispatchOutcome::Rejected`]; `Err` is reserved for handler and
    /// internal failures.
    pub async fn dispatch(
        &self,
        actor: Arc<dyn CommandActor>,
        line: &str,
    ) -> Result<DispatchOutcome> {
        let mut words = line.split_whitespace();
        let Some(label) = words.next() else {
            return Ok(DispatchOutcome::Ignored);
        };
        let tokens: Vec<&str> = words.collect();

        let Some(mut command) = self.resolve(label) else {
            self.reject(&actor, &FlameError::UnknownCommand(label.to_string()));
            return Ok(DispatchOutcome::Rejected);
        };
        if !command.allowed(actor.as_ref()) {
            self.reject(&actor, &FlameError::NotAllowed);
            return Ok(DispatchOutcome::Rejected);
        }

        let mut qualified = command.spec.name.clone();
        let mut rest: &[&str] = &tokens;
        while let Some(next) = rest.first() {
            let Some(sub) = command.subcommand(next) else {
                break;
            };
            if !sub.allowed(actor.as_ref()) {
                self.reject(&actor, &FlameError::NotAllowed);
                return Ok(DispatchOutcome::Rejected);
            }
            qualified.push(' ');
            qualified.push_str(&sub.spec.name);
            rest = &rest[1..];
            command = sub;
        }
        let spec = &command.spec;

        let cooldown_applies =
            spec.cooldown.is_some() && (!actor.is_console() || self.config.cooldowns_for_console);
        if cooldown_applies {
            if let Err(err) = self.cooldowns.check(actor.id(), &qualified) {
                self.reject(&actor, &err);
                return Ok(DispatchOutcome::Rejected);
            }
        }

        let args = match self.arguments.parse(spec, rest) {
            Ok(args) => args,
            // re-render usage errors so subcommands show their full path
            Err(FlameError::Usage(_)) => {
                let usage = if qualified == spec.name {
                    spec.usage_line()
                } else {
                    spec.usage_line_with_label(&qualified)
                };
                self.reject(&actor, &FlameError::Usage(usage));
                return Ok(DispatchOutcome::Rejected);
            }
            Err(err) if err.is_chat_error() => {
                self.reject(&actor, &err);
                return Ok(DispatchOutcome::Rejected);
            }
            Err(err) => return Err(err),
        };

        if cooldown_applies {
            if let Some(duration) = spec.cooldown {
                self.cooldowns.arm(actor.id(), &qualified, duration);
            }
        }

        let ctx = Context {
            actor: Arc::clone(&actor),
            command: qualified.clone(),
            args,
        };

        if self.config.log_commands {
            tracing::info!(command = %qualified, actor = %actor.name(), "command executed");
        }

        let run_async =
            spec.execution == ExecutionType::Async || self.config.execution == ExecutionType::Async;
        if run_async {
            let handler = Arc::clone(&command.handler);
            let messages = self.messages.clone();
            tokio::spawn(async move {
                if let Err(err) = handler.handle(ctx).await {
                    if err.is_chat_error() {
                        actor.reply(&format!("&c{}", messages.for_error(&err)));
                    } else {
                        tracing::error!(command = %qualified, error = %err, "async command failed");
                    }
                }
            });
            return Ok(DispatchOutcome::Spawned);
        }

        match command.handler.handle(ctx).await {
            Ok(()) => Ok(DispatchOutcome::Completed),
            Err(err) if err.is_chat_error() => {
                self.reject(&actor, &err);
                Ok(DispatchOutcome::Rejected)
            }
            Err(err) => Err(err),
        }
    }

    /// Tab-completion candidates for a partially typed line. Completing the
    /// first word offers command names and aliases; later words offer the
    /// reached command's subcommands plus its suggestion candidates.
    pub fn complete(&self, actor: &dyn CommandActor, line: &str) -> Vec<String> {
        let ends_open = line.ends_with(char::is_whitespace) || line.is_empty();
        let mut words: Vec<&str> = line.split_whitespace().collect();
        if ends_open {
            words.push("");
        }

        if words.len() <= 1 {
            let partial = words.first().copied().unwrap_or("").to_lowercase();
            let commands = self.commands.read();
            let aliases = self.aliases.read();
            let mut names: Vec<String> = commands
                .iter()
                .filter(|(name, command)| {
                    name.starts_with(&partial) && command.allowed(actor)
                })
                .map(|(name, _)| name.clone())
                .collect();
            names.extend(
                aliases
                    .iter()
                    .filter(|(alias, name)| {
                        alias.starts_with(&partial)
                            && commands
                                .get(*name)
                                .is_some_and(|command| command.allowed(actor))
                    })
                    .map(|(alias, _)| alias.clone()),
            );
            names.sort();
            names.dedup();
            return names;
        }

        let Some(mut command) = self.resolve(words[0]) else {
            return Vec::new();
        };
        if !command.allowed(actor) {
            return Vec::new();
        }

        // descend through completed subcommand tokens
        let mut rest: &[&str] = &words[1..];
        while rest.len() > 1 {
            let Some(sub) = command.subcommand(rest[0]) else {
                break;
            };
            if !sub.allowed(actor) {
                return Vec::new();
            }
            rest = &rest[1..];
            command = sub;
        }

        let mut candidates = self.suggestions.complete(&command.spec, rest);
        if rest.len() == 1 {
            let partial = rest[0].to_lowercase();
            let subcommands = command.subcommands.read();
            candidates.extend(
                subcommands
                    .iter()
                    .filter(|(name, sub)| name.starts_with(&partial) && sub.allowed(actor))
                    .map(|(name, _)| name.clone()),
            );
            candidates.extend(
                command
                    .sub_aliases
                    .read()
                    .iter()
                    .filter(|(alias, name)| {
                        alias.starts_with(&partial)
                            && subcommands.get(*name).is_some_and(|sub| sub.allowed(actor))
                    })
                    .map(|(alias, _)| alias.clone()),
            );
            candidates.sort();
            candidates.dedup();
        }
        candidates
    }

    fn reject(&self, actor: &Arc<dyn CommandActor>, err: &FlameError) {
        actor.reply(&format!("&c{}", self.messages.for_error(err)));
    }
}
