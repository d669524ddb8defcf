use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Execute every command synchronously or asynchronously, selectable per
/// command or globally via the manager config. Sync is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionType {
    #[default]
    Sync,
    Async,
}

/// The built-in argument kinds. `Custom` kinds resolve against parsers
/// registered on the `ArgumentHandler` under the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgKind {
    String,
    Int,
    Float,
    Bool,
    Player,
    Custom(String),
}

impl ArgKind {
    /// The registry key this kind's parser is stored under.
    pub fn name(&self) -> &str {
        match self {
            ArgKind::String => "string",
            ArgKind::Int => "int",
            ArgKind::Float => "float",
            ArgKind::Bool => "bool",
            ArgKind::Player => "player",
            ArgKind::Custom(name) => name,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ArgKind::Int | ArgKind::Float)
    }
}

/// A parsed argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// A player name; resolution to an actual player object is the
    /// embedding platform's job.
    Player(String),
}

impl ArgValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::String(s) | ArgValue::Player(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArgValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ArgValue::Float(f) => Some(*f),
            ArgValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArgValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Where tab-completion candidates for an argument come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionSource {
    /// A fixed candidate list declared on the argument itself.
    Static(Vec<String>),
    /// A `@name` reference into the suggestion registry.
    Reference(String),
}

/// One positional command parameter.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    pub name: String,
    pub kind: ArgKind,
    /// `Some` makes the argument optional; the default token is parsed
    /// with the same parser when the sender omits it.
    pub default: Option<String>,
    /// `Some` makes this a greedy trailing argument that joins all
    /// remaining tokens with the delimiter.
    pub join_delimiter: Option<String>,
    /// Inclusive bounds enforced on numeric kinds after parsing.
    pub range: Option<(f64, f64)>,
    pub suggestions: Option<SuggestionSource>,
}

impl ArgSpec {
    pub fn required(name: impl Into<String>, kind: ArgKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            join_delimiter: None,
            range: None,
            suggestions: None,
        }
    }

    pub fn optional(name: impl Into<String>, kind: ArgKind, default: impl Into<String>) -> Self {
        Self {
            default: Some(default.into()),
            ..Self::required(name, kind)
        }
    }

    /// A greedy string argument: joins the rest of the tokens, like
    /// `String.join(delimiter, args)`.
    pub fn greedy(name: impl Into<String>, delimiter: impl Into<String>) -> Self {
        Self {
            join_delimiter: Some(delimiter.into()),
            ..Self::required(name, ArgKind::String)
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    pub fn suggest<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = Some(SuggestionSource::Static(
            candidates.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn suggest_ref(mut self, key: impl Into<String>) -> Self {
        self.suggestions = Some(SuggestionSource::Reference(key.into()));
        self
    }

    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}

/// Immutable description of a registered command.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    pub permission: String,
    pub usage: String,
    pub aliases: Vec<String>,
    pub args: Vec<ArgSpec>,
    pub cooldown: Option<Duration>,
    pub execution: ExecutionType,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            description: String::new(),
            permission: String::new(),
            usage: String::new(),
            aliases: Vec::new(),
            args: Vec::new(),
            cooldown: None,
            execution: ExecutionType::Sync,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = permission.into();
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into().to_lowercase());
        self
    }

    pub fn arg(mut self, arg: ArgSpec) -> Self {
        self.args.push(arg);
        self
    }

    pub fn cooldown(mut self, duration: Duration) -> Self {
        self.cooldown = Some(duration);
        self
    }

    pub fn execution(mut self, execution: ExecutionType) -> Self {
        self.execution = execution;
        self
    }

    /// The usage line shown on arity errors. When none was set explicitly,
    /// renders `/name|alias <required> [optional]` from the argument specs.
    pub fn usage_line(&self) -> String {
        let mut label = self.name.clone();
        for alias in &self.aliases {
            label.push('|');
            label.push_str(alias);
        }
        self.usage_line_with_label(&label)
    }

    /// Usage line under an explicit label, used for subcommands so the
    /// parent path shows up (`/home set <name>`).
    pub fn usage_line_with_label(&self, label: &str) -> String {
        if !self.usage.is_empty() && self.usage != "/" {
            return self.usage.clone();
        }
        let mut out = String::with_capacity(64);
        out.push('/');
        out.push_str(label);
        for arg in &self.args {
            out.push(' ');
            let (open, close) = if arg.is_optional() { ('[', ']') } else { ('<', '>') };
            out.push(open);
            out.push_str(&arg.name);
            out.push(close);
        }
        out
    }
}

/// The parsed arguments handed to a command handler, keyed by the
/// `ArgSpec` names.
#[derive(Debug, Clone, Default)]
pub struct ParsedArgs {
    values: Vec<(String, ArgValue)>,
}

impl ParsedArgs {
    pub fn push(&mut self, name: impl Into<String>, value: ArgValue) {
        self.values.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ArgValue::as_str)
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ArgValue::as_int)
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(ArgValue::as_float)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(ArgValue::as_bool)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_autogenerated() {
        let spec = CommandSpec::new("Give")
            .alias("g")
            .arg(ArgSpec::required("target", ArgKind::Player))
            .arg(ArgSpec::required("amount", ArgKind::Int))
            .arg(ArgSpec::optional("reason", ArgKind::String, "none"));
        assert_eq!(spec.usage_line(), "/give|g <target> <amount> [reason]");
    }

    #[test]
    fn test_usage_with_label_uses_the_path() {
        let spec = CommandSpec::new("set").arg(ArgSpec::required("name", ArgKind::String));
        assert_eq!(spec.usage_line_with_label("home set"), "/home set <name>");
    }

    #[test]
    fn test_explicit_usage_wins() {
        let spec = CommandSpec::new("warp").usage("/warp <point>");
        assert_eq!(spec.usage_line(), "/warp <point>");
    }

    #[test]
    fn test_parsed_args_accessors() {
        let mut args = ParsedArgs::default();
        args.push("amount", ArgValue::Int(5));
        args.push("who", ArgValue::Player("Steve".into()));
        assert_eq!(args.get_int("amount"), Some(5));
        assert_eq!(args.get_float("amount"), Some(5.0));
        assert_eq!(args.get_str("who"), Some("Steve"));
        assert_eq!(args.get("missing"), None);
        assert_eq!(args.len(), 2);
    }
}
