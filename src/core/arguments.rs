use crate::domain::model::{ArgSpec, ArgValue, CommandSpec, ParsedArgs};
use crate::utils::error::{FlameError, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// A parser turns one raw token into a typed value. The error string is
/// surfaced to the sender, so keep it human-readable.
pub type ArgParserFn = Arc<dyn Fn(&str) -> std::result::Result<ArgValue, String> + Send + Sync>;

/// The registry that parses chat tokens into typed arguments. Pre-seeded
/// with the built-in kinds; extend it with `add_parser` for custom kinds.
/// Thread-safe, shared by every command of a manager.
pub struct ArgumentHandler {
    parsers: RwLock<HashMap<String, ArgParserFn>>,
}

impl Default for ArgumentHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgumentHandler {
    pub fn new() -> Self {
        let mut parsers: HashMap<String, ArgParserFn> = HashMap::new();
        parsers.insert(
            "string".into(),
            Arc::new(|token| Ok(ArgValue::String(token.to_string()))),
        );
        parsers.insert(
            "int".into(),
            Arc::new(|token| {
                token
                    .parse::<i64>()
                    .map(ArgValue::Int)
                    .map_err(|_| format!("'{}' is not a whole number", token))
            }),
        );
        parsers.insert(
            "float".into(),
            Arc::new(|token| {
                token
                    .parse::<f64>()
                    .map(ArgValue::Float)
                    .map_err(|_| format!("'{}' is not a number", token))
            }),
        );
        parsers.insert(
            "bool".into(),
            Arc::new(|token| {
                if token.eq_ignore_ascii_case("true") {
                    Ok(ArgValue::Bool(true))
                } else if token.eq_ignore_ascii_case("false") {
                    Ok(ArgValue::Bool(false))
                } else {
                    Err(format!("'{}' is not true or false", token))
                }
            }),
        );
        parsers.insert(
            "player".into(),
            Arc::new(|token| {
                if token.is_empty() {
                    Err("player name cannot be empty".to_string())
                } else {
                    Ok(ArgValue::Player(token.to_string()))
                }
            }),
        );
        Self {
            parsers: RwLock::new(parsers),
        }
    }

    /// Registers a parser for a kind name, replacing any existing one.
    pub fn add_parser(&self, kind: impl Into<String>, parser: ArgParserFn) -> &Self {
        self.parsers.write().insert(kind.into(), parser);
        self
    }

    pub fn add_parser_if_absent(&self, kind: impl Into<String>, parser: ArgParserFn) -> &Self {
        self.parsers.write().entry(kind.into()).or_insert(parser);
        self
    }

    pub fn has_parser(&self, kind: &str) -> bool {
        self.parsers.read().contains_key(kind)
    }

    /// Walks the command's argument specs over the raw tokens.
    ///
    /// A greedy join argument swallows every remaining token. A missing
    /// token falls back to the spec default or fails with the usage line;
    /// surplus tokens fail with the usage line too.
    pub fn parse(&self, spec: &CommandSpec, tokens: &[&str]) -> Result<ParsedArgs> {
        let mut parsed = ParsedArgs::default();
        let mut index = 0usize;

        for arg in &spec.args {
            if let Some(delimiter) = &arg.join_delimiter {
                if index >= tokens.len() && arg.default.is_none() {
                    return Err(FlameError::Usage(spec.usage_line()));
                }
                let joined = if index >= tokens.len() {
                    arg.default.clone().unwrap_or_default()
                } else {
                    tokens[index..].join(delimiter)
                };
                parsed.push(arg.name.clone(), ArgValue::String(joined));
                index = tokens.len();
                continue;
            }

            let token = match tokens.get(index) {
                Some(token) => {
                    index += 1;
                    (*token).to_string()
                }
                None => match &arg.default {
                    Some(default) => default.clone(),
                    None => return Err(FlameError::Usage(spec.usage_line())),
                },
            };

            let value = self.parse_one(arg, &token)?;
            self.check_range(arg, &value)?;
            parsed.push(arg.name.clone(), value);
        }

        if index < tokens.len() {
            return Err(FlameError::Usage(spec.usage_line()));
        }
        Ok(parsed)
    }

    fn parse_one(&self, arg: &ArgSpec, token: &str) -> Result<ArgValue> {
        let parser = self
            .parsers
            .read()
            .get(arg.kind.name())
            .cloned()
            .ok_or_else(|| FlameError::Registration {
                message: format!(
                    "Unregistered argument kind '{}' at argument '{}'",
                    arg.kind.name(),
                    arg.name
                ),
            })?;
        parser(token).map_err(|reason| FlameError::ArgumentParse {
            arg: arg.name.clone(),
            reason,
        })
    }

    fn check_range(&self, arg: &ArgSpec, value: &ArgValue) -> Result<()> {
        let Some((min, max)) = arg.range else {
            return Ok(());
        };
        if !arg.kind.is_numeric() {
            return Ok(());
        }
        let number = match value.as_float() {
            Some(n) => n,
            None => return Ok(()),
        };
        if number < min || number > max {
            return Err(FlameError::NotInRange {
                arg: arg.name.clone(),
                min,
                max,
            });
        }
        Ok(())
    }
}
