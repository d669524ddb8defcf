use crate::domain::model::{ArgKind, CommandSpec, SuggestionSource};
use crate::utils::error::{FlameError, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Supplies dynamic completion candidates for an argument kind (online
/// player names, world names, ...). The embedding platform registers these.
pub type SuggestionProviderFn = Arc<dyn Fn() -> Vec<String> + Send + Sync>;

/// Tab-completion candidates: named `@` lists, per-kind dynamic providers
/// and the static sets declared on argument specs.
#[derive(Default)]
pub struct SuggestionRegistry {
    named: RwLock<HashMap<String, Vec<String>>>,
    providers: RwLock<HashMap<String, SuggestionProviderFn>>,
}

impl SuggestionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named suggestion list. Keys must start with `@`.
    pub fn register_suggestion<I, S>(&self, key: impl Into<String>, candidates: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        if !key.starts_with('@') {
            return Err(FlameError::Registration {
                message: format!("Suggestion key '{}' must start with '@'", key),
            });
        }
        self.named
            .write()
            .insert(key, candidates.into_iter().map(Into::into).collect());
        Ok(())
    }

    /// Registers a dynamic provider for an argument kind name.
    pub fn register_provider(&self, kind: impl Into<String>, provider: SuggestionProviderFn) {
        self.providers.write().insert(kind.into(), provider);
    }

    /// Candidates for the token currently being typed. `tokens` are the
    /// words after the command label; the last one is the partial token
    /// (possibly empty when the user just typed a space).
    pub fn complete(&self, spec: &CommandSpec, tokens: &[&str]) -> Vec<String> {
        let index = tokens.len().saturating_sub(1);
        let partial = tokens.last().copied().unwrap_or("");

        let Some(arg) = spec.args.get(index) else {
            return Vec::new();
        };

        let mut candidates: Vec<String> = Vec::new();
        match &arg.suggestions {
            Some(SuggestionSource::Static(values)) => candidates.extend(values.iter().cloned()),
            Some(SuggestionSource::Reference(key)) => {
                if let Some(values) = self.named.read().get(key) {
                    candidates.extend(values.iter().cloned());
                }
            }
            None => {}
        }

        if let Some(provider) = self.providers.read().get(arg.kind.name()) {
            candidates.extend(provider());
        }
        if arg.kind == ArgKind::Bool && candidates.is_empty() {
            candidates.extend(["true".to_string(), "false".to_string()]);
        }

        let partial_lower = partial.to_lowercase();
        candidates.retain(|c| c.to_lowercase().starts_with(&partial_lower));
        candidates.sort();
        candidates.dedup();
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ArgSpec;

    fn spec() -> CommandSpec {
        CommandSpec::new("warp")
            .arg(ArgSpec::required("point", ArgKind::String).suggest(["spawn", "shop", "arena"]))
            .arg(ArgSpec::required("target", ArgKind::Player))
    }

    #[test]
    fn test_static_suggestions_prefix_filtered() {
        let registry = SuggestionRegistry::new();
        assert_eq!(registry.complete(&spec(), &["s"]), vec!["shop", "spawn"]);
        assert_eq!(registry.complete(&spec(), &[""]), vec!["arena", "shop", "spawn"]);
        assert!(registry.complete(&spec(), &["x"]).is_empty());
    }

    #[test]
    fn test_named_reference() {
        let registry = SuggestionRegistry::new();
        registry
            .register_suggestion("@gamemodes", ["survival", "creative"])
            .unwrap();
        let spec = CommandSpec::new("gamemode")
            .arg(ArgSpec::required("mode", ArgKind::String).suggest_ref("@gamemodes"));
        assert_eq!(registry.complete(&spec, &["c"]), vec!["creative"]);
    }

    #[test]
    fn test_key_must_start_with_at() {
        let registry = SuggestionRegistry::new();
        assert!(matches!(
            registry.register_suggestion("gamemodes", ["a"]).unwrap_err(),
            FlameError::Registration { .. }
        ));
    }

    #[test]
    fn test_kind_provider() {
        let registry = SuggestionRegistry::new();
        registry.register_provider(
            "player",
            Arc::new(|| vec!["Steve".to_string(), "Alex".to_string()]),
        );
        // second argument is the player
        assert_eq!(registry.complete(&spec(), &["spawn", "st"]), vec!["Steve"]);
        assert_eq!(registry.complete(&spec(), &["spawn", ""]), vec!["Alex", "Steve"]);
    }

    #[test]
    fn test_bool_fallback() {
        let registry = SuggestionRegistry::new();
        let spec = CommandSpec::new("fly").arg(ArgSpec::required("enabled", ArgKind::Bool));
        assert_eq!(registry.complete(&spec, &["t"]), vec!["true"]);
    }

    #[test]
    fn test_past_last_argument_is_empty() {
        let registry = SuggestionRegistry::new();
        assert!(registry.complete(&spec(), &["spawn", "Steve", ""]).is_empty());
    }
}
