mod common;

use common::RecordingActor;
use flameware::{ArgKind, ArgSpec, CommandManager, CommandSpec, Context, ManagerConfig};
use std::sync::Arc;

fn manager() -> CommandManager {
    let manager = CommandManager::new(ManagerConfig {
        log_commands: false,
        ..ManagerConfig::default()
    });
    manager
        .register(
            CommandSpec::new("warp")
                .alias("w")
                .arg(ArgSpec::required("point", ArgKind::String).suggest(["spawn", "shop", "arena"]))
                .arg(ArgSpec::required("target", ArgKind::Player)),
            |_ctx: Context| Ok(()),
        )
        .unwrap();
    manager
        .register(
            CommandSpec::new("ban")
                .permission("admin.ban")
                .arg(ArgSpec::required("target", ArgKind::Player)),
            |_ctx: Context| Ok(()),
        )
        .unwrap();
    manager
}

#[test]
fn test_completes_command_names_for_first_word() {
    let manager = manager();
    let actor = RecordingActor::player("Steve");
    assert_eq!(manager.complete(&actor, "w"), vec!["w", "warp"]);
    assert_eq!(manager.complete(&actor, ""), vec!["w", "warp"]);
}

#[test]
fn test_command_name_completion_honors_permissions() {
    let manager = manager();
    let admin = RecordingActor::player("Admin").with_permission("admin.ban");
    assert_eq!(manager.complete(&admin, "b"), vec!["ban"]);

    let actor = RecordingActor::player("Steve");
    assert!(manager.complete(&actor, "b").is_empty());
}

#[test]
fn test_completes_argument_candidates() {
    let manager = manager();
    let actor = RecordingActor::player("Steve");
    assert_eq!(manager.complete(&actor, "warp s"), vec!["shop", "spawn"]);
    // trailing space means a fresh token
    assert_eq!(
        manager.complete(&actor, "warp "),
        vec!["arena", "shop", "spawn"]
    );
}

#[test]
fn test_kind_providers_supply_dynamic_candidates() {
    let manager = manager();
    manager.suggestions().register_provider(
        "player",
        Arc::new(|| vec!["Steve".to_string(), "Alex".to_string()]),
    );
    let actor = RecordingActor::player("Steve");
    assert_eq!(manager.complete(&actor, "warp spawn A"), vec!["Alex"]);
}

#[test]
fn test_unknown_command_yields_no_candidates() {
    let manager = manager();
    let actor = RecordingActor::player("Steve");
    assert!(manager.complete(&actor, "nope ").is_empty());
}
