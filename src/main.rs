use clap::Parser;
use flameware::utils::logger;
use flameware::{
    ArgKind, ArgSpec, CliConfig, CommandActor, CommandManager, CommandSpec, Context, FlameConfig,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use uuid::Uuid;

struct ConsoleActor {
    id: Uuid,
}

impl CommandActor for ConsoleActor {
    fn send_raw(&self, message: &str) {
        println!("{}", message);
    }

    fn name(&self) -> &str {
        "CONSOLE"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn has_permission(&self, _permission: &str) -> bool {
        true
    }

    fn is_console(&self) -> bool {
        true
    }
}

fn register_demo_commands(manager: &CommandManager) -> flameware::Result<()> {
    manager.register(
        CommandSpec::new("greet")
            .description("Greets someone")
            .arg(ArgSpec::required("who", ArgKind::Player))
            .arg(ArgSpec::optional("greeting", ArgKind::String, "Hello")),
        |ctx: Context| {
            let who = ctx.args.get_str("who").unwrap_or("someone");
            let greeting = ctx.args.get_str("greeting").unwrap_or("Hello");
            ctx.actor.reply(&format!("&a{}, {}!", greeting, who));
            Ok(())
        },
    )?;

    manager.register(
        CommandSpec::new("broadcast")
            .alias("bc")
            .description("Broadcasts a message")
            .arg(ArgSpec::greedy("message", " ")),
        |ctx: Context| {
            let message = ctx.args.get_str("message").unwrap_or_default();
            ctx.actor.reply(&format!("&e[Broadcast] &f{}", message));
            Ok(())
        },
    )?;

    manager.register(
        CommandSpec::new("give")
            .description("Gives items to a player")
            .arg(ArgSpec::required("target", ArgKind::Player).suggest_ref("@players"))
            .arg(ArgSpec::required("amount", ArgKind::Int).range(1.0, 64.0)),
        |ctx: Context| {
            let target = ctx.args.get_str("target").unwrap_or("?");
            let amount = ctx.args.get_int("amount").unwrap_or(0);
            ctx.actor
                .reply(&format!("&aGave &l{}&r&a item(s) to {}.", amount, target));
            Ok(())
        },
    )?;

    manager.register(
        CommandSpec::new("spawn")
            .description("Teleports you to spawn")
            .cooldown(Duration::from_secs(5)),
        |ctx: Context| {
            ctx.actor.reply("&aTeleported to spawn.");
            Ok(())
        },
    )?;

    manager.register(
        CommandSpec::new("home").description("Teleports you home"),
        |ctx: Context| {
            ctx.actor.reply("&aTeleported home.");
            Ok(())
        },
    )?;
    manager.register_subcommand(
        "home",
        CommandSpec::new("set")
            .description("Sets your home")
            .arg(ArgSpec::required("name", ArgKind::String)),
        |ctx: Context| {
            let name = ctx.args.get_str("name").unwrap_or("home");
            ctx.actor.reply(&format!("&aHome '{}' set.", name));
            Ok(())
        },
    )?;

    manager
        .suggestions()
        .register_suggestion("@players", ["Steve", "Alex"])?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => FlameConfig::from_toml_file(path)?,
        None => FlameConfig::default(),
    };

    let manager = Arc::new(CommandManager::with_messages(
        config.manager,
        config.messages,
    ));
    register_demo_commands(&manager)?;

    tracing::info!("FlameWare console ready; type a command or 'quit'");
    println!("Commands: {}", manager.command_names().join(", "));

    let actor: Arc<dyn CommandActor> = Arc::new(ConsoleActor { id: Uuid::new_v4() });
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if let Err(err) = manager.dispatch(Arc::clone(&actor), line).await {
            tracing::error!("command failed: {}", err);
            eprintln!("command failed: {}", err);
        }
    }

    Ok(())
}
