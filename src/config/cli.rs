use clap::Parser;

/// The demo console that registers a sample command set and dispatches
/// stdin lines as a console actor.
#[derive(Parser, Debug, Clone)]
#[command(name = "flameware", about = "FlameWare command console")]
pub struct CliConfig {
    /// Optional TOML config file (manager + messages sections).
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}
