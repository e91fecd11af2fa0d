mod commands;

use clap::{Parser, Subcommand};
use color_print::cformat;

use aiterm::styling::eprintln;

#[derive(Parser)]
#[command(name = "aiterm")]
#[command(about = "Terminal workflow optimizer for AI coding sessions", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the Claude Code status line from a JSON event on stdin
    Statusline {
        /// Fixed terminal width (defaults to autodetection)
        #[arg(long)]
        width: Option<usize>,
    },
    /// Inspect and modify status-line configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print one option value
    Get { key: String },
    /// Set and persist one option value
    Set { key: String, value: String },
    /// Print all options with their effective values
    List,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Statusline { width } => commands::statusline::run(width),
        Commands::Config { action } => match action {
            ConfigAction::Get { key } => commands::config::get(&key),
            ConfigAction::Set { key, value } => commands::config::set(&key, &value),
            ConfigAction::List => commands::config::list(),
        },
    };

    if let Err(error) = result {
        eprintln!("{}", cformat!("<red>Error:</> {error:#}"));
        std::process::exit(1);
    }
}
