use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use mediadeck_common::{Console, PlayerConfig};
use mediadeck_player::{demo, MediaPlayerFacade};

#[derive(Debug, Parser)]
#[command(name = "mediadeck", version, about = "Media player facade demonstration")]
struct Cli {
    /// TOML file overriding the playback presets
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the scripted demonstration session (default)
    Demo,
    /// Queue the given files and play each once
    Play {
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Print the media kind inferred for each file
    Classify {
        #[arg(required = true)]
        files: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PlayerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PlayerConfig::default(),
    };

    init_tracing(&config.log_level(), cli.verbose)?;
    tracing::info!("MediaDeck v{}", env!("CARGO_PKG_VERSION"));

    let console = Console::stdout();
    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            let mut player = MediaPlayerFacade::with_config(console, config);
            demo::run_demo(&mut player);
        }
        Command::Play { files } => {
            let mut player = MediaPlayerFacade::with_config(console, config);
            demo::play_through(&mut player, &files);
        }
        Command::Classify { files } => demo::classify_files(&console, &files),
    }

    Ok(())
}

/// Diagnostics go to stderr; stdout carries only player notices
fn init_tracing(level: &str, verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { level };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                format!("mediadeck={}", level)
                    .parse::<Directive>()
                    .with_context(|| format!("Invalid log level {:?}", level))?,
            ),
        )
        .init();
    Ok(())
}
