//! Smudge Runtime
//!
//! Command-line host for the print code engine: loads settings, opens a
//! world with the given seed and renders full or partial codes.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use smudge_core::EntityId;
use smudge_services::{Session, Settings, WorldEvent};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "smudge")]
#[command(version)]
#[command(about = "Deterministic print codes for world entities")]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Settings file (JSON). Defaults apply when the file does not exist.
    #[arg(long, global = true, default_value = "smudge.json")]
    settings: PathBuf,

    /// World seed
    #[arg(long, global = true, default_value_t = 0)]
    seed: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an entity's full code
    Full(EntityArgs),
    /// Print an entity's code as seen in one observation
    Partial {
        #[command(flatten)]
        entity: EntityArgs,
        /// Observation (evidence) identifier
        #[arg(long)]
        event: String,
    },
    /// Print a table of codes for a range of entities
    Sheet {
        /// Number of entities, starting at 0
        #[arg(long, default_value_t = 10)]
        count: u32,
        /// Observations to render for every entity
        #[arg(long, value_delimiter = ',')]
        events: Vec<String>,
    },
    /// Write the current settings (or defaults) to the settings path
    InitSettings,
}

#[derive(Args)]
struct EntityArgs {
    /// Entity to render: a numeric id, or a name that is hashed into one
    #[arg(long, value_name = "ID|NAME")]
    entity: EntitySelector,
}

/// How an entity was named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum EntitySelector {
    Id(u32),
    Name(String),
}

impl FromStr for EntitySelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u32>() {
            Ok(raw) => EntitySelector::Id(raw),
            Err(_) => EntitySelector::Name(s.to_owned()),
        })
    }
}

impl EntitySelector {
    fn resolve(&self) -> EntityId {
        match self {
            EntitySelector::Id(raw) => EntityId::new(*raw),
            EntitySelector::Name(name) => EntityId::from_name(name),
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    tracing::info!("Smudge v{}", smudge_core::VERSION);

    let settings = Settings::load_or_default(&cli.settings)
        .with_context(|| format!("loading settings from {}", cli.settings.display()))?;

    if let Commands::InitSettings = cli.command {
        settings
            .save(&cli.settings)
            .with_context(|| format!("writing settings to {}", cli.settings.display()))?;
        println!("{}", cli.settings.display());
        return Ok(());
    }

    let mut session = Session::start(&settings, WorldEvent::NewGame { seed: cli.seed })
        .context("invalid print settings")?;
    let engine = session.engine_mut();

    match &cli.command {
        Commands::Full(args) => {
            println!("{}", engine.full_code(args.entity.resolve()));
        }
        Commands::Partial { entity, event } => {
            println!("{}", engine.partial_code(entity.entity.resolve(), event));
        }
        Commands::Sheet { count, events } => {
            let entities: Vec<EntityId> = (0..*count).map(EntityId::new).collect();
            engine.prewarm(&entities);
            for entity in entities {
                let mut line = format!("{:>8}  {}", entity.to_string(), engine.full_code(entity));
                for event in events {
                    line.push_str("  ");
                    line.push_str(engine.partial_code(entity, event));
                }
                println!("{line}");
            }
        }
        Commands::InitSettings => {}
    }

    for (name, value) in engine.counters().iter() {
        tracing::info!(counter = name, value, "cache stats");
    }

    Ok(())
}
