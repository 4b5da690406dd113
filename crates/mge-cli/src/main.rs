//! CLI frontend for the mge solo oracle.

mod commands;
mod store;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use commands::Context;

#[derive(Parser)]
#[command(
    name = "mge",
    about = "mge: a solo game-master emulator oracle",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible rolls (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Plot point dataset to use instead of the bundled one
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Directory where games are stored
    #[arg(long, global = true, default_value = ".mge")]
    state_dir: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Leave meaning words out of random events
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the fate chart a yes/no question
    Ask {
        /// Odds tier, or any unambiguous prefix (e.g. "likely", "50/50", "near-c")
        tier: String,

        /// Chaos factor 0-9 (default: the game's, or 5)
        #[arg(short, long)]
        chaos: Option<i64>,

        /// Read the chaos factor from a stored game
        #[arg(short, long)]
        game: Option<String>,
    },

    /// Generate a random event
    Event,

    /// Roll the chaos die for a new scene
    Scene {
        /// Chaos factor 0-9 (default: the game's, or 5)
        #[arg(short, long)]
        chaos: Option<i64>,

        /// Read the chaos factor from a stored game
        #[arg(short, long)]
        game: Option<String>,
    },

    /// Roll on the scene adjustment table
    Adjust,

    /// Shuffle a new theme order
    Themes,

    /// Roll a plot point
    Plot {
        /// Use this theme instead of sampling one
        #[arg(short, long)]
        theme: Option<String>,

        /// Use this d100 roll instead of rolling
        #[arg(short, long)]
        roll: Option<i32>,

        /// Sample the theme from a stored game's theme order
        #[arg(short, long)]
        game: Option<String>,
    },

    /// Roll a meta plot point
    Meta {
        /// Use this d100 roll instead of rolling
        #[arg(short, long)]
        roll: Option<i32>,
    },

    /// Print the fate chart
    Chart,

    /// Manage stored games
    Game {
        #[command(subcommand)]
        action: GameAction,
    },
}

#[derive(Subcommand)]
enum GameAction {
    /// Create a game with a fresh theme order
    New {
        /// Game name (3-32 letters, digits or spaces)
        name: String,

        /// Starting chaos factor
        #[arg(short, long, default_value = "5")]
        chaos: i64,
    },

    /// Show a stored game
    Show {
        /// Game name
        name: String,
    },

    /// List stored games
    List,

    /// Set a game's chaos factor
    Chaos {
        /// Game name
        name: String,

        /// New chaos factor (clamped to 0-9)
        value: i64,
    },

    /// End the current scene, adjusting chaos
    EndScene {
        /// Game name
        name: String,

        /// The scene went well for the player (chaos -1); otherwise chaos +1
        #[arg(long)]
        well: bool,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let ctx = Context {
        seed: cli.seed,
        dataset: cli.dataset,
        state_dir: cli.state_dir,
        json: cli.json,
        plain: cli.plain,
    };

    let result = match cli.command {
        Commands::Ask { tier, chaos, game } => {
            commands::ask::run(&ctx, &tier, chaos, game.as_deref())
        }
        Commands::Event => commands::event::run(&ctx),
        Commands::Scene { chaos, game } => commands::scene::run(&ctx, chaos, game.as_deref()),
        Commands::Adjust => commands::scene::adjust(&ctx),
        Commands::Themes => commands::themes::run(&ctx),
        Commands::Plot { theme, roll, game } => {
            commands::plot::run(&ctx, theme.as_deref(), roll, game.as_deref())
        }
        Commands::Meta { roll } => commands::plot::meta(&ctx, roll),
        Commands::Chart => commands::chart::run(&ctx),
        Commands::Game { action } => match action {
            GameAction::New { name, chaos } => commands::game::new(&ctx, &name, chaos),
            GameAction::Show { name } => commands::game::show(&ctx, &name),
            GameAction::List => commands::game::list(&ctx),
            GameAction::Chaos { name, value } => commands::game::set_chaos(&ctx, &name, value),
            GameAction::EndScene { name, well } => commands::game::end_scene(&ctx, &name, well),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
