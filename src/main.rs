//! repforge - workout catalog service
//!
//! Serves the HTTP API by default; the other subcommands print the same
//! generated content as JSON for offline use.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use repforge::catalog::Catalog;
use repforge::composer::{build_hiit, build_weekly_plan, generate_workout};
use repforge::config::ServerConfig;
use repforge::params::{HiitQuery, PlanQuery, WorkoutQuery};
use repforge::server;

#[derive(Parser)]
#[command(name = "repforge")]
#[command(author, version, about = "Workout catalog and generator service")]
struct Cli {
    #[command(flatten)]
    server: ServerConfig,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve,

    /// Print a random workout
    Workout {
        /// chest, back, legs, shoulders, arms or core
        #[arg(long)]
        muscle: Option<String>,

        /// beginner, intermediate or advanced
        #[arg(long)]
        difficulty: Option<String>,

        /// Equipment substring, e.g. "dumbbell"
        #[arg(long)]
        equipment: Option<String>,

        /// Number of exercises (1-10)
        #[arg(long)]
        count: Option<String>,
    },

    /// Print a weekly training plan
    Plan {
        #[arg(long)]
        difficulty: Option<String>,

        #[arg(long)]
        days: Option<String>,
    },

    /// Print a HIIT session
    Hiit {
        #[arg(long)]
        rounds: Option<String>,

        /// Work interval in seconds
        #[arg(long)]
        work: Option<String>,

        /// Rest interval in seconds
        #[arg(long)]
        rest: Option<String>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut rng = rand::thread_rng();

    match cli.command {
        Some(Commands::Workout { muscle, difficulty, equipment, count }) => {
            let request = WorkoutQuery { muscle, difficulty, equipment, count }.parse()?;
            let catalog = Catalog::builtin();
            let workout = generate_workout(catalog.exercises(), catalog.categories(), request, &mut rng)?;
            print_json(&workout)?;
        }

        Some(Commands::Plan { difficulty, days }) => {
            let request = PlanQuery { difficulty, days }.parse()?;
            let catalog = Catalog::builtin();
            let plan = build_weekly_plan(catalog.exercises(), catalog.categories(), request, &mut rng);
            print_json(&plan)?;
        }

        Some(Commands::Hiit { rounds, work, rest }) => {
            let request = HiitQuery { rounds, work, rest }.parse()?;
            print_json(&build_hiit(request, &mut rng))?;
        }

        Some(Commands::Serve) | None => {
            server::serve(cli.server).await?;
        }
    }

    Ok(())
}
