//! fitcalc - Fitness training calculator

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;

use fitcalc::{InfoMessage, Training, read_package};

/// Sample sensor packages
const PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

#[derive(Parser)]
#[command(name = "fitcalc")]
#[command(author, version, about = "Fitness training calculator")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true, env = "FITCALC_JSON")]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process the built-in sample packages
    Demo,

    /// Process a single sensor package
    Show {
        /// Workout type code: SWM, RUN or WLK
        code: String,

        /// Sensor readings in package order
        #[arg(required = true, allow_negative_numbers = true)]
        params: Vec<f64>,
    },
}

fn print_info(info: &InfoMessage, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(info)?);
    } else {
        println!("{}", info.get_message());
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Show { code, params }) => {
            let training = read_package(&code, &params)?;
            print_info(&training.show_training_info(), cli.json)?;
        }

        Some(Commands::Demo) | None => {
            for (workout_type, data) in PACKAGES {
                match read_package(workout_type, data) {
                    Ok(training) => print_info(&training.show_training_info(), cli.json)?,
                    Err(e) => warn!(code = workout_type, "package skipped: {}", e),
                }
            }
        }
    }

    Ok(())
}
