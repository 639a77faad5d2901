use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "training-report",
    about = "Report distance, mean speed and calories for sensor workout packages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,

    /// JSON file with an array of packages, e.g. `[["RUN", [15000, 1, 75]]]`.
    ///
    /// Default: the built-in demo packages.
    #[arg(long, value_name = "FILE")]
    pub packages: Option<PathBuf>,

    /// Skip packages that fail instead of stopping at the first one.
    #[arg(long)]
    pub keep_going: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Report a single workout.
    Show {
        /// Workout type code: SWM, RUN or WLK.
        code: String,

        /// Readings in package order (action, duration, weight, ...).
        #[arg(required = true, allow_negative_numbers = true)]
        readings: Vec<f64>,
    },
}
