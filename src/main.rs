#![deny(warnings, clippy::all, clippy::pedantic, clippy::nursery)]

use anyhow::Result;
use clap::Parser;
use std::io;
use training_report::report::{BatchPolicy, run_batch};
use training_report::{cli, dlog, read_package, types, utils};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    match cli.cmd {
        Some(cli::Cmd::Show { code, readings }) => {
            dlog!("mode=show code={code} readings={readings:?}");
            let workout = read_package(&code, &readings)?;
            println!("{}", workout.render_report());
            Ok(())
        }
        None => {
            let packages = match &cli.packages {
                Some(path) => utils::load_packages(path)?,
                None => types::demo_packages(),
            };
            let policy = if cli.keep_going {
                BatchPolicy::Skip
            } else {
                BatchPolicy::Abort
            };
            dlog!("mode=batch packages={} policy={policy:?}", packages.len());

            run_batch(&packages, policy, io::stdout().lock())?;
            Ok(())
        }
    }
}
