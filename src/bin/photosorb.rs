use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use photosorb_rs::config::ExperimentConfig;
use photosorb_rs::output::{CsvExporter, Exporter};
use photosorb_rs::presets::Preset;
use photosorb_rs::solver::{EulerSolver, Solver};

#[derive(Parser)]
#[command(name = "photosorb")]
#[command(about = "Adsorption / desorption kinetics in a flushed reactor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the experiment described by a JSON file
    Run {
        /// Experiment JSON file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Run one of the reference experiments
    Preset {
        #[arg(value_enum)]
        name: PresetName,

        /// Simulated duration in seconds
        #[arg(long, default_value_t = 100.0)]
        duration: f64,

        /// Keep every N-th sample in the output
        #[arg(long, default_value_t = 1000)]
        stride: usize,

        /// Output CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the experiment JSON instead of running it
        #[arg(long, value_name = "FILE")]
        dump_config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetName {
    Adsorption,
    Desorption,
    PhotoDesorption,
}

impl From<PresetName> for Preset {
    fn from(name: PresetName) -> Self {
        match name {
            PresetName::Adsorption => Preset::OxygenAdsorption,
            PresetName::Desorption => Preset::ThermalDesorption,
            PresetName::PhotoDesorption => Preset::PhotoDesorption,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let config = match cli.command {
        Commands::Run { config } => ExperimentConfig::from_file(&config)
            .with_context(|| format!("Failed to load {}", config.display()))?,
        Commands::Preset {
            name,
            duration,
            stride,
            output,
            dump_config,
        } => {
            let mut config = ExperimentConfig::from_preset(name.into(), duration);
            config.output.stride = stride;
            if let Some(path) = output {
                config.output.path = path;
            }

            if let Some(path) = dump_config {
                config
                    .to_file(&path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Experiment written to {}", path.display());
                return Ok(());
            }
            config
        }
    };

    run(&config)
}

fn run(config: &ExperimentConfig) -> Result<()> {
    config.validate().context("Invalid experiment")?;

    let scenario = config.scenario().context("Failed to prepare scenario")?;
    let solver = EulerSolver::new();

    let start = Instant::now();
    let result = solver
        .solve_with_progress(&scenario, &config.solver, |progress| {
            eprint!("\r  {:5.1} %  t = {:.2} s", 100.0 * progress.fraction(), progress.time);
            let _ = std::io::stderr().flush();
        })
        .context("Integration failed")?;
    eprintln!();

    let exporter = CsvExporter::new(config.output.csv_config());
    exporter
        .export(&result, &config.output.path)
        .with_context(|| format!("Failed to write {}", config.output.path.display()))?;

    info!(
        "{} samples in {:.2?}: θ = {:.6}, A = {:.6e}",
        result.len(),
        start.elapsed(),
        result.final_occupancy().unwrap_or(f64::NAN),
        result.final_concentration().unwrap_or(f64::NAN),
    );
    Ok(())
}
