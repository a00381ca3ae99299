//! `agriguard` command-line front end.
//!
//!   agriguard analyze leaf.jpg --wind 14
//!   agriguard analyze leaf.png --strategy hsv --json
//!   agriguard demo --seed 3

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use agriguard::{analyze, AnalysisSettings, DemoEngine, FeatureStrategy, Settings, WeatherInput};

#[derive(Parser, Debug)]
#[command(name = "agriguard")]
#[command(version)]
#[command(about = "Rule-based crop health assessment and IPM advisories", long_about = None)]
struct Args {
    /// Configuration file (defaults to ./agriguard.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a JPEG or PNG crop/leaf image
    Analyze {
        /// Image file to analyze
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        /// Wind speed in km/h (0-30)
        #[arg(long, default_value_t = 6.0)]
        wind: f64,

        /// Temperature in °C (10-45)
        #[arg(long, default_value_t = 28.0)]
        temperature: f64,

        /// Relative humidity in % (20-100)
        #[arg(long, default_value_t = 65.0)]
        humidity: f64,

        /// Feature strategy; overrides the config file
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Random diagnosis from a fixed list (ignores any image)
    Demo {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    MeanVariance,
    Hsv,
}

impl From<StrategyArg> for FeatureStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::MeanVariance => FeatureStrategy::MeanVariance,
            StrategyArg::Hsv          => FeatureStrategy::HsvValueSaturation,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?;
    agriguard::telemetry::init(&settings.logging.filter);
    debug!(?settings, "settings loaded");

    match args.command {
        Commands::Analyze { image, wind, temperature, humidity, strategy, json } => {
            let bytes = std::fs::read(&image)
                .with_context(|| format!("failed to read {}", image.display()))?;

            let analysis = match strategy {
                // A CLI strategy replaces the file's thresholds along with its strategy.
                Some(s) => AnalysisSettings::new(s.into()),
                None    => settings.analysis,
            };
            let weather = WeatherInput { temperature, humidity, wind_speed: wind }.clamped();

            let report = analyze(&bytes, weather, &analysis)
                .with_context(|| format!("could not analyze {}", image.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.to_text());
            }
        }
        Commands::Demo { seed } => {
            let mut engine = match seed {
                Some(seed) => DemoEngine::seeded(seed),
                None       => DemoEngine::from_entropy(),
            };
            println!("[random demo] {}", engine.diagnose());
        }
    }
    Ok(())
}
