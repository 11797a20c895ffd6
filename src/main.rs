use clap::{Parser, Subcommand};
use cvd_palette::BlindnessType;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hueforge::models::{AppConfig, EvolveOverrides, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
use hueforge::services::{write_swatch, PaletteService};

#[derive(Parser)]
#[command(name = "hueforge")]
#[command(about = "Evolve color palettes that survive color-vision deficiencies")]
struct Cli {
    /// Config file (defaults to $HUEFORGE_CONFIG, then ./hueforge.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the genetic search and print the best palette
    Evolve {
        /// Random seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of generations
        #[arg(short, long)]
        generations: Option<usize>,

        /// Individuals per generation
        #[arg(short, long)]
        population: Option<usize>,

        /// Colors per palette
        #[arg(short, long)]
        length: Option<usize>,

        /// Vision model to optimize for (e.g. deuteranopia, tritanomaly)
        #[arg(short, long)]
        blindness: Option<String>,

        /// Probability of mutating a child, and each of its colors
        #[arg(long)]
        mutation_rate: Option<f64>,

        /// Probability of accepting a crossover draw
        #[arg(long)]
        crossover_rate: Option<f64>,

        /// Write a swatch of the palette and its simulated view
        #[arg(long)]
        png: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score a palette under every vision model
    Simulate {
        /// Colors as hex (#rrggbb or #rgb)
        #[arg(required = true)]
        colors: Vec<String>,

        /// Palette name used in the report
        #[arg(short, long, default_value = "palette")]
        name: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score the visible-spectrum preset under every vision model
    Spectrum {
        /// Number of wavelengths sampled from 380 to 750 nm
        #[arg(short = 'n', long, default_value_t = 16)]
        count: usize,

        /// Write a swatch of one view
        #[arg(long)]
        png: Option<PathBuf>,

        /// View to render with --png
        #[arg(short, long, default_value = "normal")]
        blindness: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        run_status_command(cli.config.as_deref());
        return Ok(());
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hueforge=info,cvd_palette=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let mut config = AppConfig::load(cli.config.as_deref())?;

    match command {
        Commands::Evolve {
            seed,
            generations,
            population,
            length,
            blindness,
            mutation_rate,
            crossover_rate,
            png,
            json,
        } => {
            config.apply(&EvolveOverrides {
                seed,
                generations,
                population_size: population,
                palette_length: length,
                blindness,
                mutation_rate,
                crossover_rate,
            });
            run_evolve_command(config, png.as_deref(), json)
        }
        Commands::Simulate { colors, name, json } => {
            run_simulate_command(config, &name, &colors, json)
        }
        Commands::Spectrum {
            count,
            png,
            blindness,
            json,
        } => run_spectrum_command(config, count, png.as_deref(), &blindness, json),
    }
}

fn run_evolve_command(config: AppConfig, png: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let service = PaletteService::new(config)?;
    let outcome = service.evolve()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    } else {
        print!("{}", outcome.report);
    }

    if let Some(path) = png {
        let best = &outcome.result.best;
        write_swatch(
            path,
            &[best.genotype().colors(), best.phenotype().colors()],
            &service.layout(),
        )?;
    }
    Ok(())
}

fn run_simulate_command(
    config: AppConfig,
    name: &str,
    colors: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let mut service = PaletteService::new(config)?;
    let (_, report) = service.simulate(name, colors)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn run_spectrum_command(
    config: AppConfig,
    count: usize,
    png: Option<&Path>,
    blindness: &str,
    json: bool,
) -> anyhow::Result<()> {
    let kind: BlindnessType = blindness.parse()?;
    let mut service = PaletteService::new(config)?;
    let (id, report) = service.spectrum(count)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    if let Some(path) = png {
        let colors = service
            .view_colors(id, kind)
            .ok_or_else(|| anyhow::anyhow!("No {kind} view for palette {id}"))?;
        write_swatch(path, &[colors], &service.layout())?;
    }
    Ok(())
}

/// Display version, config source and available commands
fn run_status_command(explicit: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Hueforge v{VERSION}");
    println!("Palettes that survive color-vision deficiencies\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV_VAR} = {}",
        std::env::var(CONFIG_ENV_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "(not set)".to_string())
    );

    let source = match AppConfig::resolve_path(explicit) {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (file not found, using defaults)", path.display()),
        None => format!("defaults (no {DEFAULT_CONFIG_FILE})"),
    };
    println!("\nConfig: {source}");

    println!("\nVision models:");
    for kind in BlindnessType::ALL {
        println!("  {}", kind.name().to_lowercase());
    }

    println!("\nCommands:");
    println!("  hueforge evolve     Run the genetic palette search");
    println!("  hueforge simulate   Score a palette under every vision model");
    println!("  hueforge spectrum   Score the visible-spectrum preset");
    println!("\nRun 'hueforge --help' for more details.");
}
