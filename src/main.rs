//! Command line front end for the dead-zone Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dead_zone_life::{
    config::{CliOverrides, NeighborBounds, OutputFormat, Settings},
    driver::terminal,
    headless,
    utils::{BoardFormatter, ColorOutput, Glyphs},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dead_zone_life")]
#[command(about = "Conway's Game of Life on a board with a dead-zone border")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive terminal simulation
    Play {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Milliseconds between generations (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Seed for random patterns (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Neighbor counting at the leading edge (overrides config)
        #[arg(short, long, value_enum)]
        bounds: Option<BoundsArg>,
    },

    /// Apply commands, advance some generations and print the result
    Simulate {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Command keys applied in order before advancing (c, t, r, g)
        #[arg(short, long, default_value = "r")]
        keys: String,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 10)]
        generations: usize,

        /// Seed for random patterns (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Neighbor counting at the leading edge (overrides config)
        #[arg(short, long, value_enum)]
        bounds: Option<BoundsArg>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Print every generation, not just the last
        #[arg(long)]
        show_evolution: bool,
    },

    /// Write a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BoundsArg {
    /// Skip neighbors in row 0 and column 0
    SkipLeadingEdge,
    /// Count every neighbor on the board
    Full,
}

impl From<BoundsArg> for NeighborBounds {
    fn from(arg: BoundsArg) -> Self {
        match arg {
            BoundsArg::SkipLeadingEdge => NeighborBounds::SkipLeadingEdge,
            BoundsArg::Full => NeighborBounds::Full,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            config,
            interval_ms,
            seed,
            bounds,
        } => {
            let overrides = CliOverrides {
                tick_interval_ms: interval_ms,
                seed,
                neighbor_bounds: bounds.map(Into::into),
                format: None,
            };
            play_command(config, overrides)
        }
        Commands::Simulate {
            config,
            keys,
            generations,
            seed,
            bounds,
            format,
            show_evolution,
        } => {
            let overrides = CliOverrides {
                tick_interval_ms: None,
                seed,
                neighbor_bounds: bounds.map(Into::into),
                format: format.map(Into::into),
            };
            simulate_command(config, overrides, &keys, generations, show_evolution)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = Settings::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    settings.merge_with_cli(overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;
    Ok(settings)
}

fn play_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;
    terminal::run(&settings).context("Interactive session failed")
}

fn simulate_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    keys: &str,
    generations: usize,
    show_evolution: bool,
) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;
    let formatter = BoardFormatter::new(Glyphs::from(&settings.display));
    let text_output = settings.output.format == OutputFormat::Text;

    let report = headless::simulate(&settings, keys, generations, |generation, board| {
        if show_evolution && text_output {
            println!("{}", ColorOutput::info(&BoardFormatter::format_summary(generation, board)));
            println!("{}", formatter.format(board));
        }
    });

    match settings.output.format {
        OutputFormat::Text => {
            if !show_evolution {
                println!(
                    "{}",
                    ColorOutput::info(&BoardFormatter::format_summary(
                        report.generation,
                        &report.board
                    ))
                );
                println!("{}", formatter.format(&report.board));
            }
            if report.board.is_empty() {
                println!("{}", ColorOutput::warning("Population died out"));
            } else {
                println!(
                    "{}",
                    ColorOutput::success(&format!(
                        "{} cells alive after {} generations",
                        report.living_cells, report.generation
                    ))
                );
            }
        }
        OutputFormat::Json => {
            let json = report.to_json().context("Failed to serialize report")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration..."));

    let config_path = directory.join(Settings::default_path());
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Skipped: {} (already exists)",
                config_path.display()
            ))
        );
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- play --config {}", config_path.display());

    Ok(())
}
