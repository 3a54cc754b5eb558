use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::io::Read;
use std::path::{Path, PathBuf};

use liftparse::config::AppConfig;
use liftparse::export::{self, text, ExportFormat};
use liftparse::fixture::EXAMPLE_WORKOUT;
use liftparse::logging::{self, LogLevel};
use liftparse::parser::{self, ParseWarning};

/// liftparse - Workout Notes Parser
///
/// Parses a personal trainer's free-text workout notes into structured
/// exercises, sets and training volume.
#[derive(Parser)]
#[command(name = "liftparse")]
#[command(version = "0.1.0")]
#[command(about = "Workout notes parser", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse workout notes and display the result
    Parse {
        /// Input file path (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Output format (table, json, summary)
        #[arg(short, long)]
        format: Option<String>,

        /// Report lines that were dropped during parsing
        #[arg(short, long)]
        warnings: bool,
    },

    /// Parse workout notes and export the persistence payload
    Export {
        /// Input file path (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Export format (json, csv, text)
        #[arg(short = 'f', long, default_value = "json")]
        format: String,
    },

    /// Print the documented example workout
    Example {
        /// Parse the example instead of printing the raw text
        #[arg(short, long)]
        parse: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if cli.verbose > 0 {
        config.logging.level = LogLevel::from_verbosity(cli.verbose);
    }
    logging::init_logging(&config.logging)?;

    match cli.command {
        Commands::Parse {
            file,
            format,
            warnings,
        } => {
            let text = read_input(file.as_deref())?;
            let (workout, dropped) = parser::parse_with_warnings(&text);

            let format = format.unwrap_or_else(|| config.output.default_format.clone());
            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&workout)?),
                "summary" => println!("{}", workout.summary),
                _ => print!("{}", text::render_report(&workout)),
            }

            if warnings || config.output.show_warnings {
                report_dropped(&dropped);
            }
            if workout.is_empty() {
                eprintln!("{}", "No exercises recognized in the input".yellow());
            }
        }

        Commands::Export {
            file,
            output,
            format,
        } => {
            let text = read_input(file.as_deref())?;
            let workout = parser::parse(&text);
            let format = ExportFormat::from_str(&format)?;

            export::export_workout(&workout, &output, format)?;
            println!(
                "{}",
                format!(
                    "✓ Exported {} exercises to {}",
                    workout.exercises.len(),
                    output.display()
                )
                .green()
            );
        }

        Commands::Example { parse } => {
            if parse {
                let workout = parser::parse(EXAMPLE_WORKOUT);
                print!("{}", text::render_report(&workout));
            } else {
                print!("{EXAMPLE_WORKOUT}");
            }
        }
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn report_dropped(warnings: &[ParseWarning]) {
    if warnings.is_empty() {
        return;
    }
    eprintln!(
        "{}",
        format!("{} line(s) dropped:", warnings.len()).yellow().bold()
    );
    for warning in warnings {
        eprintln!(
            "  {} line {}: {} ({})",
            "!".yellow(),
            warning.line,
            warning.text,
            warning.reason
        );
    }
}
