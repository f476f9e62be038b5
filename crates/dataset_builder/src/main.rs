//! Dataset Builder CLI
//!
//! CSV → normalized records / position benchmarks

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "dataset_builder")]
#[command(about = "Normalize historical stat CSVs and export benchmarks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Normalize a CSV into StatRecord JSON
    Ingest {
        /// Input CSV file path
        #[arg(long)]
        csv: PathBuf,

        /// Output JSON file path
        #[arg(long)]
        out: PathBuf,
    },

    /// Compute position benchmarks from a CSV
    Benchmarks {
        /// Input CSV file path
        #[arg(long)]
        csv: PathBuf,

        /// Output JSON file path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ingest { csv, out } => {
            println!("🔨 Normalizing dataset...");
            println!("   Input:  {}", csv.display());
            println!("   Output: {}", out.display());

            let (records, stats) = dataset_builder::load_records(&csv)?;
            std::fs::write(&out, serde_json::to_string_pretty(&records)?)?;

            print_stats(&stats);
        }

        Commands::Benchmarks { csv, out } => {
            println!("🔨 Computing position benchmarks...");
            println!("   Input: {}", csv.display());

            let (benchmarks, stats) = dataset_builder::load_benchmarks(&csv)?;
            let payload = serde_json::to_string_pretty(&benchmarks)?;

            match out {
                Some(path) => {
                    std::fs::write(&path, payload)?;
                    println!("   Output: {}", path.display());
                }
                None => println!("{}", payload),
            }

            print_stats(&stats);
            println!("   Benchmarked positions: {}", benchmarks.len());
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_stats(stats: &dataset_builder::ParseStats) {
    println!("\n✅ Dataset parsed!");
    println!("   Rows:   {}", stats.total_rows);
    println!("   Parsed: {}", stats.parsed);
    println!("   Failed: {}", stats.failed);
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("dataset_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
