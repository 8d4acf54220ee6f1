//! untoc CLI - document outline extraction tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use untoc::{
    batch::{process_dir, BatchOptions},
    JsonFormat, Untoc,
};

#[derive(Parser)]
#[command(name = "untoc")]
#[command(version)]
#[command(about = "Extract a document outline (title + H1-H3 headings) from PDF text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of a single PDF as JSON
    Outline {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Drop the first heading when it duplicates the title
        #[arg(long)]
        strict_title: bool,

        /// Continue with an empty outline when extraction fails
        #[arg(long)]
        lenient: bool,
    },

    /// Process every PDF in a directory, writing one JSON outline per file
    Batch {
        /// Input directory containing PDF files
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory (defaults to the input directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Disable parallel processing
        #[arg(long)]
        sequential: bool,
    },

    /// Show a human-readable outline for a PDF
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Outline {
            input,
            output,
            compact,
            strict_title,
            lenient,
        } => cmd_outline(&input, output.as_deref(), compact, strict_title, lenient),
        Commands::Batch {
            input,
            output,
            compact,
            sequential,
        } => cmd_batch(&input, output.as_deref(), compact, sequential),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    strict_title: bool,
    lenient: bool,
) -> untoc::Result<()> {
    let mut builder = Untoc::new();
    if strict_title {
        builder = builder.strict_title();
    }
    if lenient {
        builder = builder.lenient();
    }

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = builder.parse(input)?.to_json(format)?;

    match output {
        Some(path) => {
            fs::write(path, json)?;
            println!("{} {}", "wrote".green(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    sequential: bool,
) -> untoc::Result<()> {
    let output = output.unwrap_or(input);

    let options = BatchOptions {
        format: if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        },
        parallel: !sequential,
        ..Default::default()
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    spinner.set_message(format!("processing {}", input.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let summary = process_dir(input, output, &options)?;
    spinner.finish_and_clear();

    println!(
        "{} {} processed, {} failed",
        "done:".green().bold(),
        summary.processed,
        summary.failed
    );
    Ok(())
}

fn cmd_info(input: &Path) -> untoc::Result<()> {
    let result = Untoc::new().parse(input)?;
    let outline = result.outline();

    if outline.title.is_empty() {
        println!("{} {}", "title:".bold(), "(none)".dimmed());
    } else {
        println!("{} {}", "title:".bold(), outline.title);
    }
    println!("{} {}", "headings:".bold(), outline.len());
    println!();
    print!("{}", result.to_text());
    Ok(())
}
