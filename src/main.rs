// csv2sql: generate a database seed script from CSV files.
// Each configured table is read from its CSV and turned into one block of
// INSERT statements in a single output SQL file.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use d1_seed_tools::config;
use d1_seed_tools::logger;
use d1_seed_tools::progress::ProgressManager;
use d1_seed_tools::seed::run;

// Command-line flags.
#[derive(Parser, Debug)]
#[command(author, version, about = "Convert seed CSV files into a SQL INSERT script")]
struct Args {
    /// JSON config listing tables, CSV paths, and column order.
    /// Defaults to the built-in seed table list when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory CSV paths are resolved against.
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Output SQL file (truncated on every run).
    #[arg(short, long, default_value = "d1_seed_data.sql")]
    output: PathBuf,

    /// Enable debug logging (disables the progress bar).
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    logger::set_debug(args.debug);
    logger::debug("main: starting CSV to SQL conversion");

    let specs = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::default_tables(),
    };
    logger::debug(&format!("main: {} table(s) configured", specs.len()));

    // Progress bar is disabled in debug mode to avoid mangled output.
    let progress = ProgressManager::new(!args.debug);

    let summary = run::run_seed(&specs, &args.base_dir, &args.output, &progress)?;

    let mut stdout = io::stdout();
    writeln!(stdout)?;
    writeln!(stdout, "--- Conversion Complete ---")?;
    writeln!(
        stdout,
        "Wrote {} insert(s) across {} table(s) ({} skipped).",
        summary.statements, summary.tables_written, summary.tables_skipped
    )?;
    writeln!(stdout, "The output SQL file is ready: {}", args.output.display())?;
    writeln!(stdout, "To execute this, use the wrangler CLI:")?;
    writeln!(
        stdout,
        "npx wrangler d1 execute dy-app-db --file {}",
        args.output.display()
    )?;

    logger::debug("main: conversion complete");
    Ok(())
}
