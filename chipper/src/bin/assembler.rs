use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

/// Assemble chip-8 source into a raw image loaded at 0x200
#[derive(Parser, Debug)]
#[command(name = "assembler", version, about)]
struct Cli {
    /// Assembly source
    input: PathBuf,

    /// Raw binary image to write
    output: PathBuf,
}

fn run(cli: &Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    // Nothing is written unless every line assembled
    let image = chipper::assemble(&source)?;

    fs::write(&cli.output, &image)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    log::info!("wrote {} byte(s) to {}", image.len(), cli.output.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{:#}", err);
        process::exit(1);
    }
}
