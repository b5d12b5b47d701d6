mod logger;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;

/// Convert a PDF into pocketmod booklets.
///
/// Every 8 pages of the input become one sheet that folds into an 8-page
/// booklet. The result is written to `output_<YYYYMMDDHHMMSS>.pdf` in the
/// current directory.
#[derive(Parser)]
#[command(name = "pocketmod", version)]
struct Cli {
    /// Input PDF to convert
    input: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::StderrLogger::default()
        .init()
        .context("Failed to install logger")?;

    pocketmod::check_input_path(&cli.input)?;
    let document = pocketmod::load_pdf(&cli.input)
        .await
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let stats = pocketmod::calculate_statistics(&document)?;
    println!("PocketMod Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Output sheets: {}", stats.output_sheets);
    println!("  Blank pages added: {}", stats.blank_pages_added);

    let options = pocketmod::PocketModOptions::for_document(&document)?;
    log::info!("Paper size: {:?}", options.paper_size);

    let imposed = pocketmod::impose(&document, &options)
        .with_context(|| format!("Failed to impose {}", cli.input.display()))?;

    let output = std::env::current_dir()
        .context("Failed to resolve the working directory")?
        .join(pocketmod::output_file_name(&Local::now()));
    pocketmod::save_pdf(imposed, &output)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("The file has been converted. The output file is: {}", output.display());

    Ok(())
}
