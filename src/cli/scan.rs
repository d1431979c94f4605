use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use crate::catalog::canon::Canon;
use crate::cli::OutputFormat;
use crate::core::pericope::Pericope;
use crate::parsing::TextProcessor;

#[derive(Args)]
pub struct ScanArgs {
    /// Text file to scan. Use '-' or omit to read stdin.
    pub input: Option<PathBuf>,
}

pub fn run(args: ScanArgs, canon: &Canon, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let text = read_input(args.input.as_ref())?;
    let processor = TextProcessor::new(canon);
    let found = processor.scan(&text);

    if verbose {
        eprintln!("Scanned {} bytes, found {} reference(s)", text.len(), found.len());
    }

    match format {
        OutputFormat::Text => print_text_results(&found),
        OutputFormat::Json => print_json_results(&found)?,
        OutputFormat::Tsv => print_tsv_results(&found),
    }

    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_text_results(found: &[Pericope<'_>]) {
    if found.is_empty() {
        println!("No references found");
        return;
    }
    for pericope in found {
        println!("{pericope}");
    }
}

fn print_json_results(found: &[Pericope<'_>]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(found)?);
    Ok(())
}

fn print_tsv_results(found: &[Pericope<'_>]) {
    println!("reference\tbook\tverse_count");
    for pericope in found {
        println!(
            "{}\t{}\t{}",
            pericope,
            pericope.book().code,
            pericope.verse_count()
        );
    }
}
