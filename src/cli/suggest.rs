use clap::Args;

use crate::catalog::canon::Canon;
use crate::cli::OutputFormat;
use crate::parsing::TextProcessor;

#[derive(Args)]
pub struct SuggestArgs {
    /// Partially typed reference (e.g., "Joh", "John 3:1"). Empty lists common books.
    #[arg(default_value = "")]
    pub partial: String,
}

pub fn run(
    args: SuggestArgs,
    canon: &Canon,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let processor = TextProcessor::new(canon);
    let suggestions = processor.suggest_completions(&args.partial);

    if verbose {
        eprintln!("{} suggestion(s) for '{}'", suggestions.len(), args.partial);
    }

    match format {
        OutputFormat::Text | OutputFormat::Tsv => {
            for suggestion in &suggestions {
                println!("{suggestion}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "input": args.partial,
                "suggestions": suggestions,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
