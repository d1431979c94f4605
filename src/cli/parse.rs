use clap::Args;

use crate::catalog::canon::Canon;
use crate::cli::{parse_count_pair, OutputFormat};
use crate::core::pericope::Pericope;
use crate::core::types::ReferenceFormat;
use crate::parsing::TextProcessor;

#[derive(Args)]
pub struct ParseArgs {
    /// Reference to parse (e.g., "1 Cor 13:4-7,13")
    #[arg(required = true)]
    pub reference: String,

    /// Render with the book's full name instead of its code
    #[arg(long)]
    pub full_name: bool,

    /// Merge overlapping and adjacent ranges
    #[arg(long)]
    pub normalize: bool,

    /// Add verses before and after, as BEFORE,AFTER (e.g., "2,3")
    #[arg(long, value_parser = parse_count_pair, value_name = "BEFORE,AFTER")]
    pub expand: Option<(usize, usize)>,

    /// Drop verses from the start and end, as START,END (e.g., "1,1")
    #[arg(long, value_parser = parse_count_pair, value_name = "START,END")]
    pub contract: Option<(usize, usize)>,

    /// Replace the passage with every other verse of its book
    #[arg(long)]
    pub complement: bool,

    /// List the verses missing between the first and last verse
    #[arg(long)]
    pub gaps: bool,

    /// Split the passage into runs of consecutive verses
    #[arg(long)]
    pub runs: bool,
}

pub fn run(
    args: ParseArgs,
    canon: &Canon,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let processor = TextProcessor::new(canon);
    let parsed = processor.parse(&args.reference)?;

    if verbose {
        eprintln!(
            "Parsed '{}' as {} ({} range(s) as written)",
            args.reference,
            parsed,
            parsed.range_count()
        );
    }

    let pericope = transform(&args, parsed);
    let reference_format = if args.full_name {
        ReferenceFormat::FullName
    } else {
        ReferenceFormat::Canonical
    };

    match format {
        OutputFormat::Text => print_text_result(&args, &pericope, reference_format, verbose),
        OutputFormat::Json => print_json_result(&args, &pericope, reference_format)?,
        OutputFormat::Tsv => print_tsv_result(&pericope, reference_format),
    }

    Ok(())
}

/// Apply the requested operations in a fixed order: normalize, expand, contract, complement
fn transform<'c>(args: &ParseArgs, pericope: Pericope<'c>) -> Pericope<'c> {
    let mut result = pericope;
    if args.normalize {
        result = result.normalize();
    }
    if let Some((before, after)) = args.expand {
        result = result.expand(before, after);
    }
    if let Some((start, end)) = args.contract {
        result = result.contract(start, end);
    }
    if args.complement {
        result = result.complement(None);
    }
    result
}

fn print_text_result(
    args: &ParseArgs,
    pericope: &Pericope<'_>,
    reference_format: ReferenceFormat,
    verbose: bool,
) {
    let book = pericope.book();
    let rendered = pericope.to_string_with(reference_format);

    println!(
        "Reference: {}",
        if rendered.is_empty() { "(empty)" } else { &rendered }
    );
    println!("Book:      {} ({}, {} testament)", book.name, book.code, book.testament);
    println!("Verses:    {}", pericope.verse_count());
    println!("Chapters:  {}", join_numbers(&pericope.chapter_list()));
    println!("Density:   {:.1}%", pericope.density() * 100.0);

    if verbose {
        println!("\nRanges:");
        for range in pericope.ranges() {
            println!("  {range}");
        }
    }

    if args.gaps {
        let gaps = pericope.gaps();
        println!("\nGaps ({}):", gaps.len());
        for address in &gaps {
            println!("  {address}");
        }
    }

    if args.runs {
        let runs = pericope.continuous_ranges();
        println!("\nRuns ({}):", runs.len());
        for run in &runs {
            println!("  {}", run.to_string_with(reference_format));
        }
    }
}

fn print_json_result(
    args: &ParseArgs,
    pericope: &Pericope<'_>,
    reference_format: ReferenceFormat,
) -> anyhow::Result<()> {
    let book = pericope.book();
    let mut output = serde_json::json!({
        "input": args.reference,
        "reference": pericope.to_string_with(reference_format),
        "book": {
            "code": book.code,
            "name": book.name,
            "testament": book.testament,
        },
        "ranges": pericope.ranges(),
        "verse_count": pericope.verse_count(),
        "chapters": pericope.chapter_list(),
        "density": pericope.density(),
    });

    if args.gaps {
        let gaps: Vec<String> = pericope.gaps().iter().map(ToString::to_string).collect();
        output["gaps"] = serde_json::json!(gaps);
    }
    if args.runs {
        let runs: Vec<String> = pericope
            .continuous_ranges()
            .iter()
            .map(|run| run.to_string_with(reference_format))
            .collect();
        output["runs"] = serde_json::json!(runs);
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_result(pericope: &Pericope<'_>, reference_format: ReferenceFormat) {
    println!("reference\tbook\tverse_count\tchapters\tdensity");
    println!(
        "{}\t{}\t{}\t{}\t{:.4}",
        pericope.to_string_with(reference_format),
        pericope.book().code,
        pericope.verse_count(),
        join_numbers(&pericope.chapter_list()),
        pericope.density(),
    );
}

fn join_numbers(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
