use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::canon::Canon;
use crate::cli::OutputFormat;
use crate::core::book::Book;
use crate::core::types::Testament;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all books in canonical order
    List {
        /// Filter by testament ("old" or "new")
        #[arg(long, value_parser = parse_testament)]
        testament: Option<Testament>,
    },

    /// Show details of a specific book
    Show {
        /// Book code, name or alias (e.g., "GEN", "1 Cor", "Psalm")
        #[arg(required = true)]
        book: String,
    },

    /// Export the book catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,
    },
}

fn parse_testament(s: &str) -> Result<Testament, String> {
    Testament::parse(s).ok_or_else(|| format!("unknown testament '{s}' (expected old or new)"))
}

pub fn run(
    args: CatalogArgs,
    canon: &Canon,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { testament } => run_list(canon, testament, format, verbose),
        CatalogCommands::Show { book } => run_show(canon, &book, format),
        CatalogCommands::Export { output } => run_export(canon, output),
    }
}

fn run_list(
    canon: &Canon,
    testament: Option<Testament>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = canon.catalog();

    if verbose {
        eprintln!(
            "Loaded catalog with {} books ({} verse tables, {} system)",
            catalog.len(),
            canon.versification().len(),
            canon.versification().system()
        );
    }

    let books: Vec<&Book> = match testament {
        Some(t) => catalog.testament_books(t),
        None => catalog.all_books().iter().collect(),
    };

    match format {
        OutputFormat::Text => {
            let name_width = books.iter().map(|b| b.name.len()).max().unwrap_or(4).max(4);
            let total_width = 4 + 1 + 4 + 1 + name_width + 1 + 9 + 1 + 8 + 1 + 7;

            println!("Book Catalog ({} books)\n", books.len());
            println!(
                "{:<4} {:>4} {:<name_w$} {:<9} {:>8} {:>7}",
                "Code",
                "No.",
                "Name",
                "Testament",
                "Chapters",
                "Verses",
                name_w = name_width
            );
            println!("{}", "-".repeat(total_width));

            for book in &books {
                println!(
                    "{:<4} {:>4} {:<name_w$} {:<9} {:>8} {:>7}",
                    book.code,
                    book.number,
                    book.name,
                    book.testament.to_string(),
                    book.chapter_count,
                    canon.total_verses(book),
                    name_w = name_width
                );
                if verbose {
                    println!("  └─ Aliases: {}", book.aliases.join(", "));
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = books
                .iter()
                .map(|book| {
                    serde_json::json!({
                        "code": book.code,
                        "number": book.number,
                        "name": book.name,
                        "testament": book.testament,
                        "chapter_count": book.chapter_count,
                        "verse_count": canon.total_verses(book),
                        "aliases": book.aliases,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("code\tnumber\tname\ttestament\tchapter_count\tverse_count");
            for book in &books {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    book.code,
                    book.number,
                    book.name,
                    book.testament,
                    book.chapter_count,
                    canon.total_verses(book)
                );
            }
        }
    }

    Ok(())
}

fn run_show(canon: &Canon, name: &str, format: OutputFormat) -> anyhow::Result<()> {
    let book = canon
        .catalog()
        .find_by_name(name)
        .ok_or_else(|| anyhow::anyhow!("Book '{}' not found in catalog", name))?;
    let chapters = canon.versification().chapters(&book.code).unwrap_or(&[]);

    match format {
        OutputFormat::Text => {
            println!("Book: {}\n", book.name);
            println!("Code:      {}", book.code);
            println!("Number:    {}", book.number);
            println!("Testament: {}", book.testament);
            println!("Chapters:  {}", book.chapter_count);
            println!("Verses:    {}", canon.total_verses(book));

            if !book.aliases.is_empty() {
                println!("\nAliases: {}", book.aliases.join(", "));
            }

            println!("\nChapters:");
            println!("{:>7} {:>7}", "Chapter", "Verses");
            println!("{}", "-".repeat(15));
            for (idx, count) in chapters.iter().enumerate() {
                println!("{:>7} {:>7}", idx + 1, count);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "book": book,
                "verse_count": canon.total_verses(book),
                "verses_per_chapter": chapters,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("chapter\tverse_count");
            for (idx, count) in chapters.iter().enumerate() {
                println!("{}\t{}", idx + 1, count);
            }
        }
    }

    Ok(())
}

fn run_export(canon: &Canon, output: PathBuf) -> anyhow::Result<()> {
    let catalog = canon.catalog();
    let json = catalog.to_json()?;
    std::fs::write(&output, json)?;

    println!("Exported {} books to {}", catalog.len(), output.display());

    Ok(())
}
