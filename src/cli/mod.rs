//! Command-line interface for pericope.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **parse**: Parse a reference and optionally transform it
//! - **scan**: Extract references from prose
//! - **compare**: Relate two references and combine them with set operations
//! - **suggest**: Autocomplete a partially typed reference
//! - **catalog**: List, show, or export the book catalog
//!
//! ## Usage
//!
//! ```text
//! # Canonical form, verse count and chapters
//! pericope parse "1 Cor 13:4-7,13"
//!
//! # Normalize and list the verses missing between first and last
//! pericope parse "GEN 1:1-3,4-6,10" --normalize --gaps
//!
//! # Pipe prose through the scanner
//! cat sermon.txt | pericope scan -
//!
//! # JSON output for scripting
//! pericope compare "GEN 1:1-10" "GEN 1:5-15" --format json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod compare;
pub mod parse;
pub mod scan;
pub mod suggest;

#[derive(Parser)]
#[command(name = "pericope")]
#[command(version)]
#[command(about = "Parse, normalize and combine scripture references")]
#[command(
    long_about = "pericope resolves references such as \"1 Cor 13:4-7,13\" against a 66-book catalog and an English verse-count table.\n\nIt can:\n- Parse and validate references, including misspelled book names\n- Extract references from free text\n- Combine passages with set operations (union, intersection, subtraction, complement)\n- Suggest completions for partially typed references"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to a custom book catalog (books.json)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Path to a custom verse-count table (versification.json)
    #[arg(long, global = true)]
    pub versification: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a single reference
    Parse(parse::ParseArgs),

    /// Extract references from text
    Scan(scan::ScanArgs),

    /// Compare two references
    Compare(compare::CompareArgs),

    /// Suggest completions for a partial reference
    Suggest(suggest::SuggestArgs),

    /// Inspect the book catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Parse a `N,M` pair of counts such as `2,3`
pub(crate) fn parse_count_pair(s: &str) -> Result<(usize, usize), String> {
    let (first, second) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two counts separated by a comma, got '{s}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|_| format!("'{}' is not a count", part.trim()))
    };
    Ok((parse(first)?, parse(second)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_pair() {
        assert_eq!(parse_count_pair("2,3"), Ok((2, 3)));
        assert_eq!(parse_count_pair(" 0 , 10 "), Ok((0, 10)));
        assert!(parse_count_pair("2").is_err());
        assert!(parse_count_pair("a,3").is_err());
        assert!(parse_count_pair("-1,3").is_err());
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pericope",
            "parse",
            "GEN 1:1",
            "--format",
            "json",
            "--verbose",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Parse(_)));
    }
}
