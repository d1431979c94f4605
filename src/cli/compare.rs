use clap::Args;

use crate::catalog::canon::Canon;
use crate::cli::OutputFormat;
use crate::core::pericope::Pericope;
use crate::parsing::TextProcessor;

#[derive(Args)]
pub struct CompareArgs {
    /// First reference
    #[arg(required = true)]
    pub reference_a: String,

    /// Second reference
    #[arg(required = true)]
    pub reference_b: String,
}

/// Relations and set results for a pair of pericopes
struct Comparison<'c> {
    same_book: bool,
    intersects: bool,
    a_contains_b: bool,
    b_contains_a: bool,
    adjacent: bool,
    a_precedes_b: bool,
    a_follows_b: bool,
    union: Pericope<'c>,
    intersection: Pericope<'c>,
    a_minus_b: Pericope<'c>,
    b_minus_a: Pericope<'c>,
}

impl<'c> Comparison<'c> {
    fn new(a: &Pericope<'c>, b: &Pericope<'c>) -> Self {
        Self {
            same_book: a.book() == b.book(),
            intersects: a.intersects(b),
            a_contains_b: a.contains(b),
            b_contains_a: b.contains(a),
            adjacent: a.is_adjacent_to(b),
            a_precedes_b: a.precedes(b),
            a_follows_b: a.follows(b),
            union: a.union(b),
            intersection: a.intersection(b),
            a_minus_b: a.subtract(b),
            b_minus_a: b.subtract(a),
        }
    }
}

pub fn run(
    args: CompareArgs,
    canon: &Canon,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let processor = TextProcessor::new(canon);
    let a = processor.parse(&args.reference_a)?;
    let b = processor.parse(&args.reference_b)?;

    if verbose {
        eprintln!("A: {} ({} verses)", a, a.verse_count());
        eprintln!("B: {} ({} verses)", b, b.verse_count());
    }
    if a.book() != b.book() {
        tracing::warn!(
            a = %a.book().code,
            b = %b.book().code,
            "References name different books; set results fall back to defaults"
        );
    }

    let comparison = Comparison::new(&a, &b);

    match format {
        OutputFormat::Text => print_text_comparison(&a, &b, &comparison),
        OutputFormat::Json => print_json_comparison(&a, &b, &comparison)?,
        OutputFormat::Tsv => print_tsv_comparison(&comparison),
    }

    Ok(())
}

fn display_or_empty(pericope: &Pericope<'_>) -> String {
    if pericope.is_empty() {
        "(empty)".to_string()
    } else {
        pericope.to_string()
    }
}

fn print_text_comparison(a: &Pericope<'_>, b: &Pericope<'_>, c: &Comparison<'_>) {
    println!("Comparison Results");
    println!("{}", "=".repeat(60));

    println!("\nA: {} ({} verses)", a, a.verse_count());
    println!("B: {} ({} verses)", b, b.verse_count());

    println!("\nRelations:");
    println!("  Same book:     {}", c.same_book);
    println!("  Intersects:    {}", c.intersects);
    println!("  A contains B:  {}", c.a_contains_b);
    println!("  B contains A:  {}", c.b_contains_a);
    println!("  Adjacent:      {}", c.adjacent);
    println!("  A precedes B:  {}", c.a_precedes_b);
    println!("  A follows B:   {}", c.a_follows_b);

    println!("\nSet Operations:");
    println!("  Union:         {}", display_or_empty(&c.union));
    println!("  Intersection:  {}", display_or_empty(&c.intersection));
    println!("  A - B:         {}", display_or_empty(&c.a_minus_b));
    println!("  B - A:         {}", display_or_empty(&c.b_minus_a));
}

fn print_json_comparison(
    a: &Pericope<'_>,
    b: &Pericope<'_>,
    c: &Comparison<'_>,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "a": a,
        "b": b,
        "relations": {
            "same_book": c.same_book,
            "intersects": c.intersects,
            "a_contains_b": c.a_contains_b,
            "b_contains_a": c.b_contains_a,
            "adjacent": c.adjacent,
            "a_precedes_b": c.a_precedes_b,
            "a_follows_b": c.a_follows_b,
        },
        "union": c.union,
        "intersection": c.intersection,
        "a_minus_b": c.a_minus_b,
        "b_minus_a": c.b_minus_a,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_comparison(c: &Comparison<'_>) {
    println!("intersects\ta_contains_b\tb_contains_a\tadjacent\ta_precedes_b\ta_follows_b\tunion\tintersection\ta_minus_b\tb_minus_a");
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        c.intersects,
        c.a_contains_b,
        c.b_contains_a,
        c.adjacent,
        c.a_precedes_b,
        c.a_follows_b,
        c.union,
        c.intersection,
        c.a_minus_b,
        c.b_minus_a,
    );
}
