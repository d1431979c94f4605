use std::collections::HashSet;
use std::path::Path;

const BOOKS_PATH: &str = "catalogs/books.json";
const VERSIFICATION_PATH: &str = "catalogs/versification.json";

fn main() {
    let books = read_json(Path::new(BOOKS_PATH));
    let versification = read_json(Path::new(VERSIFICATION_PATH));

    let codes = validate_books(&books);
    validate_versification(&versification, &books, &codes);
    set_build_dependencies();
}

fn read_json(path: &Path) -> serde_json::Value {
    // Ensure data exists at build time
    assert!(
        path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the data file before building.\n",
        path.display()
    );

    let contents = std::fs::read_to_string(path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            path.display()
        );
    });

    let value: serde_json::Value = serde_json::from_str(&contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            path.display()
        );
    });

    assert!(
        value.is_object(),
        "\n\nCATALOG BUILD ERROR: Root of {} must be a JSON object\n",
        path.display()
    );

    value
}

fn validate_books(catalog: &serde_json::Value) -> HashSet<String> {
    let books = catalog
        .get("books")
        .and_then(serde_json::Value::as_array)
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Missing 'books' array\n\
                 The catalog must have a top-level 'books' array.\n"
            );
        });

    let mut codes = HashSet::new();
    let mut numbers = HashSet::new();

    for (index, book) in books.iter().enumerate() {
        for field in ["code", "number", "name", "testament", "chapter_count", "aliases"] {
            assert!(
                book.get(field).is_some(),
                "\n\nCATALOG BUILD ERROR: Book at index {index} missing '{field}' field\n"
            );
        }

        let code = book["code"].as_str().unwrap_or("<unknown>").to_string();
        let number = book["number"].as_u64().unwrap_or(0);

        assert!(
            (1..=999).contains(&number),
            "\n\nCATALOG BUILD ERROR: Book '{code}' has number {number} outside 1..=999\n"
        );
        assert!(
            numbers.insert(number),
            "\n\nCATALOG BUILD ERROR: Duplicate book number {number} ('{code}')\n"
        );
        assert!(
            codes.insert(code.clone()),
            "\n\nCATALOG BUILD ERROR: Duplicate book code '{code}'\n"
        );
    }

    println!("cargo:warning=Validated catalog: {} books", books.len());
    codes
}

fn validate_versification(
    versification: &serde_json::Value,
    catalog: &serde_json::Value,
    codes: &HashSet<String>,
) {
    let chapters = versification
        .get("chapters")
        .and_then(serde_json::Value::as_object)
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Missing 'chapters' object in {VERSIFICATION_PATH}\n"
            );
        });

    let mut total_verses = 0;

    for book in catalog["books"].as_array().into_iter().flatten() {
        let code = book["code"].as_str().unwrap_or("<unknown>");
        let chapter_count = book["chapter_count"].as_u64().unwrap_or(0);
        assert!(
            (1..1000).contains(&chapter_count),
            "\n\nCATALOG BUILD ERROR: Book '{code}' has {chapter_count} chapters, outside 1..1000\n"
        );

        let counts = chapters
            .get(code)
            .and_then(serde_json::Value::as_array)
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: No verse counts for book '{code}'\n");
            });

        assert!(
            counts.len() as u64 == chapter_count,
            "\n\nCATALOG BUILD ERROR: Book '{code}' declares {chapter_count} chapters \
             but has {} verse counts\n",
            counts.len()
        );

        for (index, count) in counts.iter().enumerate() {
            let count = count.as_u64().unwrap_or(0);
            // Dense verse ordinals reserve three digits per chapter and verse
            assert!(
                (1..1000).contains(&count),
                "\n\nCATALOG BUILD ERROR: Book '{code}' chapter {} has verse count {count}\n",
                index + 1
            );
            total_verses += count;
        }
    }

    for code in chapters.keys() {
        assert!(
            codes.contains(code),
            "\n\nCATALOG BUILD ERROR: Verse counts for unknown book '{code}'\n"
        );
    }

    println!("cargo:warning=Validated versification: {total_verses} total verses");
}

fn set_build_dependencies() {
    println!("cargo:rerun-if-changed={BOOKS_PATH}");
    println!("cargo:rerun-if-changed={VERSIFICATION_PATH}");
    println!("cargo:rerun-if-changed=build.rs");
}
