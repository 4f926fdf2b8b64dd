//! Share application form generator
//!
//! Renders the share-purchase application PDF from a JSON record.
//!
//! Usage:
//!   cargo run --example generate_form -- <input.json> [output_dir] [font.ttf ...]
//!
//! Examples:
//!   cargo run --example generate_form -- input/application.json
//!   cargo run --example generate_form -- input/application.json output fonts/Mukta-Regular.ttf fonts/NotoSans-Regular.ttf

use anyhow::{Context, Result};
use share_form::{generate_and_save, parse_record, FontStore};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <input.json> [output_dir] [font.ttf ...]", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  cargo run --example generate_form -- input/application.json");
        eprintln!(
            "  cargo run --example generate_form -- input/application.json output fonts/Mukta-Regular.ttf"
        );
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_dir = args.get(2).map(String::as_str).unwrap_or("output");

    // Load the application record
    let input_json = std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read input '{input_path}'"))?;
    let record = parse_record(&input_json).with_context(|| "Failed to parse application record")?;

    // Register fonts in the order given; the first face that covers a
    // character wins, so list the Devanagari face first.
    let mut fonts = FontStore::new();
    let font_paths = args.get(3..).unwrap_or_default();
    for font_path in font_paths {
        let name = Path::new(font_path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("font");
        let data = std::fs::read(font_path)
            .with_context(|| format!("Failed to read font '{font_path}'"))?;
        fonts.register(name, data)?;
    }

    std::fs::create_dir_all(output_dir)?;
    let path = generate_and_save(&record, &fonts, Path::new(output_dir))?;

    println!("Generated: {}", path.display());

    Ok(())
}
