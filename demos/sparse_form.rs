//! Sparse-record smoke demo
//!
//! Generates the form from an entirely empty record: every section renders
//! with blank cells and the PDF still paginates. Useful for eyeballing the
//! fixed grid without any input data or fonts.
//!
//! Usage:
//!   cargo run --example sparse_form

use anyhow::Result;
use share_form::{generate_and_save, ApplicationRecord, FontStore};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    std::fs::create_dir_all("output")?;
    let path = generate_and_save(
        &ApplicationRecord::default(),
        &FontStore::new(),
        Path::new("output"),
    )?;

    println!("Generated: {}", path.display());

    Ok(())
}
