//! Fully populated record demo
//!
//! Builds a representative application in code and renders it, optionally
//! with fonts passed on the command line.
//!
//! Usage:
//!   cargo run --example filled_form -- [font.ttf ...]

use anyhow::{Context, Result};
use share_form::{generate_and_save, ApplicationRecord, FontStore};
use std::path::Path;

fn sample_record() -> ApplicationRecord {
    let mut record = ApplicationRecord::default();

    record.personal_details.full_name = Some("Ram Bahadur Thapa".to_string());
    record.personal_details.gender = Some("Male".to_string());
    record.personal_details.date_of_birth = Some("1985-03-21".to_string());
    record.personal_details.marital_status = Some("विवाहित".to_string());
    record.personal_details.religion = Some("हिन्दू".to_string());

    record.share_details.kitta = Some(500);
    record.share_details.amount = Some(50_000.0);
    record.share_details.amount_in_words =
        Some("पचास हजार रुपैयाँ मात्र".to_string());

    record.identification.pan_number = Some("301234567".to_string());
    record.identification.citizenship_number = Some("12-01-70-01234".to_string());
    record.identification.citizenship_issue_district = Some("Kaski".to_string());
    record.identification.citizenship_issue_date = Some("2002-06-15".to_string());
    record.identification.demat_number = Some("1301010001234567".to_string());

    record.family_details.father_name = Some("Hari Bahadur Thapa".to_string());
    record.family_details.mother_name = Some("Kamala Thapa".to_string());
    record.family_details.grandfather_name = Some("Dhan Bahadur Thapa".to_string());
    record.family_details.spouse_name = Some("Gita Thapa".to_string());
    record.family_details.children = vec!["Anil Thapa".to_string(), "Sunita Thapa".to_string()];

    record.permanent_address.province = Some("गण्डकी".to_string());
    record.permanent_address.district = Some("Kaski".to_string());
    record.permanent_address.municipality = Some("Pokhara".to_string());
    record.permanent_address.ward_no = Some("12".to_string());
    record.permanent_address.tole = Some("Lakeside".to_string());
    record.permanent_address.mobile = Some("9846012345".to_string());
    record.temporary_address = record.permanent_address.clone();

    record.occupation.occupation_type = Some("Business".to_string());
    record.occupation.organization_name = Some("Thapa Traders Pvt. Ltd.".to_string());
    record.occupation.organization_address = Some("Pokhara-9".to_string());
    record.occupation.designation = Some("Proprietor".to_string());
    record.occupation.annual_income = Some(1_200_000.0);

    record.nominee.name = Some("Gita Thapa".to_string());
    record.nominee.relationship = Some("पत्नी".to_string());
    record.nominee.address.district = Some("Kaski".to_string());

    record.application_date = Some("2025-01-15".to_string());

    record
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut fonts = FontStore::new();
    for font_path in &args[1..] {
        let name = Path::new(font_path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("font");
        let data = std::fs::read(font_path)
            .with_context(|| format!("Failed to read font '{font_path}'"))?;
        fonts.register(name, data)?;
    }

    std::fs::create_dir_all("output")?;
    let path = generate_and_save(&sample_record(), &fonts, Path::new("output"))?;

    println!("Generated: {}", path.display());

    Ok(())
}
