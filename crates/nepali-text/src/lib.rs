//! Nepali Text - Nepali language text formatting
//!
//! This crate provides:
//! - Devanagari digit conversion (1234 -> १२३४)
//! - Form date formatting (DD/MM/YYYY, blank when absent)
//! - Bikram Sambat year conversion
//! - Nepali number-to-words (एक, दुई, तीन...)
//! - Nepali currency-in-words (रुपैयाँ, पैसा)
//! - South Asian digit grouping (1,23,456.78)
//!
//! # Example
//!
//! ```
//! use nepali_text::{format_date_dmy, format_nepali_number, to_devanagari_digits};
//!
//! assert_eq!(format_date_dmy("2025-01-15"), "15/01/2025");
//! assert_eq!(format_nepali_number(21), "एक्काइस");
//! assert_eq!(to_devanagari_digits("2080"), "२०८०");
//! ```

mod formatter;

pub use formatter::NepaliFormatter;

// Re-export commonly used formatting functions
pub use formatter::{
    bikram_sambat_year, format_amount, format_date_dmy, format_nepali_number,
    format_nepali_rupees, to_devanagari_digits,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_nepali_number() {
        assert_eq!(format_nepali_number(0), "शून्य");
        assert_eq!(format_nepali_number(1), "एक");
        assert_eq!(format_nepali_number(10), "दश");
        assert_eq!(format_nepali_number(11), "एघार");
        assert_eq!(format_nepali_number(100), "एक सय");
    }

    #[test]
    fn test_format_date_dmy() {
        assert_eq!(format_date_dmy("2025-01-15"), "15/01/2025");
        assert_eq!(format_date_dmy(""), "");
    }
}
