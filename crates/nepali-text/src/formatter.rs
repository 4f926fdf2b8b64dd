//! Nepali number, currency, and date formatting

use chrono::NaiveDate;

/// Devanagari digits (0-9)
const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Nepali number names (0-99)
///
/// Nepali numerals below one hundred are fused words and cannot be composed
/// from digit names, so the full table is spelled out.
const NUMBER_NAMES: [&str; 100] = [
    "शून्य",
    "एक",
    "दुई",
    "तीन",
    "चार",
    "पाँच",
    "छ",
    "सात",
    "आठ",
    "नौ",
    "दश",
    "एघार",
    "बाह्र",
    "तेह्र",
    "चौध",
    "पन्ध्र",
    "सोह्र",
    "सत्र",
    "अठार",
    "उन्नाइस",
    "बीस",
    "एक्काइस",
    "बाइस",
    "तेइस",
    "चौबीस",
    "पच्चीस",
    "छब्बीस",
    "सत्ताइस",
    "अट्ठाइस",
    "उनन्तीस",
    "तीस",
    "एकतीस",
    "बत्तीस",
    "तेत्तीस",
    "चौँतीस",
    "पैँतीस",
    "छत्तीस",
    "सैँतीस",
    "अठतीस",
    "उनन्चालीस",
    "चालीस",
    "एकचालीस",
    "बयालीस",
    "त्रिचालीस",
    "चवालीस",
    "पैँतालीस",
    "छयालीस",
    "सतचालीस",
    "अठचालीस",
    "उनन्चास",
    "पचास",
    "एकाउन्न",
    "बाउन्न",
    "त्रिपन्न",
    "चवन्न",
    "पचपन्न",
    "छपन्न",
    "सन्ताउन्न",
    "अन्ठाउन्न",
    "उनन्साठी",
    "साठी",
    "एकसट्ठी",
    "बयसट्ठी",
    "त्रिसट्ठी",
    "चौसट्ठी",
    "पैँसट्ठी",
    "छयसट्ठी",
    "सतसट्ठी",
    "अठसट्ठी",
    "उनन्सत्तरी",
    "सत्तरी",
    "एकहत्तर",
    "बहत्तर",
    "त्रिहत्तर",
    "चौहत्तर",
    "पचहत्तर",
    "छयहत्तर",
    "सतहत्तर",
    "अठहत्तर",
    "उनासी",
    "असी",
    "एकासी",
    "बयासी",
    "त्रियासी",
    "चौरासी",
    "पचासी",
    "छयासी",
    "सतासी",
    "अठासी",
    "उनान्नब्बे",
    "नब्बे",
    "एकान्नब्बे",
    "बयान्नब्बे",
    "त्रियान्नब्बे",
    "चौरान्नब्बे",
    "पन्चान्नब्बे",
    "छयान्नब्बे",
    "सन्तान्नब्बे",
    "अन्ठान्नब्बे",
    "उनान्सय",
];

/// Nepali text formatting utilities
pub struct NepaliFormatter;

impl NepaliFormatter {
    /// Format a number as Nepali words
    pub fn format_number(n: i64) -> String {
        format_nepali_number(n)
    }

    /// Format an amount as Nepali rupee words
    pub fn format_rupees(amount: f64) -> String {
        format_nepali_rupees(amount)
    }

    /// Render digits in Devanagari script
    pub fn devanagari_digits(text: &str) -> String {
        to_devanagari_digits(text)
    }

    /// Format an ISO date as DD/MM/YYYY
    pub fn format_date(iso: &str) -> String {
        format_date_dmy(iso)
    }

    /// Convert a Gregorian year to the Bikram Sambat year
    pub fn bikram_sambat(year: i32) -> i32 {
        bikram_sambat_year(year)
    }
}

/// Convert ASCII digits in a string to Devanagari digits
///
/// Non-digit characters pass through unchanged.
///
/// # Examples
/// ```
/// use nepali_text::to_devanagari_digits;
/// assert_eq!(to_devanagari_digits("2080"), "२०८०");
/// assert_eq!(to_devanagari_digits("Ward 12"), "Ward १२");
/// ```
pub fn to_devanagari_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => DEVANAGARI_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Format an ISO date string as `DD/MM/YYYY`
///
/// Accepts `YYYY-MM-DD`, optionally followed by a time part (`T...`), which
/// is ignored. An empty or unparseable input renders as the empty string so
/// a blank form cell is produced instead of a placeholder.
///
/// # Examples
/// ```
/// use nepali_text::format_date_dmy;
/// assert_eq!(format_date_dmy("2025-01-15"), "15/01/2025");
/// assert_eq!(format_date_dmy("2025-01-15T08:30:00Z"), "15/01/2025");
/// assert_eq!(format_date_dmy("not a date"), "");
/// ```
pub fn format_date_dmy(iso: &str) -> String {
    let date_part = iso.split('T').next().unwrap_or("").trim();
    if date_part.is_empty() {
        return String::new();
    }

    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => String::new(),
    }
}

/// Convert a Gregorian year to the Bikram Sambat year
///
/// The Nepali new year falls in mid-April, so a year-only conversion is
/// approximate; +57 covers the bulk of the Gregorian year.
///
/// # Examples
/// ```
/// use nepali_text::bikram_sambat_year;
/// assert_eq!(bikram_sambat_year(2025), 2082);
/// ```
pub fn bikram_sambat_year(year: i32) -> i32 {
    year + 57
}

/// Format an integer as Nepali words
///
/// Uses South Asian grouping: सय (hundred), हजार (thousand), लाख (hundred
/// thousand), करोड (ten million).
///
/// # Examples
/// ```
/// use nepali_text::format_nepali_number;
/// assert_eq!(format_nepali_number(0), "शून्य");
/// assert_eq!(format_nepali_number(21), "एक्काइस");
/// assert_eq!(format_nepali_number(100), "एक सय");
/// assert_eq!(format_nepali_number(1500), "एक हजार पाँच सय");
/// ```
pub fn format_nepali_number(n: i64) -> String {
    if n == 0 {
        return NUMBER_NAMES[0].to_string();
    }

    let mut n = n.abs();
    let mut parts: Vec<String> = Vec::new();

    let crore = n / 10_000_000;
    if crore > 0 {
        parts.push(format!("{} करोड", format_nepali_number(crore)));
        n %= 10_000_000;
    }

    let lakh = n / 100_000;
    if lakh > 0 {
        parts.push(format!("{} लाख", NUMBER_NAMES[lakh as usize]));
        n %= 100_000;
    }

    let thousand = n / 1_000;
    if thousand > 0 {
        parts.push(format!("{} हजार", NUMBER_NAMES[thousand as usize]));
        n %= 1_000;
    }

    let hundred = n / 100;
    if hundred > 0 {
        parts.push(format!("{} सय", NUMBER_NAMES[hundred as usize]));
        n %= 100;
    }

    if n > 0 {
        parts.push(NUMBER_NAMES[n as usize].to_string());
    }

    parts.join(" ")
}

/// Format an amount as Nepali rupee words
///
/// # Examples
/// ```
/// use nepali_text::format_nepali_rupees;
/// assert_eq!(format_nepali_rupees(0.0), "-");
/// assert_eq!(format_nepali_rupees(100.0), "एक सय रुपैयाँ मात्र");
/// assert_eq!(format_nepali_rupees(100.50), "एक सय रुपैयाँ पचास पैसा मात्र");
/// ```
pub fn format_nepali_rupees(amount: f64) -> String {
    let paisa = ((amount * 100.0).round() as i64) % 100;
    let rupees = amount.floor() as i64;

    match (rupees, paisa) {
        (0, 0) => "-".to_string(),
        (r, 0) if r > 0 => format!("{} रुपैयाँ मात्र", format_nepali_number(r)),
        (0, p) if p > 0 => format!("{} पैसा मात्र", format_nepali_number(p)),
        (r, p) => format!(
            "{} रुपैयाँ {} पैसा मात्र",
            format_nepali_number(r),
            format_nepali_number(p)
        ),
    }
}

/// Format a numeric amount with South Asian digit grouping
///
/// Two decimal places, groups of two beyond the first three integer digits
/// (e.g. `1,23,456.78`).
///
/// # Examples
/// ```
/// use nepali_text::format_amount;
/// assert_eq!(format_amount(123456.78), "1,23,456.78");
/// assert_eq!(format_amount(999.0), "999.00");
/// ```
pub fn format_amount(n: f64) -> String {
    if !n.is_finite() {
        return String::new();
    }

    let rounded = (n.abs() * 100.0).round() / 100.0;
    let int_part = rounded.floor() as i64;
    let frac_part = ((rounded - rounded.floor()) * 100.0).round() as i64;

    let int_str = group_south_asian(int_part);
    let sign = if n < 0.0 && (int_part > 0 || frac_part > 0) {
        "-"
    } else {
        ""
    };

    format!("{sign}{int_str}.{frac_part:02}")
}

/// Group an integer's digits South Asian style (3 then 2s)
fn group_south_asian(n: i64) -> String {
    let digits = n.to_string();
    let mut result = String::new();

    for (i, c) in digits.chars().rev().enumerate() {
        if i == 3 || (i > 3 && (i - 3) % 2 == 0) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_devanagari_digits() {
        assert_eq!(to_devanagari_digits("0123456789"), "०१२३४५६७८९");
        assert_eq!(to_devanagari_digits(""), "");
        assert_eq!(to_devanagari_digits("वडा नं. 5"), "वडा नं. ५");
    }

    #[test]
    fn test_format_date_dmy_valid() {
        assert_eq!(format_date_dmy("2025-01-15"), "15/01/2025");
        assert_eq!(format_date_dmy("1999-12-31"), "31/12/1999");
        assert_eq!(format_date_dmy("2024-02-29"), "29/02/2024");
    }

    #[test]
    fn test_format_date_dmy_with_time_part() {
        assert_eq!(format_date_dmy("2025-01-15T10:00:00Z"), "15/01/2025");
        assert_eq!(format_date_dmy("2025-01-15T00:00:00.000Z"), "15/01/2025");
    }

    #[test]
    fn test_format_date_dmy_absent_or_invalid() {
        assert_eq!(format_date_dmy(""), "");
        assert_eq!(format_date_dmy("   "), "");
        assert_eq!(format_date_dmy("garbage"), "");
        assert_eq!(format_date_dmy("2025-13-01"), "");
        assert_eq!(format_date_dmy("2025-02-30"), "");
    }

    #[test]
    fn test_bikram_sambat_year() {
        assert_eq!(bikram_sambat_year(2025), 2082);
        assert_eq!(bikram_sambat_year(1999), 2056);
    }

    #[test]
    fn test_format_nepali_number_basic() {
        assert_eq!(format_nepali_number(0), "शून्य");
        assert_eq!(format_nepali_number(1), "एक");
        assert_eq!(format_nepali_number(9), "नौ");
        assert_eq!(format_nepali_number(10), "दश");
        assert_eq!(format_nepali_number(19), "उन्नाइस");
        assert_eq!(format_nepali_number(55), "पचपन्न");
        assert_eq!(format_nepali_number(99), "उनान्सय");
    }

    #[test]
    fn test_format_nepali_number_hundreds() {
        assert_eq!(format_nepali_number(100), "एक सय");
        assert_eq!(format_nepali_number(101), "एक सय एक");
        assert_eq!(format_nepali_number(550), "पाँच सय पचास");
        assert_eq!(format_nepali_number(999), "नौ सय उनान्सय");
    }

    #[test]
    fn test_format_nepali_number_large() {
        assert_eq!(format_nepali_number(1_000), "एक हजार");
        assert_eq!(format_nepali_number(1_500), "एक हजार पाँच सय");
        assert_eq!(format_nepali_number(100_000), "एक लाख");
        assert_eq!(
            format_nepali_number(123_456),
            "एक लाख तेइस हजार चार सय छपन्न"
        );
        assert_eq!(format_nepali_number(10_000_000), "एक करोड");
        assert_eq!(
            format_nepali_number(12_30_00_000),
            "बाह्र करोड तीस लाख"
        );
    }

    #[test]
    fn test_format_nepali_number_negative() {
        // Words carry no sign; the magnitude is spelled out.
        assert_eq!(format_nepali_number(-21), "एक्काइस");
    }

    #[test]
    fn test_format_nepali_rupees() {
        assert_eq!(format_nepali_rupees(0.0), "-");
        assert_eq!(format_nepali_rupees(1.0), "एक रुपैयाँ मात्र");
        assert_eq!(format_nepali_rupees(0.25), "पच्चीस पैसा मात्र");
        assert_eq!(
            format_nepali_rupees(100.50),
            "एक सय रुपैयाँ पचास पैसा मात्र"
        );
    }

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.0), "999.00");
        assert_eq!(format_amount(1000.0), "1,000.00");
        assert_eq!(format_amount(123456.78), "1,23,456.78");
        assert_eq!(format_amount(10000000.0), "1,00,00,000.00");
        assert_eq!(format_amount(-100.5), "-100.50");
    }

    #[test]
    fn test_format_amount_non_finite() {
        assert_eq!(format_amount(f64::NAN), "");
        assert_eq!(format_amount(f64::INFINITY), "");
    }

    #[test]
    fn test_formatter_facade() {
        assert_eq!(NepaliFormatter::format_number(42), "बयालीस");
        assert_eq!(NepaliFormatter::devanagari_digits("7"), "७");
        assert_eq!(NepaliFormatter::format_date("2025-01-15"), "15/01/2025");
        assert_eq!(NepaliFormatter::bikram_sambat(2025), 2082);
    }
}
