//! Declarative field schema
//!
//! The paper form is a fixed grid of labelled rows and checkbox groups. Each
//! section is described as data (label + already-formatted value) that the
//! synthesizer iterates over, so formatting rules live in one place and the
//! row layout never depends on which values are present.

use crate::record::{Address, ApplicationRecord};
use nepali_text::{format_amount, format_date_dmy};

/// A labelled form row with its display value
///
/// The value is pre-formatted; an absent source field is the empty string,
/// which still occupies a full row.
#[derive(Debug, Clone)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    pub fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// One fixed option of a checkbox group, in both scripts
#[derive(Debug, Clone, Copy)]
pub struct ChoiceOption {
    pub label_np: &'static str,
    pub label_en: &'static str,
}

/// Which checkbox of a group is ticked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceSelection {
    /// A fixed option matched (index into the option list)
    Option(usize),
    /// No fixed option matched; the raw value is echoed beside "other"
    Other(String),
    /// No value supplied; nothing is ticked
    None,
}

/// Gender options as printed on the paper form
pub const GENDER_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        label_np: "पुरुष",
        label_en: "Male",
    },
    ChoiceOption {
        label_np: "महिला",
        label_en: "Female",
    },
];

/// Marital status options as printed on the paper form
pub const MARITAL_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        label_np: "विवाहित",
        label_en: "Married",
    },
    ChoiceOption {
        label_np: "अविवाहित",
        label_en: "Unmarried",
    },
];

/// Occupation type options as printed on the paper form
pub const OCCUPATION_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        label_np: "कृषि",
        label_en: "Agriculture",
    },
    ChoiceOption {
        label_np: "व्यापार",
        label_en: "Business",
    },
    ChoiceOption {
        label_np: "नोकरी",
        label_en: "Service",
    },
    ChoiceOption {
        label_np: "विद्यार्थी",
        label_en: "Student",
    },
];

/// Match a record value against a group's fixed options
///
/// Matching is case-insensitive for the Latin labels and exact for the
/// Devanagari labels (Devanagari has no case). An unrecognized non-empty
/// value selects "other" and carries the raw value for echoing.
pub fn match_choice(value: Option<&str>, options: &[ChoiceOption]) -> ChoiceSelection {
    let value = match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v,
        None => return ChoiceSelection::None,
    };

    let lowered = value.to_lowercase();
    for (index, option) in options.iter().enumerate() {
        if option.label_np == value || option.label_en.to_lowercase() == lowered {
            return ChoiceSelection::Option(index);
        }
    }

    ChoiceSelection::Other(value.to_string())
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn date(value: &Option<String>) -> String {
    value.as_deref().map(format_date_dmy).unwrap_or_default()
}

fn number(value: &Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

fn amount(value: &Option<f64>) -> String {
    value.map(format_amount).unwrap_or_default()
}

/// Personal detail rows (checkbox groups are rendered separately)
pub fn personal_fields(record: &ApplicationRecord) -> Vec<Field> {
    let p = &record.personal_details;
    vec![
        Field::new("नाम थर (Full Name)", text(&p.full_name)),
        Field::new("जन्म मिति (Date of Birth)", date(&p.date_of_birth)),
        Field::new("धर्म (Religion)", text(&p.religion)),
    ]
}

/// Share detail rows
pub fn share_fields(record: &ApplicationRecord) -> Vec<Field> {
    let s = &record.share_details;
    vec![
        Field::new("कित्ता संख्या (No. of Shares)", number(&s.kitta)),
        Field::new("कित्ता अक्षरमा (Shares in Words)", text(&s.kitta_in_words)),
        Field::new("रकम रु. (Amount Rs.)", amount(&s.amount)),
        Field::new("रकम अक्षरमा (Amount in Words)", text(&s.amount_in_words)),
    ]
}

/// Identification rows
pub fn identification_fields(record: &ApplicationRecord) -> Vec<Field> {
    let i = &record.identification;
    vec![
        Field::new("स्थायी लेखा नं (PAN)", text(&i.pan_number)),
        Field::new("राष्ट्रिय परिचयपत्र नं (National ID No.)", text(&i.national_id_number)),
        Field::new("परिचयपत्र जारी मिति (National ID Issue Date)", date(&i.national_id_issue_date)),
        Field::new("हितग्राही खाता नं (Demat Account No.)", text(&i.demat_number)),
        Field::new("नागरिकता नं (Citizenship No.)", text(&i.citizenship_number)),
        Field::new("नागरिकता जारी जिल्ला (Citizenship Issue District)", text(&i.citizenship_issue_district)),
        Field::new("नागरिकता जारी मिति (Citizenship Issue Date)", date(&i.citizenship_issue_date)),
        Field::new("राहदानी नं (Passport No.)", text(&i.passport_number)),
        Field::new("राहदानी जारी मिति (Passport Issue Date)", date(&i.passport_issue_date)),
        Field::new("राहदानी समाप्ति मिति (Passport Expiry Date)", date(&i.passport_expiry_date)),
    ]
}

/// Family member table rows: (relation label, name)
///
/// The row set is fixed; missing members leave blank name cells.
pub fn family_rows(record: &ApplicationRecord) -> Vec<(&'static str, String)> {
    let f = &record.family_details;
    vec![
        ("पति/पत्नी (Spouse)", text(&f.spouse_name)),
        ("बुबा (Father)", text(&f.father_name)),
        ("आमा (Mother)", text(&f.mother_name)),
        ("बाजे (Grandfather)", text(&f.grandfather_name)),
        ("छोराछोरी (Children)", f.children.join(", ")),
        ("अन्य सदस्य (Other Members)", f.other_members.join(", ")),
    ]
}

/// Address rows for the side-by-side permanent/temporary columns
pub fn address_fields(address: &Address) -> Vec<Field> {
    vec![
        Field::new("प्रदेश (Province)", text(&address.province)),
        Field::new("जिल्ला (District)", text(&address.district)),
        Field::new("नगरपालिका (Municipality)", text(&address.municipality)),
        Field::new("वडा नं (Ward No.)", text(&address.ward_no)),
        Field::new("टोल (Tole)", text(&address.tole)),
        Field::new("घर नं (House No.)", text(&address.house_number)),
        Field::new("फोन (Phone)", text(&address.phone)),
        Field::new("मोबाइल (Mobile)", text(&address.mobile)),
        Field::new("इमेल (Email)", text(&address.email)),
    ]
}

/// The applicant's occupation as one table row
pub fn occupation_row(record: &ApplicationRecord) -> Vec<String> {
    let o = &record.occupation;
    vec![
        text(&o.organization_name),
        text(&o.organization_address),
        text(&o.designation),
        amount(&o.annual_income),
    ]
}

/// Nominee rows
pub fn nominee_fields(record: &ApplicationRecord) -> Vec<Field> {
    let n = &record.nominee;
    vec![
        Field::new("नाम थर (Full Name)", text(&n.name)),
        Field::new("निवेदकसँगको नाता (Relationship)", text(&n.relationship)),
        Field::new("जिल्ला (District)", text(&n.address.district)),
        Field::new("नगरपालिका (Municipality)", text(&n.address.municipality)),
        Field::new("वडा नं (Ward No.)", text(&n.address.ward_no)),
    ]
}
