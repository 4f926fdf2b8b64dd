//! Share application record types
//!
//! The record mirrors the backend's application payload. Every leaf is
//! optional: the synthesizer must produce a complete printable form from any
//! subset of fields, including none at all, so nothing here validates.

use serde::{Deserialize, Serialize};

/// Parse a record from a JSON payload
///
/// Unknown fields are ignored and absent sections default to empty, so any
/// backend payload shape from the application form round-trips.
pub fn parse_record(json: &str) -> serde_json::Result<ApplicationRecord> {
    serde_json::from_str(json)
}

/// A share-purchase application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub personal_details: PersonalDetails,
    pub share_details: ShareDetails,
    pub identification: Identification,
    pub family_details: FamilyDetails,
    pub permanent_address: Address,
    pub temporary_address: Address,
    pub occupation: Occupation,
    pub nominee: Nominee,
    /// ISO date the application was made
    pub application_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalDetails {
    pub full_name: Option<String>,
    pub gender: Option<String>,
    /// ISO date of birth
    pub date_of_birth: Option<String>,
    pub marital_status: Option<String>,
    pub religion: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShareDetails {
    /// Number of shares applied for
    pub kitta: Option<i64>,
    pub kitta_in_words: Option<String>,
    /// Total amount in rupees
    pub amount: Option<f64>,
    pub amount_in_words: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Identification {
    pub pan_number: Option<String>,
    pub national_id_number: Option<String>,
    /// ISO issue date of the national ID
    pub national_id_issue_date: Option<String>,
    /// Broker / depository beneficiary account
    pub demat_number: Option<String>,
    pub citizenship_number: Option<String>,
    pub citizenship_issue_district: Option<String>,
    /// ISO issue date of the citizenship certificate
    pub citizenship_issue_date: Option<String>,
    pub passport_number: Option<String>,
    /// ISO issue date of the passport
    pub passport_issue_date: Option<String>,
    /// ISO expiry date of the passport
    pub passport_expiry_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FamilyDetails {
    pub spouse_name: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub grandfather_name: Option<String>,
    pub children: Vec<String>,
    pub other_members: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub province: Option<String>,
    pub district: Option<String>,
    pub municipality: Option<String>,
    pub ward_no: Option<String>,
    pub tole: Option<String>,
    pub house_number: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Occupation {
    pub occupation_type: Option<String>,
    pub organization_name: Option<String>,
    pub organization_address: Option<String>,
    pub designation: Option<String>,
    /// Estimated annual income in rupees
    pub annual_income: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Nominee {
    pub name: Option<String>,
    pub relationship: Option<String>,
    pub address: Address,
}
