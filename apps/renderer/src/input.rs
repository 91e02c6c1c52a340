//! Caller-side decoding of résumé input into a `CvRecord`.
//!
//! Two shapes are accepted: the nested record JSON, and the flat web-form
//! shape where each list arrives as a JSON-encoded string. Malformed data is
//! rejected here with an `InputError` and never reaches the renderer.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::InputError;
use crate::models::{CvRecord, Education, Experience, PersonalInfo, Skill};

/// Flat form submission: personal fields as plain strings, lists as JSON text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub summary: String,
    /// JSON array of education entries; empty means none.
    pub education: String,
    pub experience: String,
    pub skills: String,
    pub languages: String,
    pub language: String,
}

/// Decodes one JSON-encoded list field. An empty field is an empty list.
fn decode_list<T: DeserializeOwned>(
    raw: &str,
    wrap: fn(serde_json::Error) -> InputError,
) -> Result<Vec<T>, InputError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(wrap)
}

impl CvForm {
    /// Builds the record, stamping it with `created_at`.
    pub fn into_record(self, created_at: DateTime<Utc>) -> Result<CvRecord, InputError> {
        let education: Vec<Education> = decode_list(&self.education, InputError::Education)?;
        let experience: Vec<Experience> = decode_list(&self.experience, InputError::Experience)?;
        let skills: Vec<Skill> = decode_list(&self.skills, InputError::Skills)?;
        let languages: Vec<String> = decode_list(&self.languages, InputError::Languages)?;

        Ok(CvRecord {
            personal_info: PersonalInfo {
                full_name: self.full_name,
                email: self.email,
                phone: self.phone,
                location: self.location,
                linked_in: self.linkedin,
                git_hub: self.github,
                website: self.website,
                summary: self.summary,
            },
            education,
            experience,
            skills,
            languages,
            language: self.language,
            created_at,
        })
    }
}

/// Parses a nested record document.
pub fn parse_record(json: &str) -> Result<CvRecord, InputError> {
    serde_json::from_str(json).map_err(InputError::Record)
}

/// Parses a form document and converts it to a record.
pub fn parse_form(json: &str, created_at: DateTime<Utc>) -> Result<CvRecord, InputError> {
    let form: CvForm = serde_json::from_str(json).map_err(InputError::Record)?;
    form.into_record(created_at)
}
