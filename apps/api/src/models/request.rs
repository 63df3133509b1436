//! Wire types for the response-generation request.
//!
//! The browser extension sends camelCase JSON; every struct here carries
//! `rename_all = "camelCase"`. All records are immutable per-request values —
//! nothing is shared across requests or persisted.

use serde::{Deserialize, Serialize};

/// One work-experience entry from the applicant's resume.
/// Every attribute except position/company is optional and is simply
/// omitted from the generated prompt when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub position: String,
    pub company: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current_position: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One education entry from the applicant's resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
}

/// The applicant's resume. `full_name` is the only required attribute;
/// everything else degrades silently when missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantProfile {
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
}

/// The job posting the applicant is applying to.
/// If both attributes are absent, no job section is emitted in the prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobContext {
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

impl JobContext {
    pub fn is_empty(&self) -> bool {
        self.job_title.is_none() && self.company_name.is_none()
    }
}

/// One form field scraped from the application page.
///
/// `id` uniqueness within a request is the caller's responsibility — it is
/// not enforced here, but the parser only trusts ids that occur in this list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: i64,
    #[serde(default)]
    pub field_label: Option<String>,
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
}

/// Request body for POST /api/v1/responses/generate.
/// One prompt per request, many fields per prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub resume: ApplicantProfile,
    #[serde(flatten)]
    pub job: JobContext,
    #[serde(default)]
    pub form_fields: Vec<FormField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_from_camel_case() {
        let json = serde_json::json!({
            "resume": {
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "skills": ["Rust", "Mathematics"],
                "workExperience": [{
                    "position": "Engineer",
                    "company": "Analytical Engines Ltd",
                    "startDate": "2020",
                    "currentPosition": true
                }],
                "education": [{
                    "institution": "University of London",
                    "degree": "BSc",
                    "field": "Mathematics"
                }]
            },
            "jobTitle": "Senior Engineer",
            "companyName": "Babbage & Co",
            "formFields": [{
                "id": 1,
                "fieldLabel": "Why us?",
                "fieldType": "textarea",
                "required": true
            }]
        });

        let request: GenerationRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.resume.full_name, "Ada Lovelace");
        assert_eq!(request.job.job_title.as_deref(), Some("Senior Engineer"));
        assert_eq!(request.form_fields.len(), 1);
        assert_eq!(request.form_fields[0].id, 1);
        assert!(request.form_fields[0].options.is_empty());
        assert_eq!(
            request.resume.work_experience[0].current_position,
            Some(true)
        );
    }

    #[test]
    fn test_minimal_request_only_needs_full_name_and_field_type() {
        let json = serde_json::json!({
            "resume": { "fullName": "Ada Lovelace" },
            "formFields": [{ "id": 7, "fieldType": "text" }]
        });

        let request: GenerationRequest = serde_json::from_value(json).unwrap();
        assert!(request.job.is_empty());
        assert!(request.resume.skills.is_empty());
        assert!(!request.form_fields[0].required);
        assert!(request.form_fields[0].field_label.is_none());
    }

    #[test]
    fn test_job_context_is_empty_iff_both_attributes_absent() {
        assert!(JobContext::default().is_empty());
        assert!(!JobContext {
            job_title: Some("Engineer".to_string()),
            company_name: None,
        }
        .is_empty());
        assert!(!JobContext {
            job_title: None,
            company_name: Some("Babbage & Co".to_string()),
        }
        .is_empty());
    }
}
