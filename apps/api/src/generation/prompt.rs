//! Prompt Builder — renders a `GenerationRequest` into the single
//! natural-language instruction string sent to the model.
//!
//! Pure function, no failure modes: absent optional attributes are simply
//! omitted, and every section is independently gated so the prompt never
//! contains an empty header (no "EDUCATION:" with no entries). That keeps
//! the model's attention on genuinely available information and discourages
//! fabrication.
//!
//! Applicant-provided text is embedded unescaped. A resume containing the
//! literal string `FIELD_ID:` could in principle desynchronize reply
//! parsing; known limitation, not mitigated.

use crate::generation::prompts::{FIELD_INSTRUCTIONS, GENERATION_PREAMBLE, UNLABELED_FIELD};
use crate::models::request::{ApplicantProfile, Education, GenerationRequest, WorkExperience};

/// Builds the full generation prompt. Idempotent: same request, same string.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let mut prompt = String::new();

    prompt.push_str(GENERATION_PREAMBLE);
    prompt.push('\n');

    if !request.job.is_empty() {
        prompt.push_str("\nJOB INFORMATION:\n");
        if let Some(title) = &request.job.job_title {
            prompt.push_str(&format!("Position: {title}\n"));
        }
        if let Some(company) = &request.job.company_name {
            prompt.push_str(&format!("Company: {company}\n"));
        }
    }

    push_applicant_section(&mut prompt, &request.resume);

    prompt.push('\n');
    prompt.push_str(FIELD_INSTRUCTIONS);
    prompt.push_str("\n\n");

    for field in &request.form_fields {
        let label = field.field_label.as_deref().unwrap_or(UNLABELED_FIELD);
        let required = if field.required { "Required" } else { "Optional" };
        let options = if field.options.is_empty() {
            String::new()
        } else {
            format!(", Options: {}", field.options.join(", "))
        };

        prompt.push_str(&format!("Field ID: {}\n", field.id));
        prompt.push_str(&format!("Label: {label}\n"));
        prompt.push_str(&format!("Type: {}\n", field.field_type));
        prompt.push_str(&format!("{required}{options}\n\n"));
    }

    prompt
}

fn push_applicant_section(prompt: &mut String, resume: &ApplicantProfile) {
    prompt.push_str("\nAPPLICANT INFORMATION:\n");
    prompt.push_str(&format!("Full Name: {}\n", resume.full_name));

    if let Some(email) = &resume.email {
        prompt.push_str(&format!("Email: {email}\n"));
    }
    if let Some(phone) = &resume.phone {
        prompt.push_str(&format!("Phone: {phone}\n"));
    }
    if let Some(summary) = &resume.summary {
        prompt.push_str(&format!("\nSummary: {summary}\n"));
    }
    if !resume.skills.is_empty() {
        prompt.push_str(&format!("\nSkills: {}\n", resume.skills.join(", ")));
    }

    if !resume.work_experience.is_empty() {
        prompt.push_str("\nWORK EXPERIENCE:\n");
        for exp in &resume.work_experience {
            prompt.push_str(&format!(
                "- {} at {} {}\n",
                exp.position,
                exp.company,
                work_date_range(exp)
            ));
            if let Some(description) = &exp.description {
                prompt.push_str(&format!("  {description}\n"));
            }
        }
    }

    if !resume.education.is_empty() {
        prompt.push_str("\nEDUCATION:\n");
        for edu in &resume.education {
            let details = match &edu.field {
                Some(field) => format!("{} in {}", edu.degree, field),
                None => edu.degree.clone(),
            };
            prompt.push_str(&format!(
                "- {} from {} {}\n",
                details,
                edu.institution,
                education_date_range(edu)
            ));
            if let Some(gpa) = &edu.gpa {
                prompt.push_str(&format!("  GPA: {gpa}\n"));
            }
        }
    }
}

/// Date range for a work entry: no start date means no range at all;
/// an open current position renders as `(start - Present)`.
fn work_date_range(exp: &WorkExperience) -> String {
    let Some(start) = &exp.start_date else {
        return String::new();
    };
    match (&exp.end_date, exp.current_position.unwrap_or(false)) {
        (Some(end), _) => format!("({start} - {end})"),
        (None, true) => format!("({start} - Present)"),
        (None, false) => format!("({start})"),
    }
}

/// Same rule for education, minus the "Present" case.
fn education_date_range(edu: &Education) -> String {
    let Some(start) = &edu.start_date else {
        return String::new();
    };
    match &edu.end_date {
        Some(end) => format!("({start} - {end})"),
        None => format!("({start})"),
    }
}
