// All LLM prompt constants for the Generation module.
// The prompt builder in prompt.rs composes these with the per-request
// applicant, job, and field sections.

/// Opening instruction that frames the task for the model.
pub const GENERATION_PREAMBLE: &str = "\
You are an AI assistant that helps generate professional responses for job application forms.
I will provide you with information about a job applicant and the form fields they need to fill out.
Your task is to generate appropriate responses for each field based on the applicant's resume and the job details.";

/// Per-field rules plus the reply format the parser expects.
/// The `FIELD_ID:` / `RESPONSE:` lines here are the contract with
/// `generation::parser` — change one, change both.
pub const FIELD_INSTRUCTIONS: &str = "\
Now, please generate responses for the following form fields. For each field:
1. Consider what would be an appropriate response based on the applicant's background and the field's purpose
2. If the field has specific options, ONLY choose from those options
3. Be professional, concise, and honest - don't fabricate experience that isn't in the resume
4. Format your responses as follows:

FIELD_ID: [id number]
RESPONSE: [your generated response]

Here are the fields:";

/// Label used when a form field carries no label of its own.
pub const UNLABELED_FIELD: &str = "Unlabeled Field";
