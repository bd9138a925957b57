// Prompt constants for upload-time enrichment of the resume session.

/// Domain detection. Replace `{resume_text}` (clip to 1500 chars).
/// Expects a bare domain name as plain text.
pub const DOMAIN_DETECT_PROMPT_TEMPLATE: &str = r#"Identify the specific career domain from this resume.
Examples: 'Software Engineering', 'Data Science', 'Marketing', 'Finance', 'Healthcare', 'Legal'

Resume: {resume_text}

Respond with ONLY the domain name."#;

/// Metadata extraction. Replace `{resume_text}` (clip to 1000 chars).
/// Expects JSON matching `ResumeMetadata`.
pub const METADATA_PROMPT_TEMPLATE: &str = r#"Extract the following information from this resume. Return as valid JSON only:
{
    "name": "candidate name or 'Not Found'",
    "email": "email or 'Not Found'",
    "phone": "phone or 'Not Found'",
    "location": "city, country or 'Not Found'",
    "years_experience": "estimated years or 'Not Found'",
    "education_level": "highest degree or 'Not Found'",
    "current_role": "current/most recent job title or 'Not Found'"
}

Resume: {resume_text}"#;
