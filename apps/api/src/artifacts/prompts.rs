// LLM prompt constants for career artifact generation. Every artifact is
// one templated call; callers clip interpolated text via
// llm_client::prompts::clip.

/// Cover letter. Replace `{company_name}`, `{domain}`, `{resume_text}`
/// (1000 chars), `{job_requirement}` (800 chars). Plain text response.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional, compelling cover letter (250-300 words) for this candidate applying to {company_name} in the {domain} field.

Resume Summary: {resume_text}
Job Requirements: {job_requirement}

The cover letter should:
1. Open with enthusiasm about the specific role
2. Highlight 2-3 key relevant qualifications from the resume
3. Demonstrate understanding of the company/role needs
4. Close with a strong call to action

Use a professional but warm tone. Do not use placeholder brackets."#;

/// Subject line suggestions. Replace `{email_type}`, `{company_name}`,
/// `{recipient}`. Expects a JSON array of strings.
pub const SUBJECT_LINES_PROMPT_TEMPLATE: &str = r#"Generate 4 compelling email subject lines for a {email_type} email to {company_name}.
Recipient: {recipient}

Requirements:
- Keep each under 60 characters
- Make them specific and actionable
- Avoid generic phrases like "Seeking Opportunities"
- Include company name or role-specific details

Return ONLY a JSON array: ["Subject 1", "Subject 2", "Subject 3", "Subject 4"]"#;

/// Direct application email. Replace `{recipient}`, `{company_name}`,
/// `{resume_text}` (800 chars), `{context}`.
pub const COLD_EMAIL_DIRECT_PROMPT_TEMPLATE: &str = r#"Write a concise cold email (100-120 words) for a direct job application.

Recipient: {recipient}
Company: {company_name}
Resume Summary: {resume_text}
{context}

Structure:
- Compelling subject line that mentions role or key skill
- Brief intro (1-2 sentences) - why this company/role
- Highlight 2-3 most relevant qualifications with specifics
- Clear call-to-action (request interview/discussion)
- Professional closing with contact info

Return as valid JSON:
{
    "subject_line": "Primary subject line",
    "email_body": "Full email with greeting, body, closing, signature",
    "alternative_subjects": ["Alt 1", "Alt 2", "Alt 3"]
}

Tone: Professional, confident, specific. Avoid generic phrases."#;

/// Networking email. Replace `{recipient}`, `{company_name}`,
/// `{resume_text}` (600 chars), `{context}`.
pub const COLD_EMAIL_NETWORKING_PROMPT_TEMPLATE: &str = r#"Write a warm networking cold email (80-100 words).

Recipient: {recipient}
Company: {company_name}
Background: {resume_text}
{context}

Structure:
- Subject line focused on learning/advice (NOT job request)
- Personalized opening showing genuine interest in their work
- Brief relevant background mention (1-2 sentences max)
- Specific ask: 15-minute coffee chat or informational interview
- Make it easy to say yes
- Gracious closing

Return as valid JSON:
{
    "subject_line": "Primary subject line",
    "email_body": "Full email text",
    "alternative_subjects": ["Alt 1", "Alt 2", "Alt 3"]
}

Tone: Humble, curious, respectful. Show research about them/company."#;

/// Referral request email. Replace `{recipient}`, `{company_name}`,
/// `{resume_text}` (700 chars), `{context}`.
pub const COLD_EMAIL_REFERRAL_PROMPT_TEMPLATE: &str = r#"Write a polite referral request email (90-110 words).

Recipient: {recipient}
Company: {company_name}
Background: {resume_text}
{context}

Structure:
- Subject mentioning mutual connection or shared background
- Opening: How you found them (LinkedIn, mutual connection, etc.)
- Brief relevant background (2-3 sentences)
- Specific request: referral or introduction to hiring team
- Make it LOW effort for them (offer to send resume, etc.)
- Appreciative closing

Return as valid JSON:
{
    "subject_line": "Primary subject line",
    "email_body": "Full email text",
    "alternative_subjects": ["Alt 1", "Alt 2", "Alt 3"]
}

Tone: Polite, appreciative, clear. Make the ask very specific."#;

/// Follow-up email. Replace `{recipient}`, `{company_name}`,
/// `{resume_text}` (500 chars), `{context}`.
pub const COLD_EMAIL_FOLLOWUP_PROMPT_TEMPLATE: &str = r#"Write a professional follow-up email (60-80 words).

Recipient: {recipient}
Company: {company_name}
Previous Context: {context}
Background: {resume_text}

Structure:
- Subject referencing previous interaction
- Brief reminder of previous contact (when and what)
- Restate interest in role/company
- Provide update or new relevant info (if any)
- Polite ask for status update or next steps
- Professional closing

Return as valid JSON:
{
    "subject_line": "Primary subject line",
    "email_body": "Full email text",
    "alternative_subjects": ["Alt 1", "Alt 2", "Alt 3"]
}

Tone: Polite, patient, professionally persistent. Not desperate."#;

/// Interview prep pack. Replace `{domain}`, `{resume_text}` (1000 chars),
/// `{job_requirement}` (600 chars). Expects JSON.
pub const INTERVIEW_PREP_PROMPT_TEMPLATE: &str = r#"Based on this resume and job requirements in {domain}, generate:

Resume: {resume_text}
Job Requirements: {job_requirement}

Return as valid JSON:
{
    "technical_questions": ["question1", "question2", "question3"],
    "behavioral_questions": ["question1", "question2"],
    "key_talking_points": ["point1", "point2", "point3"],
    "questions_to_ask": ["question1", "question2"]
}"#;

/// Salary insights. Replace `{domain}`, `{years_experience}`,
/// `{location}`. Expects JSON.
pub const SALARY_INSIGHTS_PROMPT_TEMPLATE: &str = r#"Provide salary insights for {domain} with {years_experience} experience in {location}.

Return as valid JSON:
{
    "estimated_range": "salary range",
    "factors": ["factor1", "factor2", "factor3"],
    "negotiation_tips": ["tip1", "tip2"]
}

Be realistic and mention this is approximate based on market data."#;

/// Structured career roadmap. Replace `{current_domain}`,
/// `{target_role}`, `{experience_line}`, `{resume_text}` (1000 chars).
/// Expects JSON matching `CareerRoadmap`.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Generate a detailed career transition roadmap from {current_domain} to {target_role}.
{experience_line}

Resume context: {resume_text}

Return ONLY valid JSON with this EXACT structure (no markdown, no extra text):
{
  "current_position": "Their current role based on resume",
  "target_position": "{target_role}",
  "total_duration": "X-Y months/years estimate",
  "difficulty_level": "Beginner/Intermediate/Advanced",
  "phases": [
    {
      "phase": 1,
      "title": "Foundation Building",
      "duration": "1-2 months",
      "description": "Brief description of this phase",
      "skills": ["Skill 1", "Skill 2", "Skill 3"],
      "resources": ["Resource 1", "Resource 2"],
      "milestones": ["Milestone 1", "Milestone 2"]
    }
  ],
  "certifications": ["Cert 1", "Cert 2", "Cert 3"],
  "networking_tips": ["Tip 1", "Tip 2", "Tip 3"],
  "portfolio_projects": ["Project 1", "Project 2", "Project 3"]
}

Rules:
- Include 4-6 phases
- Each phase must have a valid duration (e.g., "2-4 months")
- Be specific and actionable
- Focus on practical, achievable steps
- Return ONLY the JSON object, nothing else"#;
