// LLM prompt constants for the analysis module. All templates use
// `{placeholder}` replacement; callers clip interpolated text to the
// stated budgets via llm_client::prompts::clip.

/// Job-side enrichment. Replace `{known_skills}` and `{job_description}`
/// (clip job text to 1200 chars). Expects a JSON array of strings.
pub const JOB_ENRICHMENT_PROMPT_TEMPLATE: &str = r#"From this job description, identify ONLY 5-8 critical requirements that are NOT already in this list: {known_skills}

Job Description: {job_description}

Focus on:
- Specific technical skills or tools
- Required certifications
- Years of experience requirements
- Education requirements
- Domain-specific knowledge

Return ONLY a JSON array of strings: ["skill1", "skill2", ...]
Keep each skill concise (under 6 words)."#;

/// Resume-side enrichment. Replace `{domain}`, `{known_skills}` and
/// `{resume_text}` (clip resume to 1500 chars). Expects comma-separated
/// skills as plain text.
pub const RESUME_ENRICHMENT_PROMPT_TEMPLATE: &str = r#"From this {domain} resume, identify 8-12 additional important skills or qualifications NOT in: {known_skills}

Resume: {resume_text}

Return comma-separated skills only. Focus on:
- Technical skills and tools used
- Certifications mentioned
- Years of experience
- Programming languages

Keep each skill under 6 words."#;

/// Actionable recommendations. Replace `{domain}`, `{score}`,
/// `{missing_keywords}`, `{resume_text}` (1500 chars) and
/// `{job_requirement}` (1000 chars). Expects four numbered lines.
pub const RECOMMENDATIONS_PROMPT_TEMPLATE: &str = r#"As a {domain} resume expert, provide 4 actionable recommendations.

Score: {score}%
Missing Keywords: {missing_keywords}
Resume: {resume_text}
Job: {job_requirement}

Format:
1. [Category]: [Specific advice under 120 chars]
2. [Category]: [Specific advice under 120 chars]
3. [Category]: [Specific advice under 120 chars]
4. [Category]: [Specific advice under 120 chars]"#;

/// Skill-gap analysis. Replace `{domain}`, `{resume_text}` (1000 chars)
/// and `{job_requirement}` (800 chars). Expects JSON.
pub const SKILL_GAP_PROMPT_TEMPLATE: &str = r#"Analyze skill gaps for {domain}.
Resume: {resume_text}
Job: {job_requirement}

Return as valid JSON:
{
    "current_skills": ["skill1", "skill2", "skill3"],
    "skill_gaps": [
        {"skill": "name", "importance": "high", "resources": ["resource1", "resource2"]},
        {"skill": "name", "importance": "medium", "resources": ["resource1"]}
    ]
}"#;
