// Cross-cutting prompt fragments shared by every generative call.
// Module-specific templates live next to their callers
// (analysis/prompts.rs, artifacts/prompts.rs).

/// System prompt for calls that must return machine-readable JSON.
pub const JSON_ONLY_SYSTEM: &str = "You are a career analysis assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for calls that return prose (cover letters, advice).
pub const CAREER_WRITER_SYSTEM: &str = "You are an expert career advisor \
    and professional writer. Respond with the requested document only — \
    no preamble, no placeholder brackets, no markdown fences.";

/// Clips text to at most `max_chars` characters on a char boundary.
/// Prompt budgets are char-based: long resumes and postings are clipped
/// before interpolation, never rejected.
pub fn clip(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_short_text_untouched() {
        assert_eq!(clip("hello", 10), "hello");
    }

    #[test]
    fn test_clip_long_text() {
        assert_eq!(clip("hello world", 5), "hello");
    }

    #[test]
    fn test_clip_respects_char_boundaries() {
        let text = "héllo wörld";
        let clipped = clip(text, 7);
        assert_eq!(clipped.chars().count(), 7);
    }
}
