use super::keywords::extract_design_keywords;
use crate::error::{OrDegrade, PosterError, Result};

pub const PARSED_KEYWORD_CAP: usize = 10;

const KEYWORD_LABEL: &str = "keywords";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    pub enhanced_prompt: String,
    pub keywords: Vec<String>,
}

/// Splits a raw model response into prose and keywords. Never fails: an
/// unusable response comes back verbatim with no keywords.
pub fn parse(raw_response: &str) -> ParsedResponse {
    try_parse(raw_response).or_degrade("response parsing", || ParsedResponse {
        enhanced_prompt: raw_response.to_string(),
        keywords: Vec::new(),
    })
}

/// Prose lines are space-joined until the first keyword line, which is either
/// labelled `Keywords` or simply contains a comma. Everything after it is dropped.
pub fn try_parse(raw_response: &str) -> Result<ParsedResponse> {
    if raw_response.trim().is_empty() {
        return Err(PosterError::Parse("empty response".into()));
    }

    let mut prose: Vec<&str> = Vec::new();
    let mut keyword_line: Option<&str> = None;

    for line in raw_response.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if starts_with_label(line) || line.contains(',') {
            keyword_line = Some(line);
            break;
        }
        prose.push(line);
    }

    let enhanced_prompt = prose.join(" ");

    let mut keywords = keyword_line.map(split_keyword_line).unwrap_or_default();
    if keywords.is_empty() {
        keywords = extract_design_keywords(&enhanced_prompt);
    }
    keywords.truncate(PARSED_KEYWORD_CAP);

    Ok(ParsedResponse {
        enhanced_prompt,
        keywords,
    })
}

/// True when the line opens with the word `keywords` on its own, followed by
/// a colon, whitespace or nothing.
fn starts_with_label(line: &str) -> bool {
    let labelled = line
        .get(..KEYWORD_LABEL.len())
        .map(|prefix| prefix.eq_ignore_ascii_case(KEYWORD_LABEL))
        .unwrap_or(false);

    labelled
        && line[KEYWORD_LABEL.len()..]
            .chars()
            .next()
            .map_or(true, |c| c == ':' || c.is_whitespace())
}

fn split_keyword_line(line: &str) -> Vec<String> {
    let body = if starts_with_label(line) {
        let rest = &line[KEYWORD_LABEL.len()..];
        rest.trim_start().strip_prefix(':').unwrap_or(rest)
    } else {
        line
    };

    let mut keywords: Vec<String> = Vec::new();
    for token in body.split(',') {
        let token = token.trim();
        if token.is_empty() || keywords.iter().any(|k| k == token) {
            continue;
        }
        keywords.push(token.to_string());
    }
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_keyword_line() {
        let parsed = parse("Line one.\nKeywords: bold, modern, clean");
        assert_eq!(parsed.enhanced_prompt, "Line one.");
        assert_eq!(parsed.keywords, vec!["bold", "modern", "clean"]);
    }

    #[test]
    fn test_prose_lines_are_space_joined() {
        let parsed = parse("A neon skyline.\n\nDeep purple tones.\nKEYWORDS: neon, purple");
        assert_eq!(parsed.enhanced_prompt, "A neon skyline. Deep purple tones.");
        assert_eq!(parsed.keywords, vec!["neon", "purple"]);
    }

    #[test]
    fn test_comma_line_stops_prose() {
        let parsed = parse("Intro sentence.\ngold, blue, art deco\nTrailing prose.");
        assert_eq!(parsed.enhanced_prompt, "Intro sentence.");
        assert_eq!(parsed.keywords, vec!["gold", "blue", "art deco"]);
    }

    #[test]
    fn test_missing_keyword_line_uses_vocabulary() {
        let parsed = parse("A sleek and vibrant modern poster.");
        assert_eq!(parsed.enhanced_prompt, "A sleek and vibrant modern poster.");
        assert_eq!(parsed.keywords, vec!["modern", "sleek", "vibrant"]);
    }

    #[test]
    fn test_empty_label_falls_back_to_vocabulary() {
        let parsed = parse("Bold geometric shapes.\nKeywords:");
        assert_eq!(parsed.keywords, vec!["bold", "geometric"]);
    }

    #[test]
    fn test_keywords_are_deduplicated_and_capped() {
        let line = "Keywords: a, b, a, c, d, e, f, g, h, i, j, k, , l";
        let parsed = parse(&format!("Prose.\n{}", line));
        assert_eq!(parsed.keywords.len(), PARSED_KEYWORD_CAP);
        assert_eq!(parsed.keywords[..3], ["a", "b", "c"]);
    }

    #[test]
    fn test_label_must_be_a_whole_word() {
        let parsed = parse("Prose.\nKeywordset: a, b");
        assert_eq!(parsed.enhanced_prompt, "Prose.");
        assert_eq!(parsed.keywords, vec!["Keywordset: a", "b"]);

        let parsed = parse("Prose.\nKeywords : bold, warm");
        assert_eq!(parsed.keywords, vec!["bold", "warm"]);

        let parsed = parse("Keywordless layouts feel bold.");
        assert_eq!(parsed.enhanced_prompt, "Keywordless layouts feel bold.");
        assert_eq!(parsed.keywords, vec!["bold"]);
    }

    #[test]
    fn test_empty_response_degrades_to_raw() {
        let parsed = parse("   ");
        assert_eq!(parsed.enhanced_prompt, "   ");
        assert!(parsed.keywords.is_empty());
        assert!(try_parse("").is_err());
    }
}
