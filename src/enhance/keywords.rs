/// Design adjectives recognized by the heuristic extractor, in match priority order.
pub const DESIGN_VOCABULARY: [&str; 20] = [
    "vintage",
    "modern",
    "minimalist",
    "bold",
    "elegant",
    "creative",
    "dynamic",
    "professional",
    "artistic",
    "colorful",
    "typography",
    "geometric",
    "abstract",
    "retro",
    "contemporary",
    "sleek",
    "vibrant",
    "dramatic",
    "subtle",
    "sophisticated",
];

pub const HEURISTIC_KEYWORD_CAP: usize = 8;

/// Returns the vocabulary terms contained in `text`, in vocabulary order.
///
/// Matching is a case-insensitive substring test, so "boldly" matches "bold".
pub fn extract(text: &str, vocabulary: &[&str], cap: usize) -> Vec<String> {
    let haystack = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for term in vocabulary {
        if found.len() >= cap {
            break;
        }
        let needle = term.to_lowercase();
        if haystack.contains(&needle) && !found.contains(&needle) {
            found.push(needle);
        }
    }

    found
}

/// [`extract`] over [`DESIGN_VOCABULARY`] with the heuristic cap.
pub fn extract_design_keywords(text: &str) -> Vec<String> {
    extract(text, &DESIGN_VOCABULARY, HEURISTIC_KEYWORD_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_order_wins_over_input_order() {
        let found = extract("modern vintage poster", &DESIGN_VOCABULARY, 8);
        assert_eq!(found, vec!["vintage", "modern"]);

        let found = extract("vintage modern poster", &DESIGN_VOCABULARY, 8);
        assert_eq!(found, vec!["vintage", "modern"]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let found = extract("A BOLDLY Geometric layout", &DESIGN_VOCABULARY, 8);
        assert_eq!(found, vec!["bold", "geometric"]);
    }

    #[test]
    fn test_cap_and_empty() {
        let text = DESIGN_VOCABULARY.join(" ");
        assert_eq!(extract(&text, &DESIGN_VOCABULARY, 3).len(), 3);
        assert_eq!(extract_design_keywords(&text).len(), HEURISTIC_KEYWORD_CAP);
        assert!(extract("plain words only", &DESIGN_VOCABULARY, 8).is_empty());
        assert!(extract("", &DESIGN_VOCABULARY, 8).is_empty());
    }
}
