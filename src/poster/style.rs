use crate::models::PosterStyle;

/// Ordered rules; the first rule with any matching term decides the style.
const STYLE_RULES: [(&[&str], PosterStyle); 4] = [
    (&["vintage", "retro"], PosterStyle::VintageRetro),
    (&["modern", "contemporary"], PosterStyle::ModernContemporary),
    (&["minimalist", "clean"], PosterStyle::MinimalistClean),
    (&["art deco", "elegant"], PosterStyle::ArtDecoElegant),
];

pub fn classify(enhanced_prompt: &str) -> PosterStyle {
    let prompt = enhanced_prompt.to_lowercase();

    STYLE_RULES
        .iter()
        .find(|(terms, _)| terms.iter().any(|term| prompt.contains(term)))
        .map(|(_, style)| *style)
        .unwrap_or(PosterStyle::CreativeModern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(classify("vintage modern poster"), PosterStyle::VintageRetro);
        assert_eq!(classify("Clean CONTEMPORARY lines"), PosterStyle::ModernContemporary);
        assert_eq!(classify("elegant and clean"), PosterStyle::MinimalistClean);
    }

    #[test]
    fn test_each_style() {
        assert_eq!(classify("a retro arcade"), PosterStyle::VintageRetro);
        assert_eq!(classify("minimalist layout"), PosterStyle::MinimalistClean);
        assert_eq!(classify("Art Deco gala"), PosterStyle::ArtDecoElegant);
        assert_eq!(classify("a bright summer fair"), PosterStyle::CreativeModern);
        assert_eq!(classify(""), PosterStyle::CreativeModern);
    }
}
