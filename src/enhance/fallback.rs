use super::keywords::extract_design_keywords;
use crate::models::Enhancement;

/// A canned description chosen when `matches` accepts the lowercased prompt.
pub struct Template {
    pub topic: &'static str,
    pub matches: fn(&str) -> bool,
    pub description: &'static str,
}

const JAZZ: &str = "A vintage-inspired jazz concert poster featuring bold Art Deco typography with gold and deep blue color scheme. Include silhouettes of jazz musicians playing saxophone and trumpet, with musical notes flowing dynamically across the composition. The background should have a subtle textured pattern reminiscent of 1920s aesthetic, with elegant borders and sophisticated layout perfect for a classy jazz venue.";

const CHARITY: &str = "An energetic and inspiring charity run poster with vibrant colors and dynamic motion graphics. Feature silhouettes of diverse runners in action, with a sunrise/sunset backdrop creating a sense of hope and determination. Include bold, motivational typography with a modern sans-serif font, and incorporate heart symbols and community elements.";

const TECH: &str = "A sleek, minimalist tech conference poster with clean geometric shapes and a modern color palette of blues, whites, and accent colors. Feature abstract circuit patterns or network connections as background elements. Use contemporary typography with a mix of bold headers and clean body text.";

pub const DEFAULT_DESCRIPTION: &str = "A creative and eye-catching poster design with balanced composition, vibrant yet harmonious color scheme, and modern typography. The design should incorporate relevant visual elements that complement the theme, with clear hierarchy and professional layout.";

fn mentions_jazz(prompt: &str) -> bool {
    prompt.contains("jazz")
}

fn mentions_charity(prompt: &str) -> bool {
    prompt.contains("charity")
}

fn mentions_tech(prompt: &str) -> bool {
    prompt.contains("tech")
}

/// Checked top to bottom; the first accepting template wins.
pub static TEMPLATES: [Template; 3] = [
    Template {
        topic: "jazz",
        matches: mentions_jazz,
        description: JAZZ,
    },
    Template {
        topic: "charity",
        matches: mentions_charity,
        description: CHARITY,
    },
    Template {
        topic: "tech",
        matches: mentions_tech,
        description: TECH,
    },
];

/// Deterministic stand-in for the language model.
pub fn fallback(user_prompt: &str) -> Enhancement {
    let prompt = user_prompt.to_lowercase();

    let (topic, description) = TEMPLATES
        .iter()
        .find(|template| (template.matches)(&prompt))
        .map(|template| (template.topic, template.description))
        .unwrap_or(("default", DEFAULT_DESCRIPTION));

    log::debug!("Fallback enhancement using '{}' template", topic);

    Enhancement {
        enhanced_prompt: description.to_string(),
        keywords: extract_design_keywords(description),
        success: true,
    }
}
