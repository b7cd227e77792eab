use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A logo supplied by the user for one render call.
///
/// `data` is either a data URI (`data:image/png;base64,...`), bare base64
/// text, or the raw bytes of an encoded image file. In JSON it travels as a
/// base64 string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoInput {
    pub name: String,
    pub size: usize,
    #[serde(with = "base64_payload")]
    pub data: Vec<u8>,
}

mod base64_payload {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(data))
    }

    /// A string that is not valid base64 (a data URI, say) is kept as text.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(STANDARD.decode(&text).unwrap_or_else(|_| text.into_bytes()))
    }
}

impl LogoInput {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        Self {
            name: name.into(),
            size: data.len(),
            data,
        }
    }

    /// Wraps a data URI or base64 string as produced by a browser upload.
    pub fn from_data_uri(name: impl Into<String>, uri: &str) -> Self {
        Self::new(name, uri.as_bytes().to_vec())
    }
}

/// Named anchor for the logo overlay. Unknown names deserialize to top-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum LogoPosition {
    TopLeft,
    #[default]
    TopRight,
    TopCenter,
    BottomLeft,
    BottomRight,
    BottomCenter,
}

impl LogoPosition {
    pub const ALL: [LogoPosition; 6] = [
        LogoPosition::TopLeft,
        LogoPosition::TopRight,
        LogoPosition::TopCenter,
        LogoPosition::BottomLeft,
        LogoPosition::BottomRight,
        LogoPosition::BottomCenter,
    ];

    /// Parses an anchor name; anything unrecognized lands top-right.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "top-left" => LogoPosition::TopLeft,
            "top-right" => LogoPosition::TopRight,
            "top-center" => LogoPosition::TopCenter,
            "bottom-left" => LogoPosition::BottomLeft,
            "bottom-right" => LogoPosition::BottomRight,
            "bottom-center" => LogoPosition::BottomCenter,
            other => {
                log::debug!("Unknown logo position '{}', using top-right", other);
                LogoPosition::TopRight
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogoPosition::TopLeft => "top-left",
            LogoPosition::TopRight => "top-right",
            LogoPosition::TopCenter => "top-center",
            LogoPosition::BottomLeft => "bottom-left",
            LogoPosition::BottomRight => "bottom-right",
            LogoPosition::BottomCenter => "bottom-center",
        }
    }
}

impl From<String> for LogoPosition {
    fn from(name: String) -> Self {
        LogoPosition::from_name(&name)
    }
}

impl fmt::Display for LogoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style label attached to every render result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PosterStyle {
    #[serde(rename = "Vintage Retro")]
    VintageRetro,
    #[serde(rename = "Modern Contemporary")]
    ModernContemporary,
    #[serde(rename = "Minimalist Clean")]
    MinimalistClean,
    #[serde(rename = "Art Deco Elegant")]
    ArtDecoElegant,
    #[serde(rename = "Creative Modern")]
    CreativeModern,
    /// Only ever attached to the static fallback image.
    #[serde(rename = "Modern")]
    Fallback,
}

impl PosterStyle {
    pub fn label(&self) -> &'static str {
        match self {
            PosterStyle::VintageRetro => "Vintage Retro",
            PosterStyle::ModernContemporary => "Modern Contemporary",
            PosterStyle::MinimalistClean => "Minimalist Clean",
            PosterStyle::ArtDecoElegant => "Art Deco Elegant",
            PosterStyle::CreativeModern => "Creative Modern",
            PosterStyle::Fallback => "Modern",
        }
    }
}

impl fmt::Display for PosterStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// `data:image/png;base64,...`, or the SVG fallback data URI.
    pub image: String,
    pub style: PosterStyle,
    pub dimensions: String,
    pub success: bool,
}

impl RenderResult {
    pub fn dimensions_for(width: u32, height: u32) -> String {
        format!("{}x{}", width, height)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PosterRequest {
    pub user_prompt: String,
    pub enhanced_prompt: String,
    pub keywords: Vec<String>,
    pub session_id: String,
    pub logo: Option<LogoInput>,
    pub logo_position: Option<LogoPosition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPoster {
    pub id: String,
    pub user_prompt: String,
    pub enhanced_prompt: String,
    pub keywords: Vec<String>,
    pub logo: Option<LogoInput>,
    pub logo_position: Option<LogoPosition>,
    pub poster_image: String,
    pub style: PosterStyle,
    pub dimensions: String,
    pub session_id: String,
    pub created_at: DateTime<Utc>,
}

impl GeneratedPoster {
    pub fn from_render(request: PosterRequest, result: RenderResult) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_prompt: request.user_prompt,
            enhanced_prompt: request.enhanced_prompt,
            keywords: request.keywords,
            logo: request.logo,
            logo_position: request.logo_position,
            poster_image: result.image,
            style: result.style,
            dimensions: result.dimensions,
            session_id: request.session_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_names() {
        for position in LogoPosition::ALL {
            assert_eq!(LogoPosition::from_name(position.as_str()), position);
        }
        assert_eq!(LogoPosition::from_name("Bottom-Right"), LogoPosition::BottomRight);
        assert_eq!(LogoPosition::from_name("middle"), LogoPosition::TopRight);
    }

    #[test]
    fn test_unknown_position_deserializes_to_top_right() {
        let position: LogoPosition = serde_json::from_str("\"middle\"").unwrap();
        assert_eq!(position, LogoPosition::TopRight);
        let position: LogoPosition = serde_json::from_str("\"bottom-left\"").unwrap();
        assert_eq!(position, LogoPosition::BottomLeft);
        assert_eq!(
            serde_json::to_string(&LogoPosition::BottomCenter).unwrap(),
            "\"bottom-center\""
        );

        let request: PosterRequest = serde_json::from_str(
            r#"{"user_prompt": "jazz", "enhanced_prompt": "A jazz night", "keywords": [],
                "session_id": "s1", "logo": null, "logo_position": "middle"}"#,
        )
        .unwrap();
        assert_eq!(request.logo_position, Some(LogoPosition::TopRight));
    }

    #[test]
    fn test_logo_data_travels_as_base64() {
        let logo = LogoInput::new("logo.png", vec![0x89, b'P', b'N', b'G', 0x00, 0xff]);
        let json = serde_json::to_value(&logo).unwrap();
        assert_eq!(json["data"], "iVBORwD/");

        let back: LogoInput = serde_json::from_value(json).unwrap();
        assert_eq!(back.data, logo.data);

        let uri = "data:image/png;base64,AAAA";
        let from_browser: LogoInput = serde_json::from_str(&format!(
            r#"{{"name": "logo.png", "size": 26, "data": "{}"}}"#,
            uri
        ))
        .unwrap();
        assert_eq!(from_browser.data, uri.as_bytes());
    }

    #[test]
    fn test_style_serializes_as_label() {
        let json = serde_json::to_string(&PosterStyle::ArtDecoElegant).unwrap();
        assert_eq!(json, "\"Art Deco Elegant\"");
        assert_eq!(PosterStyle::Fallback.to_string(), "Modern");
    }

    #[test]
    fn test_logo_input_size() {
        let logo = LogoInput::from_data_uri("logo.png", "data:image/png;base64,AAAA");
        assert_eq!(logo.size, 26);
    }
}
