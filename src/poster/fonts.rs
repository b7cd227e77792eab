use crate::error::{PosterError, Result};
use ab_glyph::FontVec;
use std::path::Path;

/// Basic face compiled into the binary, used when no system font loads.
static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

const TITLE_FONT_CANDIDATES: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
];

const BODY_FONT_CANDIDATES: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
];

/// Fonts used for the title and description. A slot left empty after
/// discovery is filled by the bundled basic face.
pub struct FontSet {
    title: Option<FontVec>,
    body: Option<FontVec>,
    basic: Option<FontVec>,
}

impl FontSet {
    pub fn discover() -> Self {
        let title = first_loadable(&TITLE_FONT_CANDIDATES);
        let body = first_loadable(&BODY_FONT_CANDIDATES);

        if title.is_none() {
            log::warn!("No bold system font found, using the bundled basic font for titles");
        }
        if body.is_none() {
            log::warn!("No system body font found, using the bundled basic font");
        }

        Self {
            title,
            body,
            basic: bundled(),
        }
    }

    /// Only the bundled basic face, ignoring system fonts.
    pub fn basic() -> Self {
        Self {
            title: None,
            body: None,
            basic: bundled(),
        }
    }

    /// No fonts at all; text is not drawn.
    pub fn empty() -> Self {
        Self {
            title: None,
            body: None,
            basic: None,
        }
    }

    pub fn from_bytes(title: Vec<u8>, body: Vec<u8>) -> Result<Self> {
        let parse = |data: Vec<u8>| {
            FontVec::try_from_vec(data).map_err(|e| PosterError::Config(e.to_string()))
        };
        Ok(Self {
            title: Some(parse(title)?),
            body: Some(parse(body)?),
            basic: bundled(),
        })
    }

    pub fn title(&self) -> Option<&FontVec> {
        self.title.as_ref().or(self.basic.as_ref())
    }

    pub fn body(&self) -> Option<&FontVec> {
        self.body.as_ref().or(self.basic.as_ref())
    }
}

fn bundled() -> Option<FontVec> {
    match FontVec::try_from_vec(BUNDLED_FONT.to_vec()) {
        Ok(font) => Some(font),
        Err(e) => {
            log::error!("Bundled font is unreadable: {}", e);
            None
        }
    }
}

fn first_loadable(candidates: &[&str]) -> Option<FontVec> {
    candidates.iter().find_map(|path| match load(Path::new(path)) {
        Ok(font) => {
            log::debug!("Loaded font {}", path);
            Some(font)
        }
        Err(e) => {
            log::trace!("Skipping font {}: {}", path, e);
            None
        }
    })
}

fn load(path: &Path) -> Result<FontVec> {
    let data = std::fs::read(path).map_err(|e| PosterError::Config(e.to_string()))?;
    FontVec::try_from_vec(data).map_err(|e| PosterError::Config(e.to_string()))
}
