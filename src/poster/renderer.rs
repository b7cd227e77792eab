use super::{fonts::FontSet, logo, style, wrap::wrap};
use crate::{
    error::{OrDegrade, PosterError, Result},
    logger,
    models::{LogoInput, LogoPosition, PosterStyle, RenderResult},
};
use ab_glyph::{FontVec, PxScale};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::{io::Cursor, sync::Arc};

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 1200;

const GRADIENT_TOP: [f32; 3] = [147.0, 51.0, 234.0];
const GRADIENT_BOTTOM: [f32; 3] = [64.0, 224.0, 208.0];

const PANEL_WIDTH: u32 = 600;
const PANEL_HEIGHT: u32 = 400;
const PANEL_ALPHA: u8 = 180;

const TITLE: &str = "AI Generated Poster";
const TITLE_SIZE: f32 = 40.0;
const TITLE_OFFSET: i32 = 50;
const TITLE_COLOR: Rgba<u8> = Rgba([50, 50, 50, 255]);

const DESCRIPTION_SIZE: f32 = 20.0;
const DESCRIPTION_OFFSET: i32 = 80;
const DESCRIPTION_STEP: i32 = 30;
const DESCRIPTION_COLOR: Rgba<u8> = Rgba([80, 80, 80, 255]);
const DESCRIPTION_CHARS: usize = 100;
const DESCRIPTION_WRAP: usize = 50;
const DESCRIPTION_MAX_LINES: usize = 3;

pub const FALLBACK_DIMENSIONS: &str = "400x600";
pub const FALLBACK_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDAwIiBoZWlnaHQ9IjYwMCIgdmlld0JveD0iMCAwIDQwMCA2MDAiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+CjxyZWN0IHdpZHRoPSI0MDAiIGhlaWdodD0iNjAwIiBmaWxsPSJsaW5lYXItZ3JhZGllbnQoNDVkZWcsICM5MzMzZWEsICMwZjE0MTkpIi8+Cjx0ZXh0IHg9IjIwMCIgeT0iMzAwIiB0ZXh0LWFuY2hvcj0ibWlkZGxlIiBmaWxsPSJ3aGl0ZSIgZm9udC1zaXplPSIyNCI+QUkgUG9zdGVyPC90ZXh0Pgo8L3N2Zz4K";

/// The static placeholder served whenever procedural rendering fails.
pub fn fallback_result() -> RenderResult {
    RenderResult {
        image: FALLBACK_IMAGE.to_string(),
        style: PosterStyle::Fallback,
        dimensions: FALLBACK_DIMENSIONS.to_string(),
        success: false,
    }
}

/// Procedural poster renderer. Cheap to clone; fonts are shared.
#[derive(Clone)]
pub struct PosterRenderer {
    fonts: Arc<FontSet>,
    width: u32,
    height: u32,
}

impl PosterRenderer {
    pub fn new(fonts: FontSet) -> Self {
        Self {
            fonts: Arc::new(fonts),
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }

    /// Renderer using system fonts, falling back to the bundled basic face.
    pub fn with_system_fonts() -> Self {
        Self::new(FontSet::discover())
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Renders a poster. Never fails; see [`fallback_result`].
    pub fn render(
        &self,
        enhanced_prompt: &str,
        logo: Option<&LogoInput>,
        position: Option<LogoPosition>,
    ) -> RenderResult {
        self.try_render(enhanced_prompt, logo, position)
            .or_degrade("poster render", fallback_result)
    }

    pub fn try_render(
        &self,
        enhanced_prompt: &str,
        logo: Option<&LogoInput>,
        position: Option<LogoPosition>,
    ) -> Result<RenderResult> {
        let _timer = logger::timer("poster render");

        let canvas = self.compose(enhanced_prompt, logo, position)?;
        let dimensions = RenderResult::dimensions_for(canvas.width(), canvas.height());
        let image = encode_data_uri(canvas)?;

        Ok(RenderResult {
            image,
            style: style::classify(enhanced_prompt),
            dimensions,
            success: true,
        })
    }

    /// Builds the canvas without encoding it.
    pub fn compose(
        &self,
        enhanced_prompt: &str,
        logo: Option<&LogoInput>,
        position: Option<LogoPosition>,
    ) -> Result<RgbaImage> {
        if self.width < PANEL_WIDTH || self.height < PANEL_HEIGHT {
            return Err(PosterError::Render(format!(
                "canvas {}x{} cannot hold the {}x{} panel",
                self.width, self.height, PANEL_WIDTH, PANEL_HEIGHT
            )));
        }

        let mut canvas = gradient(self.width, self.height);

        let panel_x = (self.width - PANEL_WIDTH) / 2;
        let panel_y = (self.height - PANEL_HEIGHT) / 2;
        fill_translucent(
            &mut canvas,
            panel_x,
            panel_y,
            PANEL_WIDTH,
            PANEL_HEIGHT,
            Rgba([255, 255, 255, PANEL_ALPHA]),
        );

        let title_y = panel_y as i32 + TITLE_OFFSET;
        match self.fonts.title() {
            Some(font) => draw_centered(&mut canvas, font, TITLE_SIZE, TITLE_COLOR, title_y, TITLE),
            None => log::warn!("No title font available, skipping title"),
        }

        if let Some(font) = self.fonts.body() {
            let mut y = title_y + DESCRIPTION_OFFSET;
            for line in description_lines(enhanced_prompt) {
                draw_centered(&mut canvas, font, DESCRIPTION_SIZE, DESCRIPTION_COLOR, y, &line);
                y += DESCRIPTION_STEP;
            }
        }

        if let (Some(logo_input), Some(position)) = (logo, position) {
            logo::composite(&mut canvas, &logo_input.data, position);
        }

        Ok(canvas)
    }
}

/// First 100 characters plus an ellipsis, wrapped to at most three lines.
pub fn description_lines(enhanced_prompt: &str) -> Vec<String> {
    let excerpt: String = enhanced_prompt.chars().take(DESCRIPTION_CHARS).collect();
    let mut lines = wrap(&format!("{}...", excerpt), DESCRIPTION_WRAP);
    lines.truncate(DESCRIPTION_MAX_LINES);
    lines
}

/// Vertical linear gradient, one color per scanline.
fn gradient(width: u32, height: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    for (y, row) in canvas.enumerate_rows_mut() {
        let t = y as f32 / height as f32;
        let channel =
            |i: usize| (GRADIENT_TOP[i] + (GRADIENT_BOTTOM[i] - GRADIENT_TOP[i]) * t) as u8;
        let color = Rgba([channel(0), channel(1), channel(2), 255]);
        for (_, _, pixel) in row {
            *pixel = color;
        }
    }
    canvas
}

fn fill_translucent(
    canvas: &mut RgbaImage,
    x0: u32,
    y0: u32,
    width: u32,
    height: u32,
    color: Rgba<u8>,
) {
    let alpha = color[3] as f32 / 255.0;
    for y in y0..(y0 + height).min(canvas.height()) {
        for x in x0..(x0 + width).min(canvas.width()) {
            let pixel = canvas.get_pixel_mut(x, y);
            for c in 0..3 {
                let blended = color[c] as f32 * alpha + pixel[c] as f32 * (1.0 - alpha);
                pixel[c] = blended.round() as u8;
            }
        }
    }
}

fn draw_centered(
    canvas: &mut RgbaImage,
    font: &FontVec,
    size: f32,
    color: Rgba<u8>,
    y: i32,
    text: &str,
) {
    let scale = PxScale::from(size);
    let (text_width, _) = text_size(scale, font, text);
    let x = (canvas.width() as i32 - text_width as i32) / 2;
    draw_text_mut(canvas, color, x, y, scale, font, text);
}

fn encode_data_uri(canvas: RgbaImage) -> Result<String> {
    let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(rgb)
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| PosterError::Encode(e.to_string()))?;

    Ok(format!(
        "data:image/png;base64,{}",
        STANDARD.encode(buffer.into_inner())
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    fn decode_data_uri(uri: &str) -> DynamicImage {
        let payload = uri
            .strip_prefix("data:image/png;base64,")
            .expect("png data uri");
        let bytes = STANDARD.decode(payload).unwrap();
        image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap()
    }

    fn renderer() -> PosterRenderer {
        PosterRenderer::new(FontSet::empty())
    }

    #[test]
    fn test_render_round_trip_dimensions() {
        let result = renderer().render("A vintage jazz poster", None, None);

        assert!(result.success);
        assert_eq!(result.dimensions, "800x1200");
        assert_eq!(result.style, PosterStyle::VintageRetro);
        assert_eq!(decode_data_uri(&result.image).dimensions(), (800, 1200));
    }

    #[test]
    fn test_render_with_system_fonts_succeeds() {
        let result = PosterRenderer::with_system_fonts().render(
            &"a sleek modern tech conference with clean lines ".repeat(5),
            None,
            None,
        );
        assert!(result.success);
        assert_eq!(result.dimensions, "800x1200");
        assert_eq!(result.style, PosterStyle::ModernContemporary);
    }

    #[test]
    fn test_forced_failure_serves_fallback() {
        let result = renderer().with_canvas(0, 0).render("anything", None, None);

        assert!(!result.success);
        assert_eq!(result.dimensions, "400x600");
        assert_eq!(result.style, PosterStyle::Fallback);
        assert_eq!(result.image, FALLBACK_IMAGE);
    }

    #[test]
    fn test_gradient_and_panel_colors() {
        let canvas = renderer().compose("", None, None).unwrap();

        assert_eq!(canvas.get_pixel(0, 0), &Rgba([147, 51, 234, 255]));
        let bottom = canvas.get_pixel(0, 1199);
        assert_eq!((bottom[0], bottom[1], bottom[2]), (64, 223, 208));

        // Panel spans (100, 400) to (700, 800).
        let outside = canvas.get_pixel(99, 400);
        let inside = canvas.get_pixel(100, 400);
        assert!(inside[0] > outside[0]);
        assert!(inside[1] > outside[1]);
        assert_eq!(canvas.get_pixel(700, 400), canvas.get_pixel(0, 400));
    }

    #[test]
    fn test_logo_needs_position() {
        let logo = LogoInput::from_data_uri("logo.png", "data:image/png;base64,broken");
        let plain = renderer().compose("x", None, None).unwrap();
        let without_position = renderer().compose("x", Some(&logo), None).unwrap();
        let with_bad_logo = renderer()
            .compose("x", Some(&logo), Some(LogoPosition::TopLeft))
            .unwrap();

        assert_eq!(plain, without_position);
        assert_eq!(plain, with_bad_logo);
    }

    fn dark_pixels_in_text_band(canvas: &RgbaImage) -> usize {
        // Title at y 450, first description line at y 530.
        (450..560)
            .flat_map(|y| (100..700).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.get_pixel(x, y)[0] < 150)
            .count()
    }

    #[test]
    fn test_text_is_drawn_with_basic_font() {
        let with_text = PosterRenderer::new(FontSet::basic())
            .compose("A vintage jazz poster", None, None)
            .unwrap();
        let without_text = renderer().compose("A vintage jazz poster", None, None).unwrap();

        assert!(dark_pixels_in_text_band(&with_text) > 100);
        assert_eq!(dark_pixels_in_text_band(&without_text), 0);

        // Description lines sit below the title.
        let description_band = (530..560)
            .flat_map(|y| (100..700).map(move |x| (x, y)))
            .filter(|&(x, y)| with_text.get_pixel(x, y)[0] < 150)
            .count();
        assert!(description_band > 0);
    }

    #[test]
    fn test_valid_logo_reaches_rendered_poster() {
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(80, 80, Rgba([255, 0, 0, 255])))
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        let uri = format!("data:image/png;base64,{}", STANDARD.encode(buf.into_inner()));
        let logo = LogoInput::from_data_uri("logo.png", &uri);

        let result = renderer().render("poster", Some(&logo), Some(LogoPosition::BottomRight));
        assert!(result.success);

        let poster = decode_data_uri(&result.image).to_rgb8();
        let is_red = |x: u32, y: u32| {
            let [r, g, b] = poster.get_pixel(x, y).0;
            r > 250 && g < 5 && b < 5
        };
        assert!(is_red(700, 1100));
        assert!(is_red(740, 1140));
        assert!(is_red(779, 1179));
        assert!(!is_red(699, 1099));
        assert!(!is_red(780, 1180));
    }

    #[test]
    fn test_description_lines() {
        let long = "word ".repeat(60);
        let lines = description_lines(&long);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() <= 50));

        assert_eq!(description_lines("Short one"), vec!["Short one..."]);
        assert_eq!(description_lines(""), vec!["..."]);
    }
}
