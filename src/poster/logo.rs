use crate::{
    error::{OrDegrade, PosterError, Result},
    models::LogoPosition,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{imageops, imageops::FilterType, RgbaImage};

pub const LOGO_SIZE: u32 = 80;
pub const LOGO_MARGIN: u32 = 20;

/// Top-left paste coordinates for a logo at `position` on a canvas.
pub fn anchor(position: LogoPosition, canvas_width: u32, canvas_height: u32) -> (i64, i64) {
    let (w, h) = (canvas_width as i64, canvas_height as i64);
    let (size, margin) = (LOGO_SIZE as i64, LOGO_MARGIN as i64);

    let left = margin;
    let right = w - size - margin;
    let center = (w - size) / 2;
    let top = margin;
    let bottom = h - size - margin;

    match position {
        LogoPosition::TopLeft => (left, top),
        LogoPosition::TopRight => (right, top),
        LogoPosition::TopCenter => (center, top),
        LogoPosition::BottomLeft => (left, bottom),
        LogoPosition::BottomRight => (right, bottom),
        LogoPosition::BottomCenter => (center, bottom),
    }
}

/// Decodes a logo payload into an 80x80 RGBA image.
///
/// Raw image bytes are used as-is; anything else is treated as base64 text
/// with an optional data-URI prefix up to the first comma. Whitespace inside
/// the base64 text is ignored.
pub fn decode_logo(payload: &[u8]) -> Result<RgbaImage> {
    let bytes = if image::guess_format(payload).is_ok() {
        payload.to_vec()
    } else {
        let text = std::str::from_utf8(payload)
            .map_err(|e| PosterError::LogoDecode(format!("payload is not text: {}", e)))?;
        let encoded = match text.split_once(',') {
            Some((_, rest)) => rest,
            None => text,
        };
        // Line-wrapped base64 (MIME style) is accepted.
        let compact: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        STANDARD
            .decode(compact)
            .map_err(|e| PosterError::LogoDecode(e.to_string()))?
    };

    let logo = image::load_from_memory(&bytes)
        .map_err(|e| PosterError::LogoDecode(e.to_string()))?
        .to_rgba8();

    Ok(imageops::resize(
        &logo,
        LOGO_SIZE,
        LOGO_SIZE,
        FilterType::Lanczos3,
    ))
}

/// Pastes the logo using its own alpha as the mask.
pub fn try_composite(
    canvas: &mut RgbaImage,
    payload: &[u8],
    position: LogoPosition,
) -> Result<()> {
    let logo = decode_logo(payload)?;
    let (x, y) = anchor(position, canvas.width(), canvas.height());
    imageops::overlay(canvas, &logo, x, y);
    log::debug!("Logo placed at {} ({}, {})", position, x, y);
    Ok(())
}

/// Like [`try_composite`], but a logo that cannot be decoded is simply left
/// out and the canvas is returned untouched.
pub fn composite(canvas: &mut RgbaImage, payload: &[u8], position: LogoPosition) {
    try_composite(canvas, payload, position).or_degrade("logo overlay", || ())
}
