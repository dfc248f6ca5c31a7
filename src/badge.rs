//! Favicon "discarded" badge rendering.
//!
//! A discarded tab keeps its visible identity, so the scheduler marks the
//! icon before committing: the original favicon is washed down to 60%
//! opacity and an opaque marker dot is drawn over its lower-right quadrant.
//! The result is encoded as a PNG `data:` URL ready for icon-link injection
//! through the script host.
//!
//! Rendering is pure pixel work; fetching the source icon belongs to the
//! [`FaviconFetcher`](crate::scheduler::FaviconFetcher) collaborator.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{ImageFormat, Rgba, RgbaImage};
use thiserror::Error;

/// Opacity applied to the source icon before the marker is drawn.
pub const WASH_OPACITY: f32 = 0.6;

/// Marker dot fill color.
pub const MARKER_COLOR: Rgba<u8> = Rgba([0xa1, 0xa0, 0xa1, 0xff]);

/// Marker dot radius as a fraction of the icon width.
pub const MARKER_RADIUS_RATIO: f32 = 0.25;

/// Marker dot center as a fraction of the icon width and height.
pub const MARKER_CENTER_RATIO: f32 = 0.75;

/// Edge length of the built-in placeholder icon.
pub const PLACEHOLDER_SIZE: u32 = 16;

/// Placeholder fill color (neutral gray).
const PLACEHOLDER_COLOR: Rgba<u8> = Rgba([0xc0, 0xc0, 0xc0, 0xff]);

/// Errors from badge rendering.
#[derive(Debug, Error)]
pub enum BadgeError {
    /// The fetched favicon bytes could not be decoded as an image.
    #[error("favicon decode failed: {0}")]
    Decode(#[source] image::ImageError),

    /// The composed badge could not be encoded as PNG.
    #[error("badge encode failed: {0}")]
    Encode(#[source] image::ImageError),
}

/// Renders the discarded-tab badge over the given favicon bytes.
///
/// Accepts any format the `image` crate can sniff (PNG, JPEG, ICO) and
/// returns a PNG `data:` URL.
pub fn render(icon_bytes: &[u8]) -> Result<String, BadgeError> {
    let decoded = image::load_from_memory(icon_bytes).map_err(BadgeError::Decode)?;
    encode_data_url(&compose(decoded.to_rgba8()))
}

/// Renders the badge over the built-in placeholder icon.
///
/// Used when the tab snapshot carries no favicon URL of its own.
pub fn render_placeholder() -> Result<String, BadgeError> {
    encode_data_url(&compose(placeholder()))
}

/// The built-in placeholder icon.
pub fn placeholder() -> RgbaImage {
    RgbaImage::from_pixel(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, PLACEHOLDER_COLOR)
}

/// Applies the opacity wash and the marker dot.
///
/// The marker is an opaque filled circle of radius 25% of the icon width,
/// centered at (75%, 75%) of the image.
fn compose(mut img: RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();

    for pixel in img.pixels_mut() {
        pixel.0[3] = (f32::from(pixel.0[3]) * WASH_OPACITY).round() as u8;
    }

    let cx = width as f32 * MARKER_CENTER_RATIO;
    let cy = height as f32 * MARKER_CENTER_RATIO;
    let radius = width as f32 * MARKER_RADIUS_RATIO;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x, y, MARKER_COLOR);
            }
        }
    }

    img
}

/// Encodes the badge as a PNG `data:` URL.
fn encode_data_url(img: &RgbaImage) -> Result<String, BadgeError> {
    let mut png = Cursor::new(Vec::new());
    img.write_to(&mut png, ImageFormat::Png)
        .map_err(BadgeError::Encode)?;
    Ok(format!(
        "data:image/png;base64,{}",
        BASE64.encode(png.into_inner())
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_icon(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba([0, 64, 128, 255]))
    }

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        img.write_to(&mut cursor, ImageFormat::Png).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_compose_preserves_dimensions() {
        let badge = compose(solid_icon(32));
        assert_eq!(badge.dimensions(), (32, 32));
    }

    #[test]
    fn test_compose_washes_opacity() {
        let badge = compose(solid_icon(32));
        // Far from the marker, the original pixel survives at 60% alpha.
        let corner = badge.get_pixel(0, 0);
        assert_eq!(corner.0[..3], [0, 64, 128]);
        assert_eq!(corner.0[3], (255.0 * WASH_OPACITY).round() as u8);
    }

    #[test]
    fn test_compose_draws_opaque_marker() {
        let badge = compose(solid_icon(32));
        // Center of the marker: (75%, 75%) of a 32px icon.
        assert_eq!(*badge.get_pixel(24, 24), MARKER_COLOR);
        // Just outside the 25%-width radius.
        assert_ne!(*badge.get_pixel(24, 12), MARKER_COLOR);
    }

    #[test]
    fn test_render_produces_data_url() {
        let href = render(&png_bytes(&solid_icon(16))).unwrap();
        assert!(href.starts_with("data:image/png;base64,"));

        // The payload round-trips as a PNG of the original size.
        let payload = href.strip_prefix("data:image/png;base64,").unwrap();
        let bytes = BASE64.decode(payload).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 16);
    }

    #[test]
    fn test_render_rejects_garbage() {
        let result = render(b"definitely not an image");
        assert!(matches!(result, Err(BadgeError::Decode(_))));
    }

    #[test]
    fn test_render_placeholder() {
        let href = render_placeholder().unwrap();
        assert!(href.starts_with("data:image/png;base64,"));
    }
}
