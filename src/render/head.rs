//! Head extraction from a Minecraft skin atlas.
//!
//! The face of the base layer sits at (8, 8) and the face of the hat layer
//! at (40, 8), both 8x8. Legacy 64x32 skins share that layout.

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::RenderError;

/// Edge length of a head face on the atlas
pub const FACE_SIZE: u32 = 8;
/// Top-left of the base head face
pub const BASE_FACE_ORIGIN: (u32, u32) = (8, 8);
/// Top-left of the hat (overlay) face
pub const HAT_FACE_ORIGIN: (u32, u32) = (40, 8);

/// Renders the front of a player's head as a `size`x`size` PNG.
///
/// The hat layer is alpha-composited over the base face, then the 8x8
/// result is scaled with nearest-neighbour sampling so every source pixel
/// becomes a solid block.
pub fn render_head(skin_png: &[u8], size: u32) -> Result<Vec<u8>, RenderError> {
    if size == 0 {
        return Err(RenderError::InvalidSize(size));
    }

    let skin = image::load_from_memory(skin_png)?.to_rgba8();
    let face = composite_face(&skin)?;
    let scaled = imageops::resize(&face, size, size, FilterType::Nearest);

    let mut png = Vec::new();
    DynamicImage::ImageRgba8(scaled).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

/// Returns the 8x8 face with the hat layer applied.
pub fn composite_face(skin: &RgbaImage) -> Result<RgbaImage, RenderError> {
    let (width, height) = skin.dimensions();
    if width < HAT_FACE_ORIGIN.0 + FACE_SIZE || height < HAT_FACE_ORIGIN.1 + FACE_SIZE {
        return Err(RenderError::AtlasTooSmall { width, height });
    }

    let (bx, by) = BASE_FACE_ORIGIN;
    let (hx, hy) = HAT_FACE_ORIGIN;
    let mut face = imageops::crop_imm(skin, bx, by, FACE_SIZE, FACE_SIZE).to_image();
    let hat = imageops::crop_imm(skin, hx, hy, FACE_SIZE, FACE_SIZE).to_image();

    imageops::overlay(&mut face, &hat, 0, 0);
    Ok(face)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    /// 64x64 skin: base face checkered red/blue, hat opaque green in its
    /// top-left pixel only, everything else transparent.
    fn synthetic_skin() -> RgbaImage {
        let mut skin = RgbaImage::from_pixel(64, 64, CLEAR);
        for y in 0..FACE_SIZE {
            for x in 0..FACE_SIZE {
                let color = if (x + y) % 2 == 0 { RED } else { BLUE };
                skin.put_pixel(8 + x, 8 + y, color);
            }
        }
        skin.put_pixel(40, 8, GREEN);
        skin
    }

    fn encode(skin: &RgbaImage) -> Vec<u8> {
        let mut png = Vec::new();
        DynamicImage::ImageRgba8(skin.clone())
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();
        png
    }

    #[test]
    fn test_composite_face_applies_hat_only_where_opaque() {
        let face = composite_face(&synthetic_skin()).unwrap();

        assert_eq!(face.dimensions(), (8, 8));
        assert_eq!(*face.get_pixel(0, 0), GREEN);
        assert_eq!(*face.get_pixel(1, 0), BLUE);
        assert_eq!(*face.get_pixel(2, 0), RED);
        assert_eq!(*face.get_pixel(7, 7), RED);
    }

    #[test]
    fn test_render_head_scales_with_hard_edges() {
        let png = render_head(&encode(&synthetic_skin()), 128).unwrap();
        let head = image::load_from_memory(&png).unwrap().to_rgba8();

        assert_eq!(head.dimensions(), (128, 128));

        // Each source pixel becomes a solid 16x16 block
        for (x, y) in [(0, 0), (15, 15), (0, 15), (15, 0)] {
            assert_eq!(*head.get_pixel(x, y), GREEN);
        }
        assert_eq!(*head.get_pixel(16, 0), BLUE);
        assert_eq!(*head.get_pixel(31, 15), BLUE);
        assert_eq!(*head.get_pixel(32, 0), RED);
        assert_eq!(*head.get_pixel(127, 127), RED);
    }

    #[test]
    fn test_render_head_output_is_png() {
        let png = render_head(&encode(&synthetic_skin()), 64).unwrap();

        assert_eq!(image::guess_format(&png).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_legacy_64x32_skin_is_accepted() {
        let legacy = imageops::crop_imm(&synthetic_skin(), 0, 0, 64, 32).to_image();

        let png = render_head(&encode(&legacy), 8).unwrap();
        let head = image::load_from_memory(&png).unwrap().to_rgba8();

        assert_eq!(*head.get_pixel(0, 0), GREEN);
    }

    #[test]
    fn test_atlas_too_small() {
        let tiny = RgbaImage::from_pixel(16, 16, RED);

        assert!(matches!(
            render_head(&encode(&tiny), 64),
            Err(RenderError::AtlasTooSmall { width: 16, height: 16 })
        ));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        assert!(matches!(
            render_head(b"definitely not a png", 64),
            Err(RenderError::Image(_))
        ));
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            render_head(&encode(&synthetic_skin()), 0),
            Err(RenderError::InvalidSize(0))
        ));
    }
}
