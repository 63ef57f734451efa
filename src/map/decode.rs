//! Run-length decoding of the embedded world map.
//!
//! Each byte packs a run: the upper six bits hold the run length minus one,
//! the lower two bits index a four-colour palette. The decoded image is
//! 64x64 pixels stored bottom row first.

use eframe::egui::ColorImage;

/// Width and height of the map image in pixels.
pub const MAP_IMAGE_SIZE: usize = 64;

const PIXEL_COUNT: usize = MAP_IMAGE_SIZE * MAP_IMAGE_SIZE;

/// White (ice), blue (water), green (land), black (padding).
const PALETTE: [[u8; 3]; 4] = [[255, 255, 255], [0, 0, 255], [0, 255, 0], [0, 0, 0]];

/// Index of the colour used for pixels the stream does not cover.
const FILL_COLOR: usize = 3;

/// Run-length encoded world map, bottom row first.
pub static WORLD_MAP_RLE: &[u8] = &[
    252, 252, 252, 252, 252, 252, 252, 252, 252, 0, 9, 80, 1, 148, 13, 72, 13, 140, 25, 60, 21, 132,
    41, 12, 1, 28, 25, 128, 61, 0, 17, 4, 29, 124, 81, 8, 37, 116, 89, 0, 69, 16, 5, 48, 97, 0, 77,
    0, 25, 8, 1, 8, 253, 253, 253, 253, 101, 10, 237, 14, 237, 14, 241, 10, 141, 2, 93, 14, 121, 2,
    5, 6, 93, 14, 49, 6, 57, 26, 89, 18, 41, 10, 57, 26, 89, 18, 41, 14, 1, 2, 45, 26, 89, 26, 33,
    18, 57, 14, 93, 26, 33, 18, 57, 10, 93, 18, 5, 2, 33, 18, 41, 2, 5, 2, 5, 6, 89, 22, 29, 2, 1,
    22, 37, 2, 1, 6, 1, 2, 97, 22, 29, 38, 45, 2, 97, 10, 1, 2, 37, 42, 17, 2, 13, 2, 5, 2, 89, 10,
    49, 46, 25, 10, 101, 2, 5, 6, 37, 50, 9, 30, 89, 10, 9, 2, 37, 50, 5, 38, 81, 26, 45, 22, 17,
    54, 77, 30, 41, 22, 17, 58, 1, 2, 61, 38, 65, 2, 9, 58, 69, 46, 37, 6, 1, 10, 9, 62, 65, 38, 5,
    2, 33, 102, 57, 54, 33, 102, 57, 30, 1, 14, 33, 2, 9, 86, 9, 2, 21, 6, 13, 26, 5, 6, 53, 94, 29,
    26, 1, 22, 29, 0, 29, 98, 5, 14, 9, 46, 1, 2, 5, 6, 5, 2, 0, 13, 0, 13, 118, 1, 2, 1, 42, 1, 4,
    5, 6, 5, 2, 4, 33, 78, 1, 6, 1, 6, 1, 10, 5, 34, 1, 20, 2, 9, 2, 12, 25, 14, 5, 30, 1, 54, 13,
    6, 9, 2, 1, 32, 13, 8, 37, 2, 13, 2, 1, 70, 49, 28, 13, 16, 53, 2, 1, 46, 1, 2, 1, 2, 53, 28,
    17, 16, 57, 14, 1, 18, 1, 14, 1, 2, 57, 24, 13, 20, 57, 0, 2, 1, 2, 17, 0, 17, 2, 61, 0, 5, 16,
    1, 28, 25, 0, 41, 2, 117, 56, 25, 0, 33, 2, 1, 2, 117, 52, 201, 48, 77, 0, 121, 40, 1, 0, 205,
    8, 1, 0, 1, 12, 213, 4, 13, 12, 253, 253, 253, 141,
];

/// Decodes a run-length stream into exactly 64x64 RGB pixels.
///
/// Runs past the end of the image are truncated; pixels the stream does not
/// reach are black.
pub fn decode_rle(encoded: &[u8]) -> Vec<[u8; 3]> {
    let mut pixels = Vec::with_capacity(PIXEL_COUNT);

    for &byte in encoded {
        let run_length = ((byte >> 2) & 0x3F) as usize + 1;
        let color = PALETTE[(byte & 0x03) as usize];

        let remaining = PIXEL_COUNT - pixels.len();
        pixels.extend(std::iter::repeat(color).take(run_length.min(remaining)));
        if pixels.len() == PIXEL_COUNT {
            break;
        }
    }

    pixels.resize(PIXEL_COUNT, PALETTE[FILL_COLOR]);
    pixels
}

/// Decodes the embedded map into an egui image (top row first).
pub fn world_map_image() -> ColorImage {
    let pixels = decode_rle(WORLD_MAP_RLE);

    let rgb: Vec<u8> = pixels
        .chunks_exact(MAP_IMAGE_SIZE)
        .rev()
        .flatten()
        .flatten()
        .copied()
        .collect();

    ColorImage::from_rgb([MAP_IMAGE_SIZE, MAP_IMAGE_SIZE], &rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_map_fills_image_exactly() {
        let covered: usize = WORLD_MAP_RLE
            .iter()
            .map(|&b| (b >> 2) as usize + 1)
            .sum();
        assert_eq!(covered, PIXEL_COUNT);
        assert_eq!(decode_rle(WORLD_MAP_RLE).len(), PIXEL_COUNT);
    }

    #[test]
    fn test_run_encoding() {
        // 0b000010_01: three blue pixels, then 0b000000_10: one green pixel.
        let pixels = decode_rle(&[0b0000_1001, 0b0000_0010]);
        assert_eq!(pixels[..3], [PALETTE[1]; 3]);
        assert_eq!(pixels[3], PALETTE[2]);
        assert_eq!(pixels[4], PALETTE[3]);
        assert_eq!(pixels.len(), PIXEL_COUNT);
    }

    #[test]
    fn test_empty_stream_is_black() {
        let pixels = decode_rle(&[]);
        assert!(pixels.iter().all(|p| *p == [0, 0, 0]));
    }

    #[test]
    fn test_overlong_stream_is_truncated() {
        // 65 runs of 64 white pixels is one row more than the image holds.
        let encoded = vec![252u8; MAP_IMAGE_SIZE + 1];
        let pixels = decode_rle(&encoded);
        assert_eq!(pixels.len(), PIXEL_COUNT);
        assert!(pixels.iter().all(|p| *p == [255, 255, 255]));
    }

    #[test]
    fn test_image_is_flipped_to_top_down() {
        let image = world_map_image();
        assert_eq!(image.size, [MAP_IMAGE_SIZE, MAP_IMAGE_SIZE]);

        // The stream starts with Antarctic ice, which belongs at the bottom.
        let bottom_left = image.pixels[(MAP_IMAGE_SIZE - 1) * MAP_IMAGE_SIZE];
        assert_eq!(bottom_left.to_array(), [255, 255, 255, 255]);
        let top_left = image.pixels[0];
        assert_eq!(top_left.to_array(), [0, 0, 255, 255]);
    }
}
