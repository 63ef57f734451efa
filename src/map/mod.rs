//! The world map texture: decoding and upload.

mod decode;
mod texture;

pub use decode::{decode_rle, world_map_image, MAP_IMAGE_SIZE, WORLD_MAP_RLE};
pub use texture::MapTextureCache;
