//! Texture cache for the world map.
//!
//! The map image never changes, so it is decoded and uploaded on first use
//! and the handle is reused every frame. Day/night dimming is applied as a
//! tint at draw time rather than by re-uploading.

use eframe::egui::{self, TextureHandle, TextureId, TextureOptions};

use super::world_map_image;

/// Lazily uploaded map texture.
#[derive(Default)]
pub struct MapTextureCache {
    texture: Option<TextureHandle>,
}

impl MapTextureCache {
    pub fn new() -> Self {
        Self { texture: None }
    }

    /// Returns the map texture, uploading it on the first call.
    pub fn texture_id(&mut self, ctx: &egui::Context) -> TextureId {
        self.texture
            .get_or_insert_with(|| {
                let image = world_map_image();
                log::debug!(
                    "Uploading world map texture: {}x{}",
                    image.width(),
                    image.height()
                );
                // Nearest filtering keeps the 64x64 pixels crisp.
                ctx.load_texture("world_map", image, TextureOptions::NEAREST)
            })
            .id()
    }
}
