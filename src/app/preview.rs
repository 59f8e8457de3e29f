use crate::analysis::SelectedFile;
use crate::session::PreviewFactory;
use eframe::egui;
use tracing::warn;

/// Uploads a thumbnail of each selected photo as an egui texture.
pub struct TexturePreviews {
    ctx: egui::Context,
    max_edge: u32,
}

impl TexturePreviews {
    pub fn new(ctx: egui::Context, max_edge: u32) -> Self {
        Self { ctx, max_edge }
    }
}

/// A preview texture; egui frees it when the handle is dropped. `None` when
/// the photo could not be decoded.
pub struct PreviewTexture {
    pub texture: Option<egui::TextureHandle>,
}

impl PreviewFactory for TexturePreviews {
    type Handle = PreviewTexture;

    fn create(&mut self, file: &SelectedFile) -> PreviewTexture {
        match decode_thumbnail(file.bytes(), self.max_edge) {
            Ok(image) => PreviewTexture {
                texture: Some(self.ctx.load_texture(
                    format!("preview:{}", file.name),
                    image,
                    egui::TextureOptions::default(),
                )),
            },
            Err(err) => {
                warn!(file = %file.name, error = %err, "could not decode preview");
                PreviewTexture { texture: None }
            }
        }
    }
}

fn decode_thumbnail(bytes: &[u8], max_edge: u32) -> image::ImageResult<egui::ColorImage> {
    let image = image::load_from_memory(bytes)?;
    let thumb = if image.width() > max_edge || image.height() > max_edge {
        image.thumbnail(max_edge, max_edge)
    } else {
        image
    };
    let size = [thumb.width() as usize, thumb.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        &thumb.to_rgba8().into_raw(),
    ))
}
