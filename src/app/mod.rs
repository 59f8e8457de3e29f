mod preview;
mod ui;

use crate::analysis::{AnalysisClient, SelectedFile};
use crate::config::Config;
use crate::session::UploadSession;
use eframe::{egui, App};
pub use preview::TexturePreviews;
use std::path::Path;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::warn;

/// Extensions offered by the file picker. Advisory only; any file can be
/// dropped onto the window.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "gif"];

pub struct HairstyleAdvisor {
    session: UploadSession<AnalysisClient, TexturePreviews>,
    service_url: String,
    preview_bounds: egui::Vec2,
    selection_error: Option<String>,
}

impl HairstyleAdvisor {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &Config,
        client: AnalysisClient,
        runtime: Handle,
    ) -> Self {
        let previews = TexturePreviews::new(cc.egui_ctx.clone(), config.preview_size);
        Self {
            session: UploadSession::new(client, previews, runtime),
            service_url: config.service_url.clone(),
            preview_bounds: preview_bounds(config),
            selection_error: None,
        }
    }

    fn pick_photo(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file()
        {
            self.load_photo(&path);
        }
    }

    fn load_photo(&mut self, path: &Path) {
        let loaded = SelectedFile::from_path(path).and_then(|file| self.session.choose_file(file));
        match loaded {
            Ok(()) => self.selection_error = None,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not use photo");
                self.selection_error = Some(format!("{}: {}", path.display(), err));
            }
        }
    }

    fn reset(&mut self) {
        self.selection_error = None;
        self.session.reset();
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        let dropped: Vec<_> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        if let Some(path) = dropped.last() {
            self.load_photo(path);
        }

        if self.session.poll() {
            ctx.request_repaint();
        }
        if self.session.is_in_flight() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

/// On-screen box for the preview; the thumbnail is already scaled to fit it.
fn preview_bounds(config: &Config) -> egui::Vec2 {
    egui::Vec2::splat(config.preview_size as f32)
}

impl App for HairstyleAdvisor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
