use super::HairstyleAdvisor;
use crate::analysis::AnalysisResult;
use crate::error::FailureKind;
use eframe::egui::{self, Align, Color32, RichText};

const ACCENT: Color32 = Color32::from_rgb(96, 165, 250);
const SUCCESS: Color32 = Color32::from_rgb(74, 222, 128);
const FAILURE: Color32 = Color32::from_rgb(220, 50, 50);

enum Action {
    Pick,
    Submit,
    Reset,
}

impl HairstyleAdvisor {
    pub fn render(&mut self, ctx: &egui::Context) {
        let mut action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            let footer_height = 40.0;
            let content_height = ui.available_height() - footer_height;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.heading(RichText::new("AI Hairstyle Recommender").color(ACCENT));
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new("Upload a photo to find the haircuts that suit your face shape")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });

                    ui.add_space(20.0);
                    action = self.render_upload(ui);

                    if let Some(result) = self.session.current_view().result {
                        ui.add_space(20.0);
                        render_result(ui, result);
                    }
                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(10.0);
                self.render_footer(ui);
            });
        });

        match action {
            Some(Action::Pick) => self.pick_photo(),
            Some(Action::Submit) => {
                self.session.submit();
            }
            Some(Action::Reset) => self.reset(),
            None => {}
        }
    }

    fn render_upload(&self, ui: &mut egui::Ui) -> Option<Action> {
        let view = self.session.current_view();
        let mut action = None;

        ui.group(|ui| {
            ui.horizontal(|ui| {
                if ui.button("📷 Choose Photo").clicked() {
                    action = Some(Action::Pick);
                }
                match &view.file {
                    Some(file) => ui.label(format!(
                        "{} ({}, {})",
                        file.name, file.mime_type, file.size
                    )),
                    None => ui.label("No photo chosen. You can also drop one here."),
                };
            });

            if let Some(preview) = view.preview {
                ui.add_space(10.0);
                ui.vertical_centered(|ui| match &preview.texture {
                    Some(texture) => {
                        ui.add(egui::Image::new(texture).max_size(self.preview_bounds));
                    }
                    None => {
                        ui.label(RichText::new("Preview not available").italics());
                    }
                });
            }

            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                let button = egui::Button::new(view.submit_label).min_size(egui::vec2(200.0, 40.0));
                if ui.add_enabled(view.submit_enabled, button).clicked() {
                    action = Some(Action::Submit);
                }
                if view.file.is_some() && ui.button("🗑 Clear").clicked() {
                    action = Some(Action::Reset);
                }
            });

            if let Some(failure) = view.failure {
                ui.add_space(5.0);
                ui.vertical_centered(|ui| {
                    let icon = match failure.kind {
                        FailureKind::Network => "📡",
                        FailureKind::Service => "⚠",
                        FailureKind::Internal => "❗",
                    };
                    ui.colored_label(FAILURE, format!("{} {}", icon, failure.message));
                });
            }
            if let Some(error) = &self.selection_error {
                ui.add_space(5.0);
                ui.vertical_centered(|ui| {
                    ui.colored_label(FAILURE, error);
                });
            }
        });

        action
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Analysis service:");
            if ui
                .add(
                    egui::Label::new(RichText::new(&self.service_url).color(ACCENT))
                        .sense(egui::Sense::click()),
                )
                .on_hover_text("Open the service API docs")
                .clicked()
            {
                let docs = format!("{}/docs", self.service_url.trim_end_matches('/'));
                if let Err(err) = open::that(&docs) {
                    tracing::warn!(url = %docs, error = %err, "could not open browser");
                }
            }
        });
    }
}

fn render_result(ui: &mut egui::Ui, result: &AnalysisResult) {
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(2.0, SUCCESS))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.heading("Face Shape:");
                ui.heading(RichText::new(&result.face_shape).color(SUCCESS));
            });
            ui.label(RichText::new(format!("\"{}\"", result.description)).italics());

            ui.add_space(10.0);
            ui.label(RichText::new("Recommended Styles:").strong());
            if result.recommended_styles.is_empty() {
                ui.label("No recommendations for this face shape.");
                return;
            }

            egui::Grid::new("recommended_styles")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for (index, style) in result.recommended_styles.iter().enumerate() {
                        ui.label(RichText::new(style).size(15.0));
                        if index % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });
        });
}
