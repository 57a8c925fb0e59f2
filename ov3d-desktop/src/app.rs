//! Main application: window layout and widget wiring

use eframe::egui;
use ov3d_core::{Mesh, RenderMode, ViewEvent, ViewState};

use crate::viewport;

pub struct ViewerApp {
    mesh: Mesh,
    /// Largest bounding-box dimension, computed once per load.
    extent: f32,
    view: ViewState,
    model_path: String,
    load_error: Option<String>,
}

impl ViewerApp {
    pub fn new(mesh: Mesh, model_path: String, load_error: Option<String>) -> Self {
        let extent = mesh.extent();
        Self {
            mesh,
            extent,
            view: ViewState::new(),
            model_path,
            load_error,
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Heading slider, mode toggle, status readout ───────────
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut heading = self.view.heading;
                if ui
                    .add(egui::Slider::new(&mut heading, 0.0..=360.0).text("heading"))
                    .changed()
                {
                    self.view.apply(ViewEvent::SetHeading(heading));
                }

                let mode_label = match self.view.mode {
                    RenderMode::Filled => "Wireframe",
                    RenderMode::Wireframe => "Filled",
                };
                if ui.button(mode_label).clicked() {
                    self.view.apply(ViewEvent::ToggleMode);
                }

                if ui.button("Reset view").clicked() {
                    self.view = ViewState::new();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(error) = &self.load_error {
                        ui.colored_label(egui::Color32::LIGHT_RED, error);
                    } else {
                        ui.weak(format!(
                            "{}: {} vertices, {} faces",
                            self.model_path,
                            self.mesh.vertices.len(),
                            self.mesh.faces.len()
                        ));
                    }
                });
            });
        });

        // ── Pitch slider ──────────────────────────────────────────
        egui::SidePanel::right("pitch").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let mut pitch = self.view.pitch;
                if ui
                    .add(egui::Slider::new(&mut pitch, 0.0..=360.0).vertical())
                    .changed()
                {
                    self.view.apply(ViewEvent::SetPitch(pitch));
                }
            });
        });

        // ── Render viewport ───────────────────────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                viewport::show(ui, &self.mesh, self.extent, &mut self.view);
            });
    }
}
