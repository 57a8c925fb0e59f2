//! Render viewport: pointer input translation and polygon painting

use eframe::egui::{self, Color32, Pos2, Sense, Shape, Stroke};
use ov3d_core::{Mesh, Projector, RenderMode, ViewEvent, ViewState};

const BACKGROUND: Color32 = Color32::from_rgb(12, 12, 16);
const FOREGROUND: Color32 = Color32::from_rgb(210, 210, 215);
const WIREFRAME_WIDTH: f32 = 1.0;

pub fn show(ui: &mut egui::Ui, mesh: &Mesh, extent: f32, view: &mut ViewState) {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());

    // Pointer input becomes view events, applied before this frame's paint
    if response.dragged_by(egui::PointerButton::Primary) {
        let delta = response.drag_delta();
        view.apply(ViewEvent::Rotate {
            dx: delta.x,
            dy: delta.y,
        });
    }
    if response.dragged_by(egui::PointerButton::Secondary) {
        let delta = response.drag_delta();
        view.apply(ViewEvent::Pan {
            dx: delta.x,
            dy: delta.y,
        });
    }
    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            let notches = if scroll > 0.0 { 1 } else { -1 };
            view.apply(ViewEvent::Zoom { notches });
        }
    }

    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, BACKGROUND);

    if mesh.is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "no model loaded",
            egui::FontId::proportional(16.0),
            FOREGROUND,
        );
        return;
    }

    // Full recomputation over all faces, drawn in mesh order
    let projector = Projector::new(view, rect.width(), rect.height(), extent);
    for face in &mesh.faces {
        let points: Vec<Pos2> = projector
            .project_face(mesh, face)
            .into_iter()
            .map(|p| rect.left_top() + egui::vec2(p.x, p.y))
            .collect();
        if points.is_empty() {
            continue;
        }
        match view.mode {
            RenderMode::Filled => {
                painter.add(Shape::convex_polygon(points, FOREGROUND, Stroke::NONE));
            }
            RenderMode::Wireframe => {
                painter.add(Shape::closed_line(
                    points,
                    Stroke::new(WIREFRAME_WIDTH, FOREGROUND),
                ));
            }
        }
    }
}
