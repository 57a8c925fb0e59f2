/// OV3D Desktop Viewer
///
/// Loads an OBJ mesh and displays it in an interactive window.
/// Controls:
///   - Left drag or sliders: rotate (heading / pitch)
///   - Right drag: pan
///   - Mouse wheel: zoom
///   - Toggle button: filled / wireframe

mod app;
mod viewport;

use app::ViewerApp;
use ov3d_core::{load_obj, Mesh};

/// Model loaded when no path argument is given.
const DEFAULT_MODEL_PATH: &str = "model.obj";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ov3d=info".into()),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string());

    // A failed load is fatal to the load only: the window still opens and
    // shows the no-model message over an empty mesh.
    let (mesh, load_error) = match load_obj(&path) {
        Ok(mesh) => {
            tracing::info!(
                "Loaded {} vertices, {} faces from {path}",
                mesh.vertices.len(),
                mesh.faces.len()
            );
            (mesh, None)
        }
        Err(e) => {
            tracing::error!("Failed to load {path}: {e}");
            (Mesh::new(), Some(e.to_string()))
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("OBJ Viewer")
            .with_inner_size([800.0, 800.0])
            .with_min_inner_size([400.0, 400.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "ov3d",
        native_options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(mesh, path, load_error)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}
