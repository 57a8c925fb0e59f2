/// Transform-and-project pipeline mapping model space to screen space
use nalgebra::{Point2, Point3};

use crate::geometry::{Face, Mesh};
use crate::view::ViewState;

/// Constant added to the rotated depth before the perspective divide.
pub const DEPTH_BIAS: f32 = 5.0;

/// Per-frame projection of model-space points into screen pixels.
///
/// Built once per redraw from the current view state and viewport size;
/// the rotation trigonometry and scale are precomputed so projecting a
/// vertex is a handful of multiplies.
pub struct Projector {
    sin_heading: f32,
    cos_heading: f32,
    sin_pitch: f32,
    cos_pitch: f32,
    scale: f32,
    center_x: f32,
    center_y: f32,
}

impl Projector {
    /// `extent` is the largest bounding-box dimension of the mesh being
    /// drawn (1.0 for an empty mesh), which normalizes the model to the
    /// viewport before the zoom factor applies.
    pub fn new(view: &ViewState, width: f32, height: f32, extent: f32) -> Self {
        let heading = view.heading.to_radians();
        let pitch = view.pitch.to_radians();
        Self {
            sin_heading: heading.sin(),
            cos_heading: heading.cos(),
            sin_pitch: pitch.sin(),
            cos_pitch: pitch.cos(),
            scale: width.min(height) / extent * 0.5 * view.zoom,
            center_x: width * 0.5 + view.pan.x,
            center_y: height * 0.5 + view.pan.y,
        }
    }

    /// Map one model-space point to screen coordinates.
    pub fn project(&self, point: &Point3<f32>) -> Point2<f32> {
        // Rotation about the vertical axis (heading)
        let x = point.x * self.cos_heading - point.z * self.sin_heading;
        let z = point.x * self.sin_heading + point.z * self.cos_heading;

        // Rotation about the horizontal axis (pitch), applied to the
        // already-rotated frame
        let y = point.y * self.cos_pitch - z * self.sin_pitch;
        let depth = point.y * self.sin_pitch + z * self.cos_pitch + DEPTH_BIAS;

        // Screen Y grows downward while model Y grows upward
        Point2::new(
            x * self.scale / depth + self.center_x,
            -y * self.scale / depth + self.center_y,
        )
    }

    /// Project every vertex of one face.
    ///
    /// Indices with no backing vertex are skipped, so a malformed face can
    /// lose points but never panic the renderer. Degenerate faces come back
    /// with fewer than three points and are drawn as-is.
    pub fn project_face(&self, mesh: &Mesh, face: &Face) -> Vec<Point2<f32>> {
        face.indices
            .iter()
            .filter_map(|&i| mesh.vertices.get(i))
            .map(|v| self.project(v))
            .collect()
    }
}
