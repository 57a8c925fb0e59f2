/// View state and the input-event rules that mutate it
use nalgebra::Vector2;

/// Degrees of rotation per pixel of primary drag.
const DRAG_SENSITIVITY: f32 = 0.5;

/// Zoom factor bounds.
pub const ZOOM_MIN: f32 = 0.1;
pub const ZOOM_MAX: f32 = 5.0;

/// How a face is drawn: solid fill or outline only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Filled,
    Wireframe,
}

impl RenderMode {
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Filled => RenderMode::Wireframe,
            RenderMode::Wireframe => RenderMode::Filled,
        }
    }
}

/// A discrete input event consumed before the next redraw.
///
/// All view-state mutation flows through these; the renderer only ever
/// reads the state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    /// Primary-button drag delta in pixels.
    Rotate { dx: f32, dy: f32 },
    /// Secondary-button drag delta in pixels.
    Pan { dx: f32, dy: f32 },
    /// Wheel notches; positive zooms in.
    Zoom { notches: i32 },
    /// Slider-driven heading, degrees.
    SetHeading(f32),
    /// Slider-driven pitch, degrees.
    SetPitch(f32),
    /// Flip filled <-> wireframe.
    ToggleMode,
}

/// The complete per-frame view configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Rotation about the vertical axis, degrees. Wrapped with a truncating
    /// modulo, so transient negative values are representable.
    pub heading: f32,
    /// Rotation about the horizontal axis, degrees, clamped to [0, 360].
    pub pitch: f32,
    /// Screen-pixel translation of the projection center, unclamped.
    pub pan: Vector2<f32>,
    /// Multiplier on the extent-normalized scale, within [ZOOM_MIN, ZOOM_MAX].
    pub zoom: f32,
    pub mode: RenderMode,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            heading: 180.0,
            pitch: 180.0,
            pan: Vector2::zeros(),
            zoom: 1.0,
            mode: RenderMode::Filled,
        }
    }

    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::Rotate { dx, dy } => {
                self.heading = (self.heading + dx * DRAG_SENSITIVITY) % 360.0;
                self.pitch = (self.pitch + dy * DRAG_SENSITIVITY).clamp(0.0, 360.0);
            }
            ViewEvent::Pan { dx, dy } => {
                self.pan.x += dx;
                self.pan.y += dy;
            }
            ViewEvent::Zoom { notches } => {
                // Clamp after each notch, matching one wheel click at a time
                for _ in 0..notches.abs() {
                    let factor = if notches > 0 { 1.1 } else { 0.9 };
                    self.zoom = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
                }
            }
            ViewEvent::SetHeading(deg) => self.heading = deg,
            ViewEvent::SetPitch(deg) => self.pitch = deg,
            ViewEvent::ToggleMode => self.mode = self.mode.toggled(),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotate_scales_drag_delta() {
        let mut view = ViewState::new();
        view.apply(ViewEvent::Rotate { dx: 10.0, dy: -4.0 });
        assert_relative_eq!(view.heading, 185.0);
        assert_relative_eq!(view.pitch, 178.0);
    }

    #[test]
    fn test_heading_wraps_past_360() {
        let mut view = ViewState::new();
        view.heading = 350.0;
        view.apply(ViewEvent::Rotate { dx: 40.0, dy: 0.0 });
        assert_relative_eq!(view.heading, 10.0);
    }

    #[test]
    fn test_heading_wrap_preserves_sign() {
        let mut view = ViewState::new();
        view.heading = 10.0;
        view.apply(ViewEvent::Rotate { dx: -60.0, dy: 0.0 });
        // Truncating modulo leaves a transient negative value
        assert_relative_eq!(view.heading, -20.0);
    }

    #[test]
    fn test_pitch_clamps_to_range() {
        let mut view = ViewState::new();
        view.pitch = 359.0;
        view.apply(ViewEvent::Rotate { dx: 0.0, dy: 10.0 });
        assert_relative_eq!(view.pitch, 360.0);
        view.apply(ViewEvent::Rotate { dx: 0.0, dy: -1000.0 });
        assert_relative_eq!(view.pitch, 0.0);
    }

    #[test]
    fn test_pan_accumulates_unclamped() {
        let mut view = ViewState::new();
        view.apply(ViewEvent::Pan { dx: 3.0, dy: -7.0 });
        view.apply(ViewEvent::Pan { dx: 10_000.0, dy: 0.0 });
        assert_relative_eq!(view.pan.x, 10_003.0);
        assert_relative_eq!(view.pan.y, -7.0);
    }

    #[test]
    fn test_zoom_in_converges_to_max() {
        let mut view = ViewState::new();
        for _ in 0..100 {
            view.apply(ViewEvent::Zoom { notches: 1 });
        }
        assert_relative_eq!(view.zoom, ZOOM_MAX);
        view.apply(ViewEvent::Zoom { notches: 1 });
        assert_relative_eq!(view.zoom, ZOOM_MAX);
    }

    #[test]
    fn test_zoom_out_converges_to_min() {
        let mut view = ViewState::new();
        for _ in 0..100 {
            view.apply(ViewEvent::Zoom { notches: -1 });
        }
        assert_relative_eq!(view.zoom, ZOOM_MIN);
    }

    #[test]
    fn test_mode_toggle_round_trips() {
        let mut view = ViewState::new();
        assert_eq!(view.mode, RenderMode::Filled);
        view.apply(ViewEvent::ToggleMode);
        assert_eq!(view.mode, RenderMode::Wireframe);
        view.apply(ViewEvent::ToggleMode);
        assert_eq!(view.mode, RenderMode::Filled);
    }
}
