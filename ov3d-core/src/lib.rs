/// OV3D Core Library - Mesh model and projection logic
///
/// This library provides the stateless core functionality for the viewer,
/// including OBJ parsing, view-state update rules, and the
/// transform-and-project pipeline. It has no UI dependencies.

pub mod geometry;
pub mod obj;
pub mod projection;
pub mod view;

// Re-export commonly used types
pub use geometry::{Face, Mesh};
pub use obj::{load_obj, load_obj_into, ObjError};
pub use projection::Projector;
pub use view::{RenderMode, ViewEvent, ViewState};
