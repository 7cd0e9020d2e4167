pub mod geometry;
pub mod scene;

pub use geometry::BoundingBox;
pub use scene::{ElementId, FocusOverlay, NodeKind, Scene, SceneElement};
