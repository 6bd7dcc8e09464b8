use crate::flags::{DebugFlag, ToggleStore};
use crate::surface::{Surface, BLUE, ORANGE, RED};
use crate::utils::{Position, Rectangle, Size};

/// Snapshot of one physics body, captured by the host inside its
/// entity-draw hook. At most one collision shape is visualized.
#[derive(Debug, Clone, Copy)]
pub struct BodyView {
    /// Bounding rectangle in world coordinates.
    pub bounds: Rectangle,
    /// First collision shape, relative to `position`.
    pub shape: Option<Rectangle>,
    pub position: Position,
    pub half_extents: Size,
    /// Velocity in half-extent units per frame.
    pub velocity: Position,
}

/// Per-body overlay: bounds and shape under the hit-box flag, the
/// velocity vector under the velocity flag. Does nothing when both flags
/// are clear, so hosts can call it unconditionally from their draw hook.
pub fn draw_body(surface: &mut dyn Surface, body: &BodyView, toggles: &ToggleStore) {
    if toggles.get(DebugFlag::HitBox) {
        surface.stroke_rect(body.bounds, ORANGE, 1.0);
        if let Some(shape) = body.shape {
            surface.stroke_rect(
                Rectangle::new(
                    body.position.x + shape.x,
                    body.position.y + shape.y,
                    shape.width,
                    shape.height,
                ),
                RED,
                1.0,
            );
        }
    }

    if toggles.get(DebugFlag::Velocity) {
        let center = Position::new(
            (body.position.x + body.half_extents.width).trunc(),
            (body.position.y + body.half_extents.height).trunc(),
        );
        let tip = Position::new(
            center.x + (body.velocity.x * body.half_extents.width).trunc(),
            center.y + (body.velocity.y * body.half_extents.height).trunc(),
        );
        surface.stroke_segment(center, tip, BLUE, 1.0);
    }
}
