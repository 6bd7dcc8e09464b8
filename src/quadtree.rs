use crate::surface::{Surface, RED};
use crate::utils::{Position, Rectangle};

const OCCUPANCY_ALPHA_DIVISOR: f32 = 16.0;
const MAX_NODE_ALPHA: f32 = 0.9;

/// Read-only view of one cell of the host's spatial-partition tree. The
/// host hands a fresh root to every draw call; the visualizer never
/// mutates or retains it, so the tree is free to change shape between
/// frames.
#[derive(Debug, Clone)]
pub struct SpatialNode {
    pub bounds: Rectangle,
    pub occupants: usize,
    pub nodes: Vec<SpatialNode>,
}

impl SpatialNode {
    pub fn new(bounds: Rectangle, occupants: usize) -> Self {
        Self {
            bounds,
            occupants,
            nodes: Vec::new(),
        }
    }

    pub fn with_nodes(bounds: Rectangle, occupants: usize, nodes: Vec<SpatialNode>) -> Self {
        Self {
            bounds,
            occupants,
            nodes,
        }
    }
}

/// Fill one rectangle per tree cell, depth-first pre-order, opacity
/// proportional to the cell's occupancy. The surface's global alpha is
/// restored before returning.
pub fn draw(surface: &mut dyn Surface, root: &SpatialNode, viewport_offset: Position) {
    let previous_alpha = surface.alpha();
    draw_node(surface, root, viewport_offset);
    surface.set_alpha(previous_alpha);
}

fn draw_node(surface: &mut dyn Surface, node: &SpatialNode, viewport_offset: Position) {
    let bounds = node.bounds;
    // bounds are clamped non-negative before the viewport shift
    let screen = Position::new(bounds.x.abs(), bounds.y.abs()) - viewport_offset;
    surface.set_alpha((node.occupants as f32 / OCCUPANCY_ALPHA_DIVISOR).clamp(0.0, MAX_NODE_ALPHA));
    surface.fill_rect(
        Rectangle::new(
            screen.x + 0.5,
            screen.y + 0.5,
            bounds.width,
            bounds.height,
        ),
        RED,
    );
    for child in &node.nodes {
        draw_node(surface, child, viewport_offset);
    }
}
