use crate::utils::{Position, Rectangle, Size};

pub type Rgba = [f32; 4];

pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];
pub const RED: Rgba = [0.86, 0.20, 0.18, 1.0];
pub const ORANGE: Rgba = [0.95, 0.60, 0.10, 1.0];
pub const BLUE: Rgba = [0.20, 0.35, 0.90, 1.0];
pub const LIGHT_BLUE: Rgba = [0.60, 0.80, 0.95, 1.0];

/// The slice of the host renderer the overlay needs. The host's own
/// rasterizer implements this for the dedicated panel surface; the
/// overlay never draws through anything else.
///
/// `set_alpha` sets the global alpha applied to subsequent commands;
/// callers that change it are expected to restore the previous value.
pub trait Surface {
    fn size(&self) -> Size;
    fn alpha(&self) -> f32;
    fn set_alpha(&mut self, alpha: f32);
    fn fill_rect(&mut self, rect: Rectangle, color: Rgba);
    fn stroke_rect(&mut self, rect: Rectangle, color: Rgba, thickness: f32);
    fn stroke_segment(&mut self, from: Position, to: Position, color: Rgba, thickness: f32);
    fn draw_text(&mut self, text: &str, pos: Position, color: Rgba, scale: f32);
    fn measure_text(&self, text: &str, scale: f32) -> f32;
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rectangle,
        color: Rgba,
        alpha: f32,
    },
    StrokeRect {
        rect: Rectangle,
        color: Rgba,
        alpha: f32,
    },
    Segment {
        from: Position,
        to: Position,
        color: Rgba,
        alpha: f32,
    },
    Text {
        text: String,
        pos: Position,
        color: Rgba,
        alpha: f32,
    },
}

/// Surface that records every command instead of rasterizing. Used by the
/// test suites and by headless hosts; text metrics assume a fixed-advance
/// font, which is also what the panel's layout was designed around.
pub struct RecordingSurface {
    size: Size,
    alpha: f32,
    char_advance: f32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            alpha: 1.0,
            char_advance: 6.0,
            ops: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Recorded text commands, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn alpha(&self) -> f32 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Rgba) {
        self.ops.push(DrawOp::FillRect {
            rect,
            color,
            alpha: self.alpha,
        });
    }

    fn stroke_rect(&mut self, rect: Rectangle, color: Rgba, _thickness: f32) {
        self.ops.push(DrawOp::StrokeRect {
            rect,
            color,
            alpha: self.alpha,
        });
    }

    fn stroke_segment(&mut self, from: Position, to: Position, color: Rgba, _thickness: f32) {
        self.ops.push(DrawOp::Segment {
            from,
            to,
            color,
            alpha: self.alpha,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Position, color: Rgba, _scale: f32) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            pos,
            color,
            alpha: self.alpha,
        });
    }

    fn measure_text(&self, text: &str, scale: f32) -> f32 {
        text.chars().count() as f32 * self.char_advance * scale
    }
}
