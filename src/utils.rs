use std::ops::{Mul, Sub};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Position {
    type Output = Position;
    fn sub(self, rhs: Position) -> Self::Output {
        Position {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f32> for Position {
    type Output = Position;
    fn mul(self, factor: f32) -> Self::Output {
        Position {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Mul<f32> for Size {
    type Output = Size;
    fn mul(self, rhs: f32) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.x
            && position.x <= self.x + self.width
            && position.y >= self.y
            && position.y <= self.y + self.height
    }

    pub fn pos(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub fn set_pos(&mut self, pos: Position) {
        self.x = pos.x;
        self.y = pos.y;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MouseInfo {
    pub is_lmb_clicked: bool,
    pub mouse_pos: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_contains_is_inclusive_of_edges() {
        let rect = Rectangle::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Position::new(10.0, 10.0)));
        assert!(rect.contains(Position::new(30.0, 30.0)));
        assert!(rect.contains(Position::new(20.0, 15.0)));
        assert!(!rect.contains(Position::new(9.9, 15.0)));
        assert!(!rect.contains(Position::new(20.0, 30.1)));
    }

    #[test]
    fn rectangle_resize_keeps_position() {
        let mut rect = Rectangle::new(3.0, 4.0, 100.0, 70.0);
        rect.resize(800.0, 140.0);
        assert_eq!(rect.pos(), Position::new(3.0, 4.0));
        assert_eq!(rect.size(), Size::new(800.0, 140.0));
    }
}
