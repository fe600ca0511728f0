use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn plus(&self, coord: &Vector2) -> Self {
        Self {
            x: self.x + coord.x,
            y: self.y + coord.y,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Axis aligned rectangle in screen pixels, with `y` growing downwards
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(position: Vector2, w: f64, h: f64) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w,
            h,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// Strict overlap test, rectangles that only share an edge do not collide
pub fn rect_rect_collision(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect { x, y, w, h }
    }

    #[test]
    fn overlapping_rects_collide() {
        let tank = rect(100.0, 100.0, 80.0, 50.0);
        assert!(rect_rect_collision(&rect(95.0, 120.0, 10.0, 10.0), &tank));
        assert!(rect_rect_collision(&tank, &rect(95.0, 120.0, 10.0, 10.0)));
        assert!(rect_rect_collision(&rect(120.0, 110.0, 10.0, 10.0), &tank));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let tank = rect(100.0, 100.0, 80.0, 50.0);
        // left, right, top and bottom edges
        assert!(!rect_rect_collision(&rect(90.0, 120.0, 10.0, 10.0), &tank));
        assert!(!rect_rect_collision(&rect(180.0, 120.0, 10.0, 10.0), &tank));
        assert!(!rect_rect_collision(&rect(120.0, 90.0, 10.0, 10.0), &tank));
        assert!(!rect_rect_collision(&rect(120.0, 150.0, 10.0, 10.0), &tank));
    }

    #[test]
    fn separated_rects_do_not_collide() {
        let tank = rect(100.0, 100.0, 80.0, 50.0);
        assert!(!rect_rect_collision(&rect(0.0, 0.0, 10.0, 10.0), &tank));
        assert!(!rect_rect_collision(&rect(120.0, 300.0, 10.0, 10.0), &tank));
    }

    #[test]
    fn vector_math() {
        let v = Vector2::new(1.0, -2.0).plus(&Vector2::new(3.0, 4.0)).scale(0.5);
        assert_eq!(v, Vector2::new(2.0, 1.0));
        assert_eq!(Vector2::zero(), Vector2::default());
    }
}
