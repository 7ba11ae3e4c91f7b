// Touch input types fed to the gesture engine by the image viewer.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One active touch, in surface-local page pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: i32,
    pub page_x: f64,
    pub page_y: f64,
}

impl TouchPoint {
    pub fn new(id: i32, page_x: f64, page_y: f64) -> Self {
        Self { id, page_x, page_y }
    }

    pub fn point(&self) -> Point {
        Point::new(self.page_x, self.page_y)
    }

    /// Finite and non-negative. Anything else is dropped for the frame.
    pub fn is_valid(&self) -> bool {
        self.page_x.is_finite() && self.page_y.is_finite() && self.page_x >= 0.0 && self.page_y >= 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Terminate,
}

/// Collects the active touches of a browser touch event.
pub fn touches_from_event(e: &web_sys::TouchEvent) -> Vec<TouchPoint> {
    let list = e.touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| TouchPoint::new(t.identifier(), t.page_x() as f64, t.page_y() as f64))
        .collect()
}
