//! Geometric primitives for highlight regions and index layout.
//!
//! Coordinates are in page space with the origin at the top-left corner
//! and y growing downward, matching the order tokens are extracted in.

/// An axis-aligned rectangle in page space.
///
/// Used both for token bounding boxes reported by the text-extraction
/// collaborator and for highlight regions handed to the annotation
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X coordinate of the top-left corner
    pub x: f32,
    /// Y coordinate of the top-left corner
    pub y: f32,
    /// Width of the rectangle
    pub width: f32,
    /// Height of the rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexitint::geometry::Rect;
    ///
    /// let rect = Rect::new(72.0, 100.0, 40.0, 12.0);
    /// assert_eq!(rect.right(), 112.0);
    /// assert_eq!(rect.bottom(), 112.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The smallest rectangle covering both this one and `other`.
    ///
    /// Phrase matches spanning a line break come back as multiple
    /// quads; union gives the covering region when one is needed.
    pub fn union(&self, other: &Rect) -> Rect {
        let x0 = self.left().min(other.left());
        let y0 = self.top().min(other.top());
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rect::from_points(x0, y0, x1, y1)
    }
}
