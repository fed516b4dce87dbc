//! Geometry primitives shared by layout, hit-testing and window placement
//!
//! All rectangles are in global (screen) coordinates, logical pixels.

use serde::{Deserialize, Serialize};

use crate::edge::Axis;

/// A point in global coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Coordinate along an axis
    #[inline]
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn sub(&self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn distance(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A width/height pair
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn transposed(&self) -> Size {
        Size::new(self.height, self.width)
    }

    #[inline]
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Start coordinate along an axis
    #[inline]
    pub fn start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Length along an axis
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        self.size().along(axis)
    }

    #[inline]
    pub fn end(&self, axis: Axis) -> f32 {
        self.start(axis) + self.extent(axis)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Strict overlap test: rectangles that only touch do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x + self.width > other.x
            && other.x + other.width > self.x
            && self.y + self.height > other.y
            && other.y + other.height > self.y
    }

    pub fn moved_to(&self, origin: Point) -> Rect {
        Rect::new(origin.x, origin.y, self.width, self.height)
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Move this rectangle so it lies inside `bounds`.
    ///
    /// The size is kept. A rectangle larger than `bounds` is pinned to the
    /// bounds' top-left corner on the overflowing axis.
    pub fn clamp_inside(&self, bounds: &Rect) -> Rect {
        let x = if self.width >= bounds.width {
            bounds.x
        } else {
            self.x.clamp(bounds.x, bounds.right() - self.width)
        };
        let y = if self.height >= bounds.height {
            bounds.y
        } else {
            self.y.clamp(bounds.y, bounds.bottom() - self.height)
        };
        Rect::new(x, y, self.width, self.height)
    }

    pub fn shrink(&self, margins: &Margins) -> Rect {
        Rect::new(
            self.x + margins.left,
            self.y + margins.top,
            (self.width - margins.left - margins.right).max(0.0),
            (self.height - margins.top - margins.bottom).max(0.0),
        )
    }
}

/// Per-side margins (used for floating window resize handles)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margins {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}
