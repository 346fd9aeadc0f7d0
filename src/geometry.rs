//! Defines geometric primitives: points and bounding boxes.
//!
//! Layout uses a y-up coordinate system: the baseline of a box sits at `y = 0` of its position,
//! ascent goes towards positive y and descent towards negative y.

use std::ops::{Add, Mul, Sub};

use crate::dimensions::{units::{FUnit, Pt}, Unit};

/// A point in a 2D coordinate system, parameterized by unit type.
#[derive(Serialize, Deserialize)]
pub struct Point<U> {
    /// horizontal coordinate
    pub x : Unit<U>,
    /// vertical coordinate (increasing upwards)
    pub y : Unit<U>,
}

// NOTE: derive(Clone) would require `U: Clone` on the marker type
impl<U> Clone for Point<U> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<U> Copy for Point<U> {}

impl<U> PartialEq for Point<U> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<U> std::fmt::Debug for Point<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<U> Point<U> {
    /// The origin
    pub const ORIGIN : Self = Self { x: Unit::ZERO, y: Unit::ZERO };

    /// Creates a point from its coordinates
    pub const fn new(x : Unit<U>, y : Unit<U>) -> Self {
        Self { x, y }
    }

    /// Point moved by `dx` horizontally and `dy` vertically
    pub fn translate(self, dx : Unit<U>, dy : Unit<U>) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl<U> Add for Point<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<U> Sub for Point<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<U> Default for Point<U> {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// A generic bounding box for a 2D coordinate system, parameterized by unit type.
/// When used to store typographical measurements, i.e. a glyph's bounding box, it is assumed the origin is at (0, 0). In particular, the baseline on which glyphs sit is at y=0
/// This is relevant for [`BBox::typo_height`] and [`BBox::typo_depth`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BBox<U> {
    /// minimal x-value
    pub x_min : Unit<U>,
    /// maximal x-value
    pub x_max : Unit<U>,
    /// minimal y-value
    pub y_min : Unit<U>,
    /// maximal y-value
    pub y_max : Unit<U>,
}

/// Rectangle in points, as covered by a laid out box
pub type Rect = BBox<Pt>;

impl<U> BBox<U> {
    /// Creates new bbox from coordinates of extremal points
    /// Does not check the invariant that `x_min <= x_max` and `y_min <= y_max`
    pub fn new(x_min: Unit<U>, y_min: Unit<U>, x_max: Unit<U>, y_max: Unit<U>) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Creates a bbox, given a position for the bottom-left corner, width and height.
    pub fn from_dims(x : Unit<U>, y : Unit<U>, width : Unit<U>, height : Unit<U>) -> Self {
        Self {
            x_min : x, x_max : x + width,
            y_min : y, y_max : y + height,
        }
    }

    /// Same bbox, moved by `t_x` horizontally and `t_y` vertically
    pub fn translate(&self, t_x : Unit<U>, t_y : Unit<U>) -> Self {
        Self {
            x_min: self.x_min + t_x,
            x_max: self.x_max + t_x,
            y_min: self.y_min + t_y,
            y_max: self.y_max + t_y,
        }
    }

    /// Creates the smallest bbox containing `self` and `other`
    pub fn union(&self, other: &Self) -> Self {
        Self {
            x_min : Unit::min(self.x_min, other.x_min),
            x_max : Unit::max(self.x_max, other.x_max),
            y_min : Unit::min(self.y_min, other.y_min),
            y_max : Unit::max(self.y_max, other.y_max),
        }
    }

    /// Bottom-left corner
    pub fn origin(&self) -> Point<U> {
        Point::new(self.x_min, self.y_min)
    }

    /// Signed distance between the baseline and the highest points of the bounding box
    /// If the glyph extends above the baseline (and most do), this is positive.
    /// NB: this is not be the same as the "geometric height" of the bounding box (i.e. unsigned distance between top and bottom of box)
    pub fn typo_height(&self) -> Unit<U> {
        self.y_max
    }

    /// Signed distance between the baseline and the lowest points of the bounding box
    /// If the glyph extends below the baseline (and most do), this is negative.
    pub fn typo_depth(&self) -> Unit<U> {
        self.y_min
    }

    /// Width of the bounding box
    pub fn width(&self) -> Unit<U> {
        self.x_max - self.x_min
    }

    /// The geometric height: the unsigned distance between the top of the box and the bottom of the box
    pub fn total_height(&self) -> Unit<U> {
        self.y_max - self.y_min
    }

    /// Converts every coordinate with the ratio `scale`
    pub fn scale<V, W>(&self, scale : Unit<V>) -> BBox<W>
    where Unit<U> : Mul<Unit<V>, Output = Unit<W>>
    {
        BBox::<W> {
            x_min: self.x_min * scale,
            x_max: self.x_max * scale,
            y_min: self.y_min * scale,
            y_max: self.y_max * scale,
        }
    }
}

impl BBox<FUnit> {
    /// The empty box at the origin: what an unknown glyph measures
    pub const EMPTY : Self = Self {
        x_min: Unit::ZERO, x_max: Unit::ZERO,
        y_min: Unit::ZERO, y_max: Unit::ZERO,
    };
}
