//! Axis-aligned pixel regions with inclusive bounds.
//!
//! A `Region` always satisfies `x0 <= x1` and `y0 <= y1`; the constructors
//! return `None` rather than produce an inverted rectangle, so "nothing
//! found" is expressed as `Option<Region>` and never as a zero-size box.

use serde::{Deserialize, Serialize};

/// Integer bounds (inclusive) in image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 4]", into = "[usize; 4]")]
pub struct Region {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

impl Region {
    pub fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Option<Self> {
        (x0 <= x1 && y0 <= y1).then_some(Self { x0, y0, x1, y1 })
    }

    /// Single-pixel region.
    pub fn point(x: usize, y: usize) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x,
            y1: y,
        }
    }

    pub fn x0(&self) -> usize {
        self.x0
    }
    #[inline]
    pub fn y0(&self) -> usize {
        self.y0
    }
    #[inline]
    pub fn x1(&self) -> usize {
        self.x1
    }
    #[inline]
    pub fn y1(&self) -> usize {
        self.y1
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.x1 - self.x0 + 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.y1 - self.y0 + 1
    }

    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Integer centre (rounded down).
    pub fn center(&self) -> (usize, usize) {
        ((self.x0 + self.x1) / 2, (self.y0 + self.y1) / 2)
    }

    /// Intersect with a `width × height` canvas.
    pub fn clip(&self, width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 || self.x0 >= width || self.y0 >= height {
            return None;
        }
        Self::new(
            self.x0,
            self.y0,
            self.x1.min(width - 1),
            self.y1.min(height - 1),
        )
    }

    /// Smallest region containing both `self` and `other`.
    pub fn union(&self, other: &Region) -> Region {
        Region {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

impl TryFrom<[usize; 4]> for Region {
    type Error = String;

    fn try_from(v: [usize; 4]) -> Result<Self, Self::Error> {
        Region::new(v[0], v[1], v[2], v[3])
            .ok_or_else(|| format!("inverted region [{}, {}, {}, {}]", v[0], v[1], v[2], v[3]))
    }
}

impl From<Region> for [usize; 4] {
    fn from(r: Region) -> Self {
        [r.x0, r.y0, r.x1, r.y1]
    }
}
