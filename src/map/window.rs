use serde::{Deserialize, Serialize};

/// Closed integer interval `[min, max]`. Empty when `min > max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[isize; 2]", into = "[isize; 2]")]
pub struct Interval {
    pub min: isize,
    pub max: isize,
}

impl Interval {
    pub const fn new(min: isize, max: isize) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        // Coordinates beyond isize::MAX cannot sit inside any interval.
        match isize::try_from(v) {
            Ok(v) => self.min <= v && v <= self.max,
            Err(_) => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl From<[isize; 2]> for Interval {
    fn from(bounds: [isize; 2]) -> Self {
        Self::new(bounds[0], bounds[1])
    }
}

impl From<Interval> for [isize; 2] {
    fn from(i: Interval) -> Self {
        [i.min, i.max]
    }
}

/// Axis-aligned rectangle with inclusive bounds on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub x: Interval,
    pub y: Interval,
}

impl Window {
    /// Window from `[min, max]` pairs for each axis.
    pub fn new(x: [isize; 2], y: [isize; 2]) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub const fn from_intervals(x: Interval, y: Interval) -> Self {
        Self { x, y }
    }

    /// Single-pixel window at `(x, y)`.
    pub fn pixel(x: isize, y: isize) -> Self {
        Self::new([x, x], [y, y])
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.x.contains(x) && self.y.contains(y)
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }
}
