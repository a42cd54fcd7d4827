use crate::math::{Point2, TOLERANCE};

/// A texture coordinate in strip units.
///
/// `u` counts along the strip in the same units as [`TextureStrip::width`],
/// `v` runs across it in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripCoord {
    pub u: f64,
    pub v: f64,
}

impl StripCoord {
    /// Creates a strip coordinate.
    #[must_use]
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }
}

/// The horizontal range of the strip claimed by one face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripSpan {
    pub start: f64,
    pub end: f64,
}

impl StripSpan {
    /// The smallest span covering every coordinate, or `None` if there are none.
    #[must_use]
    pub fn of(coords: &[StripCoord]) -> Option<Self> {
        let first = coords.first()?;
        let mut span = Self {
            start: first.u,
            end: first.u,
        };
        for c in &coords[1..] {
            span.start = span.start.min(c.u);
            span.end = span.end.max(c.u);
        }
        Some(span)
    }

    /// Horizontal extent of the span.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// A single-row texture image subdivided horizontally between faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureStrip {
    width: f64,
}

impl TextureStrip {
    /// Creates a strip `width` units wide.
    #[must_use]
    pub const fn new(width: f64) -> Self {
        Self { width }
    }

    /// Width of the strip in strip units.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns `true` if `coord` starts at or after the left edge of the
    /// strip and lies within its single row.
    ///
    /// The right-hand bound is checked on the whole layout, not per coordinate.
    #[must_use]
    pub fn accepts(&self, coord: StripCoord) -> bool {
        coord.u >= -TOLERANCE && (-TOLERANCE..=1.0 + TOLERANCE).contains(&coord.v)
    }

    /// Maps a strip coordinate to normalized `(u, v)` texture space.
    #[must_use]
    pub fn normalize(&self, coord: StripCoord) -> Point2 {
        Point2::new(coord.u / self.width, coord.v)
    }
}
