mod solid;
pub mod tables;
pub mod texture_strip;

pub use solid::{Face, Solid, SolidTable};
pub use texture_strip::{StripCoord, StripSpan, TextureStrip};

use std::fmt;

/// The five supported Platonic solids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolidKind {
    /// Four triangles.
    Tetrahedron,
    /// Six quadrilaterals.
    Cube,
    /// Eight triangles.
    Octahedron,
    /// Twelve pentagons.
    Dodecahedron,
    /// Twenty triangles.
    Icosahedron,
}

impl SolidKind {
    /// Every solid, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Tetrahedron,
        Self::Cube,
        Self::Octahedron,
        Self::Dodecahedron,
        Self::Icosahedron,
    ];

    /// Position of this solid in [`SolidKind::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Tetrahedron => "tetrahedron",
            Self::Cube => "cube",
            Self::Octahedron => "octahedron",
            Self::Dodecahedron => "dodecahedron",
            Self::Icosahedron => "icosahedron",
        }
    }

    /// The authored (not yet validated) table for this solid.
    #[must_use]
    pub fn table(self) -> SolidTable {
        match self {
            Self::Tetrahedron => tables::tetrahedron::table(),
            Self::Cube => tables::cube::table(),
            Self::Octahedron => tables::octahedron::table(),
            Self::Dodecahedron => tables::dodecahedron::table(),
            Self::Icosahedron => tables::icosahedron::table(),
        }
    }
}

impl fmt::Display for SolidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A flat RGB color, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in `r, g, b` order.
    #[must_use]
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// A wireframe edge between two vertices, kept in authored order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Creates an edge from `a` to `b`.
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// The unordered identity of the edge: `(min, max)`.
    #[must_use]
    pub fn key(self) -> (usize, usize) {
        (self.a.min(self.b), self.a.max(self.b))
    }
}
