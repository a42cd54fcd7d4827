//! Authored geometry of the five solids.
//!
//! Vertex positions, wireframe edges, face polygons, palettes and texture
//! strip layouts exactly as drawn. Face windings are not consistent across
//! tables; [`Solid::build`](super::Solid::build) orients the normals.

pub mod cube;
pub mod dodecahedron;
pub mod icosahedron;
pub mod octahedron;
pub mod tetrahedron;

use crate::math::Point3;

use super::{Color, StripCoord};

/// Red/blue alternation shared by the triangle and quad solids.
pub(crate) const ALTERNATING_4: [Color; 4] = [Color::RED, Color::BLUE, Color::RED, Color::BLUE];

/// Red/blue alternation for pentagons.
pub(crate) const ALTERNATING_5: [Color; 5] = [
    Color::RED,
    Color::BLUE,
    Color::RED,
    Color::BLUE,
    Color::RED,
];

/// Width of the strip cell claimed by each face.
pub const CELL_WIDTH: f64 = 100.0;

pub(crate) const fn sc(u: f64, v: f64) -> StripCoord {
    StripCoord::new(u, v)
}

pub(crate) fn points(coords: &[[f64; 3]]) -> Vec<Point3> {
    coords.iter().map(|&[x, y, z]| Point3::new(x, y, z)).collect()
}

/// The golden ratio, `(1 + √5) / 2`.
#[must_use]
pub fn golden_ratio() -> f64 {
    (1.0 + 5f64.sqrt()) / 2.0
}
