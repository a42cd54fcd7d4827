//! Geometry tables and immediate-mode draw emission for the five Platonic
//! solids: flat per-face normals, position-cycled vertex colors and a
//! per-solid texture strip layout.

pub mod catalog;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod math;
pub mod render;
pub mod view;

pub use catalog::Catalog;
pub use error::{PlatonicError, Result};
pub use geometry::{Solid, SolidKind};
pub use render::{
    draw, draw_cube, draw_dodecahedron, draw_icosahedron, draw_octahedron, draw_tetrahedron,
    RenderContext,
};
