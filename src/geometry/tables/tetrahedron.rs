use crate::geometry::{SolidKind, SolidTable, StripCoord, TextureStrip};

use super::{points, sc, ALTERNATING_4};

#[rustfmt::skip]
const VERTICES: [[f64; 3]; 4] = [
    [ 1.0,  1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [ 1.0, -1.0,  1.0],
    [-1.0,  1.0,  1.0],
];

const EDGES: [[usize; 2]; 6] = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]];

const FACES: [&[usize]; 4] = [&[0, 1, 2], &[0, 1, 3], &[0, 2, 3], &[1, 2, 3]];

#[rustfmt::skip]
const STRIP: [&[StripCoord]; 4] = [
    &[sc(  0.0, 0.0), sc( 50.0, 1.0), sc(100.0, 0.0)],
    &[sc(100.0, 0.0), sc(200.0, 0.0), sc(150.0, 1.0)],
    &[sc(200.0, 0.0), sc(300.0, 0.0), sc(250.0, 1.0)],
    &[sc(300.0, 0.0), sc(400.0, 0.0), sc(350.0, 1.0)],
];

const TEXTURE_WIDTH: f64 = 700.0;

pub(crate) fn table() -> SolidTable {
    SolidTable {
        kind: SolidKind::Tetrahedron,
        vertices: points(&VERTICES),
        edges: &EDGES,
        faces: &FACES,
        palette: &ALTERNATING_4,
        strip_coords: &STRIP,
        strip: TextureStrip::new(TEXTURE_WIDTH),
    }
}
