use crate::geometry::{SolidKind, SolidTable, StripCoord, TextureStrip};

use super::{points, sc, ALTERNATING_4};

#[rustfmt::skip]
const VERTICES: [[f64; 3]; 6] = [
    [ 1.0,  0.0,  0.0],
    [ 0.0, -1.0,  0.0],
    [-1.0,  0.0,  0.0],
    [ 0.0,  1.0,  0.0],
    [ 0.0,  0.0,  1.0],
    [ 0.0,  0.0, -1.0],
];

#[rustfmt::skip]
const EDGES: [[usize; 2]; 12] = [
    [0, 1], [0, 3], [0, 4], [0, 5], [1, 2], [1, 4],
    [1, 5], [2, 3], [2, 4], [2, 5], [3, 4], [3, 5],
];

#[rustfmt::skip]
const FACES: [&[usize]; 8] = [
    &[0, 1, 4], &[0, 1, 5], &[0, 3, 4], &[5, 3, 0],
    &[2, 1, 4], &[5, 1, 2], &[4, 3, 2], &[2, 3, 5],
];

#[rustfmt::skip]
const STRIP: [&[StripCoord]; 8] = [
    &[sc(  0.0, 0.0), sc( 50.0, 1.0), sc(100.0, 0.0)],
    &[sc(100.0, 0.0), sc(200.0, 0.0), sc(150.0, 1.0)],
    &[sc(200.0, 0.0), sc(300.0, 0.0), sc(250.0, 1.0)],
    &[sc(300.0, 0.0), sc(400.0, 0.0), sc(350.0, 1.0)],
    &[sc(400.0, 0.0), sc(500.0, 0.0), sc(450.0, 1.0)],
    &[sc(500.0, 0.0), sc(600.0, 0.0), sc(550.0, 1.0)],
    &[sc(600.0, 0.0), sc(700.0, 0.0), sc(650.0, 1.0)],
    &[sc(700.0, 0.0), sc(800.0, 0.0), sc(750.0, 1.0)],
];

const TEXTURE_WIDTH: f64 = 900.0;

pub(crate) fn table() -> SolidTable {
    SolidTable {
        kind: SolidKind::Octahedron,
        vertices: points(&VERTICES),
        edges: &EDGES,
        faces: &FACES,
        palette: &ALTERNATING_4,
        strip_coords: &STRIP,
        strip: TextureStrip::new(TEXTURE_WIDTH),
    }
}
