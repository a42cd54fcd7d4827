use crate::geometry::{SolidKind, SolidTable, StripCoord, TextureStrip};

use super::{points, sc, ALTERNATING_4};

#[rustfmt::skip]
const VERTICES: [[f64; 3]; 8] = [
    [ 1.0, -1.0, -1.0],
    [ 1.0,  1.0, -1.0],
    [-1.0,  1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [ 1.0, -1.0,  1.0],
    [ 1.0,  1.0,  1.0],
    [-1.0, -1.0,  1.0],
    [-1.0,  1.0,  1.0],
];

#[rustfmt::skip]
const EDGES: [[usize; 2]; 12] = [
    [0, 1], [0, 3], [0, 4], [2, 1], [2, 3], [2, 7],
    [6, 3], [6, 4], [6, 7], [5, 1], [5, 4], [5, 7],
];

#[rustfmt::skip]
const FACES: [&[usize]; 6] = [
    &[0, 1, 2, 3], // -z
    &[3, 2, 7, 6], // -x
    &[6, 7, 5, 4], // +z
    &[4, 5, 1, 0], // +x
    &[1, 5, 7, 2], // +y
    &[4, 0, 3, 6], // -y
];

// Cells follow the order of the squares on the strip image, not face order.
#[rustfmt::skip]
const STRIP: [&[StripCoord]; 6] = [
    &[sc(  0.0, 0.0), sc(  0.0, 1.0), sc(100.0, 1.0), sc(100.0, 0.0)],
    &[sc(200.0, 0.0), sc(200.0, 1.0), sc(300.0, 1.0), sc(300.0, 0.0)],
    &[sc(500.0, 0.0), sc(500.0, 1.0), sc(600.0, 1.0), sc(600.0, 0.0)],
    &[sc(300.0, 0.0), sc(300.0, 1.0), sc(400.0, 1.0), sc(400.0, 0.0)],
    &[sc(100.0, 0.0), sc(100.0, 1.0), sc(200.0, 1.0), sc(200.0, 0.0)],
    &[sc(400.0, 0.0), sc(400.0, 1.0), sc(500.0, 1.0), sc(500.0, 0.0)],
];

const TEXTURE_WIDTH: f64 = 700.0;

pub(crate) fn table() -> SolidTable {
    SolidTable {
        kind: SolidKind::Cube,
        vertices: points(&VERTICES),
        edges: &EDGES,
        faces: &FACES,
        palette: &ALTERNATING_4,
        strip_coords: &STRIP,
        strip: TextureStrip::new(TEXTURE_WIDTH),
    }
}
