use crate::geometry::{SolidKind, SolidTable, StripCoord, TextureStrip};
use crate::math::Point3;

use super::{golden_ratio, sc, ALTERNATING_5};

#[rustfmt::skip]
const EDGES: [[usize; 2]; 30] = [
    [0, 8],  [0, 12],  [0, 16],  [1, 8],   [1, 14],  [1, 18],
    [2, 10], [2, 13],  [2, 16],  [3, 10],  [3, 15],  [3, 18],
    [4, 9],  [4, 12],  [4, 17],  [5, 9],   [5, 14],  [5, 19],
    [6, 11], [6, 13],  [6, 17],  [7, 11],  [7, 15],  [7, 19],
    [8, 10], [9, 11],  [12, 14], [13, 15], [16, 17], [18, 19],
];

#[rustfmt::skip]
const FACES: [&[usize]; 12] = [
    &[0, 8, 10, 2, 16],
    &[0, 12, 14, 1, 8],
    &[0, 16, 17, 4, 12],
    &[1, 8, 10, 3, 18],
    &[1, 18, 19, 5, 14],
    &[3, 15, 7, 19, 18],
    &[2, 16, 17, 6, 13],
    &[7, 11, 6, 13, 15],
    &[7, 11, 9, 5, 19],
    &[4, 12, 14, 5, 9],
    &[4, 9, 11, 6, 17],
    &[15, 3, 10, 2, 13],
];

// Each pentagon sits in a 100-wide cell; 0.62 is the height of the
// shoulder vertices.
#[rustfmt::skip]
const STRIP: [&[StripCoord]; 12] = [
    &[sc(  20.0, 0.0), sc(  80.0, 0.0),  sc( 100.0, 0.62), sc(  50.0, 1.0), sc(   0.0, 0.62)],
    &[sc( 120.0, 0.0), sc( 180.0, 0.0),  sc( 200.0, 0.62), sc( 150.0, 1.0), sc( 100.0, 0.62)],
    &[sc( 220.0, 0.0), sc( 280.0, 0.0),  sc( 300.0, 0.62), sc( 250.0, 1.0), sc( 200.0, 0.62)],
    &[sc( 320.0, 0.0), sc( 300.0, 0.62), sc( 350.0, 1.0),  sc( 400.0, 0.62), sc( 380.0, 0.0)],
    &[sc( 420.0, 0.0), sc( 400.0, 0.62), sc( 450.0, 1.0),  sc( 500.0, 0.62), sc( 480.0, 0.0)],
    &[sc( 520.0, 0.0), sc( 500.0, 0.62), sc( 550.0, 1.0),  sc( 600.0, 0.62), sc( 580.0, 0.0)],
    &[sc( 620.0, 0.0), sc( 600.0, 0.62), sc( 650.0, 1.0),  sc( 700.0, 0.62), sc( 680.0, 0.0)],
    &[sc( 720.0, 0.0), sc( 700.0, 0.62), sc( 750.0, 1.0),  sc( 800.0, 0.62), sc( 780.0, 0.0)],
    &[sc( 820.0, 0.0), sc( 800.0, 0.62), sc( 850.0, 1.0),  sc( 900.0, 0.62), sc( 880.0, 0.0)],
    &[sc( 920.0, 0.0), sc( 900.0, 0.62), sc( 950.0, 1.0),  sc(1000.0, 0.62), sc( 980.0, 0.0)],
    &[sc(1020.0, 0.0), sc(1000.0, 0.62), sc(1050.0, 1.0),  sc(1100.0, 0.62), sc(1080.0, 0.0)],
    &[sc(1120.0, 0.0), sc(1100.0, 0.62), sc(1150.0, 1.0),  sc(1200.0, 0.62), sc(1180.0, 0.0)],
];

const TEXTURE_WIDTH: f64 = 1300.0;

/// Cube corners `(±k, ±k, ±k)` plus the three golden rectangles, with
/// `k = 1/√3` so every vertex lies on the unit sphere.
fn vertices() -> Vec<Point3> {
    let phi = golden_ratio();
    let k = 1.0 / 3f64.sqrt();
    let (short, long) = (k / phi, k * phi);

    vec![
        Point3::new(k, k, k),
        Point3::new(-k, k, k),
        Point3::new(k, -k, k),
        Point3::new(-k, -k, k),
        Point3::new(k, k, -k),
        Point3::new(-k, k, -k),
        Point3::new(k, -k, -k),
        Point3::new(-k, -k, -k),
        Point3::new(0.0, short, long),
        Point3::new(0.0, short, -long),
        Point3::new(0.0, -short, long),
        Point3::new(0.0, -short, -long),
        Point3::new(short, long, 0.0),
        Point3::new(short, -long, 0.0),
        Point3::new(-short, long, 0.0),
        Point3::new(-short, -long, 0.0),
        Point3::new(long, 0.0, short),
        Point3::new(long, 0.0, -short),
        Point3::new(-long, 0.0, short),
        Point3::new(-long, 0.0, -short),
    ]
}

pub(crate) fn table() -> SolidTable {
    SolidTable {
        kind: SolidKind::Dodecahedron,
        vertices: vertices(),
        edges: &EDGES,
        faces: &FACES,
        palette: &ALTERNATING_5,
        strip_coords: &STRIP,
        strip: TextureStrip::new(TEXTURE_WIDTH),
    }
}
