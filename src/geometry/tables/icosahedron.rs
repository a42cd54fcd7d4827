use crate::geometry::{SolidKind, SolidTable, StripCoord, TextureStrip};
use crate::math::Point3;

use super::{golden_ratio, sc, ALTERNATING_4};

#[rustfmt::skip]
const EDGES: [[usize; 2]; 30] = [
    [0, 1],  [0, 2],  [0, 3],  [0, 4],   [0, 8],  [1, 4],
    [1, 6],  [1, 7],  [1, 8],  [2, 3],   [2, 8],  [2, 9],
    [2, 10], [3, 4],  [3, 5],  [3, 10],  [4, 5],  [4, 7],
    [5, 7],  [5, 10], [5, 11], [6, 7],   [6, 8],  [6, 9],
    [6, 11], [7, 11], [8, 9],  [9, 10],  [9, 11], [10, 11],
];

#[rustfmt::skip]
const FACES: [&[usize]; 20] = [
    &[0, 1, 8],   &[8, 2, 0],   &[0, 3, 4],   &[0, 4, 1],
    &[0, 2, 3],   &[1, 4, 7],   &[1, 6, 8],   &[11, 6, 9],
    &[7, 6, 1],   &[10, 3, 2],  &[2, 8, 9],   &[2, 9, 10],
    &[5, 4, 3],   &[10, 5, 3],  &[4, 5, 7],   &[5, 10, 11],
    &[11, 7, 5],  &[9, 8, 6],   &[6, 7, 11],  &[11, 10, 9],
];

#[rustfmt::skip]
const STRIP: [&[StripCoord]; 20] = [
    &[sc(   0.0, 0.0), sc(  50.0, 1.0), sc( 100.0, 0.0)],
    &[sc( 100.0, 0.0), sc( 150.0, 1.0), sc( 200.0, 0.0)],
    &[sc( 200.0, 0.0), sc( 250.0, 1.0), sc( 300.0, 0.0)],
    &[sc( 300.0, 0.0), sc( 350.0, 1.0), sc( 400.0, 0.0)],
    &[sc( 400.0, 0.0), sc( 450.0, 1.0), sc( 500.0, 0.0)],
    &[sc( 500.0, 0.0), sc( 550.0, 1.0), sc( 600.0, 0.0)],
    &[sc( 600.0, 0.0), sc( 650.0, 1.0), sc( 700.0, 0.0)],
    &[sc( 700.0, 0.0), sc( 750.0, 1.0), sc( 800.0, 0.0)],
    &[sc( 800.0, 0.0), sc( 850.0, 1.0), sc( 900.0, 0.0)],
    &[sc( 900.0, 0.0), sc( 950.0, 1.0), sc(1000.0, 0.0)],
    &[sc(1000.0, 0.0), sc(1050.0, 1.0), sc(1100.0, 0.0)],
    &[sc(1100.0, 0.0), sc(1150.0, 1.0), sc(1200.0, 0.0)],
    &[sc(1200.0, 0.0), sc(1250.0, 1.0), sc(1300.0, 0.0)],
    &[sc(1300.0, 0.0), sc(1350.0, 1.0), sc(1400.0, 0.0)],
    &[sc(1400.0, 0.0), sc(1450.0, 1.0), sc(1500.0, 0.0)],
    &[sc(1500.0, 0.0), sc(1550.0, 1.0), sc(1600.0, 0.0)],
    &[sc(1600.0, 0.0), sc(1650.0, 1.0), sc(1700.0, 0.0)],
    &[sc(1700.0, 0.0), sc(1750.0, 1.0), sc(1800.0, 0.0)],
    &[sc(1800.0, 0.0), sc(1850.0, 1.0), sc(1900.0, 0.0)],
    &[sc(1900.0, 0.0), sc(1950.0, 1.0), sc(2000.0, 0.0)],
];

const TEXTURE_WIDTH: f64 = 2100.0;

/// Three orthogonal golden rectangles `(0, ±k, ±φk)` and their cyclic
/// permutations, with `k = 1/√(1 + φ²)` so every vertex lies on the unit sphere.
fn vertices() -> Vec<Point3> {
    let phi = golden_ratio();
    let k = 1.0 / (1.0 + phi * phi).sqrt();
    let long = phi * k;

    vec![
        Point3::new(k, 0.0, long),
        Point3::new(-k, 0.0, long),
        Point3::new(long, k, 0.0),
        Point3::new(long, -k, 0.0),
        Point3::new(0.0, -long, k),
        Point3::new(0.0, -long, -k),
        Point3::new(-long, k, 0.0),
        Point3::new(-long, -k, 0.0),
        Point3::new(0.0, long, k),
        Point3::new(0.0, long, -k),
        Point3::new(k, 0.0, -long),
        Point3::new(-k, 0.0, -long),
    ]
}

pub(crate) fn table() -> SolidTable {
    SolidTable {
        kind: SolidKind::Icosahedron,
        vertices: vertices(),
        edges: &EDGES,
        faces: &FACES,
        palette: &ALTERNATING_4,
        strip_coords: &STRIP,
        strip: TextureStrip::new(TEXTURE_WIDTH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_on_unit_sphere() {
        for v in vertices() {
            assert!((v.coords.norm() - 1.0).abs() < 1e-12, "{v}");
        }
    }

    #[test]
    fn all_edges_have_equal_length() {
        let vs = vertices();
        let first = (vs[EDGES[0][1]] - vs[EDGES[0][0]]).norm();
        for [a, b] in EDGES {
            assert!(((vs[b] - vs[a]).norm() - first).abs() < 1e-12);
        }
    }
}
