use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::error::TableError;
use crate::math::{
    centroid, distance_to_plane, face_normal, Point2, Point3, Vector3, PLANARITY_TOLERANCE,
    TOLERANCE,
};

use super::tables::CELL_WIDTH;
use super::texture_strip::{StripCoord, StripSpan, TextureStrip};
use super::{Color, Edge, SolidKind};

/// Authored description of a solid, before validation.
///
/// Faces are ordered vertex-index polygons. `strip_coords` holds one
/// texture-coordinate tuple per face, parallel to the face's vertex list.
#[derive(Debug, Clone)]
pub struct SolidTable {
    pub kind: SolidKind,
    pub vertices: Vec<Point3>,
    pub edges: &'static [[usize; 2]],
    pub faces: &'static [&'static [usize]],
    pub palette: &'static [Color],
    pub strip_coords: &'static [&'static [StripCoord]],
    pub strip: TextureStrip,
}

/// A planar polygon of a solid together with its flat-shading attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    indices: Vec<usize>,
    normal: Vector3,
    reversed: bool,
    tex_coords: Vec<Point2>,
    span: StripSpan,
}

impl Face {
    /// Vertex indices in authored (emission) order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of vertices of the polygon.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.indices.len()
    }

    /// Outward unit normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// `true` if the authored winding is clockwise seen from outside, so the
    /// raw winding normal was negated.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Normalized texture coordinates, one per vertex position.
    #[must_use]
    pub fn tex_coords(&self) -> &[Point2] {
        &self.tex_coords
    }

    /// Portion of the texture strip claimed by this face, in strip units.
    #[must_use]
    pub fn span(&self) -> StripSpan {
        self.span
    }
}

/// A validated Platonic solid, ready for draw emission.
///
/// Built once from a [`SolidTable`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Solid {
    kind: SolidKind,
    vertices: Vec<Point3>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
    palette: Vec<Color>,
    strip: TextureStrip,
    strip_extent: f64,
    centroid: Point3,
}

impl Solid {
    /// Validates an authored table and derives per-face normals and
    /// normalized texture coordinates.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] describing the first defect found: an index
    /// out of range, a duplicate or missing edge, a degenerate or non-planar
    /// face, or a texture layout that does not tile its strip.
    pub fn build(table: &SolidTable) -> Result<Self, TableError> {
        let kind = table.kind;
        let center = centroid(&table.vertices).ok_or(TableError::Empty {
            solid: kind,
            what: "vertices",
        })?;
        if table.faces.is_empty() {
            return Err(TableError::Empty {
                solid: kind,
                what: "faces",
            });
        }
        if table.palette.is_empty() {
            return Err(TableError::EmptyPalette { solid: kind });
        }

        let edges = collect_edges(table)?;
        let mut usage: HashMap<(usize, usize), usize> =
            edges.iter().map(|e| (e.key(), 0)).collect();

        let mut faces = Vec::with_capacity(table.faces.len());
        for (index, &indices) in table.faces.iter().enumerate() {
            check_face_indices(table, index, indices, &mut usage)?;
            let (normal, reversed) = oriented_normal(table, index, indices, &center)?;
            let coords = table.strip_coords.get(index).copied().unwrap_or(&[]);
            let (tex_coords, span) = layout_face(table, index, indices.len(), coords)?;
            faces.push(Face {
                indices: indices.to_vec(),
                normal,
                reversed,
                tex_coords,
                span,
            });
        }
        if let Some(extra) = table.strip_coords.get(faces.len()) {
            return Err(TableError::TexCoordCount {
                solid: kind,
                face: faces.len(),
                expected: 0,
                found: extra.len(),
            });
        }

        for edge in &edges {
            let count = usage.get(&edge.key()).copied().unwrap_or(0);
            if count != 2 {
                return Err(TableError::EdgeUsage {
                    solid: kind,
                    a: edge.a,
                    b: edge.b,
                    count,
                });
            }
        }

        let strip_extent = check_strip_tiling(kind, &faces, &table.strip)?;

        debug!(
            solid = %kind,
            vertices = table.vertices.len(),
            edges = edges.len(),
            faces = faces.len(),
            reversed = faces.iter().filter(|f| f.reversed).count(),
            "validated solid table"
        );

        Ok(Self {
            kind,
            vertices: table.vertices.clone(),
            edges,
            faces,
            palette: table.palette.to_vec(),
            strip: table.strip,
            strip_extent,
            centroid: center,
        })
    }

    /// Which solid this is.
    #[must_use]
    pub fn kind(&self) -> SolidKind {
        self.kind
    }

    /// Object-space vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Wireframe edges, each listed once.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Faces in authored order.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The color palette indexed by vertex-within-face position.
    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Flat color for the vertex at `position` within any face.
    ///
    /// The palette cycles, so the color depends on the position alone and
    /// not on which face is drawn.
    #[must_use]
    pub fn color_at(&self, position: usize) -> &Color {
        &self.palette[position % self.palette.len()]
    }

    /// The texture strip the faces are laid out on.
    #[must_use]
    pub fn strip(&self) -> &TextureStrip {
        &self.strip
    }

    /// Strip units covered by the face layout, starting at 0.
    #[must_use]
    pub fn strip_extent(&self) -> f64 {
        self.strip_extent
    }

    /// Centroid of the vertex set.
    #[must_use]
    pub fn centroid(&self) -> &Point3 {
        &self.centroid
    }

    /// Centroid of one face's vertices, or `None` if `face` is out of range.
    #[must_use]
    pub fn face_centroid(&self, face: usize) -> Option<Point3> {
        let face = self.faces.get(face)?;
        centroid(face.indices.iter().map(|&i| &self.vertices[i]))
    }
}

/// Checks the edge list and converts it to [`Edge`]s in authored order.
fn collect_edges(table: &SolidTable) -> Result<Vec<Edge>, TableError> {
    let kind = table.kind;
    let n = table.vertices.len();
    if table.edges.is_empty() {
        return Err(TableError::Empty {
            solid: kind,
            what: "edges",
        });
    }

    let mut seen = HashSet::with_capacity(table.edges.len());
    let mut edges = Vec::with_capacity(table.edges.len());
    for (index, &[a, b]) in table.edges.iter().enumerate() {
        for vertex in [a, b] {
            if vertex >= n {
                return Err(TableError::VertexOutOfRange {
                    solid: kind,
                    owner: format!("edge {index}"),
                    index: vertex,
                    len: n,
                });
            }
        }
        if a == b {
            return Err(TableError::DegenerateEdge {
                solid: kind,
                edge: index,
                vertex: a,
            });
        }
        let edge = Edge::new(a, b);
        if !seen.insert(edge.key()) {
            return Err(TableError::DuplicateEdge { solid: kind, a, b });
        }
        edges.push(edge);
    }
    Ok(edges)
}

/// Bounds, arity and boundary checks for one face. Counts each boundary
/// edge in `usage`.
fn check_face_indices(
    table: &SolidTable,
    face: usize,
    indices: &[usize],
    usage: &mut HashMap<(usize, usize), usize>,
) -> Result<(), TableError> {
    let kind = table.kind;
    let n = table.vertices.len();
    if indices.len() < 3 {
        return Err(TableError::FaceTooSmall {
            solid: kind,
            face,
            len: indices.len(),
        });
    }

    let mut seen = HashSet::with_capacity(indices.len());
    for &vertex in indices {
        if vertex >= n {
            return Err(TableError::VertexOutOfRange {
                solid: kind,
                owner: format!("face {face}"),
                index: vertex,
                len: n,
            });
        }
        if !seen.insert(vertex) {
            return Err(TableError::RepeatedVertex {
                solid: kind,
                face,
                vertex,
            });
        }
    }

    for (i, &a) in indices.iter().enumerate() {
        let b = indices[(i + 1) % indices.len()];
        let Some(count) = usage.get_mut(&Edge::new(a, b).key()) else {
            return Err(TableError::MissingEdge {
                solid: kind,
                face,
                a,
                b,
            });
        };
        *count += 1;
    }
    Ok(())
}

/// Winding normal of a face, negated if it points toward the solid centroid.
///
/// Returns the outward normal and whether it was negated.
fn oriented_normal(
    table: &SolidTable,
    face: usize,
    indices: &[usize],
    solid_center: &Point3,
) -> Result<(Vector3, bool), TableError> {
    let kind = table.kind;
    let v = |position: usize| &table.vertices[indices[position]];

    let normal = face_normal(v(0), v(1), v(2))
        .map_err(|_| TableError::DegenerateNormal { solid: kind, face })?;

    for &vertex in &indices[3..] {
        let distance = distance_to_plane(&table.vertices[vertex], v(0), &normal);
        if distance.abs() > PLANARITY_TOLERANCE {
            return Err(TableError::NonPlanarFace {
                solid: kind,
                face,
                vertex,
                distance,
            });
        }
    }

    let face_center = centroid(indices.iter().map(|&i| &table.vertices[i])).ok_or(
        TableError::FaceTooSmall {
            solid: kind,
            face,
            len: 0,
        },
    )?;
    let outward = (face_center - solid_center).dot(&normal);
    if outward.abs() < TOLERANCE {
        return Err(TableError::NormalThroughCentroid { solid: kind, face });
    }
    if outward < 0.0 {
        trace!(solid = %kind, face, "authored winding is inward, negating normal");
        return Ok((-normal, true));
    }
    Ok((normal, false))
}

/// Normalizes one face's strip coordinates and measures its span, which
/// must be exactly one strip cell wide.
fn layout_face(
    table: &SolidTable,
    face: usize,
    arity: usize,
    coords: &[StripCoord],
) -> Result<(Vec<Point2>, StripSpan), TableError> {
    let kind = table.kind;
    if coords.len() != arity {
        return Err(TableError::TexCoordCount {
            solid: kind,
            face,
            expected: arity,
            found: coords.len(),
        });
    }
    if let Some(c) = coords.iter().find(|&&c| !table.strip.accepts(c)) {
        return Err(TableError::TexCoordOutOfRange {
            solid: kind,
            face,
            u: c.u,
            v: c.v,
        });
    }
    let span = StripSpan::of(coords).ok_or(TableError::TexCoordCount {
        solid: kind,
        face,
        expected: arity,
        found: 0,
    })?;
    if (span.width() - CELL_WIDTH).abs() > TOLERANCE {
        return Err(TableError::SpanWidth {
            solid: kind,
            face,
            width: span.width(),
        });
    }
    let tex_coords = coords.iter().map(|&c| table.strip.normalize(c)).collect();
    Ok((tex_coords, span))
}

/// Verifies that the face spans tile `[0, extent]` without gaps or overlap
/// and that the extent fits on the strip. Returns the extent.
fn check_strip_tiling(
    kind: SolidKind,
    faces: &[Face],
    strip: &TextureStrip,
) -> Result<f64, TableError> {
    let mut order: Vec<usize> = (0..faces.len()).collect();
    order.sort_by(|&a, &b| faces[a].span.start.total_cmp(&faces[b].span.start));

    let mut cursor = 0.0;
    for face in order {
        let span = faces[face].span;
        if (span.start - cursor).abs() > TOLERANCE {
            return Err(TableError::StripGap {
                solid: kind,
                face,
                start: span.start,
                expected: cursor,
            });
        }
        cursor = span.end;
    }

    if cursor > strip.width() + TOLERANCE {
        return Err(TableError::StripOverflow {
            solid: kind,
            extent: cursor,
            width: strip.width(),
        });
    }
    Ok(cursor)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const RB: [Color; 2] = [Color::RED, Color::BLUE];

    // A small right-handed tetrahedron with consistent outward winding.
    const EDGES: [[usize; 2]; 6] = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]];
    const FACES: [&[usize]; 4] = [&[0, 2, 1], &[0, 1, 3], &[0, 3, 2], &[1, 2, 3]];
    const STRIP: [&[StripCoord]; 4] = [
        &[sc(0.0, 0.0), sc(50.0, 1.0), sc(100.0, 0.0)],
        &[sc(100.0, 0.0), sc(150.0, 1.0), sc(200.0, 0.0)],
        &[sc(200.0, 0.0), sc(250.0, 1.0), sc(300.0, 0.0)],
        &[sc(300.0, 0.0), sc(350.0, 1.0), sc(400.0, 0.0)],
    ];

    const fn sc(u: f64, v: f64) -> StripCoord {
        StripCoord::new(u, v)
    }

    fn corner_tetra() -> SolidTable {
        SolidTable {
            kind: SolidKind::Tetrahedron,
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            edges: &EDGES,
            faces: &FACES,
            palette: &RB,
            strip_coords: &STRIP,
            strip: TextureStrip::new(400.0),
        }
    }

    // ── happy path ──

    #[test]
    fn builds_consistent_table() {
        let solid = Solid::build(&corner_tetra()).unwrap();
        assert_eq!(solid.faces().len(), 4);
        assert_eq!(solid.edges().len(), 6);
        assert!(solid.faces().iter().all(|f| !f.is_reversed()));
        assert!((solid.strip_extent() - 400.0).abs() < 1e-12);
    }

    #[test]
    fn bottom_face_points_down() {
        let solid = Solid::build(&corner_tetra()).unwrap();
        let n = solid.faces()[0].normal();
        assert!((n.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn inward_winding_is_negated_but_order_kept() {
        const INWARD: [&[usize]; 4] = [&[0, 1, 2], &[0, 1, 3], &[0, 3, 2], &[1, 2, 3]];
        let mut table = corner_tetra();
        table.faces = &INWARD;
        let solid = Solid::build(&table).unwrap();
        let face = &solid.faces()[0];
        assert!(face.is_reversed());
        assert_eq!(face.indices(), &[0, 1, 2]);
        assert!((face.normal().z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn palette_cycles_by_position() {
        let solid = Solid::build(&corner_tetra()).unwrap();
        assert_eq!(*solid.color_at(0), Color::RED);
        assert_eq!(*solid.color_at(1), Color::BLUE);
        assert_eq!(*solid.color_at(2), Color::RED);
    }

    // ── edge defects ──

    #[test]
    fn edge_out_of_range() {
        const BAD: [[usize; 2]; 6] = [[0, 1], [0, 2], [0, 9], [1, 2], [1, 3], [2, 3]];
        let mut table = corner_tetra();
        table.edges = &BAD;
        let err = Solid::build(&table).unwrap_err();
        assert!(matches!(err, TableError::VertexOutOfRange { index: 9, len: 4, .. }));
    }

    #[test]
    fn duplicate_edge_in_either_order() {
        const BAD: [[usize; 2]; 7] = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3], [3, 2]];
        let mut table = corner_tetra();
        table.edges = &BAD;
        let err = Solid::build(&table).unwrap_err();
        assert_eq!(
            err,
            TableError::DuplicateEdge {
                solid: SolidKind::Tetrahedron,
                a: 3,
                b: 2
            }
        );
    }

    #[test]
    fn self_edge() {
        const BAD: [[usize; 2]; 1] = [[1, 1]];
        let mut table = corner_tetra();
        table.edges = &BAD;
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::DegenerateEdge { vertex: 1, .. })
        ));
    }

    #[test]
    fn unused_edge() {
        const EXTRA: [[usize; 2]; 7] = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3], [3, 4]];
        let mut table = corner_tetra();
        table.vertices.push(Point3::new(5.0, 5.0, 5.0));
        table.edges = &EXTRA;
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::EdgeUsage { a: 3, b: 4, count: 0, .. })
        ));
    }

    #[test]
    fn missing_edge() {
        const FEW: [[usize; 2]; 5] = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3]];
        let mut table = corner_tetra();
        table.edges = &FEW;
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::MissingEdge { .. })
        ));
    }

    // ── face defects ──

    #[test]
    fn face_out_of_range() {
        const BAD: [&[usize]; 4] = [&[0, 2, 7], &[0, 1, 3], &[0, 3, 2], &[1, 2, 3]];
        let mut table = corner_tetra();
        table.faces = &BAD;
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::VertexOutOfRange { index: 7, .. })
        ));
    }

    #[test]
    fn two_vertex_face() {
        const BAD: [&[usize]; 1] = [&[0, 1]];
        let mut table = corner_tetra();
        table.faces = &BAD;
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::FaceTooSmall { face: 0, len: 2, .. })
        ));
    }

    #[test]
    fn collinear_face_start() {
        let mut table = corner_tetra();
        // Vertex 2 moved onto the line through vertices 0 and 1.
        table.vertices[2] = Point3::new(0.5, 0.0, 0.0);
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::DegenerateNormal { face: 0, .. })
        ));
    }

    #[test]
    fn repeated_vertex() {
        const BAD: [&[usize]; 4] = [&[0, 2, 0], &[0, 1, 3], &[0, 3, 2], &[1, 2, 3]];
        let mut table = corner_tetra();
        table.faces = &BAD;
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::RepeatedVertex { face: 0, vertex: 0, .. })
        ));
    }

    #[test]
    fn lifted_quad_corner() {
        let mut table = SolidKind::Cube.table();
        // Face 0 is the z = -1 square; its last corner is vertex 3.
        table.vertices[3].z = -0.5;
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::NonPlanarFace { face: 0, vertex: 3, distance, .. })
                if (distance - 0.5).abs() < 1e-12
        ));
    }

    #[test]
    fn flat_solid_has_no_outward_side() {
        let mut table = corner_tetra();
        // All four vertices in z = 0: the centroid lies on face 0's plane.
        table.vertices[3] = Point3::new(1.0, 1.0, 0.0);
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::NormalThroughCentroid { face: 0, .. })
        ));
    }

    #[test]
    fn no_vertices() {
        let mut table = corner_tetra();
        table.vertices.clear();
        assert_eq!(
            Solid::build(&table).unwrap_err(),
            TableError::Empty {
                solid: SolidKind::Tetrahedron,
                what: "vertices"
            }
        );
    }

    #[test]
    fn no_faces() {
        let mut table = corner_tetra();
        table.faces = &[];
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::Empty { what: "faces", .. })
        ));
    }

    #[test]
    fn no_edges() {
        let mut table = corner_tetra();
        table.edges = &[];
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::Empty { what: "edges", .. })
        ));
    }

    #[test]
    fn empty_palette() {
        let mut table = corner_tetra();
        table.palette = &[];
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::EmptyPalette { .. })
        ));
    }

    // ── texture layout defects ──

    #[test]
    fn wrong_tex_coord_count() {
        const SHORT: [&[StripCoord]; 4] = [
            &[sc(0.0, 0.0), sc(100.0, 0.0)],
            &[sc(100.0, 0.0), sc(150.0, 1.0), sc(200.0, 0.0)],
            &[sc(200.0, 0.0), sc(250.0, 1.0), sc(300.0, 0.0)],
            &[sc(300.0, 0.0), sc(350.0, 1.0), sc(400.0, 0.0)],
        ];
        let mut table = corner_tetra();
        table.strip_coords = &SHORT;
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::TexCoordCount { face: 0, expected: 3, found: 2, .. })
        ));
    }

    #[test]
    fn overlapping_spans() {
        const OVERLAP: [&[StripCoord]; 4] = [
            &[sc(0.0, 0.0), sc(50.0, 1.0), sc(100.0, 0.0)],
            &[sc(50.0, 0.0), sc(100.0, 1.0), sc(150.0, 0.0)],
            &[sc(200.0, 0.0), sc(250.0, 1.0), sc(300.0, 0.0)],
            &[sc(300.0, 0.0), sc(350.0, 1.0), sc(400.0, 0.0)],
        ];
        let mut table = corner_tetra();
        table.strip_coords = &OVERLAP;
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::StripGap { face: 1, .. })
        ));
    }

    #[test]
    fn layout_wider_than_texture() {
        for width in [399.0, 350.0, 101.0] {
            let mut table = corner_tetra();
            table.strip = TextureStrip::new(width);
            let err = Solid::build(&table).unwrap_err();
            assert_eq!(
                err,
                TableError::StripOverflow {
                    solid: SolidKind::Tetrahedron,
                    extent: 400.0,
                    width
                }
            );
        }
    }

    #[test]
    fn tex_coord_above_row() {
        const HIGH: [&[StripCoord]; 4] = [
            &[sc(0.0, 0.0), sc(50.0, 1.2), sc(100.0, 0.0)],
            &[sc(100.0, 0.0), sc(150.0, 1.0), sc(200.0, 0.0)],
            &[sc(200.0, 0.0), sc(250.0, 1.0), sc(300.0, 0.0)],
            &[sc(300.0, 0.0), sc(350.0, 1.0), sc(400.0, 0.0)],
        ];
        let mut table = corner_tetra();
        table.strip_coords = &HIGH;
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::TexCoordOutOfRange { face: 0, .. })
        ));
    }

    #[test]
    fn zero_width_span() {
        const FLAT: [&[StripCoord]; 4] = [
            &[sc(0.0, 0.0), sc(0.0, 1.0), sc(0.0, 0.0)],
            &[sc(0.0, 0.0), sc(50.0, 1.0), sc(100.0, 0.0)],
            &[sc(100.0, 0.0), sc(150.0, 1.0), sc(200.0, 0.0)],
            &[sc(200.0, 0.0), sc(250.0, 1.0), sc(300.0, 0.0)],
        ];
        let mut table = corner_tetra();
        table.strip_coords = &FLAT;
        assert_eq!(
            Solid::build(&table).unwrap_err(),
            TableError::SpanWidth {
                solid: SolidKind::Tetrahedron,
                face: 0,
                width: 0.0
            }
        );
    }

    #[test]
    fn span_wider_than_one_cell() {
        const WIDE: [&[StripCoord]; 4] = [
            &[sc(0.0, 0.0), sc(75.0, 1.0), sc(150.0, 0.0)],
            &[sc(150.0, 0.0), sc(200.0, 1.0), sc(250.0, 0.0)],
            &[sc(250.0, 0.0), sc(300.0, 1.0), sc(350.0, 0.0)],
            &[sc(350.0, 0.0), sc(400.0, 1.0), sc(450.0, 0.0)],
        ];
        let mut table = corner_tetra();
        table.strip_coords = &WIDE;
        assert!(matches!(
            Solid::build(&table),
            Err(TableError::SpanWidth { face: 0, .. })
        ));
    }

    #[test]
    fn extra_tex_coord_row() {
        const EXTRA: [&[StripCoord]; 5] = [
            &[sc(0.0, 0.0), sc(50.0, 1.0), sc(100.0, 0.0)],
            &[sc(100.0, 0.0), sc(150.0, 1.0), sc(200.0, 0.0)],
            &[sc(200.0, 0.0), sc(250.0, 1.0), sc(300.0, 0.0)],
            &[sc(300.0, 0.0), sc(350.0, 1.0), sc(400.0, 0.0)],
            &[sc(400.0, 0.0), sc(450.0, 1.0), sc(500.0, 0.0)],
        ];
        let mut table = corner_tetra();
        table.strip_coords = &EXTRA;
        assert_eq!(
            Solid::build(&table).unwrap_err(),
            TableError::TexCoordCount {
                solid: SolidKind::Tetrahedron,
                face: 4,
                expected: 0,
                found: 3
            }
        );
    }

    #[test]
    fn tex_coords_are_normalized() {
        let solid = Solid::build(&corner_tetra()).unwrap();
        let uv = solid.faces()[1].tex_coords()[1];
        assert!((uv.x - 150.0 / 400.0).abs() < 1e-12);
        assert!((uv.y - 1.0).abs() < 1e-12);
    }
}
