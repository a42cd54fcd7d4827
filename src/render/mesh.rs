use crate::catalog::Catalog;
use crate::error::{RenderError, Result};
use crate::geometry::{Color, SolidKind};
use crate::math::{Point2, Point3, Vector3};

use super::{Primitive, RenderContext};

/// A flat-shaded triangle mesh.
///
/// Vertices are not shared between triangles of different faces, so every
/// attribute array is parallel to `vertices`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Vertex colors.
    pub colors: Vec<Color>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends a convex polygon as a triangle fan around its first corner.
    #[allow(clippy::cast_possible_truncation)]
    fn push_fan(&mut self, corners: &[Corner]) {
        let base = self.vertices.len() as u32;
        for c in corners {
            self.vertices.push(c.position);
            self.normals.push(c.normal);
            self.colors.push(c.color);
            self.uvs.push(c.uv);
        }
        for i in 1..corners.len().saturating_sub(1) {
            let i = i as u32;
            self.indices.push([base, base + i, base + i + 1]);
        }
    }
}

/// Independent line segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineList {
    /// Segment endpoints.
    pub segments: Vec<[Point3; 2]>,
}

/// Filled faces and wireframe overlay of one solid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolidMesh {
    pub faces: TriangleMesh,
    pub wireframe: LineList,
}

#[derive(Debug, Clone, Copy)]
struct Corner {
    position: Point3,
    normal: Vector3,
    color: Color,
    uv: Point2,
}

#[derive(Debug)]
struct OpenPrimitive {
    primitive: Primitive,
    corners: Vec<Corner>,
}

/// A context that flattens the emitted stream into a [`SolidMesh`].
///
/// Quads and polygons are split into fans. Protocol violations are held
/// until [`MeshBuilder::finish`]; the first one wins.
#[derive(Debug)]
pub struct MeshBuilder {
    mesh: SolidMesh,
    open: Option<OpenPrimitive>,
    normal: Vector3,
    color: Color,
    uv: Point2,
    error: Option<RenderError>,
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self {
            mesh: SolidMesh::default(),
            open: None,
            normal: Vector3::z(),
            color: Color::new(1.0, 1.0, 1.0),
            uv: Point2::origin(),
            error: None,
        }
    }
}

impl MeshBuilder {
    /// Creates an empty builder with default state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulated mesh.
    ///
    /// # Errors
    ///
    /// Returns the first protocol violation seen, or
    /// [`RenderError::UnclosedPrimitive`] if a primitive is still open.
    pub fn finish(self) -> std::result::Result<SolidMesh, RenderError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if let Some(open) = self.open {
            return Err(RenderError::UnclosedPrimitive(open.primitive));
        }
        Ok(self.mesh)
    }

    fn fail(&mut self, err: RenderError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn close(&mut self, open: OpenPrimitive) {
        let OpenPrimitive { primitive, corners } = open;
        let (chunk, min) = match primitive {
            Primitive::Triangles => (3, 3),
            Primitive::Quads => (4, 4),
            Primitive::Lines => (2, 2),
            Primitive::Polygon => (corners.len().max(1), 3),
        };
        if corners.len() < min || corners.len() % chunk != 0 {
            self.fail(RenderError::IncompletePrimitive {
                primitive,
                vertices: corners.len(),
            });
            return;
        }

        for group in corners.chunks(chunk) {
            match primitive {
                Primitive::Lines => self
                    .mesh
                    .wireframe
                    .segments
                    .push([group[0].position, group[1].position]),
                _ => self.mesh.faces.push_fan(group),
            }
        }
    }
}

impl RenderContext for MeshBuilder {
    fn begin(&mut self, primitive: Primitive) {
        if let Some(open) = &self.open {
            let outer = open.primitive;
            self.fail(RenderError::NestedPrimitive {
                outer,
                inner: primitive,
            });
            return;
        }
        self.open = Some(OpenPrimitive {
            primitive,
            corners: Vec::new(),
        });
    }

    fn normal(&mut self, normal: &Vector3) {
        self.normal = *normal;
    }

    fn color(&mut self, color: &Color) {
        self.color = *color;
    }

    fn tex_coord(&mut self, uv: &Point2) {
        self.uv = *uv;
    }

    fn vertex(&mut self, position: &Point3) {
        let corner = Corner {
            position: *position,
            normal: self.normal,
            color: self.color,
            uv: self.uv,
        };
        match &mut self.open {
            Some(open) => open.corners.push(corner),
            None => self.fail(RenderError::VertexOutsidePrimitive),
        }
    }

    fn end(&mut self) {
        match self.open.take() {
            Some(open) => self.close(open),
            None => self.fail(RenderError::UnmatchedEnd),
        }
    }
}

/// Flattens one catalog solid into a [`SolidMesh`].
pub struct BuildMesh {
    kind: SolidKind,
}

impl BuildMesh {
    /// Creates a new `BuildMesh` operation.
    #[must_use]
    pub fn new(kind: SolidKind) -> Self {
        Self { kind }
    }

    /// Executes the operation against `catalog`.
    ///
    /// # Errors
    ///
    /// Returns an error if emission does not form a well-nested stream.
    pub fn execute(&self, catalog: &Catalog) -> Result<SolidMesh> {
        let mut builder = MeshBuilder::new();
        catalog.draw(self.kind, &mut builder);
        Ok(builder.finish()?)
    }
}
