mod mesh;
mod recorder;

pub use mesh::{BuildMesh, LineList, MeshBuilder, SolidMesh, TriangleMesh};
pub use recorder::{Command, Recorder};

use tracing::trace;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::geometry::{Color, Solid, SolidKind};
use crate::math::{Point2, Point3, Vector3};

/// Primitive kinds a face or the wireframe is emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Independent triangles, three vertices each.
    Triangles,
    /// Independent quadrilaterals, four vertices each.
    Quads,
    /// A single convex polygon.
    Polygon,
    /// Independent line segments, two vertices each.
    Lines,
}

impl Primitive {
    /// The filled primitive matching a face with `arity` vertices.
    #[must_use]
    pub fn for_face(arity: usize) -> Self {
        match arity {
            3 => Self::Triangles,
            4 => Self::Quads,
            _ => Self::Polygon,
        }
    }
}

/// An immediate-mode rendering target.
///
/// Attribute calls set the current state; `vertex` emits a vertex with
/// whatever state is current. Projection, lighting, depth test and the
/// bound texture are the implementor's business.
pub trait RenderContext {
    /// Opens a primitive.
    fn begin(&mut self, primitive: Primitive);

    /// Sets the current normal.
    fn normal(&mut self, normal: &Vector3);

    /// Sets the current color.
    fn color(&mut self, color: &Color);

    /// Sets the current texture coordinate.
    fn tex_coord(&mut self, uv: &Point2);

    /// Emits a vertex at `position`.
    fn vertex(&mut self, position: &Point3);

    /// Closes the open primitive.
    fn end(&mut self);
}

/// Emits every face of `solid` as a filled, flat-shaded primitive, then every
/// edge as a line segment.
///
/// Per face the normal is set once. It is the face's outward normal, which
/// for faces with [`is_reversed`](crate::geometry::Face::is_reversed) set is
/// the negated winding normal. Per vertex the color and texture coordinate
/// for its position within the face precede the position. The wireframe
/// pass sets no attributes.
pub fn emit_solid<C: RenderContext + ?Sized>(solid: &Solid, ctx: &mut C) {
    let vertices = solid.vertices();

    for face in solid.faces() {
        ctx.begin(Primitive::for_face(face.arity()));
        ctx.normal(face.normal());
        for (position, (&index, uv)) in face.indices().iter().zip(face.tex_coords()).enumerate() {
            ctx.color(solid.color_at(position));
            ctx.tex_coord(uv);
            ctx.vertex(&vertices[index]);
        }
        ctx.end();
    }

    ctx.begin(Primitive::Lines);
    for edge in solid.edges() {
        ctx.vertex(&vertices[edge.a]);
        ctx.vertex(&vertices[edge.b]);
    }
    ctx.end();

    trace!(solid = %solid.kind(), faces = solid.faces().len(), "emitted solid");
}

/// Emits `kind` from the global catalog.
///
/// # Errors
///
/// Returns an error if the global catalog failed to build.
pub fn draw<C: RenderContext + ?Sized>(kind: SolidKind, ctx: &mut C) -> Result<()> {
    Catalog::global()?.draw(kind, ctx);
    Ok(())
}

/// Emits the tetrahedron.
///
/// # Errors
///
/// Returns an error if the global catalog failed to build.
pub fn draw_tetrahedron<C: RenderContext + ?Sized>(ctx: &mut C) -> Result<()> {
    draw(SolidKind::Tetrahedron, ctx)
}

/// Emits the cube.
///
/// # Errors
///
/// Returns an error if the global catalog failed to build.
pub fn draw_cube<C: RenderContext + ?Sized>(ctx: &mut C) -> Result<()> {
    draw(SolidKind::Cube, ctx)
}

/// Emits the octahedron.
///
/// # Errors
///
/// Returns an error if the global catalog failed to build.
pub fn draw_octahedron<C: RenderContext + ?Sized>(ctx: &mut C) -> Result<()> {
    draw(SolidKind::Octahedron, ctx)
}

/// Emits the dodecahedron.
///
/// # Errors
///
/// Returns an error if the global catalog failed to build.
pub fn draw_dodecahedron<C: RenderContext + ?Sized>(ctx: &mut C) -> Result<()> {
    draw(SolidKind::Dodecahedron, ctx)
}

/// Emits the icosahedron.
///
/// # Errors
///
/// Returns an error if the global catalog failed to build.
pub fn draw_icosahedron<C: RenderContext + ?Sized>(ctx: &mut C) -> Result<()> {
    draw(SolidKind::Icosahedron, ctx)
}
