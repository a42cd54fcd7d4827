use thiserror::Error;

use crate::geometry::SolidKind;
use crate::render::Primitive;

/// Top-level error type for the platonic solid renderer.
#[derive(Debug, Error)]
pub enum PlatonicError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Clone, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Defects in an authored solid table.
///
/// These are programming errors in the constant data. A catalog that hits
/// one refuses to build.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("{solid}: table has no {what}")]
    Empty { solid: SolidKind, what: &'static str },

    #[error("{solid}: {owner} references vertex {index}, but only {len} vertices exist")]
    VertexOutOfRange {
        solid: SolidKind,
        owner: String,
        index: usize,
        len: usize,
    },

    #[error("{solid}: edge {edge} joins vertex {vertex} to itself")]
    DegenerateEdge {
        solid: SolidKind,
        edge: usize,
        vertex: usize,
    },

    #[error("{solid}: edge ({a}, {b}) is listed more than once")]
    DuplicateEdge { solid: SolidKind, a: usize, b: usize },

    #[error("{solid}: face {face} has {len} vertices, at least 3 required")]
    FaceTooSmall {
        solid: SolidKind,
        face: usize,
        len: usize,
    },

    #[error("{solid}: face {face} repeats vertex {vertex}")]
    RepeatedVertex {
        solid: SolidKind,
        face: usize,
        vertex: usize,
    },

    #[error("{solid}: face {face} boundary ({a}, {b}) is not in the edge list")]
    MissingEdge {
        solid: SolidKind,
        face: usize,
        a: usize,
        b: usize,
    },

    #[error("{solid}: edge ({a}, {b}) bounds {count} faces instead of 2")]
    EdgeUsage {
        solid: SolidKind,
        a: usize,
        b: usize,
        count: usize,
    },

    #[error("{solid}: face {face} starts with collinear vertices")]
    DegenerateNormal { solid: SolidKind, face: usize },

    #[error("{solid}: vertex {vertex} of face {face} is off the face plane by {distance:e}")]
    NonPlanarFace {
        solid: SolidKind,
        face: usize,
        vertex: usize,
        distance: f64,
    },

    #[error("{solid}: plane of face {face} passes through the solid centroid")]
    NormalThroughCentroid { solid: SolidKind, face: usize },

    #[error("{solid}: face {face} has {found} texture coordinates for {expected} vertices")]
    TexCoordCount {
        solid: SolidKind,
        face: usize,
        expected: usize,
        found: usize,
    },

    #[error("{solid}: face {face} texture coordinate ({u}, {v}) lies outside the strip")]
    TexCoordOutOfRange {
        solid: SolidKind,
        face: usize,
        u: f64,
        v: f64,
    },

    #[error("{solid}: face {face} spans {width} strip units instead of one cell")]
    SpanWidth {
        solid: SolidKind,
        face: usize,
        width: f64,
    },

    #[error("{solid}: strip span of face {face} starts at {start}, expected {expected}")]
    StripGap {
        solid: SolidKind,
        face: usize,
        start: f64,
        expected: f64,
    },

    #[error("{solid}: strip layout needs {extent} units, texture is {width} wide")]
    StripOverflow {
        solid: SolidKind,
        extent: f64,
        width: f64,
    },

    #[error("{solid}: color palette is empty")]
    EmptyPalette { solid: SolidKind },
}

/// Violations of the begin/emit/end protocol seen by a rendering context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("begin({inner:?}) while {outer:?} is still open")]
    NestedPrimitive { outer: Primitive, inner: Primitive },

    #[error("end() without a matching begin()")]
    UnmatchedEnd,

    #[error("vertex emitted outside of a primitive")]
    VertexOutsidePrimitive,

    #[error("{primitive:?} closed with {vertices} vertices")]
    IncompletePrimitive { primitive: Primitive, vertices: usize },

    #[error("{0:?} was never closed")]
    UnclosedPrimitive(Primitive),
}

/// Invalid view or input configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("parameter {parameter} = {value} is out of range")]
    OutOfRange { parameter: &'static str, value: f64 },

    #[error("rotation axis is zero-length")]
    ZeroRotationAxis,

    #[error("no key bindings configured")]
    NoBindings,
}

/// Convenience type alias for results using [`PlatonicError`].
pub type Result<T> = std::result::Result<T, PlatonicError>;
