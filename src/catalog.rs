use std::sync::LazyLock;

use tracing::debug;

use crate::error::{Result, TableError};
use crate::geometry::{Solid, SolidKind};
use crate::render::{emit_solid, RenderContext};

static GLOBAL: LazyLock<std::result::Result<Catalog, TableError>> = LazyLock::new(Catalog::build);

/// The validated set of all five solids.
///
/// Tables are checked once at construction; draw emission trusts them
/// afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    solids: Vec<Solid>,
}

impl Catalog {
    /// Builds and validates every solid in [`SolidKind::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns the first [`TableError`] found in any authored table.
    pub fn build() -> std::result::Result<Self, TableError> {
        let solids = SolidKind::ALL
            .iter()
            .map(|kind| Solid::build(&kind.table()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(solids = solids.len(), "catalog built");
        Ok(Self { solids })
    }

    /// The process-wide catalog, built on first use.
    ///
    /// # Errors
    ///
    /// Returns the table error that prevented the catalog from building.
    /// The error is sticky: every call reports it.
    pub fn global() -> Result<&'static Self> {
        GLOBAL.as_ref().map_err(|err| err.clone().into())
    }

    /// The validated solid of the given kind.
    #[must_use]
    pub fn solid(&self, kind: SolidKind) -> &Solid {
        &self.solids[kind.index()]
    }

    /// All solids, in [`SolidKind::ALL`] order.
    pub fn solids(&self) -> impl Iterator<Item = &Solid> {
        self.solids.iter()
    }

    /// Emits the faces and wireframe of `kind` into `ctx`.
    pub fn draw<C: RenderContext + ?Sized>(&self, kind: SolidKind, ctx: &mut C) {
        emit_solid(self.solid(kind), ctx);
    }
}
