//! The per-frame contract between a windowing loop and the geometry core.
//!
//! The loop owns the window, polls keys, loads textures and presents
//! frames. Once per frame it hands the pressed keys to
//! [`FrameDriver::handle_keys`], rebinds the texture if the selection
//! changed, and calls [`FrameDriver::render_frame`] with its context.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::Catalog;
use crate::error::{ConfigError, Result};
use crate::geometry::SolidKind;
use crate::math::Matrix4;
use crate::render::RenderContext;
use crate::view::ViewParams;

/// The active solid and the texture image that goes with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub kind: SolidKind,
    pub texture: PathBuf,
}

/// A key that selects a solid and its texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: char,
    pub selection: Selection,
}

/// Ordered key table. The first entry is the initial selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: Vec<KeyBinding>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let textures = ["tetra.png", "cube.png", "octo.png", "dodeca.png", "icosa.png"];
        let bindings = SolidKind::ALL
            .iter()
            .zip(textures)
            .zip('1'..='5')
            .map(|((&kind, texture), key)| KeyBinding {
                key,
                selection: Selection {
                    kind,
                    texture: PathBuf::from(texture),
                },
            })
            .collect();
        Self { bindings }
    }
}

impl KeyBindings {
    /// Creates a key table from explicit bindings.
    #[must_use]
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        Self { bindings }
    }

    /// Prefixes every texture path with `dir`.
    #[must_use]
    pub fn with_texture_dir(mut self, dir: &Path) -> Self {
        for b in &mut self.bindings {
            b.selection.texture = dir.join(&b.selection.texture);
        }
        self
    }

    /// Bindings in table order.
    #[must_use]
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// The selection made by the last binding in table order whose key is
    /// pressed, if any.
    #[must_use]
    pub fn resolve(&self, pressed: &[char]) -> Option<&Selection> {
        self.bindings
            .iter()
            .rev()
            .find(|b| pressed.contains(&b.key))
            .map(|b| &b.selection)
    }
}

/// What a rendered frame needs from the windowing loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Zero-based frame number.
    pub index: u64,
    /// The solid that was emitted.
    pub kind: SolidKind,
    /// Model-view matrix to load before presenting.
    pub model_view: Matrix4,
}

/// Tracks the active selection and frame counter; emits one solid per frame.
#[derive(Debug)]
pub struct FrameDriver<'a> {
    catalog: &'a Catalog,
    bindings: KeyBindings,
    view: ViewParams,
    selection: Selection,
    frame: u64,
}

impl<'a> FrameDriver<'a> {
    /// Creates a driver showing the first bound solid.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `view` is invalid or `bindings` is empty.
    pub fn new(catalog: &'a Catalog, bindings: KeyBindings, view: ViewParams) -> Result<Self> {
        view.validate()?;
        let selection = bindings
            .bindings()
            .first()
            .map(|b| b.selection.clone())
            .ok_or(ConfigError::NoBindings)?;
        info!(solid = %selection.kind, texture = %selection.texture.display(), "initial selection");
        Ok(Self {
            catalog,
            bindings,
            view,
            selection,
            frame: 0,
        })
    }

    /// The active selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The view parameters the loop should configure its context with.
    #[must_use]
    pub fn view(&self) -> &ViewParams {
        &self.view
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frame
    }

    /// Applies the keys pressed this frame.
    ///
    /// Returns the new selection if it changed, so the caller reloads the
    /// texture exactly once per switch.
    pub fn handle_keys(&mut self, pressed: &[char]) -> Option<&Selection> {
        let next = self.bindings.resolve(pressed)?;
        if *next == self.selection {
            return None;
        }
        self.selection = next.clone();
        info!(
            solid = %self.selection.kind,
            texture = %self.selection.texture.display(),
            "selection changed"
        );
        Some(&self.selection)
    }

    /// Emits the active solid into `ctx` and advances the frame counter.
    pub fn render_frame<C: RenderContext + ?Sized>(&mut self, ctx: &mut C) -> Frame {
        let index = self.frame;
        let model_view = self.view.model_view(index);
        self.catalog.draw(self.selection.kind, ctx);
        self.frame += 1;
        Frame {
            index,
            kind: self.selection.kind,
            model_view,
        }
    }
}
