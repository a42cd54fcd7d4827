use crate::geometry::Color;
use crate::math::{Point2, Point3, Vector3};

use super::{Primitive, RenderContext};

/// One call made on a [`RenderContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Begin(Primitive),
    Normal(Vector3),
    Color(Color),
    TexCoord(Point2),
    Vertex(Point3),
    End,
}

/// A context that records the emitted call stream verbatim.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    commands: Vec<Command>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Returns the recorded commands and starts over.
    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Consumes the recorder, returning its commands.
    #[must_use]
    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }
}

impl RenderContext for Recorder {
    fn begin(&mut self, primitive: Primitive) {
        self.commands.push(Command::Begin(primitive));
    }

    fn normal(&mut self, normal: &Vector3) {
        self.commands.push(Command::Normal(*normal));
    }

    fn color(&mut self, color: &Color) {
        self.commands.push(Command::Color(*color));
    }

    fn tex_coord(&mut self, uv: &Point2) {
        self.commands.push(Command::TexCoord(*uv));
    }

    fn vertex(&mut self, position: &Point3) {
        self.commands.push(Command::Vertex(*position));
    }

    fn end(&mut self) {
        self.commands.push(Command::End);
    }
}
