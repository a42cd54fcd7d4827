use std::time::Duration;

use nalgebra::{Perspective3, Rotation3, Translation3, Unit};

use crate::error::ConfigError;
use crate::math::{Matrix4, Vector3, TOLERANCE};

/// Fixed camera, light and animation parameters for the viewer.
///
/// The renderer sets these up once before the first frame; the geometry
/// core only reads [`ViewParams::model_view`] per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewParams {
    /// Window title.
    pub title: String,
    /// Window size in pixels, `(width, height)`.
    pub window_size: (u32, u32),
    /// Vertical field of view in degrees.
    pub fov_y_deg: f64,
    /// Near clip distance.
    pub near: f64,
    /// Far clip distance.
    pub far: f64,
    /// Translation applied to the model before rotation.
    pub camera_offset: Vector3,
    /// Homogeneous light position.
    pub light_position: [f64; 4],
    /// Ambient light RGBA.
    pub light_ambient: [f64; 4],
    /// Diffuse light RGBA.
    pub light_diffuse: [f64; 4],
    /// Rotation added each frame, in degrees.
    pub rotation_step_deg: f64,
    /// Axis of the per-frame rotation; need not be unit length.
    pub rotation_axis: Vector3,
    /// Target frames per second.
    pub frame_rate: u32,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            title: "Platonic Solids".into(),
            window_size: (800, 800),
            fov_y_deg: 45.0,
            near: 0.1,
            far: 50.0,
            camera_offset: Vector3::new(0.0, 0.0, -5.0),
            light_position: [12.0, -5.0, -5.0, 1.0],
            light_ambient: [0.0, 0.0, 0.0, 1.0],
            light_diffuse: [1.0, 1.0, 1.0, 1.0],
            rotation_step_deg: 1.0,
            rotation_axis: Vector3::new(3.0, 5.0, 0.0),
            frame_rate: 50,
        }
    }
}

impl ViewParams {
    /// Checks that the parameters describe a usable view.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = self.window_size;
        if w == 0 {
            return Err(ConfigError::OutOfRange {
                parameter: "window width",
                value: f64::from(w),
            });
        }
        if h == 0 {
            return Err(ConfigError::OutOfRange {
                parameter: "window height",
                value: f64::from(h),
            });
        }
        if !(self.fov_y_deg > 0.0 && self.fov_y_deg < 180.0) {
            return Err(ConfigError::OutOfRange {
                parameter: "fov_y_deg",
                value: self.fov_y_deg,
            });
        }
        if self.near <= 0.0 {
            return Err(ConfigError::OutOfRange {
                parameter: "near",
                value: self.near,
            });
        }
        if self.far <= self.near {
            return Err(ConfigError::OutOfRange {
                parameter: "far",
                value: self.far,
            });
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::OutOfRange {
                parameter: "frame_rate",
                value: 0.0,
            });
        }
        if self.rotation_axis.norm() < TOLERANCE {
            return Err(ConfigError::ZeroRotationAxis);
        }
        Ok(())
    }

    /// Width over height of the window.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        let (w, h) = self.window_size;
        f64::from(w) / f64::from(h)
    }

    /// Perspective projection matrix.
    #[must_use]
    pub fn projection(&self) -> Matrix4 {
        Perspective3::new(self.aspect(), self.fov_y_deg.to_radians(), self.near, self.far)
            .to_homogeneous()
    }

    /// Model-view matrix for frame `frame` (counting from 0).
    ///
    /// The rotation accumulates before each draw, so frame `n` is turned by
    /// `(n + 1) * rotation_step_deg` about the rotation axis, after which the
    /// camera offset is applied.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn model_view(&self, frame: u64) -> Matrix4 {
        let angle = ((frame + 1) as f64 * self.rotation_step_deg).to_radians();
        let rotation = Unit::try_new(self.rotation_axis, TOLERANCE)
            .map_or_else(Rotation3::identity, |axis| {
                Rotation3::from_axis_angle(&axis, angle)
            });
        Translation3::from(self.camera_offset).to_homogeneous() * rotation.to_homogeneous()
    }

    /// Time budget of one frame.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}
