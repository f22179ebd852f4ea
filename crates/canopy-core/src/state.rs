//! Viewport camera shared with the front-ends.
//!
//! This avoids platform-specific APIs; the web bridge and the native preview
//! both turn a [`CameraPose`] into matrices through it.

use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::constants::{CAMERA_FOV_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::layout::CameraPose;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

impl CameraPose {
    /// Perspective camera for this pose. Non-positive or non-finite aspect
    /// ratios fall back to 1.0.
    pub fn to_camera(&self, aspect: f32) -> Camera {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        Camera {
            eye: self.position,
            target: self.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}
