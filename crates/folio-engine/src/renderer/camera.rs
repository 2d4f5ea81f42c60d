use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Perspective camera for the hero scene.
/// Produces view and projection matrices for the host renderer.
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Width / height of the container.
    aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Drawing-surface size in device pixels, after the pixel-ratio clamp.
    surface: (u32, u32),
}

/// GPU-side uniform data for the camera.
/// 20 floats: view-projection matrix (column major) followed by eye position + padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl Camera3D {
    pub fn new(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_deg,
            aspect: if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 },
            near,
            far,
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            surface: (0, 0),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn surface_size(&self) -> (u32, u32) {
        self.surface
    }

    /// Track a new container size (CSS pixels). Degenerate sizes, e.g. a
    /// collapsed container, leave the previous aspect in place.
    /// Returns whether the projection changed.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32, max_pixel_ratio: f32) -> bool {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return false;
        }
        let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio.min(max_pixel_ratio)
        } else {
            1.0
        };
        self.surface = (
            (width * ratio).round() as u32,
            (height * ratio).round() as u32,
        );
        let aspect = width / height;
        let changed = (aspect - self.aspect).abs() > f32::EPSILON;
        self.aspect = aspect;
        changed
    }

    /// Right-handed perspective projection, Z in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
            position: self.position.extend(1.0).to_array(),
        }
    }
}
