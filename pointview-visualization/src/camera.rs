//! Turntable camera for the scatter view

use nalgebra::{Matrix4, Perspective3, Point3, Vector3};
use pointview_core::Bounds;

/// Elevation is kept away from the poles so the z-up view vector never
/// degenerates.
const MAX_ELEVATION: f32 = 89.0 * std::f32::consts::PI / 180.0;
const MIN_DISTANCE: f32 = 0.01;

/// A z-up turntable camera described by elevation and azimuth around a target.
///
/// The data's z axis is the vertical axis. Angles are stored in radians.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Point3<f32>,
    pub distance: f32,
    /// Elevation above the xy plane
    pub elevation: f32,
    /// Azimuth around +z, measured from +x
    pub azimuth: f32,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    home: Pose,
}

#[derive(Debug, Clone, Copy)]
struct Pose {
    target: Point3<f32>,
    distance: f32,
    elevation: f32,
    azimuth: f32,
}

impl OrbitCamera {
    /// Create a camera at the given pose
    pub fn new(target: Point3<f32>, distance: f32, elevation: f32, azimuth: f32) -> Self {
        let distance = distance.max(MIN_DISTANCE);
        let elevation = elevation.clamp(-MAX_ELEVATION, MAX_ELEVATION);
        let home = Pose {
            target,
            distance,
            elevation,
            azimuth,
        };
        Self {
            target,
            distance,
            elevation,
            azimuth,
            fov: std::f32::consts::FRAC_PI_4,
            aspect_ratio: 4.0 / 3.0,
            near: (distance * 0.001).max(1e-3),
            far: distance * 100.0,
            home,
        }
    }

    /// Create a camera framing the given bounds, angles in degrees
    pub fn framing(bounds: &Bounds, elevation_deg: f32, azimuth_deg: f32) -> Self {
        let diagonal = bounds.diagonal();
        let radius = if diagonal > 0.0 { diagonal } else { 2.0 };
        Self::new(
            bounds.center(),
            radius * 1.75,
            elevation_deg.to_radians(),
            azimuth_deg.to_radians(),
        )
    }

    /// Camera position in world space
    pub fn position(&self) -> Point3<f32> {
        let (sin_e, cos_e) = self.elevation.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target
            + Vector3::new(
                self.distance * cos_e * cos_a,
                self.distance * cos_e * sin_a,
                self.distance * sin_e,
            )
    }

    /// View matrix (right-handed, z-up)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position(), &self.target, &Vector3::z())
    }

    /// Projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Perspective3::new(self.aspect_ratio, self.fov, self.near, self.far).into_inner()
    }

    /// Orbit around the target; deltas are in radians
    pub fn orbit(&mut self, delta_azimuth: f32, delta_elevation: f32) {
        self.azimuth -= delta_azimuth;
        self.elevation =
            (self.elevation + delta_elevation).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    /// Pan the target in the camera plane
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let forward = (self.target - self.position()).normalize();
        let right = forward.cross(&Vector3::z()).normalize();
        let up = right.cross(&forward);
        self.target += right * delta_x + up * delta_y;
    }

    /// Zoom by a relative factor; positive zooms in
    pub fn zoom(&mut self, amount: f32) {
        self.distance = (self.distance * (1.0 - amount)).max(MIN_DISTANCE);
    }

    /// Restore the initial pose
    pub fn reset(&mut self) {
        self.target = self.home.target;
        self.distance = self.home.distance;
        self.elevation = self.home.elevation;
        self.azimuth = self.home.azimuth;
    }
}
