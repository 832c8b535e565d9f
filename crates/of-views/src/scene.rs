//! Perspective camera and starfield shared by the hero and projects scenes

use egui::{Color32, Painter, Pos2, Rect};
use glam::{Mat4, Vec3};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use of_ui::MotionPolicy;

/// Simple look-at camera
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov: f32,
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            fov: 75.0_f32.to_radians(),
        }
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect_ratio, 0.1, 500.0)
    }

    /// Project a world point into `rect`. Returns the screen position and the
    /// view-space distance, or `None` when the point is behind the camera.
    pub fn project(&self, point: Vec3, rect: Rect) -> Option<(Pos2, f32)> {
        let aspect_ratio = rect.width() / rect.height().max(1.0);
        let mvp = self.projection_matrix(aspect_ratio) * self.view_matrix();

        let clip = mvp * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }

        let ndc = clip.truncate() / clip.w;
        let x = (ndc.x + 1.0) * 0.5 * rect.width() + rect.left();
        let y = (1.0 - ndc.y) * 0.5 * rect.height() + rect.top();
        Some((Pos2::new(x, y), clip.w))
    }

    /// On-screen radius of a sphere of `radius` at `distance`
    pub fn screen_radius(&self, radius: f32, distance: f32, rect: Rect) -> f32 {
        let focal = rect.height() * 0.5 / (self.fov * 0.5).tan();
        radius * focal / distance.max(0.01)
    }
}

/// Configuration for a random point cloud
#[derive(Debug, Clone)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Points lie in `[-half_extent, half_extent]` on every axis
    pub half_extent: f32,
    /// Radians per second about Y
    pub rotation_speed: f32,
    pub point_size: f32,
    pub seed: u64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 5000,
            half_extent: 25.0,
            rotation_speed: -0.02,
            point_size: 1.2,
            seed: 7,
        }
    }
}

/// Fixed star cloud that slowly rotates about the Y axis
pub struct Starfield {
    config: StarfieldConfig,
    stars: Vec<(Vec3, f32)>,
    angle: f32,
}

impl Starfield {
    pub fn new(config: StarfieldConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let extent = config.half_extent;
        let stars = (0..config.count)
            .map(|_| {
                let position = Vec3::new(
                    rng.gen_range(-extent..=extent),
                    rng.gen_range(-extent..=extent),
                    rng.gen_range(-extent..=extent),
                );
                (position, rng.gen_range(0.5..=1.0))
            })
            .collect();

        Self { config, stars, angle: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.stars.iter().map(|(p, _)| *p)
    }

    /// Advance the rotation. Reduced motion holds the cloud still.
    pub fn update(&mut self, dt: f32, policy: MotionPolicy) {
        if policy.is_reduced() {
            return;
        }
        self.angle = (self.angle + self.config.rotation_speed * dt) % std::f32::consts::TAU;
    }

    pub fn paint(&self, painter: &Painter, rect: Rect, camera: &Camera) {
        if self.is_empty() {
            return;
        }
        let rotation = Mat4::from_rotation_y(self.angle);
        for (position, brightness) in &self.stars {
            let world = rotation.transform_point3(*position);
            let Some((screen, distance)) = camera.project(world, rect) else {
                continue;
            };
            if !rect.contains(screen) {
                continue;
            }
            // Far stars fade out
            let fade = (1.0 - distance / (self.config.half_extent * 4.0)).clamp(0.15, 1.0);
            let alpha = (brightness * fade * 255.0) as u8;
            painter.circle_filled(
                screen,
                self.config.point_size,
                Color32::from_rgba_unmultiplied(255, 255, 255, alpha),
            );
        }
    }
}
