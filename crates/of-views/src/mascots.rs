//! Procedurally painted scene props: space station, sun and astronaut

use std::f32::consts::PI;

use egui::{Color32, Painter, Pos2, Rect, Rounding, Stroke, Vec2};

/// Drifting offset for a floating body, in world units.
///
/// Two sine waves per axis give a slow figure-eight drift.
pub fn float_offset(time: f32, speed: f32, intensity: f32) -> glam::Vec3 {
    glam::Vec3::new(
        (time * speed * 0.7).cos() * intensity * 0.4 + (time * speed * 0.3).sin() * intensity * 0.2,
        (time * speed).sin() * intensity + (time * speed * 0.5).sin() * intensity * 0.3,
        (time * speed * 0.4).sin() * intensity * 0.2,
    )
}

/// Rotating space station
pub struct SpaceStation {
    spin: f32,
    rotation_speed: f32,
}

impl SpaceStation {
    pub fn new(rotation_speed: f32) -> Self {
        Self { spin: 0.0, rotation_speed }
    }

    pub fn update(&mut self, dt: f32) {
        self.spin = (self.spin + dt * self.rotation_speed) % (2.0 * PI);
    }

    pub fn paint(&self, painter: &Painter, center: Pos2, size: f32) {
        let hull = Color32::from_rgb(170, 175, 190);
        let panel = Color32::from_rgb(40, 70, 140);
        let light = Color32::from_rgb(255, 200, 90);

        // Ring, squashed by the spin so it reads as rotating
        let squash = 0.35 + 0.15 * self.spin.cos().abs();
        let ring_radius = size * 0.5;
        let segments = 48;
        let points: Vec<Pos2> = (0..=segments)
            .map(|i| {
                let a = i as f32 / segments as f32 * 2.0 * PI;
                center + Vec2::new(a.cos() * ring_radius, a.sin() * ring_radius * squash)
            })
            .collect();
        painter.add(egui::Shape::line(points, Stroke::new(size * 0.05, hull)));

        // Solar panel wings
        let wing = Vec2::new(size * 0.35, size * 0.12);
        for side in [-1.0, 1.0] {
            let wing_center = center + Vec2::new(side * size * 0.32, 0.0);
            painter.rect_filled(Rect::from_center_size(wing_center, wing), Rounding::same(1.0), panel);
            painter.line_segment(
                [wing_center - Vec2::new(0.0, wing.y * 0.5), wing_center + Vec2::new(0.0, wing.y * 0.5)],
                Stroke::new(1.0, hull),
            );
        }

        // Hub
        painter.circle_filled(center, size * 0.12, hull);
        let blink = (self.spin * 6.0).sin() * 0.5 + 0.5;
        painter.circle_filled(center, size * 0.04, light.linear_multiply(blink));
    }
}

/// Glowing sun with a pulsing corona
pub struct Sun {
    time: f32,
    pub glow: Color32,
}

impl Sun {
    pub fn new(glow: Color32) -> Self {
        Self { time: 0.0, glow }
    }

    pub fn update(&mut self, dt: f32) {
        self.time += dt;
    }

    /// Corona scale in `[0.9, 1.1]`, oscillating twice a second
    pub fn pulse(&self) -> f32 {
        1.0 + (self.time * 2.0).sin() * 0.1
    }

    pub fn paint(&self, painter: &Painter, center: Pos2, radius: f32) {
        let pulse = self.pulse();
        let layers = [
            (1.5 * pulse, Color32::from_rgb(255, 204, 68).linear_multiply(0.1)),
            (1.25 * pulse, Color32::from_rgb(255, 136, 0).linear_multiply(0.3)),
            (1.0, self.glow.linear_multiply(0.9)),
        ];
        for (scale, color) in layers {
            painter.circle_filled(center, radius * scale, color);
        }
        painter.circle_filled(center - Vec2::splat(radius * 0.3), radius * 0.25, Color32::from_rgba_unmultiplied(255, 240, 200, 90));
    }
}

/// Floating astronaut
pub struct Astronaut {
    time: f32,
    float_speed: f32,
}

impl Astronaut {
    pub fn new(float_speed: f32) -> Self {
        Self { time: 0.0, float_speed }
    }

    pub fn update(&mut self, dt: f32) {
        self.time += dt;
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn paint(&self, painter: &Painter, center: Pos2, size: f32) {
        let suit = Color32::from_rgb(235, 235, 240);
        let shade = Color32::from_rgb(190, 190, 200);
        let visor = Color32::from_rgb(255, 170, 0);

        // Gentle bobbing tilt
        let tilt = (self.time * self.float_speed * 0.5).sin() * 0.08;
        let breathe = 1.0 + (self.time * self.float_speed * 0.6).sin() * 0.02;
        let s = size * breathe;
        let rotate = |v: Vec2| Vec2::new(v.x * tilt.cos() - v.y * tilt.sin(), v.x * tilt.sin() + v.y * tilt.cos());

        // Backpack, body, limbs
        painter.rect_filled(
            Rect::from_center_size(center + rotate(Vec2::new(0.0, s * 0.12)), Vec2::new(s * 0.42, s * 0.4)),
            Rounding::same(s * 0.06),
            shade,
        );
        painter.rect_filled(
            Rect::from_center_size(center + rotate(Vec2::new(0.0, s * 0.15)), Vec2::new(s * 0.34, s * 0.36)),
            Rounding::same(s * 0.1),
            suit,
        );
        for side in [-1.0, 1.0] {
            let shoulder = center + rotate(Vec2::new(side * s * 0.17, s * 0.05));
            let hand = center + rotate(Vec2::new(side * s * 0.32, s * 0.2));
            painter.line_segment([shoulder, hand], Stroke::new(s * 0.09, suit));
            let hip = center + rotate(Vec2::new(side * s * 0.09, s * 0.32));
            let foot = center + rotate(Vec2::new(side * s * 0.12, s * 0.5));
            painter.line_segment([hip, foot], Stroke::new(s * 0.1, suit));
        }

        // Helmet and visor
        let head = center + rotate(Vec2::new(0.0, -s * 0.12));
        painter.circle_filled(head, s * 0.16, suit);
        painter.circle_filled(head + rotate(Vec2::new(0.0, s * 0.01)), s * 0.11, visor.linear_multiply(0.85));
        painter.circle_filled(head + rotate(Vec2::new(-s * 0.04, -s * 0.03)), s * 0.025, Color32::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_offset_bounded() {
        for step in 0..200 {
            let offset = float_offset(step as f32 * 0.1, 0.5, 1.0);
            assert!(offset.y.abs() <= 1.3 + 1e-5);
            assert!(offset.x.abs() <= 0.6 + 1e-5);
            assert!(offset.z.abs() <= 0.2 + 1e-5);
        }
        assert_eq!(float_offset(0.0, 0.5, 1.0).y, 0.0);
    }

    #[test]
    fn test_sun_pulse_range() {
        let mut sun = Sun::new(Color32::from_rgb(255, 170, 0));
        for _ in 0..100 {
            sun.update(0.05);
            let pulse = sun.pulse();
            assert!((0.9..=1.1).contains(&pulse));
        }
    }
}
