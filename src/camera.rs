use glam::DVec3;

/// Viewpoint written into the `cameradata` block of every scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub pos: DVec3,
    pub up: DVec3,
    /// Look direction, not a target point.
    pub look: DVec3,
    /// Vertical field of view in degrees.
    pub height_angle: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pos: DVec3::new(10.0, 4.1, 16.0),
            up: DVec3::Y,
            look: DVec3::new(-9.0, -3.2, -16.0),
            height_angle: 49.5,
        }
    }
}

impl Camera {
    pub fn target(&self) -> DVec3 {
        self.pos + self.look
    }
}
