//! Fixed-capacity buffer of render-space trajectory points
//!
//! Backs the polyline a renderer draws behind the particle. Points are
//! appended once per simulated sub-step until the capacity is reached; after
//! that further points are silently dropped, so a long run freezes the drawn
//! trail instead of scrolling it. The export history is a separate, unbounded
//! container on the simulator.

use crate::simulation::kinematics::NVec3;

/// Maximum number of trajectory points kept for rendering
pub const MAX_POINTS: usize = 5000;

#[derive(Debug, Clone)]
pub struct TrajectoryBuffer {
    points: Vec<NVec3>,
}

impl TrajectoryBuffer {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(MAX_POINTS),
        }
    }

    /// Append one render-space point; dropped without error once full
    pub fn push(&mut self, point: NVec3) {
        if self.points.len() < MAX_POINTS {
            self.points.push(point);
        }
    }

    /// Number of valid points, i.e. the draw range for the renderer
    pub fn draw_range(&self) -> usize {
        self.points.len()
    }

    pub fn is_full(&self) -> bool {
        self.points.len() >= MAX_POINTS
    }

    pub fn points(&self) -> &[NVec3] {
        &self.points
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Default for TrajectoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}
