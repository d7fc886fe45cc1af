//! Trajectory recording
//!
//! `TrajectoryLog` is the sole artifact the core hands to external
//! renderers/analyzers: per body, an ordered sequence of position
//! snapshots, one per step, in meters. The step count is known up front,
//! so the per-body buffers are pre-sized rather than grown unbounded.

use crate::simulation::states::{System, NVec2};

#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryLog {
    positions: Vec<Vec<NVec2>>, // [body][step]
}

impl TrajectoryLog {
    /// Pre-size for `num_bodies` bodies and `num_steps` snapshots each
    pub fn with_capacity(num_bodies: usize, num_steps: usize) -> Self {
        Self {
            positions: vec![Vec::with_capacity(num_steps); num_bodies],
        }
    }

    /// Append the current position of every body, in body order
    /// Called once per step so all per-body sequences stay in lock-step
    pub fn record(&mut self, sys: &System) {
        for (track, body) in self.positions.iter_mut().zip(sys.bodies.iter()) {
            track.push(body.x);
        }
    }

    /// Position snapshots for body `i`, one per recorded step
    pub fn body(&self, i: usize) -> &[NVec2] {
        &self.positions[i]
    }

    pub fn num_bodies(&self) -> usize {
        self.positions.len()
    }

    /// Number of snapshots recorded so far (per body)
    pub fn steps_recorded(&self) -> usize {
        self.positions.first().map_or(0, |track| track.len())
    }
}
