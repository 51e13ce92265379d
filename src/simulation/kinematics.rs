//! Closed-form kinematics of the helical trajectory
//!
//! `state_at` is the whole motion model: position, velocity, and acceleration
//! at any time follow analytically from the parameters, with no numerical
//! integration and no internal clamping. Clamping to the playback bound is the
//! simulator's job, so negative times and times past `tmax` are all valid here.

use nalgebra::Vector3;

use crate::simulation::params::Parameters;

pub type NVec3 = Vector3<f64>;

/// Full kinematic state at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub t: f64,  // time [s]
    pub x: f64,  // position [m]
    pub y: f64,
    pub z: f64,
    pub vx: f64, // velocity [m/s]
    pub vy: f64,
    pub vz: f64,
    pub ax: f64, // acceleration [m/s^2]
    pub ay: f64,
    pub az: f64,
}

impl State {
    pub fn position(&self) -> NVec3 {
        NVec3::new(self.x, self.y, self.z)
    }

    pub fn velocity(&self) -> NVec3 {
        NVec3::new(self.vx, self.vy, self.vz)
    }

    pub fn acceleration(&self) -> NVec3 {
        NVec3::new(self.ax, self.ay, self.az)
    }

    /// `|v|` [m/s]
    pub fn speed(&self) -> f64 {
        self.velocity().norm()
    }

    /// `|a|` [m/s^2]
    pub fn acc_magnitude(&self) -> f64 {
        self.acceleration().norm()
    }
}

/// Evaluate the helix at `time`
///
/// ```text
/// ang = omega t + phi0
/// x = x0 + R cos(ang)        vx = -R omega sin(ang)      ax = -R omega^2 cos(ang)
/// y = y0 + R sin(ang)        vy =  R omega cos(ang)      ay = -R omega^2 sin(ang)
/// z = z0 + vz t              vz =  vz                    az = 0
/// ```
///
/// Deterministic and side-effect-free for any real `time`
pub fn state_at(time: f64, p: &Parameters) -> State {
    let ang = p.omega * time + p.phi0;
    let (sin, cos) = ang.sin_cos();

    State {
        t: time,
        x: p.x0 + p.r * cos,
        y: p.y0 + p.r * sin,
        z: p.z0 + p.vz * time,
        vx: -p.r * p.omega * sin,
        vy: p.r * p.omega * cos,
        vz: p.vz,
        ax: -p.r * p.omega * p.omega * cos,
        ay: -p.r * p.omega * p.omega * sin,
        az: 0.0,
    }
}
