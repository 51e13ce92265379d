//! Playback state machine and fixed sub-step clock
//!
//! The simulator owns the simulation clock `t`, the capped trajectory buffer,
//! and the unbounded sample history. A host render loop calls [`Simulator::tick`]
//! once per frame with the measured real-time delta; the delta is split into
//! fixed sub-steps near `params.dt` so numerical resolution stays decoupled
//! from frame timing while total elapsed time matches the real delta.
//!
//! Phases: `Idle` (initial or user-paused), `Playing`, and `StoppedAtBound`
//! once `t` reaches `stop_at = min(tmax, target_t)`. Reaching the bound clears
//! playback on its own, which is distinct from a user pause: toggling play
//! while at the bound does nothing until a reset or an edit raises the bound.

use nalgebra::UnitQuaternion;

use crate::simulation::kinematics::{state_at, NVec3, State};
use crate::simulation::params::Parameters;
use crate::simulation::trajectory::TrajectoryBuffer;

/// Model "forward" axis the pose orientation aligns with the velocity
const FORWARD: NVec3 = NVec3::new(0.0, 1.0, 0.0);

/// Below this squared speed the orientation is held instead of realigned
const MIN_SPEED2: f64 = 1e-12;

/// Playback phase of the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,           // not advancing: initial state or user pause
    Playing,        // advancing on every tick
    StoppedAtBound, // clock reached `stop_at`; terminal until reset or a raised bound
}

/// Particle pose published for the rendering collaborator, in render units
#[derive(Debug, Clone)]
pub struct Pose {
    pub position: NVec3,
    pub rotation: UnitQuaternion<f64>,
}

/// Scalar readout published after every sub-step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub t: f64,
    pub speed: f64,
    pub acc_magnitude: f64,
    pub period: f64,
    pub pitch: f64,
}

pub struct Simulator {
    t: f64,
    phase: Phase,
    trajectory: TrajectoryBuffer,
    history: Vec<State>,
    pose: Pose,
    readout: Readout,
}

impl Simulator {
    /// Simulator at `t = 0` with the state of `p` already published
    /// Expects `p` to have its derived fields resolved
    pub fn new(p: &Parameters, playing: bool) -> Self {
        let s0 = state_at(0.0, p);
        Self {
            t: 0.0,
            phase: if playing { Phase::Playing } else { Phase::Idle },
            trajectory: TrajectoryBuffer::new(),
            history: Vec::new(),
            pose: Pose {
                position: s0.position() / p.m_per_unit,
                rotation: UnitQuaternion::identity(),
            },
            readout: Self::make_readout(&s0, p),
        }
    }

    /// Time at which playback auto-pauses: `target_t` when set, else `tmax`
    pub fn stop_at(p: &Parameters) -> f64 {
        if p.target_t > 0.0 {
            p.tmax.min(p.target_t)
        } else {
            p.tmax
        }
    }

    /// Rewind to `t = 0`: resolve derived parameters, clear the trajectory
    /// buffer and the history, republish the state at time zero
    /// A `StoppedAtBound` simulator becomes `Idle`; a playing one keeps playing
    pub fn reset(&mut self, p: &mut Parameters) {
        p.apply_derived();

        self.t = 0.0;
        self.trajectory.clear();
        self.history.clear();
        if self.phase == Phase::StoppedAtBound {
            self.phase = Phase::Idle;
        }

        let s0 = state_at(0.0, p);
        self.pose.position = s0.position() / p.m_per_unit;
        self.readout = Self::make_readout(&s0, p);
    }

    /// Flip between `Playing` and `Idle`
    /// No effect while the clock sits at the stop bound
    pub fn toggle_play(&mut self, p: &Parameters) {
        if self.t >= Self::stop_at(p) {
            return;
        }
        self.phase = match self.phase {
            Phase::Playing => Phase::Idle,
            Phase::Idle | Phase::StoppedAtBound => Phase::Playing,
        };
    }

    /// Advance by one frame's worth of real time
    ///
    /// Splits `real_dt` into `max(1, round(real_dt / max(1e-6, dt)))` equal
    /// sub-steps and applies them in order, so the clock gains exactly
    /// `real_dt` unless the stop bound truncates it. Updates for sub-step k
    /// are fully applied before sub-step k+1 begins
    pub fn tick(&mut self, real_dt: f64, p: &Parameters) {
        if self.phase != Phase::Playing || real_dt <= 0.0 {
            return;
        }
        let stop_at = Self::stop_at(p);
        if self.t >= stop_at {
            self.phase = Phase::StoppedAtBound;
            return;
        }

        let steps = (real_dt / p.dt.max(1e-6)).round().max(1.0) as usize;
        let fixed = real_dt / steps as f64;
        for _ in 0..steps {
            self.step(fixed, stop_at, p);
            if self.phase != Phase::Playing {
                break;
            }
        }
    }

    /// One fixed sub-step: advance the clock (clamped to `stop_at`), evaluate
    /// the model, append to trajectory and history, republish pose and readout
    fn step(&mut self, dt: f64, stop_at: f64, p: &Parameters) {
        self.t = (self.t + dt).min(stop_at);
        let s = state_at(self.t, p);

        self.pose.position = s.position() / p.m_per_unit;
        let v = s.velocity();
        if v.norm_squared() > MIN_SPEED2 {
            self.pose.rotation = UnitQuaternion::rotation_between(&FORWARD, &v)
                .unwrap_or_else(|| {
                    // v is exactly opposite the forward axis
                    UnitQuaternion::from_axis_angle(&NVec3::z_axis(), std::f64::consts::PI)
                });
        }

        self.trajectory.push(s.position() / p.m_per_unit);
        self.readout = Self::make_readout(&s, p);
        self.history.push(s);

        if self.t >= stop_at {
            self.phase = Phase::StoppedAtBound;
        }
    }

    fn make_readout(s: &State, p: &Parameters) -> Readout {
        Readout {
            t: s.t,
            speed: s.speed(),
            acc_magnitude: s.acc_magnitude(),
            period: p.period(),
            pitch: p.pitch(),
        }
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn trajectory(&self) -> &TrajectoryBuffer {
        &self.trajectory
    }

    /// One full state record per simulated sub-step since the last reset
    pub fn history(&self) -> &[State] {
        &self.history
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn readout(&self) -> &Readout {
        &self.readout
    }
}
