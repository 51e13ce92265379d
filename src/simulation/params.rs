//! Motion and playback parameters for the helical simulation
//!
//! `Parameters` holds the user-editable quantities:
//! - helix geometry (`r`, `dz_per_turn`, `phi0`, `z0`, `x0`, `y0`),
//! - the period per turn `t_input` and its derived pair (`omega`, `vz`),
//! - playback settings (`dt`, `tmax`, `target_t`, `m_per_unit`)
//!
//! `t_input` and `omega` describe the same thing, so exactly one of them is
//! authoritative per edit: editing `t_input` (or any geometry field) reruns
//! `apply_derived`, editing `omega` directly reruns `apply_inverse_derived`.
//! Never both, so the two directions cannot overwrite each other.

use std::f64::consts::TAU;

/// Magnitude floor used before dividing by `omega` or `t_input`
pub const OMEGA_FLOOR: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub r: f64,           // helix radius [m]
    pub t_input: f64,     // period per turn [s]
    pub dz_per_turn: f64, // vertical rise per turn [m]
    pub phi0: f64,        // initial phase [rad]
    pub z0: f64,          // initial height [m]
    pub x0: f64,          // center offset x [m]
    pub y0: f64,          // center offset y [m]

    pub omega: f64, // angular velocity [rad/s], derived
    pub vz: f64,    // vertical velocity [m/s], derived

    pub m_per_unit: f64, // meters per render unit
    pub dt: f64,         // fixed integration micro-step [s]
    pub tmax: f64,       // hard simulation-time ceiling [s]
    pub target_t: f64,   // query/stop time [s], <= 0 disables the stop
}

impl Default for Parameters {
    fn default() -> Self {
        let mut p = Self {
            r: 100.0,
            t_input: 30.0,
            dz_per_turn: 2.0,
            phi0: 0.0,
            z0: 20.0,
            x0: 0.0,
            y0: 0.0,
            omega: 0.0,
            vz: 0.0,
            m_per_unit: 10.0,
            dt: 0.016,
            tmax: 80.0,
            target_t: 45.0,
        };
        p.apply_derived();
        p
    }
}

impl Parameters {
    /// Recompute `omega` and `vz` from `t_input` and `dz_per_turn`
    /// Leaves both untouched when `t_input` is not positive
    pub fn apply_derived(&mut self) {
        if self.t_input > 0.0 {
            self.omega = TAU / self.t_input;
            self.vz = self.dz_per_turn / self.t_input;
        }
    }

    /// Recompute `t_input` and `vz` from a directly-edited `omega`
    /// The magnitude of `omega` is floored at [`OMEGA_FLOOR`]
    pub fn apply_inverse_derived(&mut self) {
        let absw = self.omega.abs().max(OMEGA_FLOOR);
        self.t_input = TAU / absw;
        self.vz = self.dz_per_turn / self.t_input;
    }

    /// Apply one `{field, value}` edit event and resolve consistency
    ///
    /// Exactly one derivation direction runs, selected by which field changed.
    /// Unknown field names and non-finite values are ignored and the previous
    /// values kept; input validation belongs to the UI layer
    pub fn apply_edit(&mut self, field: &str, value: f64) {
        if !value.is_finite() {
            return;
        }
        match field {
            "omega" => {
                self.omega = value;
                self.apply_inverse_derived();
                return;
            }
            "r" => self.r = value,
            "t_input" => self.t_input = value,
            "dz_per_turn" => self.dz_per_turn = value,
            "phi0" => self.phi0 = value,
            "z0" => self.z0 = value,
            "x0" => self.x0 = value,
            "y0" => self.y0 = value,
            "m_per_unit" => self.m_per_unit = value,
            "dt" => self.dt = value,
            "tmax" => self.tmax = value,
            "target_t" => self.target_t = value,
            _ => return,
        }
        self.apply_derived();
    }

    /// `omega` with its magnitude floored at [`OMEGA_FLOOR`], sign kept
    fn guarded_omega(&self) -> f64 {
        if self.omega.abs() < OMEGA_FLOOR {
            OMEGA_FLOOR
        } else {
            self.omega
        }
    }

    /// Time for one full revolution [s]
    /// Saturates to a large finite value as `omega` approaches zero
    pub fn period(&self) -> f64 {
        TAU / self.guarded_omega().abs()
    }

    /// Net vertical advance per full revolution [m], same `omega` guard
    pub fn pitch(&self) -> f64 {
        TAU * self.vz / self.guarded_omega()
    }
}
