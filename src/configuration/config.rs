//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! helix scenario. A scenario consists of:
//!
//! - [`MotionConfig`]   – helix geometry and the period per turn
//! - [`PlaybackConfig`] – clock, stop bound, and render-scale settings
//! - [`Projection`]     – which camera the viewer starts in
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! motion:
//!   r: 100.0             # helix radius [m]
//!   t_input: 30.0        # period per turn [s]
//!   dz_per_turn: 2.0     # vertical rise per turn [m]
//!   phi0: 0.0            # initial phase [rad]
//!   z0: 20.0             # initial height [m]
//!
//! playback:
//!   dt: 0.016            # fixed micro-step [s]
//!   tmax: 80.0           # hard time ceiling [s]
//!   target_t: 45.0       # query/stop time [s]
//!   m_per_unit: 10.0     # meters per render unit
//!   playing: true
//!
//! projection: "persp"    # or "xy" / "yz" / "zx"
//! ```
//!
//! Derived quantities (`omega`, `vz`) are not part of the file; the engine
//! resolves them from `t_input` when the runtime scenario is built.

use serde::Deserialize;

/// Which camera projection the viewer starts in
/// `persp` orbits freely; the other three are fixed orthographic views
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    #[serde(rename = "persp")] // free perspective camera with orbit controls
    Persp,

    #[serde(rename = "xy")] // top-down onto the XY plane
    Xy,

    #[serde(rename = "yz")] // along +X onto the YZ plane
    Yz,

    #[serde(rename = "zx")] // along +Y onto the ZX plane
    Zx,
}

/// Helix geometry and the authoritative period input
#[derive(Deserialize, Debug, Clone)]
pub struct MotionConfig {
    pub r: f64,           // helix radius [m]
    pub t_input: f64,     // period per turn [s]
    pub dz_per_turn: f64, // vertical rise per turn [m]
    pub phi0: Option<f64>, // initial phase [rad], defaults to 0
    pub z0: f64,          // initial height [m]
    pub x0: Option<f64>,  // center offset x [m], defaults to 0
    pub y0: Option<f64>,  // center offset y [m], defaults to 0
}

/// Clock and playback settings
#[derive(Deserialize, Debug, Clone)]
pub struct PlaybackConfig {
    pub dt: f64,               // fixed micro-step [s]
    pub tmax: f64,             // hard simulation-time ceiling [s]
    pub target_t: f64,         // query/stop time [s], <= 0 disables the stop
    pub m_per_unit: f64,       // meters per render unit
    pub playing: Option<bool>, // start advancing immediately, defaults to true
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub motion: MotionConfig,           // helix geometry and period
    pub playback: PlaybackConfig,       // clock and stop bound
    pub projection: Option<Projection>, // starting camera, defaults to persp
}
