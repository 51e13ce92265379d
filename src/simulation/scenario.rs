//! Build a fully-initialized runtime scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the host loop:
//! - resolved motion/playback parameters (`Parameters`, derived fields filled),
//! - a simulator at t = 0 with the initial state already published,
//! - the projection system in the configured starting mode

use crate::configuration::config::{Projection, ScenarioConfig};
use crate::simulation::params::Parameters;
use crate::simulation::simulator::Simulator;
use crate::visualization::projection::ProjectionSystem;

/// Runtime bundle constructed from a [`ScenarioConfig`]
///
/// The host render loop owns one of these and drives it single-threaded:
/// parameter edits and commands between ticks, `simulator.tick` once per frame
pub struct Scenario {
    pub parameters: Parameters,
    pub simulator: Simulator,
    pub projection: ProjectionSystem,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let m = cfg.motion;
        let pb = cfg.playback;

        // Parameters (runtime) from the two config sections; omega and vz
        // are resolved from t_input immediately
        let mut parameters = Parameters {
            r: m.r,
            t_input: m.t_input,
            dz_per_turn: m.dz_per_turn,
            phi0: m.phi0.unwrap_or(0.0),
            z0: m.z0,
            x0: m.x0.unwrap_or(0.0),
            y0: m.y0.unwrap_or(0.0),
            omega: 0.0,
            vz: 0.0,
            m_per_unit: pb.m_per_unit,
            dt: pb.dt,
            tmax: pb.tmax,
            target_t: pb.target_t,
        };
        parameters.apply_derived();

        let simulator = Simulator::new(&parameters, pb.playing.unwrap_or(true));
        let projection = ProjectionSystem::new(cfg.projection.unwrap_or(Projection::Persp));

        Self {
            parameters,
            simulator,
            projection,
        }
    }
}
