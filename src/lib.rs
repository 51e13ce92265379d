pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod export;
pub mod benchmark;

pub use simulation::params::{Parameters, OMEGA_FLOOR};
pub use simulation::kinematics::{state_at, NVec3, State};
pub use simulation::simulator::{Phase, Pose, Readout, Simulator};
pub use simulation::trajectory::{TrajectoryBuffer, MAX_POINTS};
pub use simulation::scenario::Scenario;

pub use configuration::config::{MotionConfig, PlaybackConfig, Projection, ScenarioConfig};

pub use visualization::projection::{
    camera_rig, fit_ortho_size, CameraPose, CameraRig, OrthoFrustum, ProjectionSystem,
};

pub use export::csv::{history_csv, table_csv, CSV_HEADER};

pub use benchmark::benchmark::{bench_playback, bench_state_at};
