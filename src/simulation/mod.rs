pub mod params;
pub mod kinematics;
pub mod trajectory;
pub mod simulator;
pub mod scenario;
