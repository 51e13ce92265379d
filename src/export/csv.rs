//! CSV export of simulated kinematic data
//!
//! Two layouts share the `t,x,y,z,vx,vy,vz,ax,ay,az` header:
//!
//! - [`table_csv`] samples the model at whole seconds from 0 to
//!   `floor(t_end)` with values to 3 decimals. The `ax` column is
//!   sign-inverted relative to the model output; downstream spreadsheets
//!   expect that display convention, and it never leaks back into the model
//!   itself.
//! - [`history_csv`] dumps the recorded per-sub-step history at full
//!   precision, signs untouched.

use crate::simulation::kinematics::{state_at, State};
use crate::simulation::params::Parameters;

pub const CSV_HEADER: &str = "t,x,y,z,vx,vy,vz,ax,ay,az";

/// Whole-second table from 0 through `floor(t_end)` seconds
pub fn table_csv(p: &Parameters, t_end: f64) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    let last = (t_end + 1e-9).floor() as i64;
    for k in 0..=last.max(0) {
        let s = state_at(k as f64, p);
        out.push_str(&format!(
            "{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3}\n",
            s.t, s.x, s.y, s.z, s.vx, s.vy, s.vz, -s.ax, s.ay, s.az
        ));
    }
    out
}

/// Raw dump of the playback history, one row per recorded sub-step
pub fn history_csv(history: &[State]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for s in history {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{}\n",
            s.t, s.x, s.y, s.z, s.vx, s.vy, s.vz, s.ax, s.ay, s.az
        ));
    }
    out
}
