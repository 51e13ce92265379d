use std::time::Instant;

use crate::simulation::kinematics::state_at;
use crate::simulation::params::Parameters;
use crate::simulation::simulator::Simulator;

/// Time batched closed-form evaluations of the motion model
pub fn bench_state_at() {
    let ns = [10_000, 100_000, 1_000_000];

    let p = Parameters::default();

    for n in ns {
        // Warm up
        let _ = state_at(0.5, &p);

        let t0 = Instant::now();
        let mut acc = 0.0;
        for i in 0..n {
            let s = state_at(i as f64 * 1e-3, &p);
            acc += s.x; // keep the loop from being optimized out
        }
        let dt = t0.elapsed().as_secs_f64();

        println!("state_at: N = {n:8}, total = {dt:8.6} s (checksum {acc:.3})");
    }
}

/// Time full playback runs: ticks at a 60 Hz cadence until the stop bound
pub fn bench_playback() {
    let frame_dt = 1.0 / 60.0;
    let bounds = [10.0, 80.0, 400.0];

    for tmax in bounds {
        let mut p = Parameters::default();
        p.tmax = tmax;
        p.target_t = 0.0; // run to tmax
        p.apply_derived();

        let mut sim = Simulator::new(&p, true);

        let t0 = Instant::now();
        let mut frames = 0u64;
        while sim.is_playing() {
            sim.tick(frame_dt, &p);
            frames += 1;
        }
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "playback: tmax = {tmax:6.1} s, frames = {frames:6}, sub-steps = {:7}, total = {dt:8.6} s",
            sim.history().len()
        );
    }
}
