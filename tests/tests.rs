use helisim::configuration::config::{Projection, ScenarioConfig};
use helisim::export::csv::{history_csv, table_csv};
use helisim::simulation::kinematics::{state_at, NVec3};
use helisim::simulation::params::Parameters;
use helisim::simulation::scenario::Scenario;
use helisim::simulation::simulator::{Phase, Simulator};
use helisim::simulation::trajectory::MAX_POINTS;
use helisim::visualization::projection::{camera_rig, CameraRig};

use std::f64::consts::TAU;

/// Parameters of the worked example: R = 100 m, T = 30 s, 20 m rise per turn
pub fn example_params() -> Parameters {
    let mut p = Parameters::default();
    p.dz_per_turn = 20.0;
    p.apply_derived();
    p
}

/// Drive a playing simulator until it hits its stop bound
pub fn run_to_bound(sim: &mut Simulator, p: &Parameters, frame_dt: f64) {
    while sim.is_playing() {
        sim.tick(frame_dt, p);
    }
}

// ==================================================================================
// Parameter consistency tests
// ==================================================================================

#[test]
fn derived_follow_period_edit() {
    let mut p = example_params();
    p.apply_edit("t_input", 30.0);

    assert!((p.omega - TAU / 30.0).abs() < 1e-12);
    assert!((p.vz - 20.0 / 30.0).abs() < 1e-12);
}

#[test]
fn omega_edit_runs_inverse_direction() {
    let mut p = example_params();
    p.apply_edit("omega", 0.5);

    assert!((p.t_input - 12.566_370_614_359_172).abs() < 1e-9);
    assert!((p.vz - 20.0 / 12.566_370_614_359_172).abs() < 1e-9, "vz = {}", p.vz);
}

#[test]
fn nonpositive_period_leaves_derived_untouched() {
    let mut p = example_params();
    let (omega, vz) = (p.omega, p.vz);
    p.apply_edit("t_input", -3.0);

    assert_eq!(p.omega, omega);
    assert_eq!(p.vz, vz);
}

#[test]
fn invalid_edits_are_ignored() {
    let p0 = example_params();

    let mut p = p0.clone();
    p.apply_edit("r", f64::NAN);
    assert_eq!(p.r, p0.r);

    p.apply_edit("no_such_field", 123.0);
    assert_eq!(p.omega, p0.omega);
    assert_eq!(p.t_input, p0.t_input);
}

#[test]
fn period_and_pitch_saturate_near_zero_omega() {
    let mut p = example_params();
    p.omega = 0.0;

    assert!(p.period().is_finite());
    assert!(p.pitch().is_finite());
    assert!(p.period() > 1e8); // saturated, not Infinity/NaN
}

// ==================================================================================
// Kinematics tests
// ==================================================================================

#[test]
fn centripetal_identities_hold_at_any_time() {
    let p = example_params();

    for t in [-7.5, 0.0, 0.3, 15.0, 45.0, 1234.5] {
        let s = state_at(t, &p);
        let v_xy = (s.vx * s.vx + s.vy * s.vy).sqrt();
        let a_xy = (s.ax * s.ax + s.ay * s.ay).sqrt();

        assert!((v_xy - p.r * p.omega.abs()).abs() < 1e-9, "t = {t}");
        assert!((a_xy - p.r * p.omega * p.omega).abs() < 1e-9, "t = {t}");
    }
}

#[test]
fn state_at_zero_matches_worked_example() {
    let p = example_params();
    let s = state_at(0.0, &p);

    assert!((s.x - 100.0).abs() < 1e-12);
    assert!(s.y.abs() < 1e-12);
    assert!((s.z - 20.0).abs() < 1e-12);
    assert!(s.vx.abs() < 1e-12);
    assert!((s.vy - 20.944).abs() < 1e-3);
    assert!((s.vz - 0.667).abs() < 1e-3);
    assert!((s.ax - (-4.386)).abs() < 1e-3);
    assert!(s.ay.abs() < 1e-12);
    assert_eq!(s.az, 0.0);
}

#[test]
fn half_period_lands_on_opposite_side() {
    let p = example_params();
    let s = state_at(15.0, &p);

    assert!((s.x - (-100.0)).abs() < 1e-9);
    assert!(s.y.abs() < 1e-9);
    assert!((s.z - 30.0).abs() < 1e-9);
}

// ==================================================================================
// Simulator tests
// ==================================================================================

#[test]
fn stop_bound_takes_the_smaller_of_tmax_and_target() {
    let mut p = example_params();
    p.tmax = 10.0;

    p.target_t = 5.0;
    assert_eq!(Simulator::stop_at(&p), 5.0);

    p.target_t = 50.0;
    assert_eq!(Simulator::stop_at(&p), 10.0);

    p.target_t = 0.0; // disabled: run to tmax
    assert_eq!(Simulator::stop_at(&p), 10.0);
}

#[test]
fn tick_splits_frame_delta_into_fixed_sub_steps() {
    let p = example_params(); // dt = 0.016
    let mut sim = Simulator::new(&p, true);

    // 0.1 / 0.016 = 6.25 -> 6 sub-steps of equal size
    sim.tick(0.1, &p);

    assert_eq!(sim.history().len(), 6);
    assert!((sim.t() - 0.1).abs() < 1e-12);
}

#[test]
fn clock_is_monotonic_and_never_passes_the_bound() {
    let mut p = example_params();
    p.tmax = 10.0;
    p.target_t = 5.0;

    let mut sim = Simulator::new(&p, true);
    let mut prev = sim.t();
    for _ in 0..1000 {
        sim.tick(0.1, &p);
        assert!(sim.t() >= prev);
        assert!(sim.t() <= 5.0);
        prev = sim.t();
    }

    assert_eq!(sim.t(), 5.0); // clamped exactly onto the bound
    assert_eq!(sim.phase(), Phase::StoppedAtBound);
    assert!(!sim.is_playing());
}

#[test]
fn toggle_is_inert_at_the_bound_until_it_is_raised() {
    let mut p = example_params();
    p.tmax = 10.0;
    p.target_t = 5.0;

    let mut sim = Simulator::new(&p, true);
    run_to_bound(&mut sim, &p, 0.1);

    sim.toggle_play(&p);
    assert!(!sim.is_playing());

    p.apply_edit("target_t", 8.0);
    sim.toggle_play(&p);
    assert!(sim.is_playing());
}

#[test]
fn reset_is_idempotent() {
    let mut p = example_params();
    let mut sim = Simulator::new(&p, true);
    for _ in 0..10 {
        sim.tick(0.1, &p);
    }

    sim.reset(&mut p);
    let once = (sim.t(), *sim.readout(), sim.history().len(), sim.trajectory().draw_range());

    sim.reset(&mut p);
    let twice = (sim.t(), *sim.readout(), sim.history().len(), sim.trajectory().draw_range());

    assert_eq!(once, twice);
    assert_eq!(once.0, 0.0);
    assert_eq!(once.2, 0);
    assert_eq!(once.3, 0);
}

#[test]
fn trajectory_caps_while_history_keeps_growing() {
    let mut p = example_params();
    p.tmax = 1000.0;
    p.target_t = 0.0;

    let mut sim = Simulator::new(&p, true);
    // ~63 sub-steps per 1 s tick at dt = 0.016
    for _ in 0..100 {
        sim.tick(1.0, &p);
    }

    assert!(sim.history().len() > MAX_POINTS);
    assert_eq!(sim.trajectory().draw_range(), MAX_POINTS);
    assert!(sim.trajectory().is_full());
}

#[test]
fn trajectory_points_are_in_render_units() {
    let p = example_params();
    let mut sim = Simulator::new(&p, true);
    sim.tick(0.016, &p);

    let s = &sim.history()[0];
    let expected = s.position() / p.m_per_unit;
    assert!((sim.trajectory().points()[0] - expected).norm() < 1e-12);
}

#[test]
fn pose_aligns_forward_axis_with_velocity() {
    let p = example_params();
    let mut sim = Simulator::new(&p, true);
    sim.tick(0.1, &p);

    let s = sim.history().last().unwrap();
    let unit_v = s.velocity() / s.speed();
    let rotated = sim.pose().rotation * NVec3::new(0.0, 1.0, 0.0);

    assert!((rotated - unit_v).norm() < 1e-9);
}

#[test]
fn pose_orientation_holds_when_nearly_at_rest() {
    let mut p = example_params();
    p.r = 0.0;
    p.dz_per_turn = 0.0;
    p.apply_derived(); // vz = 0, so |v| = 0 everywhere

    let mut sim = Simulator::new(&p, true);
    let probe = NVec3::new(0.0, 1.0, 0.0);
    let before = sim.pose().rotation * probe;
    sim.tick(0.1, &p);

    assert!((sim.pose().rotation * probe - before).norm() < 1e-12);
}

// ==================================================================================
// Projection tests
// ==================================================================================

#[test]
fn ortho_frustum_follows_viewport_aspect() {
    for mode in [Projection::Xy, Projection::Yz, Projection::Zx] {
        match camera_rig(mode, 2.0) {
            CameraRig::Orthographic { frustum, pose } => {
                assert_eq!(frustum.left, -10.0);
                assert_eq!(frustum.right, 10.0);
                assert_eq!(frustum.top, 5.0);
                assert_eq!(frustum.bottom, -5.0);
                assert_eq!(frustum.near, -1000.0);
                assert_eq!(frustum.far, 1000.0);
                assert_eq!(pose.target, NVec3::zeros());
            }
            CameraRig::Perspective { .. } => panic!("{mode:?} should be orthographic"),
        }
    }
}

#[test]
fn ortho_cameras_sit_on_their_axes() {
    let CameraRig::Orthographic { pose, .. } = camera_rig(Projection::Xy, 1.0) else {
        panic!("xy should be orthographic");
    };
    assert_eq!(pose.position, NVec3::new(0.0, 0.0, 100.0));
    assert_eq!(pose.up, NVec3::new(0.0, 1.0, 0.0));

    let CameraRig::Orthographic { pose, .. } = camera_rig(Projection::Yz, 1.0) else {
        panic!("yz should be orthographic");
    };
    assert_eq!(pose.position, NVec3::new(100.0, 0.0, 0.0));
    assert_eq!(pose.up, NVec3::new(0.0, 0.0, 1.0));

    let CameraRig::Orthographic { pose, .. } = camera_rig(Projection::Zx, 1.0) else {
        panic!("zx should be orthographic");
    };
    assert_eq!(pose.position, NVec3::new(0.0, 100.0, 0.0));
    assert_eq!(pose.up, NVec3::new(0.0, 0.0, 1.0));
}

#[test]
fn perspective_rig_keeps_the_free_camera_constants() {
    match camera_rig(Projection::Persp, 1.5) {
        CameraRig::Perspective { pose, fov_deg, near, far } => {
            assert_eq!(fov_deg, 50.0);
            assert_eq!(near, 0.01);
            assert_eq!(far, 1000.0);
            assert_eq!(pose.up, NVec3::new(0.0, 0.0, 1.0));
        }
        CameraRig::Orthographic { .. } => panic!("persp should be perspective"),
    }
}

// ==================================================================================
// Scenario / configuration tests
// ==================================================================================

#[test]
fn scenario_resolves_derived_fields_from_yaml() {
    let yaml = r#"
motion:
  r: 100.0
  t_input: 30.0
  dz_per_turn: 20.0
  z0: 20.0
playback:
  dt: 0.016
  tmax: 80.0
  target_t: 45.0
  m_per_unit: 10.0
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).expect("valid scenario yaml");
    let scenario = Scenario::build_scenario(cfg);

    assert!((scenario.parameters.omega - TAU / 30.0).abs() < 1e-12);
    assert!((scenario.parameters.vz - 20.0 / 30.0).abs() < 1e-12);
    assert_eq!(scenario.parameters.phi0, 0.0);
    assert_eq!(scenario.projection.mode(), Projection::Persp);
    assert!(scenario.simulator.is_playing());
    assert_eq!(scenario.simulator.t(), 0.0);
}

// ==================================================================================
// Export tests
// ==================================================================================

#[test]
fn table_csv_samples_whole_seconds_with_inverted_ax() {
    let p = example_params();
    let csv = table_csv(&p, 2.9);

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "t,x,y,z,vx,vy,vz,ax,ay,az");
    assert_eq!(lines.len(), 4); // header + t = 0, 1, 2

    // raw ax at t = 0 is -4.386; the table flips the sign
    assert!(lines[1].starts_with("0.000,100.000,0.000,20.000"));
    assert!(lines[1].contains("4.386"));
    assert!(!lines[1].contains("-4.386"));
}

#[test]
fn history_csv_has_one_row_per_sub_step() {
    let p = example_params();
    let mut sim = Simulator::new(&p, true);
    sim.tick(0.1, &p); // 6 sub-steps

    let csv = history_csv(sim.history());
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "t,x,y,z,vx,vy,vz,ax,ay,az");
    assert_eq!(lines.len(), sim.history().len() + 1);
}
