use helisim::{state_at, table_csv, Scenario, ScenarioConfig};
use helisim::{bench_playback, bench_state_at};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Frame cadence used for headless playback
const FRAME_DT: f64 = 1.0 / 60.0;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "helix.yaml")]
    file_name: String,

    #[arg(short, default_value = "helicoide.csv")]
    out_file: String,

    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_state_at();
        bench_playback();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg);

    println!(
        "helisim: R = {} m, T = {} s, rise per turn = {} m, stopping at t = {} s",
        scenario.parameters.r,
        scenario.parameters.t_input,
        scenario.parameters.dz_per_turn,
        helisim::Simulator::stop_at(&scenario.parameters),
    );

    // Headless playback: fixed frame cadence until the bound auto-pauses
    while scenario.simulator.is_playing() {
        scenario.simulator.tick(FRAME_DT, &scenario.parameters);
    }

    let ro = scenario.simulator.readout();
    println!(
        "t = {:.3} s, |v| = {:.4} m/s, |a| = {:.4} m/s^2, T = {:.4} s, pitch = {:.4} m",
        ro.t, ro.speed, ro.acc_magnitude, ro.period, ro.pitch
    );

    // Instant query at the configured target time
    let tq = scenario.parameters.target_t;
    let s = state_at(tq, &scenario.parameters);
    println!("t = {:.3} s", tq);
    println!("pos = ({:.3}, {:.3}, {:.3}) m", s.x, s.y, s.z);
    println!(
        "vel = ({:.3}, {:.3}, {:.3}) m/s | |v| = {:.4}",
        s.vx, s.vy, s.vz,
        s.speed()
    );
    println!(
        "acc = ({:.3}, {:.3}, {:.3}) m/s^2 | |a| = {:.4}",
        s.ax, s.ay, s.az,
        s.acc_magnitude()
    );

    // Whole-second table up to the current clock
    let csv = table_csv(&scenario.parameters, scenario.simulator.t());
    std::fs::write(&args.out_file, csv)?;
    println!(
        "wrote {} ({} history samples, {} trajectory points)",
        args.out_file,
        scenario.simulator.history().len(),
        scenario.simulator.trajectory().draw_range()
    );

    Ok(())
}
