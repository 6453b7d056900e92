use ballsim::{FrameSink, Scenario, ScenarioConfig, System};
use ballsim::{bench_step, bench_step_curve, run};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "tenballs.yaml")]
    file_name: String,

    /// Run the frame-step benchmarks instead of a scenario
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

/// Sink that logs a progress line every 60 frames. Stands in for the
/// external scene serializer during plain CLI runs.
struct LogSink;

impl FrameSink for LogSink {
    fn frame(&mut self, index: usize, system: &System) {
        if (index + 1) % 60 == 0 {
            if let Some(b) = system.spheres.first() {
                tracing::info!(
                    "frame {} complete, t = {:.2}, sphere 0 at y = {:.3}",
                    index + 1,
                    system.t,
                    b.x.y
                );
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if args.bench {
        bench_step();
        bench_step_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    tracing::info!(
        "running {} frames with {} spheres, h0 = {}",
        scenario.parameters.frame_count,
        scenario.system.spheres.len(),
        scenario.parameters.h0
    );

    run(&mut scenario, &mut LogSink)?;

    tracing::info!("simulation finished at t = {:.2}", scenario.system.t);

    Ok(())
}
