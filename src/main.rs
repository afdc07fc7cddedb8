use ebeam::{bench_field_step, run_2d, run_loop, FrameLog, ScenarioConfig, SimulationState};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Electron beam simulator")]
struct Args {
    /// Scenario file, looked up in `scenarios/` unless the path exists
    #[arg(short, default_value = "enhanced.yaml")]
    file_name: String,

    /// Run without a window, logging frame statistics
    #[arg(long)]
    headless: bool,

    /// Stop a headless run after this many frames
    #[arg(long)]
    frames: Option<u64>,

    /// Time the field step and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = if Path::new(file_name).exists() {
        PathBuf::from(file_name)
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

// the windowed viewer gets its subscriber from bevy's LogPlugin
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.bench || args.headless {
        init_tracing();
    }

    if args.bench {
        bench_field_step()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario(&args.file_name)?;
    let mut state = SimulationState::build(scenario_cfg).context("invalid scenario")?;

    if args.headless {
        let summary = run_loop(&mut state, &mut FrameLog::new(100), args.frames);
        info!(?summary, "headless run finished");
    } else {
        run_2d(state);
    }

    Ok(())
}
