//! Knights and Dungeons headless runner
//!
//! Plays the level with the autopilot and reports how the session went.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use clap::Parser;
use serde::Serialize;

use knights_and_dungeons::Autopilot;
use knights_and_dungeons::renderer::build_frame;
use knights_and_dungeons::settings::{QualityPreset, Settings};
use knights_and_dungeons::sim::{FixedStep, GameEvent, GameState, SessionPhase, SessionStats, tick};

#[derive(Parser, Debug)]
#[command(name = "knights-and-dungeons", about = "Run a Knights and Dungeons session on autopilot")]
struct Args {
    /// RNG seed (defaults to the settings file, then the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Settings JSON file; missing or invalid files fall back to defaults
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Quality preset (low, medium, high), overriding the settings file
    #[arg(long)]
    quality: Option<String>,

    /// Pace the run at the real tick rate
    #[arg(long)]
    realtime: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// Stop at the first game-over or victory instead of retrying
    #[arg(long)]
    no_retry: bool,
}

#[derive(Debug, Clone, Serialize)]
struct RunReport {
    seed: u64,
    ticks: u64,
    phase: SessionPhase,
    health: i32,
    collected: u32,
    total_collectibles: u32,
    draw_commands: usize,
    stats: SessionStats,
}

impl RunReport {
    fn new(state: &GameState) -> Self {
        Self {
            seed: state.seed,
            ticks: state.time_ticks,
            phase: state.phase,
            health: state.player.health,
            collected: state.collected_count,
            total_collectibles: state.total_collectibles,
            draw_commands: build_frame(state).commands.len(),
            stats: state.stats,
        }
    }
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.settings {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    if let Some(name) = &args.quality {
        let preset = QualityPreset::parse(name)
            .ok_or_else(|| anyhow!("unknown quality preset '{name}'"))?;
        settings.apply_preset(preset);
    }
    log::info!("Quality: {}", settings.quality.as_str());
    Ok(settings)
}

fn run(args: &Args) -> Result<RunReport> {
    if args.ticks == 0 {
        return Err(anyhow!("--ticks must be > 0"));
    }

    let settings = load_settings(args)?;
    let seed = args.seed.or(settings.seed).unwrap_or_else(clock_seed);
    log::info!("Knights and Dungeons starting (seed {seed})");

    let mut state = GameState::new(seed, &settings);
    let mut pilot = Autopilot::new(!args.no_retry);
    let mut clock = FixedStep::new();
    let mut last = Instant::now();
    let mut remaining = args.ticks;

    while remaining > 0 {
        let steps = if args.realtime {
            thread::sleep(Duration::from_millis(1));
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f32();
            last = now;
            clock.advance(dt) as u64
        } else {
            1
        };

        for _ in 0..steps.min(remaining) {
            let input = pilot.next_input(&state);
            for event in tick(&mut state, &input) {
                match event {
                    GameEvent::GameOver | GameEvent::Victory => log::info!("{event:?}"),
                    _ => log::debug!("tick {}: {event:?}", state.time_ticks),
                }
            }
            remaining -= 1;
        }

        if state.phase == SessionPhase::Terminated
            || (args.no_retry
                && matches!(state.phase, SessionPhase::GameOver | SessionPhase::Victory))
        {
            break;
        }
    }

    Ok(RunReport::new(&state))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let report = run(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "seed {} | {} ticks | {:?} | health {} | collected {}/{} | defeated {} | \
             deaths {} | victories {}",
            report.seed,
            report.ticks,
            report.phase,
            report.health,
            report.collected,
            report.total_collectibles,
            report.stats.enemies_defeated,
            report.stats.deaths,
            report.stats.victories,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["knights-and-dungeons"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_quality_flag_applies_preset() {
        let settings = load_settings(&args(&["--quality", "LOW"])).expect("valid preset");
        assert_eq!(settings.quality, QualityPreset::Low);
        assert!(!settings.red_flash);
        assert_eq!(settings.max_particles(), 100);
    }

    #[test]
    fn test_unknown_quality_is_an_error() {
        assert!(load_settings(&args(&["--quality", "ultra"])).is_err());
    }

    #[test]
    fn test_missing_settings_file_falls_back() {
        let settings = load_settings(&args(&["--settings", "/nonexistent/knights.json"]))
            .expect("fallback to defaults");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_zero_ticks_rejected() {
        assert!(run(&args(&["--ticks", "0"])).is_err());
    }

    #[test]
    fn test_headless_run_reports_ticks() {
        let report = run(&args(&["--seed", "7", "--ticks", "120"])).expect("run completes");
        assert_eq!(report.seed, 7);
        assert_eq!(report.ticks, 120);
        assert_eq!(report.phase, SessionPhase::Playing);
    }
}
