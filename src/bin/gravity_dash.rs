//! Gravity Dash - Headless Runner
//!
//! Run with: `cargo run --bin gravity_dash -- demos/level1.json`
//!
//! Plays a level without a window: a scripted jump pattern is fed through
//! the keyboard state, the engine is ticked at a fixed 60 Hz frame time,
//! and a summary is printed when the run ends.
//!
//! Options:
//! - `--config <file>`: physics tuning as JSON (missing fields keep defaults)
//! - `--ticks <n>`: stop after n ticks (default 3600)
//! - `--jump-every <n>`: hold jump for one tick every n ticks (default 45, 0 = never)
//! - `--steer <left|right>`: hold a steering key the whole run
//!
//! Set `RUST_LOG=debug` to see trigger firings.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use gravity_dash_engine::audio::{LogSink, RecordingSink, SoundEvent, SoundSink};
use gravity_dash_engine::config::PhysicsConfig;
use gravity_dash_engine::game::GameState;
use gravity_dash_engine::input::{KEY_JUMP, KEYS_LEFT, KEYS_RIGHT};
use gravity_dash_engine::level::Level;

const FRAME_TIME: f32 = 1.0 / 60.0;

/// Logs every sound and keeps counts for the summary.
#[derive(Default)]
struct HostSink {
    log: LogSink,
    recorded: RecordingSink,
}

impl SoundSink for HostSink {
    fn play(&mut self, event: SoundEvent) {
        self.log.play(event);
        self.recorded.play(event);
    }
}

struct Options {
    level: PathBuf,
    config: Option<PathBuf>,
    max_ticks: u64,
    jump_every: u64,
    steer: Option<u8>,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut level = None;
        let mut options = Options {
            level: PathBuf::new(),
            config: None,
            max_ticks: 3600,
            jump_every: 45,
            steer: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => options.config = Some(next_value(&mut args, &arg)?.into()),
                "--ticks" => options.max_ticks = parse_number(&next_value(&mut args, &arg)?)?,
                "--jump-every" => {
                    options.jump_every = parse_number(&next_value(&mut args, &arg)?)?
                }
                "--steer" => {
                    options.steer = match next_value(&mut args, &arg)?.as_str() {
                        "left" => Some(KEYS_LEFT[0]),
                        "right" => Some(KEYS_RIGHT[0]),
                        other => return Err(format!("unknown steer direction '{other}'")),
                    }
                }
                _ if arg.starts_with("--") => return Err(format!("unknown option '{arg}'")),
                _ => level = Some(PathBuf::from(arg)),
            }
        }

        options.level = level.ok_or("missing level file")?;
        Ok(options)
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("{flag} needs a value"))
}

fn parse_number(value: &str) -> Result<u64, String> {
    value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))
}

fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let config = match &options.config {
        Some(path) => PhysicsConfig::load(path)?,
        None => PhysicsConfig::default(),
    };
    let level = Level::load(&options.level)?;
    if !level.music().is_empty() {
        log::info!("Level music: {}", level.music());
    }

    let mut state = GameState::with_config(level, config);
    let mut sounds = HostSink::default();

    if let Some(key) = options.steer {
        state.player.keys.set(key, true);
    }

    while state.tick_count < options.max_ticks {
        let jump = options.jump_every > 0 && state.tick_count % options.jump_every == 0;
        state.player.keys.set(KEY_JUMP, jump);

        let report = state.tick(FRAME_TIME, &mut sounds);
        if let Some(gravity) = report.gravity_changed {
            log::info!("Gravity is now {gravity} (tick {})", state.tick_count);
        }

        if state.is_dead() {
            break;
        }
        if state.past_course_end() {
            log::info!("Course cleared at tick {}", state.tick_count);
            break;
        }
    }

    let outcome = if state.is_dead() {
        "crashed"
    } else if state.past_course_end() {
        "cleared"
    } else {
        "time limit"
    };

    println!("Outcome:   {outcome}");
    println!("Ticks:     {}", state.tick_count);
    println!("Time:      {:.2}s", state.run_time);
    println!("Distance:  {:.1}", state.distance());
    println!("Position:  {:.2?}", state.player.position);
    println!("Gravity:   {}", state.gravity);
    println!(
        "Sounds:    {} jump, {} bounce, {} crash",
        sounds.recorded.count(SoundEvent::Jump),
        sounds.recorded.count(SoundEvent::Bounce),
        sounds.recorded.count(SoundEvent::Crash)
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!(
                "usage: gravity_dash <level.json> [--config <file>] [--ticks <n>] [--jump-every <n>] [--steer <left|right>]"
            );
            return ExitCode::from(2);
        }
    };

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
