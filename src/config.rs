//! Command line and run settings.

use std::path::PathBuf;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use tracing::Level;

use crate::error::LifeError;

pub const DEFAULT_FPS: u32 = 6;

const NANOS_PER_SEC: u64 = 1_000_000_000;

#[derive(Parser, Debug)]
#[command(name = "life_the_game")]
#[command(version)]
#[command(about = "Conway's Game of Life on a toroidal board", long_about = None)]
pub struct Cli {
    /// Pattern file: one line per row, '1' marks a live cell
    pub pattern: Option<PathBuf>,

    /// Generations per second
    #[arg(default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Busy-poll between ticks instead of sleeping
    #[arg(long)]
    pub spin: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// How the loop waits for the next tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pacing {
    /// Short sleeps, at most `POLL_SLICE` each.
    #[default]
    Sleep,
    /// Spin on the clock. Tighter cadence, one core at 100%.
    Spin,
}

/// Where log lines are written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub pattern: PathBuf,
    pub fps: u32,
    pub pacing: Pacing,
    pub verbosity: u8,
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn into_settings(self) -> Result<Settings, LifeError> {
        let pattern = self.pattern.ok_or_else(|| {
            LifeError::Usage(format!(
                "expected a file to specify the first frame\n{}",
                Cli::command().render_usage()
            ))
        })?;
        validate_fps(self.fps)?;

        Ok(Settings {
            pattern,
            fps: self.fps,
            pacing: if self.spin { Pacing::Spin } else { Pacing::Sleep },
            verbosity: self.verbose,
            log_file: self.log_file,
        })
    }
}

impl Settings {
    pub fn log_sink(&self) -> LogSink {
        match &self.log_file {
            Some(path) => LogSink::File(path.clone()),
            None => LogSink::Stderr,
        }
    }

    /// Requested level from `-v` flags.
    pub fn log_level(&self) -> Level {
        match self.verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Level the subscriber is built with.
    ///
    /// Stderr on a terminal shares the screen with the board, and any line
    /// printed between frames shifts the footprint the next frame erases.
    /// There it is held at WARN, which is only logged before the first frame.
    pub fn effective_log_level(&self, stderr_is_terminal: bool) -> Level {
        match self.log_sink() {
            LogSink::Stderr if stderr_is_terminal => Level::WARN,
            _ => self.log_level(),
        }
    }
}

pub fn validate_fps(fps: u32) -> Result<u32, LifeError> {
    if fps == 0 {
        Err(LifeError::InvalidFps(fps))
    } else {
        Ok(fps)
    }
}

/// One second split into `fps` whole nanoseconds; the remainder is dropped.
/// `fps` must be positive.
#[inline]
pub fn tick_period(fps: u32) -> Duration {
    Duration::from_nanos(NANOS_PER_SEC / u64::from(fps))
}
