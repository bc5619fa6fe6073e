//! Fixed-timestep driver: render, advance, wait, repeat.

use std::{
    thread,
    time::{ Duration, Instant },
};

use anyhow::{ Context, Result };
use tracing::{ debug, info };

use crate::{
    config::{ tick_period, validate_fps, Pacing },
    draw::Renderer,
    error::LifeError,
    proc::Grid,
    signal::CancelToken,
};

/// Longest single sleep under `Pacing::Sleep`, which bounds how late a
/// cancellation is noticed.
pub const POLL_SLICE: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Idle,
    Running,
    Stopped,
}

pub struct Simulation {
    grid: Grid,
    period: Duration,
    pacing: Pacing,
    state: State,
    generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid, fps: u32, pacing: Pacing) -> Result<Self, LifeError> {
        validate_fps(fps)?;
        Ok(Simulation {
            grid,
            period: tick_period(fps),
            pacing,
            state: State::Idle,
            generation: 0,
        })
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations advanced so far.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Runs until `cancel` fires or the renderer fails.
    ///
    /// Ticks never come closer than one period apart; a late tick is not
    /// made up for.
    pub fn run<R: Renderer + ?Sized>(&mut self, renderer: &mut R, cancel: &CancelToken) -> Result<()> {
        if self.state == State::Stopped {
            return Ok(());
        }
        self.state = State::Running;
        info!(period = ?self.period, pacing = ?self.pacing, "simulation running");

        let mut last_tick: Option<Instant> = None;
        loop {
            if cancel.is_cancelled() {
                self.stop();
                return Ok(());
            }

            let now = Instant::now();
            let due = match last_tick {
                None => true,
                Some(t) => now.duration_since(t) >= self.period,
            };

            if due {
                last_tick = Some(now);
                if let Err(e) = self.tick(renderer) {
                    self.stop();
                    return Err(e);
                }
            } else if let Some(t) = last_tick {
                self.wait(self.period.saturating_sub(now.duration_since(t)));
            }
        }
    }

    fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        renderer
            .render(&self.grid)
            .with_context(|| format!("render failed at generation {}", self.generation))?;
        self.grid = self.grid.next_generation();
        self.generation += 1;
        debug!(generation = self.generation, population = self.grid.population(), "tick");
        Ok(())
    }

    fn wait(&self, remaining: Duration) {
        match self.pacing {
            Pacing::Sleep => thread::sleep(remaining.min(POLL_SLICE)),
            Pacing::Spin => {
                std::hint::spin_loop();
                thread::yield_now();
            }
        }
    }

    fn stop(&mut self) {
        self.state = State::Stopped;
        info!(generation = self.generation, "simulation stopped");
    }
}
