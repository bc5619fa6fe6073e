use life_the_game::{
    config::{Cli, LogSink, Settings},
    draw::{Rect, TermRenderer},
    proc::Grid,
    signal,
    sim::Simulation,
};

use std::{
    fs::{self, File},
    io,
    process::ExitCode,
    sync::Mutex,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use tracing::warn;

fn main() -> ExitCode {
    let settings = match Cli::parse().into_settings() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logging(&settings) {
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(settings: &Settings) -> Result<()> {
    let level = settings.effective_log_level(io::stderr().is_tty());
    let builder = tracing_subscriber::fmt().with_max_level(level);

    match settings.log_sink() {
        LogSink::File(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            let subscriber = builder.with_ansi(false).with_writer(Mutex::new(file)).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogSink::Stderr => {
            let subscriber = builder.with_writer(io::stderr).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    if level != settings.log_level() {
        warn!("stderr is the board's terminal, pass --log-file for verbose logs");
    }
    Ok(())
}

fn run(settings: &Settings) -> Result<()> {
    let text = fs::read_to_string(&settings.pattern)
        .with_context(|| format!("failed to read {}", settings.pattern.display()))?;
    let grid = Grid::from_pattern(&text)
        .with_context(|| format!("bad pattern in {}", settings.pattern.display()))?;

    match Rect::term_size() {
        Ok(term) if !term.holds(grid.rows(), grid.columns()) => warn!(
            rows = grid.rows(),
            columns = grid.columns(),
            width = term.w(),
            height = term.h(),
            "board is larger than the terminal, frames will not redraw cleanly"
        ),
        Ok(_) => {}
        Err(e) => warn!(error = %e, "could not read terminal size"),
    }

    let mut sim = Simulation::new(grid, settings.fps, settings.pacing)?;
    let cancel = signal::interrupt_token().context("failed to install interrupt handler")?;

    let mut term = TermRenderer::stdout();
    term.begin()?;
    let result = sim.run(&mut term, &cancel);
    let restored = term.finish();
    result?;
    restored
}

