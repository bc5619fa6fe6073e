use std::io::{ self, Write };

use anyhow::{ Context, Result };
use crossterm::{
    cursor::{ Hide, MoveToColumn, MoveUp, Show },
    queue,
    terminal::{ self, Clear, ClearType },
};

use crate::proc::Grid;

pub const ALIVE: char = '*';
pub const DEAD: char = ' ';

/// Output device for the simulation.
///
/// `render` redraws the whole board before returning and leaves the device
/// so that the next call overwrites exactly the same footprint.
pub trait Renderer {
    fn render(&mut self, grid: &Grid) -> Result<()>;
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Rect {
    w: u16,
    h: u16,
}

impl Rect {
    #[inline]
    pub fn new(width: u16, height: u16) -> Self {
        Rect { w: width, h: height }
    }

    #[inline]
    pub fn term_size() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Rect::new(width, height))
    }

    #[inline]
    pub fn w(&self) -> u16 {
        self.w
    }

    #[inline]
    pub fn h(&self) -> u16 {
        self.h
    }

    /// Whether a board of `rows` x `columns` cells fits inside.
    #[inline]
    pub fn holds(&self, rows: usize, columns: usize) -> bool {
        rows <= self.h as usize && columns <= self.w as usize
    }
}

/// The board as text, one line per row.
pub fn render_text(grid: &Grid) -> String {
    let mut s = String::with_capacity(grid.rows() * (grid.columns() + 1));
    for row in grid.iter_rows() {
        for &cell in row {
            s.push(if cell { ALIVE } else { DEAD });
        }
        s.push('\n');
    }
    s
}

/// Draws in place on a terminal: each frame erases the rows the previous
/// one printed and writes the new board below the cursor.
pub struct TermRenderer<W: Write> {
    out: W,
    drawn_rows: usize,
}

impl TermRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TermRenderer<W> {
    #[inline]
    pub fn new(out: W) -> Self {
        TermRenderer { out, drawn_rows: 0 }
    }

    pub fn begin(&mut self) -> Result<()> {
        queue!(self.out, Hide)?;
        self.out.flush().context("failed to hide cursor")
    }

    pub fn finish(&mut self) -> Result<()> {
        queue!(self.out, Show)?;
        self.out.flush().context("failed to restore cursor")
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn erase(&mut self) -> io::Result<()> {
        for _ in 0..self.drawn_rows {
            queue!(self.out, MoveUp(1), Clear(ClearType::CurrentLine))?;
        }
        queue!(self.out, MoveToColumn(0))
    }
}

impl<W: Write> Renderer for TermRenderer<W> {
    fn render(&mut self, grid: &Grid) -> Result<()> {
        if self.drawn_rows > 0 {
            self.erase().context("failed to erase previous frame")?;
        }
        self.out
            .write_all(render_text(grid).as_bytes())
            .context("failed to write frame")?;
        self.out.flush().context("failed to flush frame")?;
        self.drawn_rows = grid.rows();
        Ok(())
    }
}
