use std::fmt;

use crate::error::LifeError;

/// Offsets of the eight cells around a position, row first.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One generation of the board.
///
/// The board is a torus: every index is taken modulo its dimension, so
/// `get(-1, -1)` reads the bottom-right cell. Dimensions never change after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    data: Vec<bool>,
}

impl Grid {

    /// All-dead grid of the given size.
    pub fn new(rows: usize, columns: usize) -> Result<Self, LifeError> {
        if rows == 0 || columns == 0 {
            return Err(LifeError::InvalidDimension { rows, columns });
        }

        Ok(Grid {
            rows,
            columns,
            data: vec![false; rows * columns],
        })
    }

    /// Builds a grid sized after the pattern itself: one row per line, as
    /// many columns as the first line has characters.
    pub fn from_pattern(text: &str) -> Result<Self, LifeError> {
        let rows = pattern_lines(text).count();
        let columns = pattern_lines(text).next().map_or(0, |l| l.chars().count());

        let mut grid = Self::new(rows, columns)?;
        grid.load_pattern(text);
        Ok(grid)
    }

    /// Marks every `'1'` of the pattern alive and everything else dead.
    /// Whatever falls outside the grid is dropped.
    pub fn load_pattern(&mut self, text: &str) {
        for (i, line) in pattern_lines(text).take(self.rows).enumerate() {
            for (j, ch) in line.chars().take(self.columns).enumerate() {
                let idx = self.index(i, j);
                self.data[idx] = ch == '1';
            }
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn get(&self, row: isize, column: isize) -> bool {
        let (r, c) = self.wrap(row, column);
        self.data[self.index(r, c)]
    }

    #[inline]
    pub fn set(&mut self, row: isize, column: isize, alive: bool) {
        let (r, c) = self.wrap(row, column);
        let idx = self.index(r, c);
        self.data[idx] = alive;
    }

    /// The eight wrapped neighbour positions of a cell, in enumeration
    /// order. On grids thinner than three cells some positions repeat.
    pub fn neighbors(&self, row: usize, column: usize) -> [(usize, usize); 8] {
        NEIGHBOURS.map(|(dr, dc)| self.wrap(row as isize + dr, column as isize + dc))
    }

    pub fn live_neighbors(&self, row: usize, column: usize) -> usize {
        self.neighbors(row, column)
            .iter()
            .filter(|&&(r, c)| self.data[self.index(r, c)])
            .count()
    }

    pub fn population(&self) -> usize {
        self.data.iter().filter(|c| **c).count()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.data.chunks(self.columns)
    }

    /// Computes the successor generation into a fresh grid.
    pub fn next_generation(&self) -> Grid {
        let mut next = Vec::with_capacity(self.data.len());

        for i in 0..self.rows {
            for j in 0..self.columns {
                next.push(Self::produce_value(
                    self.data[self.index(i, j)],
                    self.live_neighbors(i, j),
                ));
            }
        }

        Grid {
            rows: self.rows,
            columns: self.columns,
            data: next,
        }
    }

    #[inline]
    fn produce_value(current: bool, n: usize) -> bool {
        matches!((current, n), (true, 2) | (true, 3) | (false, 3))
    }

    #[inline]
    fn wrap(&self, row: isize, column: isize) -> (usize, usize) {
        (
            row.rem_euclid(self.rows as isize) as usize,
            column.rem_euclid(self.columns as isize) as usize,
        )
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &cell in row {
                f.write_str(if cell { "1" } else { "0" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

fn pattern_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
}
