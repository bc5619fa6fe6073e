use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifeError {
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    InvalidDimension { rows: usize, columns: usize },

    #[error("fps must be a positive integer, got {0}")]
    InvalidFps(u32),

    #[error("{0}")]
    Usage(String),
}
