//! Error types for path searches.
//!
//! An unreachable goal is not an error: it is reported as an empty path.

use std::io;

use grid_util::point::Point;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("grid must have a non-zero size, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid of {width}x{height} cells is too large")]
    GridTooLarge { width: usize, height: usize },

    #[error("{role} {point} lies outside the {width}x{height} grid")]
    OutOfBounds {
        role: &'static str,
        point: Point,
        width: usize,
        height: usize,
    },

    #[error("step costs must be at least 1 (straight) and 2 (diagonal), got {orthogonal} and {diagonal}")]
    InvalidStepCost { orthogonal: i32, diagonal: i32 },

    #[error("diagonal cost {diagonal} can overflow stored costs on a {width}x{height} grid")]
    CostOverflow {
        width: usize,
        height: usize,
        diagonal: i32,
    },

    #[error("failed to spawn search worker: {0}")]
    Spawn(#[from] io::Error),

    #[error("search worker panicked")]
    WorkerPanicked,
}

pub type Result<T> = std::result::Result<T, PathError>;
