//! # grid_astar
//!
//! Single-use [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) search on a dense grid
//! in which some cells are occupied and cannot be entered. Moves go to any of the 8 neighbours,
//! with straight steps costing [C] and diagonal steps costing [D]. The heuristic is the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to the goal in cells.
//!
//! A [PathFinder] is built from the grid size, start, goal and the occupied coordinates, is
//! [run](PathFinder::run) once and then queried for its [path](PathFinder::path). Because every
//! search owns its grid, searches can run on worker threads without sharing state; see
//! [spawn_search] for the threaded entry point.
//!
//! ```
//! use grid_astar::PathFinder;
//! use grid_util::point::Point;
//!
//! let mut finder = PathFinder::new(5, 5, Point::new(0, 0), Point::new(4, 0), [Point::new(2, 0)])?;
//! finder.run();
//! assert_eq!(finder.path_cost(), Some(48));
//! # Ok::<(), grid_astar::PathError>(())
//! ```
mod cell;
pub mod components;
pub mod config;
pub mod error;
mod frontier;
pub mod path_finder;
mod render;
pub mod worker;

use grid_util::point::Point;

pub use cell::{Cell, CellState, Tile, UNVISITED};
pub use config::{CostModel, SearchConfig};
pub use error::{PathError, Result};
pub use path_finder::{path_cost, PathFinder, SearchStats, SearchStatus};
pub use worker::{spawn_search, PathRequest, SearchHandle, SearchOutcome};

/// Cost of a cardinal (straight) step.
pub const C: i32 = 10;
/// Cost of a diagonal step, roughly `C * sqrt(2)`.
pub const D: i32 = 14;
/// Helper constant for the octile distance, `2 * C - D`.
pub const E: i32 = 2 * C - D;

const N_SMALLVEC_SIZE: usize = 8;

/// Whether `b` can be reached from `a` in a single straight or diagonal step.
pub fn is_single_step(a: &Point, b: &Point) -> bool {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
}
