//! Runs a search off the caller's thread.
//!
//! A [PathRequest] is a snapshot of everything a search needs. [spawn_search] moves it onto a
//! dedicated thread that builds a fresh [PathFinder], runs it and hands back an immutable
//! [SearchOutcome] through a [SearchHandle]. Nothing is shared between searches, so any number
//! of them may be in flight at once. A running search cannot be interrupted; dropping the handle
//! discards its result.

use std::thread::{self, JoinHandle};

use fxhash::FxHashSet;
use grid_util::point::Point;
use log::debug;

use crate::config::SearchConfig;
use crate::error::PathError;
use crate::path_finder::{PathFinder, SearchStats, SearchStatus};
use crate::Result;

/// Name given to search threads.
pub const WORKER_THREAD_NAME: &str = "astar-search";

/// Input of one search. Blocked coordinates are kept as a set, so several entities standing on
/// the same cell collapse into one entry.
#[derive(Clone, Debug)]
pub struct PathRequest {
    pub width: usize,
    pub height: usize,
    pub start: Point,
    pub goal: Point,
    pub blocked: FxHashSet<Point>,
    pub config: SearchConfig,
}

impl PathRequest {
    pub fn new<I>(width: usize, height: usize, start: Point, goal: Point, blocked: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        PathRequest {
            width,
            height,
            start,
            goal,
            blocked: blocked.into_iter().collect(),
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the search on the current thread.
    pub fn solve(self) -> Result<SearchOutcome> {
        let mut finder = PathFinder::with_config(
            self.width,
            self.height,
            self.start,
            self.goal,
            self.blocked,
            self.config,
        )?;
        let status = finder.run();
        Ok(SearchOutcome {
            status,
            path: finder.path(),
            cost: finder.path_cost(),
            stats: finder.stats(),
        })
    }
}

/// Result of a finished search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    /// Route from the first step after the start up to the goal, empty if there is none.
    pub path: Vec<Point>,
    pub cost: Option<i32>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.status == SearchStatus::Found
    }
}

/// Handle to a search running on its own thread.
#[derive(Debug)]
pub struct SearchHandle {
    handle: JoinHandle<Result<SearchOutcome>>,
}

impl SearchHandle {
    /// Whether the search is done, so [join](Self::join) will not block.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the search and returns its outcome, or the error that stopped it.
    pub fn join(self) -> Result<SearchOutcome> {
        self.handle
            .join()
            .map_err(|_| PathError::WorkerPanicked)?
    }
}

/// Spawns a thread that solves `request`.
pub fn spawn_search(request: PathRequest) -> Result<SearchHandle> {
    debug!(
        "Spawning search from {} to {} with {} blocked cells",
        request.start,
        request.goal,
        request.blocked.len()
    );
    let handle = thread::Builder::new()
        .name(WORKER_THREAD_NAME.into())
        .spawn(move || request.solve())?;
    Ok(SearchHandle { handle })
}
