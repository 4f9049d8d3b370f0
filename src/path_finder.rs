use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, info, warn};
use smallvec::SmallVec;

use crate::cell::{Cell, CellState, Tile};
use crate::components::Components;
use crate::config::SearchConfig;
use crate::error::PathError;
use crate::frontier::Frontier;
use crate::{Result, N_SMALLVEC_SIZE};

/// Outcome of [PathFinder::run].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    /// The search has not run yet.
    #[default]
    Pending,
    /// The goal was closed; [PathFinder::path] holds the route.
    Found,
    /// The frontier ran dry or start and goal are disconnected.
    NoPath,
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells moved to the closed set.
    pub expanded: usize,
    /// Entries pushed onto the frontier, including re-keyed cells.
    pub pushed: usize,
    /// Open cells that got a lower cost after being pushed.
    pub reprioritized: usize,
    /// Outdated frontier entries that were skipped.
    pub stale: usize,
}

/// Owns the grid of one search from `start` to `goal`. Occupied coordinates hold
/// [Tile::Blocked]; every other coordinate holds a [Cell] whose heuristic is its Manhattan
/// distance to the goal. An instance is meant to be run once.
#[derive(Clone, Debug)]
pub struct PathFinder {
    width: usize,
    height: usize,
    start: Point,
    goal: Point,
    tiles: Vec<Tile>,
    /// Occupied cells are [true].
    blocked: BoolGrid,
    frontier: Frontier,
    config: SearchConfig,
    status: SearchStatus,
    stats: SearchStats,
}

impl PathFinder {
    /// Builds a grid with the default [SearchConfig]. See [with_config](Self::with_config).
    pub fn new<I>(width: usize, height: usize, start: Point, goal: Point, blocked: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        Self::with_config(width, height, start, goal, blocked, SearchConfig::default())
    }

    /// Builds a `width` x `height` grid. Start, goal and every blocked coordinate must lie on
    /// the grid. A blocked start or goal is accepted and simply has no path.
    pub fn with_config<I>(
        width: usize,
        height: usize,
        start: Point,
        goal: Point,
        blocked: I,
        config: SearchConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        config.validate()?;
        if width == 0 || height == 0 {
            return Err(PathError::EmptyGrid { width, height });
        }
        let max_side = i32::MAX as usize;
        let size = width
            .checked_mul(height)
            .filter(|_| width <= max_side && height <= max_side)
            .ok_or(PathError::GridTooLarge { width, height })?;
        config.validate_grid(width, height)?;
        check_bounds("start", start, width, height)?;
        check_bounds("goal", goal, width, height)?;

        let mut blocked_grid = BoolGrid::new(width, height, false);
        for point in blocked {
            check_bounds("blocked cell", point, width, height)?;
            blocked_grid.set_point(point, true);
        }

        let mut tiles = vec![Tile::Blocked; size];
        for x in 0..width as i32 {
            for y in 0..height as i32 {
                let point = Point::new(x, y);
                if !blocked_grid.get_point(point) {
                    tiles[blocked_grid.get_ix_point(&point)] = Tile::Free(Cell::new(point, &goal));
                }
            }
        }

        let mut finder = PathFinder {
            width,
            height,
            start,
            goal,
            tiles,
            blocked: blocked_grid,
            frontier: Frontier::with_capacity(width + height),
            config,
            status: SearchStatus::Pending,
            stats: SearchStats::default(),
        };
        if let Some(cell) = finder.cell_mut(&start) {
            cell.final_cost = 0;
        }
        Ok(finder)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn goal(&self) -> Point {
        self.goal
    }
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
    pub fn status(&self) -> SearchStatus {
        self.status
    }
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
    /// The occupancy mask the grid was built from.
    pub fn blocked(&self) -> &BoolGrid {
        &self.blocked
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        self.blocked.point_in_bounds(*point)
    }

    pub fn tile(&self, point: &Point) -> Option<&Tile> {
        if self.in_bounds(point) {
            self.tiles.get(self.blocked.get_ix_point(point))
        } else {
            None
        }
    }

    /// The cell at `point`, [None] if it is blocked or off the grid.
    pub fn cell(&self, point: &Point) -> Option<&Cell> {
        self.tile(point).and_then(Tile::cell)
    }

    fn cell_mut(&mut self, point: &Point) -> Option<&mut Cell> {
        if self.in_bounds(point) {
            let ix = self.blocked.get_ix_point(point);
            self.tiles.get_mut(ix).and_then(Tile::cell_mut)
        } else {
            None
        }
    }

    pub fn is_blocked(&self, point: &Point) -> bool {
        self.tile(point).map_or(false, Tile::is_blocked)
    }

    /// Neighbours of `point` that may still be expanded, with the cost of stepping there.
    fn successors(&self, point: &Point) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        point
            .moore_neighborhood_smallvec()
            .into_iter()
            .filter(|p| self.cell(p).map_or(false, |cell| !cell.is_closed()))
            .map(|p| (p, self.config.step_cost(point, &p)))
            .collect()
    }

    /// Runs A* until the goal is closed or the frontier is exhausted. Only the first call
    /// searches; later calls return the stored status.
    pub fn run(&mut self) -> SearchStatus {
        if self.status != SearchStatus::Pending {
            warn!(
                "Search from {} to {} already ran, keeping {:?}",
                self.start, self.goal, self.status
            );
            return self.status;
        }
        debug!(
            "Searching {}x{} grid from {} to {}",
            self.width, self.height, self.start, self.goal
        );
        if self.config.check_components && !self.components_reachable() {
            info!("{} is not reachable from {}", self.goal, self.start);
            return self.finish(SearchStatus::NoPath);
        }

        let start = self.start;
        let model = self.config.cost_model;
        let priority = match self.cell_mut(&start) {
            Some(cell) => {
                cell.state = CellState::Open;
                model.priority(cell)
            }
            None => {
                info!("Start {} is blocked", start);
                return self.finish(SearchStatus::NoPath);
            }
        };
        self.frontier.push(start, priority, 0);

        while let Some(current) = self.pop_open() {
            let current_cost = match self.cell_mut(&current) {
                Some(cell) => {
                    cell.state = CellState::Closed;
                    cell.final_cost
                }
                None => continue,
            };
            self.stats.expanded += 1;
            if current == self.goal {
                debug!(
                    "Reached {} with cost {} after expanding {} cells",
                    self.goal, current_cost, self.stats.expanded
                );
                return self.finish(SearchStatus::Found);
            }
            for (next, step) in self.successors(&current) {
                self.relax(current, current_cost, next, step);
            }
        }
        info!(
            "No path from {} to {} after expanding {} cells",
            self.start, self.goal, self.stats.expanded
        );
        self.finish(SearchStatus::NoPath)
    }

    fn components_reachable(&self) -> bool {
        if self.is_blocked(&self.start) || self.is_blocked(&self.goal) {
            return false;
        }
        Components::generate(self.blocked.clone()).reachable(&self.start, &self.goal)
    }

    /// Pops the next open cell whose frontier entry still carries its current key.
    fn pop_open(&mut self) -> Option<Point> {
        let PathFinder {
            frontier,
            tiles,
            config,
            blocked,
            ..
        } = self;
        frontier.pop_min(|point, priority| {
            tiles
                .get(blocked.get_ix_point(point))
                .and_then(Tile::cell)
                .map_or(false, |cell| {
                    cell.is_open() && config.cost_model.priority(cell) == priority
                })
        })
    }

    /// Offers `next` a route through `current`. An unseen cell is always opened; an open cell
    /// only takes the route if it is strictly cheaper, which re-keys it in the frontier.
    fn relax(&mut self, current: Point, current_cost: i32, next: Point, step: i32) {
        let model = self.config.cost_model;
        let Some(cell) = self.cell_mut(&next) else {
            return;
        };
        let candidate = model.candidate_cost(current_cost, cell.heuristic_cost, step);
        let was_open = cell.is_open();
        if was_open && candidate >= cell.final_cost {
            return;
        }
        cell.final_cost = candidate;
        cell.parent = Some(current);
        cell.state = CellState::Open;
        let priority = model.priority(cell);
        if was_open {
            self.stats.reprioritized += 1;
        }
        self.frontier.push(next, priority, candidate);
    }

    fn finish(&mut self, status: SearchStatus) -> SearchStatus {
        self.status = status;
        self.stats.pushed = self.frontier.pushed();
        self.stats.stale = self.frontier.stale();
        debug!(
            "Search finished with {:?}, {} frontier entries left, {:?}",
            status,
            self.frontier.len(),
            self.stats
        );
        status
    }

    /// Cells of the found route from the goal back to the first step, following parent links.
    /// The start is left out. Empty if the goal was not reached.
    pub fn reversed_path(&self) -> Vec<Point> {
        let goal = match self.cell(&self.goal) {
            Some(cell) if cell.is_closed() => cell,
            _ => return Vec::new(),
        };
        std::iter::successors(Some(goal), |cell| {
            cell.parent.and_then(|parent| self.cell(&parent))
        })
        .take_while(|cell| cell.parent.is_some())
        .map(|cell| cell.point)
        .collect()
    }

    /// The found route in walking order, from the first step after the start up to and
    /// including the goal. Empty if no path exists or start and goal coincide.
    pub fn path(&self) -> Vec<Point> {
        let mut path = self.reversed_path();
        path.reverse();
        path
    }

    /// Step cost of the found route, [None] if the goal was not reached.
    pub fn path_cost(&self) -> Option<i32> {
        (self.status == SearchStatus::Found)
            .then(|| path_cost(self.start, &self.path(), &self.config))
    }
}

/// Sums the step costs of walking from `start` along `path`, saturating at [i32::MAX].
pub fn path_cost(start: Point, path: &[Point], config: &SearchConfig) -> i32 {
    std::iter::once(&start)
        .chain(path)
        .tuple_windows()
        .map(|(a, b)| config.step_cost(a, b))
        .fold(0, i32::saturating_add)
}

fn check_bounds(role: &'static str, point: Point, width: usize, height: usize) -> Result<()> {
    if point.x < 0 || point.y < 0 || point.x as usize >= width || point.y as usize >= height {
        return Err(PathError::OutOfBounds {
            role,
            point,
            width,
            height,
        });
    }
    Ok(())
}
