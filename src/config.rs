use grid_util::point::Point;

use crate::{cell::Cell, error::PathError, Result, C, D};

/// How a tentative cost is folded into the stored cost and the frontier priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CostModel {
    /// Classic bookkeeping: [Cell::final_cost] holds the accumulated step cost and the frontier is
    /// ordered by that cost plus the heuristic. Paths are optimal.
    #[default]
    Separated,
    /// The heuristic of the target is added on top of the predecessor's stored value and the
    /// result is both the stored cost and the priority. Heuristics therefore accumulate along the
    /// path, which biases the search towards the goal but gives up the optimality guarantee.
    Accumulated,
}

impl CostModel {
    /// Value a neighbour would store when reached from a cell whose stored cost is `current`.
    pub fn candidate_cost(&self, current: i32, heuristic: i32, step: i32) -> i32 {
        match self {
            CostModel::Separated => current.saturating_add(step),
            CostModel::Accumulated => heuristic.saturating_add(current).saturating_add(step),
        }
    }

    /// Frontier key of a cell under this model.
    pub fn priority(&self, cell: &Cell) -> i32 {
        match self {
            CostModel::Separated => cell.final_cost.saturating_add(cell.heuristic_cost),
            CostModel::Accumulated => cell.final_cost,
        }
    }
}

/// Tunables of a single search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Cost of a straight step.
    pub orthogonal_cost: i32,
    /// Cost of a diagonal step.
    pub diagonal_cost: i32,
    pub cost_model: CostModel,
    /// Checks whether start and goal share a connected component before searching, so an
    /// unreachable goal does not flood the whole reachable area.
    pub check_components: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            orthogonal_cost: C,
            diagonal_cost: D,
            cost_model: CostModel::default(),
            check_components: false,
        }
    }
}

impl SearchConfig {
    /// The Manhattan heuristic changes by at most 1 per straight step and 2 per diagonal step,
    /// so it stays admissible only while the step costs are at least that large. A diagonal
    /// step dearer than two straight ones would never be the cheapest move.
    pub fn validate(&self) -> Result<()> {
        if self.orthogonal_cost < 1
            || self.diagonal_cost < 2
            || self.diagonal_cost as i64 > 2 * self.orthogonal_cost as i64
        {
            return Err(PathError::InvalidStepCost {
                orthogonal: self.orthogonal_cost,
                diagonal: self.diagonal_cost,
            });
        }
        Ok(())
    }

    /// Checks that no stored cost on a `width` x `height` grid can reach [UNVISITED](crate::UNVISITED).
    /// A route visits every cell at most once and a heuristic is below `width + height`; under
    /// [CostModel::Accumulated] every step also adds the heuristic of the cell it enters.
    pub fn validate_grid(&self, width: usize, height: usize) -> Result<()> {
        self.validate()?;
        let per_step = match self.cost_model {
            CostModel::Separated => self.diagonal_cost as u128,
            CostModel::Accumulated => self.diagonal_cost as u128 + width as u128 + height as u128,
        };
        let worst = width as u128 * height as u128 * per_step + width as u128 + height as u128;
        if worst >= crate::UNVISITED as u128 {
            return Err(PathError::CostOverflow {
                width,
                height,
                diagonal: self.diagonal_cost,
            });
        }
        Ok(())
    }

    /// Cost of the single step between two adjacent points.
    pub fn step_cost(&self, from: &Point, to: &Point) -> i32 {
        debug_assert!(crate::is_single_step(from, to));
        if from.x != to.x && from.y != to.y {
            self.diagonal_cost
        } else {
            self.orthogonal_cost
        }
    }

    /// Cost of the cheapest unobstructed path between two points, taking as many diagonal steps
    /// as possible before going straight.
    pub fn octile_distance(&self, p1: &Point, p2: &Point) -> i32 {
        let delta_x = (p1.x - p2.x).abs();
        let delta_y = (p1.y - p2.y).abs();
        let straight = 2 * self.orthogonal_cost - self.diagonal_cost;
        // Formula from https://github.com/riscy/a_star_on_grids
        (straight * (delta_x - delta_y).abs() + self.diagonal_cost * (delta_x + delta_y)) / 2
    }
}
