use grid_util::point::Point;

/// Stored cost of a cell that no search has reached yet.
pub const UNVISITED: i32 = i32::MAX;

/// Where a cell stands in the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellState {
    /// Not reached yet.
    #[default]
    Unseen,
    /// In the frontier with a tentative cost.
    Open,
    /// Cost is final, never expanded again.
    Closed,
}

/// One free grid coordinate and its search bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub point: Point,
    /// Manhattan distance to the goal, fixed at construction.
    pub heuristic_cost: i32,
    /// Best value found so far, [UNVISITED] until reached. Only ever decreases.
    pub final_cost: i32,
    /// Predecessor on the best known path. A coordinate into the owning grid.
    pub parent: Option<Point>,
    pub state: CellState,
}

impl Cell {
    pub fn new(point: Point, goal: &Point) -> Cell {
        Cell {
            point,
            heuristic_cost: point.manhattan_distance(goal),
            final_cost: UNVISITED,
            parent: None,
            state: CellState::Unseen,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == CellState::Open
    }

    pub fn is_closed(&self) -> bool {
        self.state == CellState::Closed
    }
}

/// Content of one grid coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    /// Occupied, holds no cell.
    Blocked,
    Free(Cell),
}

impl Tile {
    pub fn cell(&self) -> Option<&Cell> {
        match self {
            Tile::Blocked => None,
            Tile::Free(cell) => Some(cell),
        }
    }

    pub fn cell_mut(&mut self) -> Option<&mut Cell> {
        match self {
            Tile::Blocked => None,
            Tile::Free(cell) => Some(cell),
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Tile::Blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_unvisited() {
        let cell = Cell::new(Point::new(1, 2), &Point::new(4, 0));
        assert_eq!(cell.heuristic_cost, 5);
        assert_eq!(cell.final_cost, UNVISITED);
        assert_eq!(cell.parent, None);
        assert!(!cell.is_open() && !cell.is_closed());
    }

    #[test]
    fn blocked_tile_has_no_cell() {
        let mut tile = Tile::Blocked;
        assert!(tile.is_blocked());
        assert!(tile.cell().is_none());
        assert!(tile.cell_mut().is_none());
        let free = Tile::Free(Cell::new(Point::new(0, 0), &Point::new(0, 0)));
        assert_eq!(free.cell().map(|c| c.heuristic_cost), Some(0));
    }
}
