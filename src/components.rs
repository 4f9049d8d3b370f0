//! Connected components of the free cells, used to answer "no path" without searching.
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use petgraph::unionfind::UnionFind;

/// [UnionFind] over the free cells of a blocked mask, where [true] marks an occupied cell.
/// Cells are linked to all 8 neighbours, matching the moves of the search.
#[derive(Clone, Debug)]
pub struct Components {
    grid: BoolGrid,
    components: UnionFind<usize>,
}

impl Components {
    /// Generates a new [UnionFind] structure and links up every free cell with its free
    /// neighbours.
    pub fn generate(grid: BoolGrid) -> Components {
        let mut components = UnionFind::new(grid.width() * grid.height());
        for x in 0..grid.width() as i32 {
            for y in 0..grid.height() as i32 {
                if grid.get(x, y) {
                    continue;
                }
                let parent_ix = grid.get_ix_point(&Point::new(x, y));
                // The other half of the neighbourhood links back to this cell from there
                [
                    Point::new(x, y + 1),
                    Point::new(x + 1, y - 1),
                    Point::new(x + 1, y),
                    Point::new(x + 1, y + 1),
                ]
                .iter()
                .filter(|p| grid.point_in_bounds(**p) && !grid.get_point(**p))
                .for_each(|p| {
                    components.union(parent_ix, grid.get_ix_point(p));
                });
            }
        }
        Components { grid, components }
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn component(&self, point: &Point) -> Option<usize> {
        self.grid
            .point_in_bounds(*point)
            .then(|| self.components.find(self.grid.get_ix_point(point)))
    }

    /// Checks if start and goal are on the same component. Blocked cells form singleton
    /// components, so callers must check those separately.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if self.grid.point_in_bounds(*start) && self.grid.point_in_bounds(*goal) {
            self.components.equiv(
                self.grid.get_ix_point(start),
                self.grid.get_ix_point(goal),
            )
        } else {
            false
        }
    }
}
