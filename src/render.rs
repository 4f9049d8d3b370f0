//! Text views of a [PathFinder] for inspecting a search by eye. The layout is not stable.
use core::fmt;

use grid_util::point::Point;

use crate::path_finder::{PathFinder, SearchStatus};
use crate::UNVISITED;

/// Which text view of a [PathFinder] to write.
#[derive(Clone, Copy)]
enum View {
    Grid,
    Scores,
    Solution,
}

struct Render<'a> {
    finder: &'a PathFinder,
    view: View,
}

impl Render<'_> {
    fn write_rows<F>(&self, f: &mut fmt::Formatter, mut label: F) -> fmt::Result
    where
        F: FnMut(&Point) -> &'static str,
    {
        let finder = self.finder;
        for y in 0..finder.height() as i32 {
            for x in 0..finder.width() as i32 {
                let point = Point::new(x, y);
                let marker = if point == finder.start() {
                    "SC"
                } else if point == finder.goal() {
                    "DC"
                } else if finder.is_blocked(&point) {
                    "BL"
                } else {
                    label(&point)
                };
                write!(f, "{:<4}", marker)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_scores(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let finder = self.finder;
        for y in 0..finder.height() as i32 {
            for x in 0..finder.width() as i32 {
                match finder.cell(&Point::new(x, y)) {
                    None => write!(f, "{:<5}", "BL")?,
                    Some(cell) if cell.final_cost == UNVISITED => write!(f, "{:<5}", "-")?,
                    Some(cell) => write!(f, "{:<5}", cell.final_cost)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.view {
            View::Grid => self.write_rows(f, |_| "0"),
            View::Scores => self.write_scores(f),
            View::Solution => {
                if self.finder.status() != SearchStatus::Found {
                    return writeln!(f, "No possible path");
                }
                let path = self.finder.path();
                self.write_rows(f, |point| if path.contains(point) { "X" } else { "0" })
            }
        }
    }
}

impl PathFinder {
    fn render(&self, view: View) -> Render<'_> {
        Render { finder: self, view }
    }

    /// Start (`SC`), goal (`DC`), blocked (`BL`) and free (`0`) cells.
    pub fn render_grid(&self) -> String {
        self.render(View::Grid).to_string()
    }

    /// Stored cost of every cell, `-` where no route reached it.
    pub fn render_scores(&self) -> String {
        self.render(View::Scores).to_string()
    }

    /// The grid with the found route marked `X`.
    pub fn render_solution(&self) -> String {
        self.render(View::Solution).to_string()
    }
}

impl fmt::Display for PathFinder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        write!(f, "{}", self.render(View::Grid))
    }
}

#[cfg(test)]
mod tests {
    use crate::path_finder::PathFinder;
    use grid_util::point::Point;

    fn rows(s: &str) -> Vec<String> {
        s.lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect()
    }

    #[test]
    fn grid_markers() {
        let finder =
            PathFinder::new(3, 2, Point::new(0, 0), Point::new(2, 1), [Point::new(1, 0)]).unwrap();
        assert_eq!(rows(&finder.render_grid()), vec!["SC BL 0", "0 0 DC"]);
        assert!(finder.to_string().starts_with("Grid:\n"));
    }

    #[test]
    fn scores_after_search() {
        let mut finder = PathFinder::new(3, 1, Point::new(0, 0), Point::new(2, 0), []).unwrap();
        finder.run();
        assert_eq!(rows(&finder.render_scores()), vec!["0 10 20"]);
    }

    #[test]
    fn solution_overlay() {
        let mut finder =
            PathFinder::new(3, 2, Point::new(0, 0), Point::new(2, 0), [Point::new(1, 0)]).unwrap();
        assert_eq!(finder.render_solution(), "No possible path\n");
        finder.run();
        assert_eq!(rows(&finder.render_solution()), vec!["SC BL DC", "0 X 0"]);
    }
}
