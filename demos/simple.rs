use grid_astar::{spawn_search, PathFinder, PathRequest};
use grid_util::point::Point;

// In this example a path is found on a 5x5 grid with shape
//  _____
// |S #  |
// |  #  |
// |  #  |
// |    E|
// |     |
//  _____
// where
// - # marks an occupied cell
// - S marks the start
// - E marks the end
//
// The search first runs on the main thread and is then repeated on a worker thread.

fn main() -> grid_astar::Result<()> {
    let start = Point::new(0, 0);
    let end = Point::new(4, 3);
    let blocked = vec![Point::new(2, 0), Point::new(2, 1), Point::new(2, 2)];

    let mut path_finder = PathFinder::new(5, 5, start, end, blocked.clone())?;
    path_finder.run();
    println!("{}", path_finder);
    println!("Scores:\n{}", path_finder.render_scores());
    println!("Solution:\n{}", path_finder.render_solution());

    let handle = spawn_search(PathRequest::new(5, 5, start, end, blocked))?;
    let outcome = handle.join()?;
    println!("Path (cost {:?}):", outcome.cost);
    for p in outcome.path {
        println!("{:?}", p);
    }
    Ok(())
}
