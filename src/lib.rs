//! # grid_astar
//!
//! [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) on a uniform-cost,
//! 4-connected square grid using the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//!
//! The search exposes its intermediate state so that a host can watch it unfold: every
//! node entering the frontier, every expanded node and the final path are reported through
//! an [Observer], and a [Search] can be advanced one expansion at a time. Hosts that only
//! want the answer can call [astar] with the no-op observer `()`.
//!
//! ```
//! use grid_astar::{astar, cell, Grid};
//!
//! let mut grid = Grid::new(5);
//! grid.set_start(cell(0, 0)).unwrap();
//! grid.set_goal(cell(4, 4)).unwrap();
//! let path = astar(&mut grid, &mut ()).unwrap().into_path().unwrap();
//! assert_eq!(path.steps(), 8);
//! ```
mod error;
mod frontier;
mod grid;
mod node;
mod observer;
mod path;
mod search;
mod session;

pub use error::{Error, Result, Role};
pub use frontier::Frontier;
pub use grid::Grid;
pub use grid_util::point::Point;
pub use node::Node;
pub use observer::{CancelToken, Cancellable, Event, Observer, Recorder};
pub use path::{reconstruct, ParentMap, Path};
pub use search::{astar, Outcome, Search, SearchConfig, SearchState, Step};
pub use session::{Edit, Session};

/// Side length of the grid used by the interactive [Session].
pub const DEFAULT_GRID_SIZE: usize = 50;
/// Side length, in host units, of the surface a [Grid] is mapped onto.
pub const DEFAULT_EXTENT: usize = 1000;

/// The point addressing the cell at `row` and `col`.
pub fn cell(row: usize, col: usize) -> Point {
    Point::new(col as i32, row as i32)
}

/// Manhattan distance between two cells, admissible and consistent for unit-cost
/// 4-directional movement.
pub fn manhattan(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}
