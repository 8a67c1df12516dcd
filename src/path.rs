use crate::grid::Grid;
use crate::observer::Observer;
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent links recorded during one search: each reached node mapped to the node it was
/// last relaxed from.
pub type ParentMap = FxIndexMap<Point, Point>;

/// A shortest path found by a [Search](crate::Search), from start to goal inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    points: Vec<Point>,
    cost: f64,
}

impl Path {
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }
    pub fn goal(&self) -> Option<Point> {
        self.points.last().copied()
    }
    /// Number of moves along the path.
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
    /// g-score of the goal when the path was found.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// Follows the parent links back from `goal` until reaching a node without a parent,
/// reporting every intermediate node to `observer` in that goal-to-start order. The
/// returned [Path] runs from start to goal.
pub fn reconstruct<O: Observer>(
    came_from: &ParentMap,
    grid: &Grid,
    goal: Point,
    observer: &mut O,
) -> Path {
    let start = grid.start();
    // Parent links form a tree, so the walk visits each cell at most once.
    let limit = grid.size() * grid.size();
    let parents = std::iter::successors(Some(goal), |p| came_from.get(p).copied());
    let mut points: Vec<Point> = parents.take(limit).collect();
    debug_assert!(
        points.last().map_or(true, |p| !came_from.contains_key(p)),
        "cycle in parent links"
    );
    for p in &points {
        if *p != goal && Some(*p) != start {
            if let Some(node) = grid.node(*p) {
                observer.on_path_node(node);
            }
        }
    }
    observer.on_frame_ready();
    let cost = grid.node(goal).map_or(f64::INFINITY, |n| n.g_score());
    points.reverse();
    Path { points, cost }
}
