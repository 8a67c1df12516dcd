use grid_util::point::Point;
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};

/// A single grid cell. Only a [Grid](crate::Grid) creates nodes; equality and hashing
/// consider the position alone, so a node compares equal to itself regardless of the
/// search bookkeeping it currently carries.
#[derive(Clone, Debug)]
pub struct Node {
    position: Point,
    g_score: f64,
    f_score: f64,
    wall: bool,
    neighbours: SmallVec<[Point; 4]>,
}

impl Node {
    pub(crate) fn new(position: Point) -> Node {
        Node {
            position,
            g_score: f64::INFINITY,
            f_score: f64::INFINITY,
            wall: false,
            neighbours: SmallVec::new(),
        }
    }
    pub fn position(&self) -> Point {
        self.position
    }
    pub fn row(&self) -> usize {
        self.position.y as usize
    }
    pub fn col(&self) -> usize {
        self.position.x as usize
    }
    /// Best known cost from the start, [f64::INFINITY] if the node was never reached.
    pub fn g_score(&self) -> f64 {
        self.g_score
    }
    /// `g_score` plus the heuristic estimate towards the goal.
    pub fn f_score(&self) -> f64 {
        self.f_score
    }
    pub fn is_wall(&self) -> bool {
        self.wall
    }
    /// The neighbour list from the most recent computation. Not kept in sync with later
    /// grid edits.
    pub fn neighbours(&self) -> &[Point] {
        &self.neighbours
    }
    pub(crate) fn set_g_score(&mut self, g_score: f64) {
        self.g_score = g_score;
    }
    pub(crate) fn set_f_score(&mut self, f_score: f64) {
        self.f_score = f_score;
    }
    pub(crate) fn set_wall(&mut self, wall: bool) {
        self.wall = wall;
    }
    pub(crate) fn set_neighbours(&mut self, neighbours: SmallVec<[Point; 4]>) {
        self.neighbours = neighbours;
    }
    /// Returns the scores to infinity and forgets the neighbour list.
    pub(crate) fn reset_scores(&mut self) {
        self.g_score = f64::INFINITY;
        self.f_score = f64::INFINITY;
        self.neighbours.clear();
    }
    pub(crate) fn reset(&mut self) {
        self.reset_scores();
        self.wall = false;
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}
