use crate::error::{Error, Result, Role};
use crate::node::Node;
use crate::DEFAULT_EXTENT;
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [Grid] is the `N×N` arena owning every [Node]. Besides the nodes it records which cells
/// hold the start and goal roles and maintains a [UnionFind] over free cells so that
/// reachability can be queried without searching.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    extent: usize,
    nodes: Vec<Node>,
    start: Option<Point>,
    goal: Option<Point>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Grid {
    /// Creates a `size×size` grid mapped onto a surface of [DEFAULT_EXTENT] units.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Grid {
        Grid::with_extent(size, DEFAULT_EXTENT)
    }
    /// Creates a `size×size` grid whose cells each cover `extent / size` units of the host
    /// surface, as used by [clicked_node](Self::clicked_node).
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn with_extent(size: usize, extent: usize) -> Grid {
        assert!(size > 0, "grid size must be positive");
        let nodes = (0..size * size)
            .map(|ix| Point::new((ix % size) as i32, (ix / size) as i32))
            .map(Node::new)
            .collect();
        let mut grid = Grid {
            size,
            extent,
            nodes,
            start: None,
            goal: None,
            components: UnionFind::new(size * size),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
    pub fn node(&self, point: Point) -> Option<&Node> {
        self.get_ix(point).map(|ix| &self.nodes[ix])
    }
    pub(crate) fn node_mut(&mut self, point: Point) -> Option<&mut Node> {
        self.get_ix(point).map(move |ix| &mut self.nodes[ix])
    }
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.size
            && (point.y as usize) < self.size
    }
    fn get_ix(&self, point: Point) -> Option<usize> {
        if self.in_bounds(point) {
            Some(point.y as usize * self.size + point.x as usize)
        } else {
            None
        }
    }
    fn checked_ix(&self, point: Point) -> Result<usize> {
        self.get_ix(point).ok_or(Error::OutOfBounds(point))
    }
    pub fn can_move_to(&self, point: Point) -> bool {
        self.node(point).is_some_and(|node| !node.is_wall())
    }
    pub fn is_wall(&self, point: Point) -> bool {
        self.node(point).is_some_and(Node::is_wall)
    }

    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }
    pub fn has_goal(&self) -> bool {
        self.goal.is_some()
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }
    /// The role `point` currently holds, if any.
    pub fn role(&self, point: Point) -> Option<Role> {
        if self.start == Some(point) {
            Some(Role::Start)
        } else if self.goal == Some(point) {
            Some(Role::Goal)
        } else if self.is_wall(point) {
            Some(Role::Wall)
        } else {
            None
        }
    }

    /// Makes `point` the start, replacing any previous start. Rejected if the cell is the
    /// goal or a wall.
    pub fn set_start(&mut self, point: Point) -> Result<()> {
        self.checked_ix(point)?;
        match self.role(point) {
            Some(role @ (Role::Goal | Role::Wall)) => {
                Err(Error::ConflictingRole { point, role })
            }
            _ => {
                debug!("Start set to {}", point);
                self.start = Some(point);
                Ok(())
            }
        }
    }
    /// Makes `point` the goal, replacing any previous goal. Rejected if the cell is the
    /// start or a wall.
    pub fn set_goal(&mut self, point: Point) -> Result<()> {
        self.checked_ix(point)?;
        match self.role(point) {
            Some(role @ (Role::Start | Role::Wall)) => {
                Err(Error::ConflictingRole { point, role })
            }
            _ => {
                debug!("Goal set to {}", point);
                self.goal = Some(point);
                Ok(())
            }
        }
    }
    /// Marks `point` impassable. Walling the start or goal is rejected and leaves the grid
    /// untouched. Flags the components as dirty since they may have been split.
    pub fn set_wall(&mut self, point: Point) -> Result<()> {
        let ix = self.checked_ix(point)?;
        if let Some(role @ (Role::Start | Role::Goal)) = self.role(point) {
            return Err(Error::ConflictingRole { point, role });
        }
        if !self.nodes[ix].is_wall() {
            self.nodes[ix].set_wall(true);
            self.components_dirty = true;
        }
        Ok(())
    }
    /// Clears whatever role `point` holds and returns its scores and neighbours to their
    /// initial state. Removing a wall joins the newly connected components.
    pub fn reset_node(&mut self, point: Point) -> Result<()> {
        let ix = self.checked_ix(point)?;
        if self.start == Some(point) {
            self.start = None;
        }
        if self.goal == Some(point) {
            self.goal = None;
        }
        let was_wall = self.nodes[ix].is_wall();
        self.nodes[ix].reset();
        if was_wall {
            for n in self.adjacent_open(point) {
                let n_ix = self.get_ix(n).unwrap_or(ix);
                self.components.union(ix, n_ix);
            }
        }
        Ok(())
    }
    /// Applies [reset_node](Self::reset_node) to every cell.
    pub fn reset_grid(&mut self) {
        debug!("Resetting all {} nodes", self.nodes.len());
        self.start = None;
        self.goal = None;
        self.nodes.iter_mut().for_each(Node::reset);
        self.generate_components();
    }
    /// Resets the scores of every node, keeping walls and roles. A search leaves scores
    /// behind on every node it touched; call this before searching the same grid again.
    pub fn reset_scores(&mut self) {
        self.nodes.iter_mut().for_each(Node::reset_scores);
    }

    /// In-bounds, non-wall cells sharing an edge with `point`, in the order
    /// down, up, right, left (row + 1, row - 1, col + 1, col - 1).
    pub(crate) fn adjacent_open(&self, point: Point) -> SmallVec<[Point; 4]> {
        [
            Point::new(point.x, point.y + 1),
            Point::new(point.x, point.y - 1),
            Point::new(point.x + 1, point.y),
            Point::new(point.x - 1, point.y),
        ]
        .into_iter()
        .filter(|&p| self.can_move_to(p))
        .collect()
    }
    /// Recomputes the neighbour list of `point` against the current walls, stores it on the
    /// node and returns it.
    pub fn neighbours_of(&mut self, point: Point) -> Result<&[Point]> {
        let ix = self.checked_ix(point)?;
        let neighbours = self.adjacent_open(point);
        self.nodes[ix].set_neighbours(neighbours);
        Ok(self.nodes[ix].neighbours())
    }

    /// Side length of one cell in host units.
    pub fn cell_size(&self) -> usize {
        (self.extent / self.size).max(1)
    }
    /// Maps a continuous position on the host surface to the cell containing it. `x` selects
    /// the column and `y` the row; positions off the surface clamp to the nearest cell.
    ///
    /// Cells are addressed by their [Point]; use [node](Self::node) for the [Node] itself.
    pub fn clicked_node(&self, x: f64, y: f64) -> Point {
        let cell = self.cell_size() as f64;
        let last = (self.size - 1) as f64;
        // NaN clamps to 0 through the saturating cast.
        let col = (x / cell).floor().clamp(0.0, last) as i32;
        let row = (y / cell).floor().clamp(0.0, last) as i32;
        Point::new(col, row)
    }

    /// Checks if `start` and `goal` are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if self.components_dirty {
            warn!("Querying reachability on dirty components");
        }
        match (self.get_ix(*start), self.get_ix(*goal)) {
            (Some(start_ix), Some(goal_ix)) => {
                !self.nodes[start_ix].is_wall()
                    && !self.nodes[goal_ix].is_wall()
                    && self.components.equiv(start_ix, goal_ix)
            }
            _ => false,
        }
    }
    /// Checks if `start` and `goal` are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            debug!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.nodes.len());
        self.components_dirty = false;
        for ix in 0..self.nodes.len() {
            let point = self.nodes[ix].position();
            if self.nodes[ix].is_wall() {
                continue;
            }
            // Linking down and right covers every edge once.
            for n in [
                Point::new(point.x, point.y + 1),
                Point::new(point.x + 1, point.y),
            ] {
                if self.can_move_to(n) {
                    if let Some(n_ix) = self.get_ix(n) {
                        self.components.union(ix, n_ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.nodes.chunks(self.size) {
            let line = row
                .iter()
                .map(|node| match self.role(node.position()) {
                    Some(Role::Start) => 'S',
                    Some(Role::Goal) => 'G',
                    Some(Role::Wall) => '#',
                    None => '.',
                })
                .join("");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
