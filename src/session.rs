//! Editing rules of an interactive host, independent of any input device. The primary
//! action places the start, then the goal, then walls; the secondary action clears a cell.
//! Once a path has been found the grid stays frozen until it is cleared.
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::observer::Observer;
use crate::search::{Outcome, Search, SearchConfig};
use crate::DEFAULT_GRID_SIZE;
use grid_util::point::Point;
use log::debug;

/// What an edit did to the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    Start(Point),
    Goal(Point),
    Wall(Point),
    Cleared(Point),
    Ignored,
}

#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    pub config: SearchConfig,
    editable: bool,
}

impl Default for Session {
    fn default() -> Session {
        Session::new(Grid::new(DEFAULT_GRID_SIZE))
    }
}

impl Session {
    pub fn new(grid: Grid) -> Session {
        Session {
            grid,
            config: SearchConfig::default(),
            editable: true,
        }
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    /// False after a successful search, until [clear](Self::clear).
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Places the start if there is none, else the goal if there is none, else a wall. The
    /// start and goal cells themselves are left alone.
    pub fn primary(&mut self, x: f64, y: f64) -> Result<Edit> {
        if !self.editable {
            debug!("Grid is frozen, ignoring edit at ({}, {})", x, y);
            return Ok(Edit::Ignored);
        }
        let point = self.grid.clicked_node(x, y);
        let start = self.grid.start();
        let goal = self.grid.goal();
        if start.is_none() && goal != Some(point) {
            self.grid.reset_node(point)?;
            self.grid.set_start(point)?;
            Ok(Edit::Start(point))
        } else if goal.is_none() && start != Some(point) {
            self.grid.reset_node(point)?;
            self.grid.set_goal(point)?;
            Ok(Edit::Goal(point))
        } else if start != Some(point) && goal != Some(point) {
            self.grid.set_wall(point)?;
            Ok(Edit::Wall(point))
        } else {
            Ok(Edit::Ignored)
        }
    }
    /// Returns the cell under `(x, y)` to its initial state, dropping any role it held.
    pub fn secondary(&mut self, x: f64, y: f64) -> Result<Edit> {
        if !self.editable {
            debug!("Grid is frozen, ignoring reset at ({}, {})", x, y);
            return Ok(Edit::Ignored);
        }
        let point = self.grid.clicked_node(x, y);
        self.grid.reset_node(point)?;
        Ok(Edit::Cleared(point))
    }

    /// Searches from the start to the goal. Scores from earlier runs are cleared first. A
    /// found path freezes the grid; otherwise the scores are cleared again so the grid can
    /// be edited and searched anew.
    pub fn run<O: Observer>(&mut self, observer: &mut O) -> Result<Outcome> {
        if !self.grid.has_start() || !self.grid.has_goal() {
            return Err(Error::MissingEndpoint);
        }
        self.grid.reset_scores();
        let mut search = Search::with_config(&mut self.grid, &self.config)?;
        let result = search.run(observer);
        match &result {
            Ok(Outcome::Found(_)) => self.editable = false,
            Ok(Outcome::Exhausted) | Err(_) => self.grid.reset_scores(),
        }
        result
    }

    /// Resets every cell and makes the grid editable again.
    pub fn clear(&mut self) {
        self.grid.reset_grid();
        self.editable = true;
    }
}
