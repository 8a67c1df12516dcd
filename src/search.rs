//! A* over a [Grid] with Manhattan heuristic and unit edge costs, run either to completion
//! or one expansion at a time.
use crate::error::{Error, Result};
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::manhattan;
use crate::observer::Observer;
use crate::path::{reconstruct, ParentMap, Path};
use grid_util::point::Point;
use log::{debug, info, warn};

/// Cost of moving between two adjacent cells.
const EDGE_COST: f64 = 1.0;

#[derive(Clone, Debug, Default)]
pub struct SearchConfig {
    /// Consult the grid's connected components before expanding anything and give up
    /// immediately if start and goal are disconnected. No observer events are emitted in
    /// that case.
    pub skip_unreachable: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Initialized,
    Running,
    Succeeded,
    Exhausted,
    Cancelled,
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SearchState::Succeeded | SearchState::Exhausted | SearchState::Cancelled
        )
    }
}

/// How a finished search ended. Running out of nodes is an ordinary result, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Found(Path),
    Exhausted,
}

impl Outcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Outcome::Found(path) => Some(path),
            Outcome::Exhausted => None,
        }
    }
    pub fn into_path(self) -> Option<Path> {
        match self {
            Outcome::Found(path) => Some(path),
            Outcome::Exhausted => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// The given node was popped and its neighbours relaxed.
    Expanded(Point),
    Done(Outcome),
}

/// One A* run. Holds the grid exclusively until dropped, so the grid cannot be edited while
/// the search is in progress.
///
/// The search writes scores onto the grid's nodes and does not clear them afterwards; call
/// [Grid::reset_scores] before searching the same grid again.
pub struct Search<'g> {
    grid: &'g mut Grid,
    start: Point,
    goal: Point,
    frontier: Frontier<Point, f64>,
    came_from: ParentMap,
    sequence: u64,
    expansions: usize,
    state: SearchState,
    outcome: Option<Outcome>,
}

impl<'g> Search<'g> {
    pub fn new(grid: &'g mut Grid) -> Result<Search<'g>> {
        Search::with_config(grid, &SearchConfig::default())
    }

    pub fn with_config(grid: &'g mut Grid, config: &SearchConfig) -> Result<Search<'g>> {
        let (start, goal) = match (grid.start(), grid.goal()) {
            (Some(start), Some(goal)) => (start, goal),
            _ => return Err(Error::MissingEndpoint),
        };
        let h = f64::from(manhattan(&start, &goal));
        let start_node = grid.node_mut(start).ok_or(Error::OutOfBounds(start))?;
        start_node.set_g_score(0.0);
        start_node.set_f_score(h);

        if config.skip_unreachable {
            grid.update();
        }
        let frontier = if config.skip_unreachable && grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}, skipping search", goal, start);
            Frontier::new()
        } else {
            Frontier::with_start(h, start)
        };
        debug!("Searching from {} to {}", start, goal);
        Ok(Search {
            grid,
            start,
            goal,
            frontier,
            came_from: ParentMap::default(),
            sequence: 0,
            expansions: 0,
            state: SearchState::Initialized,
            outcome: None,
        })
    }

    pub fn state(&self) -> SearchState {
        self.state
    }
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }
    pub fn frontier(&self) -> &Frontier<Point, f64> {
        &self.frontier
    }
    pub fn came_from(&self) -> &ParentMap {
        &self.came_from
    }
    /// Number of nodes expanded so far, not counting the goal.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Runs one iteration of the search loop: pops the best open node and, unless it is the
    /// goal, relaxes its neighbours.
    pub fn step<O: Observer>(&mut self, observer: &mut O) -> Result<Step> {
        match self.state {
            SearchState::Cancelled => return Err(Error::Cancelled),
            SearchState::Succeeded | SearchState::Exhausted => {
                if let Some(outcome) = &self.outcome {
                    return Ok(Step::Done(outcome.clone()));
                }
            }
            SearchState::Initialized | SearchState::Running => {}
        }
        if observer.cancel_requested() {
            warn!(
                "Search from {} to {} cancelled after {} expansions",
                self.start, self.goal, self.expansions
            );
            self.state = SearchState::Cancelled;
            return Err(Error::Cancelled);
        }
        self.state = SearchState::Running;
        if self.frontier.is_empty() {
            info!(
                "{} cannot be reached from {}, {} nodes expanded",
                self.goal, self.start, self.expansions
            );
            return Ok(Step::Done(
                self.finish(SearchState::Exhausted, Outcome::Exhausted),
            ));
        }

        let current = self.frontier.pop_best()?;
        let neighbours = self.grid.neighbours_of(current)?.to_vec();
        if current == self.goal {
            let path = reconstruct(&self.came_from, &*self.grid, self.goal, observer);
            info!(
                "Found path from {} to {} with cost {} after {} expansions",
                self.start,
                self.goal,
                path.cost(),
                self.expansions
            );
            return Ok(Step::Done(
                self.finish(SearchState::Succeeded, Outcome::Found(path)),
            ));
        }

        let current_g = self
            .grid
            .node(current)
            .map_or(f64::INFINITY, |n| n.g_score());
        let tentative_g = current_g + EDGE_COST;
        for neighbour in neighbours {
            let Some(node) = self.grid.node_mut(neighbour) else {
                continue;
            };
            if tentative_g >= node.g_score() {
                continue;
            }
            let f_score = tentative_g + f64::from(manhattan(&neighbour, &self.goal));
            node.set_g_score(tentative_g);
            node.set_f_score(f_score);
            self.came_from.insert(neighbour, current);
            let newly_open = !self.frontier.contains(&neighbour);
            // An open node that improved gets a fresh entry so its priority follows its
            // new score; the old entry goes stale.
            self.sequence += 1;
            self.frontier.push(f_score, self.sequence, neighbour);
            if newly_open && neighbour != self.start && neighbour != self.goal {
                observer.on_node_opened(node);
            }
        }
        if current != self.start {
            if let Some(node) = self.grid.node(current) {
                observer.on_node_closed(node);
            }
        }
        self.expansions += 1;
        observer.on_frame_ready();
        Ok(Step::Expanded(current))
    }

    /// Steps until the search succeeds, exhausts the frontier or is cancelled.
    pub fn run<O: Observer>(&mut self, observer: &mut O) -> Result<Outcome> {
        loop {
            if let Step::Done(outcome) = self.step(observer)? {
                return Ok(outcome);
            }
        }
    }

    fn finish(&mut self, state: SearchState, outcome: Outcome) -> Outcome {
        self.state = state;
        self.outcome = Some(outcome.clone());
        outcome
    }
}

/// Runs A* from the grid's start to its goal, reporting progress to `observer`.
pub fn astar<O: Observer>(grid: &mut Grid, observer: &mut O) -> Result<Outcome> {
    Search::new(grid)?.run(observer)
}
