use grid_util::point::Point;
use thiserror::Error;

/// The role a cell holds on the [Grid](crate::Grid) besides being free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Start,
    Goal,
    Wall,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Start => write!(f, "start"),
            Role::Goal => write!(f, "goal"),
            Role::Wall => write!(f, "wall"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("search requires both a start and a goal")]
    MissingEndpoint,
    #[error("frontier has no open nodes left")]
    EmptyFrontier,
    #[error("{point} already holds the {role} role")]
    ConflictingRole { point: Point, role: Role },
    #[error("{0} lies outside the grid")]
    OutOfBounds(Point),
    #[error("search was cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, Error>;
