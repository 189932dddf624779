use std::io;
use thiserror::Error;

/// Errors that can occur while loading a Level or resolving its Waypoints.
///
/// The search functions themselves never fail: an unreachable destination is reported as `None`
/// and unreachable Cells are missing from a cost map.
#[derive(Error, Debug)]
pub enum LevelError {
    /// Reading or writing a Level related file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The Level has no Waypoint with this label
    #[error("unknown waypoint '{0}'")]
    UnknownWaypoint(char),
    /// The Level contains neither Spaces nor Walls
    #[error("level contains no cells")]
    EmptyLevel,
}
