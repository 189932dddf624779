//! Levels: Grids of Walls, Spaces and Waypoints.
//!
//! ## Text Format
//! A Level is read one character per Cell. The column of a character is its `x` coordinate and
//! the line is its `y` coordinate.
//! - uppercase letters (of any script) are Walls
//! - digits `0` to `9` are Spaces with that traversal Cost
//! - lowercase letters (of any script) are Waypoints: Spaces with a Cost of `1`, named by the letter
//! - everything else (usually a blank) is neither a Wall nor a Space
//!
//! ```
//! # use level_pathfinding::prelude::*;
//! let level: Level = "\
//! XXXX
//! Xa9X
//! X1bX
//! XXXX"
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(level.cost((2, 1)), Some(9.0));
//! assert_eq!(level.cost((1, 2)), Some(1.0));
//! assert_eq!(level.waypoint('b'), Some((2, 2)));
//! assert!(level.is_wall((0, 0)));
//! ```

mod display;

mod export;

use crate::{Cell, CellMap, CellSet, Cost, LevelError};

use hashbrown::HashMap;
use std::{fs, path::Path as FsPath, str::FromStr};

/// The traversal Cost of a Waypoint
pub const WAYPOINT_COST: Cost = 1.0;

/// A Grid of Walls, Spaces with a traversal Cost and named Waypoints.
///
/// Only Spaces can be walked on. Walls are kept only to display the Level.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Level {
    spaces: CellMap<Cost>,
    walls: CellSet,
    waypoints: HashMap<char, Cell>,
}

impl Level {
    /// Creates a Level without Walls or Waypoints from the traversal Costs of its Spaces.
    ///
    /// Costs must not be negative.
    pub fn from_spaces(spaces: CellMap<Cost>) -> Level {
        Level {
            spaces,
            ..Default::default()
        }
    }

    /// Reads a Level from the file at `path`. See the [Module documentation](self) for the format.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Level, LevelError> {
        let text = fs::read_to_string(path)?;
        text.parse()
    }

    /// Marks `cell` as a Wall, removing any Space or Waypoint on it.
    pub fn add_wall(&mut self, cell: Cell) {
        self.spaces.remove(&cell);
        self.waypoints.retain(|_, &mut pos| pos != cell);
        self.walls.insert(cell);
    }

    /// Marks `cell` as a Space with the given traversal Cost.
    pub fn add_space(&mut self, cell: Cell, cost: Cost) {
        self.walls.remove(&cell);
        self.spaces.insert(cell, cost);
    }

    /// Marks `cell` as a Waypoint named `label`. A previous Waypoint with the same label is replaced.
    pub fn add_waypoint(&mut self, label: char, cell: Cell) {
        self.add_space(cell, WAYPOINT_COST);
        self.waypoints.insert(label, cell);
    }

    /// The traversal Cost of `cell`, or `None` if it is not a Space.
    pub fn cost(&self, cell: Cell) -> Option<Cost> {
        self.spaces.get(&cell).copied()
    }

    /// `true` if `cell` is a Space
    pub fn is_open(&self, cell: Cell) -> bool {
        self.spaces.contains_key(&cell)
    }

    /// `true` if `cell` is a Wall
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    /// The position of the Waypoint named `label`
    pub fn waypoint(&self, label: char) -> Option<Cell> {
        self.waypoints.get(&label).copied()
    }

    /// The position of the Waypoint named `label`, or [`LevelError::UnknownWaypoint`]
    pub fn require_waypoint(&self, label: char) -> Result<Cell, LevelError> {
        self.waypoint(label)
            .ok_or(LevelError::UnknownWaypoint(label))
    }

    /// All Spaces and their traversal Costs
    pub fn spaces(&self) -> &CellMap<Cost> {
        &self.spaces
    }

    /// All Walls
    pub fn walls(&self) -> &CellSet {
        &self.walls
    }

    /// All Waypoints and their positions
    pub fn waypoints(&self) -> &HashMap<char, Cell> {
        &self.waypoints
    }

    /// The smallest and largest coordinates of all Spaces and Walls, as `(min, max)`.
    ///
    /// Returns `None` for a Level without any Cells.
    pub fn bounds(&self) -> Option<(Cell, Cell)> {
        let mut cells = self.spaces.keys().chain(self.walls.iter());
        let &first = cells.next()?;
        Some(cells.fold((first, first), |(min, max), &(x, y)| {
            ((min.0.min(x), min.1.min(y)), (max.0.max(x), max.1.max(y)))
        }))
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(text: &str) -> Result<Level, LevelError> {
        let mut level = Level::default();

        for (y, line) in text.lines().enumerate() {
            for (x, c) in line.chars().enumerate() {
                let cell = (x as i32, y as i32);
                if c.is_uppercase() {
                    level.walls.insert(cell);
                } else if let Some(digit) = c.to_digit(10) {
                    level.spaces.insert(cell, digit as Cost);
                } else if c.is_lowercase() {
                    level.spaces.insert(cell, WAYPOINT_COST);
                    level.waypoints.insert(c, cell);
                }
            }
        }

        if level.spaces.is_empty() && level.walls.is_empty() {
            return Err(LevelError::EmptyLevel);
        }
        Ok(level)
    }
}
