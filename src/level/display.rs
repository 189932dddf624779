use super::Level;
use crate::{Cell, CellSet};

use hashbrown::HashMap;
use std::fmt;

impl Level {
    /// Draws the Level as text, marking every Cell of `path` with a `*`.
    ///
    /// Walls are drawn as `X`, Waypoints by their label and Spaces by their (truncated) Cost.
    /// The drawing covers all Spaces and Walls, one line per row. An empty Level is drawn as
    /// an empty String.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use level_pathfinding::prelude::*;
    /// let level: Level = "\
    /// XXXXX
    /// Xa1bX
    /// X999X
    /// XXXXX"
    ///     .parse()
    ///     .unwrap();
    ///
    /// let path = find_route(&level, 'a', 'b').unwrap().unwrap();
    ///
    /// assert_eq!(
    ///     level.render(&path),
    ///     "XXXXX\nX***X\nX999X\nXXXXX\n",
    /// );
    /// ```
    pub fn render<'a>(&self, path: impl IntoIterator<Item = &'a Cell>) -> String {
        let path_cells: CellSet = path.into_iter().copied().collect();
        let labels: HashMap<Cell, char> = self
            .waypoints
            .iter()
            .map(|(&label, &cell)| (cell, label))
            .collect();

        let ((x_lo, y_lo), (x_hi, y_hi)) = match self.bounds() {
            Some(bounds) => bounds,
            None => return String::new(),
        };

        let mut out = String::new();
        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                let cell = (x, y);
                if path_cells.contains(&cell) {
                    out.push('*');
                } else if self.walls.contains(&cell) {
                    out.push('X');
                } else if let Some(&label) = labels.get(&cell) {
                    out.push(label);
                } else if let Some(&cost) = self.spaces.get(&cell) {
                    out.push_str(&(cost as i64).to_string());
                } else {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Level {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(&self.render(&[]))
    }
}
