//! The adjacency function connecting the Cells of a [`Level`].
//!
//! The search functions in [`search`](crate::search) take any function of the shape
//! `(graph, node) -> [(neighbor, edge_cost)]`. This Module provides that function for Levels.

use crate::{config::NavigationConfig, level::Level, Cell, Cost};

const OFFSETS: [Cell; 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Provides all open neighbors of `cell` and the Cost of stepping onto them.
///
/// A step costs the average of the traversal Costs of both Cells, multiplied by the length of
/// the step: `1` along an axis and `sqrt(2)` along a diagonal. Walls and Cells outside of the
/// Level are skipped, so an isolated Cell simply has no neighbors.
///
/// This uses the default [`NavigationConfig`]. See [`NavigationConfig::edges`] for other options.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use level_pathfinding::prelude::*;
/// let level: Level = "\
/// 111
/// 1X3
/// 111"
///     .parse()
///     .unwrap();
///
/// let edges = navigation_edges(&level, (2, 1));
///
/// // (1, 1) is a Wall
/// assert_eq!(edges.len(), 4);
/// assert!(edges.contains(&((2, 0), (3.0 + 1.0) * 0.5)));
/// ```
pub fn navigation_edges(level: &Level, cell: Cell) -> Vec<(Cell, Cost)> {
    let mut edges = Vec::with_capacity(OFFSETS.len());
    NavigationConfig::default().edges(level, cell, &mut edges);
    edges
}

impl NavigationConfig {
    /// Provides all open neighbors of `cell` and the Cost of stepping onto them.
    ///
    /// The edges are written into `target`, which is cleared first. This allows reusing
    /// the same buffer across many calls.
    ///
    /// A step between Cells with the traversal Costs `a` and `b` costs `(a + b) * scale`,
    /// where `scale` is either [`orthogonal_scale`](NavigationConfig::orthogonal_scale) or
    /// [`diagonal_scale`](NavigationConfig::diagonal_scale). Diagonal neighbors are only
    /// considered if [`diagonal_moves`](NavigationConfig::diagonal_moves) is set.
    ///
    /// If `cell` itself is not open, it has no edges.
    pub fn edges(&self, level: &Level, cell: Cell, target: &mut Vec<(Cell, Cost)>) {
        target.clear();

        let cell_cost = match level.cost(cell) {
            Some(cost) => cost,
            None => return,
        };

        for &(dx, dy) in OFFSETS.iter() {
            let scale = match self.scale((dx, dy)) {
                Some(scale) => scale,
                None => continue,
            };
            let neighbor = (cell.0 + dx, cell.1 + dy);
            if let Some(neighbor_cost) = level.cost(neighbor) {
                target.push((neighbor, (cell_cost + neighbor_cost) * scale));
            }
        }
    }
}
