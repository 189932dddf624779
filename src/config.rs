//! Options for how Cells of a Level connect to their neighbors.

use crate::{Cell, Cost};

/// Options for configuring [`NavigationConfig::edges`]
///
/// Default options:
/// ```
/// # use level_pathfinding::config::NavigationConfig;
/// assert_eq!(
///     NavigationConfig {
///         orthogonal_scale: 0.5,
///         diagonal_scale: 0.5 * std::f64::consts::SQRT_2,
///         diagonal_moves: true,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationConfig {
    /// The factor applied to the summed Cost of both Cells for a step along an axis (defaults to `0.5`).
    ///
    /// The default turns the sum into the average of both Cells.
    pub orthogonal_scale: Cost,
    /// The factor applied to the summed Cost of both Cells for a diagonal step
    /// (defaults to `0.5 * sqrt(2)`).
    pub diagonal_scale: Cost,
    /// `true` (default): Cells connect to all 8 surrounding Cells.
    ///
    /// `false`: only the 4 Cells sharing a side are neighbors.
    pub diagonal_moves: bool,
}

impl NavigationConfig {
    /// Movement along the 4 cardinal directions and the 4 diagonals. Same as the default.
    ///
    /// ```no_code
    /// A: Agent, o: reachable in one step
    /// o o o
    ///  \|/
    /// o-A-o
    ///  /|\
    /// o o o
    /// ```
    pub const MOORE: NavigationConfig = NavigationConfig {
        orthogonal_scale: 0.5,
        diagonal_scale: 0.5 * std::f64::consts::SQRT_2,
        diagonal_moves: true,
    };
    /// Movement along the 4 cardinal directions only.
    ///
    /// ```no_code
    /// A: Agent, o: reachable in one step
    ///   o
    ///   |
    /// o-A-o
    ///   |
    ///   o
    /// ```
    pub const MANHATTAN: NavigationConfig = NavigationConfig {
        diagonal_moves: false,
        ..NavigationConfig::MOORE
    };

    /// The scale for a step by `(dx, dy)`, which must not be `(0, 0)`.
    pub(crate) fn scale(&self, (dx, dy): Cell) -> Option<Cost> {
        if dx == 0 || dy == 0 {
            Some(self.orthogonal_scale)
        } else if self.diagonal_moves {
            Some(self.diagonal_scale)
        } else {
            None
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> NavigationConfig {
        NavigationConfig::MOORE
    }
}
