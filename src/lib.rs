#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find minimum-cost Paths on weighted Grid Levels.
//!
//! ## Introduction
//! A Level is a Grid of Cells. Every Cell is either a Wall, an open Space with a traversal Cost,
//! or a named Waypoint. Moving between two neighboring Spaces costs the average of their
//! traversal Costs, scaled by the geometric distance of the step (orthogonal or diagonal).
//!
//! The shortest Paths are calculated with [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm),
//! either to a single destination ([`dijkstra_path`](search::dijkstra_path)) or to every
//! reachable Cell ([`dijkstra_all_costs`](search::dijkstra_all_costs)). The search itself never
//! looks at the Level directly: it only asks an adjacency function for the neighbors of a Cell
//! and the Cost of getting there. [`navigation_edges`](neighbors::navigation_edges) is that
//! function for Levels, but any Graph with a matching adjacency function can be searched.
//!
//! ## Examples
//! Finding the Path between two Waypoints:
//! ```
//! use level_pathfinding::prelude::*;
//!
//! // X = wall, digits = cost of a space, lowercase letters = waypoints
//! let level: Level = "\
//! XXXXXXX
//! Xa1119X
//! X99X11X
//! X1111bX
//! XXXXXXX"
//!     .parse()
//!     .unwrap();
//!
//! let path = find_route(&level, 'a', 'b').unwrap();
//!
//! // find_route returns Some(Path) if 'b' can be reached from 'a'
//! let path = path.unwrap();
//! assert_eq!(path[0], level.waypoint('a').unwrap());
//! assert_eq!(path[path.len() - 1], level.waypoint('b').unwrap());
//! ```
//!
//! Calculating the Cost to every reachable Cell:
//! ```
//! # use level_pathfinding::prelude::*;
//! # let level: Level = "\
//! # XXXXXXX
//! # Xa1119X
//! # X99X11X
//! # X1111bX
//! # XXXXXXX"
//! #     .parse()
//! #     .unwrap();
//! let costs = costs_from(&level, 'a').unwrap();
//!
//! assert_eq!(costs[&level.waypoint('a').unwrap()], 0.0);
//! // every Space in this Level is reachable
//! assert_eq!(costs.len(), level.spaces().len());
//! ```
//!
//! ### Other Graphs
//! The search functions are generic over the Graph and its Node type:
//! ```
//! use level_pathfinding::search::dijkstra_path;
//!
//! // A--1--B--1--C
//! //  \          |
//! //   5----D----1
//! let edges = |graph: &[Vec<(char, f64)>; 4], node: char| {
//!     graph[(node as u8 - b'A') as usize].clone()
//! };
//! let graph = [
//!     vec![('B', 1.0), ('D', 5.0)],
//!     vec![('A', 1.0), ('C', 1.0)],
//!     vec![('B', 1.0), ('D', 1.0)],
//!     vec![('A', 5.0), ('C', 1.0)],
//! ];
//!
//! let path = dijkstra_path('A', 'D', &graph, edges).unwrap();
//! assert_eq!(path, vec!['A', 'B', 'C', 'D']);
//! assert_eq!(path.cost(), 3.0);
//! ```
//!
//! ### Configuration
//! How Cells connect to their neighbors is controlled by a [`NavigationConfig`](config::NavigationConfig).
//! [`navigation_edges`](neighbors::navigation_edges) uses the default, which allows all 8 directions.
//!
//! ### Features
//! - `parallel` (default): [`costs_from_each`](route::costs_from_each) runs its searches on a `rayon` thread pool.
//! - `log`: log search results and timings through the `log` crate.

/// A shorthand for Cells on the grid
pub type Cell = (i32, i32);

/// The Type used for traversal and Path Costs
pub type Cost = f64;

/// A [`HashMap`](hashbrown::HashMap) keyed by [`Cell`]s
pub type CellMap<V> = hashbrown::HashMap<Cell, V>;
/// A [`HashSet`](hashbrown::HashSet) of [`Cell`]s
pub type CellSet = hashbrown::HashSet<Cell>;

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)+) => { log::debug!($($arg)+) };
}
#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

#[cfg(feature = "log")]
macro_rules! start_timer {
    ($timer: ident) => {
        let $timer = std::time::Instant::now();
    };
}
#[cfg(not(feature = "log"))]
macro_rules! start_timer {
    ($timer: ident) => {};
}

#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        log::trace!("{}: {:?}", $msg, $timer.elapsed());
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {};
}

mod error;
pub use error::LevelError;

pub mod config;

pub mod neighbors;

pub mod path;

pub mod search;

pub mod level;

pub mod route;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        config::NavigationConfig,
        level::Level,
        neighbors::navigation_edges,
        path::Path,
        route::{costs_from, costs_from_each, find_route},
        search::{dijkstra_all_costs, dijkstra_path},
        Cell, CellMap, CellSet, Cost, LevelError,
    };
}
