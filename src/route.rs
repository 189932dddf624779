//! Searches between the named Waypoints of a [`Level`].

use crate::{
    level::Level,
    neighbors::navigation_edges,
    path::Path,
    search::{dijkstra_all_costs, dijkstra_path},
    Cell, CellMap, Cost, LevelError,
};

use hashbrown::HashMap;

/// Finds the cheapest Path between the Waypoints labeled `src` and `dst`.
///
/// ## Returns
/// - `Err` if either label is not a Waypoint of the Level
/// - `Ok(None)` if `dst` cannot be reached from `src`
/// - `Ok(Some(path))` otherwise. The first Cell of the Path is `src`, the last is `dst`.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use level_pathfinding::prelude::*;
/// let level: Level = "\
/// a1X
/// 1XX
/// XXb"
///     .parse()
///     .unwrap();
///
/// assert!(find_route(&level, 'a', 'b').unwrap().is_none());
/// assert!(find_route(&level, 'a', 'c').is_err());
/// ```
pub fn find_route(level: &Level, src: char, dst: char) -> Result<Option<Path<Cell>>, LevelError> {
    let start = level.require_waypoint(src)?;
    let destination = level.require_waypoint(dst)?;

    let path = dijkstra_path(start, destination, level, navigation_edges);
    match &path {
        Some(path) => log_debug!("route {} -> {}: total cost = {}", src, dst, path.cost()),
        None => log_debug!("route {} -> {}: no path possible", src, dst),
    }
    Ok(path)
}

/// Calculates the Cost of reaching every reachable Cell from the Waypoint labeled `src`.
///
/// See [`dijkstra_all_costs`] for details.
pub fn costs_from(level: &Level, src: char) -> Result<CellMap<Cost>, LevelError> {
    let start = level.require_waypoint(src)?;
    Ok(dijkstra_all_costs(start, level, navigation_edges))
}

/// Calculates [`costs_from`] for every label in `sources`.
///
/// Every search is independent and only reads the Level. With the `parallel` feature (default),
/// the searches run on the `rayon` thread pool.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use level_pathfinding::prelude::*;
/// let level: Level = "a11b".parse().unwrap();
///
/// let costs = costs_from_each(&level, &['a', 'b']).unwrap();
///
/// assert_eq!(costs[&'a'][&(3, 0)], 3.0);
/// assert_eq!(costs[&'b'][&(0, 0)], 3.0);
/// ```
pub fn costs_from_each(
    level: &Level,
    sources: &[char],
) -> Result<HashMap<char, CellMap<Cost>>, LevelError> {
    let starts = sources
        .iter()
        .map(|&label| Ok((label, level.require_waypoint(label)?)))
        .collect::<Result<Vec<(char, Cell)>, LevelError>>()?;

    #[cfg(feature = "parallel")]
    let costs = {
        use rayon::prelude::*;
        starts
            .into_par_iter()
            .map(|(label, start)| (label, dijkstra_all_costs(start, level, navigation_edges)))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let costs = starts
        .into_iter()
        .map(|(label, start)| (label, dijkstra_all_costs(start, level, navigation_edges)))
        .collect();

    Ok(costs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
XXXXXXXXX
Xa1111X9X
X1XXX1X1X
X1X9X1X1X
X11991Xe X
XXXXXXXXX";

    #[test]
    fn route_between_waypoints() {
        let level: Level = MAZE.parse().unwrap();
        let path = find_route(&level, 'a', 'a').unwrap().unwrap();

        assert_eq!(path, vec![(1, 1)]);
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn walled_off_waypoint() {
        let level: Level = MAZE.parse().unwrap();

        assert!(find_route(&level, 'a', 'e').unwrap().is_none());

        let costs = costs_from(&level, 'a').unwrap();
        assert!(!costs.contains_key(&level.waypoint('e').unwrap()));
        assert!(costs.contains_key(&(5, 4)));
    }

    #[test]
    fn unknown_waypoint() {
        let level: Level = MAZE.parse().unwrap();

        assert!(matches!(
            find_route(&level, 'a', 'q'),
            Err(LevelError::UnknownWaypoint('q'))
        ));
        assert!(matches!(
            costs_from_each(&level, &['a', 'q']),
            Err(LevelError::UnknownWaypoint('q'))
        ));
    }

    #[test]
    fn each_matches_single() {
        let level: Level = MAZE.parse().unwrap();
        let all = costs_from_each(&level, &['a', 'e']).unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[&'a'], costs_from(&level, 'a').unwrap());
        assert_eq!(all[&'e'], costs_from(&level, 'e').unwrap());
    }
}
