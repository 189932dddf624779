use super::{Cost, Element, Path};

use hashbrown::HashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// The state of a single search. Every call owns a fresh one.
struct Search<Id> {
    frontier: BinaryHeap<Element<Id>>,
    cost_so_far: HashMap<Id, Cost>,
    came_from: HashMap<Id, Option<Id>>,
}

impl<Id: Copy + Eq + Hash + Ord> Search<Id> {
    fn new(start: Id) -> Self {
        let mut frontier = BinaryHeap::new();
        frontier.push(Element(start, 0.0));
        let mut cost_so_far = HashMap::new();
        cost_so_far.insert(start, 0.0);
        let mut came_from = HashMap::new();
        came_from.insert(start, None);
        Search {
            frontier,
            cost_so_far,
            came_from,
        }
    }

    /// Pops the cheapest Node whose Cost is final. Superseded entries are dropped.
    fn pop(&mut self) -> Option<(Id, Cost)> {
        while let Some(Element(current_id, current_cost)) = self.frontier.pop() {
            match current_cost.total_cmp(&self.cost_so_far[&current_id]) {
                Ordering::Greater => continue,
                Ordering::Equal => {}
                Ordering::Less => panic!("Binary Heap failed"),
            }
            return Some((current_id, current_cost));
        }
        None
    }

    fn expand<G: ?Sized, Edges: IntoIterator<Item = (Id, Cost)>>(
        &mut self,
        graph: &G,
        adjacency: &mut impl FnMut(&G, Id) -> Edges,
        current_id: Id,
        current_cost: Cost,
    ) {
        for (other_id, edge_cost) in adjacency(graph, current_id) {
            let other_cost = current_cost + edge_cost;

            let needs_visit = match self.cost_so_far.get_mut(&other_id) {
                Some(prev_cost) if *prev_cost <= other_cost => false,
                Some(prev_cost) => {
                    *prev_cost = other_cost;
                    true
                }
                None => {
                    self.cost_so_far.insert(other_id, other_cost);
                    true
                }
            };

            if needs_visit {
                self.came_from.insert(other_id, Some(current_id));
                self.frontier.push(Element(other_id, other_cost));
            }
        }
    }

    fn steps_to(&self, goal: Id) -> Vec<Id> {
        let mut steps = vec![goal];
        let mut current = goal;
        while let Some(prev) = self.came_from[&current] {
            steps.push(prev);
            current = prev;
        }
        steps.reverse();
        steps
    }
}

/// Searches a Graph for the cheapest Path from `start` to `destination` using
/// [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// The Generic type Parameter `Id` is supposed to uniquely identify a Node in the Graph.
/// This may be a Number, a char, a Grid position, ... as long as it can be compared, ordered,
/// hashed and copied. When several Nodes in the frontier have the same Cost, the smallest `Id`
/// is expanded first. This only decides which of several equally cheap Paths is returned.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use level_pathfinding::prelude::*;
/// let level: Level = "\
/// 111
/// 1X1
/// 111"
///     .parse()
///     .unwrap();
///
/// let path = dijkstra_path((0, 0), (2, 2), &level, navigation_edges);
///
/// let path = path.unwrap();
/// assert_eq!(path.len(), 4);
/// assert!((path.cost() - (2.0 + 2f64.sqrt())).abs() < 1e-9);
/// ```
///
/// If the destination cannot be reached, `None` is returned:
/// ```
/// # use level_pathfinding::prelude::*;
/// let level: Level = "1X1".parse().unwrap();
///
/// assert!(dijkstra_path((0, 0), (2, 0), &level, navigation_edges).is_none());
/// ```
///
/// ## Arguments
/// - `start` - the starting Node. It is not checked against the Graph: a Node without edges is
///     simply a dead end.
/// - `destination` - the Node to search for
/// - `graph` - the Graph, which is only ever passed on to `adjacency`
/// - `adjacency` - a Function that takes the Graph and a Node and returns all neighbors of that
///     Node together with the Cost of the edge leading there. Costs must not be negative or `NaN`.
///
/// ## Returns
/// the Path, if one was found, or `None` if the `destination` is unreachable.
/// The first Node in the Path is always the `start` and the last is the `destination`.
pub fn dijkstra_path<G, Id, Edges>(
    start: Id,
    destination: Id,
    graph: &G,
    mut adjacency: impl FnMut(&G, Id) -> Edges,
) -> Option<Path<Id>>
where
    G: ?Sized,
    Id: Copy + Eq + Hash + Ord,
    Edges: IntoIterator<Item = (Id, Cost)>,
{
    start_timer!(timer);
    let mut search = Search::new(start);

    while let Some((current_id, current_cost)) = search.pop() {
        if current_id == destination {
            let steps = search.steps_to(destination);
            re_trace!("dijkstra_path found destination", timer);
            log_debug!(
                "path found: {} cells, total cost = {}",
                steps.len(),
                current_cost
            );
            return Some(Path::new(steps, current_cost));
        }
        search.expand(graph, &mut adjacency, current_id, current_cost);
    }

    re_trace!("dijkstra_path exhausted frontier", timer);
    log_debug!(
        "no path: {} nodes reached without finding the destination",
        search.cost_so_far.len()
    );
    None
}

/// Calculates the Cost of the cheapest Path from `start` to every reachable Node using
/// [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// This is the same search as [`dijkstra_path`], except that it has no destination and runs until
/// every reachable Node has been expanded.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use level_pathfinding::prelude::*;
/// let level: Level = "\
/// 12X1
/// 11X1"
///     .parse()
///     .unwrap();
///
/// let costs = dijkstra_all_costs((0, 0), &level, navigation_edges);
///
/// assert_eq!(costs[&(0, 0)], 0.0);
/// assert_eq!(costs[&(1, 0)], 1.5);
///
/// // the right column is separated by a Wall
/// assert_eq!(costs.len(), 4);
/// assert!(!costs.contains_key(&(3, 0)));
/// ```
///
/// ## Arguments
/// - `start` - the starting Node
/// - `graph` - the Graph, which is only ever passed on to `adjacency`
/// - `adjacency` - see [`dijkstra_path`]
///
/// ## Returns
/// a HashMap with every reachable Node as the Key and the Cost of reaching it as Value.
/// `start` is always contained with a Cost of `0`. Unreachable Nodes are not contained.
pub fn dijkstra_all_costs<G, Id, Edges>(
    start: Id,
    graph: &G,
    mut adjacency: impl FnMut(&G, Id) -> Edges,
) -> HashMap<Id, Cost>
where
    G: ?Sized,
    Id: Copy + Eq + Hash + Ord,
    Edges: IntoIterator<Item = (Id, Cost)>,
{
    start_timer!(timer);
    let mut search = Search::new(start);

    while let Some((current_id, current_cost)) = search.pop() {
        search.expand(graph, &mut adjacency, current_id, current_cost);
    }

    re_trace!("dijkstra_all_costs", timer);
    log_debug!("{} nodes reachable", search.cost_so_far.len());
    search.cost_so_far
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{level::Level, neighbors::navigation_edges, CellMap};
    use std::f64::consts::SQRT_2;

    fn uniform(width: i32, height: i32, cost: Cost) -> Level {
        let mut spaces = CellMap::default();
        for y in 0..height {
            for x in 0..width {
                spaces.insert((x, y), cost);
            }
        }
        Level::from_spaces(spaces)
    }

    fn assert_close(a: Cost, b: Cost) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn same_start_and_destination() {
        let level = uniform(3, 3, 1.0);
        let path = dijkstra_path((1, 1), (1, 1), &level, navigation_edges).unwrap();

        assert_eq!(path, vec![(1, 1)]);
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn corner_to_corner_of_3x3() {
        let level = uniform(3, 3, 1.0);
        let path = dijkstra_path((0, 0), (2, 2), &level, navigation_edges).unwrap();

        // two diagonal steps are cheaper than four orthogonal ones
        assert_close(path.cost(), 2.0 * SQRT_2);
        assert_eq!(path.start(), Some(&(0, 0)));
        assert_eq!(path.destination(), Some(&(2, 2)));
    }

    #[test]
    fn two_orthogonal_steps() {
        let level = uniform(3, 3, 1.0);
        let path = dijkstra_path((0, 0), (2, 0), &level, navigation_edges).unwrap();

        assert_eq!(path, vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(path.cost(), 2.0);
    }

    #[test]
    fn avoids_expensive_terrain() {
        let level: Level = "\
1111
1991
1991
1111"
            .parse()
            .unwrap();
        let path = dijkstra_path((0, 1), (3, 2), &level, navigation_edges).unwrap();

        assert!(path.iter().all(|cell| level.cost(*cell) == Some(1.0)));
    }

    #[test]
    fn unreachable_destination() {
        let level: Level = "\
11X11
11X11
11X11"
            .parse()
            .unwrap();

        assert!(dijkstra_path((0, 0), (4, 2), &level, navigation_edges).is_none());
    }

    #[test]
    fn start_outside_of_level() {
        let level = uniform(2, 2, 1.0);

        assert!(dijkstra_path((-5, -5), (0, 0), &level, navigation_edges).is_none());

        let costs = dijkstra_all_costs((-5, -5), &level, navigation_edges);
        assert_eq!(costs.len(), 1);
        assert_eq!(costs[&(-5, -5)], 0.0);
    }

    #[test]
    fn isolated_start() {
        let level: Level = "XXX\nX5X\nXXX".parse().unwrap();

        let costs = dijkstra_all_costs((1, 1), &level, navigation_edges);
        assert_eq!(costs.len(), 1);
        assert_eq!(costs[&(1, 1)], 0.0);

        assert!(dijkstra_path((1, 1), (0, 0), &level, navigation_edges).is_none());
    }

    #[test]
    fn all_costs_of_uniform_rectangle() {
        let level = uniform(4, 3, 2.0);
        let costs = dijkstra_all_costs((0, 0), &level, navigation_edges);

        assert_eq!(costs.len(), 12);
        assert_close(costs[&(1, 0)], 2.0);
        assert_close(costs[&(1, 1)], 2.0 * SQRT_2);
        assert_close(costs[&(3, 0)], 6.0);
        assert_close(costs[&(3, 2)], 2.0 + 2.0 * 2.0 * SQRT_2);
    }

    #[test]
    fn all_costs_match_paths() {
        let level: Level = "\
1X315
12X11
19111
1X5X1"
            .parse()
            .unwrap();
        let start = (0, 0);
        let costs = dijkstra_all_costs(start, &level, navigation_edges);

        for (&cell, _) in level.spaces() {
            let path = dijkstra_path(start, cell, &level, navigation_edges);
            match (path, costs.get(&cell)) {
                (Some(path), Some(&cost)) => assert_close(path.cost(), cost),
                (None, None) => {}
                (path, cost) => panic!("{:?}: path {:?} but cost {:?}", cell, path, cost),
            }
        }
    }

    #[test]
    fn generic_graph() {
        // 0 --4-- 1
        // |       |
        // 1       1
        // |       |
        // 2 --1-- 3 --0-- 4     5
        let graph: Vec<Vec<(u8, Cost)>> = vec![
            vec![(1, 4.0), (2, 1.0)],
            vec![(0, 4.0), (3, 1.0)],
            vec![(0, 1.0), (3, 1.0)],
            vec![(1, 1.0), (2, 1.0), (4, 0.0)],
            vec![(3, 0.0)],
            vec![],
        ];
        let edges = |graph: &Vec<Vec<(u8, Cost)>>, id: u8| graph[id as usize].clone();

        let path = dijkstra_path(0, 1, &graph, edges).unwrap();
        assert_eq!(path, vec![0, 2, 3, 1]);
        assert_eq!(path.cost(), 3.0);

        assert!(dijkstra_path(0, 5, &graph, edges).is_none());

        let costs = dijkstra_all_costs(0, &graph, edges);
        assert_eq!(costs.len(), 5);
        assert_eq!(costs[&4], 2.0);
    }
}
