//! Shortest Path searches over arbitrary Graphs.
//!
//! A Graph is described by an adjacency function that takes the Graph and a Node and returns
//! every neighbor of that Node together with the Cost of the edge leading there. Edge Costs must
//! be non-negative and comparable (no `NaN`). For Levels, this function is
//! [`navigation_edges`](crate::neighbors::navigation_edges).

mod dijkstra;
pub use dijkstra::{dijkstra_all_costs, dijkstra_path};

pub use crate::{path::Path, Cost};

use std::cmp::Ordering;

/// An entry in the frontier of a search.
///
/// Ordered so that a [`BinaryHeap`](std::collections::BinaryHeap) pops the lowest Cost first.
/// Equal Costs pop the smaller Id first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Element<Id>(pub Id, pub Cost);

impl<Id: Ord> PartialEq for Element<Id> {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl<Id: Ord> Eq for Element<Id> {}
impl<Id: Ord> PartialOrd for Element<Id> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl<Id: Ord> Ord for Element<Id> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.total_cmp(&self.1).then_with(|| rhs.0.cmp(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::Element;
    use std::collections::BinaryHeap;

    #[test]
    fn lowest_cost_first() {
        let mut heap = BinaryHeap::new();
        heap.push(Element((0, 0), 3.0));
        heap.push(Element((1, 0), 0.5));
        heap.push(Element((2, 0), 1.5));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.1).collect();
        assert_eq!(order, vec![0.5, 1.5, 3.0]);
    }

    #[test]
    fn ties_pop_smaller_id() {
        let mut heap = BinaryHeap::new();
        heap.push(Element((2, 1), 1.0));
        heap.push(Element((0, 5), 1.0));
        heap.push(Element((2, 0), 1.0));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.0).collect();
        assert_eq!(order, vec![(0, 5), (2, 0), (2, 1)]);
    }
}
