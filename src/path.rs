//! The result of a single-destination search.

use crate::Cost;

use std::sync::Arc;

/// A sequence of Nodes from a start to a destination, together with the total Cost of walking it.
///
/// Both the start and the destination are part of the Path, so a Path from a Node to itself
/// contains exactly that one Node and has a Cost of `0`.
///
/// Cloning a Path is cheap, since the Nodes are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    path: Arc<[P]>,
    cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use level_pathfinding::path::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 4.5);
    ///
    /// assert_eq!(path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.cost(), 4.5);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path {
            path: path.into(),
            cost,
        }
    }

    /// The total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of Nodes in the Path, including start and destination
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path contains no Nodes
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The first Node of the Path
    pub fn start(&self) -> Option<&P> {
        self.path.first()
    }

    /// The last Node of the Path
    pub fn destination(&self) -> Option<&P> {
        self.path.last()
    }

    /// Returns an Iterator over the Nodes of the Path
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path[..] == rhs[..]
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.path[..] == rhs[..]
    }
}

use std::cmp::Ordering;

impl<P: PartialEq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        self.cost.partial_cmp(&other.cost)
    }
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{:?}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {:?}", p)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {

    use super::Path;
    #[test]
    fn index() {
        let path = Path::new(vec![4, 2, 0], 4.2);

        assert_eq!(path[0], 4);
        assert_eq!(path[1], 2);
        assert_eq!(path[2], 0);
        assert_eq!(path.start(), Some(&4));
        assert_eq!(path.destination(), Some(&0));
    }

    #[test]
    fn display() {
        let path = Path::new(vec![(0, 0), (1, 1)], 1.5);

        assert_eq!(&format!("{}", path), "Path[Cost = 1.5]: (0, 0) -> (1, 1)");
    }

    #[test]
    fn display_empty() {
        let path = Path::new(Vec::<i32>::new(), 0.0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }

    #[test]
    fn ordered_by_cost() {
        let cheap = Path::new(vec!['a', 'b'], 1.0);
        let expensive = Path::new(vec!['a'], 2.0);

        assert!(cheap < expensive);
    }
}
