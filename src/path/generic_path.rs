use super::Cost;

/// A generic implementation of a Path
///
/// Stores a sequence of Nodes and the total Cost of traversing these Nodes.
/// Note that the individual costs of the steps within the Path cannot be retrieved through this struct.
///
/// A Path dereferences to a slice of its Nodes, so all the usual slice methods are available.
///
/// Paths are ordered by their Cost alone, while equality also compares the Nodes: two different
/// Paths with the same Cost compare as [`Ordering::Equal`] without being `==`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
	path: Vec<P>,
	cost: Cost,
}

impl<P> Path<P> {
	/// creates a new Path with the given sequence of Nodes and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use graph_pathfinding::path::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 42);
	///
	/// assert_eq!(path.cost(), 42);
	/// assert_eq!(&path[..], &['a', 'b', 'c']);
	/// ```
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path { path, cost }
	}

	/// the total Cost of the Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// the first Node of the Path
	pub fn start(&self) -> Option<&P> {
		self.path.first()
	}

	/// the last Node of the Path
	pub fn goal(&self) -> Option<&P> {
		self.path.last()
	}

	/// the number of Edges walked along this Path
	pub fn steps(&self) -> usize {
		self.path.len().saturating_sub(1)
	}

	/// consumes the Path, returning the sequence of Nodes
	pub fn into_nodes(self) -> Vec<P> {
		self.path
	}
}

use std::ops::Deref;

impl<P> Deref for Path<P> {
	type Target = [P];
	fn deref(&self) -> &[P] {
		&self.path
	}
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
	fn eq(&self, rhs: &Vec<P>) -> bool {
		self.path == *rhs
	}
}

use std::cmp::Ordering;

impl<P: Eq> Ord for Path<P> {
	fn cmp(&self, other: &Path<P>) -> Ordering {
		self.cost.cmp(&other.cost)
	}
}

impl<P: Eq> PartialOrd for Path<P> {
	fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {}", p)?;
			}
			Ok(())
		}
	}
}
