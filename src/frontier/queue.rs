use super::Frontier;

use std::collections::VecDeque;
use std::fmt;

/// A first-in-first-out Frontier, as used by the breadth-first search.
///
/// ## Examples
/// ```
/// use graph_pathfinding::frontier::{Frontier, Queue};
///
/// let mut queue = Queue::new();
/// queue.put('a');
/// queue.put('b');
///
/// assert_eq!(queue.get(), 'a');
/// assert_eq!(queue.get(), 'b');
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Queue<T> {
	elements: VecDeque<T>,
}

impl<T> Queue<T> {
	/// Creates a new, empty Queue
	pub fn new() -> Queue<T> {
		Queue {
			elements: VecDeque::new(),
		}
	}

	/// Creates a new, empty Queue with room for `capacity` elements
	pub fn with_capacity(capacity: usize) -> Queue<T> {
		Queue {
			elements: VecDeque::with_capacity(capacity),
		}
	}
}

impl<T> Default for Queue<T> {
	fn default() -> Queue<T> {
		Queue::new()
	}
}

impl<T> Frontier for Queue<T> {
	type Item = T;

	fn len(&self) -> usize {
		self.elements.len()
	}
	fn put(&mut self, item: T) {
		self.elements.push_back(item);
	}
	fn pop(&mut self) -> Option<T> {
		self.elements.pop_front()
	}
}

/// The first element of the Vec is the first one to be removed.
impl<T> From<Vec<T>> for Queue<T> {
	fn from(elements: Vec<T>) -> Queue<T> {
		Queue {
			elements: elements.into(),
		}
	}
}

impl<T> FromIterator<T> for Queue<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Queue<T> {
		Queue {
			elements: iter.into_iter().collect(),
		}
	}
}

impl<T> Extend<T> for Queue<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.elements.extend(iter);
	}
}

impl<T: fmt::Debug> fmt::Display for Queue<T> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Queue: ")?;
		fmt.debug_list().entries(self.elements.iter()).finish()
	}
}
