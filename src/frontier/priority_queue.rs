use super::Frontier;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

/// A Frontier that always returns the element with the smallest priority.
///
/// Elements with equal priority are returned in the order they were inserted.
///
/// ## Examples
/// ```
/// use graph_pathfinding::frontier::{Frontier, PriorityQueue};
///
/// let mut queue = PriorityQueue::new();
/// queue.put(("far", 9));
/// queue.put(("near", 1));
/// queue.put(("also near", 1));
///
/// assert_eq!(queue.get(), ("near", 1));
/// assert_eq!(queue.get(), ("also near", 1));
/// assert_eq!(queue.get(), ("far", 9));
/// ```
#[derive(Clone, Debug)]
pub struct PriorityQueue<T, P = crate::Cost> {
	heap: BinaryHeap<Element<T, P>>,
	inserted: u64,
}

/// An entry of the heap. `seq` is the insertion counter used to keep equal priorities stable.
#[derive(Clone, Debug)]
struct Element<T, P> {
	item: T,
	priority: P,
	seq: u64,
}

impl<T, P: Ord> PartialEq for Element<T, P> {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl<T, P: Ord> Eq for Element<T, P> {}
impl<T, P: Ord> PartialOrd for Element<T, P> {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl<T, P: Ord> Ord for Element<T, P> {
	// reversed, since BinaryHeap is a max-heap
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.priority
			.cmp(&self.priority)
			.then_with(|| rhs.seq.cmp(&self.seq))
	}
}

impl<T, P: Ord> PriorityQueue<T, P> {
	/// Creates a new, empty PriorityQueue
	pub fn new() -> PriorityQueue<T, P> {
		PriorityQueue {
			heap: BinaryHeap::new(),
			inserted: 0,
		}
	}

	/// Creates a new, empty PriorityQueue with room for `capacity` elements
	pub fn with_capacity(capacity: usize) -> PriorityQueue<T, P> {
		PriorityQueue {
			heap: BinaryHeap::with_capacity(capacity),
			inserted: 0,
		}
	}

	/// Returns the next element and its priority without removing it
	pub fn peek(&self) -> Option<(&T, &P)> {
		self.heap.peek().map(|e| (&e.item, &e.priority))
	}
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
	fn default() -> PriorityQueue<T, P> {
		PriorityQueue::new()
	}
}

impl<T, P: Ord> Frontier for PriorityQueue<T, P> {
	type Item = (T, P);

	fn len(&self) -> usize {
		self.heap.len()
	}
	fn put(&mut self, (item, priority): (T, P)) {
		self.heap.push(Element {
			item,
			priority,
			seq: self.inserted,
		});
		self.inserted += 1;
	}
	fn pop(&mut self) -> Option<(T, P)> {
		self.heap.pop().map(|e| (e.item, e.priority))
	}
}

impl<T, P: Ord> FromIterator<(T, P)> for PriorityQueue<T, P> {
	fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> PriorityQueue<T, P> {
		let mut queue = PriorityQueue::new();
		queue.extend(iter);
		queue
	}
}

impl<T, P: Ord> Extend<(T, P)> for PriorityQueue<T, P> {
	fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
		for pair in iter {
			self.put(pair);
		}
	}
}

/// Lists the elements in the order they would be removed.
impl<T: fmt::Debug, P: Ord + fmt::Debug> fmt::Display for PriorityQueue<T, P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		let mut sorted: Vec<&Element<T, P>> = self.heap.iter().collect();
		sorted.sort_by(|a, b| b.cmp(a));
		write!(fmt, "PriorityQueue: ")?;
		fmt.debug_list()
			.entries(sorted.iter().map(|e| (&e.item, &e.priority)))
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn smallest_priority_first() {
		let mut queue = PriorityQueue::new();
		for (item, priority) in [('d', 7), ('a', 0), ('c', 5), ('b', 3)] {
			queue.put((item, priority));
		}

		let drained: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
		assert_eq!(drained, vec![('a', 0), ('b', 3), ('c', 5), ('d', 7)]);
	}

	#[test]
	fn ties_keep_insertion_order() {
		let mut queue: PriorityQueue<u32, u32> = (0..20).map(|i| (i, i % 2)).collect();

		let mut even = vec![];
		let mut odd = vec![];
		while let Some((item, priority)) = queue.pop() {
			if priority == 0 {
				assert!(odd.is_empty(), "priority 0 after priority 1");
				even.push(item);
			} else {
				odd.push(item);
			}
		}
		assert_eq!(even, (0..20).step_by(2).collect::<Vec<_>>());
		assert_eq!(odd, (1..20).step_by(2).collect::<Vec<_>>());
	}

	#[test]
	fn ties_after_interleaved_pops() {
		let mut queue = PriorityQueue::new();
		queue.put(("first", 2));
		queue.put(("low", 1));
		assert_eq!(queue.get(), ("low", 1));
		queue.put(("second", 2));
		queue.put(("third", 2));

		assert_eq!(queue.peek(), Some((&"first", &2)));
		assert_eq!(queue.get().0, "first");
		assert_eq!(queue.get().0, "second");
		assert_eq!(queue.get().0, "third");
		assert!(queue.is_empty());
	}

	#[test]
	#[should_panic(expected = "empty Frontier")]
	fn get_on_empty() {
		let mut queue: PriorityQueue<u32> = PriorityQueue::new();
		queue.get();
	}

	#[test]
	fn display() {
		let queue: PriorityQueue<_> = [("b", 3), ("a", 0), ("c", 3)].into_iter().collect();
		assert_eq!(
			queue.to_string(),
			r#"PriorityQueue: [("a", 0), ("b", 3), ("c", 3)]"#
		);
	}
}
