//! Orderings for the Nodes that were discovered but not yet expanded by a search.
//!
//! Every search owns a fresh Frontier for the duration of a single call. The two provided
//! implementations differ only in the order in which they hand out their elements:
//! - [`Queue`] returns elements in the order they were inserted (first in, first out)
//! - [`PriorityQueue`] returns the element with the smallest priority first

mod queue;
pub use queue::Queue;

mod priority_queue;
pub use priority_queue::PriorityQueue;

/// The common interface of all Frontiers.
pub trait Frontier {
	/// The type of the elements stored in the Frontier
	type Item;

	/// Returns the number of pending elements
	fn len(&self) -> usize;

	/// `true` iff there are no pending elements
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Inserts an element
	fn put(&mut self, item: Self::Item);

	/// Removes the next element, or returns `None` if the Frontier is empty
	fn pop(&mut self) -> Option<Self::Item>;

	/// Removes the next element.
	///
	/// ## Panics
	/// if the Frontier is empty. Check [`is_empty`](Frontier::is_empty) first, or use
	/// [`pop`](Frontier::pop) instead.
	fn get(&mut self) -> Self::Item {
		match self.pop() {
			Some(item) => item,
			None => panic!("get called on an empty Frontier"),
		}
	}
}
