use std::hash::{BuildHasher, Hash};

/// Follows the predecessor links in `came_from` backwards from `goal` to `start`.
///
/// `came_from` maps every discovered Node to the Node it was reached from. The `start` is
/// expected to map to `None`, although it does not need to be present at all.
///
/// ## Returns
/// the Nodes from `start` to `goal` (both inclusive), or `None` if the chain of predecessors
/// breaks before `start` is reached, which means that `goal` was never discovered.
///
/// ## Examples
/// ```
/// # use graph_pathfinding::path::reconstruct_path;
/// use hashbrown::HashMap;
///
/// let came_from: HashMap<char, Option<char>> =
///     [('a', None), ('b', Some('a')), ('c', Some('b'))].into_iter().collect();
///
/// assert_eq!(reconstruct_path('a', 'c', &came_from), Some(vec!['a', 'b', 'c']));
/// assert_eq!(reconstruct_path('a', 'z', &came_from), None);
/// ```
pub fn reconstruct_path<Id, S>(
	start: Id,
	goal: Id,
	came_from: &hashbrown::HashMap<Id, Option<Id>, S>,
) -> Option<Vec<Id>>
where
	Id: Copy + Eq + Hash,
	S: BuildHasher,
{
	let mut steps = vec![];
	let mut current = goal;

	while current != start {
		steps.push(current);
		match came_from.get(&current) {
			Some(&Some(prev)) => current = prev,
			_ => return None,
		}
	}
	steps.push(start);
	steps.reverse();
	Some(steps)
}
