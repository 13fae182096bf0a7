use crate::frontier::{Frontier, Queue};
use crate::node_id::node_id_map_with_cap;
use crate::path::reconstruct_path;
use crate::{Graph, NodeID};

use log::{debug, trace};

/// Searches the Graph using [Breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search).
///
/// The Costs of the Edges are ignored: the returned Path is one with the fewest Edges, which is
/// why no Cost is returned either.
///
/// ## Examples
/// ```
/// use graph_pathfinding::{breadth_first_search, GraphSpec};
///
/// let graph = GraphSpec::new()
///     .vertex("a", (0, 0), [("b", 1), ("d", 100)])
///     .vertex("b", (1, 0), [("c", 1)])
///     .vertex("c", (2, 0), [("d", 1)])
///     .vertex("d", (3, 0), [])
///     .build()
///     .unwrap();
/// let (a, d) = (graph.node_id("a").unwrap(), graph.node_id("d").unwrap());
///
/// let path = breadth_first_search(&graph, a, d).unwrap();
/// assert_eq!(graph.names(&path), vec!["a", "d"]);
///
/// assert_eq!(breadth_first_search(&graph, d, a), None);
/// ```
///
/// ## Returns
/// the Nodes along the Path, or `None` if `goal` is unreachable.
/// The first Node is always `start` and the last is `goal`
pub fn breadth_first_search(graph: &Graph, start: NodeID, goal: NodeID) -> Option<Vec<NodeID>> {
	let mut frontier = Queue::with_capacity(graph.len());
	let mut came_from = node_id_map_with_cap(graph.len());

	frontier.put(start);
	came_from.insert(start, None);

	let mut expanded = 0;

	while let Some(current) = frontier.pop() {
		if current == goal {
			break;
		}
		expanded += 1;

		for segment in graph.segments(current) {
			let other = segment.end();
			if !came_from.contains_key(&other) {
				came_from.insert(other, Some(current));
				frontier.put(other);
			}
		}
	}

	trace!(
		"breadth-first search from {} to {} expanded {} Nodes",
		graph[start],
		graph[goal],
		expanded
	);

	let path = reconstruct_path(start, goal, &came_from);
	if path.is_none() {
		debug!(
			"breadth-first search: {} is unreachable from {}",
			graph[goal], graph[start]
		);
	}
	path
}
