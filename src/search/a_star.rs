use super::{best_first::best_first_search, heuristic};
use crate::{Graph, NodeID, Path};

/// Searches the Graph using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Works like [`uniform_cost_search`](crate::uniform_cost_search), except that the Frontier is
/// ordered by the Cost so far plus the estimated Cost to `goal`, as given by [`heuristic`]
/// (the Manhattan distance between the coordinates of the Nodes). The returned Cost is always
/// the true Cost of the Path.
///
/// The result is only guaranteed to be the cheapest Path if the Heuristic never overestimates,
/// i.e. if every Edge costs at least the Manhattan distance between its two Nodes.
///
/// ## Examples
/// ```
/// use graph_pathfinding::{a_star_search, GraphSpec};
///
/// // a - b - c
/// // |       |
/// // d - e - f
/// let graph = GraphSpec::new()
///     .vertex("a", (0, 0), [("b", 1), ("d", 1)])
///     .vertex("b", (1, 0), [("c", 1)])
///     .vertex("c", (2, 0), [("f", 1)])
///     .vertex("d", (0, 1), [("e", 3)])
///     .vertex("e", (1, 1), [("f", 1)])
///     .vertex("f", (2, 1), [])
///     .build()
///     .unwrap();
/// let (a, f) = (graph.node_id("a").unwrap(), graph.node_id("f").unwrap());
///
/// let path = a_star_search(&graph, a, f).unwrap();
/// assert_eq!(graph.names(&path), vec!["a", "b", "c", "f"]);
/// assert_eq!(path.cost(), 3);
/// ```
///
/// ## Returns
/// the Path, if one was found, or `None` if `goal` is unreachable.
/// The first Node in the Path is always `start` and the last is `goal`
pub fn a_star_search(graph: &Graph, start: NodeID, goal: NodeID) -> Option<Path<NodeID>> {
	let goal_node = &graph[goal];
	best_first_search(
		graph,
		start,
		goal,
		|id| heuristic(goal_node, &graph[id]),
		"A* search",
	)
}
