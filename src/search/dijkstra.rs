use super::best_first::best_first_search;
use crate::{Graph, NodeID, Path};

/// Searches the Graph using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm),
/// also known as uniform-cost search.
///
/// Nodes are expanded in the order of their total Cost from `start`, and the search stops as soon
/// as `goal` is expanded. Since Costs are never negative, the first time `goal` is expanded its
/// Cost is final.
///
/// ## Examples
/// ```
/// use graph_pathfinding::{uniform_cost_search, GraphSpec};
///
/// // a --1--> b --1--> c
/// //  \________9______/
/// let graph = GraphSpec::new()
///     .vertex("a", (0, 0), [("c", 9), ("b", 1)])
///     .vertex("b", (1, 0), [("c", 1)])
///     .vertex("c", (2, 0), [])
///     .build()
///     .unwrap();
/// let (a, c) = (graph.node_id("a").unwrap(), graph.node_id("c").unwrap());
///
/// let path = uniform_cost_search(&graph, a, c).unwrap();
/// assert_eq!(graph.names(&path), vec!["a", "b", "c"]);
/// assert_eq!(path.cost(), 2);
///
/// assert_eq!(uniform_cost_search(&graph, c, a), None);
/// ```
///
/// ## Returns
/// the cheapest Path, or `None` if `goal` cannot be reached from `start`.
/// The first Node in the Path is always `start` and the last is `goal`
pub fn uniform_cost_search(graph: &Graph, start: NodeID, goal: NodeID) -> Option<Path<NodeID>> {
	best_first_search(graph, start, goal, |_| 0, "uniform-cost search")
}
