//! The search algorithms.
//!
//! All searches take the [`NodeID`](crate::NodeID)s of the start and the goal, which can be
//! obtained through [`Graph::node_id`](crate::Graph::node_id). An unreachable goal is not an
//! error: the searches simply return `None`.
//!
//! ## Panics
//! if `start` or `goal` do not belong to the Graph.

mod bfs;
pub use bfs::breadth_first_search;

mod best_first;

mod dijkstra;
pub use dijkstra::uniform_cost_search;

mod a_star;
pub use a_star::a_star_search;

use crate::{Cost, Node};

/// The Heuristic used by [`a_star_search`]: the Manhattan distance between two Nodes.
///
/// It never overestimates the remaining Cost as long as walking an Edge costs at least the
/// Manhattan distance between its two Nodes.
///
/// ## Examples
/// ```
/// # use graph_pathfinding::{GraphSpec, heuristic};
/// let graph = GraphSpec::new()
///     .vertex("a", (3, 1), [])
///     .vertex("b", (0, -2), [])
///     .build()
///     .unwrap();
///
/// let (a, b) = (graph.node("a").unwrap(), graph.node("b").unwrap());
/// assert_eq!(heuristic(a, b), 3 + 3);
/// assert_eq!(heuristic(b, a), heuristic(a, b));
/// ```
pub fn heuristic(a: &Node, b: &Node) -> Cost {
	(a.x().abs_diff(b.x()) as Cost).saturating_add(a.y().abs_diff(b.y()) as Cost)
}
