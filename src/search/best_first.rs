use crate::frontier::{Frontier, PriorityQueue};
use crate::node_id::{node_id_map_with_cap, NodeIDMap};
use crate::path::reconstruct_path;
use crate::{Cost, Graph, NodeID, Path};

use log::{debug, trace};

/// Cost-ordered expansion shared by Dijkstra and A*.
///
/// The Frontier is ordered by `cost + heuristic(node)`, while `cost_so_far` keeps the true
/// cost. Dijkstra is the special case of a heuristic that is always 0.
///
/// A segment whose cumulative Cost would not fit into [`Cost`] is never walked, and priorities
/// saturate at `Cost::MAX`.
pub(super) fn best_first_search(
	graph: &Graph,
	start: NodeID,
	goal: NodeID,
	mut heuristic: impl FnMut(NodeID) -> Cost,
	name: &str,
) -> Option<Path<NodeID>> {
	let mut frontier: PriorityQueue<(NodeID, Cost)> = PriorityQueue::with_capacity(graph.len());
	let mut came_from = node_id_map_with_cap(graph.len());
	let mut cost_so_far: NodeIDMap<Cost> = node_id_map_with_cap(graph.len());

	frontier.put(((start, 0), 0));
	came_from.insert(start, None);
	cost_so_far.insert(start, 0);

	let mut expanded = 0;

	while let Some(((current, current_cost), _)) = frontier.pop() {
		if current == goal {
			break;
		}
		// a cheaper way to `current` was found after this entry was pushed
		if current_cost > cost_so_far[&current] {
			continue;
		}
		expanded += 1;

		for segment in graph.segments(current) {
			let other = segment.end();
			let other_cost = match current_cost.checked_add(segment.cost()) {
				Some(cost) => cost,
				None => {
					trace!("{}: Cost overflow on {}", name, graph.display_edge(segment));
					continue;
				}
			};

			let improves = match cost_so_far.get(&other) {
				Some(&prev_cost) => other_cost < prev_cost,
				None => true,
			};
			if improves {
				cost_so_far.insert(other, other_cost);
				came_from.insert(other, Some(current));
				frontier.put(((other, other_cost), other_cost.saturating_add(heuristic(other))));
			}
		}
	}

	trace!(
		"{} from {} to {} expanded {} Nodes",
		name,
		graph[start],
		graph[goal],
		expanded
	);

	let steps = match reconstruct_path(start, goal, &came_from) {
		Some(steps) => steps,
		None => {
			debug!("{}: {} is unreachable from {}", name, graph[goal], graph[start]);
			return None;
		}
	};
	let cost = cost_so_far.get(&goal).copied()?;

	Some(Path::new(steps, cost))
}
