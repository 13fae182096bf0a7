mod node;
pub use node::Node;

mod edge;
pub use edge::Edge;

mod graph_spec;
pub use graph_spec::{GraphSpec, VertexSpec};

use crate::{BuildError, LookupError, NodeID};

use log::{debug, warn};
use slab::Slab;
use std::fmt;

/// A weighted, directed Graph of named Nodes.
///
/// The Graph is built once from a [`GraphSpec`] and cannot be changed afterwards. Nodes are
/// referenced by their [`NodeID`], which can be obtained from a name through
/// [`node_id`](Graph::node_id).
///
/// ## Examples
/// ```
/// use graph_pathfinding::{GraphSpec, LookupError};
///
/// let graph = GraphSpec::new()
///     .vertex("a", (0, 0), [("b", 3)])
///     .vertex("b", (1, 0), [])
///     .build()
///     .unwrap();
///
/// let a = graph.node_id("a").unwrap();
/// assert_eq!(graph[a].pos(), (0, 0));
/// assert_eq!(graph.edge("a", "b").unwrap().cost(), 3);
///
/// assert_eq!(graph.node("x"), Err(LookupError::UnknownNode("x".into())));
/// assert!(graph.edge("b", "a").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
	nodes: Slab<Node>,
	ids: hashbrown::HashMap<String, NodeID>,
}

impl Graph {
	/// Builds the Graph described by `spec`.
	///
	/// Every vertex becomes a Node and every `(neighbor, cost)` pair becomes an Edge. If the
	/// same pair of Nodes is connected more than once, the last declaration wins, but the Edge
	/// keeps the position of the first one.
	///
	/// ## Errors
	/// - [`BuildError::DuplicateNode`] if two vertices share a name
	/// - [`BuildError::UnknownNeighbor`] if a neighbor was never declared as a vertex
	pub fn new(spec: GraphSpec) -> Result<Graph, BuildError> {
		let mut nodes: Slab<Node> = Slab::with_capacity(spec.vertices.len());
		let mut ids: hashbrown::HashMap<String, NodeID> =
			hashbrown::HashMap::with_capacity(spec.vertices.len());
		let mut order = Vec::with_capacity(spec.vertices.len());

		for vertex in spec.vertices.iter() {
			if ids.contains_key(vertex.name.as_str()) {
				return Err(BuildError::DuplicateNode(vertex.name.clone()));
			}
			let id = nodes.insert(Node::new(vertex.name.clone(), vertex.coords)) as NodeID;
			ids.insert(vertex.name.clone(), id);
			order.push(id);
		}

		let mut edge_count = 0;
		for (vertex, &start) in spec.vertices.iter().zip(order.iter()) {
			for (neighbor, cost) in vertex.neighbors.iter() {
				let end = match ids.get(neighbor.as_str()) {
					Some(&end) => end,
					None => {
						return Err(BuildError::UnknownNeighbor {
							node: vertex.name.clone(),
							neighbor: neighbor.clone(),
						})
					}
				};
				let edge = Edge::new(start, end, *cost);
				let edges = &mut nodes[start as usize].edges;
				if let Some(existing) = edges.iter_mut().find(|e| e.end() == end) {
					warn!(
						"Edge {}->{} declared twice, replacing cost {} with {}",
						vertex.name,
						neighbor,
						existing.cost(),
						cost
					);
					*existing = edge;
				} else {
					edges.push(edge);
					edge_count += 1;
				}
			}
		}

		debug!(
			"built Graph with {} Nodes and {} Edges",
			nodes.len(),
			edge_count
		);

		Ok(Graph { nodes, ids })
	}

	/// the number of Nodes in the Graph
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// `true` if the Graph has no Nodes
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// `true` if `id` refers to a Node of this Graph
	pub fn contains(&self, id: NodeID) -> bool {
		self.nodes.contains(id as usize)
	}

	/// Finds the [`NodeID`] of the Node called `name`
	pub fn node_id(&self, name: &str) -> Result<NodeID, LookupError> {
		self.ids
			.get(name)
			.copied()
			.ok_or_else(|| LookupError::UnknownNode(name.to_string()))
	}

	/// Finds the Node called `name`
	pub fn node(&self, name: &str) -> Result<&Node, LookupError> {
		let id = self.node_id(name)?;
		Ok(&self[id])
	}

	/// Finds the Edge going from the Node called `start` to the Node called `end`
	pub fn edge(&self, start: &str, end: &str) -> Result<&Edge, LookupError> {
		let start_id = self.node_id(start)?;
		let end_id = self.node_id(end)?;
		self.segments(start_id)
			.iter()
			.find(|e| e.end() == end_id)
			.ok_or_else(|| LookupError::UnknownEdge {
				start: start.to_string(),
				end: end.to_string(),
			})
	}

	/// All Edges leaving the Node `id`, in declaration order.
	///
	/// This is the only way the searches explore the Graph.
	#[track_caller]
	pub fn segments(&self, id: NodeID) -> &[Edge] {
		&self[id].edges
	}

	/// Iterates over all Nodes in declaration order
	pub fn nodes(&self) -> impl Iterator<Item = (NodeID, &Node)> + '_ {
		self.nodes.iter().map(|(id, node)| (id as NodeID, node))
	}

	/// Iterates over all Edges, grouped by their start Node, in declaration order
	pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
		self.nodes.iter().flat_map(|(_, node)| node.edges.iter())
	}

	/// Translates a sequence of NodeIDs (e.g. a Path) into the names of the Nodes
	#[track_caller]
	pub fn names(&self, ids: &[NodeID]) -> Vec<&str> {
		ids.iter().map(|&id| self[id].name()).collect()
	}

	/// Renders an Edge of this Graph as `start->end(cost)`, using the names of its Nodes
	#[track_caller]
	pub fn display_edge(&self, edge: &Edge) -> String {
		format!("{}->{}({})", self[edge.start()], self[edge.end()], edge.cost())
	}
}

use std::ops::Index;
impl Index<NodeID> for Graph {
	type Output = Node;
	#[track_caller]
	fn index(&self, index: NodeID) -> &Node {
		&self.nodes[index as usize]
	}
}

impl fmt::Display for Graph {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		writeln!(fmt, "Graph:")?;
		write!(fmt, "> Nodes :[")?;
		for (i, (_, node)) in self.nodes().enumerate() {
			if i > 0 {
				write!(fmt, ", ")?;
			}
			write!(fmt, "{}", node)?;
		}
		writeln!(fmt, "]")?;
		write!(fmt, "> Edges :[")?;
		for (i, edge) in self.edges().enumerate() {
			if i > 0 {
				write!(fmt, ", ")?;
			}
			write!(fmt, "{}", self.display_edge(edge))?;
		}
		write!(fmt, "]")
	}
}
