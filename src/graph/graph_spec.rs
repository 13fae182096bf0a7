use super::Graph;
use crate::{BuildError, Cost, Point};

/// The declarative description a [`Graph`] is built from.
///
/// Vertices keep the order they were declared in. That order is the order of
/// [`Graph::nodes`], and the order of each vertex's `neighbors` is the order in which the
/// searches expand its outgoing Edges.
///
/// ## Examples
/// ```
/// use graph_pathfinding::GraphSpec;
///
/// let spec = GraphSpec::new()
///     .vertex("a", (0, 0), [("b", 1)])
///     .vertex("b", (1, 0), []);
///
/// assert_eq!(spec.vertices.len(), 2);
/// assert_eq!(spec.vertices[0].neighbors, vec![("b".to_string(), 1)]);
///
/// let graph = spec.build().unwrap();
/// assert_eq!(graph.len(), 2);
/// ```
///
/// An empty description builds an empty Graph:
/// ```
/// # use graph_pathfinding::GraphSpec;
/// assert_eq!(GraphSpec::default(), GraphSpec { vertices: vec![] });
/// assert!(GraphSpec::default().build().unwrap().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphSpec {
	/// All vertices of the Graph, in declaration order
	pub vertices: Vec<VertexSpec>,
}

/// A single vertex of a [`GraphSpec`] together with its outgoing Edges.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexSpec {
	/// The unique name of the vertex
	pub name: String,
	/// The coordinates of the vertex, used by the A* heuristic
	pub coords: Point,
	/// `(neighbor name, cost)` for every outgoing Edge
	#[cfg_attr(feature = "serde", serde(default))]
	pub neighbors: Vec<(String, Cost)>,
}

impl VertexSpec {
	/// Creates a vertex without any outgoing Edges
	pub fn new(name: impl Into<String>, coords: Point) -> VertexSpec {
		VertexSpec {
			name: name.into(),
			coords,
			neighbors: Vec::new(),
		}
	}

	/// Adds an outgoing Edge to `neighbor`
	pub fn neighbor(mut self, neighbor: impl Into<String>, cost: Cost) -> VertexSpec {
		self.neighbors.push((neighbor.into(), cost));
		self
	}
}

impl GraphSpec {
	/// Creates an empty description
	pub fn new() -> GraphSpec {
		GraphSpec::default()
	}

	/// Declares a vertex with its coordinates and its `(neighbor name, cost)` pairs
	pub fn vertex<'a>(
		mut self,
		name: impl Into<String>,
		coords: Point,
		neighbors: impl IntoIterator<Item = (&'a str, Cost)>,
	) -> GraphSpec {
		let vertex = VertexSpec {
			name: name.into(),
			coords,
			neighbors: neighbors
				.into_iter()
				.map(|(neighbor, cost)| (neighbor.to_string(), cost))
				.collect(),
		};
		self.vertices.push(vertex);
		self
	}

	/// Builds the [`Graph`] described by `self`. Shorthand for [`Graph::new`].
	pub fn build(self) -> Result<Graph, BuildError> {
		Graph::new(self)
	}
}

impl FromIterator<VertexSpec> for GraphSpec {
	fn from_iter<I: IntoIterator<Item = VertexSpec>>(iter: I) -> GraphSpec {
		GraphSpec {
			vertices: iter.into_iter().collect(),
		}
	}
}

impl Extend<VertexSpec> for GraphSpec {
	fn extend<I: IntoIterator<Item = VertexSpec>>(&mut self, iter: I) {
		self.vertices.extend(iter);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builders_agree() {
		let chained = GraphSpec::new()
			.vertex("a", (0, 0), [("b", 1), ("c", 4)])
			.vertex("b", (1, 0), [])
			.vertex("c", (2, 0), [("a", 2)]);

		let collected: GraphSpec = [
			VertexSpec::new("a", (0, 0)).neighbor("b", 1).neighbor("c", 4),
			VertexSpec::new("b", (1, 0)),
			VertexSpec::new("c", (2, 0)).neighbor("a", 2),
		]
		.into_iter()
		.collect();

		assert_eq!(chained, collected);
	}

	#[cfg(feature = "serde")]
	#[test]
	fn from_json() {
		let json = r#"{
			"vertices": [
				{ "name": "a", "coords": [0, 2], "neighbors": [["b", 1]] },
				{ "name": "b", "coords": [1, 2] }
			]
		}"#;
		let spec: GraphSpec = serde_json::from_str(json).unwrap();

		assert_eq!(
			spec,
			GraphSpec::new()
				.vertex("a", (0, 2), [("b", 1)])
				.vertex("b", (1, 2), [])
		);

		let back = serde_json::to_string(&spec).unwrap();
		assert_eq!(serde_json::from_str::<GraphSpec>(&back).unwrap(), spec);
	}
}
