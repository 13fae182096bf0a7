use thiserror::Error;

/// Returned when a Node or Edge is requested by a name that the [`Graph`](crate::Graph) does not know.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
	/// No Node with that name exists
	#[error("no Node named `{0}`")]
	UnknownNode(String),
	/// Both Nodes exist, but there is no Edge going from `start` to `end`
	#[error("no Edge from `{start}` to `{end}`")]
	UnknownEdge {
		/// name of the Node the Edge was supposed to start at
		start: String,
		/// name of the Node the Edge was supposed to end at
		end: String,
	},
}

/// Returned when a [`GraphSpec`](crate::GraphSpec) does not describe a valid [`Graph`](crate::Graph).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
	/// A vertex lists a neighbor that was never declared
	#[error("`{node}` lists `{neighbor}` as a neighbor, but no such Node was declared")]
	UnknownNeighbor {
		/// the vertex whose neighbor list is broken
		node: String,
		/// the undeclared neighbor
		neighbor: String,
	},
	/// The same name was declared for more than one vertex
	#[error("Node `{0}` was declared more than once")]
	DuplicateNode(String),
}
