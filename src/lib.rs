#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find Paths through small weighted, directed Graphs.
//!
//! ## Introduction
//! A [`Graph`] is a set of named Nodes, each placed at integer coordinates, connected by
//! directed Edges with a non-negative Cost. The Graph is described once through a
//! [`GraphSpec`] and never changes afterwards, so any number of searches can be run against it.
//!
//! Three searches are provided, all sharing the same way of turning the explored Graph back into
//! a Path:
//! - [`breadth_first_search`] finds the Path with the fewest Edges, ignoring their Costs
//! - [`uniform_cost_search`] (Dijkstra) finds the cheapest Path
//! - [`a_star_search`] finds a Path guided by the Manhattan distance to the goal, which is the
//!   cheapest Path as long as no Edge is cheaper than the distance between its Nodes
//!
//! An unreachable goal is a regular outcome and reported as `None`. Asking the Graph for a Node or
//! Edge that does not exist is an error ([`LookupError`]).
//!
//! ## Examples
//! Creating the Graph:
//! ```
//! use graph_pathfinding::GraphSpec;
//!
//! // g - h - i
//! //         |
//! // d - e - f
//! // |       |
//! // a - b - c
//! let graph = GraphSpec::new()
//!     .vertex("a", (0, 2), [("b", 1)])
//!     .vertex("b", (1, 2), [("e", 2)])
//!     .vertex("c", (2, 2), [("f", 1)])
//!     .vertex("d", (0, 1), [("b", 1), ("f", 15), ("g", 2)])
//!     .vertex("e", (1, 1), [("d", 1)])
//!     .vertex("f", (2, 1), [("e", 1), ("c", 3)])
//!     .vertex("g", (0, 0), [("h", 1)])
//!     .vertex("h", (1, 0), [("i", 1)])
//!     .vertex("i", (2, 0), [("f", 1), ("c", 2), ("e", 7)])
//!     .build()
//!     .expect("every neighbor is declared");
//!
//! assert_eq!(graph.len(), 9);
//! assert_eq!(graph.edge("d", "f").unwrap().cost(), 15);
//! ```
//!
//! ### Pathfinding
//! ```
//! # use graph_pathfinding::GraphSpec;
//! use graph_pathfinding::{a_star_search, breadth_first_search, uniform_cost_search};
//! #
//! # let graph = GraphSpec::new()
//! #     .vertex("a", (0, 2), [("b", 1)])
//! #     .vertex("b", (1, 2), [("e", 2)])
//! #     .vertex("c", (2, 2), [("f", 1)])
//! #     .vertex("d", (0, 1), [("b", 1), ("f", 15), ("g", 2)])
//! #     .vertex("e", (1, 1), [("d", 1)])
//! #     .vertex("f", (2, 1), [("e", 1), ("c", 3)])
//! #     .vertex("g", (0, 0), [("h", 1)])
//! #     .vertex("h", (1, 0), [("i", 1)])
//! #     .vertex("i", (2, 0), [("f", 1), ("c", 2), ("e", 7)])
//! #     .build()
//! #     .unwrap();
//!
//! let start = graph.node_id("b").unwrap();
//! let goal = graph.node_id("f").unwrap();
//!
//! // the fewest Edges
//! let path = breadth_first_search(&graph, start, goal).unwrap();
//! assert_eq!(graph.names(&path), vec!["b", "e", "d", "f"]);
//!
//! // the lowest Cost
//! let path = uniform_cost_search(&graph, start, goal).unwrap();
//! assert_eq!(graph.names(&path), vec!["b", "e", "d", "g", "h", "i", "f"]);
//! assert_eq!(path.cost(), 8);
//!
//! let path = a_star_search(&graph, start, goal).unwrap();
//! assert_eq!(path.cost(), 8);
//!
//! // nothing leads back to `a`
//! let a = graph.node_id("a").unwrap();
//! assert_eq!(uniform_cost_search(&graph, start, a), None);
//! ```
//!
//! ### Loading a Graph
//! With the `serde` feature enabled, [`GraphSpec`] can be deserialized, for example from JSON:
//! ```json
//! {
//!     "vertices": [
//!         { "name": "a", "coords": [0, 2], "neighbors": [["b", 1]] },
//!         { "name": "b", "coords": [1, 2] }
//!     ]
//! }
//! ```

/// A shorthand for the coordinates of a Node
pub type Point = (i32, i32);

pub mod node_id;
pub use self::node_id::NodeID;

mod error;
pub use self::error::{BuildError, LookupError};

mod graph;
pub use self::graph::{Edge, Graph, GraphSpec, Node, VertexSpec};

pub mod frontier;

pub mod path;
pub use self::path::{Cost, Path};

mod search;
pub use self::search::{a_star_search, breadth_first_search, heuristic, uniform_cost_search};

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		a_star_search, breadth_first_search, uniform_cost_search, Graph, GraphSpec, NodeID,
		Path, VertexSpec,
	};
}
