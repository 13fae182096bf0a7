use super::Edge;
use crate::Point;

use std::fmt;

/// A named point of a [`Graph`](crate::Graph).
///
/// Nodes are created by the Graph and never change afterwards. Two Nodes of the same Graph never
/// share a name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
	name: String,
	pos: Point,
	pub(crate) edges: Vec<Edge>,
}

impl Node {
	pub(crate) fn new(name: String, pos: Point) -> Node {
		Node {
			name,
			pos,
			edges: Vec::new(),
		}
	}

	/// the unique name of the Node
	pub fn name(&self) -> &str {
		&self.name
	}

	/// the coordinates of the Node
	pub fn pos(&self) -> Point {
		self.pos
	}

	/// the x coordinate of the Node
	pub fn x(&self) -> i32 {
		self.pos.0
	}

	/// the y coordinate of the Node
	pub fn y(&self) -> i32 {
		self.pos.1
	}
}

impl fmt::Display for Node {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "{}", self.name)
	}
}
