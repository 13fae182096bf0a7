use crate::{Cost, NodeID};

/// A directed, weighted connection between two Nodes of a [`Graph`](crate::Graph).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	start: NodeID,
	end: NodeID,
	cost: Cost,
}

impl Edge {
	pub(crate) fn new(start: NodeID, end: NodeID, cost: Cost) -> Edge {
		Edge { start, end, cost }
	}

	/// the Node this Edge leaves from
	pub fn start(&self) -> NodeID {
		self.start
	}

	/// the Node this Edge leads to
	pub fn end(&self) -> NodeID {
		self.end
	}

	/// the Cost of walking along this Edge
	pub fn cost(&self) -> Cost {
		self.cost
	}
}
