use super::{Graph, GraphOp, NodeId};
use crate::dtype::DType;
use crate::graph::shape::Expr;
use std::ops::{Add, Mul};

/// A temporary, lightweight handle to a node in the graph.
///
/// `NodeView` provides a convenient, chainable API for building the
/// computation graph. It holds a reference to the graph and the ID of the
/// node it represents.
///
/// # Examples
///
/// ```
/// use precision_fixtures::graph::Graph;
/// use precision_fixtures::dtype::DType;
///
/// let graph = Graph::new();
/// let a = graph.input(DType::F32, vec![4.into()]);
/// let b = graph.input(DType::F32, vec![4.into()]);
/// let c = a + b; // Creates a new node in the graph
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    pub id: NodeId,
    pub graph: &'a Graph,
}

impl<'a> NodeView<'a> {
    /// Returns the operation of the node.
    pub fn op(&self) -> GraphOp {
        self.graph.nodes.borrow()[self.id.0].op.clone()
    }

    /// Returns the source node IDs of the node.
    pub fn src(&self) -> Vec<NodeId> {
        self.graph.nodes.borrow()[self.id.0].src.clone()
    }

    /// Returns the element type of the node.
    pub fn dtype(&self) -> DType {
        self.graph.nodes.borrow()[self.id.0].dtype.clone()
    }

    /// Returns the symbolic shape of the node.
    pub fn shape(&self) -> Vec<Expr> {
        self.graph.nodes.borrow()[self.id.0].shape.clone()
    }

    /// Converts the element type of this node.
    pub fn cast(&self, dtype: DType) -> NodeView<'a> {
        let new_id = self.graph.cast(self.id, dtype);
        self.graph.get_view(new_id)
    }

    /// Marks this node as a graph output.
    pub fn as_output(&self) -> Self {
        self.graph.outputs.borrow_mut().push(self.id);
        *self
    }
}

impl<'a> Add for NodeView<'a> {
    type Output = NodeView<'a>;
    fn add(self, rhs: Self) -> Self::Output {
        let new_id = self.graph.add(self.id, rhs.id);
        self.graph.get_view(new_id)
    }
}

impl<'a> Mul for NodeView<'a> {
    type Output = NodeView<'a>;
    fn mul(self, rhs: Self) -> Self::Output {
        let new_id = self.graph.mul(self.id, rhs.id);
        self.graph.get_view(new_id)
    }
}
