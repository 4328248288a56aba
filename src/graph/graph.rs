use std::cell::RefCell;

use crate::{
    dtype::{Const, DType},
    graph::{
        node::{NodeData, NodeId},
        op::{AutoBroadcast, BinaryOp, GraphOp, TypeInference},
        shape::{numpy_broadcast, Expr},
        view::NodeView,
    },
};

/// Owns all the nodes of a computation graph.
///
/// The `Graph` uses interior mutability (`RefCell`) to allow nodes to be added
/// dynamically while maintaining immutable references to the graph itself.
/// Once assembly is finished the graph is treated as immutable; equality
/// compares the node arena and the input/output lists structurally.
#[derive(Default, Debug)]
pub struct Graph {
    /// A vector holding the data for all nodes in the graph.
    pub nodes: RefCell<Vec<NodeData>>,
    /// A list of node IDs that are considered inputs to the graph.
    pub inputs: RefCell<Vec<NodeId>>,
    /// A list of node IDs that are considered outputs of the graph.
    pub outputs: RefCell<Vec<NodeId>>,
}

impl Graph {
    /// Creates a new, empty computation graph.
    pub fn new() -> Self {
        Graph {
            nodes: RefCell::new(Vec::new()),
            inputs: RefCell::new(Vec::new()),
            outputs: RefCell::new(Vec::new()),
        }
    }

    /// Adds a new node to the graph. This is an internal method.
    pub fn add_node(
        &self,
        op: GraphOp,
        src: Vec<NodeId>,
        dtype: DType,
        shape: Vec<Expr>,
    ) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = nodes.len();
        nodes.push(NodeData {
            op,
            src,
            dtype,
            shape,
        });
        NodeId(id)
    }

    /// Adds a new input node to the graph.
    ///
    /// # Arguments
    ///
    /// * `dtype` - The element type of the input value.
    /// * `shape` - The symbolic shape of the input value.
    pub fn input(&self, dtype: DType, shape: Vec<Expr>) -> NodeView<'_> {
        let id = self.add_node(GraphOp::Input, vec![], dtype, shape);
        self.inputs.borrow_mut().push(id);
        self.get_view(id)
    }

    /// Creates a new value filled with a single constant.
    pub fn full<T: Into<Const>>(&self, value: T, shape: Vec<Expr>) -> NodeView<'_> {
        let constant: Const = value.into();
        let dtype = constant.dtype();
        let id = self.add_node(GraphOp::Full(constant), vec![], dtype, shape);
        self.get_view(id)
    }

    /// Gets a `NodeView` for a given `NodeId`.
    pub fn get_view(&self, id: NodeId) -> NodeView<'_> {
        NodeView { id, graph: self }
    }

    // --- Internal methods for creating operation nodes ---

    /// Converts the element type of `src` without changing its shape.
    pub fn cast(&self, src: NodeId, dtype: DType) -> NodeId {
        let shape = self.nodes.borrow()[src.0].shape.clone();
        self.add_node(GraphOp::Cast(dtype.clone()), vec![src], dtype, shape)
    }

    /// Standard elementwise addition with numpy broadcasting.
    pub fn add(&self, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.binary(
            BinaryOp::Add,
            lhs,
            rhs,
            AutoBroadcast::default(),
            TypeInference::FirstInput,
        )
    }

    /// Standard elementwise multiplication with numpy broadcasting.
    pub fn mul(&self, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.binary(
            BinaryOp::Mul,
            lhs,
            rhs,
            AutoBroadcast::default(),
            TypeInference::FirstInput,
        )
    }

    /// Creates a binary elementwise node with an explicit broadcast policy
    /// and output-type inference rule.
    ///
    /// Broadcast compatibility is always validated, even for rules whose
    /// output shape ignores the merge result.
    ///
    /// # Panics
    ///
    /// Panics if the operand shapes are incompatible under `auto_broadcast`.
    pub fn binary(
        &self,
        op: BinaryOp,
        lhs: NodeId,
        rhs: NodeId,
        auto_broadcast: AutoBroadcast,
        inference: TypeInference,
    ) -> NodeId {
        let (lhs_dtype, rhs_dtype, lhs_shape, rhs_shape) = {
            let nodes = self.nodes.borrow();
            let lhs_node = &nodes[lhs.0];
            let rhs_node = &nodes[rhs.0];
            (
                lhs_node.dtype.clone(),
                rhs_node.dtype.clone(),
                lhs_node.shape.clone(),
                rhs_node.shape.clone(),
            )
        };
        let merged = match auto_broadcast {
            AutoBroadcast::None => {
                if lhs_shape != rhs_shape {
                    panic!("Shape mismatch in {op}: {lhs_shape:?} vs {rhs_shape:?}");
                }
                lhs_shape.clone()
            }
            AutoBroadcast::Numpy => numpy_broadcast(&lhs_shape, &rhs_shape).unwrap_or_else(|| {
                panic!("Broadcast mismatch in {op}: {lhs_shape:?} vs {rhs_shape:?}")
            }),
        };
        let dtype = inference.output_dtype(&lhs_dtype, &rhs_dtype);
        let shape = match inference {
            TypeInference::FirstInput => merged,
            TypeInference::Int8Accumulate => lhs_shape,
        };
        self.add_node(
            GraphOp::Binary(op, auto_broadcast, inference),
            vec![lhs, rhs],
            dtype,
            shape,
        )
    }

    /// Produces a new node of the same kind bound to replacement inputs.
    ///
    /// The node's signature (element type and shape) is re-inferred from the
    /// new inputs, so a binary node re-runs its own `TypeInference` rule. A
    /// cloned `Input` is registered as a graph input like any other.
    ///
    /// # Panics
    ///
    /// Panics if `new_src` does not match the node's arity.
    pub fn clone_with_new_inputs(&self, id: NodeId, new_src: &[NodeId]) -> NodeId {
        let (op, arity) = {
            let nodes = self.nodes.borrow();
            let node = &nodes[id.0];
            (node.op.clone(), node.src.len())
        };
        assert_eq!(
            new_src.len(),
            arity,
            "clone_with_new_inputs arity mismatch for {op:?}: expected {arity}, got {}",
            new_src.len()
        );
        match op {
            GraphOp::Input => {
                let (dtype, shape) = {
                    let nodes = self.nodes.borrow();
                    (nodes[id.0].dtype.clone(), nodes[id.0].shape.clone())
                };
                self.input(dtype, shape).id
            }
            GraphOp::Full(constant) => {
                let shape = self.nodes.borrow()[id.0].shape.clone();
                self.full(constant, shape).id
            }
            GraphOp::Cast(dtype) => self.cast(new_src[0], dtype),
            GraphOp::Binary(op, auto_broadcast, inference) => {
                self.binary(op, new_src[0], new_src[1], auto_broadcast, inference)
            }
        }
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        *self.nodes.borrow() == *other.nodes.borrow()
            && *self.inputs.borrow() == *other.inputs.borrow()
            && *self.outputs.borrow() == *other.outputs.borrow()
    }
}

impl Clone for Graph {
    fn clone(&self) -> Self {
        Graph {
            nodes: RefCell::new(self.nodes.borrow().clone()),
            inputs: RefCell::new(self.inputs.borrow().clone()),
            outputs: RefCell::new(self.outputs.borrow().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_keeps_shape() {
        let graph = Graph::new();
        let x = graph.input(DType::F32, vec![2.into(), 3.into()]);
        let y = graph.cast(x.id, DType::I32);
        let view = graph.get_view(y);
        assert_eq!(view.dtype(), DType::I32);
        assert_eq!(view.shape(), vec![2.into(), 3.into()]);
        assert_eq!(view.src(), vec![x.id]);
    }

    #[test]
    fn test_add_follows_first_input() {
        let graph = Graph::new();
        let a = graph.input(DType::F32, vec![2.into(), 3.into()]);
        let b = graph.input(DType::F32, vec![1.into(), 3.into()]);
        let c = graph.add(a.id, b.id);
        let view = graph.get_view(c);
        assert_eq!(view.dtype(), DType::F32);
        assert_eq!(view.shape(), vec![2.into(), 3.into()]);
    }

    #[test]
    fn test_int8_accumulate_shape_follows_first_input() {
        let graph = Graph::new();
        let a = graph.input(DType::I8, vec![2.into(), 3.into()]);
        let b = graph.full(1i8, vec![1.into()]);
        let c = graph.binary(
            BinaryOp::Add,
            a.id,
            b.id,
            AutoBroadcast::Numpy,
            TypeInference::Int8Accumulate,
        );
        let view = graph.get_view(c);
        assert_eq!(view.dtype(), DType::I32);
        assert_eq!(view.shape(), vec![2.into(), 3.into()]);
    }

    #[test]
    #[should_panic(expected = "Broadcast mismatch")]
    fn test_incompatible_broadcast_panics() {
        let graph = Graph::new();
        let a = graph.input(DType::F32, vec![2.into()]);
        let b = graph.input(DType::F32, vec![3.into()]);
        graph.add(a.id, b.id);
    }

    #[test]
    #[should_panic(expected = "Shape mismatch")]
    fn test_no_broadcast_requires_equal_shapes() {
        let graph = Graph::new();
        let a = graph.input(DType::F32, vec![2.into(), 1.into()]);
        let b = graph.input(DType::F32, vec![2.into(), 3.into()]);
        graph.binary(
            BinaryOp::Add,
            a.id,
            b.id,
            AutoBroadcast::None,
            TypeInference::FirstInput,
        );
    }

    #[test]
    fn test_clone_with_new_inputs_reinfers() {
        let graph = Graph::new();
        let a = graph.input(DType::F32, vec![4.into()]);
        let b = graph.input(DType::F32, vec![4.into()]);
        let op = graph.binary(
            BinaryOp::Add,
            a.id,
            b.id,
            AutoBroadcast::Numpy,
            TypeInference::Int8Accumulate,
        );
        assert_eq!(graph.get_view(op).dtype(), DType::F32);

        // rebinding to an i8 operand must flip the inferred type to i32
        let c = graph.input(DType::I8, vec![4.into()]);
        let cloned = graph.clone_with_new_inputs(op, &[a.id, c.id]);
        let view = graph.get_view(cloned);
        assert_eq!(view.dtype(), DType::I32);
        assert_eq!(view.src(), vec![a.id, c.id]);
        assert_eq!(
            view.op(),
            GraphOp::Binary(
                BinaryOp::Add,
                AutoBroadcast::Numpy,
                TypeInference::Int8Accumulate
            )
        );
    }

    #[test]
    #[should_panic(expected = "arity mismatch")]
    fn test_clone_with_wrong_arity_panics() {
        let graph = Graph::new();
        let a = graph.input(DType::F32, vec![4.into()]);
        let b = graph.input(DType::F32, vec![4.into()]);
        let op = graph.add(a.id, b.id);
        graph.clone_with_new_inputs(op, &[a.id]);
    }
}
