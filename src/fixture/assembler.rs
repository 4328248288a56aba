//! Deterministic assembly of the fixture graph.
//!
//! The topology is fixed: two inputs feed a standard addition (op1), whose
//! output is combined with a rank-1 constant by an addition carrying the
//! [`TypeInference::Int8Accumulate`] rule (op2). Casts are inserted at the
//! positions named by the [`CastPlan`]. Identical parameters always produce
//! identical arenas; there is no randomness and no global state.

use log::{debug, trace};

use crate::{
    dtype::{Const, DType},
    fixture::casts::CastPlan,
    graph::{AutoBroadcast, BinaryOp, Expr, Graph, NodeId, TypeInference},
};

/// Builds one fixture graph for the given precisions, shapes, and plan.
pub(crate) fn assemble(
    precision1: &DType,
    shape1: &[Expr],
    precision2: &DType,
    shape2: &[Expr],
    constant_precision: &DType,
    plan: &CastPlan,
) -> Graph {
    let graph = Graph::new();
    let cast_if = |src: NodeId, target: &Option<DType>| -> NodeId {
        match target {
            Some(dtype) => {
                trace!("inserting cast to {dtype} after node {}", src.0);
                graph.cast(src, dtype.clone())
            }
            None => src,
        }
    };

    let input1 = graph.input(precision1.clone(), shape1.to_vec()).id;
    let input2 = graph.input(precision2.clone(), shape2.to_vec()).id;

    let lhs = cast_if(input1, &plan.before_op1.0);
    let rhs = cast_if(input2, &plan.before_op1.1);
    let op1 = graph.add(lhs, rhs);

    let constant = graph
        .full(Const::one(constant_precision), vec![Expr::Const(1)])
        .id;

    let mut parent = cast_if(op1, &plan.before_op2_first);
    parent = cast_if(parent, &plan.before_op2_second.0);
    let constant = cast_if(constant, &plan.before_op2_second.1);

    let op2 = graph.binary(
        BinaryOp::Add,
        parent,
        constant,
        AutoBroadcast::Numpy,
        TypeInference::Int8Accumulate,
    );

    let result = cast_if(op2, &plan.after_op2);
    graph.get_view(result).as_output();

    debug!(
        "assembled fixture graph: {} nodes, output dtype {}",
        graph.nodes.borrow().len(),
        graph.get_view(result).dtype()
    );
    graph
}
