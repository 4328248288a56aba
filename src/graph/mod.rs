//! An arena-based computation graph.
//!
//! The [`Graph`] owns every node; nodes are addressed by [`NodeId`] and
//! manipulated through the lightweight [`NodeView`] handle. Shapes are
//! symbolic ([`Expr`]), element types are [`DType`](crate::dtype::DType)
//! tags, and binary nodes carry their own output-type inference rule.

pub mod graph;
pub mod node;
pub mod op;
pub mod shape;
pub mod view;
pub mod visualization;

pub use graph::Graph;
pub use node::{NodeData, NodeId};
pub use op::{AutoBroadcast, BinaryOp, GraphOp, TypeInference};
pub use shape::{numpy_broadcast, Expr};
pub use view::NodeView;
