//! Precision-propagation graph fixtures.
//!
//! This crate builds small computation graphs used to verify that a
//! precision-propagation pass inserts element-type casts at the correct
//! points. It consists of:
//!
//! - **graph**: an arena-based computation graph with symbolic shapes,
//!   cast nodes, and binary nodes that carry their own output-type
//!   inference rule
//! - **dtype**: element types and constant literals
//! - **fixture**: cast placement tables, the deterministic graph assembler,
//!   and the [`PrecisionPropagationAddFixture`] facade consumed by test
//!   harnesses
//!
//! # Example
//!
//! ```
//! use precision_fixtures::prelude::*;
//!
//! let shape = vec![Expr::Const(2), Expr::Const(3)];
//! let fixture = PrecisionPropagationAddFixture::new(
//!     vec![shape.clone(), shape],
//!     DType::F32,
//!     DType::I8,
//!     DType::I8,
//!     ActualCasts::default(),
//!     ExpectedCasts {
//!         before_op2_first: Some(DType::I32),
//!         ..Default::default()
//!     },
//! )
//! .unwrap();
//!
//! let original = fixture.original();
//! let reference = fixture.reference();
//! assert_ne!(original, reference);
//! ```

pub mod dtype;
pub mod error;
pub mod fixture;
pub mod graph;

pub use dtype::{Const, DType};
pub use error::FixtureError;
pub use fixture::{ActualCasts, ExpectedCasts, PrecisionPropagationAddFixture};
pub use graph::{AutoBroadcast, BinaryOp, Expr, Graph, GraphOp, NodeId, NodeView, TypeInference};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::dtype::{Const, DType};
    pub use crate::error::FixtureError;
    pub use crate::fixture::{ActualCasts, ExpectedCasts, PrecisionPropagationAddFixture};
    pub use crate::graph::{
        AutoBroadcast, BinaryOp, Expr, Graph, GraphOp, NodeId, NodeView, TypeInference,
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_facade_compiles() {
        use super::prelude::*;
        let _ = Expr::Const(42);
        let _ = DType::F32;
    }
}
