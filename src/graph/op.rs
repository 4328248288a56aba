use std::fmt;

use crate::dtype::{Const, DType};

/// The elementwise operation performed by a binary node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Mul,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "add"),
            BinaryOp::Mul => write!(f, "mul"),
        }
    }
}

/// The policy aligning two differently-shaped operands of a binary node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoBroadcast {
    /// Operand shapes must match exactly.
    None,
    /// Numpy rules: trailing-aligned, size-1 dimensions stretch.
    #[default]
    Numpy,
}

/// How a binary node derives its output element type from its operands.
///
/// The rule travels with the node, so graph rewrites that clone a node with
/// substituted inputs re-run the same inference instead of assuming the
/// standard one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeInference {
    /// The output element type follows the first operand; the output shape
    /// is the broadcast merge of both operand shapes.
    FirstInput,
    /// Low-precision accumulate rule: an `I8` operand on either side widens
    /// the output to `I32`, otherwise the first operand's type is kept. The
    /// output shape always follows the first operand, unmodified.
    Int8Accumulate,
}

impl TypeInference {
    /// Infers the output element type for the given operand types.
    pub fn output_dtype(&self, lhs: &DType, rhs: &DType) -> DType {
        match self {
            TypeInference::FirstInput => lhs.clone(),
            TypeInference::Int8Accumulate => {
                if *lhs == DType::I8 || *rhs == DType::I8 {
                    DType::I32
                } else {
                    lhs.clone()
                }
            }
        }
    }
}

/// An enumeration of all graph node operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphOp {
    /// An input value of the graph.
    Input,
    /// A tensor filled with a single constant value.
    Full(Const),
    /// Converts the element type of `src[0]` without changing its shape.
    Cast(DType),
    /// An elementwise binary operation with its broadcast policy and
    /// output-type inference rule.
    Binary(BinaryOp, AutoBroadcast, TypeInference),
}

impl GraphOp {
    /// Returns `true` if the operation is a graph input.
    pub fn is_input(&self) -> bool {
        matches!(self, GraphOp::Input)
    }

    /// Returns `true` if the operation is an element-type conversion.
    pub fn is_cast(&self) -> bool {
        matches!(self, GraphOp::Cast(_))
    }

    /// Returns `true` if the operation is a binary elementwise operation.
    pub fn is_binary(&self) -> bool {
        matches!(self, GraphOp::Binary(..))
    }
}
