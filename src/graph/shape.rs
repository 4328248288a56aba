//! Symbolic shape dimensions.
//!
//! A shape is a `Vec<Expr>`; each dimension is either a static constant or a
//! named symbolic variable. Shapes are passed through the graph unchanged,
//! except where two operands of a binary node are merged under numpy
//! broadcasting rules.

use std::fmt;

/// A single, possibly symbolic, shape dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Const(isize),
    Var(String),
}

impl Expr {
    pub fn var(name: &str) -> Self {
        Self::Var(name.to_string())
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Const(1))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(c) => write!(f, "{c}"),
            Expr::Var(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_expr_from {
    ($($num_type: ident),*) => {
        $(
            impl From<$num_type> for Expr {
                fn from(v: $num_type) -> Self {
                    Expr::Const(v as isize)
                }
            }
        )*
    };
}

impl_expr_from!(isize, i32, i64, usize);

/// Merges two shapes under numpy broadcasting rules.
///
/// Dimensions are aligned from the trailing end; a dimension of size 1
/// stretches to match the other side, and a missing leading dimension
/// behaves like size 1. Two symbolic dimensions are only compatible when
/// they are identical. Returns `None` when the shapes cannot be broadcast.
pub fn numpy_broadcast(lhs: &[Expr], rhs: &[Expr]) -> Option<Vec<Expr>> {
    let rank = lhs.len().max(rhs.len());
    let mut merged = Vec::with_capacity(rank);
    for i in 0..rank {
        let l = (i < lhs.len()).then(|| &lhs[lhs.len() - 1 - i]);
        let r = (i < rhs.len()).then(|| &rhs[rhs.len() - 1 - i]);
        let dim = match (l, r) {
            (Some(l), Some(r)) if l == r => l.clone(),
            (Some(l), Some(r)) if l.is_one() => r.clone(),
            (Some(l), Some(r)) if r.is_one() => l.clone(),
            (Some(_), Some(_)) => return None,
            (Some(d), None) | (None, Some(d)) => d.clone(),
            (None, None) => unreachable!(),
        };
        merged.push(dim);
    }
    merged.reverse();
    Some(merged)
}
