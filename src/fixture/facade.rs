use crate::{
    dtype::DType,
    error::FixtureError,
    fixture::{
        assembler::assemble,
        casts::{ActualCasts, CastPlan, ExpectedCasts},
    },
    graph::{Expr, Graph},
};

/// Builds the original and reference graphs for one propagation test case.
///
/// The configuration is validated once at construction and is immutable
/// afterwards. Each retrieval call assembles a fresh graph; two calls share
/// no nodes. The lowered variant is intentionally not implemented and always
/// fails, see [`PrecisionPropagationAddFixture::lowered`].
#[derive(Debug, Clone)]
pub struct PrecisionPropagationAddFixture {
    input_shapes: Vec<Vec<Expr>>,
    precision1: DType,
    precision2: DType,
    constant_precision: DType,
    actual: ActualCasts,
    expected: ExpectedCasts,
}

impl PrecisionPropagationAddFixture {
    /// Creates a fixture from the test-case parameters.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InputShapeCount`] unless exactly two input
    /// shapes are supplied.
    pub fn new(
        input_shapes: Vec<Vec<Expr>>,
        precision1: DType,
        precision2: DType,
        constant_precision: DType,
        actual: ActualCasts,
        expected: ExpectedCasts,
    ) -> Result<Self, FixtureError> {
        if input_shapes.len() != 2 {
            return Err(FixtureError::InputShapeCount {
                expected: 2,
                actual: input_shapes.len(),
            });
        }
        Ok(Self {
            input_shapes,
            precision1,
            precision2,
            constant_precision,
            actual,
            expected,
        })
    }

    /// Assembles the original (pre-transformation) graph.
    pub fn original(&self) -> Graph {
        self.build(CastPlan::from(&self.actual))
    }

    /// Assembles the reference (expected post-transformation) graph.
    pub fn reference(&self) -> Graph {
        self.build(CastPlan::from(&self.expected))
    }

    /// The lowered variant is not implemented.
    ///
    /// Always returns [`FixtureError::Unsupported`]; it never produces a
    /// partial graph.
    pub fn lowered(&self) -> Result<Graph, FixtureError> {
        Err(FixtureError::Unsupported("lowered"))
    }

    fn build(&self, plan: CastPlan) -> Graph {
        assemble(
            &self.precision1,
            &self.input_shapes[0],
            &self.precision2,
            &self.input_shapes[1],
            &self.constant_precision,
            &plan,
        )
    }
}
