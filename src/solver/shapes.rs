use crate::expression::{Expression, ExpressionError, Operator};
use crate::solver::constants::EPSILON;

/// The five ways to parenthesize `a op1 b op2 c op3 d`.
///
/// Operators keep their textual positions in every shape; only the grouping
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `((a op1 b) op2 c) op3 d`
    LeftChain,
    /// `(a op1 (b op2 c)) op3 d`
    LeftNested,
    /// `a op1 ((b op2 c) op3 d)`
    RightNested,
    /// `a op1 (b op2 (c op3 d))`
    RightChain,
    /// `(a op1 b) op2 (c op3 d)`
    Balanced,
}

impl Shape {
    /// Shapes in the order they are tried for each operand ordering.
    pub const ALL: [Shape; 5] = [
        Shape::LeftChain,
        Shape::LeftNested,
        Shape::RightNested,
        Shape::RightChain,
        Shape::Balanced,
    ];

    /// One-based position within [`Shape::ALL`].
    pub fn index(self) -> usize {
        match self {
            Shape::LeftChain => 1,
            Shape::LeftNested => 2,
            Shape::RightNested => 3,
            Shape::RightChain => 4,
            Shape::Balanced => 5,
        }
    }

    /// Build and evaluate this shape bottom-up.
    ///
    /// # Errors
    ///
    /// Fails as soon as any step divides by a near-zero value.
    pub fn build(
        self,
        operands: [f64; 4],
        ops: [Operator; 3],
    ) -> Result<Expression, ExpressionError> {
        let [a, b, c, d] = operands.map(Expression::Number);
        let [op1, op2, op3] = ops;

        match self {
            Shape::LeftChain => {
                let ab = Expression::combine(op1, a, b)?;
                let abc = Expression::combine(op2, ab, c)?;
                Expression::combine(op3, abc, d)
            }
            Shape::LeftNested => {
                let bc = Expression::combine(op2, b, c)?;
                let abc = Expression::combine(op1, a, bc)?;
                Expression::combine(op3, abc, d)
            }
            Shape::RightNested => {
                let bc = Expression::combine(op2, b, c)?;
                let bcd = Expression::combine(op3, bc, d)?;
                Expression::combine(op1, a, bcd)
            }
            Shape::RightChain => {
                let cd = Expression::combine(op3, c, d)?;
                let bcd = Expression::combine(op2, b, cd)?;
                Expression::combine(op1, a, bcd)
            }
            Shape::Balanced => {
                let ab = Expression::combine(op1, a, b)?;
                let cd = Expression::combine(op3, c, d)?;
                Expression::combine(op2, ab, cd)
            }
        }
    }
}

/// A tree that evaluated to the target, tagged with the shape that built it
#[derive(Debug, Clone)]
pub struct Candidate {
    pub shape: Shape,
    pub expression: Expression,
}

pub fn is_on_target(value: f64, target: f64) -> bool {
    (value - target).abs() < EPSILON
}

/// Try all five shapes for one operand ordering and operator triple, in
/// [`Shape::ALL`] order. Shapes that fail to evaluate or miss the target are
/// skipped.
pub fn find_candidates(operands: [f64; 4], ops: [Operator; 3], target: f64) -> Vec<Candidate> {
    Shape::ALL
        .iter()
        .filter_map(|&shape| {
            let expression = shape.build(operands, ops).ok()?;
            is_on_target(expression.value(), target).then_some(Candidate { shape, expression })
        })
        .collect()
}
