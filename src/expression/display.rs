use std::fmt;

use crate::expression::ast::Expression;

/// Renders the formula with every nested operation parenthesized, e.g.
/// `(1 + 3) * (2 + 4)` or `8 / (3 - (8 / 3))`. The root is left bare.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression, nested: bool) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Binary { op, left, right, .. } => {
                    if nested {
                        write!(f, "(")?;
                    }
                    fmt_expression(f, left, true)?;
                    write!(f, " {} ", op)?;
                    fmt_expression(f, right, true)?;
                    if nested {
                        write!(f, ")")?;
                    }
                    Ok(())
                }
            }
        }

        fmt_expression(f, self, false)
    }
}
