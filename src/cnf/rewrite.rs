//! Elimination of biconditionals and implications.
//!
//! Each rewrite builds a fresh expression, bottom-up, and leaves every other operator in place with rewritten subexpressions.

use crate::structures::expression::Expression;

/// Rewrites every `A <=> B` to `(A => B) AND (B => A)`.
pub fn eliminate_iff(expression: &Expression) -> Expression {
    match expression {
        Expression::Symbol(_) => expression.clone(),
        Expression::Not(e) => eliminate_iff(e).not(),
        Expression::And(l, r) => eliminate_iff(l).and(eliminate_iff(r)),
        Expression::Or(l, r) => eliminate_iff(l).or(eliminate_iff(r)),
        Expression::Implies(l, r) => eliminate_iff(l).implies(eliminate_iff(r)),
        Expression::Iff(l, r) => {
            let l = eliminate_iff(l);
            let r = eliminate_iff(r);
            l.clone().implies(r.clone()).and(r.implies(l))
        }
    }
}

/// Rewrites every `A => B` to `-A OR B`.
pub fn eliminate_implies(expression: &Expression) -> Expression {
    match expression {
        Expression::Symbol(_) => expression.clone(),
        Expression::Not(e) => eliminate_implies(e).not(),
        Expression::And(l, r) => eliminate_implies(l).and(eliminate_implies(r)),
        Expression::Or(l, r) => eliminate_implies(l).or(eliminate_implies(r)),
        Expression::Implies(l, r) => eliminate_implies(l).not().or(eliminate_implies(r)),
        Expression::Iff(l, r) => eliminate_implies(l).iff(eliminate_implies(r)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Expression {
        input.parse().unwrap()
    }

    #[test]
    fn iff() {
        assert_eq!(
            eliminate_iff(&parse("A <=> B")),
            parse("(A => B) AND (B => A)")
        );
        assert_eq!(
            eliminate_iff(&parse("-(A <=> (B <=> C))")),
            parse("-((A => ((B => C) AND (C => B))) AND (((B => C) AND (C => B)) => A))")
        );
    }

    #[test]
    fn implies() {
        assert_eq!(eliminate_implies(&parse("A => B")), parse("-A OR B"));
        assert_eq!(
            eliminate_implies(&parse("(A => B) => C")),
            parse("-(-A OR B) OR C")
        );
        assert_eq!(eliminate_implies(&parse("A <=> B")), parse("A <=> B"));
    }
}
