//! Negation normal form.
//!
//! An expression is in negation normal form when negation applies only to symbols and the only other operators are conjunction and disjunction.
//! The [Nnf] type admits only such expressions, and so the leaves of an [Nnf] are literals.

use crate::structures::{expression::Expression, literal::Literal};

/// An expression in negation normal form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nnf {
    Literal(Literal),
    And(Box<Nnf>, Box<Nnf>),
    Or(Box<Nnf>, Box<Nnf>),
}

impl Nnf {
    fn and(self, other: Self) -> Self {
        Nnf::And(Box::new(self), Box::new(other))
    }

    fn or(self, other: Self) -> Self {
        Nnf::Or(Box::new(self), Box::new(other))
    }
}

/// Pushes negation inward until it applies only to symbols.
///
/// - `--A` is `A`.
/// - `-(A AND B)` is `-A OR -B`.
/// - `-(A OR B)` is `-A AND -B`.
///
/// The rewrite is applied with the count of enclosing negations in hand, so a chain of negations is settled before the subexpression beneath is read.
///
/// Implications and biconditionals are expected to have been eliminated, though any which remain are expanded here as in [eliminate_iff](super::rewrite::eliminate_iff) and [eliminate_implies](super::rewrite::eliminate_implies).
pub fn push_negation(expression: &Expression) -> Nnf {
    under_polarity(expression, true)
}

/// The negation normal form of `expression` if `polarity` is `true`, and otherwise of the negation of `expression`.
fn under_polarity(expression: &Expression, polarity: bool) -> Nnf {
    match expression {
        Expression::Symbol(symbol) => Nnf::Literal(Literal::new(*symbol, polarity)),

        Expression::Not(e) => under_polarity(e, !polarity),

        Expression::And(l, r) => match polarity {
            true => under_polarity(l, true).and(under_polarity(r, true)),
            false => under_polarity(l, false).or(under_polarity(r, false)),
        },

        Expression::Or(l, r) => match polarity {
            true => under_polarity(l, true).or(under_polarity(r, true)),
            false => under_polarity(l, false).and(under_polarity(r, false)),
        },

        Expression::Implies(l, r) => match polarity {
            true => under_polarity(l, false).or(under_polarity(r, true)),
            false => under_polarity(l, true).and(under_polarity(r, false)),
        },

        Expression::Iff(l, r) => match polarity {
            true => {
                let forward = under_polarity(l, false).or(under_polarity(r, true));
                let backward = under_polarity(r, false).or(under_polarity(l, true));
                forward.and(backward)
            }
            false => {
                let forward = under_polarity(l, true).and(under_polarity(r, false));
                let backward = under_polarity(r, true).and(under_polarity(l, false));
                forward.or(backward)
            }
        },
    }
}

impl std::fmt::Display for Nnf {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::And(l, r) => write!(f, "({l} AND {r})"),
            Self::Or(l, r) => write!(f, "({l} OR {r})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nnf(input: &str) -> String {
        push_negation(&input.parse().unwrap()).to_string()
    }

    #[test]
    fn double_negation() {
        assert_eq!(nnf("--A"), "A");
        assert_eq!(nnf("---A"), "-A");
    }

    #[test]
    fn de_morgan() {
        assert_eq!(nnf("-(A AND B)"), "(-A OR -B)");
        assert_eq!(nnf("-(A OR B)"), "(-A AND -B)");
        assert_eq!(nnf("-(A OR -(B AND -C))"), "(-A AND (B AND -C))");
    }

    #[test]
    fn remaining_implications() {
        assert_eq!(nnf("-(A => B)"), "(A AND -B)");
        assert_eq!(nnf("A <=> B"), "((-A OR B) AND (-B OR A))");
    }
}
