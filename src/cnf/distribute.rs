//! Distribution of disjunction over conjunction.
//!
//! The expression is first read as a tree whose leaves are clauses:
//! - Each literal is a unit clause.
//! - Disjunctions of leaves are merged into a single leaf, to a fixpoint, so that a chain of disjunctions is one clause rather than a deep tree.
//!
//! Then, `X OR (Y AND Z)` is rewritten to `(X OR Y) AND (X OR Z)` (and likewise with the conjunction on the left) until no conjunction is beneath any disjunction.
//! The leaves of the result, read from left to right, are the clauses of the formula.
//!
//! Note, distribution may lead to a count of clauses exponential in the size of the expression, e.g. for `(A AND B) OR (C AND D) OR …`.

use crate::{cnf::nnf::Nnf, structures::literal::Literal};

/// A tree of conjunctions and disjunctions whose leaves are (uncanonical) clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClauseTree {
    Leaf(Vec<Literal>),
    And(Box<ClauseTree>, Box<ClauseTree>),
    Or(Box<ClauseTree>, Box<ClauseTree>),
}

impl From<&Nnf> for ClauseTree {
    fn from(nnf: &Nnf) -> Self {
        match nnf {
            Nnf::Literal(literal) => ClauseTree::Leaf(vec![*literal]),
            Nnf::And(l, r) => ClauseTree::And(Box::new(l.as_ref().into()), Box::new(r.as_ref().into())),
            Nnf::Or(l, r) => ClauseTree::Or(Box::new(l.as_ref().into()), Box::new(r.as_ref().into())),
        }
    }
}

/// Merges every disjunction of two leaves into a single leaf.
///
/// As subtrees are flattened before their parent, a single pass reaches the fixpoint.
pub fn flatten(tree: ClauseTree) -> ClauseTree {
    match tree {
        ClauseTree::Leaf(_) => tree,

        ClauseTree::And(l, r) => ClauseTree::And(Box::new(flatten(*l)), Box::new(flatten(*r))),

        ClauseTree::Or(l, r) => match (flatten(*l), flatten(*r)) {
            (ClauseTree::Leaf(mut left), ClauseTree::Leaf(right)) => {
                left.extend(right);
                ClauseTree::Leaf(left)
            }
            (l, r) => ClauseTree::Or(Box::new(l), Box::new(r)),
        },
    }
}

/// Distributes disjunction over conjunction, returning the leaves of the result from left to right.
///
/// A conjunction contributes the clauses of each side in turn.
/// A disjunction contributes, for each clause `x` of the left and each clause `y` of the right, the clause `x OR y`.
pub fn distribute(tree: ClauseTree) -> Vec<Vec<Literal>> {
    match tree {
        ClauseTree::Leaf(clause) => vec![clause],

        ClauseTree::And(l, r) => {
            let mut clauses = distribute(*l);
            clauses.extend(distribute(*r));
            clauses
        }

        ClauseTree::Or(l, r) => {
            let left = distribute(*l);
            let right = distribute(*r);

            let mut clauses = Vec::with_capacity(left.len() * right.len());
            for x in &left {
                for y in &right {
                    let mut clause = Vec::with_capacity(x.len() + y.len());
                    clause.extend_from_slice(x);
                    clause.extend_from_slice(y);
                    clauses.push(clause);
                }
            }
            clauses
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cnf::nnf::push_negation;

    fn tree(input: &str) -> ClauseTree {
        (&push_negation(&input.parse().unwrap())).into()
    }

    fn leaf_sizes(tree: &ClauseTree) -> Vec<usize> {
        match tree {
            ClauseTree::Leaf(clause) => vec![clause.len()],
            ClauseTree::And(l, r) | ClauseTree::Or(l, r) => {
                let mut sizes = leaf_sizes(l);
                sizes.extend(leaf_sizes(r));
                sizes
            }
        }
    }

    #[test]
    fn flatten_chain() {
        let flat = flatten(tree("A OR (B OR (C OR D))"));
        assert_eq!(leaf_sizes(&flat), vec![4]);
        assert!(matches!(flat, ClauseTree::Leaf(_)));
    }

    #[test]
    fn flatten_stops_at_conjunction() {
        let flat = flatten(tree("(A OR B) OR (C AND (D OR E OR F))"));
        assert_eq!(leaf_sizes(&flat), vec![2, 1, 3]);
    }

    #[test]
    fn distribute_over_conjunction() {
        let clauses = distribute(flatten(tree("A OR (B AND C)")));
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].len(), 2);
        assert_eq!(clauses[1].len(), 2);

        let clauses = distribute(flatten(tree("(A AND B) OR (C AND D)")));
        assert_eq!(clauses.len(), 4);
    }

    #[test]
    fn flattened_chain_is_not_split() {
        let clauses = distribute(flatten(tree("(A OR B OR C) OR (D AND E)")));
        assert_eq!(clauses.len(), 2);
        assert!(clauses.iter().all(|clause| clause.len() == 4));
    }
}
