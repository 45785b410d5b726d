/*!
Conversion of [expressions](Expression) to conjunctive normal form.

Conversion is a sequence of four rewrites, each of which builds a fresh tree:
1. [Biconditionals are eliminated](rewrite::eliminate_iff).
2. [Implications are eliminated](rewrite::eliminate_implies).
3. [Negation is pushed inward](nnf::push_negation), to negation normal form.
4. [Disjunction is distributed](distribute) over conjunction, after chains of disjunctions are [flattened](distribute::flatten).

```rust
# use otter_res::cnf::to_cnf;
# use otter_res::structures::expression::Expression;
let expression: Expression = "-(A AND B)".parse().expect("a formula");
let cnf = to_cnf(&expression);
assert_eq!(cnf.len(), 1);
assert_eq!(cnf[0].to_string(), "-A OR -B");
```

Each rewrite is structural recursion on a tree which does not grow (the first three rewrites) or whose nesting of disjunctions shrinks (distribution), and so conversion always terminates.
Though, distribution may yield exponentially many clauses.
*/

pub mod distribute;
pub mod nnf;
pub mod rewrite;

use crate::{
    misc::log::targets,
    structures::{clause::Clause, expression::Expression},
};

/// A formula in conjunctive normal form, as a sequence of clauses interpreted as their conjunction.
pub type Cnf = Vec<Clause>;

/// The clauses of `expression`, in order.
///
/// Literals within a clause are collapsed to a set, though clauses which are tautologies are kept.
pub fn to_cnf(expression: &Expression) -> Cnf {
    let without_iff = rewrite::eliminate_iff(expression);
    let without_implies = rewrite::eliminate_implies(&without_iff);
    let nnf = nnf::push_negation(&without_implies);
    log::trace!(target: targets::CNF, "NNF of {expression}: {nnf}");

    let tree = distribute::flatten((&nnf).into());
    let cnf = distribute::distribute(tree)
        .into_iter()
        .map(Clause::from_literals)
        .collect::<Cnf>();

    log::debug!(target: targets::CNF, "CNF of {expression}: {} clauses", cnf.len());
    cnf
}

impl Expression {
    /// The clauses of the expression, see [to_cnf].
    pub fn cnf(&self) -> Cnf {
        to_cnf(self)
    }
}
