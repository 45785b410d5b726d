/*!
Resolution of a pair of clauses.

For each literal of one clause whose negation is in the other clause, the *candidate* is the clause of the remaining literals of both.
Each candidate is then:
1. Discarded, if a tautology.
2. [Simplified](Clause::simplify).

The order matters.
A candidate may contain a literal and its negation, other than the pair resolved on, and simplification would collapse such a candidate to the empty clause.
As tautologies are discarded first, simplification never meets such a candidate.

```rust
# use otter_res::procedures::resolve::pl_resolve;
# use otter_res::structures::clause::Clause;
let left: Clause = "A OR B".parse().expect("a clause");
let right: Clause = "-A OR C".parse().expect("a clause");
let resolution = pl_resolve(&left, &right);
assert_eq!(resolution.resolvents, vec!["B OR C".parse().expect("a clause")]);

let right: Clause = "-A OR -B".parse().expect("a clause");
let resolution = pl_resolve(&left, &right);
assert!(resolution.resolvents.is_empty());
assert_eq!(resolution.tautologies, 2);
```
*/

use crate::structures::{clause::Clause, literal::Literal};

/// The resolvents of a pair of clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Resolvents, ordered by the literal of the left clause resolved on.
    pub resolvents: Vec<Clause>,

    /// A count of candidates discarded as tautologies.
    pub tautologies: usize,
}

/// The candidate from resolving `left` and `right` on `literal` of `left`.
fn candidate(left: &Clause, right: &Clause, literal: &Literal) -> Clause {
    let negation = literal.negate();
    Clause::from_literals(
        left.literals()
            .filter(|l| *l != literal)
            .chain(right.literals().filter(|r| **r != negation))
            .copied(),
    )
}

/// Every candidate from resolving `left` and `right`, in the order of the literals of `left`.
pub fn candidates<'c>(left: &'c Clause, right: &'c Clause) -> impl Iterator<Item = Clause> + 'c {
    left.literals()
        .filter(move |literal| right.contains(&literal.negate()))
        .map(move |literal| candidate(left, right, literal))
}

/// Resolves `left` and `right` on each complementary pair of literals.
pub fn pl_resolve(left: &Clause, right: &Clause) -> Resolution {
    let mut resolution = Resolution::default();

    for candidate in candidates(left, right) {
        if candidate.is_tautology() {
            resolution.tautologies += 1;
            continue;
        }
        let resolvent = candidate.simplify();
        debug_assert!(resolvent == candidate);
        resolution.resolvents.push(resolvent);
    }

    resolution
}
