//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a sorted vector of literals without duplicates.
//! As a consequence, two clauses are equal (and hash equally) exactly when they contain the same literals, regardless of the order in which the literals were given.
//!
//! ```rust
//! # use otter_res::structures::clause::Clause;
//! let clause: Clause = "A OR -B".parse().expect("a clause");
//! let same: Clause = "-B OR A OR A".parse().expect("a clause");
//!
//! assert_eq!(clause, same);
//! assert_eq!(clause.size(), 2);
//! assert_eq!(same.to_string(), "A OR -B");
//! ```
//!
//! - The empty clause is always false (never true), and is written `{}`.
//! - A clause containing some literal and its negation is always true, and is a *tautology*.

use crate::{
    structures::{literal::Literal, symbol::Symbol, valuation::Valuation},
    types::err,
};

/// The keyword joining the literals of a clause.
pub const DISJUNCTION: &str = "OR";

/// How the empty clause is written.
pub const EMPTY_CLAUSE: &str = "{}";

/// A set of literals, interpreted as their disjunction.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    /// Sorted, without duplicates.
    literals: Vec<Literal>,
}

impl Clause {
    /// The empty clause.
    pub fn empty() -> Self {
        Clause::default()
    }

    /// The clause of the given literals, with duplicates collapsed.
    pub fn from_literals(literals: impl IntoIterator<Item = Literal>) -> Self {
        let mut literals = literals.into_iter().collect::<Vec<_>>();
        literals.sort_unstable();
        literals.dedup();
        Clause { literals }
    }

    /// An iterator over all literals in the clause, in canonical order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// An iterator over the (distinct) symbols of the clause.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        let mut previous = None;
        self.literals.iter().filter_map(move |literal| {
            let symbol = literal.symbol();
            match previous.replace(symbol) == Some(symbol) {
                true => None,
                false => Some(symbol),
            }
        })
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.binary_search(literal).is_ok()
    }

    /// Whether the clause contains some literal and its negation.
    ///
    /// As literals of the same symbol are adjacent in the canonical order, it is enough to compare neighbours.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .windows(2)
            .any(|pair| pair[0].complements(&pair[1]))
    }

    /// The clause with every literal negated.
    pub fn negate_all(&self) -> Clause {
        Clause::from_literals(self.literals.iter().map(|literal| literal.negate()))
    }

    /// The clause rebuilt by set union of its literals.
    ///
    /// If some literal is met after its negation has been collected the result is the empty clause.
    /// This conflates a tautology with a contradiction, so resolution removes tautologies before simplification and never reaches that case.
    pub fn simplify(&self) -> Clause {
        let mut collected: Vec<Literal> = Vec::with_capacity(self.literals.len());
        for literal in &self.literals {
            if collected.contains(&literal.negate()) {
                log::warn!(target: crate::misc::log::targets::RESOLUTION, "Simplified {self} to the empty clause");
                return Clause::empty();
            }
            if !collected.contains(literal) {
                collected.push(*literal);
            }
        }
        Clause::from_literals(collected)
    }

    /// The value of the clause on a valuation.
    /// In detail, returns:
    /// - Some(true), if some literal is true on the valuation.
    /// - Some(false), if every literal is false on the valuation.
    /// - None, otherwise.
    pub fn value_on(&self, valuation: &impl Valuation) -> Option<bool> {
        let mut value = Some(false);
        for literal in &self.literals {
            match literal.value_on(valuation) {
                Some(true) => return Some(true),
                Some(false) => {}
                None => value = None,
            }
        }
        value
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Clause {
            literals: vec![literal],
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "{EMPTY_CLAUSE}");
        }
        let mut literals = self.literals.iter();
        if let Some(first) = literals.next() {
            write!(f, "{first}")?;
        }
        for literal in literals {
            write!(f, " {DISJUNCTION} {literal}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Clause {
    type Err = err::ClauseError;

    /// Reads a clause written as literals joined by `OR`, e.g. `A OR -B OR C`.
    ///
    /// The empty clause may be written `{}`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == EMPTY_CLAUSE {
            return Ok(Clause::empty());
        }

        let mut literals = Vec::default();
        let mut expect_literal = true;
        for token in s.split_whitespace() {
            match (expect_literal, token) {
                (true, DISJUNCTION) => return Err(err::ClauseError::Empty),
                (true, literal) => {
                    literals.push(literal.parse()?);
                    expect_literal = false;
                }
                (false, DISJUNCTION) => expect_literal = true,
                (false, unexpected) => return Err(err::ClauseError::Literal(unexpected.to_string())),
            }
        }

        match expect_literal {
            true => Err(err::ClauseError::Empty),
            false => Ok(Clause::from_literals(literals)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(s: &str) -> Clause {
        s.parse().unwrap()
    }

    #[test]
    fn equality_ignores_order() {
        assert_eq!(clause("A OR -B"), clause("-B OR A"));
        assert_ne!(clause("A OR -B"), clause("A OR B"));

        let mut seen = std::collections::HashSet::new();
        seen.insert(clause("C OR -B OR A"));
        assert!(seen.contains(&clause("A OR C OR -B")));
    }

    #[test]
    fn duplicates_collapse() {
        let clause = clause("A OR A OR -A");
        assert_eq!(clause.size(), 2);
        assert_eq!(clause.to_string(), "A OR -A");
    }

    #[test]
    fn tautology() {
        assert!(clause("B OR A OR -B").is_tautology());
        assert!(!clause("A OR -B").is_tautology());
        assert!(!Clause::empty().is_tautology());
    }

    #[test]
    fn simplify_collapses_tautology() {
        assert_eq!(clause("A OR B OR B").simplify(), clause("A OR B"));
        assert_eq!(clause("A OR -A OR B").simplify(), Clause::empty());
    }

    #[test]
    fn negate_all() {
        assert_eq!(clause("A OR -B").negate_all(), clause("-A OR B"));
    }

    #[test]
    fn symbols() {
        let symbols = clause("C OR A OR -A").symbols().collect::<Vec<_>>();
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].as_char(), 'A');
        assert_eq!(symbols[1].as_char(), 'C');
    }

    #[test]
    fn from_str() {
        assert_eq!(clause("{}"), Clause::empty());
        assert_eq!(Clause::empty().to_string(), "{}");
        assert_eq!("".parse::<Clause>(), Err(err::ClauseError::Empty));
        assert_eq!("A OR".parse::<Clause>(), Err(err::ClauseError::Empty));
        assert_eq!("OR A".parse::<Clause>(), Err(err::ClauseError::Empty));
        assert_eq!(
            "A B".parse::<Clause>(),
            Err(err::ClauseError::Literal("B".to_string()))
        );
        assert_eq!("A OR 1".parse::<Clause>(), Err(err::ClauseError::Symbol('1')));
    }
}
