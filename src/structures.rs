//! Key structures, such as literals, clauses, and expressions.
//!
//! # Other structures without an implementation.
//!
//! ## Formulas in conjunctive normal form
//!
//! A formula in CNF is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//! These are represented as a [Cnf](crate::cnf::Cnf), and only built by [conversion](crate::cnf) from an [expression].
//!
//! ## Languages
//!
//! The language of every formula is (some subset of) the twenty-six [symbols](symbol) `A` through `Z`.

pub mod clause;
pub mod expression;
pub mod literal;
pub mod symbol;
pub mod valuation;
