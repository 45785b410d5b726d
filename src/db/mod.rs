//! Databases for holding information relevant to a query.
//!
//! - [The knowledge base](crate::db::knowledge_base)
//!   + The clauses told to a context, in the order told.
//!     Clauses are never removed, and duplicates are kept.
//!
//! - [The clause set](crate::db::clause_set)
//!   + The clauses of a refutation, without duplicates, indexed by a [ClauseKey].
//!     Seeded from the knowledge base and the negation of a query, and extended by resolution.
//!
//! - [The derivation graph](crate::db::derivation)
//!   + A record of which clauses each clause was derived from, if any.

pub mod clause_set;
pub mod derivation;
pub mod knowledge_base;

/// The index of a clause in a [clause set](clause_set::ClauseSet), in order of addition.
pub type ClauseKey = usize;
