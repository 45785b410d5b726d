//! The knowledge base, an append-only sequence of clauses.
//!
//! ```rust
//! # use otter_res::db::knowledge_base::KnowledgeBase;
//! let mut kb = KnowledgeBase::default();
//! assert!(kb.tell_string("A OR -B").is_ok());
//! assert!(kb.tell_string("-B OR A").is_ok());
//! assert!(kb.tell_string("A OR b").is_err());
//!
//! assert_eq!(kb.len(), 2);
//! ```
//!
//! The knowledge base has no part in resolution beyond supplying clauses.
//! In particular, duplicate clauses are kept, as a refutation collapses duplicates when seeded.

use crate::{misc::log::targets, structures::clause::Clause, types::err};

#[derive(Clone, Debug, Default)]
pub struct KnowledgeBase {
    clauses: Vec<Clause>,
}

impl KnowledgeBase {
    /// Appends `clause` to the knowledge base.
    pub fn tell(&mut self, clause: Clause) {
        log::trace!(target: targets::KNOWLEDGE_BASE, "Told: {clause}");
        self.clauses.push(clause);
    }

    /// Reads `string` as a clause and appends the clause to the knowledge base.
    ///
    /// Nothing is added if `string` is not a clause.
    pub fn tell_string(&mut self, string: &str) -> Result<(), err::ClauseError> {
        let clause = string.parse::<Clause>()?;
        self.tell(clause);
        Ok(())
    }

    /// The clauses of the knowledge base, in the order told.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
