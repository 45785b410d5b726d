//! The clause set of a refutation.
//!
//! A clause set is a sequence of clauses without duplicates, where each clause is indexed by the [key](ClauseKey) given on insertion.
//! Membership is by equality of clauses, and so is insensitive to the order of literals.
//!
//! The clause set also tracks a *frontier*, the clauses inserted since the frontier was last advanced.
//! Any pair of clauses outside the frontier has been resolved before, and so may be skipped, see [PairSelection].

use std::collections::HashMap;

use crate::{config::PairSelection, db::ClauseKey, structures::clause::Clause};

#[derive(Clone, Debug, Default)]
pub struct ClauseSet {
    clauses: Vec<Clause>,

    keys: HashMap<Clause, ClauseKey>,

    /// The key of the first clause in the frontier.
    frontier: ClauseKey,
}

impl ClauseSet {
    /// Inserts `clause`, returning the key of the clause if the clause was not already present.
    pub fn insert(&mut self, clause: Clause) -> Option<ClauseKey> {
        if self.keys.contains_key(&clause) {
            return None;
        }
        let key = self.clauses.len();
        self.keys.insert(clause.clone(), key);
        self.clauses.push(clause);
        Some(key)
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.keys.contains_key(clause)
    }

    pub fn get(&self, key: ClauseKey) -> Option<&Clause> {
        self.clauses.get(key)
    }

    pub fn key_of(&self, clause: &Clause) -> Option<ClauseKey> {
        self.keys.get(clause).copied()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Makes every clause inserted from now on part of the frontier, and no other clause.
    pub fn advance_frontier(&mut self) {
        self.frontier = self.clauses.len();
    }

    /// Every pair of keys `(i, j)` with `i < j`, ordered by `i` and then `j`.
    ///
    /// With [PairSelection::Frontier] pairs where neither clause is in the frontier are skipped, with the order of the remaining pairs unchanged.
    pub fn pairs(&self, selection: PairSelection) -> impl Iterator<Item = (ClauseKey, ClauseKey)> {
        let count = self.clauses.len();
        let least_j = match selection {
            PairSelection::All => 0,
            PairSelection::Frontier => self.frontier,
        };
        (0..count).flat_map(move |i| (std::cmp::max(i + 1, least_j)..count).map(move |j| (i, j)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(s: &str) -> Clause {
        s.parse().unwrap()
    }

    #[test]
    fn no_duplicates() {
        let mut set = ClauseSet::default();
        assert!(set.is_empty());
        assert_eq!(set.insert(clause("A OR -B")), Some(0));
        assert_eq!(set.insert(clause("-B OR A")), None);
        assert_eq!(set.insert(clause("B")), Some(1));
        assert_eq!(set.len(), 2);
        assert_eq!(set.key_of(&clause("B")), Some(1));
    }

    #[test]
    fn pairs() {
        let mut set = ClauseSet::default();
        for c in ["A", "B", "C"] {
            set.insert(clause(c));
        }
        set.advance_frontier();
        set.insert(clause("D"));

        let all = set.pairs(PairSelection::All).collect::<Vec<_>>();
        assert_eq!(all, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);

        let frontier = set.pairs(PairSelection::Frontier).collect::<Vec<_>>();
        assert_eq!(frontier, vec![(0, 3), (1, 3), (2, 3)]);
    }

    #[test]
    fn pairs_are_keys() {
        let mut set = ClauseSet::default();
        for c in ["A", "-A OR B", "B OR C", "-C"] {
            set.insert(clause(c));
        }
        set.advance_frontier();
        set.insert(clause("D"));

        for selection in [PairSelection::All, PairSelection::Frontier] {
            for (i, j) in set.pairs(selection) {
                assert!(i < j);
                assert!(set.get(i).is_some() && set.get(j).is_some());
            }
        }
        assert!(set.get(set.len()).is_none());
    }

    #[test]
    fn initial_frontier_is_everything() {
        let mut set = ClauseSet::default();
        for c in ["A", "B", "C"] {
            set.insert(clause(c));
        }
        assert_eq!(
            set.pairs(PairSelection::Frontier).count(),
            set.pairs(PairSelection::All).count()
        );
    }
}
