/*!
Refutation of the negation of a query, by rounds of resolution.

# Overview

The clause set of a refutation is seeded with the clauses of the knowledge base followed by the clauses of the negated query, with duplicates collapsed.
Then, each round:

1. Each [selected pair](crate::config::PairSelection) of clauses `(i, j)` with `i < j` is [resolved](crate::procedures::resolve::pl_resolve), by `i` and then by `j`.
2. Each resolvent not already in the clause set, and not already found in the round, is *new*, in order of discovery.
3. If there are no new clauses, resolution has saturated and the query is not entailed.
   The round is not recorded.
4. Otherwise, the new clauses are added to the clause set and recorded as a round.
   If the empty clause is among the new clauses, the query is entailed.

Roughly:

```rust,ignore
loop {
    let fresh = new_resolvents(&clause_set);
    if fresh.is_empty() {
        break Report::NotEntailed;
    }
    clause_set.extend(fresh);
    if fresh.contains(&Clause::empty()) {
        break Report::Entailed;
    }
}
```

As there are finitely many clauses over the symbols of the clause set, some round derives nothing new, unless the empty clause is derived first.
Still, a [round limit](crate::config::Config::round_limit) may be set, after which the report is [unknown](Report::Unknown).

If the clause set is seeded with the empty clause the query is entailed, without any round.
*/

use std::collections::HashSet;

use crate::{
    context::{Context, Counters},
    db::{
        clause_set::ClauseSet,
        derivation::{DerivationGraph, Premise},
    },
    misc::log::targets,
    procedures::resolve::pl_resolve,
    reports::{Report, Round, Trace},
    structures::clause::Clause,
};

impl Context {
    /// Refutes the clauses of the knowledge base together with `negated_query`.
    ///
    /// Counters and derivations of any previous refutation are replaced.
    pub fn refute(&mut self, negated_query: &[Clause]) -> Trace {
        self.counters = Counters::default();
        let selection = self.config.pair_selection.value;
        let record = self.config.record_derivations.value;

        let mut derivations = DerivationGraph::default();
        let mut clause_set = ClauseSet::default();

        let premises = self
            .kb
            .clauses()
            .iter()
            .map(|clause| (clause, Premise::KnowledgeBase))
            .chain(negated_query.iter().map(|clause| (clause, Premise::NegatedQuery)));

        for (clause, premise) in premises {
            if clause_set.insert(clause.clone()).is_some() && record {
                derivations.add_premise(clause, premise);
            }
        }
        log::debug!(target: targets::RESOLUTION, "Seeded with {} clauses", clause_set.len());

        let mut rounds = Vec::default();

        let report = match clause_set.contains(&Clause::empty()) {
            true => Report::Entailed,

            false => loop {
                if let Some(limit) = self.config.round_limit {
                    if self.counters.rounds >= limit {
                        log::info!(target: targets::RESOLUTION, "Round limit of {limit} reached");
                        break Report::Unknown;
                    }
                }
                self.counters.rounds += 1;

                let mut fresh: Vec<Clause> = Vec::default();
                let mut found: HashSet<Clause> = HashSet::default();

                for (i, j) in clause_set.pairs(selection) {
                    // Keys of a pair are always keys of the set.
                    let (Some(left), Some(right)) = (clause_set.get(i), clause_set.get(j)) else {
                        log::error!(target: targets::RESOLUTION, "Pair ({i}, {j}) outside a set of {} clauses", clause_set.len());
                        debug_assert!(j < clause_set.len(), "pair ({i}, {j}) outside the clause set");
                        continue;
                    };
                    self.counters.pairs += 1;

                    let resolution = pl_resolve(left, right);
                    self.counters.tautologies += resolution.tautologies;
                    self.counters.resolvents += resolution.resolvents.len();

                    for resolvent in resolution.resolvents {
                        if clause_set.contains(&resolvent) || found.contains(&resolvent) {
                            continue;
                        }
                        log::trace!(target: targets::RESOLUTION, "{resolvent} from {left} and {right}");
                        if record {
                            derivations.add_resolvent(&resolvent, left, right);
                        }
                        found.insert(resolvent.clone());
                        fresh.push(resolvent);
                    }
                }

                log::info!(
                    target: targets::RESOLUTION,
                    "Round {}: {} new clauses from {} clauses",
                    self.counters.rounds,
                    fresh.len(),
                    clause_set.len()
                );

                if fresh.is_empty() {
                    break Report::NotEntailed;
                }

                clause_set.advance_frontier();
                for clause in &fresh {
                    clause_set.insert(clause.clone());
                }

                let round = Round { clauses: fresh };
                let refutes = round.refutes();
                rounds.push(round);

                if refutes {
                    break Report::Entailed;
                }
            },
        };

        log::info!(target: targets::RESOLUTION, "{report} ({})", self.counters);

        self.derivations = record.then_some(derivations);

        Trace { rounds, report }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, PairSelection};

    fn context(kb: &[&str]) -> Context {
        let mut context = Context::from_config(Config::default());
        for clause in kb {
            context.tell_string(clause).unwrap();
        }
        context
    }

    fn rounds(trace: &Trace) -> Vec<Vec<String>> {
        trace
            .rounds
            .iter()
            .map(|round| round.clauses.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn entailed_round_is_complete() {
        let mut context = context(&["A OR B", "-A OR C", "-B OR C"]);
        let trace = context.ask("C").unwrap();

        assert_eq!(trace.report, Report::Entailed);
        assert_eq!(
            rounds(&trace),
            vec![
                vec!["B OR C", "A OR C", "-A", "-B"],
                vec!["B", "A", "C"],
                vec!["{}"],
            ]
        );
        assert_eq!(context.counters.rounds, 3);
    }

    #[test]
    fn saturation_is_not_recorded() {
        let mut context = context(&["A"]);
        let trace = context.ask("B").unwrap();
        assert_eq!(trace.report, Report::NotEntailed);
        assert!(trace.rounds.is_empty());
        assert_eq!(context.counters.rounds, 1);
        assert_eq!(context.counters.pairs, 1);
    }

    #[test]
    fn tautologies_only() {
        let mut context = context(&["A OR B"]);
        let trace = context.ask("A AND B").unwrap();
        assert_eq!(trace.report, Report::NotEntailed);
        assert!(trace.rounds.is_empty());
        assert_eq!(context.counters.tautologies, 2);
    }

    #[test]
    fn duplicates_collapse_on_seeding() {
        let mut context = context(&["A", "A", "-B OR A"]);
        let trace = context.ask("-A").unwrap();
        // The negated query is A, already present.
        assert_eq!(trace.report, Report::NotEntailed);
        assert_eq!(context.counters.pairs, 1);
    }

    #[test]
    fn seeded_empty_clause() {
        let mut context = context(&["{}"]);
        let trace = context.ask("A").unwrap();
        assert_eq!(trace.report, Report::Entailed);
        assert!(trace.rounds.is_empty());
    }

    #[test]
    fn round_limit() {
        let mut context = context(&["A OR B", "-A OR C", "-B OR C"]);
        context.config.round_limit = Some(1);
        let trace = context.ask("C").unwrap();
        assert_eq!(trace.report, Report::Unknown);
        assert_eq!(trace.rounds.len(), 1);

        context.config.round_limit = Some(2);
        let trace = context.ask("C").unwrap();
        assert_eq!(trace.report, Report::Unknown);
        assert_eq!(trace.rounds.len(), 2);

        context.config.round_limit = Some(3);
        assert_eq!(context.ask("C").unwrap().report, Report::Entailed);
    }

    #[test]
    fn frontier_matches_all() {
        let kb = ["A OR B OR -C", "-A OR D", "-B OR D OR E", "-E OR -D", "C OR F", "-F OR A"];
        for query in ["D", "A OR B", "-E", "F => D", "C AND -D"] {
            let mut all = context(&kb);
            let mut frontier = context(&kb);
            frontier.config.pair_selection.value = PairSelection::Frontier;

            let all_trace = all.ask(query).unwrap();
            let frontier_trace = frontier.ask(query).unwrap();
            assert_eq!(all_trace, frontier_trace, "{query}");
            assert!(frontier.counters.pairs <= all.counters.pairs);
        }
    }

    #[test]
    fn refutation_proof() {
        let mut context = context(&["A OR B", "-A OR C", "-B OR C"]);
        context.config.record_derivations.value = true;
        context.ask("C").unwrap();

        let proof = context.refutation_proof().unwrap();
        assert!(proof.steps.last().unwrap().clause.is_empty());

        context.ask("A").unwrap();
        assert!(context.refutation_proof().is_none());
    }
}
