/*!
A record of how each clause of a refutation was derived.

The record is a directed graph with a node for each clause, and an edge from each parent of a resolvent to the resolvent.
Only the first derivation of a clause is recorded, and so the graph is acyclic.

If the empty clause has been recorded, a [Proof] of the empty clause is found by a depth-first traversal against the direction of the edges, with each clause emitted after its parents.

```rust
# use otter_res::db::derivation::{DerivationGraph, Premise};
# use otter_res::structures::clause::Clause;
let a: Clause = "A".parse().expect("a clause");
let not_a: Clause = "-A".parse().expect("a clause");

let mut graph = DerivationGraph::default();
graph.add_premise(&a, Premise::KnowledgeBase);
graph.add_premise(&not_a, Premise::NegatedQuery);
graph.add_resolvent(&Clause::empty(), &a, &not_a);

let proof = graph.refutation().expect("a proof");
assert_eq!(proof.steps.len(), 3);
```
*/

use std::collections::HashMap;

use petgraph::{
    graph::{Graph, NodeIndex},
    visit::{DfsPostOrder, EdgeRef, Reversed},
    Direction,
};

use crate::{misc::log::targets, structures::clause::Clause};

/// Where a clause given to a refutation came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Premise {
    KnowledgeBase,
    NegatedQuery,
}

#[derive(Debug)]
struct Node {
    clause: Clause,
    premise: Option<Premise>,
}

/// Edges are weighted by the side of the parent, with `0` for the left parent.
#[derive(Debug, Default)]
pub struct DerivationGraph {
    graph: Graph<Node, usize>,
    nodes: HashMap<Clause, NodeIndex>,
}

impl DerivationGraph {
    /// Records `clause` as a premise, unless the clause is already recorded.
    pub fn add_premise(&mut self, clause: &Clause, premise: Premise) {
        if self.nodes.contains_key(clause) {
            return;
        }
        let node = self.graph.add_node(Node {
            clause: clause.clone(),
            premise: Some(premise),
        });
        self.nodes.insert(clause.clone(), node);
    }

    /// Records `clause` as the resolvent of `left` and `right`, unless the clause is already recorded.
    ///
    /// Parents which were never recorded are skipped, with a warning.
    pub fn add_resolvent(&mut self, clause: &Clause, left: &Clause, right: &Clause) {
        if self.nodes.contains_key(clause) {
            return;
        }
        let node = self.graph.add_node(Node {
            clause: clause.clone(),
            premise: None,
        });
        self.nodes.insert(clause.clone(), node);

        for (side, parent) in [left, right].into_iter().enumerate() {
            match self.nodes.get(parent) {
                Some(&parent_node) => {
                    self.graph.add_edge(parent_node, node, side);
                }
                None => {
                    log::warn!(target: targets::DERIVATION, "Parent {parent} of {clause} was not recorded");
                }
            }
        }
    }

    /// A count of recorded clauses.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// A proof of `clause`, if recorded.
    pub fn proof_of(&self, clause: &Clause) -> Option<Proof> {
        let &target = self.nodes.get(clause)?;

        let mut steps = Vec::default();
        let mut positions: HashMap<NodeIndex, usize> = HashMap::default();

        let reversed = Reversed(&self.graph);
        let mut dfs = DfsPostOrder::new(reversed, target);
        while let Some(node) = dfs.next(reversed) {
            let weight = &self.graph[node];

            let source = match weight.premise {
                Some(Premise::KnowledgeBase) => Source::KnowledgeBase,
                Some(Premise::NegatedQuery) => Source::NegatedQuery,
                None => {
                    let mut parents = self
                        .graph
                        .edges_directed(node, Direction::Incoming)
                        .map(|edge| (*edge.weight(), edge.source()))
                        .collect::<Vec<_>>();
                    parents.sort_unstable();

                    // Parents are emitted before their children.
                    let parents = parents
                        .iter()
                        .filter_map(|(_, parent)| positions.get(parent).copied())
                        .collect::<Vec<_>>();
                    match parents.as_slice() {
                        [left, right] => Source::Resolution(*left, *right),
                        _ => Source::Incomplete,
                    }
                }
            };

            positions.insert(node, steps.len());
            steps.push(ProofStep {
                clause: weight.clause.clone(),
                source,
            });
        }

        log::debug!(target: targets::DERIVATION, "Proof of {clause} in {} steps", steps.len());
        Some(Proof { steps })
    }

    /// A proof of the empty clause, if recorded.
    pub fn refutation(&self) -> Option<Proof> {
        self.proof_of(&Clause::empty())
    }
}

/// How a step of a proof was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    KnowledgeBase,
    NegatedQuery,

    /// Resolution on the clauses at the given positions of the proof.
    Resolution(usize, usize),

    /// A resolvent with some parent missing from the record.
    Incomplete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofStep {
    pub clause: Clause,
    pub source: Source,
}

/// A sequence of clauses, each of which is a premise or a resolvent of earlier clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    pub steps: Vec<ProofStep>,
}

impl std::fmt::Display for Proof {
    /// One step per line, numbered from 1, e.g. `3. B OR C [1, 2]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (position, step) in self.steps.iter().enumerate() {
            write!(f, "{}. {}", position + 1, step.clause)?;
            match step.source {
                Source::KnowledgeBase => writeln!(f, " [knowledge base]")?,
                Source::NegatedQuery => writeln!(f, " [negated query]")?,
                Source::Resolution(l, r) => writeln!(f, " [{}, {}]", l + 1, r + 1)?,
                Source::Incomplete => writeln!(f, " [?]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(s: &str) -> Clause {
        s.parse().unwrap()
    }

    #[test]
    fn first_derivation_is_kept() {
        let mut graph = DerivationGraph::default();
        graph.add_premise(&clause("A OR B"), Premise::KnowledgeBase);
        graph.add_premise(&clause("-A"), Premise::NegatedQuery);
        graph.add_premise(&clause("-A"), Premise::KnowledgeBase);
        graph.add_resolvent(&clause("B"), &clause("A OR B"), &clause("-A"));
        graph.add_resolvent(&clause("B"), &clause("-A"), &clause("A OR B"));
        assert_eq!(graph.len(), 3);

        let proof = graph.proof_of(&clause("B")).unwrap();
        let position = |c: &str| proof.steps.iter().position(|step| step.clause == clause(c)).unwrap();
        assert_eq!(proof.steps[position("-A")].source, Source::NegatedQuery);
        assert_eq!(
            proof.steps[2].source,
            Source::Resolution(position("A OR B"), position("-A"))
        );
    }

    #[test]
    fn refutation_has_parents_first() {
        let mut graph = DerivationGraph::default();
        for kb in ["A OR B", "-A OR C", "-B OR C"] {
            graph.add_premise(&clause(kb), Premise::KnowledgeBase);
        }
        graph.add_premise(&clause("-C"), Premise::NegatedQuery);
        graph.add_resolvent(&clause("B OR C"), &clause("A OR B"), &clause("-A OR C"));
        graph.add_resolvent(&clause("-A"), &clause("-A OR C"), &clause("-C"));
        graph.add_resolvent(&clause("C"), &clause("B OR C"), &clause("-B OR C"));
        graph.add_resolvent(&Clause::empty(), &clause("C"), &clause("-C"));

        let proof = graph.refutation().unwrap();
        let last = proof.steps.last().unwrap();
        assert!(last.clause.is_empty());

        // -A is not an ancestor of the empty clause.
        assert!(proof.steps.iter().all(|step| step.clause != clause("-A")));
        assert_eq!(proof.steps.len(), 7);

        for (position, step) in proof.steps.iter().enumerate() {
            if let Source::Resolution(l, r) = step.source {
                assert!(l < position && r < position);
            }
        }
        let text = proof.to_string();
        assert!(text.lines().last().unwrap().starts_with("7. {} ["));
    }

    #[test]
    fn no_refutation() {
        let mut graph = DerivationGraph::default();
        assert!(graph.is_empty());
        graph.add_premise(&clause("A"), Premise::KnowledgeBase);
        assert!(!graph.is_empty());
        assert!(graph.refutation().is_none());
    }
}
