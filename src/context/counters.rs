/// Counts for various things which count, roughly.
///
/// Counters are reset at the start of each refutation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of rounds begun.
    pub rounds: usize,

    /// A count of pairs of clauses resolved.
    pub pairs: usize,

    /// A count of resolvents kept, new or not.
    pub resolvents: usize,

    /// A count of resolvents discarded as tautologies.
    pub tautologies: usize,
}

impl std::fmt::Display for Counters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rounds: {}, pairs: {}, resolvents: {}, tautologies: {}",
            self.rounds, self.pairs, self.resolvents, self.tautologies
        )
    }
}
