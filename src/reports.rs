/*!
Reports for the context.

The result of [ask](crate::context::Context::ask) is a [Trace], the clauses derived in each round of a refutation together with a [Report] on the query.
*/

use crate::structures::clause::Clause;

/// High-level reports regarding a query.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The empty clause was derived, and so the query is entailed by the knowledge base.
    Entailed,

    /// Resolution saturated without deriving the empty clause, and so the query is not entailed.
    NotEntailed,

    /// The round limit was reached before either of the above.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "YES"),
            Self::NotEntailed => write!(f, "NO"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The clauses first derived in some round, in order of discovery.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Round {
    pub clauses: Vec<Clause>,
}

impl Round {
    /// Whether the empty clause was derived in the round.
    pub fn refutes(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }
}

/// Every round of a refutation which derived some clause, followed by a report.
///
/// A saturating round derives no clause and so is not recorded.
/// When the query is entailed, the last round is the round in which the empty clause was derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    pub rounds: Vec<Round>,
    pub report: Report,
}

impl Trace {
    /// All derived clauses, round by round.
    pub fn derived(&self) -> impl Iterator<Item = &Clause> {
        self.rounds.iter().flat_map(|round| round.clauses.iter())
    }
}
