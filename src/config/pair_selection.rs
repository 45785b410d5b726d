use std::str::FromStr;

/// Which pairs of clauses are resolved in each round of a refutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum PairSelection {
    /// Every pair of distinct clauses, every round.
    #[default]
    All = 0,

    /// Only pairs with at least one clause added in the previous round.
    ///
    /// A pair of older clauses was resolved in some earlier round, and each of its resolvents is either a tautology or already present.
    /// So, the clauses derived each round are exactly those derived with [PairSelection::All], in the same order.
    Frontier,
}

impl std::fmt::Display for PairSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Frontier => write!(f, "frontier"),
        }
    }
}

impl PairSelection {
    /// The minimum PairSelection type.
    pub const MIN: PairSelection = PairSelection::All;

    /// The maximum PairSelection type.
    pub const MAX: PairSelection = PairSelection::Frontier;
}

impl FromStr for PairSelection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),

            "frontier" => Ok(Self::Frontier),

            _unknown_string => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parses_back() {
        for selection in [PairSelection::All, PairSelection::Frontier] {
            assert_eq!(selection.to_string().parse(), Ok(selection));
        }
        assert_eq!("some".parse::<PairSelection>(), Err(()));
    }
}
