//! Literals are symbols paired with a (boolean) polarity.
//!
//! A literal with polarity `true` is the symbol itself, while a literal with polarity `false` is the negation of the symbol.
//!
//! ```rust
//! # use otter_res::structures::literal::Literal;
//! # use otter_res::structures::symbol::Symbol;
//! let p = Symbol::try_from('P').expect("a symbol");
//! let literal = Literal::new(p, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.symbol(), p);
//! assert!(!literal.negate().polarity());
//! assert_eq!(-literal, literal.negate());
//!
//! assert_eq!("-P".parse::<Literal>(), Ok(Literal::new(p, false)));
//! ```
//!
//! Literals are ordered by symbol and then polarity, with the literal of polarity `true` strictly less than the literal of polarity `false`.
//! So, when sorted, `A` comes before `-A` which comes before `B`.

use crate::{
    structures::{symbol::Symbol, valuation::Valuation},
    types::err,
};

/// The character used to negate a symbol in clause form.
pub const NEGATION: char = '-';

/// A symbol paired with a polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    /// The symbol of a literal.
    symbol: Symbol,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing a symbol with a boolean.
    pub fn new(symbol: Symbol, polarity: bool) -> Self {
        Literal { symbol, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            symbol: self.symbol,
            polarity: !self.polarity,
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// Whether `other` is the negation of the literal.
    pub fn complements(&self, other: &Literal) -> bool {
        self.symbol == other.symbol && self.polarity != other.polarity
    }

    /// The value of the literal on a valuation, if the symbol has a value.
    pub fn value_on(&self, valuation: &impl Valuation) -> Option<bool> {
        valuation
            .value_of(self.symbol)
            .map(|value| value == self.polarity)
    }
}

impl std::ops::Neg for Literal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.symbol == other.symbol {
            if self.polarity == other.polarity {
                std::cmp::Ordering::Equal
            } else if self.polarity {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Greater
            }
        } else {
            self.symbol.cmp(&other.symbol)
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.symbol),
            false => write!(f, "{NEGATION}{}", self.symbol),
        }
    }
}

impl std::str::FromStr for Literal {
    type Err = err::ClauseError;

    /// Reads a literal in clause form: an optional `-` followed by exactly one symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (polarity, rest) = match trimmed.strip_prefix(NEGATION) {
            Some(rest) => (false, rest),
            None => (true, trimmed),
        };

        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (None, _) if trimmed.is_empty() => Err(err::ClauseError::Empty),
            (Some(c), None) => Ok(Literal::new(Symbol::try_from(c)?, polarity)),
            _ => Err(err::ClauseError::Literal(trimmed.to_string())),
        }
    }
}
