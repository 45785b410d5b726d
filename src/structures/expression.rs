//! Expressions, aka. formulas of propositional logic as a tree.
//!
//! An expression is either a symbol or an operator applied to a fixed number of subexpressions.
//! The arity of each operator is fixed by the variant, so there is no such thing as a malformed tree.
//!
//! ```rust
//! # use otter_res::structures::expression::Expression;
//! let expression: Expression = "A OR B AND C".parse().expect("a formula");
//! assert_eq!(expression.to_string(), "(A OR (B AND C))");
//! ```
//!
//! Expressions are displayed fully parenthesised, and the displayed form parses to the same tree.

use std::collections::BTreeSet;

use crate::structures::{symbol::Symbol, valuation::Valuation};

/// A formula of propositional logic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expression {
    Symbol(Symbol),
    Not(Box<Expression>),
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
    Implies(Box<Expression>, Box<Expression>),
    Iff(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn not(self) -> Self {
        Expression::Not(Box::new(self))
    }

    pub fn and(self, other: Self) -> Self {
        Expression::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Self) -> Self {
        Expression::Or(Box::new(self), Box::new(other))
    }

    pub fn implies(self, other: Self) -> Self {
        Expression::Implies(Box::new(self), Box::new(other))
    }

    pub fn iff(self, other: Self) -> Self {
        Expression::Iff(Box::new(self), Box::new(other))
    }

    /// The (distinct) symbols of the expression, in order.
    pub fn symbols(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::default();
        self.collect_symbols(&mut symbols);
        symbols
    }

    fn collect_symbols(&self, symbols: &mut BTreeSet<Symbol>) {
        match self {
            Self::Symbol(symbol) => {
                symbols.insert(*symbol);
            }
            Self::Not(e) => e.collect_symbols(symbols),
            Self::And(l, r) | Self::Or(l, r) | Self::Implies(l, r) | Self::Iff(l, r) => {
                l.collect_symbols(symbols);
                r.collect_symbols(symbols);
            }
        }
    }

    /// The value of the expression on a valuation, if every symbol of the expression has a value.
    pub fn value_on(&self, valuation: &impl Valuation) -> Option<bool> {
        let value = match self {
            Self::Symbol(symbol) => valuation.value_of(*symbol)?,
            Self::Not(e) => !e.value_on(valuation)?,
            Self::And(l, r) => l.value_on(valuation)? && r.value_on(valuation)?,
            Self::Or(l, r) => l.value_on(valuation)? || r.value_on(valuation)?,
            Self::Implies(l, r) => !l.value_on(valuation)? || r.value_on(valuation)?,
            Self::Iff(l, r) => l.value_on(valuation)? == r.value_on(valuation)?,
        };
        Some(value)
    }
}

impl From<Symbol> for Expression {
    fn from(symbol: Symbol) -> Self {
        Expression::Symbol(symbol)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Symbol(symbol) => write!(f, "{symbol}"),
            Self::Not(e) => write!(f, "-{e}"),
            Self::And(l, r) => write!(f, "({l} AND {r})"),
            Self::Or(l, r) => write!(f, "({l} OR {r})"),
            Self::Implies(l, r) => write!(f, "({l} => {r})"),
            Self::Iff(l, r) => write!(f, "({l} <=> {r})"),
        }
    }
}

impl std::str::FromStr for Expression {
    type Err = crate::types::err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_expression(s)
    }
}
