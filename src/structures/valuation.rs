//! Valuations, aka. (partial) assignments of boolean values to symbols.
//!
//! Valuations are not used during a search, as resolution never assigns values.
//! Instead, valuations give the semantics against which parsing, conversion to CNF, and resolution are checked, by enumeration of truth tables.
//!
//! ```rust
//! # use otter_res::structures::symbol::Symbol;
//! # use otter_res::structures::valuation::{all_valuations, Valuation};
//! let symbols = ['A', 'B'].map(|c| Symbol::try_from(c).unwrap());
//! assert_eq!(all_valuations(&symbols).count(), 4);
//! ```

use crate::structures::symbol::{Symbol, SYMBOL_COUNT};

/// Something which may return the value of a symbol.
pub trait Valuation {
    /// The value of `symbol`, if any.
    fn value_of(&self, symbol: Symbol) -> Option<bool>;
}

/// A valuation as an array indexed by [Symbol::index].
#[allow(non_camel_case_types)]
pub type aValuation = [Option<bool>; SYMBOL_COUNT];

impl Valuation for aValuation {
    fn value_of(&self, symbol: Symbol) -> Option<bool> {
        self[symbol.index()]
    }
}

/// Every valuation which assigns a value to exactly the given symbols.
///
/// There are 2^n such valuations for n (distinct) symbols, so this is only of use for small n.
pub fn all_valuations(symbols: &[Symbol]) -> impl Iterator<Item = aValuation> + '_ {
    (0_u64..(1 << symbols.len())).map(move |bits| {
        let mut valuation: aValuation = [None; SYMBOL_COUNT];
        for (offset, symbol) in symbols.iter().enumerate() {
            valuation[symbol.index()] = Some(bits & (1 << offset) != 0);
        }
        valuation
    })
}
