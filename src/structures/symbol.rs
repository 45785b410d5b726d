/*!
Symbols, aka. propositional variables or 'atoms'.

A symbol is a single uppercase letter, `A` through `Z`, and so the language of any formula is (some subset of) twenty-six symbols.

```rust
# use otter_res::structures::symbol::Symbol;
let p = Symbol::try_from('P').expect("a symbol");
assert_eq!(p.index(), 15);

assert!(Symbol::try_from('p').is_err());
assert!(Symbol::try_from('1').is_err());
```

The representation allows symbols to be used as the indicies of a structure, e.g. a [valuation](crate::structures::valuation), without taking too much space.
*/

use crate::types::err;

/// The count of distinct symbols.
pub const SYMBOL_COUNT: usize = 26;

/// A propositional symbol, one of `A` through `Z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// The index of the symbol, with `A` as 0.
    pub fn index(&self) -> usize {
        (self.0 - b'A') as usize
    }

    /// The symbol as a character.
    pub fn as_char(&self) -> char {
        self.0 as char
    }

    /// Every symbol, in order.
    pub fn all() -> impl Iterator<Item = Symbol> {
        (b'A'..=b'Z').map(Symbol)
    }
}

impl TryFrom<char> for Symbol {
    type Error = err::ClauseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'A'..='Z' => Ok(Symbol(value as u8)),
            _ => Err(err::ClauseError::Symbol(value)),
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
