//! Tokens of an infix formula.

use crate::{structures::symbol::Symbol, types::err};

/// Operators, with a fixed arity and precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Not,
    And,
    Or,
    Implies,
    Iff,
}

impl Operator {
    /// The precedence of the operator, higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Not => 5,
            Self::And => 4,
            Self::Or => 3,
            Self::Implies => 2,
            Self::Iff => 1,
        }
    }

    /// Whether the operator is written before its (only) operand.
    pub fn is_prefix(&self) -> bool {
        matches!(self, Self::Not)
    }
}

/// Tokens of an infix formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    Symbol(Symbol),
    Operator(Operator),
    Open,
    Close,
}

/// Splits `input` into tokens.
///
/// Accepted spellings:
/// - Negation: `-` `~` `!` `¬` `NOT`
/// - Conjunction: `AND` `&` `∧`
/// - Disjunction: `OR` `|` `∨`
/// - Implication: `IMPLIES` `=>` `->` `→`
/// - Biconditional: `IFF` `<=>` `<->` `↔`
///
/// A single uppercase letter is a symbol, and any longer run of uppercase letters must be one of the words above.
pub fn tokenize(input: &str) -> Result<Vec<Token>, err::ParseError> {
    let mut tokens = Vec::default();
    let mut chars = input.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        let rest = &input[index..];

        let token = match ch {
            _ if ch.is_whitespace() => continue,

            '(' => Token::Open,
            ')' => Token::Close,

            '-' if rest.starts_with("->") => {
                chars.next();
                Token::Operator(Operator::Implies)
            }
            '=' if rest.starts_with("=>") => {
                chars.next();
                Token::Operator(Operator::Implies)
            }
            '<' if rest.starts_with("<=>") || rest.starts_with("<->") => {
                chars.next();
                chars.next();
                Token::Operator(Operator::Iff)
            }

            '-' | '~' | '!' | '¬' => Token::Operator(Operator::Not),
            '&' | '∧' => Token::Operator(Operator::And),
            '|' | '∨' => Token::Operator(Operator::Or),
            '→' => Token::Operator(Operator::Implies),
            '↔' => Token::Operator(Operator::Iff),

            'A'..='Z' => {
                let mut end = index + ch.len_utf8();
                while let Some(&(next_index, next)) = chars.peek() {
                    match next {
                        'A'..='Z' => {
                            end = next_index + next.len_utf8();
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match &input[index..end] {
                    "NOT" => Token::Operator(Operator::Not),
                    "AND" => Token::Operator(Operator::And),
                    "OR" => Token::Operator(Operator::Or),
                    "IMPLIES" => Token::Operator(Operator::Implies),
                    "IFF" => Token::Operator(Operator::Iff),
                    word if word.len() == 1 => match Symbol::try_from(ch) {
                        Ok(symbol) => Token::Symbol(symbol),
                        Err(_) => return Err(err::ParseError::Character(ch)),
                    },
                    word => return Err(err::ParseError::Word(word.to_string())),
                }
            }

            _ => return Err(err::ParseError::Character(ch)),
        };

        tokens.push(token);
    }

    Ok(tokens)
}
