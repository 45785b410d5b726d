/*!
Parsing of infix formulas to [expressions](Expression).

Parsing is by operator precedence, in two phases:
1. The tokens of a formula are scanned once and rearranged to postfix order, using a stack of operators (aka. the shunting-yard algorithm).
2. The postfix sequence is reduced to a tree.

Precedence, from tightest to loosest, is: negation, conjunction, disjunction, implication, biconditional.
Binary operators of equal precedence group to the left, and so `A => B => C` is read as `(A => B) => C`.

```rust
# use otter_res::parse::parse_expression;
let tight = parse_expression("A OR B AND C").expect("a formula");
let explicit = parse_expression("A OR (B AND C)").expect("a formula");
assert_eq!(tight, explicit);

let left = parse_expression("A => B => C").expect("a formula");
assert_eq!(left, parse_expression("(A => B) => C").expect("a formula"));
```

Errors are returned before anything else is done with a formula, see [ParseError](err::ParseError).
*/

pub mod lexer;

use lexer::{tokenize, Operator, Token};

use crate::{
    misc::log::targets,
    structures::{expression::Expression, symbol::Symbol},
    types::err,
};

/// Items of a formula in postfix order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Postfix {
    Symbol(Symbol),
    Operator(Operator),
}

/// Items on the operator stack.
enum Pending {
    Operator(Operator),
    Open,
}

/// Parses an infix formula.
pub fn parse_expression(input: &str) -> Result<Expression, err::ParseError> {
    let tokens = tokenize(input)?;
    let postfix = to_postfix(&tokens)?;
    log::trace!(target: targets::PARSE, "Postfix of '{input}': {postfix:?}");
    reduce(&postfix)
}

/// Rearranges `tokens` to postfix order.
///
/// A binary operator is pushed after popping every operator on the stack with at least its precedence.
/// Negation is pushed without popping, as it is written before its operand.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Postfix>, err::ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::default();

    // Whether the previous token completed an operand.
    let mut after_operand = false;

    for token in tokens {
        match token {
            Token::Symbol(symbol) => output.push(Postfix::Symbol(*symbol)),

            Token::Operator(operator) if operator.is_prefix() => {
                if after_operand {
                    return Err(err::ParseError::Negation);
                }
                stack.push(Pending::Operator(*operator))
            }

            Token::Operator(operator) => {
                while let Some(Pending::Operator(top)) = stack.last() {
                    if top.precedence() < operator.precedence() {
                        break;
                    }
                    output.push(Postfix::Operator(*top));
                    stack.pop();
                }
                stack.push(Pending::Operator(*operator));
            }

            Token::Open => stack.push(Pending::Open),

            Token::Close => loop {
                match stack.pop() {
                    Some(Pending::Operator(operator)) => output.push(Postfix::Operator(operator)),
                    Some(Pending::Open) => break,
                    None => return Err(err::ParseError::UnmatchedClose),
                }
            },
        }

        after_operand = matches!(token, Token::Symbol(_) | Token::Close);
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(operator) => output.push(Postfix::Operator(operator)),
            Pending::Open => return Err(err::ParseError::UnmatchedOpen),
        }
    }

    Ok(output)
}

/// Reduces a postfix sequence to a single expression.
///
/// The operands of a binary operator are the two most recently reduced expressions, with the earlier on the left.
pub fn reduce(postfix: &[Postfix]) -> Result<Expression, err::ParseError> {
    let mut trees: Vec<Expression> = Vec::default();

    for item in postfix {
        let tree = match item {
            Postfix::Symbol(symbol) => Expression::Symbol(*symbol),

            Postfix::Operator(Operator::Not) => match trees.pop() {
                Some(operand) => operand.not(),
                None => return Err(err::ParseError::MissingOperand),
            },

            Postfix::Operator(binary) => {
                let (Some(right), Some(left)) = (trees.pop(), trees.pop()) else {
                    return Err(err::ParseError::MissingOperand);
                };
                match binary {
                    Operator::And => left.and(right),
                    Operator::Or => left.or(right),
                    Operator::Implies => left.implies(right),
                    Operator::Iff => left.iff(right),
                    Operator::Not => unreachable!("negation is reduced above"),
                }
            }
        };
        trees.push(tree);
    }

    match trees.len() {
        0 => Err(err::ParseError::Empty),
        1 => Ok(trees.remove(0)),
        _ => Err(err::ParseError::ExcessOperand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(c: char) -> Expression {
        Expression::Symbol(Symbol::try_from(c).unwrap())
    }

    fn parse(input: &str) -> Expression {
        parse_expression(input).unwrap()
    }

    #[test]
    fn precedence() {
        assert_eq!(parse("A OR B AND C"), s('A').or(s('B').and(s('C'))));
        assert_eq!(parse("A AND B OR C"), s('A').and(s('B')).or(s('C')));
        assert_eq!(parse("-A AND B"), s('A').not().and(s('B')));
        assert_eq!(
            parse("A => B OR C <=> D"),
            s('A').implies(s('B').or(s('C'))).iff(s('D'))
        );
    }

    #[test]
    fn left_grouping() {
        assert_eq!(parse("A OR B OR C"), s('A').or(s('B')).or(s('C')));
        assert_eq!(parse("A <=> B <=> C"), s('A').iff(s('B')).iff(s('C')));
    }

    #[test]
    fn negation() {
        assert_eq!(parse("--A"), s('A').not().not());
        assert_eq!(parse("-(A OR B)"), s('A').or(s('B')).not());
        assert_eq!(parse("NOT NOT A"), s('A').not().not());
    }

    #[test]
    fn parentheses() {
        assert_eq!(parse("(A OR B) AND C"), s('A').or(s('B')).and(s('C')));
        assert_eq!(parse("((A))"), s('A'));
    }

    #[test]
    fn errors() {
        assert_eq!(parse_expression(""), Err(err::ParseError::Empty));
        assert_eq!(parse_expression("  "), Err(err::ParseError::Empty));
        assert_eq!(parse_expression("()"), Err(err::ParseError::Empty));
        assert_eq!(parse_expression("(A OR B"), Err(err::ParseError::UnmatchedOpen));
        assert_eq!(parse_expression("A OR B)"), Err(err::ParseError::UnmatchedClose));
        assert_eq!(parse_expression("A OR"), Err(err::ParseError::MissingOperand));
        assert_eq!(parse_expression("AND A"), Err(err::ParseError::MissingOperand));
        assert_eq!(parse_expression("-"), Err(err::ParseError::MissingOperand));
        assert_eq!(parse_expression("A -"), Err(err::ParseError::Negation));
        assert_eq!(parse_expression("(A) -B"), Err(err::ParseError::Negation));
        assert_eq!(parse_expression("A B"), Err(err::ParseError::ExcessOperand));
        assert_eq!(parse_expression("A - B"), Err(err::ParseError::Negation));
        assert_eq!(parse_expression("(A)(B)"), Err(err::ParseError::ExcessOperand));
    }

    #[test]
    fn display_round_trip() {
        for formula in [
            "A",
            "-A",
            "--A",
            "A OR B AND -C",
            "-(A => B) <=> C OR -D",
            "(A <=> B) AND (C => D => E)",
        ] {
            let expression = parse(formula);
            assert_eq!(parse(&expression.to_string()), expression);
        }
    }
}
