/*!
Parsing a token sequence into a [Formula].

The grammar, lowest precedence first:

```none
implication := or ( IMPLIES implication )?        right associative
or          := and ( OR and )*                    left associative
and         := unary ( AND unary )*               left associative
unary       := NOT unary | atom
atom        := LPAREN implication RPAREN
             | NAME ( LPAREN arguments? RPAREN )?
arguments   := term ( COMMA term )*
term        := NAME ( LPAREN arguments RPAREN )?
```

Nested applications in `term` are accepted only by the [SingleLetter](Dialect::SingleLetter) dialect, as function terms.
Identifier classification --- variable against constant, and the predicate-head requirement --- is also a question of the dialect, and happens here, once: terms are tagged on construction and the tags are stable thereafter.
*/

use crate::builder::lexer::{Token, TokenKind};
use crate::config::Dialect;
use crate::misc::log::targets::{self};
use crate::structures::formula::{self, Formula};
use crate::structures::literal::Atom;
use crate::structures::term::Term;
use crate::types::err::{self};

/// Whether the first character of `name` is a lowercase letter.
fn lowercase_led(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_lowercase)
}

/// Whether the first character of `name` is an uppercase letter.
fn uppercase_led(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Whether `name` is a single lowercase letter.
fn single_lowercase(name: &str) -> bool {
    let mut characters = name.chars();
    matches!((characters.next(), characters.next()), (Some(c), None) if c.is_lowercase())
}

/// A recursive-descent parser over a token sequence.
pub struct Parser<'t> {
    tokens: &'t [Token],
    position: usize,
    dialect: Dialect,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token], dialect: Dialect) -> Self {
        Self {
            tokens,
            position: 0,
            dialect,
        }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn advance(&mut self) -> &Token {
        let token = &self.tokens[self.position];
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    /// Parses a complete formula, requiring the input to be fully consumed.
    pub fn parse(mut self) -> Result<Formula, err::ParseError> {
        let parsed = self.implication()?;

        match self.peek().kind {
            TokenKind::End => Ok(parsed),

            TokenKind::RParen => Err(err::ParseError::UnbalancedParenthesis {
                at: self.peek().at,
            }),

            _ => Err(err::ParseError::TrailingInput { at: self.peek().at }),
        }
    }

    fn implication(&mut self) -> Result<Formula, err::ParseError> {
        let left = self.disjunction()?;

        if self.peek().kind == TokenKind::Implies {
            self.advance();
            let right = self.implication()?;
            return Ok(formula::implies(left, right));
        }

        Ok(left)
    }

    fn disjunction(&mut self) -> Result<Formula, err::ParseError> {
        let mut parsed = self.conjunction()?;

        while self.peek().kind == TokenKind::Or {
            self.advance();
            let right = self.conjunction()?;
            parsed = formula::or(parsed, right);
        }

        Ok(parsed)
    }

    fn conjunction(&mut self) -> Result<Formula, err::ParseError> {
        let mut parsed = self.unary()?;

        while self.peek().kind == TokenKind::And {
            self.advance();
            let right = self.unary()?;
            parsed = formula::and(parsed, right);
        }

        Ok(parsed)
    }

    fn unary(&mut self) -> Result<Formula, err::ParseError> {
        if self.peek().kind == TokenKind::Not {
            self.advance();
            let negated = self.unary()?;
            return Ok(formula::not(negated));
        }

        self.atom()
    }

    fn atom(&mut self) -> Result<Formula, err::ParseError> {
        let at = self.peek().at;

        match self.peek().kind.clone() {
            TokenKind::LParen => {
                self.advance();
                let grouped = self.implication()?;

                match self.peek().kind {
                    TokenKind::RParen => {
                        self.advance();
                        Ok(grouped)
                    }

                    _ => Err(err::ParseError::UnbalancedParenthesis { at: self.peek().at }),
                }
            }

            TokenKind::Name(name) => {
                self.advance();

                if let Dialect::SingleLetter = self.dialect {
                    if !uppercase_led(&name) {
                        log::debug!(target: targets::PARSER, "Rejecting lowercase-led predicate {name} at {at}");
                        return Err(err::ParseError::PredicateExpected { at });
                    }
                }

                let terms = match self.peek().kind {
                    TokenKind::LParen => {
                        self.advance();
                        let terms = self.arguments()?;

                        match self.peek().kind {
                            TokenKind::RParen => {
                                self.advance();
                                terms
                            }

                            _ => {
                                return Err(err::ParseError::UnbalancedParenthesis {
                                    at: self.peek().at,
                                })
                            }
                        }
                    }

                    _ => Vec::new(),
                };

                Ok(Formula::Atom(Atom::new(name, terms)))
            }

            _ => Err(err::ParseError::UnexpectedToken { at }),
        }
    }

    /// A possibly empty, comma-separated argument sequence.
    fn arguments(&mut self) -> Result<Vec<Term>, err::ParseError> {
        let mut terms = Vec::new();

        if matches!(self.peek().kind, TokenKind::RParen) {
            return Ok(terms);
        }

        terms.push(self.term()?);

        while self.peek().kind == TokenKind::Comma {
            self.advance();
            terms.push(self.term()?);
        }

        Ok(terms)
    }

    /// A single term: a classified name, or (dialect permitting) a function application.
    fn term(&mut self) -> Result<Term, err::ParseError> {
        let at = self.peek().at;

        let name = match self.peek().kind.clone() {
            TokenKind::Name(name) => {
                self.advance();
                name
            }

            _ => return Err(err::ParseError::UnexpectedToken { at }),
        };

        if self.peek().kind == TokenKind::LParen {
            let paren_at = self.peek().at;

            match self.dialect {
                Dialect::Lowercase => {
                    log::debug!(target: targets::PARSER, "Rejecting function application {name} at {paren_at}");
                    return Err(err::ParseError::FunctionNotSupported { at: paren_at });
                }

                Dialect::SingleLetter => {
                    if !lowercase_led(&name) {
                        log::debug!(target: targets::PARSER, "Rejecting application of {name} in term position at {paren_at}");
                        return Err(err::ParseError::UnexpectedToken { at: paren_at });
                    }

                    self.advance();
                    let arguments = self.arguments()?;

                    match self.peek().kind {
                        TokenKind::RParen => {
                            if arguments.is_empty() {
                                return Err(err::ParseError::UnexpectedToken {
                                    at: self.peek().at,
                                });
                            }
                            self.advance();
                            log::trace!(target: targets::PARSER, "Function {name}/{}", arguments.len());
                            return Ok(Term::Function(name, arguments));
                        }

                        _ => {
                            return Err(err::ParseError::UnbalancedParenthesis {
                                at: self.peek().at,
                            })
                        }
                    }
                }
            }
        }

        Ok(self.classify(name))
    }

    /// Tags a bare name as a variable or a constant, per the dialect.
    fn classify(&self, name: String) -> Term {
        let variable = match self.dialect {
            Dialect::Lowercase => lowercase_led(&name),
            Dialect::SingleLetter => single_lowercase(&name),
        };

        if variable {
            log::trace!(target: targets::PARSER, "Variable {name}");
            Term::Variable(name)
        } else {
            log::trace!(target: targets::PARSER, "Constant {name}");
            Term::Constant(name)
        }
    }
}
