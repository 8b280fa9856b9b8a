/*!
Tokenizing a formula string.

Recognized tokens: `(`, `)`, `,`, implication (`->` or `→`), negation (`¬` or `!`), conjunction (`∧` or `&`), disjunction (`∨` or `|`), and identifiers over Latin or Cyrillic letters, underscores, and (after the first character) digits.
Whitespace is skipped.
Any other character is a lexical error, reported with its byte position.
*/

use crate::types::err::{self};

/// The kind of a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// `(`
    LParen,

    /// `)`
    RParen,

    /// `,`
    Comma,

    /// `->` or `→`
    Implies,

    /// `¬` or `!`
    Not,

    /// `∧` or `&`
    And,

    /// `∨` or `|`
    Or,

    /// An identifier.
    Name(String),

    /// The end of the input.
    End,
}

/// A token together with its byte position in the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub at: usize,
}

/// Whether `character` may begin an identifier.
fn is_name_start(character: char) -> bool {
    character.is_ascii_alphabetic()
        || character == '_'
        || ('А'..='я').contains(&character)
        || character == 'Ё'
        || character == 'ё'
}

/// Whether `character` may continue an identifier.
fn is_name_continue(character: char) -> bool {
    is_name_start(character) || character.is_ascii_digit()
}

/// Turns `input` into a token sequence, terminated by [TokenKind::End].
pub fn tokenize(input: &str) -> Result<Vec<Token>, err::ParseError> {
    let mut tokens = Vec::new();
    let mut characters = input.char_indices().peekable();

    while let Some(&(at, character)) = characters.peek() {
        if character.is_whitespace() {
            characters.next();
            continue;
        }

        let kind = match character {
            '-' => {
                characters.next();
                match characters.peek() {
                    Some(&(_, '>')) => {
                        characters.next();
                        TokenKind::Implies
                    }
                    _ => return Err(err::ParseError::UnknownCharacter { at, found: '-' }),
                }
            }

            '→' => {
                characters.next();
                TokenKind::Implies
            }

            '(' => {
                characters.next();
                TokenKind::LParen
            }

            ')' => {
                characters.next();
                TokenKind::RParen
            }

            ',' => {
                characters.next();
                TokenKind::Comma
            }

            '¬' | '!' => {
                characters.next();
                TokenKind::Not
            }

            '∧' | '&' => {
                characters.next();
                TokenKind::And
            }

            '∨' | '|' => {
                characters.next();
                TokenKind::Or
            }

            c if is_name_start(c) => {
                let mut name = String::new();
                while let Some(&(_, c)) = characters.peek() {
                    if is_name_continue(c) {
                        name.push(c);
                        characters.next();
                    } else {
                        break;
                    }
                }
                TokenKind::Name(name)
            }

            found => return Err(err::ParseError::UnknownCharacter { at, found }),
        };

        tokens.push(Token { kind, at });
    }

    tokens.push(Token {
        kind: TokenKind::End,
        at: input.len(),
    });

    Ok(tokens)
}
