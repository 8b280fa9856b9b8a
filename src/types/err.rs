/*!
Error types used in the library.

- Parse errors are external, and carry the byte position of the offending input.
- Clause database errors guard the programmatic input path.
- State errors signal misuse of the context, e.g. adding input to a finished search.

Unification failure is *not* an error: it is ubiquitous and expected in the inner loop, and is represented by [None](Option::None).
Likewise an exhausted search or a tripped step limit is a [report](crate::reports::Report), not an error.

Names of the error enums --- for the most part --- overlap with the module the error originates in.
As such, throughout the library `err::{self}` is often used to prefix use of the types with `err::`.
*/

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error related to parsing.
    Parse(ParseError),

    /// An error in the clause database.
    ClauseDB(ClauseDBError),

    /// An error related to the state of the context.
    State(StateError),
}

/// Errors during tokenizing or parsing.
///
/// `at` is a byte offset into the part of the input being parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A character outside the lexical grammar.
    UnknownCharacter { at: usize, found: char },

    /// A token which no production accepts at this position.
    UnexpectedToken { at: usize },

    /// A `(` without a matching `)`.
    UnbalancedParenthesis { at: usize },

    /// A nested application in argument position, in a dialect whose arguments are plain names.
    FunctionNotSupported { at: usize },

    /// A lowercase-led identifier at formula level, in a dialect whose predicates are uppercase-led.
    PredicateExpected { at: usize },

    /// Tokens left over after a complete formula.
    TrailingInput { at: usize },

    /// An empty string, where a formula was required.
    Empty,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { at, found } => {
                write!(f, "unknown character {found:?} at position {at}")
            }

            Self::UnexpectedToken { at } => write!(f, "unexpected token at position {at}"),

            Self::UnbalancedParenthesis { at } => {
                write!(f, "unbalanced parenthesis at position {at}")
            }

            Self::FunctionNotSupported { at } => write!(
                f,
                "function application at position {at} (not supported by this dialect)"
            ),

            Self::PredicateExpected { at } => write!(
                f,
                "expected an uppercase-led predicate at position {at}"
            ),

            Self::TrailingInput { at } => write!(f, "trailing input at position {at}"),

            Self::Empty => write!(f, "empty formula"),
        }
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to add an empty clause as input.
    EmptyClause,

    /// A clause is missing for the given key.
    Missing,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors due to the state of the context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// Input was added after the search finished.
    ProofComplete,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
