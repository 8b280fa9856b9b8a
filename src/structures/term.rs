/*!
Terms --- variables, constants, and function applications.

Terms are immutable values with structural equality.
The classification of an identifier as a variable or a constant is decided by the parser (per the configured [dialect](crate::config::Dialect)) and is stable thereafter.

The term type is a closed sum, and terms are examined by pattern matching throughout the library.
*/

/// The name of a variable, constant, function, or predicate.
pub type Symbol = String;

/// A term of first-order logic.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// A variable, e.g. `x`.
    Variable(Symbol),

    /// A constant, e.g. `Zero` or `socrates`.
    Constant(Symbol),

    /// A function symbol applied to one or more argument terms, e.g. `f(x, Zero)`.
    Function(Symbol, Vec<Term>),
}

impl Term {
    /// Whether `variable` occurs at any position of the term.
    pub fn mentions_variable(&self, variable: &str) -> bool {
        match self {
            Self::Variable(v) => v == variable,

            Self::Constant(_) => false,

            Self::Function(_, args) => args.iter().any(|arg| arg.mentions_variable(variable)),
        }
    }

    /// Whether any position of the term is a constant.
    pub fn mentions_constant(&self) -> bool {
        match self {
            Self::Variable(_) => false,

            Self::Constant(_) => true,

            Self::Function(_, args) => args.iter().any(Term::mentions_constant),
        }
    }

    /// Extends `variables` with every variable of the term, in order of occurrence.
    pub fn collect_variables(&self, variables: &mut Vec<Symbol>) {
        match self {
            Self::Variable(v) => {
                if !variables.iter().any(|seen| seen == v) {
                    variables.push(v.clone());
                }
            }

            Self::Constant(_) => {}

            Self::Function(_, args) => {
                for arg in args {
                    arg.collect_variables(variables);
                }
            }
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(v) => write!(f, "{v}"),

            Self::Constant(c) => write!(f, "{c}"),

            Self::Function(head, args) => {
                write!(f, "{head}(")?;
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}
