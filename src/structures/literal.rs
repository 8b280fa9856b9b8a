/*!
Atoms and literals.

An [Atom] is a predicate symbol applied to a (possibly empty) sequence of terms.
A [Literal] is an atom together with a polarity: `P(x, A)` or `¬P(x, A)`.

The pair of a positive and a negative literal on the same predicate symbol is what resolution resolves on.
*/

use crate::structures::term::{Symbol, Term};

/// A predicate application, e.g. `Mortal(x)` or the propositional `Rains`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom {
    /// The predicate symbol.
    pub predicate: Symbol,

    /// The argument terms, in order. May be empty.
    pub terms: Vec<Term>,
}

impl Atom {
    pub fn new(predicate: impl Into<Symbol>, terms: Vec<Term>) -> Self {
        Self {
            predicate: predicate.into(),
            terms,
        }
    }

    /// Whether any argument of the atom mentions a constant.
    pub fn mentions_constant(&self) -> bool {
        self.terms.iter().any(Term::mentions_constant)
    }

    /// Extends `variables` with every variable of the atom, in order of occurrence.
    pub fn collect_variables(&self, variables: &mut Vec<Symbol>) {
        for term in &self.terms {
            term.collect_variables(variables);
        }
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.predicate)?;
        if !self.terms.is_empty() {
            write!(f, "(")?;
            for (index, term) in self.terms.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{term}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// An atom with a polarity.
///
/// The canonical representation of both a predicate application and its negation.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    atom: Atom,

    polarity: bool,
}

impl Literal {
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    /// The polarity of the literal: `true` for `P(…)`, `false` for `¬P(…)`.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The literal with its polarity flipped.
    pub fn negated(&self) -> Self {
        Self {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    /// Whether `self` and `other` have opposite polarities on the same predicate symbol.
    ///
    /// A complementary pair is a *candidate* for resolution; whether the pair resolves is a question of [unification](crate::procedures::unification).
    pub fn complements(&self, other: &Self) -> bool {
        self.polarity != other.polarity && self.atom.predicate == other.atom.predicate
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.polarity {
            write!(f, "¬")?;
        }
        write!(f, "{}", self.atom)
    }
}
