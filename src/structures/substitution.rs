/*!
Substitutions --- finite mappings from variables to terms.

A substitution is built incrementally during [unification](crate::procedures::unification), without eager composition.
As a consequence the raw map may contain chains (`x ↦ y, y ↦ A`), and application chases those chains at lookup: a variable resolves to the fixed point of its chain, and a non-variable reached by chasing is itself rewritten.
Application is therefore idempotent: applying a substitution twice yields the same result as applying it once.

Once returned as a most general unifier a substitution is treated as immutable.
*/

use std::collections::BTreeMap;

use crate::structures::clause::CClause;
use crate::structures::literal::{Atom, Literal};
use crate::structures::term::{Symbol, Term};

/// A finite mapping from variable names to terms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    map: BTreeMap<Symbol, Term>,
}

impl Substitution {
    /// The empty substitution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the substitution has no bindings.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The term bound to `variable`, if any.
    pub fn binding(&self, variable: &str) -> Option<&Term> {
        self.map.get(variable)
    }

    /// Binds `variable` to `term`.
    ///
    /// The caller is responsible for the occurs check; see [unify](crate::procedures::unification::unify).
    pub fn bind(&mut self, variable: Symbol, term: Term) {
        self.map.insert(variable, term);
    }

    /// An iterator over the bindings, ordered by variable name.
    pub fn bindings(&self) -> impl Iterator<Item = (&Symbol, &Term)> {
        self.map.iter()
    }

    /// The term `variable` resolves to: the fixed point of the variable chain from `variable`, rewritten.
    fn resolve(&self, variable: &str) -> Term {
        let mut name = variable;
        loop {
            match self.map.get(name) {
                Some(Term::Variable(next)) if next != name => name = next,

                Some(term) => return self.apply_to_term(term),

                None => return Term::Variable(name.to_string()),
            }
        }
    }

    /// The term with the substitution applied.
    pub fn apply_to_term(&self, term: &Term) -> Term {
        if self.map.is_empty() {
            return term.clone();
        }

        match term {
            Term::Variable(v) => self.resolve(v),

            Term::Constant(_) => term.clone(),

            Term::Function(head, args) => Term::Function(
                head.clone(),
                args.iter().map(|arg| self.apply_to_term(arg)).collect(),
            ),
        }
    }

    /// The atom with the substitution applied to each argument.
    pub fn apply_to_atom(&self, atom: &Atom) -> Atom {
        Atom {
            predicate: atom.predicate.clone(),
            terms: atom
                .terms
                .iter()
                .map(|term| self.apply_to_term(term))
                .collect(),
        }
    }

    /// The literal with the substitution applied to its atom.
    pub fn apply_to_literal(&self, literal: &Literal) -> Literal {
        Literal::new(self.apply_to_atom(literal.atom()), literal.polarity())
    }

    /// The clause with the substitution applied to each literal, duplicates coalesced.
    pub fn apply_to_clause(&self, clause: &[Literal]) -> CClause {
        let mut applied = CClause::with_capacity(clause.len());
        for literal in clause {
            let literal = self.apply_to_literal(literal);
            if !applied.contains(&literal) {
                applied.push(literal);
            }
        }
        applied
    }
}

impl std::fmt::Display for Substitution {
    /// Bindings as `{x/A, y/f(z)}`, ordered by variable name.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, (variable, term)) in self.map.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{variable}/{term}")?;
        }
        write!(f, "}}")
    }
}
