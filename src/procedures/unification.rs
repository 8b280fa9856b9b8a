/*!
Most general unifiers.

[unify] extends a substitution to a most general unifier of two terms, or reports that none exists.
Failure is a value ([None]), never an error: failed unifications are the common case in the inner loop of a search.

The procedure binds only unbound variables, after chasing existing bindings, and applies the occurs check before every binding.
As a consequence the returned substitution never maps a variable to a term containing that variable, directly or through other bindings, and substitution application terminates.
*/

use crate::misc::log::targets::{self};
use crate::structures::literal::Atom;
use crate::structures::substitution::Substitution;
use crate::structures::term::Term;

/// Whether `variable` occurs in `term` once `substitution` has been applied to `term`.
fn occurs(variable: &str, term: &Term, substitution: &Substitution) -> bool {
    substitution.apply_to_term(term).mentions_variable(variable)
}

/// Extends `substitution` to a most general unifier of `x` and `y`.
///
/// Returns [None] if no unifier exists.
pub fn unify(x: &Term, y: &Term, substitution: Substitution) -> Option<Substitution> {
    // Structurally identical terms unify under the substitution as given.
    if x == y {
        return Some(substitution);
    }

    match (x, y) {
        (Term::Variable(v), _) => {
            if let Some(bound) = substitution.binding(v) {
                let bound = bound.clone();
                return unify(&bound, y, substitution);
            }

            if let Term::Variable(w) = y {
                if let Some(bound) = substitution.binding(w) {
                    let bound = bound.clone();
                    return unify(x, &bound, substitution);
                }
            }

            if occurs(v, y, &substitution) {
                log::trace!(target: targets::UNIFICATION, "Occurs check: {v} in {y}");
                return None;
            }

            log::trace!(target: targets::UNIFICATION, "Binding {v} to {y}");
            let mut extended = substitution;
            extended.bind(v.clone(), y.clone());
            Some(extended)
        }

        (_, Term::Variable(_)) => unify(y, x, substitution),

        (Term::Function(f, f_args), Term::Function(g, g_args)) => {
            if f != g || f_args.len() != g_args.len() {
                return None;
            }

            let mut substitution = substitution;
            for (f_arg, g_arg) in f_args.iter().zip(g_args) {
                substitution = unify(f_arg, g_arg, substitution)?;
            }
            Some(substitution)
        }

        // Distinct constants, or mismatched kinds.
        _ => None,
    }
}

/// Extends `substitution` to a most general unifier of two atoms.
///
/// Atoms unify when their predicate symbols and arities agree and their arguments unify pairwise, left to right.
pub fn unify_atoms(x: &Atom, y: &Atom, substitution: Substitution) -> Option<Substitution> {
    if x.predicate != y.predicate || x.terms.len() != y.terms.len() {
        return None;
    }

    let mut substitution = substitution;
    for (x_term, y_term) in x.terms.iter().zip(&y.terms) {
        substitution = unify(x_term, y_term, substitution)?;
    }
    Some(substitution)
}
