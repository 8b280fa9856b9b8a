/*!
Resolvent generation.

Given clauses `C1` and `C2`, every pair of a positive literal from one and a negative literal from the other on the same predicate symbol is a candidate.
For each candidate whose atoms unify, the resolvent is the union of the remaining literals of both clauses under the unifier, with duplicates coalesced (the factoring step, performed post-resolution).

Variable names are scoped per clause: an `x` in `C1` and an `x` in `C2` are logically distinct variables.
Before scanning, [rename_apart] renames the colliding variables of the second clause to fresh primed names, so the unifier never conflates the two.
This matters even for self-complementary patterns such as `P(x)` against `¬P(f(x))`, which resolve once renamed and fail the occurs check otherwise.
*/

use std::collections::HashSet;

use crate::misc::log::targets::{self};
use crate::procedures::unification::unify_atoms;
use crate::structures::clause::{CClause, Clause};
use crate::structures::literal::Literal;
use crate::structures::substitution::Substitution;
use crate::structures::term::Term;

/// A copy of `clause` with every variable it shares with `reference` renamed to a fresh primed name.
///
/// Fresh names are the original with `'` appended, repeated until the name collides with nothing in either clause.
pub fn rename_apart(reference: &[Literal], clause: &[Literal]) -> CClause {
    let mut taken: HashSet<String> = reference.variables().into_iter().collect();
    let shared: Vec<String> = clause
        .variables()
        .into_iter()
        .filter(|variable| taken.contains(variable))
        .collect();

    if shared.is_empty() {
        return clause.to_vec();
    }

    for variable in clause.variables() {
        taken.insert(variable);
    }

    let mut renaming = Substitution::new();
    for variable in shared {
        let mut fresh = format!("{variable}'");
        while taken.contains(&fresh) {
            fresh.push('\'');
        }
        taken.insert(fresh.clone());

        log::trace!(target: targets::RESOLUTION, "Renaming {variable} to {fresh}");
        renaming.bind(variable, Term::Variable(fresh));
    }

    renaming.apply_to_clause(clause)
}

/// The resolvents of `c1` and `c2`, each paired with the unifier it was formed under.
///
/// Literal pairs are scanned in clause order and resolvents are emitted in the order produced.
/// Two complementary unit clauses yield the empty clause.
pub fn resolvents(c1: &[Literal], c2: &[Literal]) -> Vec<(CClause, Substitution)> {
    let c2 = rename_apart(c1, c2);

    let mut produced = Vec::new();

    for (i, first) in c1.iter().enumerate() {
        for (j, second) in c2.iter().enumerate() {
            if !first.complements(second) {
                continue;
            }

            let (positive, negative) = match first.polarity() {
                true => (first, second),
                false => (second, first),
            };

            let Some(unifier) = unify_atoms(positive.atom(), negative.atom(), Substitution::new())
            else {
                continue;
            };

            let mut resolvent = CClause::with_capacity(c1.len() + c2.len() - 2);
            for (k, literal) in c1.iter().enumerate() {
                if k != i {
                    let literal = unifier.apply_to_literal(literal);
                    if !resolvent.contains(&literal) {
                        resolvent.push(literal);
                    }
                }
            }
            for (k, literal) in c2.iter().enumerate() {
                if k != j {
                    let literal = unifier.apply_to_literal(literal);
                    if !resolvent.contains(&literal) {
                        resolvent.push(literal);
                    }
                }
            }

            produced.push((resolvent, unifier));
        }
    }

    produced
}
