/*!
Tautology elimination and subsumption.

Both tests keep the clause store lean:
- A [tautology](is_tautology) contains a literal and a unifiable complement, is always true, and so contributes nothing to a refutation.
- A [subsumed](subsumes) clause is implied by a clause already in the store, and so is redundant.

The saturation loop applies the tests in three places: over the initial set ([simplify_initial]), forward against each fresh resolvent, and backward from each retained resolvent over the store.
*/

use crate::misc::log::targets::{self};
use crate::procedures::unification::unify_atoms;
use crate::structures::clause::{CClause, Clause};
use crate::structures::literal::Literal;
use crate::structures::substitution::Substitution;

/// Whether the clause contains a literal and a unifiable complement.
pub fn is_tautology(clause: &[Literal]) -> bool {
    for (i, first) in clause.iter().enumerate() {
        for second in &clause[i + 1..] {
            if !first.complements(second) {
                continue;
            }

            if unify_atoms(first.atom(), second.atom(), Substitution::new()).is_some() {
                return true;
            }
        }
    }

    false
}

/// Whether `subsumer` subsumes `subsumed`: every literal of `subsumer` unifies with some literal of `subsumed` of the same polarity.
///
/// A clause subsumes itself.
/// The empty clause subsumes nothing (it never coexists with other clauses: deriving it ends the search).
pub fn subsumes(subsumer: &[Literal], subsumed: &[Literal]) -> bool {
    if subsumer.is_empty() && !subsumed.is_empty() {
        return false;
    }

    subsumer.iter().all(|own| {
        subsumed.iter().any(|other| {
            own.polarity() == other.polarity()
                && unify_atoms(own.atom(), other.atom(), Substitution::new()).is_some()
        })
    })
}

/// Removes tautologies and forward-subsumed clauses from an initial clause set.
///
/// Subsumption is checked greedily, shortest clauses first (shorter clauses are the more likely subsumers), but survivors are returned in input order.
/// Returns the survivors and the number of clauses removed.
pub fn simplify_initial(clauses: Vec<CClause>) -> (Vec<CClause>, usize) {
    let before = clauses.len();

    let clauses: Vec<CClause> = clauses
        .into_iter()
        .filter(|clause| {
            let tautology = is_tautology(clause);
            if tautology {
                log::debug!(target: targets::SUBSUMPTION, "Tautology dropped: {}", clause.as_string());
            }
            !tautology
        })
        .collect();

    let mut order: Vec<usize> = (0..clauses.len()).collect();
    order.sort_by_key(|&index| clauses[index].size());

    let mut kept: Vec<usize> = Vec::with_capacity(clauses.len());
    for index in order {
        let subsumed = kept
            .iter()
            .any(|&keeper| subsumes(&clauses[keeper], &clauses[index]));

        if subsumed {
            log::debug!(target: targets::SUBSUMPTION, "Subsumed at input: {}", clauses[index].as_string());
        } else {
            kept.push(index);
        }
    }

    kept.sort_unstable();
    let survivors: Vec<CClause> = kept.into_iter().map(|index| clauses[index].clone()).collect();

    let removed = before - survivors.len();
    (survivors, removed)
}
