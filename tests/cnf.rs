use std::collections::BTreeSet;

use resolute::structures::formula::{self, Formula};
use resolute::structures::literal::Atom;

fn atom(name: &str) -> Formula {
    Formula::Atom(Atom::new(name, vec![]))
}

/// Evaluates a formula under an assignment to its (propositional) atoms.
fn eval(formula: &Formula, assignment: &BTreeSet<String>) -> bool {
    match formula {
        Formula::Atom(a) => assignment.contains(&a.predicate),
        Formula::Not(f) => !eval(f, assignment),
        Formula::And(l, r) => eval(l, assignment) && eval(r, assignment),
        Formula::Or(l, r) => eval(l, assignment) || eval(r, assignment),
        Formula::Implies(l, r) => !eval(l, assignment) || eval(r, assignment),
    }
}

/// The predicate symbols of a formula.
fn symbols(formula: &Formula, into: &mut BTreeSet<String>) {
    match formula {
        Formula::Atom(a) => {
            into.insert(a.predicate.clone());
        }
        Formula::Not(f) => symbols(f, into),
        Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) => {
            symbols(l, into);
            symbols(r, into);
        }
    }
}

/// Checks `formula` and its clause translation agree on every assignment.
fn assert_equivalent(formula: Formula) {
    let mut names = BTreeSet::new();
    symbols(&formula, &mut names);
    let names: Vec<String> = names.into_iter().collect();

    let clauses = formula.clone().to_cnf().clauses();

    for mask in 0..(1_u32 << names.len()) {
        let assignment: BTreeSet<String> = names
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, name)| name.clone())
            .collect();

        let direct = eval(&formula, &assignment);

        let translated = clauses.iter().all(|clause| {
            clause.iter().any(|literal| {
                assignment.contains(&literal.atom().predicate) == literal.polarity()
            })
        });

        assert_eq!(
            direct, translated,
            "disagreement under {assignment:?} for {formula:?}"
        );
    }
}

mod translation {
    use super::*;

    #[test]
    fn implication_becomes_a_clause() {
        let clauses = formula::implies(atom("A"), atom("B")).to_cnf().clauses();

        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].len(), 2);
        assert!(!clauses[0][0].polarity());
        assert!(clauses[0][1].polarity());
    }

    #[test]
    fn double_negation_cancels() {
        let clauses = formula::not(formula::not(atom("A"))).to_cnf().clauses();

        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].len(), 1);
        assert!(clauses[0][0].polarity());
    }

    #[test]
    fn distribution_reaches_fixpoint() {
        // A ∨ (B ∧ (C ∨ (D ∧ E))) needs repeated distribution.
        let nested = formula::or(
            atom("A"),
            formula::and(
                atom("B"),
                formula::or(atom("C"), formula::and(atom("D"), atom("E"))),
            ),
        );

        // clauses() panics if any non-literal survives the rewrite.
        let clauses = nested.to_cnf().clauses();
        assert!(clauses.iter().all(|clause| !clause.is_empty()));
    }

    #[test]
    fn duplicate_literals_coalesce() {
        let clauses = formula::or(atom("A"), atom("A")).to_cnf().clauses();

        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].len(), 1);
    }

    #[test]
    fn equivalence_on_a_propositional_oracle() {
        let cases = [
            formula::implies(atom("A"), atom("B")),
            formula::not(formula::and(atom("A"), atom("B"))),
            formula::not(formula::or(atom("A"), formula::not(atom("B")))),
            formula::or(atom("A"), formula::and(atom("B"), atom("C"))),
            formula::and(
                formula::or(atom("A"), formula::and(atom("B"), atom("C"))),
                formula::implies(formula::not(atom("A")), atom("C")),
            ),
            formula::implies(
                formula::implies(atom("A"), atom("B")),
                formula::implies(formula::not(atom("B")), formula::not(atom("A"))),
            ),
            formula::not(formula::implies(atom("A"), formula::and(atom("B"), atom("C")))),
        ];

        for case in cases {
            assert_equivalent(case);
        }
    }
}
