/*!
Formulas --- the syntax trees produced by the parser.

A formula is built over the connectives ¬, ∧, ∨, and →, with predicate applications at the leaves.
Formulas exist only on the way in to a context: the [builder](crate::builder) rewrites each formula to conjunctive normal form and extracts its clauses, and the rest of the library works with clauses alone.

The rewrite is three passes:
1. [Implication elimination](Formula::eliminate_implications): `A → B` becomes `¬A ∨ B`.
2. [Negation normal form](Formula::negation_normal_form): double negations cancel and De Morgan's laws push `¬` down to the atoms.
3. [Distribution](Formula::distribute): `∨` is pushed under `∧` until no disjunction has a conjunct as a child.

Each pass returns a semantically equivalent formula.
*/

use crate::structures::clause::{push_deduplicated, CClause};
use crate::structures::literal::Literal;

/// A formula over ¬, ∧, ∨, and →.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    /// A predicate application, e.g. `P(x, A)`.
    Atom(crate::structures::literal::Atom),

    /// A negation, `¬A`.
    Not(Box<Formula>),

    /// A conjunction, `A ∧ B`.
    And(Box<Formula>, Box<Formula>),

    /// A disjunction, `A ∨ B`.
    Or(Box<Formula>, Box<Formula>),

    /// An implication, `A → B`.
    Implies(Box<Formula>, Box<Formula>),
}

use Formula::*;

/// Creates the negation `¬f`.
pub fn not(f: Formula) -> Formula {
    Not(Box::new(f))
}

/// Creates the conjunction `l ∧ r`.
pub fn and(l: Formula, r: Formula) -> Formula {
    And(Box::new(l), Box::new(r))
}

/// Creates the disjunction `l ∨ r`.
pub fn or(l: Formula, r: Formula) -> Formula {
    Or(Box::new(l), Box::new(r))
}

/// Creates the implication `l → r`.
pub fn implies(l: Formula, r: Formula) -> Formula {
    Implies(Box::new(l), Box::new(r))
}

impl Formula {
    /// Rewrites every implication `A → B` to `¬A ∨ B`, recursively.
    fn eliminate_implications(self) -> Self {
        match self {
            Atom(_) => self,

            Not(f) => not(f.eliminate_implications()),

            And(l, r) => and(l.eliminate_implications(), r.eliminate_implications()),

            Or(l, r) => or(l.eliminate_implications(), r.eliminate_implications()),

            Implies(l, r) => or(
                not(l.eliminate_implications()),
                r.eliminate_implications(),
            ),
        }
    }

    /// Pushes negations down to the atoms.
    ///
    /// Requires implications to have been eliminated.
    fn negation_normal_form(self) -> Self {
        match self {
            And(l, r) => and(l.negation_normal_form(), r.negation_normal_form()),

            Or(l, r) => or(l.negation_normal_form(), r.negation_normal_form()),

            Not(f) => f.negated_normal_form(),

            f => f,
        }
    }

    /// As [negation_normal_form](Formula::negation_normal_form), but of the *negation* of the formula.
    ///
    /// `¬¬A` reduces to `A`, and De Morgan's laws swap the binary connectives.
    fn negated_normal_form(self) -> Self {
        match self {
            And(l, r) => or(l.negated_normal_form(), r.negated_normal_form()),

            Or(l, r) => and(l.negated_normal_form(), r.negated_normal_form()),

            Not(f) => f.negation_normal_form(),

            f => not(f),
        }
    }

    /// Whether the formula is a literal: an atom, or a negated atom.
    fn is_literal(&self) -> bool {
        match self {
            Atom(_) => true,
            Not(f) => matches!(f.as_ref(), Atom(_)),
            _ => false,
        }
    }

    /// Whether the formula is a disjunction of literals.
    fn is_disjunction_of_literals(&self) -> bool {
        match self {
            Or(l, r) => l.is_disjunction_of_literals() && r.is_disjunction_of_literals(),
            f => f.is_literal(),
        }
    }

    /// Whether the formula is a conjunction of disjunctions of literals.
    fn is_cnf(&self) -> bool {
        match self {
            And(l, r) => l.is_cnf() && r.is_cnf(),
            f => f.is_disjunction_of_literals(),
        }
    }

    /// Distributes a disjunction over an immediate conjunct, if any.
    ///
    /// `A ∨ (B ∧ C)` becomes `(A ∨ B) ∧ (A ∨ C)`, and symmetrically.
    fn distribute_node(self) -> Self {
        match self {
            Or(l, r) => match (*l, *r) {
                (a, And(b, c)) => and(or(a.clone(), *b), or(a, *c)),

                (And(b, c), a) => and(or(*b, a.clone()), or(*c, a)),

                (l, r) => or(l, r),
            },

            f => f,
        }
    }

    /// Applies [distribute_node](Formula::distribute_node) at every node of the tree.
    fn distribute_all(self) -> Self {
        match self.distribute_node() {
            Not(f) => not(f.distribute_all()),

            And(l, r) => and(l.distribute_all(), r.distribute_all()),

            Or(l, r) => or(l.distribute_all(), r.distribute_all()),

            f => f,
        }
    }

    /// The formula rewritten to conjunctive normal form.
    pub fn to_cnf(self) -> Self {
        let mut formula = self.eliminate_implications().negation_normal_form();

        while !formula.is_cnf() {
            formula = formula.distribute_all();
        }

        formula
    }

    /// The clauses of a formula in conjunctive normal form, in left-to-right order.
    ///
    /// Duplicate literals within a clause are coalesced, first occurrence first.
    ///
    /// # Panics
    /// If the formula is not in conjunctive normal form.
    /// The builder only calls this on the result of [to_cnf](Formula::to_cnf), so a panic here signals a defect in the rewrite.
    pub fn clauses(self) -> Vec<CClause> {
        let mut clauses = Vec::new();
        self.split_conjuncts(&mut clauses);
        clauses
    }

    fn split_conjuncts(self, clauses: &mut Vec<CClause>) {
        match self {
            And(l, r) => {
                l.split_conjuncts(clauses);
                r.split_conjuncts(clauses);
            }

            f => {
                let mut clause = CClause::new();
                f.collect_literals(&mut clause);
                clauses.push(clause);
            }
        }
    }

    fn collect_literals(self, clause: &mut CClause) {
        match self {
            Or(l, r) => {
                l.collect_literals(clause);
                r.collect_literals(clause);
            }

            Atom(atom) => push_deduplicated(clause, Literal::new(atom, true)),

            Not(f) => match *f {
                Atom(atom) => push_deduplicated(clause, Literal::new(atom, false)),

                f => panic!("negation of a non-atom after CNF translation: {f:?}"),
            },

            f => panic!("non-literal at clause position after CNF translation: {f:?}"),
        }
    }
}
