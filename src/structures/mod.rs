/*!
The abstract elements of resolution and their representation.

- [Terms](term) are variables, constants, and function applications.
- [Atoms and literals](literal) are predicate applications, bare or negated.
- [Clauses](clause) are disjunctions of literals.
- [Formulas](formula) are the syntax trees produced by the parser, prior to translation to clauses.
- [Substitutions](substitution) map variables to terms, and are what unification produces.
*/

pub mod clause;
pub mod formula;
pub mod literal;
pub mod substitution;
pub mod term;
