/*!
Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.

The canonical representation of a clause is as a vector of literals.

- Clauses are duplicate free: a literal appears at most once, and insertion order is preserved.
- The empty clause (displayed `□`) is always false, and deriving it completes a refutation.

```rust
# use resolute::structures::clause::Clause;
# use resolute::structures::literal::{Atom, Literal};
# use resolute::structures::term::Term;
let clause = vec![
    Literal::new(Atom::new("P", vec![Term::Variable("x".to_string())]), true),
    Literal::new(Atom::new("Q", vec![Term::Constant("A".to_string())]), false),
];

assert_eq!(clause.size(), 2);
assert!(clause.mentions_constant());
assert_eq!(clause.as_string(), "P(x) ∨ ¬Q(A)");
```
*/

use crate::structures::literal::Literal;
use crate::structures::term::Symbol;

/// The canonical implementation of a clause.
pub type CClause = Vec<Literal>;

/// The clause trait.
pub trait Clause {
    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over the literals of the clause, in order.
    fn literals(&self) -> std::slice::Iter<'_, Literal>;

    /// Whether any literal of the clause mentions a constant.
    ///
    /// Used as the secondary key of the search heuristic (see [ConstantPreference](crate::config::ConstantPreference)).
    fn mentions_constant(&self) -> bool;

    /// The variables of the clause, in order of first occurrence.
    fn variables(&self) -> Vec<Symbol>;

    /// A string of the clause: literals joined by ` ∨ `, with `□` for the empty clause.
    fn as_string(&self) -> String;
}

impl Clause for [Literal] {
    fn size(&self) -> usize {
        self.len()
    }

    fn literals(&self) -> std::slice::Iter<'_, Literal> {
        self.iter()
    }

    fn mentions_constant(&self) -> bool {
        self.iter().any(|literal| literal.atom().mentions_constant())
    }

    fn variables(&self) -> Vec<Symbol> {
        let mut variables = Vec::new();
        for literal in self {
            literal.atom().collect_variables(&mut variables);
        }
        variables
    }

    fn as_string(&self) -> String {
        if self.is_empty() {
            return "□".to_string();
        }

        let mut string = String::new();
        for (index, literal) in self.iter().enumerate() {
            if index > 0 {
                string.push_str(" ∨ ");
            }
            string.push_str(&literal.to_string());
        }
        string
    }
}

impl Clause for CClause {
    fn size(&self) -> usize {
        self.as_slice().size()
    }

    fn literals(&self) -> std::slice::Iter<'_, Literal> {
        self.as_slice().literals()
    }

    fn mentions_constant(&self) -> bool {
        self.as_slice().mentions_constant()
    }

    fn variables(&self) -> Vec<Symbol> {
        self.as_slice().variables()
    }

    fn as_string(&self) -> String {
        self.as_slice().as_string()
    }
}

/// Pushes `literal` unless an equal literal is already present.
///
/// The factoring step of resolvent generation, and the guard on clause extraction from a formula.
pub fn push_deduplicated(clause: &mut CClause, literal: Literal) {
    if !clause.contains(&literal) {
        clause.push(literal);
    }
}
