use resolute::procedures::resolution::{rename_apart, resolvents};
use resolute::procedures::subsumption::{is_tautology, subsumes};
use resolute::structures::clause::Clause;
use resolute::structures::literal::{Atom, Literal};
use resolute::structures::term::Term;

fn var(name: &str) -> Term {
    Term::Variable(name.to_string())
}

fn con(name: &str) -> Term {
    Term::Constant(name.to_string())
}

fn pos(predicate: &str, terms: Vec<Term>) -> Literal {
    Literal::new(Atom::new(predicate, terms), true)
}

fn neg(predicate: &str, terms: Vec<Term>) -> Literal {
    Literal::new(Atom::new(predicate, terms), false)
}

mod resolvent_generation {
    use super::*;

    #[test]
    fn complementary_units_resolve_to_the_empty_clause() {
        let produced = resolvents(&[pos("P", vec![])], &[neg("P", vec![])]);

        assert_eq!(produced.len(), 1);
        assert!(produced[0].0.is_empty());
        assert!(produced[0].1.is_empty());
    }

    #[test]
    fn remainder_carries_the_unifier() {
        // P(x) ∨ Q(x) against ¬P(A): the remainder is Q(A).
        let left = vec![pos("P", vec![var("x")]), pos("Q", vec![var("x")])];
        let right = vec![neg("P", vec![con("A")])];

        let produced = resolvents(&left, &right);

        assert_eq!(produced.len(), 1);
        assert_eq!(produced[0].0, vec![pos("Q", vec![con("A")])]);
    }

    #[test]
    fn every_complementary_pair_is_scanned() {
        // Two resolvable pairs, emitted in scan order.
        let left = vec![pos("P", vec![]), pos("Q", vec![])];
        let right = vec![neg("P", vec![]), neg("Q", vec![])];

        let produced = resolvents(&left, &right);

        assert_eq!(produced.len(), 2);
        assert_eq!(produced[0].0, vec![pos("Q", vec![]), neg("Q", vec![])]);
        assert_eq!(produced[1].0, vec![pos("P", vec![]), neg("P", vec![])]);
    }

    #[test]
    fn duplicates_coalesce_in_the_resolvent() {
        // R(A) arrives from both sides of the resolution.
        let left = vec![pos("P", vec![]), pos("R", vec![con("A")])];
        let right = vec![neg("P", vec![]), pos("R", vec![con("A")])];

        let produced = resolvents(&left, &right);

        assert_eq!(produced.len(), 1);
        assert_eq!(produced[0].0, vec![pos("R", vec![con("A")])]);
    }

    #[test]
    fn shared_variables_are_renamed_apart() {
        let left = vec![pos("P", vec![var("x")])];
        let right = vec![neg("P", vec![Term::Function("f".to_string(), vec![var("x")])])];

        // Without renaming the occurs check would reject the pair.
        let produced = resolvents(&left, &right);

        assert_eq!(produced.len(), 1);
        assert!(produced[0].0.is_empty());
    }

    #[test]
    fn renaming_leaves_disjoint_clauses_alone() {
        let left = vec![pos("P", vec![var("x")])];
        let right = vec![neg("Q", vec![var("y")])];

        assert_eq!(rename_apart(&left, &right), right);
    }

    #[test]
    fn renaming_picks_fresh_primes() {
        let left = vec![pos("P", vec![var("x"), var("x'")])];
        let right = vec![pos("Q", vec![var("x")])];

        let renamed = rename_apart(&left, &right);

        // `x'` is taken by the left clause, so the rename skips to `x''`.
        assert_eq!(renamed, vec![pos("Q", vec![var("x''")])]);
    }
}

mod filters {
    use super::*;

    #[test]
    fn tautologies_are_recognised_up_to_unification() {
        assert!(is_tautology(&[pos("P", vec![var("x")]), neg("P", vec![con("A")])]));
        assert!(!is_tautology(&[pos("P", vec![]), pos("Q", vec![])]));
        assert!(!is_tautology(&[pos("P", vec![con("A")]), neg("P", vec![con("B")])]));
        assert!(!is_tautology(&[]));
    }

    #[test]
    fn shorter_clauses_subsume_their_extensions() {
        let unit = vec![pos("P", vec![var("x")])];
        let wide = vec![pos("P", vec![con("A")]), pos("Q", vec![])];

        assert!(subsumes(&unit, &wide));
        assert!(!subsumes(&wide, &unit));
    }

    #[test]
    fn polarity_blocks_subsumption() {
        let positive = vec![pos("P", vec![var("x")])];
        let negative = vec![neg("P", vec![var("x")])];

        assert!(!subsumes(&positive, &negative));
    }

    #[test]
    fn every_clause_subsumes_itself() {
        let clause = vec![pos("P", vec![var("x")]), neg("Q", vec![con("A")])];

        assert!(subsumes(&clause, &clause));
    }

    #[test]
    fn the_empty_clause_subsumes_nothing() {
        assert!(!subsumes(&[], &[pos("P", vec![])]));
    }
}

mod store_invariants {
    use resolute::config::Config;
    use resolute::context::Context;
    use resolute::reports::Report;

    use super::*;

    // A search with enough derivations to exercise every filter.
    fn searched_context() -> Context {
        let mut ctx = Context::from_config(Config::default());
        ctx.add_formulas(
            "Human(x) -> Mortal(x), Human(Marcus), Mortal(x) -> ¬Immortal(x), Immortal(Marcus)",
        )
        .unwrap();
        let _ = ctx.prove();
        ctx
    }

    #[test]
    fn the_search_succeeds() {
        assert_eq!(searched_context().report(), Report::Proved);
    }

    #[test]
    fn no_live_clause_is_a_tautology() {
        let ctx = searched_context();

        for db_clause in ctx.clause_db.live() {
            assert!(!is_tautology(db_clause.clause()));
        }
    }

    #[test]
    fn no_live_clause_subsumes_another() {
        let ctx = searched_context();

        for a in ctx.clause_db.live() {
            for b in ctx.clause_db.live() {
                if a.key() == b.key() {
                    continue;
                }
                assert!(
                    !subsumes(a.clause(), b.clause()),
                    "{} subsumes {}",
                    a.clause().as_string(),
                    b.clause().as_string(),
                );
            }
        }
    }

    #[test]
    fn every_step_names_stored_parents() {
        let ctx = searched_context();

        for step in ctx.steps() {
            let (a, b) = step.parents;
            assert!(ctx.clause_db.get(a).is_ok());
            assert!(ctx.clause_db.get(b).is_ok());

            // Parents predate the derived clause.
            if let Some(derived) = step.derived {
                assert!(a.index() < derived.index());
                assert!(b.index() < derived.index());
            }
        }
    }
}
