use resolute::{
    config::Config,
    context::Context,
    reports::Report,
};

fn proved_context(formulas: &str) -> Context {
    let mut ctx = Context::from_config(Config::default());
    ctx.add_formulas(formulas).unwrap();
    assert_eq!(ctx.prove(), Ok(Report::Proved));
    ctx
}

mod used_path {
    use super::*;

    #[test]
    fn initials_come_sorted_and_derived_follow_their_parents() {
        let ctx = proved_context(
            "Human(x) -> Mortal(x), Human(Marcus), Mortal(x) -> ¬Immortal(x), Immortal(Marcus)",
        );

        let path = ctx.proof_path().expect("proof expected");

        assert!(path.initial.windows(2).all(|pair| pair[0] < pair[1]));

        let initial_count = ctx.clause_db.initial_count();
        for (position, key) in path.derived.iter().enumerate() {
            assert!(key.index() > initial_count);

            let db_clause = ctx.clause_db.get(*key).expect("stored clause expected");
            let resolute::db::clause::ClauseSource::Resolution { parents: (a, b), .. } =
                db_clause.source()
            else {
                panic!("derived clause without parents");
            };

            // Each parent is an initial clause, or appears earlier in the path.
            for parent in [a, b] {
                assert!(
                    parent.index() <= initial_count
                        || path.derived[..position].contains(parent),
                    "{parent} out of order in the used path",
                );
            }
        }
    }

    #[test]
    fn dead_ends_are_pruned() {
        // The goal ¬Q(A) resolves against both Q clauses; only the P branch
        // reaches the refutation. The R(A) derivation is logged but pruned
        // from the used path.
        let ctx = proved_context("P(x) ∨ Q(x), R(x) ∨ Q(x), ¬P(A), ¬Q(A)");

        let path = ctx.proof_path().expect("proof expected");

        let logged: Vec<_> = ctx.steps().iter().filter_map(|step| step.derived).collect();
        assert!(path.derived.len() < logged.len());
        assert!(path.derived.iter().all(|key| logged.contains(key)));

        use resolute::structures::clause::Clause;
        for key in &path.derived {
            let db_clause = ctx.clause_db.get(*key).expect("stored clause expected");
            assert!(
                !db_clause.clause().as_string().contains('R'),
                "an R clause survived ancestor pruning",
            );
        }
    }

    #[test]
    fn rendered_lines_cover_the_whole_path() {
        let ctx = proved_context("P(x) ∨ Q(x), ¬P(A), ¬Q(A)");

        let path = ctx.proof_path().expect("proof expected");
        let lines = ctx.proof_lines();

        assert_eq!(
            lines.len(),
            path.initial.len() + path.derived.len() + 1,
        );

        for (line, key) in lines.iter().zip(&path.initial) {
            assert!(line.starts_with(&format!("Initial {key}: ")));
        }

        assert!(lines.last().expect("a terminal line").ends_with("-> □ (empty clause)"));
    }

    #[test]
    fn trace_reports_the_step_count_with_agreement() {
        let one = proved_context("P, ¬P");
        assert!(one
            .trace_lines()
            .iter()
            .any(|line| line == "Formula proved in 1 step"));

        let several = proved_context("P(x) ∨ Q(x), ¬P(A), ¬Q(A)");
        assert!(several
            .trace_lines()
            .iter()
            .any(|line| line == "Formula proved in 2 steps"));
    }

    #[test]
    fn initial_simplification_is_reported() {
        // P ∨ ¬P is a tautology and P ∨ Q is subsumed by the unit P.
        let mut ctx = Context::from_config(Config::default());
        ctx.add_formulas("P ∨ ¬P, P ∨ Q, P, ¬P").unwrap();

        assert_eq!(ctx.prove(), Ok(Report::Proved));
        assert_eq!(ctx.counters.initial_removed, 2);
        assert_eq!(ctx.clause_db.initial_count(), 2);

        let trace = ctx.trace_lines();
        assert!(trace
            .iter()
            .any(|line| line == "Removed tautologies/subsumed clauses: 2"));
        // Survivors are renumbered consecutively, in input order.
        assert!(trace.iter().any(|line| line == "C1: P"));
        assert!(trace.iter().any(|line| line == "C2: ¬P"));
    }
}
