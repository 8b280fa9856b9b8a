use resolute::{
    config::{Config, Dialect},
    context::Context,
    reports::Report,
    types::err::{ErrorKind, ParseError},
};

fn lowercase_context() -> Context {
    Context::from_config(Config::default())
}

fn single_letter_context() -> Context {
    Context::from_config(Config {
        dialect: Dialect::SingleLetter,
        ..Config::default()
    })
}

mod lexical {
    use super::*;

    #[test]
    fn unknown_character_reports_its_position() {
        let mut ctx = lowercase_context();

        assert_eq!(
            ctx.add_formulas("P @ Q"),
            Err(ErrorKind::Parse(ParseError::UnknownCharacter {
                at: 2,
                found: '@'
            }))
        );
    }

    #[test]
    fn bare_dash_is_not_an_implication() {
        let mut ctx = lowercase_context();

        assert!(matches!(
            ctx.add_formulas("P - Q"),
            Err(ErrorKind::Parse(ParseError::UnknownCharacter { found: '-', .. }))
        ));
    }

    #[test]
    fn ascii_and_unicode_connectives_agree() {
        for text in ["!P | Q & (P -> Q)", "¬P ∨ Q ∧ (P → Q)"] {
            let mut ctx = lowercase_context();
            ctx.add_formulas(text).unwrap();
        }
    }

    #[test]
    fn cyrillic_identifiers() {
        let mut ctx = lowercase_context();

        ctx.add_formulas("Смертен(сократ), ¬Смертен(сократ)").unwrap();

        assert_eq!(ctx.prove(), Ok(Report::Proved));
    }
}

mod grammar {
    use super::*;

    #[test]
    fn unbalanced_parentheses() {
        let mut ctx = lowercase_context();
        assert!(matches!(
            ctx.add_formulas("(P ∨ Q"),
            Err(ErrorKind::Parse(ParseError::UnbalancedParenthesis { .. }))
        ));

        let mut ctx = lowercase_context();
        assert!(matches!(
            ctx.add_formulas("P ∨ Q)"),
            Err(ErrorKind::Parse(ParseError::UnbalancedParenthesis { .. }))
        ));
    }

    #[test]
    fn trailing_input() {
        let mut ctx = lowercase_context();

        assert!(matches!(
            ctx.add_formulas("P Q"),
            Err(ErrorKind::Parse(ParseError::TrailingInput { .. }))
        ));
    }

    #[test]
    fn empty_part() {
        let mut ctx = lowercase_context();

        assert_eq!(
            ctx.add_formulas("P, , Q"),
            Err(ErrorKind::Parse(ParseError::Empty))
        );
    }

    #[test]
    fn implication_is_right_associative() {
        // A -> B -> C reads as A -> (B -> C): false only when A true, B true, C false.
        let mut ctx = lowercase_context();

        ctx.add_formulas("A -> B -> C, A, B, ¬C").unwrap();

        assert_eq!(ctx.prove(), Ok(Report::Proved));
    }

    #[test]
    fn commas_inside_arguments_do_not_split() {
        let mut ctx = lowercase_context();

        ctx.add_formulas("P(x, y), ¬P(A, B)").unwrap();

        assert_eq!(ctx.prove(), Ok(Report::Proved));
    }
}

mod dialects {
    use super::*;

    #[test]
    fn lowercase_dialect_rejects_function_terms() {
        let mut ctx = lowercase_context();

        assert!(matches!(
            ctx.add_formulas("P(f(x))"),
            Err(ErrorKind::Parse(ParseError::FunctionNotSupported { .. }))
        ));
    }

    #[test]
    fn lowercase_dialect_classifies_by_first_letter() {
        let mut ctx = lowercase_context();

        // `word` is a variable (lowercase-led, any length); `Word` is a constant.
        ctx.add_formulas("P(word), ¬P(Word)").unwrap();

        assert_eq!(ctx.prove(), Ok(Report::Proved));
    }

    #[test]
    fn single_letter_dialect_requires_uppercase_predicates() {
        let mut ctx = single_letter_context();

        assert!(matches!(
            ctx.add_formulas("p(x)"),
            Err(ErrorKind::Parse(ParseError::PredicateExpected { .. }))
        ));
    }

    #[test]
    fn single_letter_dialect_treats_words_as_constants() {
        let mut ctx = single_letter_context();

        // `marcus` is multi-character, hence a constant; `x` is a variable.
        ctx.add_formulas("Man(marcus), ¬Man(x)").unwrap();

        assert_eq!(ctx.prove(), Ok(Report::Proved));

        let path = ctx.proof_path().expect("proof expected");
        assert_eq!(path.terminal_unifier.to_string(), "{x/marcus}");
    }

    #[test]
    fn single_letter_dialect_accepts_nested_functions() {
        let mut ctx = single_letter_context();

        ctx.add_formulas("P(f(g(x), A)), ¬P(f(g(B), A))").unwrap();

        assert_eq!(ctx.prove(), Ok(Report::Proved));
    }
}
