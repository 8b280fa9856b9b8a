/*!
Configuration of a context.

All configuration for a context is fixed when the context is created, and a search is a pure function of the input and the configuration.

Three knobs are supported:
- The [Dialect], which decides how identifiers are classified during parsing.
- The [ConstantPreference], the secondary key of the clause-ordering heuristic.
- The step limit, a bound on the number of recorded derivations.
*/

use serde::Serialize;

/// Default configuration values.
pub mod defaults {
    /// The default bound on recorded derivations.
    pub const STEP_LIMIT: usize = 1_000;
}

/// How identifiers are classified as variables, constants, functions, and predicates.
///
/// Classification happens once, at parse time, and is determined by capitalization and arity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Dialect {
    /// Any lowercase-led identifier is a variable.
    ///
    /// Uppercase-led identifiers are constants in argument position, and predicates at formula level.
    /// Function terms are not part of this dialect: arguments are plain names.
    #[default]
    Lowercase,

    /// A single lowercase letter is a variable.
    ///
    /// Any other identifier in argument position is a constant, unless it is a lowercase-led
    /// head applied to arguments, which is a function application.
    /// Predicates are uppercase-led.
    SingleLetter,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lowercase => write!(f, "lowercase"),
            Self::SingleLetter => write!(f, "single-letter"),
        }
    }
}

/// The secondary key of the clause-ordering heuristic.
///
/// When the saturation loop scans the store for partners it takes shorter clauses first.
/// On length ties, this knob decides whether clauses mentioning constants come early or late.
/// Constant-bearing clauses tend to be closer to the (ground) goal, so `Early` is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ConstantPreference {
    /// Constant-bearing clauses first on length ties.
    #[default]
    Early,

    /// Constant-free clauses first on length ties.
    Late,
}

impl std::fmt::Display for ConstantPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Early => write!(f, "early"),
            Self::Late => write!(f, "late"),
        }
    }
}

/// The primary configuration structure.
#[derive(Clone, Debug, Serialize)]
pub struct Config {
    /// How identifiers are classified during parsing.
    pub dialect: Dialect,

    /// Where constant-bearing clauses sort on length ties.
    pub constant_preference: ConstantPreference,

    /// The number of recorded derivations after which the search aborts.
    pub step_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dialect: Dialect::default(),
            constant_preference: ConstantPreference::default(),
            step_limit: defaults::STEP_LIMIT,
        }
    }
}
