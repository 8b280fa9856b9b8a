/*!
The context --- to which formulas are added and within which proof searches take place.

# Example
```rust
# use resolute::context::Context;
# use resolute::config::Config;
# use resolute::reports::Report;
let mut the_context = Context::from_config(Config::default());

the_context.add_formulas("P(x) ∨ Q(x), ¬P(A), ¬Q(A)").unwrap();

assert_eq!(the_context.prove(), Ok(Report::Proved));

for line in the_context.trace_lines() {
    println!("{line}");
}
```
*/

mod counters;
pub use counters::Counters;

use std::collections::{HashSet, VecDeque};

use crate::config::Config;
use crate::db::clause::ClauseDB;
use crate::db::ClauseKey;
use crate::reports::{Report, Step};
use crate::structures::clause::CClause;
use crate::structures::substitution::Substitution;

/// The state of a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context accepts input.
    Input,

    /// A search is underway.
    Proving,

    /// The empty clause was derived by resolving the pair, under the unifier.
    Proved {
        pair: (ClauseKey, ClauseKey),
        unifier: Substitution,
    },

    /// The worklist drained without deriving the empty clause.
    Exhausted,

    /// The search was cut short by the step limit.
    StepLimitReached,
}

impl ContextState {
    /// Whether a search has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Input | Self::Proving)
    }
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Proving => write!(f, "Proving"),
            Self::Proved { .. } => write!(f, "Proved"),
            Self::Exhausted => write!(f, "Exhausted"),
            Self::StepLimitReached => write!(f, "StepLimitReached"),
        }
    }
}

/// The context: configuration, clause storage, and the state of a search.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the search.
    pub counters: Counters,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// Clauses translated from input, buffered until the search begins.
    pub(crate) input_buffer: Vec<CClause>,

    /// The FIFO worklist of clauses still to be resolved against the store.
    pub(crate) worklist: VecDeque<ClauseKey>,

    /// Unordered pairs of clause names for which resolvents have been generated.
    pub(crate) used_pairs: HashSet<(ClauseKey, ClauseKey)>,

    /// The search log, one entry per recorded derivation.
    pub(crate) steps: Vec<Step>,

    /// The state of the context.
    pub state: ContextState,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            clause_db: ClauseDB::new(),
            input_buffer: Vec::new(),
            worklist: VecDeque::new(),
            used_pairs: HashSet::new(),
            steps: Vec::new(),
            state: ContextState::Input,
        }
    }

    /// The high-level report corresponding to the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The search log, one entry per recorded derivation.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Marks the unordered pair `{a, b}` as used, returning whether it was fresh.
    pub(crate) fn note_pair(&mut self, a: ClauseKey, b: ClauseKey) -> bool {
        let pair = if a <= b { (a, b) } else { (b, a) };
        self.used_pairs.insert(pair)
    }
}
