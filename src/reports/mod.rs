/*!
Reports for the context.

A [Report] is the high-level outcome of a search.
A [Step] is one entry of the search log, and [trace_lines](crate::context::Context::trace_lines) renders the log --- together with the initial clause listing and a closing summary --- as the lines a front end prints.

On a successful search the minimal used-clause path is reconstructed in [proof].
*/

pub mod proof;

use crate::context::{Context, ContextState};
use crate::db::ClauseKey;
use crate::structures::clause::Clause;
use crate::structures::substitution::Substitution;

/// High-level reports regarding a search.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The empty clause was derived: the formula is proved.
    Proved,

    /// The worklist drained without deriving the empty clause.
    Exhausted,

    /// The search was cut short by the step limit.
    StepLimitReached,

    /// The outcome of the search is unknown, for some reason.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(state: &ContextState) -> Self {
        match state {
            ContextState::Input | ContextState::Proving => Self::Unknown,
            ContextState::Proved { .. } => Self::Proved,
            ContextState::Exhausted => Self::Exhausted,
            ContextState::StepLimitReached => Self::StepLimitReached,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Proved => write!(f, "Proved"),
            Self::Exhausted => write!(f, "Not proven"),
            Self::StepLimitReached => write!(f, "Step limit exceeded"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// One entry of the search log.
#[derive(Clone, Debug)]
pub struct Step {
    /// The key assigned to the resolvent, or [None] for the terminal derivation of `□`.
    pub derived: Option<ClauseKey>,

    /// The clause popped from the worklist and the store clause it was resolved with.
    pub parents: (ClauseKey, ClauseKey),

    /// The unifier of the pair resolved on.
    pub unifier: Substitution,
}

/// `step` or `steps`, as `count` requires.
pub fn step_word(count: usize) -> &'static str {
    match count {
        1 => "step",
        _ => "steps",
    }
}

/// Renders `unifier` as ` (unifier: {…})`, or nothing when the unifier is empty.
fn unifier_suffix(unifier: &Substitution) -> String {
    match unifier.is_empty() {
        true => String::new(),
        false => format!(" (unifier: {unifier})"),
    }
}

impl Context {
    /// Renders one step of the search log, under the given (one-based) step number.
    pub(crate) fn step_line(&self, number: usize, step: &Step) -> String {
        let (a, b) = step.parents;
        let unifier = unifier_suffix(&step.unifier);

        match step.derived {
            Some(key) => {
                let clause = match self.clause_db.get(key) {
                    Ok(db_clause) => db_clause.clause().as_string(),
                    Err(_) => "?".to_string(),
                };
                format!("Step {number} - {key}: Resolution of {a} and {b}{unifier} -> {key}: {clause}")
            }

            None => format!("Step {number}: Resolution of {a} and {b}{unifier} -> □"),
        }
    }

    /// The lines of the full report: initial listing, search log, summary, and (on success) the minimal used path.
    pub fn trace_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if self.counters.initial_removed > 0 {
            lines.push(format!(
                "Removed tautologies/subsumed clauses: {}",
                self.counters.initial_removed
            ));
        }

        lines.push("Initial clauses:".to_string());
        let initial_count = self.clause_db.initial_count();
        for db_clause in self.clause_db.all() {
            if db_clause.key().index() > initial_count {
                break;
            }
            lines.push(format!(
                "{}: {}",
                db_clause.key(),
                db_clause.clause().as_string()
            ));
        }

        for (index, step) in self.steps.iter().enumerate() {
            lines.push(self.step_line(index + 1, step));
        }

        match self.report() {
            Report::Proved => {
                let count = self.steps.len();
                lines.push(format!(
                    "Formula proved in {count} {}",
                    step_word(count)
                ));

                lines.push("Useful resolutions:".to_string());
                lines.extend(self.proof_lines());
            }

            Report::Exhausted => lines.push("Formula not proven".to_string()),

            Report::StepLimitReached => lines.push("Step limit exceeded".to_string()),

            Report::Unknown => {}
        }

        lines
    }
}
