/*!
Searches for a refutation of the clauses in a context.

# Overview

The search is a saturation loop over a FIFO worklist of clauses, seeded with the *last* input clause.
By convention the last clause is the negated goal, so the seed biases the search toward inferences which touch the goal or its descendants --- a set-of-support flavour.

Roughly, the loop is as diagrammed:

```none
          +----------------------+
  +------>| pop a worklist entry |------> exhausted, if the worklist is empty
  |       +----------------------+
  |                  |
  |                  ⌄
  |       +----------------------+   store partners ordered shortest first,
  |       | scan store partners  |   constants as the configured tie break,
  |       +----------------------+   each name pair attempted at most once
  |                  |
  |                  ⌄
  |       +----------------------+
  +-------| filter resolvents    |------> proved, on the empty clause
          +----------------------+------> step limit, after too many derivations
```

Each fresh resolvent runs a gauntlet before it is retained:
- A tautology is discarded.
- The empty clause ends the search: the formula is proved.
- A resolvent subsumed by a live store clause (a duplicate included) is discarded.
- Otherwise the resolvent is retained: every live clause it subsumes is deactivated (backward subsumption), the resolvent is stored under the next name, queued on the worklist, and its derivation is recorded in the search log.

The step-limit check after each recorded derivation is the loop's cooperation point: it bounds the search, and a front end wanting cancellation or timeouts would hook the same spot.

# Example

```rust
# use resolute::config::Config;
# use resolute::context::Context;
# use resolute::reports::Report;
let mut ctx = Context::from_config(Config::default());

ctx.add_formulas("P(x) -> Q(x), P(A), ¬Q(A)").unwrap();

assert_eq!(ctx.prove(), Ok(Report::Proved));
assert!(ctx.proof_path().is_some());
```
*/

use crate::context::{Context, ContextState};
use crate::db::clause::ClauseSource;
use crate::db::ClauseKey;
use crate::misc::log::targets::{self};
use crate::procedures::resolution::resolvents;
use crate::procedures::subsumption::{is_tautology, simplify_initial, subsumes};
use crate::reports::{Report, Step};
use crate::structures::clause::Clause;
use crate::types::err::{self};

impl Context {
    /// Moves the buffered input clauses into the clause database and seeds the worklist.
    ///
    /// Tautologies and forward-subsumed clauses are removed first, so the initial store
    /// satisfies the same invariants the loop maintains, and survivors are numbered
    /// consecutively from `C1` in input order.
    fn initialize(&mut self) {
        let buffered = std::mem::take(&mut self.input_buffer);
        let (survivors, removed) = simplify_initial(buffered);

        self.counters.initial_removed = removed;
        if removed > 0 {
            log::info!(target: targets::SUBSUMPTION, "Removed {removed} initial clauses");
        }

        let mut last = None;
        for clause in survivors {
            last = Some(self.clause_db.store(clause, ClauseSource::Original));
        }

        if let Some(seed) = last {
            self.worklist.push_back(seed);
        }
    }

    /// The partner keys for `current`: live clauses ordered shortest first, with the
    /// configured constant preference as tie break. The sort is stable, so ties beyond
    /// the heuristic fall back to store order.
    fn partner_order(&self) -> Vec<ClauseKey> {
        use crate::config::ConstantPreference;

        let mut partners: Vec<(usize, bool, ClauseKey)> = self
            .clause_db
            .live()
            .map(|db_clause| {
                let constants = db_clause.clause().mentions_constant();
                let tie_break = match self.config.constant_preference {
                    ConstantPreference::Early => !constants,
                    ConstantPreference::Late => constants,
                };
                (db_clause.clause().size(), tie_break, db_clause.key())
            })
            .collect();

        partners.sort_by_key(|&(size, tie_break, _)| (size, tie_break));

        partners.into_iter().map(|(_, _, key)| key).collect()
    }

    /// Searches for a refutation of the clauses added to the context.
    ///
    /// Returns the report of the finished search: [Proved](Report::Proved),
    /// [Exhausted](Report::Exhausted), or [StepLimitReached](Report::StepLimitReached).
    /// A finished context reports the same outcome on repeated calls.
    pub fn prove(&mut self) -> Result<Report, err::ErrorKind> {
        match self.state {
            ContextState::Input => {
                self.initialize();
                self.state = ContextState::Proving;
            }

            ContextState::Proving => {}

            _ => return Ok(self.report()),
        }

        'search_loop: while let Some(current_key) = self.worklist.pop_front() {
            let current = self.clause_db.get(current_key)?;

            // Deactivated while queued, by backward subsumption. Nothing to learn from it.
            if !current.is_active() {
                continue 'search_loop;
            }
            let current_clause = current.clause().clone();

            'partner_loop: for other_key in self.partner_order() {
                if other_key == current_key {
                    continue 'partner_loop;
                }

                if !self.note_pair(current_key, other_key) {
                    continue 'partner_loop;
                }

                let other_clause = {
                    let other = self.clause_db.get(other_key)?;
                    // Deactivated earlier in this scan, by backward subsumption.
                    if !other.is_active() {
                        continue 'partner_loop;
                    }
                    other.clause().clone()
                };

                self.counters.pairs_examined += 1;

                'resolvent_loop: for (resolvent, unifier) in
                    resolvents(&current_clause, &other_clause)
                {
                    self.counters.resolvents_formed += 1;

                    if is_tautology(&resolvent) {
                        self.counters.tautologies_discarded += 1;
                        log::trace!(target: targets::SUBSUMPTION, "Tautology: {}", resolvent.as_string());
                        continue 'resolvent_loop;
                    }

                    if resolvent.is_empty() {
                        log::info!(target: targets::RESOLUTION, "□ from {current_key} and {other_key}");

                        self.steps.push(Step {
                            derived: None,
                            parents: (current_key, other_key),
                            unifier: unifier.clone(),
                        });

                        self.state = ContextState::Proved {
                            pair: (current_key, other_key),
                            unifier,
                        };
                        return Ok(self.report());
                    }

                    let subsumed = self
                        .clause_db
                        .live()
                        .any(|db_clause| subsumes(db_clause.clause(), &resolvent));
                    if subsumed {
                        self.counters.resolvents_subsumed += 1;
                        log::trace!(target: targets::SUBSUMPTION, "Subsumed: {}", resolvent.as_string());
                        continue 'resolvent_loop;
                    }

                    // Backward subsumption: the fresh resolvent supersedes anything it subsumes.
                    let superseded: Vec<ClauseKey> = self
                        .clause_db
                        .live()
                        .filter(|db_clause| subsumes(&resolvent, db_clause.clause()))
                        .map(|db_clause| db_clause.key())
                        .collect();
                    for key in superseded {
                        log::debug!(target: targets::SUBSUMPTION, "{key} superseded");
                        self.clause_db.deactivate(key);
                        self.counters.backward_subsumed += 1;
                    }

                    let key = self.clause_db.store(
                        resolvent,
                        ClauseSource::Resolution {
                            parents: (current_key, other_key),
                            unifier: unifier.clone(),
                        },
                    );
                    self.worklist.push_back(key);

                    let step = Step {
                        derived: Some(key),
                        parents: (current_key, other_key),
                        unifier,
                    };
                    log::info!(
                        target: targets::RESOLUTION,
                        "{}",
                        self.step_line(self.steps.len() + 1, &step)
                    );
                    self.steps.push(step);

                    if self.steps.len() >= self.config.step_limit {
                        log::info!(target: targets::RESOLUTION, "Step limit of {} reached", self.config.step_limit);
                        self.state = ContextState::StepLimitReached;
                        return Ok(self.report());
                    }
                }
            }
        }

        self.state = ContextState::Exhausted;
        Ok(self.report())
    }
}
