/*!
A library for refuting first-order formulas by resolution with unification.

resolute takes a collection of clauses --- by convention, the axioms of a problem followed by the negation of a goal --- and searches for a derivation of the empty clause.
If a derivation is found the formula is proved, and alongside the full search trace resolute reconstructs the minimal sequence of resolutions the proof rests on.

# Orientation

The library is designed around the core structure of a [context](crate::context).

Formulas may be added through their [textual representation](crate::context::Context::add_formulas) or [programmatically](crate::context::Context::add_clause), clause by clause.

Internally, and at a high level, a proof attempt is viewed in terms of a handful of cooperating parts:
- A [builder](crate::builder) translates formulas to clauses, by way of conjunctive normal form.
- Clauses are stored in a [clause database](crate::db::clause), and are accessed through [keys](crate::db::ClauseKey) whose display form (`C1`, `C2`, …) doubles as the clause's name in the search trace.
- The [procedures](crate::procedures) implement unification, resolvent generation, subsumption, and the saturation loop which ties these together.
- Each derived clause records its [source](crate::db::clause::ClauseSource), and on refutation the [reports](crate::reports) module walks those records to recover the proof.

Useful starting points, then, may be:
- The high-level [prove procedure](crate::procedures::prove) to inspect the dynamics of a search.
- The [database module](crate::db) to inspect the data considered during a search.
- The [structures](crate::structures) to familiarise yourself with the abstract elements of resolution and their representation (terms, literals, clauses, etc.)
- The [configuration](crate::config) to see which knobs are supported.

# Examples

+ Prove a contradiction from modus ponens premises.

```rust
# use resolute::{config::Config, context::Context, reports::Report};
let mut ctx = Context::from_config(Config::default());

ctx.add_formulas("A -> B, A, ¬B").unwrap();

assert_eq!(ctx.prove(), Ok(Report::Proved));
```

+ A search which exhausts its worklist without finding the empty clause.

```rust
# use resolute::{config::Config, context::Context, reports::Report};
let mut ctx = Context::from_config(Config::default());

ctx.add_formulas("P, ¬Q").unwrap();

assert_eq!(ctx.prove(), Ok(Report::Exhausted));
```

# Guiding principles

## Determinism

A search is a pure function of its input and configuration.
Clause numbering, worklist traversal, and the search log are strictly sequential, and heuristic orderings are stable sorts.
In particular, there is no source of randomness anywhere in the library.

## Modularity

+ Interaction between parts happens through documented access points. For example:
  - Clauses are stored in a [clause database](crate::db::clause) and accessed through [keys](crate::db::ClauseKey); the internal structure of the database is private.
  - The algorithm for finding a refutation is factored into a collection of [procedures](crate::procedures).
  - Use of external crates is limited to crates which help support modularity, such as [log](https://docs.rs/log/latest/log/) and [petgraph](https://docs.rs/petgraph/latest/petgraph/).

## Values over exceptions

Unification failure, an exhausted worklist, and a tripped step limit are all ordinary values.
Errors are reserved for malformed input and misuse of the API, and are collected in [types::err].

# Logs

To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.

The targets are listed in [misc::log].

For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
- Logs related to [subsumption](crate::procedures::subsumption) can be filtered with `RUST_LOG=subsumption …` or,
- Logs of each recorded derivation without unification detail can be found with `RUST_LOG=resolution=info …`
*/

#![allow(clippy::collapsible_else_if)]
#![allow(clippy::single_match)]
#![allow(mixed_script_confusables)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod reports;

pub mod db;

pub mod misc;
