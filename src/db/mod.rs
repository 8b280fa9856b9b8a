/*!
Databases for a context.

At present the only database is the [clause database](clause), which owns every clause of a search together with the metadata required to reconstruct a proof.
*/

pub mod clause;

mod keys;
pub use keys::{ClauseKey, FormulaIndex};
