/*!
Counters related to a context/search.
*/

use serde::Serialize;

/// Counters over the lifetime of a search.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Counters {
    /// Clause pairs for which resolvent generation was attempted.
    pub pairs_examined: usize,

    /// Resolvents produced, prior to any filtering.
    pub resolvents_formed: usize,

    /// Resolvents discarded as tautologies.
    pub tautologies_discarded: usize,

    /// Resolvents discarded as subsumed by, or duplicates of, a live clause.
    pub resolvents_subsumed: usize,

    /// Live clauses deactivated by backward subsumption.
    pub backward_subsumed: usize,

    /// Initial clauses removed as tautologies or by forward subsumption.
    pub initial_removed: usize,
}
