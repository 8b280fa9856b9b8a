/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [tokenizing and parsing](crate::builder)
    pub const PARSER: &str = "parser";

    /// Logs related to the translation of formulas to clauses
    pub const CNF: &str = "cnf";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [unification](crate::procedures::unification)
    pub const UNIFICATION: &str = "unification";

    /// Logs related to [resolvent generation](crate::procedures::resolution) and the saturation loop
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [subsumption and tautology elimination](crate::procedures::subsumption)
    pub const SUBSUMPTION: &str = "subsumption";

    /// Logs related to [proof reconstruction](crate::reports::proof)
    pub const PROOF: &str = "proof";
}
