/*!
The clause database.

Every clause of a search lives here: the initial clauses, in input order, followed by each derived clause in order of derivation.
A stored clause is never mutated and its key is never reused.
Backward subsumption *deactivates* a clause rather than removing it, so the name of a subsumed clause remains resolvable when the trace and proof are rendered.

A [DBClause] contains:
- A clause (represented as a [CClause]).
- A [key](ClauseKey) used to access the [DBClause].
- The [source](ClauseSource) of the clause, from which the proof path is reconstructed.
- An activity flag.
*/

use crate::db::keys::{ClauseKey, FormulaIndex};
use crate::misc::log::targets::{self};
use crate::structures::clause::{CClause, Clause};
use crate::structures::substitution::Substitution;
use crate::types::err::{self};

/// The source of a clause.
#[derive(Clone, Debug)]
pub enum ClauseSource {
    /// A clause read from the input.
    Original,

    /// A clause derived by resolving two stored clauses under a unifier.
    Resolution {
        /// The clause popped from the worklist and the store clause it was resolved with.
        parents: (ClauseKey, ClauseKey),

        /// The most general unifier of the complementary pair resolved on.
        unifier: Substitution,
    },
}

/// A clause together with some metadata.
#[derive(Clone, Debug)]
pub struct DBClause {
    /// A key for accessing the clause.
    key: ClauseKey,

    /// The clause, stored instantiated as a [CClause].
    clause: CClause,

    /// The source of the clause.
    source: ClauseSource,

    /// Whether the clause is active.
    active: bool,
}

impl DBClause {
    /// The key used to access the [DBClause].
    pub const fn key(&self) -> ClauseKey {
        self.key
    }

    /// The clause of the [DBClause].
    pub fn clause(&self) -> &CClause {
        &self.clause
    }

    /// The source of the [DBClause].
    pub fn source(&self) -> &ClauseSource {
        &self.source
    }

    /// Whether the [DBClause] is active.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// The clause database.
#[derive(Debug, Default)]
pub struct ClauseDB {
    /// Every stored clause, in key order. Never shrinks.
    stored: Vec<DBClause>,

    /// The number of initial clauses, fixed when the first derived clause is stored.
    initial_count: FormulaIndex,
}

impl ClauseDB {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `clause` under the next key and returns the key.
    pub fn store(&mut self, clause: CClause, source: ClauseSource) -> ClauseKey {
        let key = ClauseKey::new(self.stored.len() as FormulaIndex + 1);

        if matches!(source, ClauseSource::Original) {
            self.initial_count = key.index();
        }

        log::debug!(target: targets::CLAUSE_DB, "Stored {key}: {}", clause.as_string());

        self.stored.push(DBClause {
            key,
            clause,
            source,
            active: true,
        });

        key
    }

    /// The stored clause for `key`, if the key has been issued.
    pub fn get(&self, key: ClauseKey) -> Result<&DBClause, err::ClauseDBError> {
        match self.stored.get(key.index() as usize - 1) {
            Some(db_clause) => Ok(db_clause),
            None => Err(err::ClauseDBError::Missing),
        }
    }

    /// Deactivates the clause for `key`.
    ///
    /// The key remains resolvable via [get](ClauseDB::get); the clause no longer appears in [live](ClauseDB::live).
    pub fn deactivate(&mut self, key: ClauseKey) {
        if let Some(db_clause) = self.stored.get_mut(key.index() as usize - 1) {
            db_clause.active = false;
        }
    }

    /// An iterator over the active clauses, in key order.
    pub fn live(&self) -> impl Iterator<Item = &DBClause> {
        self.stored.iter().filter(|db_clause| db_clause.active)
    }

    /// An iterator over every stored clause, active or not, in key order.
    pub fn all(&self) -> impl Iterator<Item = &DBClause> {
        self.stored.iter()
    }

    /// The number of initial clauses.
    ///
    /// Keys with an index at most this count name initial clauses; every other key names a derived clause.
    pub fn initial_count(&self) -> FormulaIndex {
        self.initial_count
    }

    /// The total number of stored clauses, active or not.
    pub fn total_count(&self) -> usize {
        self.stored.len()
    }
}
