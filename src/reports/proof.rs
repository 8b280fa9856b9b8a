/*!
Reconstruction of the minimal used-clause path.

The search log records every derivation; most derivations turn out to be dead ends.
After the terminal pair resolves to `□`, the proof rests on exactly the ancestors of that pair, reachable through the [source](crate::db::clause::ClauseSource) records of the clause database.

The path is emitted as:
1. The initial clauses among the ancestors, sorted by index.
2. The derived ancestors, in a topological order of the parent DAG, so each clause follows both of its parents.
3. The terminal resolution.
*/

use std::collections::{HashMap, HashSet};

use petgraph::algo::toposort;
use petgraph::graph::DiGraph;

use crate::context::{Context, ContextState};
use crate::db::clause::ClauseSource;
use crate::db::ClauseKey;
use crate::misc::log::targets::{self};
use crate::reports::Step;
use crate::structures::clause::Clause;
use crate::structures::substitution::Substitution;

/// The minimal used-clause path of a successful search.
#[derive(Debug)]
pub struct ProofPath {
    /// The initial clauses the proof rests on, sorted by index.
    pub initial: Vec<ClauseKey>,

    /// The derived clauses the proof rests on, each after both of its parents.
    pub derived: Vec<ClauseKey>,

    /// The pair whose resolution produced the empty clause.
    pub terminal: (ClauseKey, ClauseKey),

    /// The unifier of the terminal resolution.
    pub terminal_unifier: Substitution,
}

impl Context {
    /// The closure of `keys` under the parent relation.
    fn ancestor_closure(&self, keys: &[ClauseKey]) -> HashSet<ClauseKey> {
        let mut ancestors: HashSet<ClauseKey> = HashSet::new();
        let mut pending: Vec<ClauseKey> = keys.to_vec();

        while let Some(key) = pending.pop() {
            if !ancestors.insert(key) {
                continue;
            }

            if let Ok(db_clause) = self.clause_db.get(key) {
                if let ClauseSource::Resolution { parents: (a, b), .. } = db_clause.source() {
                    pending.push(*a);
                    pending.push(*b);
                }
            }
        }

        ancestors
    }

    /// The minimal used-clause path, or [None] while no refutation has been found.
    pub fn proof_path(&self) -> Option<ProofPath> {
        let ContextState::Proved { pair, unifier } = &self.state else {
            return None;
        };

        let ancestors = self.ancestor_closure(&[pair.0, pair.1]);
        log::debug!(target: targets::PROOF, "{} ancestors of the terminal pair", ancestors.len());

        let initial_count = self.clause_db.initial_count();
        let mut initial: Vec<ClauseKey> = Vec::new();
        let mut derived: Vec<ClauseKey> = Vec::new();
        for key in ancestors {
            if key.index() <= initial_count {
                initial.push(key);
            } else {
                derived.push(key);
            }
        }

        initial.sort_unstable();
        derived.sort_unstable();

        // Order the derived ancestors so each follows both parents.
        let mut graph: DiGraph<ClauseKey, ()> = DiGraph::new();
        let mut nodes = HashMap::with_capacity(derived.len());
        for &key in &derived {
            nodes.insert(key, graph.add_node(key));
        }

        for &key in &derived {
            let Ok(db_clause) = self.clause_db.get(key) else {
                continue;
            };
            if let ClauseSource::Resolution { parents: (a, b), .. } = db_clause.source() {
                for parent in [a, b] {
                    if let Some(&parent_node) = nodes.get(parent) {
                        graph.add_edge(parent_node, nodes[&key], ());
                    }
                }
            }
        }

        // The parent relation is acyclic: parents always predate their resolvent.
        let derived = match toposort(&graph, None) {
            Ok(order) => order.into_iter().map(|node| graph[node]).collect(),
            Err(_) => derived,
        };

        Some(ProofPath {
            initial,
            derived,
            terminal: *pair,
            terminal_unifier: unifier.clone(),
        })
    }

    /// The rendered lines of the minimal used-clause path.
    ///
    /// Empty while no refutation has been found.
    pub fn proof_lines(&self) -> Vec<String> {
        let Some(path) = self.proof_path() else {
            return Vec::new();
        };

        let mut lines = Vec::new();

        for key in &path.initial {
            let clause = match self.clause_db.get(*key) {
                Ok(db_clause) => db_clause.clause().as_string(),
                Err(_) => "?".to_string(),
            };
            lines.push(format!("Initial {key}: {clause}"));
        }

        let mut number = 0;
        for key in &path.derived {
            let Ok(db_clause) = self.clause_db.get(*key) else {
                continue;
            };
            let ClauseSource::Resolution { parents, unifier } = db_clause.source() else {
                continue;
            };

            number += 1;
            let step = Step {
                derived: Some(*key),
                parents: *parents,
                unifier: unifier.clone(),
            };
            lines.push(self.step_line(number, &step));
        }

        let (a, b) = path.terminal;
        number += 1;
        lines.push(format!(
            "Step {number}: Resolution of {a} and {b} -> □ (empty clause)"
        ));

        lines
    }

    /// The number of resolutions the proof path contains, terminal resolution included.
    pub fn proof_length(&self) -> Option<usize> {
        self.proof_path().map(|path| path.derived.len() + 1)
    }
}
