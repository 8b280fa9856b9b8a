/*!
Adding input to a context.

Input arrives in one of two forms:
- [Textual formulas](crate::context::Context::add_formulas): the input is split on top-level commas, each part is [tokenized](lexer) and [parsed](parser) under the configured [dialect](crate::config::Dialect), rewritten to [conjunctive normal form](crate::structures::formula), and its clauses are collected.
- [Programmatic clauses](crate::context::Context::add_clause), built directly from [literals](crate::structures::literal).

Either way clauses are buffered in input order, and enter the clause database when the search begins (see [prove](crate::procedures::prove)), after tautology elimination and forward subsumption over the initial set.
*/

pub mod lexer;
pub mod parser;

use crate::context::Context;
use crate::misc::log::targets::{self};
use crate::structures::clause::{CClause, Clause};
use crate::types::err::{self, ErrorKind};

/// Splits `text` on commas which lie outside any parenthesized region.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (at, character) in text.char_indices() {
        match character {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&text[start..at]);
                start = at + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);

    parts
}

impl Context {
    /// Parses `text` as a comma-separated sequence of formulas and buffers the resulting clauses.
    ///
    /// Each top-level part is parsed independently, and the clause lists are concatenated in input order.
    /// Variables are implicitly universally quantified, per clause.
    pub fn add_formulas(&mut self, text: &str) -> Result<(), ErrorKind> {
        if self.state.is_terminal() {
            return Err(err::StateError::ProofComplete.into());
        }

        for part in split_top_level(text) {
            if part.trim().is_empty() {
                return Err(err::ParseError::Empty.into());
            }

            let tokens = lexer::tokenize(part)?;
            let formula = parser::Parser::new(&tokens, self.config.dialect).parse()?;
            log::debug!(target: targets::PARSER, "Parsed: {formula:?}");

            let cnf = formula.to_cnf();
            for clause in cnf.clauses() {
                log::debug!(target: targets::CNF, "Clause: {}", clause.as_string());
                self.buffer_clause(clause);
            }
        }

        Ok(())
    }

    /// Buffers an already-built clause.
    ///
    /// Duplicate literals are coalesced, first occurrence first.
    /// An empty input clause is refused: the empty clause is something to derive, not to assume.
    pub fn add_clause(&mut self, clause: CClause) -> Result<(), ErrorKind> {
        if self.state.is_terminal() {
            return Err(err::StateError::ProofComplete.into());
        }

        if clause.is_empty() {
            return Err(err::ClauseDBError::EmptyClause.into());
        }

        let mut deduplicated = CClause::with_capacity(clause.len());
        for literal in clause {
            if !deduplicated.contains(&literal) {
                deduplicated.push(literal);
            }
        }

        self.buffer_clause(deduplicated);
        Ok(())
    }

    fn buffer_clause(&mut self, clause: CClause) {
        self.input_buffer.push(clause);
    }
}
