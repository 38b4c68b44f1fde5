//! Flattening of conditional chains.
//!
//! The grammar has no `elif`: `if a: ... elif b: ... else: ...` arrives as an
//! `If` whose `orelse` holds a single nested `If`, and so on down the chain.
//! Displaying it wants the opposite shape, one header per condition side by
//! side.

use tracing::debug;

use super::errors::{Malformed, ProjectionError};
use crate::language::{Expression, Statement};

/// One `if` or `elif` of a chain, with the `If` node it was read from.
#[derive(Debug, Clone, Copy)]
pub struct Branch<'i> {
    pub node: &'i Statement,
    pub test: &'i Expression,
    pub body: &'i [Statement],
}

/// A conditional chain in source order. `otherwise` is the body of the final
/// `else`; empty when there is none.
#[derive(Debug, Clone)]
pub struct Chain<'i> {
    pub branches: Vec<Branch<'i>>,
    pub otherwise: &'i [Statement],
}

impl<'i> Chain<'i> {
    pub fn has_else(&self) -> bool {
        !self
            .otherwise
            .is_empty()
    }

    /// Number of headers the chain displays: every condition, plus the
    /// `else` if there is one.
    pub fn len(&self) -> usize {
        self.branches
            .len()
            + if self.has_else() { 1 } else { 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Does this statement continue into an `elif`? True when its else-slot holds
/// exactly one statement and that statement is itself an `If`.
pub fn is_chain_link(statement: &Statement) -> bool {
    match statement {
        Statement::If { orelse, .. } => {
            orelse.len() == 1 && matches!(orelse[0], Statement::If { .. })
        }
        _ => false,
    }
}

/// Walk a chain of `If` nodes through their else-slots and list its
/// branches in source order.
pub fn collect_branches(statement: &Statement) -> Result<Chain<'_>, ProjectionError> {
    let mut branches = Vec::new();
    let mut current = statement;

    loop {
        let Statement::If { test, body, orelse } = current else {
            return Err(Malformed::NotConditional(current.kind()).into());
        };

        branches.push(Branch {
            node: current,
            test,
            body,
        });

        if is_chain_link(current) {
            current = &orelse[0];
            continue;
        }

        // A final else that opens with an `if` (followed by more statements)
        // is accepted by Python but is not a shape this chain may end in.
        if let Some(Statement::If { .. }) = orelse.first() {
            return Err(Malformed::Chain.into());
        }

        debug!(
            "Conditional chain of {} branch{}{}",
            branches.len(),
            if branches.len() == 1 { "" } else { "es" },
            if orelse.is_empty() { "" } else { " and an else" }
        );

        return Ok(Chain {
            branches,
            otherwise: orelse,
        });
    }
}
