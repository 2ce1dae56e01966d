//! Static validation of a parsed program, split into three passes:
//!
//! 1. [`structure`] — program shape: the single leading `Spawn`, label
//!    uniqueness, jump targets.
//! 2. [`checker`] — definite assignment and kind checks wherever literal
//!    evidence pins an operand down.
//! 3. [`validator`] — range sanity on literal command arguments.
//!
//! Findings from all passes are accumulated and partitioned into hard
//! errors and warnings. Warnings never block execution.

mod checker;
mod structure;
mod validator;

use crate::error::Error;
use crate::syntax::ast::Stmt;

#[derive(Debug, Default)]
pub struct Resolution {
    pub errors: Vec<Error>,
    pub warnings: Vec<Error>,
}

impl Resolution {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn resolve(stmts: &[Stmt], canvas_size: usize) -> Resolution {
    let mut findings = Vec::new();
    structure::check(stmts, &mut findings);
    checker::check(stmts, &mut findings);
    validator::check(stmts, canvas_size, &mut findings);

    let mut resolution = Resolution::default();
    for finding in findings {
        if finding.code.is_error() {
            resolution.errors.push(finding);
        } else {
            resolution.warnings.push(finding);
        }
    }
    resolution
}
