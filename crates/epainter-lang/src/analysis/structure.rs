//! Program-shape pass: `Spawn` placement and the label/jump graph.

use std::collections::HashSet;

use crate::error::{Error, ErrorCode};
use crate::syntax::ast::Stmt;

pub fn check(stmts: &[Stmt], findings: &mut Vec<Error>) {
    check_spawn(stmts, findings);
    check_labels(stmts, findings);
}

/// Exactly one `Spawn`, and it must be the first statement apart from
/// leading labels.
fn check_spawn(stmts: &[Stmt], findings: &mut Vec<Error>) {
    let mut seen_spawn = false;
    let mut misplaced = false;

    for stmt in stmts {
        match stmt {
            Stmt::Label { .. } => {}
            Stmt::Spawn { span, .. } => {
                if seen_spawn {
                    findings.push(Error::new(
                        ErrorCode::S003,
                        span.line,
                        span.column,
                        "Spawn may appear only once",
                    ));
                }
                seen_spawn = true;
            }
            other => {
                // only flag the first offender; the rest follow from it
                if !seen_spawn && !misplaced {
                    let span = other.span();
                    findings.push(Error::new(
                        ErrorCode::S002,
                        span.line,
                        span.column,
                        "the program must begin with Spawn",
                    ));
                    misplaced = true;
                }
            }
        }
    }

    if !seen_spawn && !misplaced {
        let (line, column) = stmts
            .first()
            .map(|s| (s.span().line, s.span().column))
            .unwrap_or((1, 1));
        findings.push(Error::new(
            ErrorCode::S002,
            line,
            column,
            "the program must begin with Spawn",
        ));
    }
}

/// Labels must be unique; every `GoTo` must name a declared label.
fn check_labels(stmts: &[Stmt], findings: &mut Vec<Error>) {
    let mut declared = HashSet::new();

    for stmt in stmts {
        if let Stmt::Label { name, span } = stmt {
            if !declared.insert(name.clone()) {
                findings.push(Error::new(
                    ErrorCode::S005,
                    span.line,
                    span.column,
                    format!("label `{name}` is declared more than once"),
                ));
            }
        }
    }

    for stmt in stmts {
        if let Stmt::Goto { label, span, .. } = stmt {
            if !declared.contains(label) {
                findings.push(Error::new(
                    ErrorCode::S004,
                    span.line,
                    span.column,
                    format!("GoTo target `{label}` does not exist"),
                ));
            }
        }
    }
}
