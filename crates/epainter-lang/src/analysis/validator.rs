//! Range sanity on literal command arguments. Only values the source pins
//! down statically are judged here; computed arguments are left to the
//! interpreter.

use crate::error::{Error, ErrorCode};
use crate::syntax::ast::{Expr, Span, Stmt, UnOp};

pub fn check(stmts: &[Stmt], canvas_size: usize, findings: &mut Vec<Error>) {
    for stmt in stmts {
        match stmt {
            Stmt::Spawn { x, y, span } => check_spawn(x, y, canvas_size, *span, findings),
            Stmt::Size { value, span } => {
                if let Some(n) = literal(value) {
                    if n <= 0 {
                        err(findings, *span, format!("brush size must be positive, found {n}"));
                    } else if n > 100 {
                        warn(findings, *span, format!("brush size {n} is unusually large"));
                    }
                }
            }
            Stmt::DrawLine { dir_x, dir_y, distance, span } => {
                check_direction(dir_x, dir_y, *span, DirZero::Error, findings);
                if let Some(d) = literal(distance) {
                    if d < 0 {
                        err(findings, *span, format!("line distance must not be negative, found {d}"));
                    } else if d > 1000 {
                        warn(findings, *span, format!("line distance {d} is unusually large"));
                    }
                }
            }
            Stmt::DrawCircle { dir_x, dir_y, radius, span } => {
                check_direction(dir_x, dir_y, *span, DirZero::Warning, findings);
                if let Some(r) = literal(radius) {
                    if r < 0 {
                        err(findings, *span, format!("circle radius must not be negative, found {r}"));
                    } else if r > 500 {
                        warn(findings, *span, format!("circle radius {r} is unusually large"));
                    }
                }
            }
            Stmt::DrawRectangle { dir_x, dir_y, distance, width, height, span } => {
                check_direction(dir_x, dir_y, *span, DirZero::Warning, findings);
                if let Some(d) = literal(distance) {
                    if d < 0 {
                        err(findings, *span, format!("rectangle distance must not be negative, found {d}"));
                    } else if d > 1000 {
                        warn(findings, *span, format!("rectangle distance {d} is unusually large"));
                    }
                }
                for (arg, what) in [(width, "width"), (height, "height")] {
                    if let Some(n) = literal(arg) {
                        if n <= 0 {
                            err(findings, *span, format!("rectangle {what} must be positive, found {n}"));
                        } else if n > 1000 {
                            warn(findings, *span, format!("rectangle {what} {n} is unusually large"));
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

enum DirZero {
    Error,
    Warning,
}

/// Literal direction components must be unit-or-zero. A both-zero vector is
/// fatal for a line (no direction to walk) but meaningful for circles and
/// rectangles, where the shape simply centers on the cursor.
fn check_direction(dir_x: &Expr, dir_y: &Expr, span: Span, zero: DirZero, findings: &mut Vec<Error>) {
    let x = literal(dir_x);
    let y = literal(dir_y);

    for component in [x, y].into_iter().flatten() {
        if !(-1..=1).contains(&component) {
            findings.push(Error::new(
                ErrorCode::S009,
                span.line,
                span.column,
                format!("direction components must be -1, 0, or 1, found {component}"),
            ));
        }
    }

    if x == Some(0) && y == Some(0) {
        match zero {
            DirZero::Error => findings.push(Error::new(
                ErrorCode::S009,
                span.line,
                span.column,
                "direction must not be (0, 0)",
            )),
            DirZero::Warning => findings.push(Error::new(
                ErrorCode::S012,
                span.line,
                span.column,
                "direction (0, 0) centers the shape on the cursor",
            )),
        }
    }
}

fn check_spawn(x: &Expr, y: &Expr, canvas_size: usize, span: Span, findings: &mut Vec<Error>) {
    let limit = canvas_size as i64;
    for (arg, what) in [(x, "x"), (y, "y")] {
        if let Some(n) = literal(arg) {
            if n < 0 || n >= limit {
                err(
                    findings,
                    span,
                    format!("Spawn {what} = {n} is outside the canvas (size {canvas_size})"),
                );
            }
        }
    }
}

/// Statically evaluates an expression made of number literals, negation,
/// and grouping. Anything else yields `None`.
fn literal(expr: &Expr) -> Option<i64> {
    match expr {
        Expr::Number(n, _) => Some(*n),
        Expr::Unary { op: UnOp::Neg, operand, .. } => literal(operand).map(|n| -n),
        Expr::Grouping(inner, _) => literal(inner),
        _ => None,
    }
}

fn err(findings: &mut Vec<Error>, span: Span, message: impl Into<String>) {
    findings.push(Error::new(ErrorCode::S010, span.line, span.column, message));
}

fn warn(findings: &mut Vec<Error>, span: Span, message: impl Into<String>) {
    findings.push(Error::new(ErrorCode::S011, span.line, span.column, message));
}
