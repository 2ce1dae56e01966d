//! Definite-assignment and kind-inference pass.
//!
//! Variables live in one flat namespace and must be assigned, in textual
//! order, before first use. Kinds are judged from literal evidence only; a
//! variable reference is always `Unknown` and passes every kind check (the
//! interpreter re-checks everything with real values, so no program is
//! rejected for a path the checker cannot see).

use std::collections::HashSet;

use crate::error::{Error, ErrorCode};
use crate::syntax::ast::{BinOp, Expr, Span, Stmt, UnOp};
use crate::syntax::token::Builtin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Number,
    Bool,
    Color,
    Unknown,
}

impl Kind {
    fn describe(&self) -> &'static str {
        match self {
            Self::Number => "a number",
            Self::Bool => "a boolean",
            Self::Color => "a color",
            Self::Unknown => "an unknown value",
        }
    }

    fn matches(&self, other: Kind) -> bool {
        *self == Kind::Unknown || other == Kind::Unknown || *self == other
    }
}

pub fn check(stmts: &[Stmt], findings: &mut Vec<Error>) {
    Checker::default().run(stmts, findings)
}

#[derive(Default)]
struct Checker {
    assigned: HashSet<String>,
}

impl Checker {
    fn run(mut self, stmts: &[Stmt], findings: &mut Vec<Error>) {
        for stmt in stmts {
            match stmt {
                Stmt::Spawn { x, y, span } => {
                    self.expect_kind(x, Kind::Number, *span, "Spawn x", findings);
                    self.expect_kind(y, Kind::Number, *span, "Spawn y", findings);
                }
                Stmt::Color { color, span } => {
                    self.expect_kind(color, Kind::Color, *span, "Color argument", findings);
                }
                Stmt::Size { value, span } => {
                    self.expect_kind(value, Kind::Number, *span, "Size argument", findings);
                }
                Stmt::DrawLine { dir_x, dir_y, distance, span } => {
                    for (arg, what) in [(dir_x, "direction x"), (dir_y, "direction y"), (distance, "distance")] {
                        self.expect_kind(arg, Kind::Number, *span, what, findings);
                    }
                }
                Stmt::DrawCircle { dir_x, dir_y, radius, span } => {
                    for (arg, what) in [(dir_x, "direction x"), (dir_y, "direction y"), (radius, "radius")] {
                        self.expect_kind(arg, Kind::Number, *span, what, findings);
                    }
                }
                Stmt::DrawRectangle { dir_x, dir_y, distance, width, height, span } => {
                    for (arg, what) in [
                        (dir_x, "direction x"),
                        (dir_y, "direction y"),
                        (distance, "distance"),
                        (width, "width"),
                        (height, "height"),
                    ] {
                        self.expect_kind(arg, Kind::Number, *span, what, findings);
                    }
                }
                Stmt::Fill { .. } | Stmt::Label { .. } => {}
                Stmt::Assign { name, value, .. } => {
                    self.infer(value, findings);
                    self.assigned.insert(name.clone());
                }
                Stmt::Goto { condition, span, .. } => {
                    self.expect_kind(condition, Kind::Bool, *span, "GoTo condition", findings);
                }
            }
        }
    }

    fn expect_kind(
        &mut self,
        expr: &Expr,
        want: Kind,
        span: Span,
        what: &str,
        findings: &mut Vec<Error>,
    ) {
        let got = self.infer(expr, findings);
        if !got.matches(want) {
            findings.push(Error::new(
                ErrorCode::S006,
                span.line,
                span.column,
                format!("{what} must be {}, found {}", want.describe(), got.describe()),
            ));
        }
    }

    fn infer(&mut self, expr: &Expr, findings: &mut Vec<Error>) -> Kind {
        match expr {
            Expr::Number(..) => Kind::Number,
            Expr::Bool(..) => Kind::Bool,
            Expr::ColorLit(..) => Kind::Color,
            Expr::Grouping(inner, _) => self.infer(inner, findings),

            Expr::Variable(name, span) => {
                if !self.assigned.contains(name) {
                    findings.push(Error::new(
                        ErrorCode::S001,
                        span.line,
                        span.column,
                        format!("variable `{name}` is used before assignment"),
                    ));
                }
                Kind::Unknown
            }

            Expr::Unary { op: UnOp::Neg, operand, span } => {
                let kind = self.infer(operand, findings);
                if !kind.matches(Kind::Number) {
                    findings.push(Error::new(
                        ErrorCode::S006,
                        span.line,
                        span.column,
                        format!("negation needs a number, found {}", kind.describe()),
                    ));
                }
                Kind::Number
            }

            Expr::Binary { left, op, right, span } => {
                let lk = self.infer(left, findings);
                let rk = self.infer(right, findings);
                self.check_binary(*op, lk, rk, *span, findings)
            }

            Expr::Call { func, args, span } => {
                let kinds: Vec<Kind> = args.iter().map(|a| self.infer(a, findings)).collect();
                self.check_call(*func, args, &kinds, *span, findings)
            }
        }
    }

    fn check_binary(
        &mut self,
        op: BinOp,
        lk: Kind,
        rk: Kind,
        span: Span,
        findings: &mut Vec<Error>,
    ) -> Kind {
        let mismatch = |findings: &mut Vec<Error>, what: &str, got: Kind| {
            findings.push(Error::new(
                ErrorCode::S006,
                span.line,
                span.column,
                format!("`{}` needs {what} operands, found {}", op.symbol(), got.describe()),
            ));
        };

        if op.is_arithmetic() || op.is_comparison() {
            for kind in [lk, rk] {
                if !kind.matches(Kind::Number) {
                    mismatch(findings, "number", kind);
                }
            }
            if op.is_arithmetic() { Kind::Number } else { Kind::Bool }
        } else if op.is_logical() {
            for kind in [lk, rk] {
                if !kind.matches(Kind::Bool) {
                    mismatch(findings, "boolean", kind);
                }
            }
            Kind::Bool
        } else {
            // equality: both sides must agree when both are known
            if !lk.matches(rk) {
                findings.push(Error::new(
                    ErrorCode::S006,
                    span.line,
                    span.column,
                    format!(
                        "`{}` compares {} with {}",
                        op.symbol(),
                        lk.describe(),
                        rk.describe()
                    ),
                ));
            }
            Kind::Bool
        }
    }

    /// Arity is always checked; parameter kinds only where the argument
    /// kind is known.
    fn check_call(
        &mut self,
        func: Builtin,
        args: &[Expr],
        kinds: &[Kind],
        span: Span,
        findings: &mut Vec<Error>,
    ) -> Kind {
        if args.len() != func.arity() {
            findings.push(Error::new(
                ErrorCode::S007,
                span.line,
                span.column,
                format!(
                    "{} takes {} argument(s), found {}",
                    func.name(),
                    func.arity(),
                    args.len()
                ),
            ));
        } else {
            for (i, (arg, got)) in args.iter().zip(kinds).enumerate() {
                let want = param_kind(func, i);
                if !got.matches(want) {
                    let arg_span = arg.span();
                    findings.push(Error::new(
                        ErrorCode::S008,
                        arg_span.line,
                        arg_span.column,
                        format!(
                            "argument {} of {} must be {}, found {}",
                            i + 1,
                            func.name(),
                            want.describe(),
                            got.describe()
                        ),
                    ));
                }
            }
        }

        // every built-in yields a number; the Is* family reports 0 or 1
        Kind::Number
    }
}

fn param_kind(func: Builtin, index: usize) -> Kind {
    match (func, index) {
        (Builtin::IsBrushColor, 0) => Kind::Color,
        (Builtin::IsBrushSize, 0) => Kind::Number,
        (Builtin::IsCanvasColor, 0) => Kind::Color,
        (Builtin::IsCanvasColor, _) => Kind::Number,
        (Builtin::GetColorCount, 0) => Kind::Color,
        (Builtin::GetColorCount, _) => Kind::Number,
        _ => Kind::Unknown,
    }
}
