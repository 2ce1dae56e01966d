use crate::canvas::Color;
use crate::syntax::token::Builtin;

/// Source location attached to every node for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

// ─── Expressions ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Expr {
    Number(i64, Span),
    Bool(bool, Span),
    ColorLit(Color, Span),
    Variable(String, Span),

    /// `-x`
    Unary {
        op: UnOp,
        operand: Box<Expr>,
        span: Span,
    },

    /// `a + b`, `a == b`, `a && b`, …
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
        span: Span,
    },

    /// `( expr )` — kept as a node so parenthesized literals still count as
    /// literal evidence for the resolver.
    Grouping(Box<Expr>, Span),

    /// `GetColorCount("Red", 0, 0, x, y)` — the callee is always one of the
    /// fixed built-ins; argument count is validated later, not here.
    Call {
        func: Builtin,
        args: Vec<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Number(_, s)      => *s,
            Expr::Bool(_, s)        => *s,
            Expr::ColorLit(_, s)    => *s,
            Expr::Variable(_, s)    => *s,
            Expr::Unary { span, .. }   => *span,
            Expr::Binary { span, .. }  => *span,
            Expr::Grouping(_, s)    => *s,
            Expr::Call { span, .. } => *span,
        }
    }
}

// ─── Statements ──────────────────────────────────────────────────────────────

/// A program is an ordered `Vec<Stmt>`; order carries both execution order
/// and label target indices.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// `Spawn(x, y)` — must be the first non-label statement, exactly once.
    Spawn { x: Expr, y: Expr, span: Span },
    /// `Color("Red")`
    Color { color: Expr, span: Span },
    /// `Size(3)`
    Size { value: Expr, span: Span },
    /// `DrawLine(dirX, dirY, distance)`
    DrawLine { dir_x: Expr, dir_y: Expr, distance: Expr, span: Span },
    /// `DrawCircle(dirX, dirY, radius)`
    DrawCircle { dir_x: Expr, dir_y: Expr, radius: Expr, span: Span },
    /// `DrawRectangle(dirX, dirY, distance, width, height)`
    DrawRectangle {
        dir_x: Expr,
        dir_y: Expr,
        distance: Expr,
        width: Expr,
        height: Expr,
        span: Span,
    },
    /// `Fill()`
    Fill { span: Span },
    /// `name <- expr`
    Assign { name: String, value: Expr, span: Span },
    /// A bare identifier on its own line; a jump target, no-op at runtime.
    Label { name: String, span: Span },
    /// `GoTo[label](condition)`
    Goto { label: String, condition: Expr, span: Span },
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Spawn { span, .. }
            | Stmt::Color { span, .. }
            | Stmt::Size { span, .. }
            | Stmt::DrawLine { span, .. }
            | Stmt::DrawCircle { span, .. }
            | Stmt::DrawRectangle { span, .. }
            | Stmt::Fill { span }
            | Stmt::Assign { span, .. }
            | Stmt::Label { span, .. }
            | Stmt::Goto { span, .. } => *span,
        }
    }
}

// ─── Operators ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add, Sub, Mul, Div, Mod, Pow,
    Eq, NotEq,
    Lt, LtEq, Gt, GtEq,
    And, Or,
}

impl BinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",  Self::Sub => "-",
            Self::Mul => "*",  Self::Div => "/",
            Self::Mod => "%",  Self::Pow => "**",
            Self::Eq => "==",  Self::NotEq => "!=",
            Self::Lt => "<",   Self::LtEq => "<=",
            Self::Gt => ">",   Self::GtEq => ">=",
            Self::And => "&&", Self::Or => "||",
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod | Self::Pow)
    }

    pub fn is_comparison(&self) -> bool {
        matches!(self, Self::Lt | Self::LtEq | Self::Gt | Self::GtEq)
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    pub fn is_equality(&self) -> bool {
        matches!(self, Self::Eq | Self::NotEq)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,
}
