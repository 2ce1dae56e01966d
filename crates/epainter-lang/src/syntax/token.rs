use crate::canvas::Color;

/// Built-in query functions usable inside expressions. The scanner maps their
/// names to `TokenKind::Func`; arity is checked by the resolver, not the
/// parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    GetActualX,
    GetActualY,
    GetCanvasSize,
    GetColorCount,
    IsBrushColor,
    IsBrushSize,
    IsCanvasColor,
}

impl Builtin {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetActualX    => "GetActualX",
            Self::GetActualY    => "GetActualY",
            Self::GetCanvasSize => "GetCanvasSize",
            Self::GetColorCount => "GetColorCount",
            Self::IsBrushColor  => "IsBrushColor",
            Self::IsBrushSize   => "IsBrushSize",
            Self::IsCanvasColor => "IsCanvasColor",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Self::GetActualX | Self::GetActualY | Self::GetCanvasSize => 0,
            Self::IsBrushColor | Self::IsBrushSize => 1,
            Self::IsCanvasColor => 3,
            Self::GetColorCount => 5,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    Number(i64),
    Bool(bool),
    ColorLit(Color),
    Ident(String),

    // Command keywords
    Spawn,
    Color,
    Size,
    DrawLine,
    DrawCircle,
    DrawRectangle,
    Fill,
    GoTo,

    // Built-in function names
    Func(Builtin),

    // Operators
    Plus,      // +
    Minus,     // -
    Star,      // *
    StarStar,  // **
    Slash,     // /
    Percent,   // %
    Eq,        // =
    EqEq,      // ==
    BangEq,    // !=
    Lt,        // <
    LtEq,      // <=
    Gt,        // >
    GtEq,      // >=
    AndAnd,    // &&
    OrOr,      // ||
    Arrow,     // <-

    // Punctuation
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    Comma,     // ,

    // Statements are newline-terminated, so the scanner keeps newlines.
    Newline,
    Eof,
}

impl TokenKind {
    pub fn is_command(&self) -> bool {
        matches!(
            self,
            Self::Spawn | Self::Color | Self::Size | Self::DrawLine
            | Self::DrawCircle | Self::DrawRectangle | Self::Fill | Self::GoTo
        )
    }

    /// Canonical source text of a token. Re-lexing the joined lexemes of a
    /// token stream reproduces it kind-for-kind.
    pub fn lexeme(&self) -> String {
        match self {
            Self::Number(n)   => n.to_string(),
            Self::Bool(true)  => "True".into(),
            Self::Bool(false) => "False".into(),
            Self::ColorLit(c) => format!("\"{c}\""),
            Self::Ident(s)    => s.clone(),
            Self::Spawn         => "Spawn".into(),
            Self::Color         => "Color".into(),
            Self::Size          => "Size".into(),
            Self::DrawLine      => "DrawLine".into(),
            Self::DrawCircle    => "DrawCircle".into(),
            Self::DrawRectangle => "DrawRectangle".into(),
            Self::Fill          => "Fill".into(),
            Self::GoTo          => "GoTo".into(),
            Self::Func(b)       => b.name().into(),
            Self::Plus     => "+".into(),
            Self::Minus    => "-".into(),
            Self::Star     => "*".into(),
            Self::StarStar => "**".into(),
            Self::Slash    => "/".into(),
            Self::Percent  => "%".into(),
            Self::Eq       => "=".into(),
            Self::EqEq     => "==".into(),
            Self::BangEq   => "!=".into(),
            Self::Lt       => "<".into(),
            Self::LtEq     => "<=".into(),
            Self::Gt       => ">".into(),
            Self::GtEq     => ">=".into(),
            Self::AndAnd   => "&&".into(),
            Self::OrOr     => "||".into(),
            Self::Arrow    => "<-".into(),
            Self::LParen   => "(".into(),
            Self::RParen   => ")".into(),
            Self::LBracket => "[".into(),
            Self::RBracket => "]".into(),
            Self::Comma    => ",".into(),
            Self::Newline  => "\n".into(),
            Self::Eof      => String::new(),
        }
    }
}

/// Maps an identifier string through the fixed keyword table, or returns
/// `Ident`.
pub fn keyword_or_ident(s: String) -> TokenKind {
    match s.as_str() {
        "Spawn"         => TokenKind::Spawn,
        "Color"         => TokenKind::Color,
        "Size"          => TokenKind::Size,
        "DrawLine"      => TokenKind::DrawLine,
        "DrawCircle"    => TokenKind::DrawCircle,
        "DrawRectangle" => TokenKind::DrawRectangle,
        "Fill"          => TokenKind::Fill,
        "GoTo"          => TokenKind::GoTo,
        "True"          => TokenKind::Bool(true),
        "False"         => TokenKind::Bool(false),
        "GetActualX"    => TokenKind::Func(Builtin::GetActualX),
        "GetActualY"    => TokenKind::Func(Builtin::GetActualY),
        "GetCanvasSize" => TokenKind::Func(Builtin::GetCanvasSize),
        "GetColorCount" => TokenKind::Func(Builtin::GetColorCount),
        "IsBrushColor"  => TokenKind::Func(Builtin::IsBrushColor),
        "IsBrushSize"   => TokenKind::Func(Builtin::IsBrushSize),
        "IsCanvasColor" => TokenKind::Func(Builtin::IsCanvasColor),
        _               => TokenKind::Ident(s),
    }
}

// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }
}
