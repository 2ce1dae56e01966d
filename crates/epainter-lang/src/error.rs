use thiserror::Error;

/// Error codes prefixed by phase: L = scanner, P = parser, S = semantic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Scanner
    L001, // unexpected character
    L002, // unterminated color literal
    L003, // unknown color name
    L004, // number literal out of range

    // Parser
    P001, // unexpected token
    P002, // missing expected token
    P003, // malformed statement after identifier

    // Semantic / resolver
    S001, // variable used before assignment
    S002, // program must start with a single Spawn
    S003, // more than one Spawn
    S004, // GoTo target does not exist
    S005, // duplicate label
    S006, // operand kind mismatch (literal evidence)
    S007, // wrong built-in argument count
    S008, // wrong built-in argument kind
    S009, // invalid direction vector
    S010, // literal value out of range
    S011, // suspiciously large literal value     (warning)
    S012, // zero direction vector on circle/rect (warning)
}

impl ErrorCode {
    /// `S011` and `S012` are warnings — they never block execution.
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::S011 | Self::S012)
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, Self::L001 | Self::L002 | Self::L003 | Self::L004)
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::P001 | Self::P002 | Self::P003)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L001 => "L001",
            Self::L002 => "L002",
            Self::L003 => "L003",
            Self::L004 => "L004",
            Self::P001 => "P001",
            Self::P002 => "P002",
            Self::P003 => "P003",
            Self::S001 => "S001",
            Self::S002 => "S002",
            Self::S003 => "S003",
            Self::S004 => "S004",
            Self::S005 => "S005",
            Self::S006 => "S006",
            Self::S007 => "S007",
            Self::S008 => "S008",
            Self::S009 => "S009",
            Self::S010 => "S010",
            Self::S011 => "S011",
            Self::S012 => "S012",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scan/parse/resolve diagnostic with its source position.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {line}:{column} — {message}")]
pub struct Error {
    pub code: ErrorCode,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl Error {
    pub fn new(code: ErrorCode, line: usize, column: usize, message: impl Into<String>) -> Self {
        Self { code, line, column, message: message.into() }
    }
}

// ─────────────────────────────────────────────────────────────────────────────

/// Fatal execution failure. Stops the run at the offending statement; the
/// canvas keeps everything painted before it.
#[derive(Debug, Clone, Error)]
#[error("[runtime] line {line} — {message}")]
pub struct RuntimeError {
    pub line: usize,
    pub message: String,
}

impl RuntimeError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self { line, message: message.into() }
    }
}
