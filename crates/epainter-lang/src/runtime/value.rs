use crate::canvas::Color;
use crate::error::RuntimeError;

/// A runtime value: number, boolean, or palette color. The set is closed;
/// every operator and built-in matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Bool(bool),
    Color(Color),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Color(_) => "color",
        }
    }

    pub fn as_number(&self, line: usize, what: &str) -> Result<i64, RuntimeError> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(RuntimeError::new(
                line,
                format!("{what} must be a number, found {}", other.kind()),
            )),
        }
    }

    pub fn as_bool(&self, line: usize, what: &str) -> Result<bool, RuntimeError> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(RuntimeError::new(
                line,
                format!("{what} must be a boolean, found {}", other.kind()),
            )),
        }
    }

    pub fn as_color(&self, line: usize, what: &str) -> Result<Color, RuntimeError> {
        match self {
            Self::Color(c) => Ok(*c),
            other => Err(RuntimeError::new(
                line,
                format!("{what} must be a color, found {}", other.kind()),
            )),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Color(c) => write!(f, "\"{c}\""),
        }
    }
}
