//! E-Painter: a small turtle-graphics language over a square pixel canvas.
//!
//! The pipeline runs source text through the scanner, parser, and resolver,
//! then interprets the statement list against a [`Canvas`]:
//!
//! ```text
//! source → Lexer → Parser → resolve → Interpreter → Canvas
//! ```
//!
//! [`run`] is the whole contract in one call; [`compile`] stops before
//! execution for callers that only want validation.
//!
//! ```
//! use epainter_lang::{run, Color};
//!
//! let outcome = run("Spawn(0, 0)\nColor(\"Black\")\nDrawLine(1, 0, 3)\n", 10);
//! assert!(outcome.diagnostics.is_clean());
//! assert_eq!(outcome.canvas.get(3, 0), Some(Color::Black));
//! ```

pub mod analysis;
pub mod canvas;
pub mod error;
pub mod runtime;
pub mod syntax;

pub use canvas::{Canvas, Color, Cursor};
pub use error::{Error, ErrorCode, RuntimeError};
pub use runtime::{Interpreter, Value};

use syntax::ast::Stmt;
use syntax::lexer::Lexer;
use syntax::parser::Parser;

/// A validated program: statements plus any resolver warnings that did not
/// block compilation.
#[derive(Debug)]
pub struct Program {
    pub stmts: Vec<Stmt>,
    pub warnings: Vec<Error>,
}

/// Everything one run reported, split by phase. A fresh value per run;
/// nothing is shared between runs.
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub lexical: Vec<Error>,
    pub syntax: Vec<Error>,
    pub semantic: Vec<Error>,
    pub warnings: Vec<Error>,
    pub runtime: Option<RuntimeError>,
}

impl Diagnostics {
    /// No errors of any phase. Warnings do not count.
    pub fn is_clean(&self) -> bool {
        self.lexical.is_empty()
            && self.syntax.is_empty()
            && self.semantic.is_empty()
            && self.runtime.is_none()
    }
}

/// What a full run produced: the canvas (holding all paint applied before
/// any failure) and the per-phase diagnostics.
#[derive(Debug)]
pub struct RunOutcome {
    pub canvas: Canvas,
    pub diagnostics: Diagnostics,
}

/// Scans, parses, and resolves without executing. Any hard error of any
/// phase fails compilation; resolver warnings ride along in the program.
pub fn compile(source: &str, canvas_size: usize) -> Result<Program, Vec<Error>> {
    let tokens = Lexer::new(source).tokenize()?;
    let stmts = Parser::new(tokens).parse()?;

    let resolution = analysis::resolve(&stmts, canvas_size);
    if !resolution.is_clean() {
        return Err(resolution.errors);
    }
    Ok(Program { stmts, warnings: resolution.warnings })
}

/// The full contract: compile and execute against a fresh `canvas_size`
/// square canvas. Lexical and syntax errors block everything downstream;
/// semantic errors block execution; a runtime error stops at the failing
/// statement and the canvas keeps everything painted before it.
pub fn run(source: &str, canvas_size: usize) -> RunOutcome {
    let mut diagnostics = Diagnostics::default();

    let tokens = match Lexer::new(source).tokenize() {
        Ok(tokens) => tokens,
        Err(errors) => {
            diagnostics.lexical = errors;
            return RunOutcome { canvas: Canvas::new(canvas_size), diagnostics };
        }
    };

    let stmts = match Parser::new(tokens).parse() {
        Ok(stmts) => stmts,
        Err(errors) => {
            diagnostics.syntax = errors;
            return RunOutcome { canvas: Canvas::new(canvas_size), diagnostics };
        }
    };

    let resolution = analysis::resolve(&stmts, canvas_size);
    diagnostics.warnings = resolution.warnings;
    if !resolution.errors.is_empty() {
        diagnostics.semantic = resolution.errors;
        return RunOutcome { canvas: Canvas::new(canvas_size), diagnostics };
    }

    let mut interpreter = Interpreter::new(stmts, Canvas::new(canvas_size));
    if let Err(error) = interpreter.run() {
        diagnostics.runtime = Some(error);
    }
    RunOutcome { canvas: interpreter.into_canvas(), diagnostics }
}
