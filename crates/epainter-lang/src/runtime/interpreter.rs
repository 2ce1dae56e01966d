//! Tree-walking execution of a statement list against a canvas.
//!
//! Control flow is a plain program counter; a `Goto` whose condition holds
//! returns [`Flow::JumpTo`] and the loop moves `pc`. Jumps are counted per
//! label and capped so a runaway loop aborts instead of spinning forever.

use std::collections::HashMap;

use crate::canvas::{Canvas, Cursor};
use crate::error::RuntimeError;
use crate::runtime::drawing;
use crate::runtime::value::Value;
use crate::syntax::ast::{BinOp, Expr, Stmt, UnOp};
use crate::syntax::token::Builtin;

/// Jumps to one label beyond this count abort the run.
const JUMP_LIMIT: u32 = 1000;

enum Flow {
    Continue,
    JumpTo(usize),
}

pub struct Interpreter {
    stmts: Vec<Stmt>,
    canvas: Canvas,
    cursor: Cursor,
    vars: HashMap<String, Value>,
    labels: HashMap<String, usize>,
    jumps: HashMap<String, u32>,
}

impl Interpreter {
    pub fn new(stmts: Vec<Stmt>, canvas: Canvas) -> Self {
        // first declaration wins; duplicates were already reported statically
        let mut labels = HashMap::new();
        for (index, stmt) in stmts.iter().enumerate() {
            if let Stmt::Label { name, .. } = stmt {
                labels.entry(name.clone()).or_insert(index);
            }
        }

        Self {
            stmts,
            canvas,
            cursor: Cursor::origin(),
            vars: HashMap::new(),
            labels,
            jumps: HashMap::new(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn var(&self, name: &str) -> Option<Value> {
        self.vars.get(name).copied()
    }

    pub fn run(&mut self) -> Result<(), RuntimeError> {
        self.check_spawn_shape()?;

        let mut pc = 0;
        while pc < self.stmts.len() {
            let stmt = self.stmts[pc].clone();
            match self.exec_stmt(&stmt)? {
                Flow::Continue => pc += 1,
                Flow::JumpTo(index) => pc = index,
            }
        }
        Ok(())
    }

    /// Last line of defense: the resolver reports these statically, but a
    /// directly-constructed interpreter must not execute a malformed
    /// program either.
    fn check_spawn_shape(&self) -> Result<(), RuntimeError> {
        let mut seen = false;
        for stmt in &self.stmts {
            match stmt {
                Stmt::Label { .. } => {}
                Stmt::Spawn { span, .. } => {
                    if seen {
                        return Err(RuntimeError::new(span.line, "Spawn may appear only once"));
                    }
                    seen = true;
                }
                other => {
                    if !seen {
                        return Err(RuntimeError::new(
                            other.span().line,
                            "the program must begin with Spawn",
                        ));
                    }
                }
            }
        }
        if !seen && !self.stmts.is_empty() {
            return Err(RuntimeError::new(1, "the program must begin with Spawn"));
        }
        Ok(())
    }

    // ─── Statements ──────────────────────────────────────────────────────────

    fn exec_stmt(&mut self, stmt: &Stmt) -> Result<Flow, RuntimeError> {
        match stmt {
            Stmt::Label { .. } => Ok(Flow::Continue),

            Stmt::Spawn { x, y, span } => {
                let line = span.line;
                let x = self.eval(x)?.as_number(line, "Spawn x")?;
                let y = self.eval(y)?.as_number(line, "Spawn y")?;
                if !self.canvas.in_bounds(x, y) {
                    return Err(RuntimeError::new(
                        line,
                        format!(
                            "Spawn ({x}, {y}) is outside the canvas (size {})",
                            self.canvas.size()
                        ),
                    ));
                }
                self.cursor = Cursor::spawned(x, y);
                Ok(Flow::Continue)
            }

            Stmt::Color { color, span } => {
                let value = self.eval(color)?.as_color(span.line, "Color argument")?;
                self.cursor.color = value;
                Ok(Flow::Continue)
            }

            Stmt::Size { value, span } => {
                let line = span.line;
                let size = self.eval(value)?.as_number(line, "Size argument")?;
                if size <= 0 {
                    return Err(RuntimeError::new(
                        line,
                        format!("brush size must be positive, found {size}"),
                    ));
                }
                self.cursor.set_size(size);
                Ok(Flow::Continue)
            }

            Stmt::DrawLine { dir_x, dir_y, distance, span } => {
                let line = span.line;
                let dx = self.eval(dir_x)?.as_number(line, "direction x")?;
                let dy = self.eval(dir_y)?.as_number(line, "direction y")?;
                let distance = self.eval(distance)?.as_number(line, "distance")?;
                drawing::draw_line(&mut self.canvas, &mut self.cursor, dx, dy, distance, line)?;
                Ok(Flow::Continue)
            }

            Stmt::DrawCircle { dir_x, dir_y, radius, span } => {
                let line = span.line;
                let dx = self.eval(dir_x)?.as_number(line, "direction x")?;
                let dy = self.eval(dir_y)?.as_number(line, "direction y")?;
                let radius = self.eval(radius)?.as_number(line, "radius")?;
                drawing::draw_circle(&mut self.canvas, &mut self.cursor, dx, dy, radius, line)?;
                Ok(Flow::Continue)
            }

            Stmt::DrawRectangle { dir_x, dir_y, distance, width, height, span } => {
                let line = span.line;
                let dx = self.eval(dir_x)?.as_number(line, "direction x")?;
                let dy = self.eval(dir_y)?.as_number(line, "direction y")?;
                let distance = self.eval(distance)?.as_number(line, "distance")?;
                let width = self.eval(width)?.as_number(line, "width")?;
                let height = self.eval(height)?.as_number(line, "height")?;
                drawing::draw_rectangle(
                    &mut self.canvas,
                    &mut self.cursor,
                    dx,
                    dy,
                    distance,
                    width,
                    height,
                    line,
                )?;
                Ok(Flow::Continue)
            }

            Stmt::Fill { .. } => {
                drawing::flood_fill(&mut self.canvas, &self.cursor);
                Ok(Flow::Continue)
            }

            Stmt::Assign { name, value, .. } => {
                let value = self.eval(value)?;
                self.vars.insert(name.clone(), value);
                Ok(Flow::Continue)
            }

            Stmt::Goto { label, condition, span } => {
                let line = span.line;
                let jump = self.eval(condition)?.as_bool(line, "GoTo condition")?;
                if !jump {
                    return Ok(Flow::Continue);
                }

                let Some(&index) = self.labels.get(label) else {
                    return Err(RuntimeError::new(
                        line,
                        format!("GoTo target `{label}` does not exist"),
                    ));
                };

                let count = self.jumps.entry(label.clone()).or_insert(0);
                *count += 1;
                if *count > JUMP_LIMIT {
                    return Err(RuntimeError::new(
                        line,
                        format!("label `{label}` was jumped to more than {JUMP_LIMIT} times"),
                    ));
                }
                Ok(Flow::JumpTo(index))
            }
        }
    }

    // ─── Expressions ─────────────────────────────────────────────────────────

    fn eval(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Number(n, _) => Ok(Value::Number(*n)),
            Expr::Bool(b, _) => Ok(Value::Bool(*b)),
            Expr::ColorLit(c, _) => Ok(Value::Color(*c)),
            Expr::Grouping(inner, _) => self.eval(inner),

            Expr::Variable(name, span) => self.vars.get(name).copied().ok_or_else(|| {
                RuntimeError::new(span.line, format!("variable `{name}` is not defined"))
            }),

            Expr::Unary { op: UnOp::Neg, operand, span } => {
                let n = self.eval(operand)?.as_number(span.line, "negation operand")?;
                n.checked_neg()
                    .map(Value::Number)
                    .ok_or_else(|| RuntimeError::new(span.line, "arithmetic overflow"))
            }

            Expr::Binary { left, op, right, span } => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                self.apply_binary(*op, lhs, rhs, span.line)
            }

            Expr::Call { func, args, span } => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval(arg)?);
                }
                self.call_builtin(*func, &values, span.line)
            }
        }
    }

    fn apply_binary(
        &mut self,
        op: BinOp,
        lhs: Value,
        rhs: Value,
        line: usize,
    ) -> Result<Value, RuntimeError> {
        if op.is_arithmetic() || op.is_comparison() {
            let operand = format!("`{}` operand", op.symbol());
            let a = lhs.as_number(line, &operand)?;
            let b = rhs.as_number(line, &operand)?;
            return match op {
                BinOp::Add => checked(a.checked_add(b), line),
                BinOp::Sub => checked(a.checked_sub(b), line),
                BinOp::Mul => checked(a.checked_mul(b), line),
                BinOp::Div => {
                    if b == 0 {
                        Err(RuntimeError::new(line, "division by zero"))
                    } else {
                        checked(a.checked_div(b), line)
                    }
                }
                BinOp::Mod => {
                    if b == 0 {
                        Err(RuntimeError::new(line, "modulo by zero"))
                    } else {
                        checked(a.checked_rem(b), line)
                    }
                }
                BinOp::Pow => {
                    if b < 0 {
                        Err(RuntimeError::new(
                            line,
                            format!("`**` exponent must not be negative, found {b}"),
                        ))
                    } else {
                        let exp = u32::try_from(b)
                            .map_err(|_| RuntimeError::new(line, "arithmetic overflow"))?;
                        checked(a.checked_pow(exp), line)
                    }
                }
                BinOp::Lt => Ok(Value::Bool(a < b)),
                BinOp::LtEq => Ok(Value::Bool(a <= b)),
                BinOp::Gt => Ok(Value::Bool(a > b)),
                BinOp::GtEq => Ok(Value::Bool(a >= b)),
                _ => unreachable!("arithmetic/comparison operators covered above"),
            };
        }

        if op.is_logical() {
            // both sides already evaluated; the language has no short-circuit
            let operand = format!("`{}` operand", op.symbol());
            let a = lhs.as_bool(line, &operand)?;
            let b = rhs.as_bool(line, &operand)?;
            return Ok(Value::Bool(match op {
                BinOp::And => a && b,
                BinOp::Or => a || b,
                _ => unreachable!("logical operators covered above"),
            }));
        }

        // equality over matching kinds only
        match (lhs, rhs) {
            (Value::Number(_), Value::Number(_))
            | (Value::Bool(_), Value::Bool(_))
            | (Value::Color(_), Value::Color(_)) => {
                let equal = lhs == rhs;
                Ok(Value::Bool(if op == BinOp::Eq { equal } else { !equal }))
            }
            _ => Err(RuntimeError::new(
                line,
                format!("`{}` compares {} with {}", op.symbol(), lhs.kind(), rhs.kind()),
            )),
        }
    }

    fn call_builtin(
        &mut self,
        func: Builtin,
        args: &[Value],
        line: usize,
    ) -> Result<Value, RuntimeError> {
        if args.len() != func.arity() {
            return Err(RuntimeError::new(
                line,
                format!(
                    "{} takes {} argument(s), found {}",
                    func.name(),
                    func.arity(),
                    args.len()
                ),
            ));
        }

        match func {
            Builtin::GetActualX => Ok(Value::Number(self.cursor.x)),
            Builtin::GetActualY => Ok(Value::Number(self.cursor.y)),
            Builtin::GetCanvasSize => Ok(Value::Number(self.canvas.size() as i64)),

            Builtin::IsBrushColor => {
                let color = args[0].as_color(line, "IsBrushColor argument")?;
                Ok(Value::Number((self.cursor.color == color) as i64))
            }

            Builtin::IsBrushSize => {
                let size = args[0].as_number(line, "IsBrushSize argument")?;
                Ok(Value::Number((self.cursor.size == size) as i64))
            }

            // reads relative to the cursor; anything off-canvas is "no",
            // including offsets too large to even address
            Builtin::IsCanvasColor => {
                let color = args[0].as_color(line, "IsCanvasColor color")?;
                let dx = args[1].as_number(line, "IsCanvasColor offset x")?;
                let dy = args[2].as_number(line, "IsCanvasColor offset y")?;
                let matched = match (self.cursor.x.checked_add(dx), self.cursor.y.checked_add(dy)) {
                    (Some(px), Some(py)) => self.canvas.get(px, py) == Some(color),
                    _ => false,
                };
                Ok(Value::Number(matched as i64))
            }

            Builtin::GetColorCount => {
                let color = args[0].as_color(line, "GetColorCount color")?;
                let x1 = args[1].as_number(line, "GetColorCount x1")?;
                let y1 = args[2].as_number(line, "GetColorCount y1")?;
                let x2 = args[3].as_number(line, "GetColorCount x2")?;
                let y2 = args[4].as_number(line, "GetColorCount y2")?;
                Ok(Value::Number(self.canvas.count_in_box(color, x1, y1, x2, y2)))
            }
        }
    }
}

fn checked(result: Option<i64>, line: usize) -> Result<Value, RuntimeError> {
    result
        .map(Value::Number)
        .ok_or_else(|| RuntimeError::new(line, "arithmetic overflow"))
}
