use crate::error::{Error, ErrorCode};
use crate::syntax::ast::*;
use crate::syntax::token::{Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the whole token stream, collecting one error per malformed
    /// statement instead of aborting. A statement that fails to parse
    /// contributes no node; recovery resumes at the next line or command.
    pub fn parse(mut self) -> Result<Vec<Stmt>, Vec<Error>> {
        let mut stmts = Vec::new();
        let mut errors = Vec::new();

        while !self.is_at_end() {
            if self.matches(TokenKind::Newline) {
                continue; // blank line
            }
            let pos_before = self.pos;

            match self.parse_stmt() {
                Ok(s) => stmts.push(s),
                Err(e) => { errors.push(e); self.recover(); }
            }

            // guarantee progress — if nothing was consumed, force-advance
            // to prevent an infinite loop on unrecognised tokens
            if self.pos == pos_before {
                self.advance();
            }
        }

        if errors.is_empty() { Ok(stmts) } else { Err(errors) }
    }

    // ─── Statements ──────────────────────────────────────────────────────────

    fn parse_stmt(&mut self) -> Result<Stmt, Error> {
        match self.peek_kind() {
            TokenKind::Spawn         => self.parse_spawn(),
            TokenKind::Color         => self.parse_color(),
            TokenKind::Size          => self.parse_size(),
            TokenKind::DrawLine      => self.parse_draw_line(),
            TokenKind::DrawCircle    => self.parse_draw_circle(),
            TokenKind::DrawRectangle => self.parse_draw_rectangle(),
            TokenKind::Fill          => self.parse_fill(),
            TokenKind::GoTo          => self.parse_goto(),
            TokenKind::Ident(_)      => self.parse_label_or_assign(),
            _ => Err(self.unexpected("statement")),
        }
    }

    fn parse_spawn(&mut self) -> Result<Stmt, Error> {
        let span = self.span();
        self.advance();
        self.expect(TokenKind::LParen)?;
        let x = self.parse_expr()?;
        self.expect(TokenKind::Comma)?;
        let y = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        self.expect_terminator()?;
        Ok(Stmt::Spawn { x, y, span })
    }

    fn parse_color(&mut self) -> Result<Stmt, Error> {
        let span = self.span();
        self.advance();
        self.expect(TokenKind::LParen)?;
        let color = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        self.expect_terminator()?;
        Ok(Stmt::Color { color, span })
    }

    fn parse_size(&mut self) -> Result<Stmt, Error> {
        let span = self.span();
        self.advance();
        self.expect(TokenKind::LParen)?;
        let value = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        self.expect_terminator()?;
        Ok(Stmt::Size { value, span })
    }

    fn parse_draw_line(&mut self) -> Result<Stmt, Error> {
        let span = self.span();
        self.advance();
        self.expect(TokenKind::LParen)?;
        let dir_x = self.parse_expr()?;
        self.expect(TokenKind::Comma)?;
        let dir_y = self.parse_expr()?;
        self.expect(TokenKind::Comma)?;
        let distance = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        self.expect_terminator()?;
        Ok(Stmt::DrawLine { dir_x, dir_y, distance, span })
    }

    fn parse_draw_circle(&mut self) -> Result<Stmt, Error> {
        let span = self.span();
        self.advance();
        self.expect(TokenKind::LParen)?;
        let dir_x = self.parse_expr()?;
        self.expect(TokenKind::Comma)?;
        let dir_y = self.parse_expr()?;
        self.expect(TokenKind::Comma)?;
        let radius = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        self.expect_terminator()?;
        Ok(Stmt::DrawCircle { dir_x, dir_y, radius, span })
    }

    fn parse_draw_rectangle(&mut self) -> Result<Stmt, Error> {
        let span = self.span();
        self.advance();
        self.expect(TokenKind::LParen)?;
        let dir_x = self.parse_expr()?;
        self.expect(TokenKind::Comma)?;
        let dir_y = self.parse_expr()?;
        self.expect(TokenKind::Comma)?;
        let distance = self.parse_expr()?;
        self.expect(TokenKind::Comma)?;
        let width = self.parse_expr()?;
        self.expect(TokenKind::Comma)?;
        let height = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        self.expect_terminator()?;
        Ok(Stmt::DrawRectangle { dir_x, dir_y, distance, width, height, span })
    }

    fn parse_fill(&mut self) -> Result<Stmt, Error> {
        let span = self.span();
        self.advance();
        self.expect(TokenKind::LParen)?;
        self.expect(TokenKind::RParen)?;
        self.expect_terminator()?;
        Ok(Stmt::Fill { span })
    }

    fn parse_goto(&mut self) -> Result<Stmt, Error> {
        let span = self.span();
        self.advance();
        self.expect(TokenKind::LBracket)?;
        let label = self.expect_ident()?;
        self.expect(TokenKind::RBracket)?;
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        self.expect_terminator()?;
        Ok(Stmt::Goto { label, condition, span })
    }

    /// A bare identifier at statement position is either a label (followed
    /// directly by end of line) or an assignment (`name <- expr`). Anything
    /// else after the identifier is malformed.
    fn parse_label_or_assign(&mut self) -> Result<Stmt, Error> {
        let span = self.span();
        let name = self.expect_ident()?;

        match self.peek_kind() {
            TokenKind::Newline => {
                self.advance();
                Ok(Stmt::Label { name, span })
            }
            TokenKind::Eof => Ok(Stmt::Label { name, span }),
            TokenKind::Arrow => {
                self.advance();
                let value = self.parse_expr()?;
                self.expect_terminator()?;
                Ok(Stmt::Assign { name, value, span })
            }
            other => Err(Error::new(
                ErrorCode::P003,
                span.line,
                span.column,
                format!("expected `<-` or end of line after `{name}`, found {other:?}"),
            )),
        }
    }

    // ─── Expressions ─────────────────────────────────────────────────────────
    //
    // Precedence, loosest to tightest, exactly as the language defines it
    // (note that `&&` binds looser than `||` here):
    //   logicalAnd → logicalOr → equality → comparison → term → factor
    //   → unary → power → primary

    fn parse_expr(&mut self) -> Result<Expr, Error> {
        self.parse_logical_and()
    }

    fn parse_logical_and(&mut self) -> Result<Expr, Error> {
        let mut left = self.parse_logical_or()?;
        while self.matches(TokenKind::AndAnd) {
            let span = left.span();
            let right = self.parse_logical_or()?;
            left = Expr::Binary { left: Box::new(left), op: BinOp::And, right: Box::new(right), span };
        }
        Ok(left)
    }

    fn parse_logical_or(&mut self) -> Result<Expr, Error> {
        let mut left = self.parse_equality()?;
        while self.matches(TokenKind::OrOr) {
            let span = left.span();
            let right = self.parse_equality()?;
            left = Expr::Binary { left: Box::new(left), op: BinOp::Or, right: Box::new(right), span };
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, Error> {
        let mut left = self.parse_comparison()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::EqEq   => BinOp::Eq,
                TokenKind::BangEq => BinOp::NotEq,
                _ => break,
            };
            let span = left.span();
            self.advance();
            let right = self.parse_comparison()?;
            left = Expr::Binary { left: Box::new(left), op, right: Box::new(right), span };
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expr, Error> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Lt   => BinOp::Lt,
                TokenKind::LtEq => BinOp::LtEq,
                TokenKind::Gt   => BinOp::Gt,
                TokenKind::GtEq => BinOp::GtEq,
                _ => break,
            };
            let span = left.span();
            self.advance();
            let right = self.parse_term()?;
            left = Expr::Binary { left: Box::new(left), op, right: Box::new(right), span };
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, Error> {
        let mut left = self.parse_factor()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus  => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            let span = left.span();
            self.advance();
            let right = self.parse_factor()?;
            left = Expr::Binary { left: Box::new(left), op, right: Box::new(right), span };
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expr, Error> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star    => BinOp::Mul,
                TokenKind::Slash   => BinOp::Div,
                TokenKind::Percent => BinOp::Mod,
                _ => break,
            };
            let span = left.span();
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::Binary { left: Box::new(left), op, right: Box::new(right), span };
        }
        Ok(left)
    }

    /// The negation operand is a power expression, so `- -x` is malformed.
    fn parse_unary(&mut self) -> Result<Expr, Error> {
        let span = self.span();
        if self.matches(TokenKind::Minus) {
            let operand = self.parse_power()?;
            return Ok(Expr::Unary { op: UnOp::Neg, operand: Box::new(operand), span });
        }
        self.parse_power()
    }

    fn parse_power(&mut self) -> Result<Expr, Error> {
        let mut left = self.parse_primary()?;
        while self.matches(TokenKind::StarStar) {
            let span = left.span();
            let right = self.parse_primary()?;
            left = Expr::Binary { left: Box::new(left), op: BinOp::Pow, right: Box::new(right), span };
        }
        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Expr, Error> {
        let tok = self.peek().clone();
        let span = Span::new(tok.line, tok.column);

        match tok.kind {
            TokenKind::Number(n)   => { self.advance(); Ok(Expr::Number(n, span)) }
            TokenKind::Bool(b)     => { self.advance(); Ok(Expr::Bool(b, span)) }
            TokenKind::ColorLit(c) => { self.advance(); Ok(Expr::ColorLit(c, span)) }
            TokenKind::Ident(name) => { self.advance(); Ok(Expr::Variable(name, span)) }

            // Built-in call — any argument count parses; arity is the
            // resolver's job.
            TokenKind::Func(func) => {
                self.advance();
                self.expect(TokenKind::LParen)?;
                let args = self.parse_arg_list()?;
                self.expect(TokenKind::RParen)?;
                Ok(Expr::Call { func, args, span })
            }

            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(Expr::Grouping(Box::new(inner), span))
            }

            _ => Err(self.unexpected("expression")),
        }
    }

    /// Comma-separated, no trailing comma: every consumed comma must be
    /// followed by another expression.
    fn parse_arg_list(&mut self) -> Result<Vec<Expr>, Error> {
        let mut args = Vec::new();
        if self.check(TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr()?);
            if !self.matches(TokenKind::Comma) { break; }
        }
        Ok(args)
    }

    // ─── Token primitives ────────────────────────────────────────────────────

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind.clone()
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() { self.pos += 1; }
        tok
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) { self.advance(); true } else { false }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.check(kind.clone()) {
            Ok(self.advance())
        } else {
            let tok = self.peek();
            Err(Error::new(
                ErrorCode::P002,
                tok.line,
                tok.column,
                format!("expected {:?}, found {:?}", kind, tok.kind),
            ))
        }
    }

    fn expect_ident(&mut self) -> Result<String, Error> {
        let tok = self.advance();
        match tok.kind {
            TokenKind::Ident(s) => Ok(s),
            other => Err(Error::new(
                ErrorCode::P001, tok.line, tok.column,
                format!("expected identifier, found {other:?}"),
            )),
        }
    }

    /// Every statement ends at a newline; EOF is accepted at program end.
    fn expect_terminator(&mut self) -> Result<(), Error> {
        match self.peek_kind() {
            TokenKind::Newline => { self.advance(); Ok(()) }
            TokenKind::Eof => Ok(()),
            other => {
                let tok = self.peek();
                Err(Error::new(
                    ErrorCode::P002, tok.line, tok.column,
                    format!("expected end of line, found {other:?}"),
                ))
            }
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }

    fn span(&self) -> Span {
        let tok = self.peek();
        Span::new(tok.line, tok.column)
    }

    fn unexpected(&self, expected: &str) -> Error {
        let tok = self.peek();
        Error::new(
            ErrorCode::P001,
            tok.line,
            tok.column,
            format!("expected {}, found {:?}", expected, tok.kind),
        )
    }

    /// Panic-mode recovery: skip to the end of the broken line, or to the
    /// next token that can begin a statement.
    fn recover(&mut self) {
        loop {
            match self.peek_kind() {
                TokenKind::Eof => break,
                TokenKind::Newline => { self.advance(); break; }
                k if k.is_command() => break,
                _ => { self.advance(); }
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Color;
    use crate::syntax::lexer::Lexer;
    use crate::syntax::token::Builtin;

    fn parse(src: &str) -> Vec<Stmt> {
        let tokens = Lexer::new(src).tokenize().expect("lex failed");
        Parser::new(tokens).parse().expect("parse failed")
    }

    fn parse_expr_src(src: &str) -> Expr {
        let tokens = Lexer::new(src).tokenize().expect("lex failed");
        let mut p = Parser::new(tokens);
        p.parse_expr().expect("parse_expr failed")
    }

    fn parse_err(src: &str) -> Vec<Error> {
        let tokens = Lexer::new(src).tokenize().expect("lex failed");
        Parser::new(tokens).parse().expect_err("expected parse error")
    }

    // ── commands ─────────────────────────────────────────────────────────────

    #[test]
    fn spawn_statement() {
        let p = parse("Spawn(0, 0)");
        assert!(matches!(&p[0], Stmt::Spawn { .. }));
    }

    #[test]
    fn color_statement() {
        let p = parse("Color(\"Red\")");
        match &p[0] {
            Stmt::Color { color, .. } => assert!(matches!(color, Expr::ColorLit(Color::Red, _))),
            _ => panic!("expected Color"),
        }
    }

    #[test]
    fn size_statement() {
        let p = parse("Size(5)");
        match &p[0] {
            Stmt::Size { value, .. } => assert!(matches!(value, Expr::Number(5, _))),
            _ => panic!("expected Size"),
        }
    }

    #[test]
    fn draw_line_statement() {
        let p = parse("DrawLine(1, 0, 3)");
        assert!(matches!(&p[0], Stmt::DrawLine { .. }));
    }

    #[test]
    fn draw_circle_statement() {
        let p = parse("DrawCircle(0, 1, 4)");
        assert!(matches!(&p[0], Stmt::DrawCircle { .. }));
    }

    #[test]
    fn draw_rectangle_statement() {
        let p = parse("DrawRectangle(0, 0, 0, 4, 2)");
        assert!(matches!(&p[0], Stmt::DrawRectangle { .. }));
    }

    #[test]
    fn fill_statement() {
        let p = parse("Fill()");
        assert!(matches!(&p[0], Stmt::Fill { .. }));
    }

    #[test]
    fn spawn_wrong_arity_is_error() {
        let errs = parse_err("Spawn(0)");
        assert!(!errs.is_empty());
    }

    #[test]
    fn draw_line_missing_arg_is_error() {
        let errs = parse_err("DrawLine(1, 0)");
        assert!(!errs.is_empty());
    }

    #[test]
    fn fill_with_arg_is_error() {
        let errs = parse_err("Fill(1)");
        assert!(!errs.is_empty());
    }

    // ── labels, assignment, goto ─────────────────────────────────────────────

    #[test]
    fn bare_identifier_is_label() {
        let p = parse("loop\n");
        match &p[0] {
            Stmt::Label { name, .. } => assert_eq!(name, "loop"),
            _ => panic!("expected Label"),
        }
    }

    #[test]
    fn label_at_eof() {
        let p = parse("finish");
        assert!(matches!(&p[0], Stmt::Label { .. }));
    }

    #[test]
    fn assignment() {
        let p = parse("i <- 0");
        match &p[0] {
            Stmt::Assign { name, value, .. } => {
                assert_eq!(name, "i");
                assert!(matches!(value, Expr::Number(0, _)));
            }
            _ => panic!("expected Assign"),
        }
    }

    #[test]
    fn identifier_then_garbage_is_error() {
        let errs = parse_err("i 5");
        assert_eq!(errs[0].code, ErrorCode::P003);
    }

    #[test]
    fn goto_statement() {
        let p = parse("GoTo[loop](i < 5)");
        match &p[0] {
            Stmt::Goto { label, condition, .. } => {
                assert_eq!(label, "loop");
                assert!(matches!(condition, Expr::Binary { op: BinOp::Lt, .. }));
            }
            _ => panic!("expected Goto"),
        }
    }

    #[test]
    fn goto_requires_bracketed_label() {
        let errs = parse_err("GoTo(i < 5)");
        assert!(!errs.is_empty());
    }

    #[test]
    fn goto_requires_condition() {
        let errs = parse_err("GoTo[loop]");
        assert!(!errs.is_empty());
    }

    // ── newline termination ──────────────────────────────────────────────────

    #[test]
    fn two_statements_on_one_line_is_error() {
        let errs = parse_err("Fill() Fill()");
        assert_eq!(errs[0].code, ErrorCode::P002);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let p = parse("\n\nSpawn(0, 0)\n\n\nFill()\n");
        assert_eq!(p.len(), 2);
    }

    // ── expression precedence ────────────────────────────────────────────────

    #[test]
    fn mul_binds_tighter_than_add() {
        // 2 + 3 * 4 → Add(2, Mul(3, 4))
        let expr = parse_expr_src("2 + 3 * 4");
        match expr {
            Expr::Binary { op: BinOp::Add, right, .. } => {
                assert!(matches!(*right, Expr::Binary { op: BinOp::Mul, .. }));
            }
            _ => panic!("expected Add at top"),
        }
    }

    #[test]
    fn comparison_binds_tighter_than_equality() {
        // a == b < c → Eq(a, Lt(b, c))
        let expr = parse_expr_src("a == b < c");
        match expr {
            Expr::Binary { op: BinOp::Eq, right, .. } => {
                assert!(matches!(*right, Expr::Binary { op: BinOp::Lt, .. }));
            }
            _ => panic!("expected Eq at top"),
        }
    }

    #[test]
    fn and_binds_looser_than_or() {
        // this grammar puts && above ||: a && b || c → And(a, Or(b, c))
        let expr = parse_expr_src("a && b || c");
        match expr {
            Expr::Binary { op: BinOp::And, right, .. } => {
                assert!(matches!(*right, Expr::Binary { op: BinOp::Or, .. }));
            }
            _ => panic!("expected And at top"),
        }
    }

    #[test]
    fn power_folds_left() {
        // 2 ** 3 ** 2 → Pow(Pow(2, 3), 2)
        let expr = parse_expr_src("2 ** 3 ** 2");
        match expr {
            Expr::Binary { op: BinOp::Pow, left, .. } => {
                assert!(matches!(*left, Expr::Binary { op: BinOp::Pow, .. }));
            }
            _ => panic!("expected Pow at top"),
        }
    }

    #[test]
    fn negation_of_power() {
        // -2 ** 2 → Neg(Pow(2, 2))
        let expr = parse_expr_src("-2 ** 2");
        match expr {
            Expr::Unary { op: UnOp::Neg, operand, .. } => {
                assert!(matches!(*operand, Expr::Binary { op: BinOp::Pow, .. }));
            }
            _ => panic!("expected Neg at top"),
        }
    }

    #[test]
    fn double_negation_is_error() {
        let tokens = Lexer::new("- -x").tokenize().unwrap();
        let mut p = Parser::new(tokens);
        assert!(p.parse_expr().is_err());
    }

    #[test]
    fn modulo_and_divide() {
        assert!(matches!(parse_expr_src("a % b"), Expr::Binary { op: BinOp::Mod, .. }));
        assert!(matches!(parse_expr_src("a / b"), Expr::Binary { op: BinOp::Div, .. }));
    }

    #[test]
    fn not_equal() {
        assert!(matches!(parse_expr_src("a != b"), Expr::Binary { op: BinOp::NotEq, .. }));
    }

    #[test]
    fn grouping() {
        // (2 + 3) * 4 → Mul(Grouping(Add), 4)
        let expr = parse_expr_src("(2 + 3) * 4");
        match expr {
            Expr::Binary { op: BinOp::Mul, left, .. } => {
                assert!(matches!(*left, Expr::Grouping(_, _)));
            }
            _ => panic!("expected Mul at top"),
        }
    }

    // ── built-in calls ───────────────────────────────────────────────────────

    #[test]
    fn zero_arg_call() {
        let expr = parse_expr_src("GetActualX()");
        match expr {
            Expr::Call { func, args, .. } => {
                assert_eq!(func, Builtin::GetActualX);
                assert!(args.is_empty());
            }
            _ => panic!("expected Call"),
        }
    }

    #[test]
    fn call_with_args() {
        let expr = parse_expr_src("GetColorCount(\"Red\", 0, 0, x, y)");
        match expr {
            Expr::Call { func, args, .. } => {
                assert_eq!(func, Builtin::GetColorCount);
                assert_eq!(args.len(), 5);
            }
            _ => panic!("expected Call"),
        }
    }

    #[test]
    fn call_arity_not_checked_by_parser() {
        // wrong arity still parses; the resolver rejects it later
        let expr = parse_expr_src("IsBrushColor()");
        match expr {
            Expr::Call { args, .. } => assert!(args.is_empty()),
            _ => panic!("expected Call"),
        }
    }

    #[test]
    fn trailing_comma_in_call_is_error() {
        let tokens = Lexer::new("IsBrushSize(1,)").tokenize().unwrap();
        let mut p = Parser::new(tokens);
        assert!(p.parse_expr().is_err());
    }

    #[test]
    fn call_without_parens_is_error() {
        let tokens = Lexer::new("GetActualX + 1").tokenize().unwrap();
        let mut p = Parser::new(tokens);
        assert!(p.parse_expr().is_err());
    }

    #[test]
    fn nested_calls_in_condition() {
        let p = parse("GoTo[top](GetActualX() < GetCanvasSize() - 1)");
        match &p[0] {
            Stmt::Goto { condition, .. } => {
                assert!(matches!(condition, Expr::Binary { op: BinOp::Lt, .. }));
            }
            _ => panic!("expected Goto"),
        }
    }

    // ── error recovery ───────────────────────────────────────────────────────

    #[test]
    fn recovery_reports_every_broken_line() {
        let errs = parse_err("Spawn(0,\nSize(\nFill()\n");
        assert!(errs.len() >= 2);
    }

    #[test]
    fn recovery_keeps_parsing_after_error() {
        // first line is broken, the rest must still produce errors only once
        let src = "Spawn(0 0)\ni <- 1\nFill()\n";
        let tokens = Lexer::new(src).tokenize().unwrap();
        let result = Parser::new(tokens).parse();
        match result {
            Err(errs) => assert_eq!(errs.len(), 1),
            Ok(_) => panic!("expected one syntax error"),
        }
    }

    // ── whole programs ───────────────────────────────────────────────────────

    #[test]
    fn counted_loop_program() {
        let src = "Spawn(0, 0)\ni <- 0\nloop\ni <- i + 1\nGoTo[loop](i < 5)\n";
        let p = parse(src);
        assert_eq!(p.len(), 5);
        assert!(matches!(&p[0], Stmt::Spawn { .. }));
        assert!(matches!(&p[2], Stmt::Label { .. }));
        assert!(matches!(&p[4], Stmt::Goto { .. }));
    }

    #[test]
    fn drawing_program_with_comments() {
        let src = "Spawn(5, 5) // center\nColor(\"Blue\")\n// fill everything\nFill()\n";
        let p = parse(src);
        assert_eq!(p.len(), 3);
    }
}
