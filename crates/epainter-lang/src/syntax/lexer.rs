use crate::canvas::Color;
use crate::error::{Error, ErrorCode};
use crate::syntax::token::{Token, TokenKind, keyword_or_ident};

pub struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source: source.as_bytes(), pos: 0, line: 1, column: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<Error>> {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        loop {
            self.skip_blanks();

            if self.is_at_end() {
                tokens.push(Token::new(TokenKind::Eof, self.line, self.column));
                break;
            }

            match self.next_token() {
                Ok(Some(tok)) => tokens.push(tok),
                Ok(None) => {}
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() { Ok(tokens) } else { Err(errors) }
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let line = self.line;
        let col = self.column;
        let ch = self.advance();

        let kind = match ch {
            b'\n' => TokenKind::Newline,
            b'+'  => TokenKind::Plus,
            b'-'  => TokenKind::Minus,
            b'%'  => TokenKind::Percent,
            b','  => TokenKind::Comma,
            b'('  => TokenKind::LParen,
            b')'  => TokenKind::RParen,
            b'['  => TokenKind::LBracket,
            b']'  => TokenKind::RBracket,

            b'*' => {
                if self.peek() == b'*' { self.advance(); TokenKind::StarStar }
                else { TokenKind::Star }
            }
            b'/' => {
                if self.peek() == b'/' { self.skip_line(); return Ok(None); }
                else { TokenKind::Slash }
            }
            b'=' => {
                if self.peek() == b'=' { self.advance(); TokenKind::EqEq }
                else { TokenKind::Eq }
            }
            b'!' => {
                if self.peek() == b'=' { self.advance(); TokenKind::BangEq }
                else {
                    return Err(Error::new(ErrorCode::L001, line, col,
                        "expected `!=`, bare `!` is not valid"));
                }
            }
            b'<' => {
                if self.peek() == b'-' { self.advance(); TokenKind::Arrow }
                else if self.peek() == b'=' { self.advance(); TokenKind::LtEq }
                else { TokenKind::Lt }
            }
            b'>' => {
                if self.peek() == b'=' { self.advance(); TokenKind::GtEq }
                else { TokenKind::Gt }
            }
            b'&' => {
                if self.peek() == b'&' { self.advance(); TokenKind::AndAnd }
                else {
                    return Err(Error::new(ErrorCode::L001, line, col,
                        "expected `&&`, bare `&` is not valid"));
                }
            }
            b'|' => {
                if self.peek() == b'|' { self.advance(); TokenKind::OrOr }
                else {
                    return Err(Error::new(ErrorCode::L001, line, col,
                        "expected `||`, bare `|` is not valid"));
                }
            }

            b'"' => TokenKind::ColorLit(self.read_color(line, col)?),
            b'0'..=b'9' => self.read_number(ch, line, col)?,
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => keyword_or_ident(self.read_ident(ch)),

            other => {
                return Err(Error::new(ErrorCode::L001, line, col,
                    format!("unexpected character `{}`", other as char)));
            }
        };

        Ok(Some(Token::new(kind, line, col)))
    }

    // ─── Primitives ──────────────────────────────────────────────────────────

    fn advance(&mut self) -> u8 {
        let ch = self.source[self.pos];
        self.pos += 1;
        if ch == b'\n' { self.line += 1; self.column = 1; }
        else { self.column += 1; }
        ch
    }

    fn peek(&self) -> u8 {
        if self.is_at_end() { 0 } else { self.source[self.pos] }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Newlines are tokens here, so only horizontal whitespace is skipped.
    fn skip_blanks(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                b' ' | b'\t' | b'\r' => { self.advance(); }
                _ => break,
            }
        }
    }

    /// Consume a `//` comment up to (not including) the newline, which stays
    /// significant as the statement terminator.
    fn skip_line(&mut self) {
        while !self.is_at_end() && self.peek() != b'\n' { self.advance(); }
    }

    // ─── Readers ─────────────────────────────────────────────────────────────

    /// A quoted literal must name a palette color. The literal may run over
    /// physical newlines — the line counter still advances — but hitting EOF
    /// without a closing quote is a lexical error.
    fn read_color(&mut self, start_line: usize, start_col: usize) -> Result<Color, Error> {
        let mut s = String::new();
        loop {
            if self.is_at_end() {
                return Err(Error::new(ErrorCode::L002, start_line, start_col,
                    "unterminated color literal"));
            }
            let ch = self.advance();
            if ch == b'"' { break; }
            s.push(ch as char);
        }
        Color::from_name(&s).ok_or_else(|| {
            Error::new(ErrorCode::L003, start_line, start_col,
                format!("`{s}` is not a palette color"))
        })
    }

    fn read_number(&mut self, first: u8, line: usize, col: usize) -> Result<TokenKind, Error> {
        let mut s = String::new();
        s.push(first as char);
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            s.push(self.advance() as char);
        }
        s.parse()
            .map(TokenKind::Number)
            .map_err(|_| Error::new(ErrorCode::L004, line, col,
                format!("number literal `{s}` out of range")))
    }

    fn read_ident(&mut self, first: u8) -> String {
        let mut s = String::new();
        s.push(first as char);
        while !self.is_at_end() && (self.peek().is_ascii_alphanumeric() || self.peek() == b'_') {
            s.push(self.advance() as char);
        }
        s
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
