use crate::error::{ErrorKind, HlslError};
use crate::frontend::lexer::token::{Token, TokenKind};
use codespan::{ByteIndex, Span};

pub struct Lexer<'a> {
    source: &'a str,
    current: usize,
    start: usize,
    line: u32,
    column: u32,
    start_line: u32,
    start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            current: 0,
            start: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
        }
    }

    /// Scans the whole input. The stream always ends with an `Eof` token
    /// carrying the final source position.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, HlslError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let done = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);

            if done {
                break;
            }
        }

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, HlslError> {
        self.skip_whitespace();

        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;

        if self.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof));
        }

        let c = self.advance();

        match c {
            '(' => Ok(self.make_token(TokenKind::LeftParen)),
            ')' => Ok(self.make_token(TokenKind::RightParen)),
            '{' => Ok(self.make_token(TokenKind::LeftBrace)),
            '}' => Ok(self.make_token(TokenKind::RightBrace)),
            '[' => Ok(self.make_token(TokenKind::LeftBracket)),
            ']' => Ok(self.make_token(TokenKind::RightBracket)),
            '<' => Ok(self.make_token(TokenKind::Less)),
            '>' => Ok(self.make_token(TokenKind::Greater)),
            ',' => Ok(self.make_token(TokenKind::Comma)),
            ';' => Ok(self.make_token(TokenKind::Semicolon)),
            ':' => Ok(self.make_token(TokenKind::Colon)),
            '#' => Ok(self.make_token(TokenKind::Hash)),
            '/' => {
                if self.is_at_end() {
                    return Err(self.error("unexpected token at end of input /".to_string()));
                }
                if self.match_char('/') {
                    // line comment
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                    self.next_token()
                } else if self.match_char('*') {
                    self.skip_multi_line_comment()?;
                    self.next_token()
                } else {
                    Err(self.error(format!("unexpected token /{}", self.peek())))
                }
            }
            c if c.is_ascii_digit() => Ok(self.number()),
            c if is_word_char(c) => Ok(self.identifier()),
            _ => Err(self.error(format!("invalid or unexpected token {}", c))),
        }
    }

    fn skip_multi_line_comment(&mut self) -> Result<(), HlslError> {
        // the error points at the `*` of the opening `/*`
        let open_line = self.start_line;
        let open_column = self.start_column + 1;
        let open_byte = self.start + 1;

        loop {
            if self.is_at_end() {
                return Err(HlslError::new(
                    ErrorKind::Lex,
                    "unterminated multi-line comment".to_string(),
                    open_line,
                    open_column,
                    open_column + 1,
                    Span::new(ByteIndex(open_byte as u32), ByteIndex(open_byte as u32 + 1)),
                ));
            }
            let c = self.advance();
            if c == '*' && self.peek() == '/' {
                self.advance();
                return Ok(());
            }
        }
    }

    fn number(&mut self) -> Token {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
        self.make_token(TokenKind::Number)
    }

    fn identifier(&mut self) -> Token {
        while is_word_char(self.peek()) {
            self.advance();
        }

        let text = &self.source[self.start..self.current];
        match TokenKind::keyword_from_str(text) {
            Some(kind) => self.make_token(kind),
            None => self.make_token(TokenKind::Identifier),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_whitespace() && !self.is_at_end() {
            self.advance();
        }
    }

    fn advance(&mut self) -> char {
        let c = self.peek();
        if c == '\0' {
            return c;
        }
        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            text: self.source[self.start..self.current].to_string(),
            line: self.start_line,
            column: self.start_column,
            span: Span::new(ByteIndex(self.start as u32), ByteIndex(self.current as u32)),
        }
    }

    fn error(&self, message: String) -> HlslError {
        HlslError::new(
            ErrorKind::Lex,
            message,
            self.start_line,
            self.start_column,
            self.start_column + 1,
            Span::new(ByteIndex(self.start as u32), ByteIndex(self.current as u32)),
        )
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
