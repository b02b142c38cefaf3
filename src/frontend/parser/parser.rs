use crate::core::types::{MemberVariable, Type, Typedef};
use crate::error::{ErrorKind, HlslError};
use crate::frontend::lexer::token::{Token, TokenKind};

/// Keywords the language subset recognizes but refuses to parse. They lex
/// as identifiers, so the token plumbing rejects them wherever they appear.
const UNSUPPORTED_KEYWORDS: &[&str] = &["define", "packoffset", "uniform", "pragma", "pack_matrix"];

/// Recursive-descent parser over a token stream ending in `Eof`.
/// The first error aborts the parse; there is no recovery.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    pub(crate) typedefs: Vec<Typedef>,
    pub(crate) buffers: Vec<MemberVariable>,
    pub(crate) anon_counter: u32,
    pub(crate) force_c_types: bool,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, force_c_types: bool) -> Self {
        Self {
            tokens,
            current: 0,
            typedefs: Vec::new(),
            buffers: Vec::new(),
            anon_counter: 0,
            force_c_types,
        }
    }

    pub(crate) fn peek(&self) -> &Token {
        let idx = self.current.min(self.tokens.len().saturating_sub(1));
        &self.tokens[idx]
    }

    pub(crate) fn prev_token(&self) -> Option<&Token> {
        if self.current == 0 {
            None
        } else {
            self.tokens.get(self.current - 1)
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    pub(crate) fn unconsume(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    fn check_support(&self, token: &Token) -> Result<(), HlslError> {
        if matches!(token.kind, TokenKind::Identifier)
            && UNSUPPORTED_KEYWORDS.contains(&token.text.as_str())
        {
            return Err(self.error_at(format!("unsupported keyword '{}'", token.text), token));
        }
        if matches!(token.kind, TokenKind::Hash) {
            return Err(self.error_at("unsupported token #".to_string(), token));
        }
        Ok(())
    }

    pub(crate) fn accept(&mut self, kind: TokenKind) -> Result<Option<Token>, HlslError> {
        let token = self.peek().clone();
        if matches!(token.kind, TokenKind::Eof) {
            return Ok(None);
        }
        self.check_support(&token)?;
        if token.kind != kind {
            return Ok(None);
        }
        self.current += 1;
        Ok(Some(token))
    }

    pub(crate) fn accept_any(&mut self, kinds: &[TokenKind]) -> Result<Option<Token>, HlslError> {
        for kind in kinds {
            if let Some(token) = self.accept(*kind)? {
                return Ok(Some(token));
            }
        }
        Ok(None)
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, HlslError> {
        let context = self.prev_token().cloned();
        let token = self.peek().clone();
        if matches!(token.kind, TokenKind::Eof) {
            return Err(self.error_at_eof(format!("expected {}, but got end of file", kind)));
        }
        self.check_support(&token)?;
        if token.kind != kind {
            return Err(self.unexpected_token(&kind.to_string(), context.as_ref(), &token));
        }
        self.current += 1;
        Ok(token)
    }

    pub(crate) fn expect_any(&mut self, kinds: &[TokenKind]) -> Result<Token, HlslError> {
        for kind in kinds {
            if let Some(token) = self.accept(*kind)? {
                return Ok(token);
            }
        }

        let expected = kinds
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(" or ");
        let context = self.prev_token().cloned();
        let token = self.peek().clone();
        if matches!(token.kind, TokenKind::Eof) {
            let after = match &context {
                Some(t) => format!(" after '{}' (line {})", t.text, t.line),
                None => String::new(),
            };
            return Err(self.error_at_eof(format!(
                "expected {}{} but got end of file",
                expected, after
            )));
        }
        Err(self.unexpected_token(&expected, context.as_ref(), &token))
    }

    /// Expects a number token whose text round-trips through `usize`, which
    /// rules out leading zeros. Returns the value and the token for range
    /// checks at the call site.
    pub(crate) fn parse_integer(&mut self) -> Result<(usize, Token), HlslError> {
        let token = self.expect(TokenKind::Number)?;
        match token.text.parse::<usize>() {
            Ok(value) if value.to_string() == token.text => Ok((value, token)),
            _ => Err(self.error_at(format!("invalid integer {}", token.text), &token)),
        }
    }

    pub(crate) fn check_size(
        &self,
        size: usize,
        sizestr: &str,
        name: &str,
        min: usize,
        max: usize,
        token: &Token,
    ) -> Result<(), HlslError> {
        if size < min || size > max {
            return Err(self.error_at(
                format!(
                    "invalid {} '{}' (must be between {} and {} inclusive)",
                    name, sizestr, min, max
                ),
                token,
            ));
        }
        Ok(())
    }

    pub(crate) fn make_anonymous_name(&mut self) -> String {
        let name = format!("_anon{}", self.anon_counter);
        self.anon_counter += 1;
        name
    }

    pub(crate) fn add_typedef(&mut self, ty: Type, name: String) -> Result<(), HlslError> {
        if self.typedefs.iter().any(|td| td.name == name) {
            let at = match self.prev_token() {
                Some(t) => t.clone(),
                None => self.peek().clone(),
            };
            return Err(self.error_at(format!("redefinition of type '{}'", name), &at));
        }
        self.typedefs.push(Typedef { name, ty });
        Ok(())
    }

    pub(crate) fn find_typedef(&self, name: &str) -> Option<Type> {
        self.typedefs
            .iter()
            .find(|td| td.name == name)
            .map(|td| td.ty.clone())
    }

    pub(crate) fn error_at(&self, message: String, token: &Token) -> HlslError {
        HlslError::new(
            ErrorKind::Parse,
            message,
            token.line,
            token.column,
            token.end_column(),
            token.span,
        )
    }

    /// End-of-file errors span the whole final line of the input.
    pub(crate) fn error_at_eof(&self, message: String) -> HlslError {
        let eof = self.peek();
        HlslError::new(ErrorKind::Parse, message, eof.line, 1, eof.column, eof.span)
    }

    fn unexpected_token(
        &self,
        expected: &str,
        context: Option<&Token>,
        found: &Token,
    ) -> HlslError {
        let value = match found.kind {
            TokenKind::Identifier | TokenKind::Number => format!(" '{}'", found.text),
            _ => String::new(),
        };
        let after = match context {
            Some(t) => format!(" after '{}' (line {})", t.text, t.line),
            None => String::new(),
        };
        self.error_at(
            format!("expected {}{} but got {}{}", expected, after, found.kind, value),
            found,
        )
    }
}
