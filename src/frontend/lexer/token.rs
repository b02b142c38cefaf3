use codespan::Span;
use std::fmt;

/// One lexed token. `line` and `column` are 1-based and point at the first
/// character; `span` is the byte range in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
    pub span: Span,
}

impl Token {
    /// Exclusive column just past the last character of the token.
    pub fn end_column(&self) -> u32 {
        self.column + self.text.chars().count() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Number,

    // keywords
    CBuffer,
    Struct,
    ColumnMajor,
    RowMajor,
    ConstantBuffer,
    StructuredBuffer,
    Register,
    Typedef,

    // punctuation
    LeftParen,    // (
    RightParen,   // )
    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    Less,         // <
    Greater,      // >
    Comma,        // ,
    Semicolon,    // ;
    Colon,        // :
    Hash,         // #

    Eof,
}

impl TokenKind {
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            "cbuffer" => Some(TokenKind::CBuffer),
            "struct" => Some(TokenKind::Struct),
            "column_major" => Some(TokenKind::ColumnMajor),
            "row_major" => Some(TokenKind::RowMajor),
            "ConstantBuffer" => Some(TokenKind::ConstantBuffer),
            "StructuredBuffer" => Some(TokenKind::StructuredBuffer),
            "register" => Some(TokenKind::Register),
            "typedef" => Some(TokenKind::Typedef),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::CBuffer => "cbuffer",
            TokenKind::Struct => "struct",
            TokenKind::ColumnMajor => "column_major",
            TokenKind::RowMajor => "row_major",
            TokenKind::ConstantBuffer => "ConstantBuffer",
            TokenKind::StructuredBuffer => "StructuredBuffer",
            TokenKind::Register => "register",
            TokenKind::Typedef => "typedef",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Hash => "#",
            TokenKind::Eof => "end of file",
        };
        write!(f, "{}", s)
    }
}
