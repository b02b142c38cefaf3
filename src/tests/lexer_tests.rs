use crate::error::ErrorKind;
use crate::frontend::lexer::{Lexer, Token, TokenKind};

fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize().unwrap()
}

#[test]
fn test_lexer_keywords() {
    let tokens = tokenize("cbuffer struct column_major row_major ConstantBuffer StructuredBuffer register typedef name");

    assert!(matches!(tokens[0].kind, TokenKind::CBuffer));
    assert!(matches!(tokens[1].kind, TokenKind::Struct));
    assert!(matches!(tokens[2].kind, TokenKind::ColumnMajor));
    assert!(matches!(tokens[3].kind, TokenKind::RowMajor));
    assert!(matches!(tokens[4].kind, TokenKind::ConstantBuffer));
    assert!(matches!(tokens[5].kind, TokenKind::StructuredBuffer));
    assert!(matches!(tokens[6].kind, TokenKind::Register));
    assert!(matches!(tokens[7].kind, TokenKind::Typedef));
    assert!(matches!(tokens[8].kind, TokenKind::Identifier));
    assert_eq!(tokens[8].text, "name");
}

#[test]
fn test_lexer_punctuation() {
    let tokens = tokenize("( ) { } [ ] < > , ; : #");

    assert!(matches!(tokens[0].kind, TokenKind::LeftParen));
    assert!(matches!(tokens[1].kind, TokenKind::RightParen));
    assert!(matches!(tokens[2].kind, TokenKind::LeftBrace));
    assert!(matches!(tokens[3].kind, TokenKind::RightBrace));
    assert!(matches!(tokens[4].kind, TokenKind::LeftBracket));
    assert!(matches!(tokens[5].kind, TokenKind::RightBracket));
    assert!(matches!(tokens[6].kind, TokenKind::Less));
    assert!(matches!(tokens[7].kind, TokenKind::Greater));
    assert!(matches!(tokens[8].kind, TokenKind::Comma));
    assert!(matches!(tokens[9].kind, TokenKind::Semicolon));
    assert!(matches!(tokens[10].kind, TokenKind::Colon));
    assert!(matches!(tokens[11].kind, TokenKind::Hash));
}

#[test]
fn test_lexer_numbers_split_from_words() {
    // a digit run ends where a word starts, "45x6" is two tokens
    let tokens = tokenize("45x6 foo_bar 123");

    assert!(matches!(tokens[0].kind, TokenKind::Number));
    assert_eq!(tokens[0].text, "45");
    assert!(matches!(tokens[1].kind, TokenKind::Identifier));
    assert_eq!(tokens[1].text, "x6");
    assert!(matches!(tokens[2].kind, TokenKind::Identifier));
    assert_eq!(tokens[2].text, "foo_bar");
    assert!(matches!(tokens[3].kind, TokenKind::Number));
    assert_eq!(tokens[3].text, "123");
}

#[test]
fn test_lexer_positions() {
    let tokens = tokenize("cbuffer CB {\n    float x;\n}");

    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].column), (1, 9));
    assert_eq!(tokens[1].end_column(), 11);
    assert_eq!((tokens[2].line, tokens[2].column), (1, 12));
    assert_eq!((tokens[3].line, tokens[3].column), (2, 5));
    assert_eq!((tokens[4].line, tokens[4].column), (2, 11));
    assert_eq!((tokens[5].line, tokens[5].column), (2, 12));
    assert_eq!((tokens[6].line, tokens[6].column), (3, 1));

    // byte spans: "float" on line two starts after the 13 bytes of line one
    assert_eq!(tokens[3].span.start().to_usize(), 17);
    assert_eq!(tokens[3].span.end().to_usize(), 22);
}

#[test]
fn test_lexer_eof_token() {
    let tokens = tokenize("");
    assert_eq!(tokens.len(), 1);
    assert!(matches!(tokens[0].kind, TokenKind::Eof));
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));

    let tokens = tokenize("a b");
    assert_eq!(tokens.len(), 3);
    assert!(matches!(tokens[2].kind, TokenKind::Eof));
    assert_eq!((tokens[2].line, tokens[2].column), (1, 4));
}

#[test]
fn test_lexer_line_comments() {
    let tokens = tokenize("float // the rest is skipped\nx");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].text, "float");
    assert_eq!(tokens[1].text, "x");
    assert_eq!((tokens[1].line, tokens[1].column), (2, 1));
}

#[test]
fn test_lexer_block_comments() {
    let tokens = tokenize("a /* stuff\nmore */ b");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].text, "a");
    assert_eq!(tokens[1].text, "b");
    assert_eq!((tokens[1].line, tokens[1].column), (2, 9));
}

#[test]
fn test_lexer_unterminated_block_comment() {
    let err = Lexer::new("a /*x").tokenize().unwrap_err();

    assert_eq!(err.kind, ErrorKind::Lex);
    assert_eq!(err.message, "unterminated multi-line comment");
    // points at the `*` of the opening delimiter
    assert_eq!((err.line, err.start_column, err.end_column), (1, 4, 5));
    assert_eq!(err.span.start().to_usize(), 3);
}

#[test]
fn test_lexer_invalid_character() {
    let err = Lexer::new("float $").tokenize().unwrap_err();

    assert_eq!(err.kind, ErrorKind::Lex);
    assert_eq!(err.message, "invalid or unexpected token $");
    assert_eq!((err.line, err.start_column, err.end_column), (1, 7, 8));
}

#[test]
fn test_lexer_stray_slash() {
    let err = Lexer::new("a /b").tokenize().unwrap_err();
    assert_eq!(err.message, "unexpected token /b");
    assert_eq!((err.line, err.start_column), (1, 3));

    let err = Lexer::new("a /").tokenize().unwrap_err();
    assert_eq!(err.message, "unexpected token at end of input /");
    assert_eq!((err.line, err.start_column), (1, 3));
}
