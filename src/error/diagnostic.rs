use codespan::Span;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("lexical error")]
    Lex,
    #[error("syntax error")]
    Parse,
    #[error("layout error")]
    Layout,
}

/// Single pipeline error. The first error aborts the stage that raised it,
/// so one of these is all a caller ever sees per run.
///
/// `line`, `start_column` and `end_column` are 1-based and cover the full
/// text of the offending token; `span` is the byte range used for terminal
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} ({line}:{start_column}): {message}")]
pub struct HlslError {
    pub kind: ErrorKind,
    pub message: String,
    pub line: u32,
    pub start_column: u32,
    pub end_column: u32,
    pub span: Span,
}

impl HlslError {
    pub fn new(
        kind: ErrorKind,
        message: String,
        line: u32,
        start_column: u32,
        end_column: u32,
        span: Span,
    ) -> Self {
        Self {
            kind,
            message,
            line,
            start_column,
            end_column,
            span,
        }
    }
}
