use crate::error::{ErrorKind, HlslError};
use codespan_reporting::diagnostic::{Diagnostic as CodespanDiagnostic, Label};
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use codespan_reporting::term::{self, Config};

use codespan::{FileId, Files};

/// convert a pipeline error to a codespan reporting diagnostic
pub fn convert_error(error: &HlslError, file_id: FileId) -> CodespanDiagnostic<FileId> {
    let code = match error.kind {
        ErrorKind::Lex => "E0001",
        ErrorKind::Parse => "E0002",
        ErrorKind::Layout => "E0003",
    };

    CodespanDiagnostic::error()
        .with_code(code)
        .with_message(&error.message)
        .with_labels(vec![Label::primary(
            file_id,
            error.span.start().to_usize()..error.span.end().to_usize(),
        )
        .with_message(label_message(error.kind))])
}

fn label_message(kind: ErrorKind) -> String {
    match kind {
        ErrorKind::Lex => "lexical error occurred here",
        ErrorKind::Parse => "syntax error occurred here",
        ErrorKind::Layout => "layout error occurred here",
    }
    .to_string()
}

/// display an error against its source file
pub fn display_error(
    files: &Files<String>,
    file_id: FileId,
    error: &HlslError,
    color_choice: ColorChoice,
) {
    let writer = StandardStream::stderr(color_choice);
    let config = Config::default();

    let diagnostic = convert_error(error, file_id);
    term::emit(&mut writer.lock(), &config, files, &diagnostic)
        .expect("Failed to emit diagnostic");
}
