use crate::core::types::MemberVariable;
use crate::error::{ErrorKind, HlslError};
use crate::frontend::lexer::{Lexer, Token};
use crate::frontend::parser::Parser;
use crate::layout::{layouts_equivalent, CbufferLayout, LayoutMember, StructuredLayout};
use codespan::Span;

#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOptions {
    /// Lay every declaration out with the natural-alignment (structured)
    /// rules, as if the buffers were plain C structs. Also renames `bool`
    /// to its C counterpart `BOOL`.
    pub force_c_layout: bool,
    /// Additionally compute the other algorithm's layout for every
    /// declaration and report whether the two agree.
    pub check_matches_c_layout: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// One layout tree per declared buffer, in declaration order.
    pub layouts: Vec<LayoutMember>,
    /// `Some` only when `check_matches_c_layout` is set; true when every
    /// declaration's two layouts are equivalent.
    pub layouts_match: Option<bool>,
}

/// Runs the whole pipeline over one source string: lex, parse, then lay out
/// every buffer declaration. cbuffer and ConstantBuffer declarations use
/// constant-buffer packing, StructuredBuffer declarations use structured
/// packing, unless `force_c_layout` routes everything through the latter.
pub fn analyze(source: &str, options: &AnalysisOptions) -> Result<AnalysisResult, HlslError> {
    let tokens = Lexer::new(source).tokenize()?;
    let eof = tokens.last().cloned();

    let mut parser = Parser::new(tokens, options.force_c_layout);
    let buffers = parser.parse_file()?;

    if buffers.is_empty() {
        // inputs with only struct or typedef declarations parse fine but
        // leave nothing to lay out
        return Err(no_buffers_error(eof.as_ref()));
    }

    let mut layouts = Vec::with_capacity(buffers.len());
    let mut all_match = true;

    for buffer in &buffers {
        let structured = options.force_c_layout || buffer.is_sbuffer;
        let layout = match layout_one(buffer, structured) {
            Some(layout) => layout,
            None => continue,
        };
        if options.check_matches_c_layout {
            if let Some(alternate) = layout_one(buffer, !structured) {
                all_match &= layouts_equivalent(&layout, &alternate);
            }
        }
        layouts.push(layout);
    }

    let layouts_match = if options.check_matches_c_layout {
        Some(all_match)
    } else {
        None
    };

    Ok(AnalysisResult {
        layouts,
        layouts_match,
    })
}

fn layout_one(buffer: &MemberVariable, structured: bool) -> Option<LayoutMember> {
    let decl = std::slice::from_ref(buffer);
    let mut layouts = if structured {
        StructuredLayout::new().generate(decl)
    } else {
        CbufferLayout::new().generate(decl)
    };
    layouts.pop()
}

fn no_buffers_error(eof: Option<&Token>) -> HlslError {
    let (line, end_column, span) = match eof {
        Some(t) => (t.line, t.column, t.span),
        None => (1, 1, Span::new(0, 0)),
    };
    HlslError::new(
        ErrorKind::Layout,
        "need at least one buffer declaration".to_string(),
        line,
        1,
        end_column,
        span,
    )
}
