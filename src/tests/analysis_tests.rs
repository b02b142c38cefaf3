use crate::analysis::{analyze, AnalysisOptions};
use crate::error::ErrorKind;
use crate::frontend::lexer::{Lexer, TokenKind};

fn check_options() -> AnalysisOptions {
    AnalysisOptions {
        force_c_layout: false,
        check_matches_c_layout: true,
    }
}

#[test]
fn test_analysis_algorithm_dispatch() {
    let source =
        "struct S { float a; float3 b; };\ncbuffer C { S s; float x; };\nStructuredBuffer<S> sb;";
    let result = analyze(source, &AnalysisOptions::default()).unwrap();

    assert_eq!(result.layouts.len(), 2);
    // the cbuffer uses register packing, the structured buffer does not
    assert!(result.layouts[0].is_cbuffer);
    assert_eq!(result.layouts[0].size, 20);
    assert!(result.layouts[1].is_sbuffer);
    assert_eq!(result.layouts[1].size, 16);
    assert_eq!(result.layouts_match, None);
}

#[test]
fn test_analysis_force_c_layout() {
    let options = AnalysisOptions {
        force_c_layout: true,
        check_matches_c_layout: false,
    };
    let result = analyze("cbuffer C { bool flag; float3 v; };", &options).unwrap();

    let layout = &result.layouts[0];
    assert!(layout.is_sbuffer);
    assert_eq!(layout.submembers[0].ty.name(), "BOOL");
    // no register boundary rule in effect
    assert_eq!(layout.submembers[1].offset, 4);
    assert_eq!(layout.size, 16);
}

#[test]
fn test_analysis_check_matches() {
    let result = analyze("cbuffer C { float4 v; };", &check_options()).unwrap();
    assert_eq!(result.layouts_match, Some(true));

    let result = analyze("cbuffer C { float2 a; float3 b; };", &check_options()).unwrap();
    assert_eq!(result.layouts_match, Some(false));
}

#[test]
fn test_analysis_check_covers_all_declarations() {
    // one matching buffer does not hide a diverging one
    let source = "cbuffer A { float4 v; };\ncbuffer B { float2 a; float3 b; };";
    let result = analyze(source, &check_options()).unwrap();
    assert_eq!(result.layouts_match, Some(false));
}

#[test]
fn test_analysis_requires_buffers() {
    let err = analyze("struct S { float x; };", &AnalysisOptions::default()).unwrap_err();

    assert_eq!(err.kind, ErrorKind::Layout);
    assert_eq!(err.message, "need at least one buffer declaration");
    assert_eq!((err.line, err.start_column, err.end_column), (1, 1, 23));
}

#[test]
fn test_analysis_propagates_stage_errors() {
    let err = analyze("cbuffer C { float $ };", &AnalysisOptions::default()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Lex);

    let err = analyze("cbuffer C { Foo x; };", &AnalysisOptions::default()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);
    assert_eq!(err.message, "cannot find type named 'Foo'");

    let err = analyze("", &AnalysisOptions::default()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);
    assert!(err.message.ends_with("but got end of file"));
}

#[test]
fn test_analysis_is_deterministic() {
    let source = "struct S { double d; float f; };\ncbuffer C { S s; float2x2 m; };";
    let options = check_options();

    let first = analyze(source, &options).unwrap();
    let second = analyze(source, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_analysis_token_text_round_trip() {
    let source = "struct S { double d; float f; };\ncbuffer C { S s; float2x2 m[2]; };";
    let options = check_options();

    // layouts depend on token texts alone, not on spacing or positions
    let tokens = Lexer::new(source).tokenize().unwrap();
    let rejoined = tokens
        .iter()
        .filter(|token| !matches!(token.kind, TokenKind::Eof))
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    assert_eq!(
        analyze(source, &options).unwrap(),
        analyze(&rejoined, &options).unwrap()
    );
}

#[test]
fn test_analysis_keeps_declaration_order() {
    let source = "cbuffer B { float b; };\ncbuffer A { float a; };\nStructuredBuffer<float> s;";
    let result = analyze(source, &AnalysisOptions::default()).unwrap();

    let names: Vec<String> = result.layouts.iter().map(|l| l.ty.name()).collect();
    assert_eq!(names, vec!["B", "A", "s"]);
}
