use crate::core::types::MemberVariable;
use crate::frontend::lexer::Lexer;
use crate::frontend::parser::Parser;
use crate::layout::{layouts_equivalent, CbufferLayout, LayoutMember, StructuredLayout};

fn parse_buffers(source: &str) -> Vec<MemberVariable> {
    let tokens = Lexer::new(source).tokenize().unwrap();
    Parser::new(tokens, false).parse_file().unwrap()
}

fn both_layouts(source: &str) -> (LayoutMember, LayoutMember) {
    let buffers = parse_buffers(source);
    let cbuffer = CbufferLayout::new().generate(&buffers).remove(0);
    let structured = StructuredLayout::new().generate(&buffers).remove(0);
    (cbuffer, structured)
}

fn cbuffer_layout(source: &str) -> LayoutMember {
    CbufferLayout::new()
        .generate(&parse_buffers(source))
        .remove(0)
}

#[test]
fn test_compare_agreeing_layouts() {
    let (c, s) = both_layouts("cbuffer CB { float4 v; };");
    assert!(layouts_equivalent(&c, &s));
    assert!(layouts_equivalent(&s, &c));
}

#[test]
fn test_compare_detects_divergence() {
    // the register boundary rule moves b to 16, natural packing leaves it at 4
    let (c, s) = both_layouts("cbuffer CB { float a; float4 b; };");
    assert!(!layouts_equivalent(&c, &s));
    assert!(!layouts_equivalent(&s, &c));
}

#[test]
fn test_compare_ignores_trailing_struct_padding() {
    let (c, s) = both_layouts("struct S { double d; float f; };\ncbuffer C { S s; };");

    // sizes differ only by tail padding folded into the structured sizes
    assert_eq!(c.size, 12);
    assert_eq!(s.size, 16);
    assert!(layouts_equivalent(&c, &s));
    assert!(layouts_equivalent(&s, &c));
}

#[test]
fn test_compare_checks_array_elements() {
    // float4 elements occupy a full register either way
    let (c, s) = both_layouts("cbuffer CB { float4 m[2]; };");
    assert!(layouts_equivalent(&c, &s));

    // float elements get a register each only under cbuffer packing
    let (c, s) = both_layouts("cbuffer CB { float m[2]; };");
    assert!(!layouts_equivalent(&c, &s));
}

#[test]
fn test_compare_requires_same_names() {
    let a = cbuffer_layout("cbuffer CB { float x; };");
    let b = cbuffer_layout("cbuffer CB { float y; };");
    assert!(!layouts_equivalent(&a, &b));
}

#[test]
fn test_compare_matrix_vector_equivalence() {
    // a one column matrix lays out exactly like the bare vector
    let a = cbuffer_layout("cbuffer A { float2 v; };");
    let b = cbuffer_layout("cbuffer B { float2x1 v; };");
    assert!(layouts_equivalent(&a, &b));
}

#[test]
fn test_compare_struct_register_alignment() {
    let (c, s) = both_layouts("struct S { float a; };\ncbuffer C { float x; S s; };");
    assert!(!layouts_equivalent(&c, &s));
}
