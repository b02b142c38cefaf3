use crate::core::types::MemberVariable;
use crate::frontend::lexer::Lexer;
use crate::frontend::parser::Parser;
use crate::layout::{LayoutMember, StructuredLayout};

fn parse_buffers(source: &str) -> Vec<MemberVariable> {
    let tokens = Lexer::new(source).tokenize().unwrap();
    Parser::new(tokens, false).parse_file().unwrap()
}

fn structured_layout(source: &str) -> LayoutMember {
    let buffers = parse_buffers(source);
    StructuredLayout::new().generate(&buffers).remove(0)
}

fn offsets(member: &LayoutMember) -> Vec<usize> {
    member.submembers.iter().map(|m| m.offset).collect()
}

#[test]
fn test_structured_ignores_register_boundaries() {
    let layout = structured_layout("cbuffer CB { float a; float4 b; };");

    assert!(layout.is_sbuffer);
    assert!(layout.is_global);
    assert_eq!(offsets(&layout), vec![0, 4]);
    assert_eq!(layout.size, 20);
}

#[test]
fn test_structured_natural_alignment() {
    let layout = structured_layout("cbuffer CB { float a; double d; };");

    assert_eq!(offsets(&layout), vec![0, 8]);
    assert_eq!(layout.submembers[0].padding, 4);
    assert_eq!(layout.size, 16);
}

#[test]
fn test_structured_end_padding_on_last_member() {
    let layout = structured_layout("cbuffer CB { double d; float f; };");

    // 12 bytes of content rounded up to alignment 8
    assert_eq!(layout.size, 16);
    let f = &layout.submembers[1];
    assert_eq!(f.size, 4);
    assert_eq!(f.padding, 4);
}

#[test]
fn test_structured_nested_struct() {
    let layout =
        structured_layout("struct S { double d; float f; };\ncbuffer C { S s; float z; };");

    let s = &layout.submembers[0];
    assert_eq!(s.size, 16);
    assert_eq!(s.submembers[1].padding, 4);

    let z = &layout.submembers[1];
    assert_eq!(z.offset, 16);
    // the buffer's own tail lands on z
    assert_eq!(z.padding, 4);
    assert_eq!(layout.size, 24);
}

#[test]
fn test_structured_array_stride() {
    let layout = structured_layout("cbuffer CB { float a[3]; float f; };");

    let arr = &layout.submembers[0];
    assert_eq!(offsets(arr), vec![0, 4, 8]);
    assert_eq!(arr.size, 12);
    assert_eq!(layout.submembers[1].offset, 12);
    assert_eq!(layout.size, 16);
}

#[test]
fn test_structured_array_end_padding_mirrored() {
    let layout = structured_layout("cbuffer CB { double d; float a[3]; };");

    let arr = &layout.submembers[1];
    assert_eq!(arr.offset, 8);
    assert_eq!(arr.size, 12);
    // the buffer tail lands on the array and its last element
    assert_eq!(arr.padding, 4);
    assert_eq!(arr.submembers[2].padding, 4);
    assert_eq!(layout.size, 24);
}

#[test]
fn test_structured_empty_struct() {
    let layout =
        structured_layout("cbuffer CB { struct { float x; } a; struct { } e; float z; };");

    assert_eq!(layout.submembers[1].offset, 4);
    assert_eq!(layout.submembers[1].size, 0);
    assert_eq!(layout.submembers[2].offset, 4);
    assert_eq!(layout.size, 8);
}

#[test]
fn test_structured_matrix_columns_are_dense() {
    let layout = structured_layout("cbuffer CB { float2x2 m; float f; };");

    let arr = &layout.submembers[0];
    assert_eq!(offsets(arr), vec![0, 8]);
    assert_eq!(arr.size, 16);
    assert_eq!(layout.submembers[1].offset, 16);
    assert_eq!(layout.size, 20);
}

#[test]
fn test_structured_wrapper_root() {
    let layout = structured_layout("StructuredBuffer<float4> verts;");

    assert_eq!(layout.name, "verts");
    assert!(layout.is_sbuffer);
    assert!(layout.is_global);
    assert_eq!(layout.submembers[0].name, "");
    assert_eq!(layout.submembers[0].size, 16);
    assert_eq!(layout.size, 16);
}
