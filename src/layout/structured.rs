use crate::core::types::{MemberVariable, Type};
use crate::layout::member::LayoutMember;

/// Structured buffer packing, which follows C rules: everything aligns to
/// its natural alignment and a type's size is a multiple of its alignment,
/// with the trailing gap of a struct counted towards its last member.
pub struct StructuredLayout {
    cur_offset: usize,
}

impl StructuredLayout {
    pub fn new() -> Self {
        Self { cur_offset: 0 }
    }

    /// One layout tree per buffer declaration, each starting at offset 0.
    pub fn generate(&mut self, buffers: &[MemberVariable]) -> Vec<LayoutMember> {
        let mut layouts = Vec::with_capacity(buffers.len());
        for buffer in buffers {
            self.cur_offset = 0;
            let mut layout = self.layout_member(&buffer.ty, &buffer.name);
            layout.is_sbuffer = true;
            layout.is_global = true;
            layouts.push(layout);
        }
        layouts
    }

    /// Natural alignment, derived bottom-up: arrays align like their
    /// element, structs like their widest member. An empty struct has
    /// alignment 0 and aligns nothing.
    fn natural_alignment(ty: &Type) -> usize {
        match ty {
            Type::Builtin(b) => b.alignment,
            Type::Array(a) => Self::natural_alignment(&a.element),
            Type::Struct(s) => s
                .members
                .iter()
                .map(|m| Self::natural_alignment(&m.ty))
                .max()
                .unwrap_or(0),
        }
    }

    fn layout_member(&mut self, ty: &Type, name: &str) -> LayoutMember {
        let alignment = Self::natural_alignment(ty);
        self.align_to(alignment);
        let start_offset = self.cur_offset;
        let mut member = LayoutMember::new(ty.clone(), name.to_string(), start_offset);

        match ty {
            Type::Builtin(b) => {
                self.cur_offset += b.size();
            }
            Type::Array(a) => {
                for i in 0..a.size {
                    let element = self.layout_member(&a.element, &format!("{}[{}]", name, i));
                    member.push_submember(element);
                }
            }
            Type::Struct(s) => {
                for submember in &s.members {
                    let child = self.layout_member(&submember.ty, &submember.name);
                    member.push_submember(child);
                }
            }
        }
        member.size = self.cur_offset - start_offset;

        // the type size must be a multiple of the type alignment; the
        // trailing gap counts towards the last member of a struct and is
        // part of the struct's size
        self.align_to(alignment);
        let end_padding = self.cur_offset - start_offset - member.size;
        if ty.is_struct() {
            if let Some(last) = member.submembers.last_mut() {
                last.set_padding(end_padding);
            }
            member.size += end_padding;
        }

        member
    }

    fn align_to(&mut self, align: usize) {
        if align != 0 {
            self.cur_offset = (self.cur_offset + (align - 1)) & !(align - 1);
        }
    }
}

impl Default for StructuredLayout {
    fn default() -> Self {
        Self::new()
    }
}
