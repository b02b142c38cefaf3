use crate::core::types::{MemberVariable, Type};
use crate::layout::member::LayoutMember;

/// Constant buffer packing: members align to their scalar alignment but may
/// not cross a 16 byte register boundary, arrays and structs start on a
/// register boundary and array elements each occupy a fresh register.
pub struct CbufferLayout {
    cur_offset: usize,
}

impl CbufferLayout {
    pub fn new() -> Self {
        Self { cur_offset: 0 }
    }

    /// One layout tree per buffer declaration, each starting at offset 0.
    pub fn generate(&mut self, buffers: &[MemberVariable]) -> Vec<LayoutMember> {
        let mut layouts = Vec::with_capacity(buffers.len());
        for buffer in buffers {
            self.cur_offset = 0;
            let mut layout = self.layout_member(&buffer.ty, &buffer.name);
            layout.is_cbuffer = true;
            layout.is_global = true;
            layouts.push(layout);
        }
        layouts
    }

    fn layout_member(&mut self, ty: &Type, name: &str) -> LayoutMember {
        match ty {
            Type::Builtin(b) => {
                self.align_to(b.alignment);
                let size = b.size();
                // a member that would cross into the next 16 byte register
                // moves to the start of that register instead
                if (self.cur_offset + size - 1) / 16 > self.cur_offset / 16 {
                    self.align_to_16();
                }
                let mut member = LayoutMember::new(ty.clone(), name.to_string(), self.cur_offset);
                member.size = size;
                self.cur_offset += size;
                member
            }
            Type::Array(a) => {
                self.align_to_16();
                let start_offset = self.cur_offset;
                let mut array = LayoutMember::new(ty.clone(), name.to_string(), start_offset);
                for i in 0..a.size {
                    self.align_to_16();
                    let element = self.layout_member(&a.element, &format!("{}[{}]", name, i));
                    array.push_submember(element);
                }
                array.size = self.cur_offset - start_offset;
                array
            }
            Type::Struct(s) => {
                self.align_to_16();
                let start_offset = self.cur_offset;
                let mut layout = LayoutMember::new(ty.clone(), name.to_string(), start_offset);
                for member in &s.members {
                    let child = self.layout_member(&member.ty, &member.name);
                    layout.push_submember(child);
                }
                // unlike C and structured buffers, struct size is not
                // rounded up to the largest member alignment: a struct with
                // a double and a float is 12 bytes, not 16
                layout.size = self.cur_offset - start_offset;
                layout
            }
        }
    }

    fn align_to_16(&mut self) {
        self.cur_offset = (self.cur_offset + 15) & !15;
    }

    fn align_to(&mut self, align: usize) {
        if align != 0 {
            self.cur_offset = (self.cur_offset + (align - 1)) & !(align - 1);
        }
    }
}

impl Default for CbufferLayout {
    fn default() -> Self {
        Self::new()
    }
}
