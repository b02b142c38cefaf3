use crate::core::types::Type;

/// One node of a computed layout tree. Builtins are leaves; arrays hold one
/// submember per element, structs one per field. Offsets are absolute
/// within the top-level declaration, sizes and padding in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutMember {
    pub ty: Type,
    pub name: String,
    pub offset: usize,
    pub size: usize,
    pub padding: usize,
    pub submembers: Vec<LayoutMember>,
    pub is_cbuffer: bool,
    pub is_sbuffer: bool,
    pub is_global: bool,
}

impl LayoutMember {
    pub fn new(ty: Type, name: String, offset: usize) -> Self {
        Self {
            ty,
            name,
            offset,
            size: 0,
            padding: 0,
            submembers: Vec::new(),
            is_cbuffer: false,
            is_sbuffer: false,
            is_global: false,
        }
    }

    /// Records trailing padding. For arrays the value is mirrored into the
    /// last element, so consumers looking at "the last element" see it too.
    pub fn set_padding(&mut self, padding: usize) {
        self.padding = padding;
        if self.ty.is_array() {
            if let Some(last) = self.submembers.last_mut() {
                last.padding = padding;
            }
        }
    }

    /// Appends a child, recomputing the previous sibling's padding from the
    /// gap between its end and the new child's offset.
    pub fn push_submember(&mut self, member: LayoutMember) {
        if let Some(last) = self.submembers.last_mut() {
            let padding = member.offset - (last.offset + last.size);
            last.set_padding(padding);
        }
        self.submembers.push(member);
    }
}
