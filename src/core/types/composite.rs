use crate::core::types::ty::Type;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructType {
    pub name: String,
    pub members: Vec<MemberVariable>,
}

/// Fixed-size array. `size` is the flattened product of all declared
/// dimensions; the element is never itself a matrix-derived array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    pub element: Box<Type>,
    pub size: usize,
    pub from_matrix: bool,
}

/// A struct member, or a top-level buffer declaration viewed as a member of
/// the implicit global scope (then one of the buffer flags is set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberVariable {
    pub ty: Type,
    pub name: String,
    pub is_cbuffer: bool,
    pub is_sbuffer: bool,
}

impl MemberVariable {
    pub fn new(ty: Type, name: String) -> Self {
        Self {
            ty,
            name,
            is_cbuffer: false,
            is_sbuffer: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typedef {
    pub name: String,
    pub ty: Type,
}
