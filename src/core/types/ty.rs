use crate::core::types::builtin::BuiltinType;
use crate::core::types::composite::{ArrayType, StructType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Builtin(BuiltinType),
    Array(ArrayType),
    Struct(StructType),
}

impl Type {
    pub fn name(&self) -> String {
        match self {
            Type::Builtin(b) => b.name.clone(),
            Type::Array(a) => format!("{}[{}]", a.element.name(), a.size),
            Type::Struct(s) => s.name.clone(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::Builtin(_) => "builtin",
            Type::Array(_) => "array",
            Type::Struct(_) => "struct",
        }
    }

    /// True for types produced by matrix decomposition; `row_major` and
    /// `column_major` are only legal on these.
    pub fn from_matrix(&self) -> bool {
        match self {
            Type::Builtin(b) => b.from_matrix,
            Type::Array(a) => a.from_matrix,
            Type::Struct(_) => false,
        }
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Type::Struct(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array(_))
    }
}
