/// Scalar type names in resolution order. Suffix parsing matches by prefix,
/// so a name must come before every name that is a prefix of it ("float16_t"
/// before "float"). The `min*` family and `half` resolve but are rejected as
/// unsupported.
pub const SCALAR_TYPENAMES: &[&str] = &[
    "float16_t",
    "float32_t",
    "float64_t",
    "int16_t",
    "uint16_t",
    "int32_t",
    "uint32_t",
    "int64_t",
    "uint64_t",
    "float",
    "int",
    "uint",
    "double",
    "bool",
    "min12int",
    "min16int",
    "min16uint",
    "min10float",
    "min16float",
    "half",
];

fn scalar_info(name: &str) -> Option<(usize, usize)> {
    // (element size, alignment)
    match name {
        "float16_t" | "int16_t" | "uint16_t" => Some((2, 2)),
        "float" | "float32_t" | "int" | "int32_t" | "uint" | "uint32_t" => Some((4, 4)),
        "bool" | "BOOL" => Some((4, 4)),
        "double" | "float64_t" | "int64_t" | "uint64_t" => Some((8, 8)),
        _ => None,
    }
}

/// Scalar or vector type. Matrices never appear here directly; the parser
/// decomposes them into arrays of vectors (or a bare vector when one
/// dimension is 1) with `from_matrix` set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinType {
    pub name: String,
    pub element_size: usize,
    pub alignment: usize,
    pub vector_size: usize,
    pub from_matrix: bool,
}

impl BuiltinType {
    /// `vector_size` of 1 gives the bare scalar. Returns `None` for scalar
    /// names without a supported layout (`half`, the `min*` family).
    /// `force_c_types` renames `bool` to its 4-byte C name `BOOL`.
    pub fn vector(
        scalar: &str,
        vector_size: usize,
        force_c_types: bool,
        from_matrix: bool,
    ) -> Option<Self> {
        let scalar = if scalar == "bool" && force_c_types {
            "BOOL"
        } else {
            scalar
        };
        let (element_size, alignment) = scalar_info(scalar)?;
        let name = if vector_size == 1 {
            scalar.to_string()
        } else {
            format!("{}{}", scalar, vector_size)
        };
        Some(Self {
            name,
            element_size,
            alignment,
            vector_size,
            from_matrix,
        })
    }

    pub fn size(&self) -> usize {
        self.element_size * self.vector_size
    }
}
