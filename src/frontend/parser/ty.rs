use crate::core::types::{ArrayType, BuiltinType, Type, SCALAR_TYPENAMES};
use crate::error::HlslError;
use crate::frontend::lexer::token::{Token, TokenKind};
use crate::frontend::parser::parser::Parser;

impl Parser {
    pub(crate) fn parse_member_type(&mut self) -> Result<Option<Type>, HlslError> {
        if self.accept(TokenKind::Struct)?.is_some() {
            let inner = self.parse_struct_type_declaration(false, false)?;
            Ok(Some(Type::Struct(inner)))
        } else {
            self.parse_non_struct_type()
        }
    }

    /// Scalar, vector, matrix, template or typedef'd type, with an optional
    /// matrix orientation prefix. Returns `None` for unknown names so the
    /// caller can report them with its own context.
    pub(crate) fn parse_non_struct_type(&mut self) -> Result<Option<Type>, HlslError> {
        // column-major is already the default
        let orientation = self.accept_any(&[TokenKind::RowMajor, TokenKind::ColumnMajor])?;
        let is_row_major = matches!(
            orientation.as_ref().map(|t| t.kind),
            Some(TokenKind::RowMajor)
        );

        let ty = self.parse_non_struct_type_impl(is_row_major)?;

        if let (Some(orientation), Some(ty)) = (orientation, ty.as_ref()) {
            if !ty.from_matrix() {
                return Err(self.error_at(
                    format!(
                        "cannot define {} for non-matrix type {}",
                        orientation.kind,
                        ty.name()
                    ),
                    &orientation,
                ));
            }
        }

        Ok(ty)
    }

    fn parse_non_struct_type_impl(&mut self, is_row_major: bool) -> Result<Option<Type>, HlslError> {
        let name_token = self.expect(TokenKind::Identifier)?;
        let name = name_token.text.clone();

        if name == "matrix" || name == "vector" {
            return Ok(Some(self.parse_template_type(&name_token, is_row_major)?));
        }

        for &scalar in SCALAR_TYPENAMES {
            let suffix = match name.strip_prefix(scalar) {
                Some(s) => s,
                None => continue,
            };

            if suffix.is_empty() {
                let builtin = self.make_builtin(scalar, 1, false, &name_token)?;
                return Ok(Some(Type::Builtin(builtin)));
            }

            let digits: Vec<char> = suffix.chars().collect();
            if digits.len() == 1 && digits[0].is_ascii_digit() {
                let vector_size = (digits[0] as u8 - b'0') as usize;
                self.check_size(
                    vector_size,
                    &digits[0].to_string(),
                    "vector size",
                    1,
                    4,
                    &name_token,
                )?;
                let builtin = self.make_builtin(scalar, vector_size, false, &name_token)?;
                return Ok(Some(Type::Builtin(builtin)));
            } else if digits.len() == 3
                && digits[0].is_ascii_digit()
                && digits[1] == 'x'
                && digits[2].is_ascii_digit()
            {
                let rows = (digits[0] as u8 - b'0') as usize;
                let cols = (digits[2] as u8 - b'0') as usize;
                self.check_size(rows, &digits[0].to_string(), "matrix row size", 1, 4, &name_token)?;
                self.check_size(
                    cols,
                    &digits[2].to_string(),
                    "matrix column size",
                    1,
                    4,
                    &name_token,
                )?;

                let (vector_size, array_size) = if is_row_major {
                    (cols, rows)
                } else {
                    (rows, cols)
                };
                let vector = self.make_builtin(scalar, vector_size, true, &name_token)?;
                return Ok(Some(Self::matrix_type(vector, array_size)));
            }
        }

        Ok(self.find_typedef(&name))
    }

    /// `matrix<T, R, C>` / `vector<T, N>`; all arguments optional, `matrix`
    /// alone means `float4x4` and `vector` alone means `float4`.
    fn parse_template_type(
        &mut self,
        name_token: &Token,
        is_row_major: bool,
    ) -> Result<Type, HlslError> {
        let mut scalar_type = "float";
        let mut vector_size: usize = 4;
        let mut array_size: usize = 4;
        let mut scalar_token = None;

        let is_matrix = name_token.text == "matrix";
        if self.accept(TokenKind::Less)?.is_some() {
            let id_token = self.expect(TokenKind::Identifier)?;
            scalar_type = match SCALAR_TYPENAMES.iter().find(|t| **t == id_token.text) {
                Some(t) => *t,
                None => {
                    let corrected = SCALAR_TYPENAMES
                        .iter()
                        .find(|t| id_token.text.contains(**t))
                        .copied();
                    let hint = match corrected {
                        Some(t) => format!(", did you mean {}?", t),
                        None => String::new(),
                    };
                    return Err(self.error_at(
                        format!("invalid scalar type '{}'{}", id_token.text, hint),
                        &id_token,
                    ));
                }
            };
            scalar_token = Some(id_token);

            if self.accept(TokenKind::Comma)?.is_some() {
                let (value, token) = self.parse_integer()?;
                vector_size = value;
                let what = if is_matrix { "matrix row size" } else { "vector size" };
                self.check_size(vector_size, &token.text, what, 1, 4, &token)?;
            }
            if is_matrix && self.accept(TokenKind::Comma)?.is_some() {
                let (value, token) = self.parse_integer()?;
                array_size = value;
                self.check_size(array_size, &token.text, "matrix column size", 1, 4, &token)?;
            }
            self.expect(TokenKind::Greater)?;
        }

        let at = scalar_token.as_ref().unwrap_or(name_token);
        if is_matrix {
            if is_row_major {
                std::mem::swap(&mut vector_size, &mut array_size);
            }
            let vector = self.make_builtin(scalar_type, vector_size, true, at)?;
            Ok(Self::matrix_type(vector, array_size))
        } else {
            let builtin = self.make_builtin(scalar_type, vector_size, false, at)?;
            Ok(Type::Builtin(builtin))
        }
    }

    /// Array dimensions after the first `[` has been consumed.
    /// Multi-dimensional arrays are flattened to one dimension; the range
    /// check applies to the running product.
    pub(crate) fn parse_array_type(&mut self, element: Type) -> Result<Type, HlslError> {
        let mut array_size: usize = 1;
        loop {
            let (value, token) = self.parse_integer()?;
            array_size = array_size.saturating_mul(value);
            self.check_size(array_size, &token.text, "array size", 1, 4096, &token)?;
            self.expect(TokenKind::RightBracket)?;
            if self.accept(TokenKind::LeftBracket)?.is_none() {
                break;
            }
        }

        Ok(Type::Array(ArrayType {
            element: Box::new(element),
            size: array_size,
            from_matrix: false,
        }))
    }

    fn make_builtin(
        &self,
        scalar: &str,
        vector_size: usize,
        from_matrix: bool,
        token: &Token,
    ) -> Result<BuiltinType, HlslError> {
        match BuiltinType::vector(scalar, vector_size, self.force_c_types, from_matrix) {
            Some(builtin) => Ok(builtin),
            None => Err(self.error_at(format!("unsupported type '{}'", token.text), token)),
        }
    }

    /// NxM matrices become M-element arrays of N-vectors (column-major
    /// storage; the caller swaps for row_major). Nx1 matrices are layout
    /// equivalent to the bare vector, not a one-element array.
    fn matrix_type(vector: BuiltinType, array_size: usize) -> Type {
        if array_size == 1 {
            Type::Builtin(vector)
        } else {
            Type::Array(ArrayType {
                element: Box::new(Type::Builtin(vector)),
                size: array_size,
                from_matrix: true,
            })
        }
    }
}
