use crate::core::types::{MemberVariable, StructType, Type};
use crate::error::HlslError;
use crate::frontend::lexer::token::TokenKind;
use crate::frontend::parser::parser::Parser;

impl Parser {
    /// Parses the whole file and returns the top-level buffer declarations.
    /// Plain struct declarations and typedefs only populate the typedef
    /// table; they produce no buffers.
    pub fn parse_file(&mut self) -> Result<Vec<MemberVariable>, HlslError> {
        loop {
            self.parse_declaration()?;
            if self.is_at_end() {
                break;
            }
        }
        Ok(std::mem::take(&mut self.buffers))
    }

    fn parse_declaration(&mut self) -> Result<(), HlslError> {
        let decl = self.expect_any(&[
            TokenKind::Struct,
            TokenKind::CBuffer,
            TokenKind::ConstantBuffer,
            TokenKind::StructuredBuffer,
            TokenKind::Typedef,
        ])?;

        if matches!(decl.kind, TokenKind::Typedef) {
            // typedefs are syntactically like member variable declarations,
            // including multiple comma-separated names
            let mut declarators = Vec::new();
            self.parse_member_declaration(&mut declarators)?;
            for d in declarators {
                self.add_typedef(d.ty, d.name)?;
            }
            return Ok(());
        }

        let type_declaration;
        let mut variable_name = String::new();
        let mut is_cbuffer = false;
        let mut is_sbuffer = false;

        if matches!(decl.kind, TokenKind::ConstantBuffer) {
            let (ty, name) = self.parse_constant_buffer()?;
            type_declaration = ty;
            variable_name = name;
            is_cbuffer = true;
        } else if matches!(decl.kind, TokenKind::StructuredBuffer) {
            let (ty, name) = self.parse_structured_buffer()?;
            type_declaration = ty;
            variable_name = name;
            is_sbuffer = true;
        } else if matches!(decl.kind, TokenKind::Struct) {
            type_declaration = Type::Struct(self.parse_struct_type_declaration(true, false)?);
            if let Some(name_token) = self.accept(TokenKind::Identifier)? {
                variable_name = name_token.text;
            }
            // a trailing variable with array dimensions is accepted and
            // discarded, it declares no buffer
            while self.accept(TokenKind::LeftBracket)?.is_some() {
                self.parse_integer()?;
                self.expect(TokenKind::RightBracket)?;
            }
        } else {
            type_declaration = Type::Struct(self.parse_struct_type_declaration(true, true)?);
            is_cbuffer = true;
        }

        if matches!(decl.kind, TokenKind::CBuffer) {
            self.accept(TokenKind::Semicolon)?;
        } else {
            self.expect(TokenKind::Semicolon)?;
        }

        if is_cbuffer || is_sbuffer {
            // top level declarations become member variables of the global
            // scope so their variable names survive into the layout
            let mut global = MemberVariable::new(type_declaration, variable_name);
            global.is_cbuffer = is_cbuffer;
            global.is_sbuffer = is_sbuffer;
            self.buffers.push(global);
        }
        Ok(())
    }

    /// `ConstantBuffer<T> name;` where `T` must be a previously declared
    /// struct, never an inline struct or a scalar/vector.
    fn parse_constant_buffer(&mut self) -> Result<(Type, String), HlslError> {
        self.expect(TokenKind::Less)?;
        let template_name = self.expect(TokenKind::Identifier)?;

        let mut template_type = self.find_typedef(&template_name.text);
        if template_type.is_none() {
            // maybe a valid type name that is not a struct; reparse it to
            // tell that case apart from an unknown name
            self.unconsume();
            template_type = self.parse_non_struct_type()?;
        }
        let template_type = match template_type {
            Some(ty) => ty,
            None => {
                return Err(self.error_at(
                    format!("cannot find type named '{}'", template_name.text),
                    &template_name,
                ))
            }
        };

        if !template_type.is_struct() {
            return Err(self.error_at(
                format!(
                    "template type '{}' must be a struct type (is '{}')",
                    template_name.text,
                    template_type.kind_name()
                ),
                &template_name,
            ));
        }

        self.expect(TokenKind::Greater)?;
        let variable_name = self.expect(TokenKind::Identifier)?;
        while self.accept(TokenKind::LeftBracket)?.is_some() {
            self.parse_integer()?;
            self.expect(TokenKind::RightBracket)?;
        }
        self.parse_optional_register_binding()?;

        // wrap in a synthetic struct so cbuffer and ConstantBuffer share one
        // shape downstream
        let wrapper = StructType {
            name: variable_name.text.clone(),
            members: vec![MemberVariable::new(template_type, String::new())],
        };
        Ok((Type::Struct(wrapper), variable_name.text))
    }

    /// `StructuredBuffer<T> name;` accepts any resolvable type except inline
    /// struct definitions; named struct typedefs are fine.
    fn parse_structured_buffer(&mut self) -> Result<(Type, String), HlslError> {
        self.expect(TokenKind::Less)?;
        let template_type = match self.parse_non_struct_type()? {
            Some(ty) => ty,
            None => {
                let at = match self.prev_token() {
                    Some(t) => t.clone(),
                    None => self.peek().clone(),
                };
                return Err(
                    self.error_at(format!("cannot find type named '{}'", at.text), &at)
                );
            }
        };
        self.expect(TokenKind::Greater)?;

        let variable_name = self.expect(TokenKind::Identifier)?;
        while self.accept(TokenKind::LeftBracket)?.is_some() {
            self.parse_integer()?;
            self.expect(TokenKind::RightBracket)?;
        }
        self.parse_optional_register_binding()?;

        let wrapper = StructType {
            name: variable_name.text.clone(),
            members: vec![MemberVariable::new(template_type, String::new())],
        };
        Ok((Type::Struct(wrapper), variable_name.text))
    }

    /// Parses `NAME? { members }` after the `struct`/`cbuffer` keyword.
    /// Top-level declarations require the name; named non-cbuffer structs
    /// are registered as typedefs, cbuffer bodies never are.
    pub(crate) fn parse_struct_type_declaration(
        &mut self,
        is_top_level: bool,
        is_cbuffer: bool,
    ) -> Result<StructType, HlslError> {
        let type_name = if is_top_level {
            Some(self.expect(TokenKind::Identifier)?.text)
        } else {
            self.accept(TokenKind::Identifier)?.map(|t| t.text)
        };

        if is_cbuffer {
            self.parse_optional_register_binding()?;
        }

        self.expect(TokenKind::LeftBrace)?;
        let mut members = Vec::new();
        while self.accept(TokenKind::RightBrace)?.is_none() {
            self.parse_member_declaration(&mut members)?;
        }

        let named = type_name.is_some();
        let name = match type_name {
            Some(n) => n,
            None => self.make_anonymous_name(),
        };
        let declaration = StructType { name, members };
        if !is_cbuffer && named {
            self.add_typedef(Type::Struct(declaration.clone()), declaration.name.clone())?;
        }
        Ok(declaration)
    }

    /// One member declaration: a shared base type followed by one or more
    /// comma-separated names, each with its own optional array dimensions.
    pub(crate) fn parse_member_declaration(
        &mut self,
        members: &mut Vec<MemberVariable>,
    ) -> Result<(), HlslError> {
        let member_type = match self.parse_member_type()? {
            Some(ty) => ty,
            None => {
                let at = match self.prev_token() {
                    Some(t) => t.clone(),
                    None => self.peek().clone(),
                };
                return Err(
                    self.error_at(format!("cannot find type named '{}'", at.text), &at)
                );
            }
        };

        loop {
            let member_name = self.expect(TokenKind::Identifier)?.text;

            if self.accept(TokenKind::LeftBracket)?.is_some() {
                let array_type = self.parse_array_type(member_type.clone())?;
                members.push(MemberVariable::new(array_type, member_name));
            } else {
                members.push(MemberVariable::new(member_type.clone(), member_name));
            }

            if self.accept(TokenKind::Comma)?.is_none() {
                break;
            }
        }

        self.expect(TokenKind::Semicolon)?;
        Ok(())
    }

    /// Accepts and discards `: register(x)` or `: register(x, y)`.
    /// Register names are not validated, this is not a compiler.
    fn parse_optional_register_binding(&mut self) -> Result<(), HlslError> {
        if self.accept(TokenKind::Colon)?.is_some() {
            self.expect(TokenKind::Register)?;
            self.expect(TokenKind::LeftParen)?;
            self.expect(TokenKind::Identifier)?;
            if self.accept(TokenKind::Comma)?.is_some() {
                self.expect(TokenKind::Identifier)?;
            }
            self.expect(TokenKind::RightParen)?;
        }
        Ok(())
    }
}
