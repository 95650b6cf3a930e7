//! Node definitions.
//!
//! Nodes refer to each other through indices into the `Store`, never through
//! owning pointers. A node is written once when it is pushed and never
//! changes afterwards.

use crate::lexer::tokens::{LiteralKind, Token, TokenKind};

use super::ast::{AnyIndex, AstIndex};

#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub token: Token,
}

impl Ident {
    pub fn name(&self) -> &str {
        &self.token.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub token: Token,
    pub kind: LiteralKind,
}

/// `name : type`, `name : type = expr`, `name := expr`, `name : type : expr`
/// or `name :: expr`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decl {
    pub ident: Token,
    pub ty: Option<AstIndex<Type>>,
    pub expr: Option<AnyIndex>,
    pub is_const: bool,
}

impl Decl {
    pub fn name(&self) -> &str {
        &self.ident.value
    }

    /// A declaration needs a type or an initializer, and a constant always
    /// needs an initializer.
    pub fn is_well_formed(&self) -> bool {
        (self.ty.is_some() || self.expr.is_some()) && (!self.is_const || self.expr.is_some())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    pub operator: TokenKind,
    pub operand: AnyIndex,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub operator: TokenKind,
    pub left: AnyIndex,
    pub right: AnyIndex,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureCall {
    pub callee: AnyIndex,
    pub args: Vec<AnyIndex>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayAccess {
    pub base: AnyIndex,
    pub index: AnyIndex,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldAccess {
    pub base: AnyIndex,
    pub field: AstIndex<Ident>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArraySize {
    /// `[?] T`
    Dynamic,
    /// `[expr] T`
    Fixed(AnyIndex),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeShape {
    Named(AstIndex<Ident>),
    Pointer(AstIndex<Type>),
    Array {
        size: ArraySize,
        element: AstIndex<Type>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub shape: TypeShape,
}

/// One `name : type` parameter. Stored inline in its signature, not pooled.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAndName {
    pub ident: AstIndex<Ident>,
    pub ty: AstIndex<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureSignature {
    pub params: Vec<TypeAndName>,
    pub return_type: AstIndex<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDecl {
    pub signature: AstIndex<ProcedureSignature>,
    pub body: AstIndex<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub expr: AnyIndex,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<AnyIndex>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub condition: AnyIndex,
    pub block: AstIndex<Block>,
    pub else_block: Option<AstIndex<Block>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct While {
    pub condition: AnyIndex,
    pub block: AstIndex<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct For {
    pub init: AnyIndex,
    pub condition: AnyIndex,
    pub step: AnyIndex,
    pub block: AstIndex<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    pub members: Vec<AstIndex<Decl>>,
}

/// Parse root: the top-level declarations in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub decls: Vec<AstIndex<Decl>>,
}
