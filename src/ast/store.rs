use crate::{errors::errors::StructuralError, AST_NODES};

use super::{
    ast::{AnyIndex, AstIndex, AstNode},
    nodes::{
        ArrayAccess, BinaryOp, Block, Decl, FieldAccess, For, Ident, If, Literal, ProcedureCall,
        ProcedureDecl, ProcedureSignature, Return, Struct, Type, UnaryOp, While,
    },
};

/// Append-only storage for the nodes of one kind.
#[derive(Debug)]
pub struct Pool<T> {
    values: Vec<T>,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Pool { values: Vec::new() }
    }
}

impl<T> Pool<T> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

impl<T: AstNode> Pool<T> {
    /// Appends `value`; the returned index's slot is the previous length.
    pub fn push(&mut self, value: T) -> AstIndex<T> {
        let slot = self.values.len() as u32;
        self.values.push(value);
        AstIndex::new(slot)
    }

    pub fn try_get(&self, index: AstIndex<T>) -> Result<&T, StructuralError> {
        self.values
            .get(index.slot() as usize)
            .ok_or(StructuralError::OutOfBounds {
                kind: T::KIND,
                slot: index.slot(),
                len: self.values.len(),
            })
    }

    pub fn try_get_any(&self, index: AnyIndex) -> Result<&T, StructuralError> {
        if index.kind() != T::KIND {
            return Err(StructuralError::KindMismatch {
                expected: T::KIND,
                found: index.kind(),
            });
        }

        self.try_get(AstIndex::new(index.slot()))
    }

    /// # Panics
    ///
    /// If the slot is past the end of the pool.
    pub fn get(&self, index: AstIndex<T>) -> &T {
        match self.try_get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }

    /// # Panics
    ///
    /// If the index is tagged with another kind, or the slot is past the end
    /// of the pool.
    pub fn get_any(&self, index: AnyIndex) -> &T {
        match self.try_get_any(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

AST_NODES! {
    Ident => idents,
    Literal => literals,
    Decl => decls,
    UnaryOp => unary_ops,
    BinaryOp => binary_ops,
    ProcedureCall => procedure_calls,
    ArrayAccess => array_accesses,
    FieldAccess => field_accesses,
    Type => types,
    ProcedureSignature => procedure_signatures,
    ProcedureDecl => procedure_decls,
    Return => returns,
    Block => blocks,
    If => ifs,
    While => whiles,
    For => fors,
    Struct => structs,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    pub fn push<T: AstNode>(&mut self, node: T) -> AstIndex<T> {
        T::pool_mut(self).push(node)
    }

    pub fn pool<T: AstNode>(&self) -> &Pool<T> {
        T::pool(self)
    }

    pub fn get<T: AstNode>(&self, index: AstIndex<T>) -> &T {
        T::pool(self).get(index)
    }

    pub fn get_any<T: AstNode>(&self, index: AnyIndex) -> &T {
        T::pool(self).get_any(index)
    }

    pub fn try_get<T: AstNode>(&self, index: AstIndex<T>) -> Result<&T, StructuralError> {
        T::pool(self).try_get(index)
    }

    pub fn try_get_any<T: AstNode>(&self, index: AnyIndex) -> Result<&T, StructuralError> {
        T::pool(self).try_get_any(index)
    }
}
