use std::{
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use super::store::{Pool, Store};

/// Node kinds. Each kind is stored in its own pool of the `Store`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum NodeKind {
    Ident,
    Literal,
    Decl,
    UnaryOp,
    BinaryOp,
    ProcedureCall,
    ArrayAccess,
    FieldAccess,
    Type,
    ProcedureSignature,
    ProcedureDecl,
    Return,
    Block,
    If,
    While,
    For,
    Struct,
}

impl NodeKind {
    /// Initializers of these kinds end with `}` and need no trailing `;`.
    pub fn is_block_bodied(&self) -> bool {
        matches!(self, NodeKind::ProcedureDecl | NodeKind::Struct)
    }
}

/// Node Trait
///
/// Implemented by every pooled node struct (see `AST_NODES!`). `KIND` is the
/// tag a generic index must carry to be dereferenced as `Self`.
pub trait AstNode: Sized {
    const KIND: NodeKind;
    fn pool(store: &Store) -> &Pool<Self>;
    fn pool_mut(store: &mut Store) -> &mut Pool<Self>;
}

/// Index into the pool of one specific node kind.
pub struct AstIndex<T> {
    slot: u32,
    marker: PhantomData<fn() -> T>,
}

impl<T> AstIndex<T> {
    pub(crate) fn new(slot: u32) -> Self {
        AstIndex {
            slot,
            marker: PhantomData,
        }
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }
}

// Manual impls: derives would put bounds on `T`.
impl<T> Clone for AstIndex<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AstIndex<T> {}

impl<T> PartialEq for AstIndex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T> Eq for AstIndex<T> {}

impl<T> Hash for AstIndex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.hash(state);
    }
}

impl<T: AstNode> Debug for AstIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{}", T::KIND, self.slot)
    }
}

/// Index that may point at any node kind. The tag is checked whenever the
/// index is dereferenced.
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct AnyIndex {
    kind: NodeKind,
    slot: u32,
}

impl AnyIndex {
    /// Builds a generic index without any check that `slot` holds a node of
    /// `kind`. Prefer converting from an `AstIndex`.
    pub fn from_raw(kind: NodeKind, slot: u32) -> Self {
        AnyIndex { kind, slot }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }

    pub fn is<T: AstNode>(&self) -> bool {
        self.kind == T::KIND
    }

    pub fn downcast<T: AstNode>(&self) -> Option<AstIndex<T>> {
        if self.is::<T>() {
            Some(AstIndex::new(self.slot))
        } else {
            None
        }
    }
}

impl Debug for AnyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{}", self.kind, self.slot)
    }
}

impl<T: AstNode> From<AstIndex<T>> for AnyIndex {
    fn from(index: AstIndex<T>) -> Self {
        AnyIndex {
            kind: T::KIND,
            slot: index.slot,
        }
    }
}
