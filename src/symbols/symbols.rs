use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{
        ast::{AstIndex, NodeKind},
        nodes::{Decl, Program},
        store::Store,
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Procedure,
    Struct,
    Variable,
}

impl SymbolKind {
    /// Picks the kind from the tag of a declaration's initializer.
    pub fn of(decl: &Decl) -> Self {
        match decl.expr.map(|expr| expr.kind()) {
            Some(NodeKind::ProcedureDecl) => SymbolKind::Procedure,
            Some(NodeKind::Struct) => SymbolKind::Struct,
            _ => SymbolKind::Variable,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub is_const: bool,
    pub decl: AstIndex<Decl>,
    pub position: Position,
}

#[derive(Debug, Default)]
pub struct Scope {
    symbol_lookup: HashMap<String, usize>,
    symbols: Vec<Symbol>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn declare_symbol(&mut self, symbol: Symbol) -> Result<(), Error> {
        if self.symbol_lookup.contains_key(&symbol.name) {
            Err(Error::new(
                ErrorImpl::SymbolAlreadyDeclared {
                    symbol: symbol.name,
                },
                symbol.position,
            ))
        } else {
            self.symbol_lookup
                .insert(symbol.name.clone(), self.symbols.len());
            self.symbols.push(symbol);
            Ok(())
        }
    }

    pub fn get_symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbol_lookup
            .get(name)
            .map(|index| &self.symbols[*index])
    }

    /// Symbols in declaration order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Creates the global scope with one symbol per top-level declaration.
pub fn register_top_level(store: &Store, program: &Program) -> Result<Scope, Error> {
    let mut scope = Scope::new();

    for index in &program.decls {
        let decl = store.get(*index);
        scope.declare_symbol(Symbol {
            name: decl.name().to_string(),
            kind: SymbolKind::of(decl),
            is_const: decl.is_const,
            decl: *index,
            position: decl.ident.span.start.clone(),
        })?;
    }

    debug!(symbols = scope.len(), "registered top-level symbols");
    Ok(scope)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Void,
}

impl BuiltinType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "u8" => Some(BuiltinType::U8),
            "u16" => Some(BuiltinType::U16),
            "u32" => Some(BuiltinType::U32),
            "u64" => Some(BuiltinType::U64),
            "i8" => Some(BuiltinType::I8),
            "i16" => Some(BuiltinType::I16),
            "i32" => Some(BuiltinType::I32),
            "i64" => Some(BuiltinType::I64),
            "f32" => Some(BuiltinType::F32),
            "f64" => Some(BuiltinType::F64),
            "void" => Some(BuiltinType::Void),
            _ => None,
        }
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        match self {
            BuiltinType::U8 | BuiltinType::I8 => 1,
            BuiltinType::U16 | BuiltinType::I16 => 2,
            BuiltinType::U32 | BuiltinType::I32 | BuiltinType::F32 => 4,
            BuiltinType::U64 | BuiltinType::I64 | BuiltinType::F64 => 8,
            BuiltinType::Void => 0,
        }
    }
}
