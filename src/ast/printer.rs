//! Re-renders a parsed program as source text.
//!
//! Binary expressions are always parenthesised, so the output reparses to a
//! tree of the same shape regardless of operator priorities.

use super::{
    ast::{AnyIndex, AstIndex, NodeKind},
    nodes::{
        ArrayAccess, ArraySize, BinaryOp, Block, Decl, FieldAccess, For, Ident, If, Literal,
        ProcedureCall, ProcedureDecl, ProcedureSignature, Program, Return, Struct, Type,
        TypeShape, UnaryOp, While,
    },
    store::Store,
};

const INDENT: &str = "    ";

pub struct AstPrinter<'a> {
    store: &'a Store,
    depth: usize,
}

impl<'a> AstPrinter<'a> {
    pub fn new(store: &'a Store) -> Self {
        AstPrinter { store, depth: 0 }
    }

    pub fn program(&mut self, program: &Program) -> String {
        let mut out = String::new();
        for decl in &program.decls {
            out += &self.decl(*decl);
        }
        out
    }

    fn indent(&self) -> String {
        INDENT.repeat(self.depth)
    }

    /// A declaration on its own line.
    pub fn decl(&mut self, index: AstIndex<Decl>) -> String {
        format!("{}{}\n", self.indent(), self.decl_inline(index))
    }

    fn decl_inline(&mut self, index: AstIndex<Decl>) -> String {
        let store = self.store;
        let decl = store.get(index);
        let mut out = format!("{} :", decl.name());

        if let Some(ty) = decl.ty {
            out += " ";
            out += &self.ty(ty);
        }

        match decl.expr {
            None => out += ";",
            Some(expr) => {
                let separator = if decl.is_const { ":" } else { "=" };
                if decl.ty.is_some() {
                    out += " ";
                }
                out += separator;
                out += " ";
                out += &self.expr(expr);
                // Inside a block the `;` keeps a following `(...)` statement
                // from parsing as a call on the literal.
                if !expr.kind().is_block_bodied() || self.depth > 0 {
                    out += ";";
                }
            }
        }

        out
    }

    pub fn ty(&mut self, index: AstIndex<Type>) -> String {
        let store = self.store;
        match &store.get(index).shape {
            TypeShape::Named(ident) => store.get(*ident).name().to_string(),
            TypeShape::Pointer(pointee) => format!("*{}", self.ty(*pointee)),
            TypeShape::Array { size, element } => {
                let size = match size {
                    ArraySize::Dynamic => String::from("?"),
                    ArraySize::Fixed(expr) => self.expr(*expr),
                };
                format!("[{}] {}", size, self.ty(*element))
            }
        }
    }

    pub fn expr(&mut self, index: AnyIndex) -> String {
        let store = self.store;
        match index.kind() {
            NodeKind::Ident => store.get_any::<Ident>(index).name().to_string(),
            NodeKind::Literal => store.get_any::<Literal>(index).token.value.clone(),
            NodeKind::UnaryOp => {
                let unary = store.get_any::<UnaryOp>(index);
                let operand = self.expr(unary.operand);
                // `- -x` must not turn into `--x`
                if operand.starts_with(['+', '-']) {
                    format!("{} {}", unary.operator.describe(), operand)
                } else {
                    format!("{}{}", unary.operator.describe(), operand)
                }
            }
            NodeKind::BinaryOp => {
                let binary = store.get_any::<BinaryOp>(index);
                format!(
                    "({} {} {})",
                    self.expr(binary.left),
                    binary.operator.describe(),
                    self.expr(binary.right)
                )
            }
            NodeKind::ProcedureCall => {
                let call = store.get_any::<ProcedureCall>(index);
                let callee = self.postfix_base(call.callee);
                let args: Vec<String> = call.args.iter().map(|arg| self.expr(*arg)).collect();
                format!("{}({})", callee, args.join(", "))
            }
            NodeKind::ArrayAccess => {
                let access = store.get_any::<ArrayAccess>(index);
                format!("{}[{}]", self.postfix_base(access.base), self.expr(access.index))
            }
            NodeKind::FieldAccess => {
                let access = store.get_any::<FieldAccess>(index);
                format!(
                    "{}.{}",
                    self.postfix_base(access.base),
                    store.get(access.field).name()
                )
            }
            NodeKind::ProcedureDecl => {
                let procedure = store.get_any::<ProcedureDecl>(index);
                format!(
                    "{} {}",
                    self.signature(procedure.signature),
                    self.block(procedure.body)
                )
            }
            NodeKind::Struct => self.structure(store.get_any::<Struct>(index)),
            NodeKind::Type => self.ty(AstIndex::new(index.slot())),
            NodeKind::Decl => self.decl_inline(AstIndex::new(index.slot())),
            NodeKind::Block => self.block(AstIndex::new(index.slot())),
            NodeKind::ProcedureSignature => self.signature(AstIndex::new(index.slot())),
            NodeKind::Return | NodeKind::If | NodeKind::While | NodeKind::For => {
                self.statement(index).trim().to_string()
            }
        }
    }

    fn postfix_base(&mut self, index: AnyIndex) -> String {
        match index.kind() {
            // `1.y` would lex as the float `1.` followed by `y`
            NodeKind::Literal
            | NodeKind::UnaryOp
            | NodeKind::ProcedureDecl
            | NodeKind::Struct => {
                format!("({})", self.expr(index))
            }
            _ => self.expr(index),
        }
    }

    fn signature(&mut self, index: AstIndex<ProcedureSignature>) -> String {
        let store = self.store;
        let signature = store.get(index);
        let mut params = Vec::with_capacity(signature.params.len());
        for param in &signature.params {
            params.push(format!("{} : {}", store.get(param.ident).name(), self.ty(param.ty)));
        }
        format!("({}) -> {}", params.join(", "), self.ty(signature.return_type))
    }

    fn structure(&mut self, structure: &Struct) -> String {
        let mut out = String::from("struct {\n");
        self.depth += 1;
        for member in &structure.members {
            out += &self.decl(*member);
        }
        self.depth -= 1;
        out += &self.indent();
        out += "}";
        out
    }

    pub fn block(&mut self, index: AstIndex<Block>) -> String {
        let store = self.store;
        let block = store.get(index);
        let mut out = String::from("{\n");
        self.depth += 1;
        for statement in &block.statements {
            out += &self.statement(*statement);
        }
        self.depth -= 1;
        out += &self.indent();
        out += "}";
        out
    }

    /// A statement on its own line(s), including the trailing newline.
    pub fn statement(&mut self, index: AnyIndex) -> String {
        let store = self.store;
        let indent = self.indent();
        match index.kind() {
            NodeKind::Decl => self.decl(AstIndex::new(index.slot())),
            NodeKind::Return => {
                let ret = store.get_any::<Return>(index);
                format!("{}return {};\n", indent, self.expr(ret.expr))
            }
            NodeKind::If => {
                let branch = store.get_any::<If>(index);
                let mut out = format!(
                    "{}if {} {}",
                    indent,
                    self.expr(branch.condition),
                    self.block(branch.block)
                );
                if let Some(else_block) = branch.else_block {
                    out += " else ";
                    out += &self.block(else_block);
                }
                out + "\n"
            }
            NodeKind::While => {
                let lp = store.get_any::<While>(index);
                format!(
                    "{}while {} {}\n",
                    indent,
                    self.expr(lp.condition),
                    self.block(lp.block)
                )
            }
            NodeKind::For => {
                let lp = store.get_any::<For>(index);
                let init = match lp.init.downcast::<Decl>() {
                    Some(decl) => self.decl_inline(decl),
                    None => format!("{};", self.expr(lp.init)),
                };
                format!(
                    "{}for {} {}; {} {}\n",
                    indent,
                    init,
                    self.expr(lp.condition),
                    self.expr(lp.step),
                    self.block(lp.block)
                )
            }
            _ => format!("{}{};\n", indent, self.expr(index)),
        }
    }
}
