//! Utility macros for the front-end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `AST_NODES!` - Wires node structs to their pools in the Store
//!
//! These macros reduce boilerplate in the lexer and the AST store.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's source text
/// * `$span` - The source span
/// * `$literal` - The LiteralKind (defaults to `LiteralKind::None`)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Literal, "42".to_string(), span, LiteralKind::Integer);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr, $literal:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
            literal: $literal,
        }
    };
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::MK_TOKEN!($kind, $value, $span, $crate::lexer::tokens::LiteralKind::None)
    };
}

/// Declares the `Store` with one pool per node kind and implements
/// `AstNode` for every listed node struct.
///
/// Each node struct name must match its `NodeKind` variant.
///
/// # Example
///
/// ```ignore
/// AST_NODES! {
///     Ident => idents,
///     Literal => literals,
/// }
/// ```
#[macro_export]
macro_rules! AST_NODES {
    ($($node:ident => $pool:ident),* $(,)?) => {
        $(
            impl $crate::ast::ast::AstNode for $node {
                const KIND: $crate::ast::ast::NodeKind = $crate::ast::ast::NodeKind::$node;

                fn pool(store: &Store) -> &Pool<Self> {
                    &store.$pool
                }

                fn pool_mut(store: &mut Store) -> &mut Pool<Self> {
                    &mut store.$pool
                }
            }
        )*

        /// Append-only node pools for a single compilation unit.
        ///
        /// Every node produced by one parse lives here; indices handed out by
        /// a Store are only meaningful for that Store.
        #[derive(Debug, Default)]
        pub struct Store {
            $( $pool: Pool<$node>, )*
        }

        impl Store {
            /// Number of nodes currently allocated for `kind`.
            pub fn len_of(&self, kind: $crate::ast::ast::NodeKind) -> usize {
                match kind {
                    $( $crate::ast::ast::NodeKind::$node => self.$pool.len(), )*
                }
            }
        }
    };
}
