use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

/// Operator priorities. Higher binds tighter.
pub const ASSIGNMENT_PRIORITY: i32 = 10;
pub const COMPARISON_PRIORITY: i32 = 30;
pub const ADDITIVE_PRIORITY: i32 = 50;
pub const MULTIPLICATIVE_PRIORITY: i32 = 100;

/// Minimum priority that accepts every binary operator.
pub const LOWEST_PRIORITY: i32 = 0;

lazy_static! {
    pub static ref BINARY_PRIORITY_LOOKUP: HashMap<TokenKind, i32> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Assignment, ASSIGNMENT_PRIORITY);
        map.insert(TokenKind::PlusEquals, ASSIGNMENT_PRIORITY);
        map.insert(TokenKind::MinusEquals, ASSIGNMENT_PRIORITY);
        map.insert(TokenKind::StarEquals, ASSIGNMENT_PRIORITY);
        map.insert(TokenKind::SlashEquals, ASSIGNMENT_PRIORITY);

        map.insert(TokenKind::Equals, COMPARISON_PRIORITY);

        map.insert(TokenKind::Plus, ADDITIVE_PRIORITY);
        map.insert(TokenKind::Dash, ADDITIVE_PRIORITY);

        map.insert(TokenKind::Star, MULTIPLICATIVE_PRIORITY);
        map.insert(TokenKind::Slash, MULTIPLICATIVE_PRIORITY);
        map
    };
    pub static ref UNARY_OPERATOR_LOOKUP: HashSet<TokenKind> = {
        let mut set = HashSet::new();
        set.insert(TokenKind::Not);
        set.insert(TokenKind::Plus);
        set.insert(TokenKind::Dash);
        set.insert(TokenKind::Tilde);
        set.insert(TokenKind::Star);
        set.insert(TokenKind::Ampersand);
        set
    };
}

pub fn binary_priority(kind: TokenKind) -> Option<i32> {
    BINARY_PRIORITY_LOOKUP.get(&kind).copied()
}

/// Assignment-family operators group to the right: `a = b = c` is
/// `a = (b = c)`.
pub fn is_right_associative(kind: TokenKind) -> bool {
    binary_priority(kind) == Some(ASSIGNMENT_PRIORITY)
}

pub fn is_unary_operator(kind: TokenKind) -> bool {
    UNARY_OPERATOR_LOOKUP.contains(&kind)
}
