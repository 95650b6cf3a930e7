use crate::{
    ast::{
        ast::AstIndex,
        nodes::{ArraySize, Ident, Type, TypeShape},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expression, lookups::LOWEST_PRIORITY, parser::Parser};

/// Parses `name`, `*T`, `[?] T` or `[expr] T`.
pub fn parse_type(parser: &mut Parser) -> Result<AstIndex<Type>, Error> {
    let mut p = parser.backtrack();

    let shape = match p.current_token_kind() {
        TokenKind::Identifier => {
            let token = p.eat_token()?;
            TypeShape::Named(p.push(Ident { token }))
        }
        TokenKind::Star => {
            p.eat_token()?;
            TypeShape::Pointer(p.nested(parse_type)?)
        }
        TokenKind::OpenBracket => {
            p.eat_token()?;
            let size = if p.eat_possible_token(TokenKind::Question) {
                ArraySize::Dynamic
            } else {
                ArraySize::Fixed(parse_expression(&mut p, LOWEST_PRIORITY)?)
            };
            p.expect(TokenKind::CloseBracket)?;

            TypeShape::Array {
                size,
                element: p.nested(parse_type)?,
            }
        }
        _ => return Err(p.unexpected("type")),
    };

    let index = p.push(Type { shape });
    p.commit();
    Ok(index)
}
