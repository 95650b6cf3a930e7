use tracing::debug;

use crate::{
    ast::{
        ast::AnyIndex,
        nodes::{ArrayAccess, BinaryOp, FieldAccess, Ident, Literal, ProcedureCall, UnaryOp},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    decl::{parse_procedure_decl, parse_struct},
    lookups::{binary_priority, is_right_associative, is_unary_operator, LOWEST_PRIORITY},
    parser::Parser,
};

/// Precedence climbing over binary operators whose priority is at least
/// `min_priority`.
pub fn parse_expression(parser: &mut Parser, min_priority: i32) -> Result<AnyIndex, Error> {
    parser.nested(|parser| parse_binary_expression(parser, min_priority))
}

fn parse_binary_expression(parser: &mut Parser, min_priority: i32) -> Result<AnyIndex, Error> {
    let mut p = parser.backtrack();

    let mut left = parse_simple_expression(&mut p)?;

    while let Some(priority) = binary_priority(p.current_token_kind()) {
        if priority < min_priority {
            break;
        }

        let operator = p.eat_token()?.kind;
        let next_min = if is_right_associative(operator) {
            priority
        } else {
            priority + 1
        };
        let right = parse_expression(&mut p, next_min)?;

        left = p
            .push(BinaryOp {
                operator,
                left,
                right,
            })
            .into();
    }

    p.commit();
    Ok(left)
}

/// An atom, optionally behind unary operators, followed by any number of
/// calls, index operations and field accesses.
pub fn parse_simple_expression(parser: &mut Parser) -> Result<AnyIndex, Error> {
    let mut p = parser.backtrack();

    if is_unary_operator(p.current_token_kind()) {
        let operator = p.eat_token()?.kind;
        let operand = p.nested(parse_simple_expression)?;

        let index = p.push(UnaryOp { operator, operand });
        p.commit();
        return Ok(index.into());
    }

    let atom = parse_atom(&mut p)?;
    let expr = parse_postfix(&mut p, atom)?;

    p.commit();
    Ok(expr)
}

fn parse_atom(parser: &mut Parser) -> Result<AnyIndex, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => {
            let token = parser.eat_token()?;
            Ok(parser.push(Ident { token }).into())
        }
        TokenKind::Literal => {
            let token = parser.eat_token()?;
            let kind = token.literal;
            Ok(parser.push(Literal { token, kind }).into())
        }
        TokenKind::Struct => Ok(parse_struct(parser)?.into()),
        TokenKind::OpenParen => match parse_paren_expression(parser) {
            Ok(expr) => Ok(expr),
            Err(paren_error) => {
                debug!(
                    line = parser.current_token().line(),
                    column = parser.current_token().column(),
                    "not a parenthesised expression, trying a procedure literal"
                );
                match parse_procedure_decl(parser) {
                    Ok(procedure) => Ok(procedure.into()),
                    Err(procedure_error) => Err(paren_error.furthest(procedure_error)),
                }
            }
        },
        _ => Err(parser.unexpected("expression")),
    }
}

/// `( expr )`. The parentheses produce no node.
pub fn parse_paren_expression(parser: &mut Parser) -> Result<AnyIndex, Error> {
    let mut p = parser.backtrack();

    p.expect(TokenKind::OpenParen)?;
    let expr = parse_expression(&mut p, LOWEST_PRIORITY)?;
    p.expect(TokenKind::CloseParen)?;

    p.commit();
    Ok(expr)
}

fn parse_postfix(parser: &mut Parser, mut expr: AnyIndex) -> Result<AnyIndex, Error> {
    loop {
        expr = match parser.current_token_kind() {
            TokenKind::OpenParen => parse_call(parser, expr)?,
            TokenKind::OpenBracket => {
                parser.eat_token()?;
                let index = parse_expression(parser, LOWEST_PRIORITY)?;
                parser.expect(TokenKind::CloseBracket)?;

                parser.push(ArrayAccess { base: expr, index }).into()
            }
            TokenKind::Dot => {
                parser.eat_token()?;
                let token = parser.expect(TokenKind::Identifier)?;
                let field = parser.push(Ident { token });

                parser.push(FieldAccess { base: expr, field }).into()
            }
            _ => return Ok(expr),
        };
    }
}

fn parse_call(parser: &mut Parser, callee: AnyIndex) -> Result<AnyIndex, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut args = vec![];
    if !parser.eat_possible_token(TokenKind::CloseParen) {
        loop {
            args.push(parse_expression(parser, LOWEST_PRIORITY)?);

            if parser.eat_possible_token(TokenKind::Comma) {
                continue;
            }

            let error = parser.unexpected("`,` or `)`");
            parser.expect_error(TokenKind::CloseParen, Some(error))?;
            break;
        }
    }

    Ok(parser.push(ProcedureCall { callee, args }).into())
}
