use crate::{
    ast::{
        ast::AstIndex,
        nodes::{Decl, Ident, ProcedureDecl, ProcedureSignature, Struct, TypeAndName},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expression, lookups::LOWEST_PRIORITY, parser::Parser, stmt::parse_block,
    types::parse_type,
};

/// Parses any of the five declaration forms:
///
/// ```text
/// name : type;
/// name : type = expr;
/// name := expr;
/// name : type : expr;
/// name :: expr;
/// ```
///
/// The `;` after a procedure or struct initializer is optional.
pub fn parse_decl(parser: &mut Parser) -> Result<AstIndex<Decl>, Error> {
    let mut p = parser.backtrack();

    let ident = p.expect(TokenKind::Identifier)?;
    p.expect(TokenKind::Colon)?;

    let mut ty = None;
    if !p
        .current_token()
        .is_one_of_many(&[TokenKind::Colon, TokenKind::Assignment])
    {
        ty = Some(parse_type(&mut p)?);
    }

    let is_const = match p.current_token_kind() {
        TokenKind::Colon => true,
        TokenKind::Assignment => false,
        TokenKind::Semicolon if ty.is_some() => {
            p.eat_token()?;
            let index = p.push(Decl {
                ident,
                ty,
                expr: None,
                is_const: false,
            });
            p.commit();
            return Ok(index);
        }
        _ => return Err(p.unexpected("`:`, `=` or `;`")),
    };
    p.eat_token()?;

    if p.current_token_kind() == TokenKind::Semicolon {
        return Err(Error::new(
            ErrorImpl::MissingInitializer {
                name: ident.value.clone(),
            },
            p.get_position(),
        ));
    }

    let expr = parse_expression(&mut p, LOWEST_PRIORITY)?;
    if expr.kind().is_block_bodied() {
        p.eat_possible_token(TokenKind::Semicolon);
    } else {
        p.expect(TokenKind::Semicolon)?;
    }

    let index = p.push(Decl {
        ident,
        ty,
        expr: Some(expr),
        is_const,
    });
    p.commit();
    Ok(index)
}

/// `name : type`
pub fn parse_type_and_name(parser: &mut Parser) -> Result<TypeAndName, Error> {
    let mut p = parser.backtrack();

    let token = p.expect(TokenKind::Identifier)?;
    p.expect(TokenKind::Colon)?;
    let ty = parse_type(&mut p)?;

    let ident = p.push(Ident { token });
    p.commit();
    Ok(TypeAndName { ident, ty })
}

/// `(name : type, ...) -> type`
pub fn parse_procedure_signature(
    parser: &mut Parser,
) -> Result<AstIndex<ProcedureSignature>, Error> {
    let mut p = parser.backtrack();

    p.expect(TokenKind::OpenParen)?;

    let mut params = vec![];
    if !p.eat_possible_token(TokenKind::CloseParen) {
        loop {
            params.push(parse_type_and_name(&mut p)?);

            if p.eat_possible_token(TokenKind::Comma) {
                continue;
            }

            let error = p.unexpected("`,` or `)`");
            p.expect_error(TokenKind::CloseParen, Some(error))?;
            break;
        }
    }

    p.expect(TokenKind::Arrow)?;
    let return_type = parse_type(&mut p)?;

    let index = p.push(ProcedureSignature {
        params,
        return_type,
    });
    p.commit();
    Ok(index)
}

/// A procedure literal: signature followed by its body.
pub fn parse_procedure_decl(parser: &mut Parser) -> Result<AstIndex<ProcedureDecl>, Error> {
    let mut p = parser.backtrack();

    let signature = parse_procedure_signature(&mut p)?;
    let body = parse_block(&mut p)?;

    let index = p.push(ProcedureDecl { signature, body });
    p.commit();
    Ok(index)
}

/// `struct { member-decl* }`
pub fn parse_struct(parser: &mut Parser) -> Result<AstIndex<Struct>, Error> {
    let mut p = parser.backtrack();

    p.expect(TokenKind::Struct)?;
    p.expect(TokenKind::OpenCurly)?;

    let mut members = vec![];
    while !p.eat_possible_token(TokenKind::CloseCurly) {
        members.push(parse_decl(&mut p)?);
    }

    let index = p.push(Struct { members });
    p.commit();
    Ok(index)
}
