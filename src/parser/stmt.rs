use crate::{
    ast::{
        ast::{AnyIndex, AstIndex},
        nodes::{Block, For, If, Return, While},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{decl::parse_decl, expr::parse_expression, lookups::LOWEST_PRIORITY, parser::Parser};

/// `{ statement* }`
pub fn parse_block(parser: &mut Parser) -> Result<AstIndex<Block>, Error> {
    parser.nested(parse_block_body)
}

fn parse_block_body(parser: &mut Parser) -> Result<AstIndex<Block>, Error> {
    let mut p = parser.backtrack();

    p.expect(TokenKind::OpenCurly)?;

    let mut statements = vec![];
    while !p.eat_possible_token(TokenKind::CloseCurly) {
        if !p.has_tokens() {
            return Err(p.unexpected("`}`"));
        }
        statements.push(parse_stmt(&mut p)?);
    }

    let index = p.push(Block { statements });
    p.commit();
    Ok(index)
}

pub fn parse_stmt(parser: &mut Parser) -> Result<AnyIndex, Error> {
    match parser.current_token_kind() {
        TokenKind::Return => Ok(parse_return_stmt(parser)?.into()),
        TokenKind::If => Ok(parse_if_stmt(parser)?.into()),
        TokenKind::While => Ok(parse_while_stmt(parser)?.into()),
        TokenKind::For => Ok(parse_for_stmt(parser)?.into()),
        _ => parse_simple_stmt(parser),
    }
}

/// A local declaration or an expression followed by `;`.
fn parse_simple_stmt(parser: &mut Parser) -> Result<AnyIndex, Error> {
    if parser.current_token_kind() == TokenKind::Identifier
        && parser.peek_token(1).kind == TokenKind::Colon
    {
        return Ok(parse_decl(parser)?.into());
    }

    let mut p = parser.backtrack();

    let expr = parse_expression(&mut p, LOWEST_PRIORITY)?;
    p.expect(TokenKind::Semicolon)?;

    p.commit();
    Ok(expr)
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<AstIndex<Return>, Error> {
    let mut p = parser.backtrack();

    p.expect(TokenKind::Return)?;
    let expr = parse_expression(&mut p, LOWEST_PRIORITY)?;
    p.expect(TokenKind::Semicolon)?;

    let index = p.push(Return { expr });
    p.commit();
    Ok(index)
}

/// `if expr block [else block]`
pub fn parse_if_stmt(parser: &mut Parser) -> Result<AstIndex<If>, Error> {
    let mut p = parser.backtrack();

    p.expect(TokenKind::If)?;
    let condition = parse_expression(&mut p, LOWEST_PRIORITY)?;
    let block = parse_block(&mut p)?;

    let else_block = if p.eat_possible_token(TokenKind::Else) {
        Some(parse_block(&mut p)?)
    } else {
        None
    };

    let index = p.push(If {
        condition,
        block,
        else_block,
    });
    p.commit();
    Ok(index)
}

/// `while expr block`
pub fn parse_while_stmt(parser: &mut Parser) -> Result<AstIndex<While>, Error> {
    let mut p = parser.backtrack();

    p.expect(TokenKind::While)?;
    let condition = parse_expression(&mut p, LOWEST_PRIORITY)?;
    let block = parse_block(&mut p)?;

    let index = p.push(While { condition, block });
    p.commit();
    Ok(index)
}

/// `for init-stmt expr ; expr block`, where the init statement is a local
/// declaration or an expression, each with its own `;`.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<AstIndex<For>, Error> {
    let mut p = parser.backtrack();

    p.expect(TokenKind::For)?;
    let init = parse_simple_stmt(&mut p)?;
    let condition = parse_expression(&mut p, LOWEST_PRIORITY)?;
    p.expect(TokenKind::Semicolon)?;
    let step = parse_expression(&mut p, LOWEST_PRIORITY)?;
    let block = parse_block(&mut p)?;

    let index = p.push(For {
        init,
        condition,
        step,
        block,
    });
    p.commit();
    Ok(index)
}
