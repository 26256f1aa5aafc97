//! Recursive-descent parser.
//!
//! Precedence lives in the call structure: [`parse_exp`] handles `+`/`-`,
//! [`parse_term`] handles `*`/`/`, and [`parse_factor`] binds tightest.

mod cursor;
mod parse_error;

use crate::ast::*;
use crate::lexer::{Token, TokenKind};
use cursor::Cursor;
pub use parse_error::{Expected, ParseError, Result};

use tracing::debug;

impl TryFrom<&Token> for AstUnaryOp {
    type Error = Expected;
    fn try_from(token: &Token) -> std::result::Result<Self, Expected> {
        match token.kind {
            TokenKind::Negation => Ok(Self::Negate),
            TokenKind::BitwiseComplement => Ok(Self::BitwiseComplement),
            // `-` and `!` share a kind; only the text tells them apart
            TokenKind::LogicalNegation if token.text == "-" => Ok(Self::Negate),
            TokenKind::LogicalNegation => Ok(Self::LogicalNegate),
            _ => Err(Expected::Expression),
        }
    }
}

fn additive_op(kind: TokenKind) -> Option<AstBinaryOp> {
    match kind {
        TokenKind::Plus => Some(AstBinaryOp::Add),
        TokenKind::Minus => Some(AstBinaryOp::Sub),
        _ => None,
    }
}

fn multiplicative_op(kind: TokenKind) -> Option<AstBinaryOp> {
    match kind {
        TokenKind::Star => Some(AstBinaryOp::Mul),
        TokenKind::Slash => Some(AstBinaryOp::Div),
        _ => None,
    }
}

fn parse_identifier(cursor: &mut Cursor) -> Result<Identifier> {
    let token = cursor.expect(TokenKind::Identifier)?;
    Ok(token.text.clone())
}

fn parse_unary_operation(cursor: &mut Cursor, token: &Token) -> Result<AstExp> {
    let op = AstUnaryOp::try_from(token).map_err(|expected| cursor.error(expected))?;
    cursor.bump();
    let operand = parse_factor(cursor)?;
    Ok(AstExp::unary(op, operand))
}

fn parse_factor_subexp(cursor: &mut Cursor) -> Result<AstExp> {
    cursor.expect(TokenKind::OpenParen)?;
    let inner = parse_exp(cursor)?;
    cursor.expect(TokenKind::CloseParen)?;
    Ok(inner)
}

fn parse_factor(cursor: &mut Cursor) -> Result<AstExp> {
    let Some(token) = cursor.peek() else {
        return Err(cursor.error(Expected::Expression));
    };

    match token.kind {
        TokenKind::Negation | TokenKind::BitwiseComplement | TokenKind::LogicalNegation => {
            parse_unary_operation(cursor, token)
        }
        TokenKind::IntLiteral => {
            cursor.bump();
            Ok(AstExp::IntLiteral(token.text.clone()))
        }
        TokenKind::Identifier => {
            cursor.bump();
            Ok(AstExp::Identifier(token.text.clone()))
        }
        TokenKind::OpenParen => parse_factor_subexp(cursor),
        _ => Err(cursor.error(Expected::Expression)),
    }
}

/// Folds `operand (op operand)*` into a left-leaning tree.
fn parse_left_assoc(
    cursor: &mut Cursor,
    operator: fn(TokenKind) -> Option<AstBinaryOp>,
    operand: fn(&mut Cursor) -> Result<AstExp>,
) -> Result<AstExp> {
    let mut left = operand(cursor)?;

    while let Some(op) = cursor.peek().and_then(|t| operator(t.kind)) {
        cursor.bump();
        let right = operand(cursor)?;
        left = AstExp::binary(op, left, right);
    }

    Ok(left)
}

fn parse_term(cursor: &mut Cursor) -> Result<AstExp> {
    parse_left_assoc(cursor, multiplicative_op, parse_factor)
}

fn parse_exp(cursor: &mut Cursor) -> Result<AstExp> {
    parse_left_assoc(cursor, additive_op, parse_term)
}

fn parse_return(cursor: &mut Cursor) -> Result<AstStatement> {
    cursor.expect(TokenKind::Return)?;
    let exp = parse_exp(cursor)?;
    cursor.expect(TokenKind::Semicolon)?;
    Ok(AstStatement::Return(exp))
}

fn parse_statement(cursor: &mut Cursor) -> Result<AstStatement> {
    parse_return(cursor)
}

fn parse_function(cursor: &mut Cursor) -> Result<AstFunction> {
    cursor.expect(TokenKind::Int)?;
    let name = parse_identifier(cursor)?;
    cursor.expect(TokenKind::OpenParen)?;
    cursor.expect(TokenKind::CloseParen)?;
    cursor.expect(TokenKind::OpenBrace)?;
    let body = parse_statement(cursor)?;
    cursor.expect(TokenKind::CloseBrace)?;
    Ok(AstFunction { name, body })
}

/// Builds the AST for a whole program.
///
/// Stops at the first token that does not fit the grammar; trailing tokens
/// after the function body are rejected too.
pub fn parse(tokens: &[Token]) -> Result<Ast> {
    let mut cursor = Cursor::new(tokens);
    let function = parse_function(&mut cursor)?;

    if !cursor.at_end() {
        return Err(cursor.error(Expected::EndOfInput));
    }

    debug!(function = %function.name, "parsing finished");
    Ok(Ast::new(function))
}
