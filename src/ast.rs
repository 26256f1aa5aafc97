pub type Identifier = String;

/// Root of the tree: a program is exactly one function.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ast {
    pub function: AstFunction,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AstFunction {
    pub name: Identifier,
    pub body: AstStatement,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AstStatement {
    Return(AstExp),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AstExp {
    /// Literal digits, forwarded verbatim as the immediate operand.
    IntLiteral(String),
    Identifier(Identifier),
    Unary(AstUnaryOp, Box<AstExp>),
    Binary(AstBinaryOp, Box<AstExp>, Box<AstExp>),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AstUnaryOp {
    Negate,
    BitwiseComplement,
    LogicalNegate,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AstBinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl Ast {
    pub fn new(function: AstFunction) -> Self {
        Self { function }
    }
}

impl AstExp {
    pub fn int(text: impl Into<String>) -> Self {
        Self::IntLiteral(text.into())
    }

    pub fn unary(op: AstUnaryOp, operand: AstExp) -> Self {
        Self::Unary(op, Box::new(operand))
    }

    pub fn binary(op: AstBinaryOp, left: AstExp, right: AstExp) -> Self {
        Self::Binary(op, Box::new(left), Box::new(right))
    }
}
