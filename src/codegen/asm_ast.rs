use crate::ast::Identifier;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AsmProgram {
    pub function: AsmFunction,
}

pub type AsmInstructions = Vec<AsmInstruction>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AsmFunction {
    pub name: Identifier,
    pub body: AsmInstructions,
    pub global: bool,
}

/// One target instruction; operands are in AT&T order (source first).
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AsmInstruction {
    Mov(Operand, Operand),
    Push(Operand),
    Pop(Operand),
    Unary(UnaryOp, Operand),
    Binary(BinaryOp, Operand, Operand),
    Cmp(Operand, Operand),
    SetCC(Condition, Operand),
    Xchg(Operand, Operand),
    Cdq,
    Idiv(Operand),
    Ret,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Condition {
    E,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BinaryOp {
    Add,
    Sub,
    Imul,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Operand {
    /// Immediate, kept as the literal's source text.
    Imm(String),
    Reg(Register),
    /// Named memory location.
    Data(Identifier),
}

/// The two fixed registers: accumulator and auxiliary.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Register {
    Ax,
    Cx,
}

impl AsmInstruction {
    pub fn is_stack_op(&self) -> bool {
        matches!(self, Self::Push(_) | Self::Pop(_))
    }
}
