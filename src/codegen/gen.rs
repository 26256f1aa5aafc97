use super::asm_macro::assemble;
use crate::ast::*;
use crate::codegen::asm_ast::*;

fn gen_unary(op: AstUnaryOp, operand: &AstExp, instructions: &mut AsmInstructions) {
    gen_exp(operand, instructions);
    match op {
        AstUnaryOp::Negate => {
            assemble!(instructions { Unary UnaryOp::Neg, %Ax; });
        }
        AstUnaryOp::BitwiseComplement => {
            assemble!(instructions { Unary UnaryOp::Not, %Ax; });
        }
        AstUnaryOp::LogicalNegate => {
            assemble!(instructions {
                Cmp #0, %Ax;
                Mov #0, %Ax;
                set E %Ax;
            });
        }
    }
}

/// Left goes through the stack into %ecx while right is computed in %eax.
/// Every combine sequence leaves `left op right` in %eax.
fn gen_binary(op: AstBinaryOp, left: &AstExp, right: &AstExp, instructions: &mut AsmInstructions) {
    gen_exp(left, instructions);
    assemble!(instructions { Push %Ax; });
    gen_exp(right, instructions);
    assemble!(instructions { Pop %Cx; });

    match op {
        AstBinaryOp::Add => {
            assemble!(instructions { Binary BinaryOp::Add, %Cx, %Ax; });
        }
        AstBinaryOp::Mul => {
            assemble!(instructions { Binary BinaryOp::Imul, %Cx, %Ax; });
        }
        AstBinaryOp::Sub => {
            assemble!(instructions {
                Binary BinaryOp::Sub, %Ax, %Cx;
                Mov %Cx, %Ax;
            });
        }
        AstBinaryOp::Div => {
            assemble!(instructions {
                Xchg %Cx, %Ax;
                Cdq;
                Idiv %Cx;
            });
        }
    }
}

pub(super) fn gen_exp(exp: &AstExp, instructions: &mut AsmInstructions) {
    match exp {
        AstExp::IntLiteral(text) => {
            assemble!(instructions { Mov #text, %Ax; });
        }
        AstExp::Identifier(name) => {
            let var = Operand::Data(name.clone());
            assemble!(instructions { Mov var, %Ax; });
        }
        AstExp::Unary(op, operand) => gen_unary(*op, operand, instructions),
        AstExp::Binary(op, left, right) => gen_binary(*op, left, right, instructions),
    }
}

pub(super) fn gen_statement(statement: &AstStatement, instructions: &mut AsmInstructions) {
    match statement {
        AstStatement::Return(exp) => {
            gen_exp(exp, instructions);
            assemble!(instructions { Ret; });
        }
    }
}

pub(super) fn gen_function(function: &AstFunction) -> AsmFunction {
    let AstFunction { name, body } = function;
    let mut instructions = AsmInstructions::new();
    gen_statement(body, &mut instructions);

    AsmFunction {
        name: name.clone(),
        body: instructions,
        global: true,
    }
}
