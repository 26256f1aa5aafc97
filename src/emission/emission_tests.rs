use super::*;
use crate::ast::*;

fn body_lines(asm: &str) -> Vec<&str> {
    asm.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('.') && !line.ends_with(':'))
        .collect()
}

fn return_of(exp: AstExp) -> Ast {
    Ast::new(AstFunction {
        name: String::from("main"),
        body: AstStatement::Return(exp),
    })
}

#[test]
fn test_instruction_syntax() {
    let eax = Operand::Reg(Register::Ax);
    let ecx = Operand::Reg(Register::Cx);
    let cases = [
        (AsmInstruction::Mov(Operand::Imm(String::from("42")), eax.clone()), "movl $42, %eax"),
        (AsmInstruction::Push(eax.clone()), "pushq %rax"),
        (AsmInstruction::Pop(ecx.clone()), "popq %rcx"),
        (AsmInstruction::Unary(UnaryOp::Neg, eax.clone()), "negl %eax"),
        (AsmInstruction::Unary(UnaryOp::Not, eax.clone()), "notl %eax"),
        (AsmInstruction::Binary(BinaryOp::Add, ecx.clone(), eax.clone()), "addl %ecx, %eax"),
        (AsmInstruction::Binary(BinaryOp::Sub, eax.clone(), ecx.clone()), "subl %eax, %ecx"),
        (AsmInstruction::Binary(BinaryOp::Imul, ecx.clone(), eax.clone()), "imull %ecx, %eax"),
        (AsmInstruction::Cmp(Operand::Imm(String::from("0")), eax.clone()), "cmpl $0, %eax"),
        (AsmInstruction::SetCC(Condition::E, eax.clone()), "sete %al"),
        (AsmInstruction::Xchg(ecx.clone(), eax), "xchgl %ecx, %eax"),
        (AsmInstruction::Cdq, "cdq"),
        (AsmInstruction::Idiv(ecx), "idivl %ecx"),
        (AsmInstruction::Ret, "ret"),
    ];
    for (instruction, expected) in cases {
        assert_eq!(expected, instruction.to_string());
    }
}

#[test]
fn test_function_prelude() {
    let asm = generate(&return_of(AstExp::int("2")));
    let sym = symbol_name("main");
    let mut lines = asm.lines();
    assert_eq!(Some(format!("\t.globl {sym}").as_str()), lines.next());
    assert_eq!(Some("\t.text"), lines.next());
    assert_eq!(Some(format!("{sym}:").as_str()), lines.next());
    assert_eq!(Some("\tmovl $2, %eax"), lines.next());
    assert_eq!(Some("\tret"), lines.next());
}

#[test]
fn test_logical_not_text() {
    let exp = AstExp::unary(AstUnaryOp::LogicalNegate, AstExp::int("0"));
    let asm = generate(&return_of(exp));
    let expected = vec![
        "movl $0, %eax",
        "cmpl $0, %eax",
        "movl $0, %eax",
        "sete %al",
        "ret",
    ];
    assert_eq!(expected, body_lines(&asm));
}

#[test]
fn test_division_text() {
    let exp = AstExp::binary(AstBinaryOp::Div, AstExp::int("10"), AstExp::int("3"));
    let asm = generate(&return_of(exp));
    let expected = vec![
        "movl $10, %eax",
        "pushq %rax",
        "movl $3, %eax",
        "popq %rcx",
        "xchgl %ecx, %eax",
        "cdq",
        "idivl %ecx",
        "ret",
    ];
    assert_eq!(expected, body_lines(&asm));
}

#[test]
fn test_identifier_operand() {
    let asm = generate(&return_of(AstExp::Identifier(String::from("x"))));
    let expected = format!("movl {}(%rip), %eax", symbol_name("x"));
    assert_eq!(vec![expected.as_str(), "ret"], body_lines(&asm));
}

#[test]
fn test_generate_is_idempotent() {
    let ast = return_of(AstExp::binary(
        AstBinaryOp::Mul,
        AstExp::unary(AstUnaryOp::BitwiseComplement, AstExp::int("1")),
        AstExp::int("3"),
    ));
    assert_eq!(generate(&ast), generate(&ast));
}
