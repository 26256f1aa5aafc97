//! Code emission using [Display]
//!
//! Implements [Display] for [`AsmProgram`](crate::codegen::AsmProgram), so the
//! generated program can be written with `to_string` or used in any
//! formatting context.
//!
//! [Display]: https://doc.rust-lang.org/std/fmt/trait.Display.html

#[cfg(test)]
mod emission_tests;

use crate::ast::Ast;
use crate::codegen::*;

use std::fmt;

/// Generates assembly text for `ast`.
///
/// Pure: the same tree always yields byte-identical text.
pub fn generate(ast: &Ast) -> String {
    codegen(ast).to_string()
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Neg => write!(f, "neg"),
            Self::Not => write!(f, "not"),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Sub => write!(f, "sub"),
            Self::Imul => write!(f, "imul"),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::E => write!(f, "e"),
        }
    }
}

fn symbol_name(name: &str) -> String {
    if cfg!(target_os = "macos") {
        format!("_{name}")
    } else {
        name.to_owned()
    }
}

fn display_longword_reg(r: Register) -> &'static str {
    match r {
        Register::Ax => "%eax",
        Register::Cx => "%ecx",
    }
}

fn display_quadword_reg(r: Register) -> &'static str {
    match r {
        Register::Ax => "%rax",
        Register::Cx => "%rcx",
    }
}

fn display_byte_reg(r: Register) -> &'static str {
    match r {
        Register::Ax => "%al",
        Register::Cx => "%cl",
    }
}

fn display_operand(op: &Operand) -> String {
    match op {
        Operand::Imm(text) => format!("${text}"),
        Operand::Reg(r) => display_longword_reg(*r).to_owned(),
        Operand::Data(name) => format!("{}(%rip)", symbol_name(name)),
    }
}

/// Push and pop always move the full 64-bit register.
fn display_stack_operand(op: &Operand) -> String {
    match op {
        Operand::Reg(r) => display_quadword_reg(*r).to_owned(),
        _ => display_operand(op),
    }
}

impl fmt::Display for AsmInstruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Mov(src, dst) => {
                let src_str = display_operand(src);
                let dst_str = display_operand(dst);
                write!(f, "movl {src_str}, {dst_str}")
            }
            Self::Push(op) => write!(f, "pushq {}", display_stack_operand(op)),
            Self::Pop(op) => write!(f, "popq {}", display_stack_operand(op)),
            Self::Unary(op, operand) => write!(f, "{op}l {}", display_operand(operand)),
            Self::Binary(op, src, dst) => {
                let src_str = display_operand(src);
                let dst_str = display_operand(dst);
                write!(f, "{op}l {src_str}, {dst_str}")
            }
            Self::Cmp(src, dst) => {
                let src_str = display_operand(src);
                let dst_str = display_operand(dst);
                write!(f, "cmpl {src_str}, {dst_str}")
            }
            Self::SetCC(cond_code, Operand::Reg(reg)) => {
                write!(f, "set{cond_code} {}", display_byte_reg(*reg))
            }
            Self::SetCC(cond_code, operand) => {
                write!(f, "set{cond_code} {}", display_operand(operand))
            }
            Self::Xchg(o1, o2) => {
                let o1_str = display_operand(o1);
                let o2_str = display_operand(o2);
                write!(f, "xchgl {o1_str}, {o2_str}")
            }
            Self::Cdq => write!(f, "cdq"),
            Self::Idiv(op) => write!(f, "idivl {}", display_operand(op)),
            Self::Ret => write!(f, "ret"),
        }
    }
}

impl fmt::Display for AsmFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = symbol_name(&self.name);
        if self.global {
            writeln!(f, "\t.globl {name}")?;
        }
        writeln!(f, "\t.text")?;
        writeln!(f, "{name}:")?;
        for instruction in &self.body {
            writeln!(f, "\t{instruction}")?;
        }

        Ok(())
    }
}

impl fmt::Display for AsmProgram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.function)?;
        if cfg!(target_os = "linux") {
            writeln!(f, "\t.section .note.GNU-stack,\"\",@progbits")?;
        }
        Ok(())
    }
}
