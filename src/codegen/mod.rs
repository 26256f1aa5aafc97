//! Post-order walk from [`Ast`] to an accumulator/stack instruction list.
//!
//! `%eax` holds the current value, `%ecx` receives a binary operator's left
//! operand back from the stack. Sequences are fixed per operator.

pub mod asm_ast;
mod asm_macro;
mod gen;

use crate::ast::Ast;

pub use asm_ast::*;

use gen::gen_function;
use tracing::debug;

pub fn codegen(ast: &Ast) -> AsmProgram {
    let function = gen_function(&ast.function);

    let stack_ops = function.body.iter().filter(|i| i.is_stack_op()).count();
    debug!(
        function = %function.name,
        instructions = function.body.len(),
        stack_ops,
        "code generation finished"
    );

    AsmProgram { function }
}
