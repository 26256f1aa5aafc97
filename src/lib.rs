#![deny(unused_must_use)]
#![warn(clippy::pedantic)]
#![allow(clippy::wildcard_imports)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod ast;
#[cfg(feature = "codegen")]
pub mod codegen;
#[cfg(feature = "emission")]
pub mod emission;
#[cfg(feature = "lexer")]
pub mod error;
#[cfg(feature = "lexer")]
pub mod lexer;
#[cfg(feature = "parser")]
pub mod parser;

#[cfg(feature = "lexer")]
pub use error::{CompileError, CompileResult};

/// Runs the whole pipeline: source text in, assembly text out.
///
/// Stops at the first lexical or syntactic error.
#[cfg(feature = "emission")]
pub fn compile(source: &str) -> CompileResult<String> {
    let tokens = lexer::lex(source)?;
    let ast = parser::parse(&tokens)?;
    drop(tokens);
    Ok(emission::generate(&ast))
}
