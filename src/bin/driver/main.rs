mod args;
mod driver_error;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use donkey::*;
use driver_error::DriverError;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use std::fs;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_source(args: &Args) -> Result<String> {
    if !args.input.exists() {
        return Err(DriverError::InputFileDoesNotExist(args.input.clone()).into());
    }
    fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))
}

fn tokenize(source: &str, args: &Args) -> Result<lexer::Tokens> {
    let tokens = lexer::lex(source).map_err(CompileError::from)?;
    if args.lex {
        for token in &tokens {
            println!("{:?}\t{}", token.kind, token.text);
        }
    }
    Ok(tokens)
}

fn parse(tokens: &[lexer::Token], args: &Args) -> Result<ast::Ast> {
    let ast = parser::parse(tokens).map_err(CompileError::from)?;
    if args.parse {
        println!("{ast:#?}");
    }
    Ok(ast)
}

fn gen_asm(ast: &ast::Ast, args: &Args) -> codegen::AsmProgram {
    let asm = codegen::codegen(ast);
    if args.codegen {
        for instruction in &asm.function.body {
            println!("{instruction:?}");
        }
    }
    asm
}

fn emit_asm(asm: &codegen::AsmProgram, args: &Args) -> Result<()> {
    let text = asm.to_string();
    if args.stdout {
        print!("{text}");
        return Ok(());
    }

    let asm_file = args.output_path();
    fs::write(&asm_file, text).with_context(|| format!("failed to write {}", asm_file.display()))?;
    info!(path = %asm_file.display(), "assembly written");
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    debug!(?args, "starting");

    let source = read_source(&args)?;
    let tokens = tokenize(&source, &args)?;
    if args.lex {
        return Ok(());
    }

    let ast = parse(&tokens, &args)?;
    drop(tokens);
    if args.parse {
        return Ok(());
    }

    let asm = gen_asm(&ast, &args);
    if args.stops_early() {
        return Ok(());
    }

    emit_asm(&asm, &args)
}
