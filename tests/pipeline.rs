use donkey::ast::*;
use donkey::lexer::{self, TokenKind};
use donkey::parser::{self, Expected};
use donkey::{compile, emission, CompileError};

fn instructions(asm: &str) -> Vec<&str> {
    asm.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('.') && !line.ends_with(':'))
        .collect()
}

fn parse_src(src: &str) -> Ast {
    let tokens = lexer::lex(src).expect("lexing failed");
    parser::parse(&tokens).expect("parsing failed")
}

#[test]
fn valid_programs_have_one_named_function() {
    let programs = [
        ("int main(){return 0;}", "main"),
        ("int main ( ) {\n  return ~(1 + x) / 2;\n}\n", "main"),
        ("int answer(){return !!-42*7;}", "answer"),
    ];
    for (src, name) in programs {
        let ast = parse_src(src);
        assert_eq!(name, ast.function.name);
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let asm = compile("int main(){return 2+3*4;}").unwrap();
    let expected = vec![
        "movl $2, %eax",
        "pushq %rax",
        "movl $3, %eax",
        "pushq %rax",
        "movl $4, %eax",
        "popq %rcx",
        "imull %ecx, %eax",
        "popq %rcx",
        "addl %ecx, %eax",
        "ret",
    ];
    assert_eq!(expected, instructions(&asm));
}

#[test]
fn generate_twice_is_byte_identical() {
    let ast = parse_src("int main(){return (1+2)*~3/!4;}");
    let first = emission::generate(&ast);
    let second = emission::generate(&ast);
    assert_eq!(first, second);
}

#[test]
fn negate_zero() {
    let asm = compile("int main(){return -0;}").unwrap();
    assert_eq!(vec!["movl $0, %eax", "negl %eax", "ret"], instructions(&asm));
}

#[test]
fn double_logical_negation_nests() {
    let ast = parse_src("int main(){return !!5;}");
    let AstStatement::Return(exp) = ast.function.body;
    let expected = AstExp::unary(
        AstUnaryOp::LogicalNegate,
        AstExp::unary(AstUnaryOp::LogicalNegate, AstExp::int("5")),
    );
    assert_eq!(expected, exp);
}

#[test]
fn parenthesized_sum_is_evaluated_first() {
    let asm = compile("int main(){return (1+2)*3;}").unwrap();
    let expected = vec![
        "movl $1, %eax",
        "pushq %rax",
        "movl $2, %eax",
        "popq %rcx",
        "addl %ecx, %eax",
        "pushq %rax",
        "movl $3, %eax",
        "popq %rcx",
        "imull %ecx, %eax",
        "ret",
    ];
    assert_eq!(expected, instructions(&asm));
}

#[test]
fn missing_expression_is_a_parse_error() {
    let err = match compile("int main(){ return ; }").unwrap_err() {
        CompileError::Parse(err) => err,
        other => panic!("expected a parse error, got {other}"),
    };
    assert_eq!(Expected::Expression, err.expected);
    assert_eq!(Some(TokenKind::Semicolon), err.found.map(|t| t.kind));
}

#[test]
fn unknown_character_is_a_lex_error() {
    let err = match compile("int main(){return 1 @ 2;}").unwrap_err() {
        CompileError::Lex(err) => err,
        other => panic!("expected a lex error, got {other}"),
    };
    assert_eq!('@', err.ch);
    assert_eq!(1, err.line);
}

#[test]
fn lex_error_wins_over_parse_error() {
    // also malformed syntactically; the lexer must reject it first
    let err = compile("return int ; # main").unwrap_err();
    assert!(matches!(err, CompileError::Lex(_)));
}

#[test]
fn binary_minus_stops_at_the_hyphen() {
    let err = compile("int main(){return 3-1;}").unwrap_err();
    assert_eq!(
        "parse error: expected ';', but found logical negation `-`",
        err.to_string()
    );
}
