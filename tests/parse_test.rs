use funscript::lang::{ast::*, load, ErrorCode};

fn parse_str(s: &str) -> Program {
    match load(s) {
        Ok(p) => p,
        Err(e) => panic!("{}", e),
    }
}

#[test]
fn test_every_statement() {
    let program = parse_str(
        r#"def main() then
    print "hi"
    print name
    iread "Name: "
    let x := _
    unsafe asm """
        nop
    """
    return
end"#,
    );
    assert_eq!(program.functions.len(), 1);
    let main = &program.functions[0];
    assert_eq!(&*main.name, "main");
    assert_eq!(main.line, 1);
    assert_eq!(
        main.body.to_vec(),
        vec![
            Statement::Print(2, "hi".into()),
            Statement::PrintVar(3, "name".into()),
            Statement::Iread(4, "Name: ".into()),
            Statement::LetVar(5, "x".into(), Expression::VarRef("_".into())),
            Statement::AsmBlock(6, "nop".into()),
            Statement::Return(9),
        ]
    );
}

#[test]
fn test_functions_keep_source_order() {
    let program = parse_str("def b() then end def a() then end def b() then return end");
    let names: Vec<&str> = program.functions.iter().map(|f| &*f.name).collect();
    assert_eq!(names, vec!["b", "a", "b"]);
}

#[test]
fn test_empty_program() {
    assert_eq!(parse_str("  \n ").functions.len(), 0);
}

#[test]
fn test_string_keeps_escapes() {
    let program = parse_str(r#"def main() then print "a\tb\"c" end"#);
    assert_eq!(
        program.functions[0].body[0],
        Statement::Print(1, r#"a\tb\"c"#.into())
    );
}

#[test]
fn test_header_without_parens_fails() {
    let e = load("def main then end").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(
        e.to_string(),
        "SYNTAX ERROR IN 1 (9..13); expected RPAREN but found THEN `then`"
    );
}

#[test]
fn test_unknown_statement() {
    let e = load("def main() then\n  foo\nend").unwrap_err();
    assert_eq!(
        e.to_string(),
        "SYNTAX ERROR IN 2 (2..5); expected statement but found IDENT `foo`"
    );
}

#[test]
fn test_let_needs_assign() {
    let e = load("def main() then let x \"y\" end").unwrap_err();
    assert_eq!(
        e.to_string(),
        "SYNTAX ERROR IN 1 (22..25); expected ASSIGN but found STRING `\"y\"`"
    );
}

#[test]
fn test_asm_needs_triple_quotes() {
    let e = load("def main() then unsafe asm \"nop\" end").unwrap_err();
    assert_eq!(
        e.to_string(),
        "SYNTAX ERROR IN 1 (27..32); expected MULTILINE_STRING but found STRING `\"nop\"`"
    );
}

#[test]
fn test_lex_errors_come_first() {
    let e = load("def main() then print $ end").unwrap_err();
    assert_eq!(e.code(), ErrorCode::UnexpectedCharacter);
}
