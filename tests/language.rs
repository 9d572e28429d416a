use minilang::{
    ast::{BinaryOperator, Expr, Statement},
    error::{LexError, ParseError, RuntimeError, SemanticError},
    graph::statement_to_dot,
    interpreter::{
        analyzer::{SymbolTable, Type},
        evaluator::{binary::eval_binary, core::Environment},
        lexer::{Token, tokenize},
        parser::statement::parse,
        value::Value,
    },
    run_script,
    session::{LineStatus, Session, run_report},
};

fn assert_success(src: &str) {
    if let Err(e) = run_script(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_script(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn statement(src: &str) -> Statement {
    parse(&tokenize(src).unwrap()).unwrap().remove(0)
}

#[test]
fn tokenizes_assignment_line_in_source_order() {
    let tokens = tokenize("z = x + 3;").unwrap();
    assert_eq!(tokens,
               vec![Token::Identifier("z".to_string()),
                    Token::Assign,
                    Token::Identifier("x".to_string()),
                    Token::Plus,
                    Token::Number(3),
                    Token::Semicolon]);
}

#[test]
fn whitespace_and_comments_produce_no_tokens() {
    let tokens = tokenize("  x   =\t1 ; # trailing comment ; y = 2;").unwrap();
    assert_eq!(tokens,
               vec![Token::Identifier("x".to_string()),
                    Token::Assign,
                    Token::Number(1),
                    Token::Semicolon]);
    assert_eq!(tokenize("# only a comment").unwrap(), Vec::new());
}

#[test]
fn string_literal_contents_are_exactly_between_the_quotes() {
    let tokens = tokenize(r#"msg = "hello world";"#).unwrap();
    assert_eq!(tokens[2], Token::Str("hello world".to_string()));

    // No escape processing: a backslash is an ordinary character.
    let tokens = tokenize(r#"p = "a\b";"#).unwrap();
    assert_eq!(tokens[2], Token::Str(r"a\b".to_string()));

    let tokens = tokenize(r#"e = "";"#).unwrap();
    assert_eq!(tokens[2], Token::Str(String::new()));
}

#[test]
fn unrecognized_character_is_a_lexical_error() {
    assert_eq!(tokenize("x = $;"),
               Err(LexError::UnrecognizedCharacter { found: '$' }));
    assert_eq!(tokenize("x = 1 & 2;"),
               Err(LexError::UnrecognizedCharacter { found: '&' }));
}

#[test]
fn oversized_integer_literal_is_a_lexical_error() {
    assert_eq!(tokenize("x = 99999999999999999999;"),
               Err(LexError::NumberTooLarge { literal: "99999999999999999999".to_string() }));
}

#[test]
fn parses_assignment_into_expected_tree() {
    assert_eq!(statement("z = x + 3;"),
               Statement::Assignment { name:  "z".to_string(),
                                       value: Expr::BinaryOp { left:  Box::new(Expr::Variable { name: "x".to_string() }),
                                                               op:    BinaryOperator::Add,
                                                               right: Box::new(Expr::Number { value: 3 }), }, });
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(statement("a = 1 + 2 * 3;"),
               Statement::Assignment { name:  "a".to_string(),
                                       value: Expr::BinaryOp { left:  Box::new(Expr::Number { value: 1 }),
                                                               op:    BinaryOperator::Add,
                                                               right: Box::new(Expr::BinaryOp { left:  Box::new(Expr::Number { value: 2 }),
                                                                                                op:    BinaryOperator::Mul,
                                                                                                right: Box::new(Expr::Number { value: 3 }), }), }, });
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(statement("a = 1 - 2 - 3;"),
               Statement::Assignment { name:  "a".to_string(),
                                       value: Expr::BinaryOp { left:  Box::new(Expr::BinaryOp { left:  Box::new(Expr::Number { value: 1 }),
                                                                                                op:    BinaryOperator::Sub,
                                                                                                right: Box::new(Expr::Number { value: 2 }), }),
                                                               op:    BinaryOperator::Sub,
                                                               right: Box::new(Expr::Number { value: 3 }), }, });
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(statement("a = (1 + 2) * 3;"),
               Statement::Assignment { name:  "a".to_string(),
                                       value: Expr::BinaryOp { left:  Box::new(Expr::BinaryOp { left:  Box::new(Expr::Number { value: 1 }),
                                                                                                op:    BinaryOperator::Add,
                                                                                                right: Box::new(Expr::Number { value: 2 }), }),
                                                               op:    BinaryOperator::Mul,
                                                               right: Box::new(Expr::Number { value: 3 }), }, });
}

#[test]
fn one_line_can_hold_several_statements() {
    let statements = parse(&tokenize("a = 1; b = 2;").unwrap()).unwrap();
    assert_eq!(statements.len(), 2);
}

#[test]
fn statement_must_begin_with_an_identifier() {
    let result = parse(&tokenize("1 = a;").unwrap());
    assert_eq!(result,
               Err(ParseError::UnexpectedToken { expected: "an identifier".to_string(),
                                                 found:    "Number(1)".to_string(), }));
}

#[test]
fn missing_assignment_sign_is_a_syntax_error() {
    let result = parse(&tokenize("a 1;").unwrap());
    assert_eq!(result,
               Err(ParseError::UnexpectedToken { expected: "'='".to_string(),
                                                 found:    "Number(1)".to_string(), }));
}

#[test]
fn missing_semicolon_is_a_syntax_error() {
    let result = parse(&tokenize("a = 1").unwrap());
    assert_eq!(result,
               Err(ParseError::UnexpectedEndOfInput { expected: "';'".to_string() }));
}

#[test]
fn unmatched_parenthesis_is_a_syntax_error() {
    let result = parse(&tokenize("a = (1 + 2;").unwrap());
    assert_eq!(result,
               Err(ParseError::UnexpectedToken { expected: "')'".to_string(),
                                                 found:    "Semicolon".to_string(), }));
}

#[test]
fn integer_operations_check_as_int() {
    let mut table = SymbolTable::new();
    for src in ["a = 1 + 2;", "a = 1 - 2;", "a = 1 * 2;", "a = 1 / 2;"] {
        assert_eq!(table.check_statement(&statement(src)), Ok(Type::Int));
    }
    assert_eq!(table.lookup("a"), Some(Type::Int));
}

#[test]
fn string_concatenation_checks_as_string() {
    let mut table = SymbolTable::new();
    assert_eq!(table.check_statement(&statement(r#"w = "hello" + " world";"#)),
               Ok(Type::Str));
    assert_eq!(table.lookup("w"), Some(Type::Str));
}

#[test]
fn mixed_operand_types_are_a_type_mismatch() {
    let mut table = SymbolTable::new();
    assert_eq!(table.check_statement(&statement(r#"bad = "hello" + 3;"#)),
               Err(SemanticError::TypeMismatch { op:    BinaryOperator::Add,
                                                 left:  Type::Str,
                                                 right: Type::Int, }));
    // No partial binding: the failing statement left no trace.
    assert_eq!(table.lookup("bad"), None);
}

#[test]
fn non_concatenation_string_operators_are_invalid_operations() {
    let mut table = SymbolTable::new();
    for (src, op) in [(r#"a = "x" - "y";"#, BinaryOperator::Sub),
                      (r#"a = "x" * "y";"#, BinaryOperator::Mul),
                      (r#"a = "x" / "y";"#, BinaryOperator::Div)]
    {
        assert_eq!(table.check_statement(&statement(src)),
                   Err(SemanticError::InvalidOperation { op,
                                                         operands: Type::Str }));
    }
}

#[test]
fn undeclared_variable_fails_the_check() {
    let mut table = SymbolTable::new();
    assert_eq!(table.check_statement(&statement("u = unknown + 1;")),
               Err(SemanticError::UndeclaredVariable { name: "unknown".to_string() }));
    assert_eq!(table.lookup("u"), None);
}

#[test]
fn rebinding_overwrites_the_declared_type() {
    let mut table = SymbolTable::new();
    table.check_statement(&statement("x = 1;")).unwrap();
    table.check_statement(&statement(r#"x = "now a string";"#)).unwrap();
    assert_eq!(table.lookup("x"), Some(Type::Str));
}

#[test]
fn integer_arithmetic_yields_exact_results() {
    let mut env = Environment::new();
    assert_eq!(env.eval_statement(&statement("a = 5 + 2;")), Ok(Value::Integer(7)));
    assert_eq!(env.eval_statement(&statement("b = 8 - 5;")), Ok(Value::Integer(3)));
    assert_eq!(env.eval_statement(&statement("c = 7 * 9;")), Ok(Value::Integer(63)));
    assert_eq!(env.eval_statement(&statement("d = 10 / 2;")), Ok(Value::Integer(5)));
}

#[test]
fn division_truncates_towards_zero() {
    let mut env = Environment::new();
    assert_eq!(env.eval_statement(&statement("a = 7 / 2;")), Ok(Value::Integer(3)));
    assert_eq!(env.eval_statement(&statement("b = 1 / 2;")), Ok(Value::Integer(0)));
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    let mut env = Environment::new();
    assert_eq!(env.eval_statement(&statement("a = 1 / 0;")),
               Err(RuntimeError::DivisionByZero));
    assert_eq!(env.get("a"), None);
}

#[test]
fn integer_overflow_is_a_runtime_error() {
    let mut env = Environment::new();
    assert_eq!(env.eval_statement(&statement("a = 9223372036854775807 + 1;")),
               Err(RuntimeError::Overflow));
}

#[test]
fn string_concatenation_joins_without_separator() {
    let mut env = Environment::new();
    assert_eq!(env.eval_statement(&statement(r#"w = "hello" + " world";"#)),
               Ok(Value::Str("hello world".to_string())));
}

#[test]
fn undefined_variable_is_a_runtime_error() {
    let env = Environment::new();
    assert_eq!(env.eval_expr(&Expr::Variable { name: "ghost".to_string() }),
               Err(RuntimeError::UndefinedVariable { name: "ghost".to_string() }));
}

#[test]
fn unchecked_mixed_operands_fail_instead_of_panicking() {
    assert_eq!(eval_binary(BinaryOperator::Add,
                           &Value::Str("a".to_string()),
                           &Value::Integer(1)),
               Err(RuntimeError::InvalidOperands { op: BinaryOperator::Add }));
    assert_eq!(eval_binary(BinaryOperator::Sub,
                           &Value::Str("a".to_string()),
                           &Value::Str("b".to_string())),
               Err(RuntimeError::InvalidOperands { op: BinaryOperator::Sub }));
}

#[test]
fn session_round_trip_matches_the_worked_example() {
    // x bound to 7, then `z = x + 3;` must check as int, evaluate to 10,
    // and bind z in both tables.
    let mut session = Session::new();
    session.run_line("x = 7;").unwrap();

    let result = session.run_line("z = x + 3;").unwrap();
    assert_eq!(result, Some(Value::Integer(10)));
    assert_eq!(session.symbols().lookup("z"), Some(Type::Int));
    assert_eq!(session.environment().get("z"), Some(&Value::Integer(10)));
}

#[test]
fn failed_check_leaves_both_tables_unbound() {
    let mut session = Session::new();
    let err = session.run_line(r#"bad = "hello" + 3;"#).unwrap_err();

    assert!(err.to_string().contains("cannot apply '+' between string and int"));
    assert_eq!(session.symbols().lookup("bad"), None);
    assert_eq!(session.environment().get("bad"), None);
}

#[test]
fn undeclared_reference_creates_no_bindings() {
    let mut session = Session::new();
    let err = session.run_line("u = unknown + 1;").unwrap_err();

    assert!(err.to_string().contains("undeclared variable 'unknown'"));
    assert_eq!(session.symbols().bindings().count(), 0);
    assert_eq!(session.environment().bindings().count(), 0);
}

#[test]
fn reassignment_overwrites_type_and_value() {
    let mut session = Session::new();
    session.run_line("x = 1;").unwrap();
    session.run_line(r#"x = "one";"#).unwrap();

    assert_eq!(session.symbols().lookup("x"), Some(Type::Str));
    assert_eq!(session.environment().get("x"),
               Some(&Value::Str("one".to_string())));
    assert_eq!(session.environment().bindings().count(), 1);
}

#[test]
fn symbol_table_and_environment_never_diverge() {
    let mut session = Session::new();
    for line in ["x = 5 + 2;",
                 r#"y = "hello";"#,
                 "z = x + 3;",
                 r#"w = y + " world";"#,
                 "x = x * x;"]
    {
        session.run_line(line).unwrap();
    }

    assert_eq!(session.symbols().bindings().count(),
               session.environment().bindings().count());
    for (name, value) in session.environment().bindings() {
        assert_eq!(session.symbols().lookup(name), Some(value.value_type()));
    }
}

#[test]
fn strict_driver_fails_fast_across_lines() {
    assert_success("x = 1;\ny = x + 1;\n\n# comment only\nz = y * 2;");
    assert_failure("x = 1;\nbad = $;\ny = 2;");
    assert_failure(r#"x = 1;
bad = "a" + 1;"#);
}

#[test]
fn report_driver_continues_after_errors() {
    let source = "x = 5 + 2;\nbad = y + 3;\nz = x + 3;";
    let (reports, session) = run_report(source);

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].status, LineStatus::Ok);
    assert!(matches!(reports[1].status, LineStatus::Error(_)));
    assert_eq!(reports[2].status, LineStatus::Ok);

    // The failing line corrupted nothing for the lines after it.
    assert_eq!(session.environment().get("z"), Some(&Value::Integer(10)));
    assert_eq!(session.environment().get("bad"), None);
}

#[test]
fn report_carries_token_texts_and_trees() {
    let (reports, _) = run_report("z = x + 3;");
    assert_eq!(reports[0].number, 1);
    assert_eq!(reports[0].tokens, vec!["z", "=", "x", "+", "3", ";"]);
    assert_eq!(reports[0].statements.len(), 1);

    // A parse error leaves the tokens but no trees.
    let (reports, _) = run_report("z = ;");
    assert_eq!(reports[0].tokens, vec!["z", "=", ";"]);
    assert!(reports[0].statements.is_empty());
    assert!(!reports[0].status.is_ok());

    // A lexical error leaves neither.
    let (reports, _) = run_report("z = $;");
    assert!(reports[0].tokens.is_empty());
    assert!(reports[0].statements.is_empty());
}

#[test]
fn dot_rendering_labels_nodes_and_links_children() {
    let dot = statement_to_dot(&statement(r#"w = y + " world";"#));

    assert!(dot.starts_with("digraph ast {"));
    assert!(dot.contains(r#"n0 [label="Assign\nw"];"#));
    assert!(dot.contains(r#"[label="BinOp\n+"];"#));
    assert!(dot.contains(r#"[label="Var\ny"];"#));
    assert!(dot.contains(r#"[label="String\n\" world\""];"#));
    assert!(dot.contains("n0 -> n1;"));
    assert!(dot.ends_with("}\n"));
}

#[test]
fn demo_script_runs_to_completion() {
    let (reports, session) = run_report(
                                        "x = 5 + 2;
y = \"hello\";
z = x + 3;
w = y + \" world\";
bad = y + 3;        # should trigger type error
u = unknown + 1;    # should trigger undeclared variable error",
    );

    let statuses: Vec<bool> = reports.iter().map(|r| r.status.is_ok()).collect();
    assert_eq!(statuses, vec![true, true, true, true, false, false]);

    assert_eq!(session.environment().get("x"), Some(&Value::Integer(7)));
    assert_eq!(session.environment().get("z"), Some(&Value::Integer(10)));
    assert_eq!(session.environment().get("w"),
               Some(&Value::Str("hello world".to_string())));
    assert_eq!(session.environment().get("bad"), None);
    assert_eq!(session.environment().get("u"), None);
}
