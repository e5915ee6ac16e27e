use paramexpr_parser::{parse, BinaryOp, Expr, Function, ParseErrorKind, UnaryOp};

#[test]
fn unknown_function_reports_name_and_column() {
    let err = parse("t + foo(1)").err().unwrap();
    match err.kind {
        ParseErrorKind::UnknownFunction { ref name } => assert_eq!(name, "foo"),
        _ => panic!("expected unknown function, got {}", err),
    }
    assert_eq!(err.column(), 4);
}

#[test]
fn arity_error_is_raised_before_evaluation() {
    let err = parse("sin(1,2)").err().unwrap();
    assert!(err.is_syntax());
    assert!(err.to_string().contains("expects 1 argument, got 2"));
}

#[test]
fn unknown_function_wins_over_unclosed_paren() {
    let err = parse("foo(").err().unwrap();
    assert!(err.is_unknown_function());
}

#[test]
fn every_registry_entry_parses_with_its_arity() {
    for (name, function) in paramexpr_parser::FUNCTIONS {
        let args = vec!["t"; function.arity()].join(", ");
        let source = format!("{}({})", name, args);
        let expr = parse(&source).unwrap();
        match expr {
            Expr::Call { function: f, args } => {
                assert_eq!(f, *function);
                assert_eq!(args.len(), function.arity());
            }
            _ => panic!("{} did not parse as a call", source),
        }
    }
}

#[test]
fn mixed_case_source_normalizes() {
    let expr = parse("Sin(T) * PI").unwrap();
    assert_eq!(
        expr,
        Expr::binary(
            BinaryOp::Mul,
            Expr::call(Function::Sin, vec![Expr::variable("t")]),
            Expr::variable("pi"),
        )
    );
}

#[test]
fn unary_minus_chain() {
    let expr = parse("--t").unwrap();
    assert_eq!(
        expr,
        Expr::unary(UnaryOp::Neg, Expr::unary(UnaryOp::Neg, Expr::variable("t")))
    );
}

#[test]
fn trailing_operator_is_unexpected_end() {
    let err = parse("cos(t) +").err().unwrap();
    match err.kind {
        ParseErrorKind::UnexpectedEnd { .. } => {}
        _ => panic!("expected unexpected end, got {}", err),
    }
}

#[test]
fn stray_closing_paren_inside_call() {
    let err = parse("max(1, 2))").err().unwrap();
    assert_eq!(err.kind, ParseErrorKind::UnmatchedParen);
}

#[test]
fn exponent_notation_is_not_a_number() {
    // 1e5 lexes as `1` followed by identifier `e5`
    let err = parse("1e5").err().unwrap();
    match err.kind {
        ParseErrorKind::TrailingInput { .. } => {}
        _ => panic!("expected trailing input, got {}", err),
    }
}

#[test]
fn free_variables_of_surface_expression() {
    let expr = parse("cos(u) * sin(v) + tau").unwrap();
    let names: Vec<&str> = expr.variables().into_iter().collect();
    // function names are not variables
    assert_eq!(names, ["tau", "u", "v"]);
}

fn assert_too_deep(source: &str) {
    match parse(source).unwrap_err().kind {
        ParseErrorKind::NestingTooDeep { limit } => assert_eq!(limit, 256),
        other => panic!("expected nesting error, got {:?}", other),
    }
}

#[test]
fn test_deep_parentheses_are_rejected() {
    let depth = 20_000;
    assert_too_deep(&format!("{}t{}", "(".repeat(depth), ")".repeat(depth)));
}

#[test]
fn test_long_negation_chain_is_rejected() {
    assert_too_deep(&format!("{}t", "-".repeat(20_000)));
}

#[test]
fn test_long_power_chain_is_rejected() {
    assert_too_deep(&format!("{}t", "t ^ ".repeat(20_000)));
}

#[test]
fn test_nested_calls_within_limit() {
    let depth = 100;
    let source = format!("{}t{}", "sin(".repeat(depth), ")".repeat(depth));
    assert!(parse(&source).is_ok());
}
