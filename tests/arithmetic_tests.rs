use snol::ast::BinaryOp;
use snol::error::{ErrorKind, SnolError, Span};
use snol::evaluate_binary_op;
use snol::value::{literal_kind, LiteralKind, Value};

const ALL_OPS: [BinaryOp; 5] = [
    BinaryOp::Add,
    BinaryOp::Subtract,
    BinaryOp::Multiply,
    BinaryOp::Divide,
    BinaryOp::Modulo,
];

#[test]
fn integer_arithmetic_stays_integer() {
    let eval = |op| evaluate_binary_op(op, Value::Int(17), Value::Int(5));
    assert_eq!(eval(BinaryOp::Add), Ok(Value::Int(22)));
    assert_eq!(eval(BinaryOp::Subtract), Ok(Value::Int(12)));
    assert_eq!(eval(BinaryOp::Multiply), Ok(Value::Int(85)));
    assert_eq!(eval(BinaryOp::Divide), Ok(Value::Int(3)));
    assert_eq!(eval(BinaryOp::Modulo), Ok(Value::Int(2)));
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_eq!(
        evaluate_binary_op(BinaryOp::Divide, Value::Int(-7), Value::Int(2)),
        Ok(Value::Int(-3))
    );
    assert_eq!(
        evaluate_binary_op(BinaryOp::Modulo, Value::Int(-7), Value::Int(3)),
        Ok(Value::Int(-1))
    );
}

#[test]
fn float_arithmetic_stays_float() {
    let eval = |op| evaluate_binary_op(op, Value::Float(7.5), Value::Float(2.5));
    assert_eq!(eval(BinaryOp::Add), Ok(Value::Float(10.0)));
    assert_eq!(eval(BinaryOp::Subtract), Ok(Value::Float(5.0)));
    assert_eq!(eval(BinaryOp::Multiply), Ok(Value::Float(18.75)));
    assert_eq!(eval(BinaryOp::Divide), Ok(Value::Float(3.0)));
}

#[test]
fn modulo_is_integer_only() {
    assert_eq!(
        evaluate_binary_op(BinaryOp::Modulo, Value::Float(2.5), Value::Float(2.5)),
        Err(ErrorKind::ArithmeticModuloError)
    );
    assert_eq!(
        evaluate_binary_op(BinaryOp::Modulo, Value::Float(1.0), Value::Float(0.0)),
        Err(ErrorKind::ArithmeticModuloError)
    );
}

#[test]
fn mixed_types_fail_for_every_operator() {
    for op in ALL_OPS {
        assert_eq!(
            evaluate_binary_op(op, Value::Int(5), Value::Float(2.5)),
            Err(ErrorKind::ArithmeticTypeError {
                left: "int",
                right: "float",
            }),
            "operator {}",
            op
        );
        assert_eq!(
            evaluate_binary_op(op, Value::Float(0.0), Value::Int(0)),
            Err(ErrorKind::ArithmeticTypeError {
                left: "float",
                right: "int",
            }),
            "operator {}",
            op
        );
    }
}

#[test]
fn zero_divisor_is_an_error() {
    assert_eq!(
        evaluate_binary_op(BinaryOp::Divide, Value::Int(10), Value::Int(0)),
        Err(ErrorKind::DivisionByZero)
    );
    assert_eq!(
        evaluate_binary_op(BinaryOp::Modulo, Value::Int(10), Value::Int(0)),
        Err(ErrorKind::DivisionByZero)
    );
    assert_eq!(
        evaluate_binary_op(BinaryOp::Divide, Value::Float(1.0), Value::Float(0.0)),
        Err(ErrorKind::DivisionByZero)
    );
    assert_eq!(
        evaluate_binary_op(BinaryOp::Divide, Value::Float(1.0), Value::Float(-0.0)),
        Err(ErrorKind::DivisionByZero)
    );
}

#[test]
fn integer_overflow_wraps() {
    assert_eq!(
        evaluate_binary_op(BinaryOp::Add, Value::Int(i64::MAX), Value::Int(1)),
        Ok(Value::Int(i64::MIN))
    );
    assert_eq!(
        evaluate_binary_op(BinaryOp::Divide, Value::Int(i64::MIN), Value::Int(-1)),
        Ok(Value::Int(i64::MIN))
    );
    assert_eq!(
        evaluate_binary_op(BinaryOp::Modulo, Value::Int(i64::MIN), Value::Int(-1)),
        Ok(Value::Int(0))
    );
}

#[test]
fn literal_grammar_is_strict() {
    assert_eq!(literal_kind("5"), Some(LiteralKind::Int));
    assert_eq!(literal_kind("-5"), Some(LiteralKind::Int));
    assert_eq!(literal_kind("007"), Some(LiteralKind::Int));
    assert_eq!(literal_kind("5.0"), Some(LiteralKind::Float));
    assert_eq!(literal_kind("-0.25"), Some(LiteralKind::Float));

    for text in ["", "-", "5.", ".5", "-.5", "1.2.3", "+5", "1e3", "--5", "5-3", "x"] {
        assert_eq!(literal_kind(text), None, "{:?} should not be a literal", text);
    }
}

#[test]
fn literals_parse_int_first() {
    assert_eq!(Value::from_literal("42"), Some(Value::Int(42)));
    assert_eq!(Value::from_literal("4.2"), Some(Value::Float(4.2)));
    assert_eq!(
        Value::from_literal("-9223372036854775808"),
        Some(Value::Int(i64::MIN))
    );
    assert_eq!(Value::from_literal("99999999999999999999"), None);
    assert_eq!(Value::from_literal("abc"), None);
}

#[test]
fn values_display_like_the_console() {
    assert_eq!(Value::Int(-12).to_string(), "-12");
    assert_eq!(Value::Float(2.5).to_string(), "2.500000");
    assert_eq!(Value::Float(-0.125).to_string(), "-0.125000");
}

#[test]
fn error_messages() {
    assert_eq!(
        ErrorKind::UnknownVariable("x".to_string()).to_string(),
        "Error! [x] is not defined!"
    );
    assert_eq!(
        ErrorKind::UnknownWord("$".to_string()).to_string(),
        "Unknown word! [$]"
    );
    assert_eq!(
        ErrorKind::UnknownCommand.to_string(),
        "Unknown command! Does not match any valid command of the language."
    );
    assert!(ErrorKind::ArithmeticOpError
        .to_string()
        .contains("Only integers and floating-point numbers"));
    assert!(ErrorKind::ArithmeticTypeError {
        left: "int",
        right: "float"
    }
    .to_string()
    .starts_with("Error! Operands must be of the same type"));
}

#[test]
fn report_renders_kind_message_and_help() {
    let error = SnolError::new_with_help(
        ErrorKind::UnknownVariable("y".to_string()),
        Span::new(8, 9),
        "assign it first".to_string(),
    );

    let mut buffer = Vec::new();
    error
        .write_report("x = 5 + y", Some("demo.snol"), false, &mut buffer)
        .unwrap();
    let rendered = String::from_utf8(buffer).unwrap();

    assert!(rendered.contains("Unknown Variable"), "{}", rendered);
    assert!(rendered.contains("Error! [y] is not defined!"), "{}", rendered);
    assert!(rendered.contains("demo.snol"), "{}", rendered);
    assert!(rendered.contains("assign it first"), "{}", rendered);
}
