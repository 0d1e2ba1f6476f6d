use crate::ast::BinaryOp;
use crate::error::ErrorKind;
use crate::value::Value;

/// Apply `operator` to two values of the same type.
///
/// Mixed types are rejected before the operator is looked at. `%` is defined for
/// integers only, and a zero divisor is an error for both `/` and `%`. Integer
/// arithmetic wraps on overflow.
pub fn evaluate_binary_op(
    operator: BinaryOp,
    left: Value,
    right: Value,
) -> Result<Value, ErrorKind> {
    if left.kind() != right.kind() {
        return Err(ErrorKind::ArithmeticTypeError {
            left: left.type_name(),
            right: right.type_name(),
        });
    }

    match (left, right) {
        (Value::Int(l), Value::Int(r)) => evaluate_int(operator, l, r).map(Value::Int),
        (Value::Float(l), Value::Float(r)) => evaluate_float(operator, l, r).map(Value::Float),
        _ => Err(ErrorKind::ArithmeticOpError),
    }
}

fn evaluate_int(operator: BinaryOp, l: i64, r: i64) -> Result<i64, ErrorKind> {
    match operator {
        BinaryOp::Add => Ok(l.wrapping_add(r)),
        BinaryOp::Subtract => Ok(l.wrapping_sub(r)),
        BinaryOp::Multiply => Ok(l.wrapping_mul(r)),
        BinaryOp::Divide if r == 0 => Err(ErrorKind::DivisionByZero),
        BinaryOp::Divide => Ok(l.wrapping_div(r)),
        BinaryOp::Modulo if r == 0 => Err(ErrorKind::DivisionByZero),
        BinaryOp::Modulo => Ok(l.wrapping_rem(r)),
    }
}

fn evaluate_float(operator: BinaryOp, l: f64, r: f64) -> Result<f64, ErrorKind> {
    match operator {
        BinaryOp::Add => Ok(l + r),
        BinaryOp::Subtract => Ok(l - r),
        BinaryOp::Multiply => Ok(l * r),
        // -0.0 == 0.0
        BinaryOp::Divide if r == 0.0 => Err(ErrorKind::DivisionByZero),
        BinaryOp::Divide => Ok(l / r),
        BinaryOp::Modulo => Err(ErrorKind::ArithmeticModuloError),
    }
}
