//! Arithmetic inside compositions

use lineage_engine::{ComposedFunction, Value};
use lineage_foundation::{Datum, ErrorKind};
use lineage_stdlib::{addition, division, multiplication, negation, subtraction};

fn eval(f: &ComposedFunction, args: &[i64]) -> Datum {
    let args: Vec<Value> = args.iter().copied().map(Value::from).collect();
    f.evaluate(&args).unwrap().datum().clone()
}

#[test]
fn mean_of_two() {
    // (@0 + @1) / 2.0
    let sum = ComposedFunction::new(addition()).arg("@0").arg("@1");
    let mean = ComposedFunction::new(division()).arg(sum).arg(2.0);
    assert_eq!(eval(&mean, &[3, 4]), Datum::Float(3.5));
}

#[test]
fn int_arithmetic_stays_int() {
    let f = ComposedFunction::new(subtraction())
        .arg(ComposedFunction::new(multiplication()).arg("@0").arg(3))
        .arg(ComposedFunction::new(negation()).arg("@1"));
    assert_eq!(eval(&f, &[2, 4]), Datum::Int(10));
    assert_eq!(eval(&ComposedFunction::new(division()).arg("@0").arg(2), &[7]), Datum::Int(3));
}

#[test]
fn division_by_zero_carries_a_frame() {
    let f = ComposedFunction::new(division()).arg("@0").arg(0);
    let err = f.evaluate(&[Value::from(1)]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DivisionByZero));
    let stack = err.context.unwrap().stack;
    assert!(stack.iter().any(|frame| frame == "composed(division)"));
}
