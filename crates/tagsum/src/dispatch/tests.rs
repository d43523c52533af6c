use super::*;
use crate::errors::SumErrorKind;
use pretty_assertions::assert_eq;
use tagsum_value::Value;

fn shapes() -> Sum<Value> {
    let result = Sum::from_predicates(
        Predicates::new()
            .variant_fn("Circle", |v: &Value| v.field("radius").is_some())
            .variant_fn("Square", |v: &Value| v.field("side").is_some()),
    );
    match result {
        Ok(sum) => sum,
        Err(err) => panic!("shapes should build: {err}"),
    }
}

fn num(v: &Value, field: &str) -> f64 {
    v.field(field).and_then(Value::as_number).unwrap_or_default()
}

fn circle(radius: f64) -> Value {
    Value::record([("radius", Value::number(radius))])
}

fn square(side: f64) -> Value {
    Value::record([("side", Value::number(side))])
}

fn area() -> Pattern1<Value, f64> {
    Pattern1::new()
        .on("Circle", |c: &Value| std::f64::consts::PI * num(c, "radius").powi(2))
        .on("Square", |s: &Value| num(s, "side").powi(2))
}

#[test]
fn test_type_of_and_failure() {
    let shapes = shapes();
    assert_eq!(shapes.type_of(&circle(1.0)), Ok(Label::from("Circle")));
    assert_eq!(shapes.type_of(&square(1.0)), Ok(Label::from("Square")));
    let err = shapes.type_of(&Value::Null).map_err(|e| e.kind());
    assert_eq!(err, Err(SumErrorKind::ClassificationFailure));
}

#[test]
fn test_membership_forms_agree() {
    let shapes = shapes();
    let is_circle = shapes.is_of_type("Circle");
    for value in [circle(1.0), square(2.0), Value::Null, Value::number(3)] {
        assert_eq!(is_circle(&value), shapes.matches("Circle", &value));
    }
    assert!(is_circle(&circle(1.0)));
    assert!(!shapes.matches("Circle", &Value::Null));
    assert!(!shapes.matches("Triangle", &circle(1.0)));
}

#[test]
fn test_match_value_circle_area() {
    let area = shapes().match_value(&circle(2.0), &area());
    match area {
        Ok(area) => assert!((area - 12.566).abs() < 1e-3),
        Err(err) => panic!("circle should match: {err}"),
    }
}

#[test]
fn test_match_value_missing_handler() {
    let only_circle = Pattern1::new().on("Circle", |_: &Value| 0.0_f64);
    let err = shapes()
        .match_value(&square(1.0), &only_circle)
        .map_err(|e| e.kind());
    assert_eq!(err, Err(SumErrorKind::MissingHandler));
}

#[test]
fn test_matcher_forms_agree() {
    let shapes = shapes();
    let area = shapes.f(area());
    for value in [circle(1.5), square(3.0)] {
        let label = shapes.type_of(&value);
        let direct = label
            .ok()
            .and_then(|label| area.handler(&label).map(|h| h.call(&value)));
        assert_eq!(area.call(&value).ok(), direct);
    }
}

#[test]
fn test_multi_argument_matchers() {
    let shapes = shapes();
    let scaled = shapes.f2(
        Pattern2::new()
            .on("Circle", |c: &Value, k: f64| k * num(c, "radius"))
            .on("Square", |s: &Value, k: f64| k * num(s, "side")),
    );
    assert_eq!(scaled.call(&circle(2.0), 3.0), Ok(6.0));

    let describe = shapes.f3(
        Pattern3::new()
            .on("Circle", |_: &Value, prefix: &'static str, n: usize| {
                format!("{prefix} circle x{n}")
            })
            .on("Square", |_: &Value, prefix: &'static str, n: usize| {
                format!("{prefix} square x{n}")
            }),
    );
    assert_eq!(
        describe.call(&square(1.0), "a", 2),
        Ok("a square x2".to_string())
    );

    let affine = shapes.f4(
        Pattern4::new()
            .on("Circle", |c: &Value, a: f64, b: f64, flip: bool| {
                let r = a * num(c, "radius") + b;
                if flip { -r } else { r }
            })
            .on("Square", |s: &Value, a: f64, b: f64, flip: bool| {
                let r = a * num(s, "side") + b;
                if flip { -r } else { r }
            }),
    );
    assert_eq!(affine.call(&circle(1.0), 2.0, 1.0, true), Ok(-3.0));

    let sum = shapes.f5(
        Pattern5::new()
            .on("Circle", |_: &Value, a: i32, b: i32, c: i32, d: i32| a + b + c + d)
            .on("Square", |_: &Value, a: i32, b: i32, c: i32, d: i32| a * b * c * d),
    );
    assert_eq!(sum.call(&circle(1.0), 1, 2, 3, 4), Ok(10));
    assert_eq!(sum.call(&square(1.0), 1, 2, 3, 4), Ok(24));
}

#[test]
fn test_check_exhaustive() {
    let shapes = shapes();
    assert_eq!(shapes.check_exhaustive(&area()), Ok(()));

    let partial = Pattern1::new().on("Circle", |_: &Value| 0.0_f64);
    assert_eq!(
        shapes.check_exhaustive(&partial),
        Err(crate::SumError::NonExhaustive {
            missing: vec![Label::from("Square")],
        })
    );
}

#[test]
fn test_direct_classifier_none_is_failure() {
    let parity = Sum::from_type_of(|n: &i64| match n {
        n if *n < 0 => None,
        n if n % 2 == 0 => Some(Label::from_static("Even")),
        _ => Some(Label::from_static("Odd")),
    });
    assert_eq!(parity.type_of(&4), Ok(Label::from("Even")));
    let err = parity.type_of(&-1).map_err(|e| e.kind());
    assert_eq!(err, Err(SumErrorKind::ClassificationFailure));
    assert_eq!(parity.labels(), None);
    assert_eq!(parity.variant_count(), None);
    assert!(!parity.is_unrolled());
    assert_eq!(parity.check_exhaustive(&Pattern1::<i64, ()>::new()), Ok(()));
}

#[test]
fn test_producer_and_introspection() {
    let result = Sum::from_producer(|p: &Toolkit| {
        Predicates::new()
            .variant("Text", p.is_string())
            .variant("Flag", p.is_boolean())
            .variant("Items", p.is_array_of(p.is_number()))
    });
    let sum: Sum<Value> = match result {
        Ok(sum) => sum,
        Err(err) => panic!("producer should build: {err}"),
    };
    assert_eq!(sum.variant_count(), Some(3));
    assert!(sum.is_unrolled());
    let items = Value::list(vec![Value::number(1), Value::number(2)]);
    assert_eq!(sum.type_of(&items), Ok(Label::from("Items")));
    assert_eq!(sum.type_of(&Value::from(true)), Ok(Label::from("Flag")));
}

#[test]
fn test_duplicate_variant_rejected() {
    let result = Sum::<Value>::from_predicates(
        Predicates::new()
            .variant_fn("A", |_: &Value| true)
            .variant_fn("A", |_: &Value| false),
    );
    assert_eq!(
        result.map(|_| ()),
        Err(crate::SumError::DuplicateVariant {
            label: Label::from("A"),
        })
    );
}

#[test]
fn test_extend_chain() {
    let base = shapes();
    let first = base.extend(|_| Extension::new().with("a", 1_i64));
    let second = first.extend(|prev| {
        let a = prev.member::<i64>("a").copied().unwrap_or_default();
        Extension::new().with("b", a + 1)
    });

    assert_eq!(second.member::<i64>("b"), Some(&2));
    assert_eq!(second.member::<i64>("a"), Some(&1));
    assert!(!base.has_member("a"));
    assert!(!first.has_member("b"));

    let names: Vec<&str> = second.member_names().map(Label::as_str).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(second.type_of(&circle(1.0)), Ok(Label::from("Circle")));
}

#[test]
fn test_extend_with_methods() {
    let shapes = shapes().extend(|prev| {
        let area = prev.f(area());
        Extension::new().method("area", move |v: &Value| area.call(v).unwrap_or(f64::NAN))
    });
    let area = shapes.method::<f64>("area");
    assert_eq!(area.map(|f| f(&square(3.0))), Some(9.0));
    assert!(shapes.method::<i64>("area").is_none());
    assert!(shapes.members().contains("area"));
}

#[test]
fn test_clone_and_debug() {
    let shapes = shapes().extend(|_| Extension::new().with("unit", 1.0_f64));
    let copy = shapes.clone();
    assert_eq!(copy.member::<f64>("unit"), Some(&1.0));
    assert_eq!(
        format!("{copy:?}"),
        r#"Sum { labels: Some(["Circle", "Square"]), members: ["unit"], .. }"#
    );
}
