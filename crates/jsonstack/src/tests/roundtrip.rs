use alloc::string::{String, ToString};

use quickcheck::{Arbitrary, Gen, QuickCheck};

use crate::{Map, Number, Value, parse};

// Depth-bounded tree generator; quickcheck's default recursion on nested
// structures is unbounded.
#[derive(Clone, Debug)]
struct Tree(Value);

fn arbitrary_number(g: &mut Gen) -> Number {
    if bool::arbitrary(g) {
        Number::from(i64::arbitrary(g))
    } else {
        let f = f64::arbitrary(g);
        Number::from(if f.is_finite() { f } else { 0.0 })
    }
}

fn arbitrary_value(g: &mut Gen, depth: usize) -> Value {
    let pick = if depth == 0 {
        usize::arbitrary(g) % 4
    } else {
        usize::arbitrary(g) % 6
    };
    match pick {
        0 => Value::Null,
        1 => Value::Boolean(bool::arbitrary(g)),
        2 => Value::Number(arbitrary_number(g)),
        3 => Value::String(String::arbitrary(g)),
        4 => {
            let len = usize::arbitrary(g) % 4;
            Value::Array((0..len).map(|_| arbitrary_value(g, depth - 1)).collect())
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            let mut map = Map::new();
            for _ in 0..len {
                map.insert(String::arbitrary(g), arbitrary_value(g, depth - 1));
            }
            Value::Object(map)
        }
    }
}

impl Arbitrary for Tree {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = usize::arbitrary(g) % 3;
        Tree(arbitrary_value(g, depth))
    }
}

/// Property: any tree built from the accepted variants survives a
/// render-then-reparse round trip.
#[test]
fn display_then_parse_roundtrip() {
    fn prop(tree: Tree) -> bool {
        let src = tree.0.to_string();
        parse(&src) == Ok(tree.0)
    }
    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(Tree) -> bool);
}

/// Property: no input, however malformed, makes the driver panic; it
/// either parses or reports an error.
#[quickcheck_macros::quickcheck]
fn arbitrary_input_never_panics(src: String) -> bool {
    let _ = parse(&src);
    true
}

fn matches_oracle(ours: &Value, oracle: &serde_json::Value) -> bool {
    match (ours, oracle) {
        (Value::Null, serde_json::Value::Null) => true,
        (Value::Boolean(a), serde_json::Value::Bool(b)) => a == b,
        (Value::Number(n), serde_json::Value::Number(m)) => n.as_f64().ok() == m.as_f64(),
        (Value::String(a), serde_json::Value::String(b)) => a == b,
        (Value::Array(a), serde_json::Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| matches_oracle(x, y))
        }
        (Value::Object(a), serde_json::Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(k, v)| b.get(k).is_some_and(|w| matches_oracle(v, w)))
        }
        _ => false,
    }
}

/// On plain RFC 8259 inputs (none of the grammar extensions), the value
/// tree must agree with serde_json's.
#[test]
fn agrees_with_serde_json_on_plain_json() {
    let cases = [
        r#"{"a":1,"b":[2,3],"c":{"d":null,"e":true}}"#,
        r#"[0.5, -3, 1e10, 1.25e-3, "x\t\"y\"", [], {}]"#,
        "[[1,2],[3,4]]",
        "  {  \"spaced\"  :  [ false , null ]  }  ",
        "\"line\\nbreak\"",
    ];
    for src in cases {
        let ours = parse(src).unwrap();
        let oracle: serde_json::Value = serde_json::from_str(src).unwrap();
        assert!(matches_oracle(&ours, &oracle), "mismatch for {src}");
    }
}
