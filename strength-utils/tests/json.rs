use serde::{Deserialize, Serialize};
use serde_json::json;
use strength_utils::*;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Settings {
    zeta: u32,
    alpha: Vec<i32>,
    nested: Nested,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Nested {
    y: bool,
    x: String,
}

fn sample() -> Settings {
    Settings {
        zeta: 7,
        alpha: vec![-1, 2],
        nested: Nested {
            y: true,
            x: "c001".to_string(),
        },
    }
}

#[test]
fn test_jsonify_sorts_keys() {
    assert_eq!(
        jsonify(&sample()).unwrap(),
        r#"{"alpha":[-1,2],"nested":{"x":"c001","y":true},"zeta":7}"#
    );
}

#[test]
fn test_jsonify_sorts_keys_inside_arrays() {
    let value = json!([{"b": 1, "a": 2}]);
    assert_eq!(jsonify(&value).unwrap(), r#"[{"a":2,"b":1}]"#);
}

#[test]
fn test_dejsonify() {
    let parsed: Settings =
        dejsonify(r#"{"zeta":7,"alpha":[-1,2],"nested":{"x":"c001","y":true}}"#).unwrap();
    assert_eq!(parsed, sample());
    assert!(dejsonify::<Settings>(r#"{"zeta":7}"#).is_err());
}

#[test]
fn test_load_json_inline() {
    let parsed: Settings = load_json(&jsonify(&sample()).unwrap()).unwrap();
    assert_eq!(parsed, sample());
}

#[test]
fn test_load_json_missing_file() {
    assert!(load_json::<Settings>("/nonexistent/settings.json").is_err());
}

#[test]
fn test_compress_obj() {
    let compressed = compress_obj(&sample()).unwrap();
    let decompressed: Settings = decompress_obj(&compressed).unwrap();
    assert_eq!(decompressed, sample());
}
