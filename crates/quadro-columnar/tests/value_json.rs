use quadro_columnar::{ColumnType, Value};
use serde_json::json;

#[test]
fn value_serializes_with_tagged_layout() {
    assert_eq!(
        serde_json::to_value(Value::Int(7)).unwrap(),
        json!({"type": "int", "value": 7})
    );
    assert_eq!(
        serde_json::to_value(Value::String("a".to_string())).unwrap(),
        json!({"type": "string", "value": "a"})
    );
    assert_eq!(
        serde_json::to_value(Value::Null).unwrap(),
        json!({"type": "null"})
    );

    let back: Value = serde_json::from_value(json!({"type": "float", "value": 1.5})).unwrap();
    assert_eq!(back, Value::Float(1.5));
}

#[test]
fn column_type_serializes_as_its_tag() {
    for (ty, tag) in [
        (ColumnType::Int, "int"),
        (ColumnType::Float, "float"),
        (ColumnType::String, "string"),
        (ColumnType::Bool, "bool"),
    ] {
        assert_eq!(serde_json::to_value(ty).unwrap(), json!(tag));
        assert_eq!(ty.name(), tag);
    }
}
