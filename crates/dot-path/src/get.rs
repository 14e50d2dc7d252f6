use serde_json::Value;

/// Get a value from a JSON document by dotted-path segments.
///
/// Objects are entered by key, arrays by numeric segment. The empty path
/// answers the document itself.
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for segment in path {
        match current {
            Value::Object(map) => {
                current = map.get(segment)?;
            }
            Value::Array(arr) => {
                let idx: usize = segment.parse().ok()?;
                current = arr.get(idx)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn walks_objects_and_arrays() {
        let doc = json!({"a": {"b": [10, {"c": true}]}});
        assert_eq!(get(&doc, &["a".into()]), Some(&json!({"b": [10, {"c": true}]})));
        assert_eq!(get(&doc, &["a".into(), "b".into(), "0".into()]), Some(&json!(10)));
        assert_eq!(
            get(&doc, &["a".into(), "b".into(), "1".into(), "c".into()]),
            Some(&json!(true))
        );
    }

    #[test]
    fn empty_path_answers_the_document() {
        let doc = json!(7);
        assert_eq!(get(&doc, &[]), Some(&doc));
    }

    #[test]
    fn missing_steps_answer_none() {
        let doc = json!({"a": [1]});
        assert_eq!(get(&doc, &["b".into()]), None);
        assert_eq!(get(&doc, &["a".into(), "9".into()]), None);
        assert_eq!(get(&doc, &["a".into(), "x".into()]), None);
        assert_eq!(get(&doc, &["a".into(), "0".into(), "y".into()]), None);
    }
}
