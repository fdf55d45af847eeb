//! Response body handling shared by every data source.
//!
//! Backends answer either with a bare JSON array or with an envelope
//! `{ "data": [...] }`. A `data` member is used only when it is truthy;
//! `null`, `false`, `0`, `""` and a missing member fall back to the body.

use serde_json::Value;

use crate::backend::FetchError;
use crate::core::endpoint::EndpointDescriptor;
use crate::core::record::Record;

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Unwraps, truncates to the endpoint limit and maps elements to records.
pub fn extract_records(endpoint: &EndpointDescriptor, body: Value) -> Result<Vec<Record>, FetchError> {
    let payload = match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) if is_truthy(&data) => data,
            Some(data) => {
                map.insert("data".to_string(), data);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    };

    match payload {
        Value::Array(items) => Ok(items
            .into_iter()
            .take(endpoint.limit)
            .map(|item| Record::from_value(endpoint.key, item))
            .collect()),
        other => Err(FetchError::Shape {
            endpoint: endpoint.key,
            found: describe(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::endpoint::EndpointKey;
    use serde_json::json;

    fn posts(limit: usize) -> EndpointDescriptor {
        EndpointDescriptor::new(EndpointKey::Posts, "http://localhost", limit)
    }

    #[test]
    fn test_unwraps_data_envelope() {
        let body = json!({"success": true, "data": [{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]});
        let records = extract_records(&posts(15), body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text_field("title"), Some("A"));
        assert_eq!(records[1].id(), Some(2));
    }

    #[test]
    fn test_bare_array_used_directly() {
        let body = json!([{"id": 1}, {"id": 2}, {"id": 3}]);
        assert_eq!(extract_records(&posts(15), body).unwrap().len(), 3);
    }

    #[test]
    fn test_truncates_to_limit() {
        let body = json!((1..=30).map(|i| json!({"id": i})).collect::<Vec<_>>());
        let records = extract_records(&posts(15), body).unwrap();
        assert_eq!(records.len(), 15);
        assert_eq!(records.last().and_then(Record::id), Some(15));
    }

    #[test]
    fn test_zero_limit_yields_empty_list() {
        let body = json!([{"id": 1}]);
        assert!(extract_records(&posts(0), body).unwrap().is_empty());
    }

    #[test]
    fn test_empty_data_array_is_used() {
        // An empty array is truthy, so it is unwrapped rather than falling back.
        let body = json!({"data": []});
        assert!(extract_records(&posts(15), body).unwrap().is_empty());
    }

    #[test]
    fn test_falsy_data_falls_back_to_body() {
        let body = json!({"data": null, "message": "nothing"});
        let err = extract_records(&posts(15), body).unwrap_err();
        assert!(matches!(err, FetchError::Shape { found: "an object", .. }));
    }

    #[test]
    fn test_non_list_data_is_shape_error() {
        let body = json!({"data": "oops"});
        let err = extract_records(&posts(15), body).unwrap_err();
        assert!(matches!(err, FetchError::Shape { found: "a string", .. }));
    }
}
