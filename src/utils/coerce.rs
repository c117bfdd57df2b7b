//! Lenient `serde` field adapters for the untyped create payload.
//!
//! Clients send whatever JSON they have at hand, so scalars are accepted in
//! any reasonable textual or numeric form. `null` and absent keys both come
//! out as `None` and are left to the `required` validation rule.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Strings as-is, numbers and booleans in their textual form.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected a string, found {}", other))),
    }
}

/// Integers in range, floats truncated to an integer, and strings holding an
/// integer.
pub fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => number_to_i32(&n)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("{} is not a 32-bit integer", n))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("`{}` is not a 32-bit integer", s))),
        Some(other) => Err(D::Error::custom(format!("expected an integer, found {}", other))),
    }
}

fn number_to_i32(n: &Number) -> Option<i32> {
    if let Some(i) = n.as_i64() {
        return i32::try_from(i).ok();
    }
    if n.is_u64() {
        return None;
    }
    // fractional salaries are truncated toward zero
    n.as_f64()
        .filter(|f| f.is_finite())
        .map(f64::trunc)
        .filter(|t| *t >= i32::MIN as f64 && *t <= i32::MAX as f64)
        .map(|t| t as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize, Debug)]
    struct Fields {
        #[serde(default, deserialize_with = "lenient_string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "lenient_i32")]
        number: Option<i32>,
    }

    fn parse(value: Value) -> Result<Fields, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn strings_accept_scalars() {
        assert_eq!(parse(json!({ "text": "30" })).unwrap().text.as_deref(), Some("30"));
        assert_eq!(parse(json!({ "text": 30 })).unwrap().text.as_deref(), Some("30"));
        assert_eq!(parse(json!({ "text": true })).unwrap().text.as_deref(), Some("true"));
        assert!(parse(json!({ "text": ["a"] })).is_err());
    }

    #[test]
    fn integers_accept_numeric_text_and_truncate_floats() {
        assert_eq!(parse(json!({ "number": 50000 })).unwrap().number, Some(50000));
        assert_eq!(parse(json!({ "number": " 42 " })).unwrap().number, Some(42));
        assert_eq!(parse(json!({ "number": 7.0 })).unwrap().number, Some(7));
        assert_eq!(parse(json!({ "number": -3 })).unwrap().number, Some(-3));
        assert_eq!(parse(json!({ "number": 7.5 })).unwrap().number, Some(7));
        assert_eq!(parse(json!({ "number": -7.9 })).unwrap().number, Some(-7));
    }

    #[test]
    fn integers_reject_garbage_and_overflow() {
        assert!(parse(json!({ "number": "Wrong" })).is_err());
        assert!(parse(json!({ "number": "7.5" })).is_err());
        assert!(parse(json!({ "number": 3_000_000_000u64 })).is_err());
        assert!(parse(json!({ "number": 3.0e9 })).is_err());
        assert!(parse(json!({ "number": u64::MAX })).is_err());
        assert!(parse(json!({ "number": { "amount": 1 } })).is_err());
    }

    #[test]
    fn null_and_absent_are_none() {
        let parsed = parse(json!({ "text": null })).unwrap();
        assert_eq!(parsed.text, None);
        assert_eq!(parsed.number, None);
    }
}
