//! Advance payload decoding.
//!
//! A payload is hex-encoded UTF-8 JSON. Only two keys are consulted:
//!
//! ```json
//! {"method": "increment", "counter": 5}
//! ```
//!
//! Anything else in the object is ignored.

use serde_json::{Map, Number, Value};
use shared_types::{hex_to_string, U256};

use crate::domain::counter::next_counter;
use crate::error::{AdvanceError, AdvanceResult};

/// Loosely typed key/value view of a decoded payload.
pub type Payload = Map<String, Value>;

/// Decode a hex payload into a key/value map.
///
/// `null` decodes to an empty map; any other non-object JSON value is a
/// parse failure.
pub fn decode_payload(hex_payload: &str) -> AdvanceResult<Payload> {
    let text = hex_to_string(hex_payload)?;

    let value: Value =
        serde_json::from_str(&text).map_err(|e| AdvanceError::Parse(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(AdvanceError::Parse(format!(
            "expected a JSON object, found {}",
            json_type(&other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A recognized `increment` command.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterCommand {
    counter: Number,
}

impl CounterCommand {
    pub const METHOD_KEY: &'static str = "method";
    pub const COUNTER_KEY: &'static str = "counter";
    pub const INCREMENT: &'static str = "increment";

    /// Extract the command, if the payload carries one.
    ///
    /// Returns `None` unless `method` is the string `"increment"` and
    /// `counter` is a JSON number.
    pub fn from_payload(payload: &Payload) -> Option<Self> {
        let method = payload.get(Self::METHOD_KEY)?.as_str()?;
        if method != Self::INCREMENT {
            return None;
        }

        match payload.get(Self::COUNTER_KEY)? {
            Value::Number(counter) => Some(Self {
                counter: counter.clone(),
            }),
            _ => None,
        }
    }

    /// `floor(counter) + 1`.
    pub fn apply(&self) -> AdvanceResult<U256> {
        next_counter(&self.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvanceErrorKind;
    use shared_types::string_to_hex;

    fn decode(text: &str) -> AdvanceResult<Payload> {
        decode_payload(&string_to_hex(text))
    }

    #[test]
    fn test_decode_object() {
        let payload = decode(r#"{"method":"increment","counter":5}"#).unwrap();
        assert_eq!(payload.get("method").unwrap(), "increment");
    }

    #[test]
    fn test_decode_null_is_empty() {
        assert!(decode("null").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_non_object() {
        for text in ["[1,2]", "\"increment\"", "5", "true"] {
            let err = decode(text).unwrap_err();
            assert_eq!(err.kind(), AdvanceErrorKind::Parse, "{text}");
        }
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let err = decode("{method: increment").unwrap_err();
        assert_eq!(err.kind(), AdvanceErrorKind::Parse);
    }

    #[test]
    fn test_decode_rejects_bad_hex() {
        for hex in ["0x7", "0xzz", "0x7b7"] {
            let err = decode_payload(hex).unwrap_err();
            assert_eq!(err.kind(), AdvanceErrorKind::Decode, "{hex}");
        }
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let err = decode_payload("0xc328").unwrap_err();
        assert_eq!(err.kind(), AdvanceErrorKind::Decode);
    }

    #[test]
    fn test_command_requires_increment_method() {
        let payload = decode(r#"{"method":"decrement","counter":5}"#).unwrap();
        assert!(CounterCommand::from_payload(&payload).is_none());

        let payload = decode(r#"{"counter":5}"#).unwrap();
        assert!(CounterCommand::from_payload(&payload).is_none());

        let payload = decode(r#"{"method":7,"counter":5}"#).unwrap();
        assert!(CounterCommand::from_payload(&payload).is_none());
    }

    #[test]
    fn test_command_requires_numeric_counter() {
        for text in [
            r#"{"method":"increment"}"#,
            r#"{"method":"increment","counter":"5"}"#,
            r#"{"method":"increment","counter":null}"#,
            r#"{"counter":"abc"}"#,
        ] {
            let payload = decode(text).unwrap();
            assert!(CounterCommand::from_payload(&payload).is_none(), "{text}");
        }
    }

    #[test]
    fn test_command_applies_increment() {
        let payload = decode(r#"{"method":"increment","counter":5,"extra":[1]}"#).unwrap();
        let command = CounterCommand::from_payload(&payload).unwrap();
        assert_eq!(command.apply().unwrap(), U256::from(6u64));
    }

    #[test]
    fn test_negative_zero_counter_applies() {
        let payload = decode(r#"{"method":"increment","counter":-0}"#).unwrap();
        let command = CounterCommand::from_payload(&payload).unwrap();
        assert_eq!(command.apply().unwrap(), U256::one());
    }
}
