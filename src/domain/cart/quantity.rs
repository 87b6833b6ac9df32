//! Loosely typed quantity input coming from clients.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::CartError;

/// A requested quantity as it arrived on the wire.
///
/// Clients send numbers, numeric strings, or garbage; `coerce` turns the
/// first two into an integer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Integer(i64),
    Fractional(f64),
    Text(String),
    Other(JsonValue),
}

impl QuantityInput {
    /// Converts the input to a whole number. Fractions are floored.
    ///
    /// # Errors
    ///
    /// Returns `CartError::InvalidQuantity` when the input is not numeric.
    pub fn coerce(&self) -> Result<i64, CartError> {
        match self {
            QuantityInput::Integer(n) => Ok(*n),
            QuantityInput::Fractional(f) => floor_finite(*f).ok_or_else(|| self.invalid()),
            QuantityInput::Text(s) => {
                let s = s.trim();
                if let Ok(n) = s.parse::<i64>() {
                    return Ok(n);
                }
                s.parse::<f64>()
                    .ok()
                    .and_then(floor_finite)
                    .ok_or_else(|| self.invalid())
            }
            QuantityInput::Other(_) => Err(self.invalid()),
        }
    }

    fn invalid(&self) -> CartError {
        let raw = match self {
            QuantityInput::Integer(n) => n.to_string(),
            QuantityInput::Fractional(f) => f.to_string(),
            QuantityInput::Text(s) => format!("\"{}\"", s),
            QuantityInput::Other(v) => v.to_string(),
        };
        CartError::invalid_quantity(raw)
    }
}

impl From<i64> for QuantityInput {
    fn from(n: i64) -> Self {
        QuantityInput::Integer(n)
    }
}

fn floor_finite(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let floored = f.floor();
    if floored < i64::MIN as f64 || floored > i64::MAX as f64 {
        return None;
    }
    Some(floored as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: JsonValue) -> QuantityInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn integers_pass_through() {
        assert_eq!(parse(json!(3)).coerce().unwrap(), 3);
        assert_eq!(parse(json!(-2)).coerce().unwrap(), -2);
    }

    #[test]
    fn fractions_are_floored() {
        assert_eq!(parse(json!(2.7)).coerce().unwrap(), 2);
    }

    #[test]
    fn numeric_strings_are_parsed() {
        assert_eq!(parse(json!(" 4 ")).coerce().unwrap(), 4);
        assert_eq!(parse(json!("1.5")).coerce().unwrap(), 1);
    }

    #[test]
    fn words_are_invalid() {
        let err = parse(json!("lots")).coerce().unwrap_err();
        assert!(matches!(err, CartError::InvalidQuantity { .. }));
    }

    #[test]
    fn null_and_objects_are_invalid() {
        assert!(parse(json!(null)).coerce().is_err());
        assert!(parse(json!({"n": 1})).coerce().is_err());
        assert!(parse(json!(true)).coerce().is_err());
    }
}
