//! Turning raw BatchData responses into tool output text.
//!
//! Responses are passed through untyped; the only thing ever read from them is
//! how many properties they describe.

use serde_json::{Number, Value};

use super::error::BatchDataResult;

/// How a response reports the number of matching properties.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// An explicit non-zero `totalCount` or `total`, kept as the API wrote it.
    Counted(Number),
    /// A `properties` array and no usable count field.
    Listed(usize),
    /// Neither of the above.
    Bare,
}

impl ResponseShape {
    /// Classify a response. `totalCount` wins over `total`; zero counts fall through.
    pub fn classify(response: &Value) -> Self {
        let count = ["totalCount", "total"]
            .iter()
            .find_map(|key| count_of(response.get(key)?));

        if let Some(count) = count {
            return Self::Counted(count);
        }

        match response.get("properties").and_then(Value::as_array) {
            Some(properties) => Self::Listed(properties.len()),
            None => Self::Bare,
        }
    }

    /// Number of properties described by the response, `0` when unknown.
    pub fn total(&self) -> Number {
        match self {
            Self::Counted(count) => count.clone(),
            Self::Listed(len) => Number::from(*len),
            Self::Bare => Number::from(0u8),
        }
    }
}

/// A usable count: any non-zero number, or a string holding one.
fn count_of(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) if n.is_f64() => n.as_f64().and_then(number_from),
        Value::Number(n) => (n.as_f64() != Some(0.0)).then(|| n.clone()),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(number_from),
        _ => None,
    }
}

fn number_from(n: f64) -> Option<Number> {
    if !n.is_finite() || n == 0.0 {
        return None;
    }
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        return Some(Number::from(n as i64));
    }
    Number::from_f64(n)
}

/// Pretty-printed JSON, returned verbatim by the non-counting tools.
pub fn pretty(response: &Value) -> BatchDataResult<String> {
    Ok(serde_json::to_string_pretty(response)?)
}

/// Summary line followed by the full payload.
pub fn with_total(response: &Value, describe: impl FnOnce(Number) -> String) -> BatchDataResult<String> {
    let total = ResponseShape::classify(response).total();
    Ok(format!("{}\n\n{}", describe(total), pretty(response)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_total_count_wins() {
        let response = json!({"totalCount": 42, "total": 7, "properties": [1]});
        assert_eq!(ResponseShape::classify(&response), ResponseShape::Counted(42.into()));
    }

    #[test]
    fn test_falls_back_to_total() {
        let response = json!({"total": 7, "properties": [1, 2]});
        assert_eq!(ResponseShape::classify(&response).total(), Number::from(7));
    }

    #[test]
    fn test_zero_count_falls_through_to_list() {
        let response = json!({"totalCount": 0, "properties": [1, 2]});
        assert_eq!(ResponseShape::classify(&response), ResponseShape::Listed(2));
    }

    #[test]
    fn test_properties_length() {
        let response = json!({"properties": [1, 2, 3]});
        assert_eq!(ResponseShape::classify(&response), ResponseShape::Listed(3));
    }

    #[test]
    fn test_bare_defaults_to_zero() {
        let response = json!({"status": {"code": 200}});
        assert_eq!(ResponseShape::classify(&response), ResponseShape::Bare);
        assert_eq!(ResponseShape::Bare.total(), Number::from(0));
        assert_eq!(ResponseShape::classify(&json!([])).total(), Number::from(0));
    }

    #[test]
    fn test_float_count() {
        assert_eq!(
            ResponseShape::classify(&json!({"total": 12.0})).total(),
            Number::from(12)
        );
    }

    #[test]
    fn test_fractional_count_is_kept() {
        let total = ResponseShape::classify(&json!({"totalCount": 2.5})).total();
        assert_eq!(total.to_string(), "2.5");
    }

    #[test]
    fn test_numeric_string_count() {
        let shape = ResponseShape::classify(&json!({"total": "12", "properties": [1]}));
        assert_eq!(shape, ResponseShape::Counted(12.into()));
        assert_eq!(format!("Found {} properties", shape.total()), "Found 12 properties");

        let shape = ResponseShape::classify(&json!({"total": "0", "properties": [1, 2]}));
        assert_eq!(shape, ResponseShape::Listed(2));

        let shape = ResponseShape::classify(&json!({"total": "many", "properties": []}));
        assert_eq!(shape, ResponseShape::Listed(0));
    }

    #[test]
    fn test_with_total_prefixes_summary() {
        let response = json!({"properties": [1, 2, 3]});
        let text = with_total(&response, |n| format!("Found {n} properties:")).unwrap();
        assert!(text.starts_with("Found 3 properties:\n\n{"));
        assert!(text.ends_with(&pretty(&response).unwrap()));
    }
}
