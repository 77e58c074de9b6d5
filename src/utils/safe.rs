//! Safe helper functions for extracting values from JSON
//!
//! 누락되었거나 null인 필드는 `None`으로 처리한다. 숫자는 JSON 문자열과
//! 숫자 모두 허용한다.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use super::time::parse_date;

/// 안전한 문자열 추출
pub fn safe_string(obj: &Value, key: &str) -> Option<String> {
    obj.get(key).and_then(|v| match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// 두 키 중 하나에서 문자열 추출
pub fn safe_string2(obj: &Value, key1: &str, key2: &str) -> Option<String> {
    safe_string(obj, key1).or_else(|| safe_string(obj, key2))
}

/// 소문자 문자열 추출
pub fn safe_string_lower(obj: &Value, key: &str) -> Option<String> {
    safe_string(obj, key).map(|s| s.to_lowercase())
}

/// 안전한 정수 추출
pub fn safe_integer(obj: &Value, key: &str) -> Option<i64> {
    obj.get(key).and_then(|v| match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    })
}

/// 정수 * 배수 (초 → 밀리초 등)
pub fn safe_integer_product(obj: &Value, key: &str, factor: i64) -> Option<i64> {
    safe_integer(obj, key).and_then(|v| v.checked_mul(factor))
}

/// JSON 값 하나를 Decimal로 변환
pub fn to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) if !s.is_empty() => Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .ok(),
        Value::Number(n) => {
            let raw = n.to_string();
            Decimal::from_str(&raw)
                .or_else(|_| Decimal::from_scientific(&raw))
                .ok()
        },
        _ => None,
    }
}

/// 안전한 Decimal 추출
pub fn safe_decimal(obj: &Value, key: &str) -> Option<Decimal> {
    obj.get(key).and_then(to_decimal)
}

/// ISO 8601 문자열 타임스탬프 추출 (밀리초)
pub fn safe_timestamp(obj: &Value, key: &str) -> Option<i64> {
    safe_string(obj, key).and_then(|s| parse_date(&s))
}

/// 안전한 값 추출
pub fn safe_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

/// 두 키 중 하나에서 값 추출
pub fn safe_value2<'a>(obj: &'a Value, key1: &str, key2: &str) -> Option<&'a Value> {
    safe_value(obj, key1).or_else(|| safe_value(obj, key2))
}

/// 배열 값 추출
pub fn safe_array<'a>(obj: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    obj.get(key).and_then(Value::as_array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_safe_string_coerces_scalars() {
        let obj = json!({"id": 12345, "pair": "BTC-AED", "active": true, "gone": null});
        assert_eq!(safe_string(&obj, "id"), Some("12345".to_string()));
        assert_eq!(safe_string(&obj, "pair"), Some("BTC-AED".to_string()));
        assert_eq!(safe_string(&obj, "active"), Some("true".to_string()));
        assert_eq!(safe_string(&obj, "gone"), None);
        assert_eq!(safe_string(&obj, "missing"), None);
    }

    #[test]
    fn test_safe_string2_and_lower() {
        let obj = json!({"side": "BUY"});
        assert_eq!(safe_string2(&obj, "type", "side"), Some("BUY".to_string()));
        assert_eq!(safe_string_lower(&obj, "side"), Some("buy".to_string()));
    }

    #[test]
    fn test_safe_integer() {
        let obj = json!({"a": 1481553232, "b": "100", "c": "x"});
        assert_eq!(safe_integer(&obj, "a"), Some(1481553232));
        assert_eq!(safe_integer(&obj, "b"), Some(100));
        assert_eq!(safe_integer(&obj, "c"), None);
        assert_eq!(safe_integer_product(&obj, "a", 1000), Some(1481553232000));
    }

    #[test]
    fn test_safe_decimal_from_string_and_number() {
        let obj = json!({"s": "778.4", "n": 0.01, "e": "", "sci": "1e-8", "o": {}});
        assert_eq!(safe_decimal(&obj, "s"), Some(dec!(778.4)));
        assert_eq!(safe_decimal(&obj, "n"), Some(dec!(0.01)));
        assert_eq!(safe_decimal(&obj, "e"), None);
        assert_eq!(safe_decimal(&obj, "sci"), Some(dec!(0.00000001)));
        assert_eq!(safe_decimal(&obj, "o"), None);
    }

    #[test]
    fn test_safe_timestamp_iso() {
        let obj = json!({"date_created": "2017-12-12T14:33:52.000Z", "bad": "yesterday"});
        assert_eq!(safe_timestamp(&obj, "date_created"), Some(1513089232000));
        assert_eq!(safe_timestamp(&obj, "bad"), None);
    }

    #[test]
    fn test_safe_value_skips_null() {
        let obj = json!({"order": null, "deposit": {"id": 1}, "list": [1, 2]});
        assert!(safe_value(&obj, "order").is_none());
        assert!(safe_value2(&obj, "order", "deposit").is_some());
        assert_eq!(safe_array(&obj, "list").map(Vec::len), Some(2));
        assert!(safe_array(&obj, "deposit").is_none());
    }
}
