//! Time utilities

use chrono::{DateTime, SecondsFormat, Utc};

/// 현재 UTC 타임스탬프 (밀리초)
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// 밀리초 타임스탬프를 ISO 8601 문자열로 변환 (`2017-12-12T14:33:52.000Z`)
pub fn iso8601(ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// ISO 8601 문자열을 밀리초 타임스탬프로 변환
pub fn parse_date(value: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.timestamp_millis())
        .ok()
}

/// 밀리초를 반올림된 초로 변환 (x.5 → 올림)
pub fn ms_to_rounded_secs(ms: i64) -> i64 {
    (ms + 500).div_euclid(1000)
}
