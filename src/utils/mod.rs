//! Utility functions

pub mod currency;
pub mod precision;
pub mod safe;
pub mod time;

pub use currency::{check_address, CommonCurrencies, CurrencyCodes};
pub use precision::*;
pub use safe::*;
pub use time::{iso8601, ms_to_rounded_secs, now_ms, parse_date};

/// 타임스탬프가 있는 레코드
pub trait Timestamped {
    fn timestamp(&self) -> Option<i64>;
}

impl Timestamped for crate::types::Trade {
    fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }
}

impl Timestamped for crate::types::Order {
    fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }
}

impl Timestamped for crate::types::Transaction {
    fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }
}

/// `since` 이후 레코드만 남기고 최대 `limit`개로 자른다
///
/// Records without a timestamp are dropped when `since` is given.
pub fn filter_by_since_limit<T: Timestamped>(
    items: Vec<T>,
    since: Option<i64>,
    limit: Option<u32>,
) -> Vec<T> {
    let filtered = items.into_iter().filter(|item| match since {
        Some(since) => item.timestamp().is_some_and(|ts| ts >= since),
        None => true,
    });
    match limit {
        Some(limit) => filtered.take(limit as usize).collect(),
        None => filtered.collect(),
    }
}
