//! Ticker type - 시세 정보

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::iso8601;

/// 시세 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// 심볼
    pub symbol: String,
    /// 타임스탬프 (밀리초)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// ISO 8601 datetime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    /// 고가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Decimal>,
    /// 저가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Decimal>,
    /// 최고 매수호가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid: Option<Decimal>,
    /// 최저 매도호가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ask: Option<Decimal>,
    /// 시가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<Decimal>,
    /// 종가 (= last)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<Decimal>,
    /// 최종 거래가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<Decimal>,
    /// 가격 변동
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<Decimal>,
    /// 가격 변동률 (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Decimal>,
    /// 원본 응답
    #[serde(default)]
    pub info: serde_json::Value,
}

impl Ticker {
    /// 새 Ticker 생성
    pub fn new(symbol: String) -> Self {
        Self {
            symbol,
            timestamp: None,
            datetime: None,
            high: None,
            low: None,
            bid: None,
            ask: None,
            open: None,
            close: None,
            last: None,
            change: None,
            percentage: None,
            info: serde_json::Value::Null,
        }
    }

    /// 타임스탬프 설정
    pub fn with_timestamp(mut self, ts: i64) -> Self {
        self.timestamp = Some(ts);
        self.datetime = iso8601(ts);
        self
    }

    /// 최종 거래가 설정 (close 동일)
    pub fn with_last(mut self, last: Option<Decimal>) -> Self {
        self.last = last;
        self.close = last;
        self
    }

    /// 스프레드 (ask - bid)
    pub fn spread(&self) -> Option<Decimal> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ticker_builder() {
        let mut ticker = Ticker::new("BTC/AED".into())
            .with_timestamp(1700000000000)
            .with_last(Some(dec!(903.99)));
        ticker.bid = Some(dec!(897.32));
        ticker.ask = Some(dec!(916.64));

        assert_eq!(ticker.symbol, "BTC/AED");
        assert_eq!(ticker.close, ticker.last);
        assert_eq!(ticker.spread(), Some(dec!(19.32)));
        assert!(ticker.datetime.is_some());
    }
}
