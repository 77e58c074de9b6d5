//! OrderBook type - 호가창

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::iso8601;

/// 호가창
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    /// 심볼
    #[serde(default)]
    pub symbol: String,
    /// 타임스탬프 (밀리초)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timestamp: Option<i64>,
    /// ISO 8601 datetime
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub datetime: Option<String>,
    /// 매수호가 (가격순 내림차순)
    #[serde(default)]
    pub bids: Vec<OrderBookEntry>,
    /// 매도호가 (가격순 오름차순)
    #[serde(default)]
    pub asks: Vec<OrderBookEntry>,
    /// 호가 시퀀스 번호
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nonce: Option<i64>,
}

/// 호가 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookEntry {
    /// 가격
    pub price: Decimal,
    /// 수량
    pub amount: Decimal,
}

impl OrderBookEntry {
    pub fn new(price: Decimal, amount: Decimal) -> Self {
        Self { price, amount }
    }
}

impl OrderBook {
    /// 새 OrderBook 생성
    pub fn new(symbol: String) -> Self {
        Self {
            symbol,
            ..Default::default()
        }
    }

    /// 타임스탬프 설정
    pub fn with_timestamp(mut self, ts: i64) -> Self {
        self.timestamp = Some(ts);
        self.datetime = iso8601(ts);
        self
    }

    /// 호가 정렬 (bids 내림차순, asks 오름차순)
    pub fn sort(&mut self) {
        self.bids.sort_by(|a, b| b.price.cmp(&a.price));
        self.asks.sort_by(|a, b| a.price.cmp(&b.price));
    }

    /// 최고 매수호가
    pub fn best_bid(&self) -> Option<&OrderBookEntry> {
        self.bids.first()
    }

    /// 최저 매도호가
    pub fn best_ask(&self) -> Option<&OrderBookEntry> {
        self.asks.first()
    }

    /// 스프레드
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.price - bid.price),
            _ => None,
        }
    }
}
