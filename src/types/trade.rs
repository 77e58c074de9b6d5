//! Trade type - 체결 내역

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::iso8601;

/// 체결 내역
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// 체결 ID
    pub id: String,
    /// 타임스탬프 (밀리초)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// ISO 8601 datetime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    /// 심볼
    pub symbol: String,
    /// 매수/매도
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// 체결 가격
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// 체결 수량
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// 체결 금액 (price * amount)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
    /// 원본 응답
    #[serde(default)]
    pub info: serde_json::Value,
}

impl Trade {
    /// 새 Trade 생성
    pub fn new(
        id: String,
        symbol: String,
        price: Option<Decimal>,
        amount: Option<Decimal>,
    ) -> Self {
        let cost = match (price, amount) {
            (Some(p), Some(a)) => Some(p * a),
            _ => None,
        };
        Self {
            id,
            timestamp: None,
            datetime: None,
            symbol,
            side: None,
            price,
            amount,
            cost,
            info: serde_json::Value::Null,
        }
    }

    /// 타임스탬프 설정
    pub fn with_timestamp(mut self, ts: Option<i64>) -> Self {
        self.timestamp = ts;
        self.datetime = ts.and_then(iso8601);
        self
    }

    /// 매수인지 확인
    pub fn is_buy(&self) -> bool {
        self.side.as_deref() == Some("buy")
    }

    /// 매도인지 확인
    pub fn is_sell(&self) -> bool {
        self.side.as_deref() == Some("sell")
    }
}
