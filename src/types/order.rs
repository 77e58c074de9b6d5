//! Order type - 주문 정보

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Fee;
use crate::utils::iso8601;

/// 주문 상태
///
/// Statuses the exchange reports that have no canonical counterpart are kept
/// verbatim in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Open,
    Closed,
    Canceled,
    Expired,
    Rejected,
    Unknown(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::Closed => "closed",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Expired => "expired",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Unknown(raw) => raw,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "open" => OrderStatus::Open,
            "closed" => OrderStatus::Closed,
            "canceled" => OrderStatus::Canceled,
            "expired" => OrderStatus::Expired,
            "rejected" => OrderStatus::Rejected,
            _ => OrderStatus::Unknown(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 주문 측면
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }
}

/// 주문 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Limit,
    Market,
    Stop,
    StopLimit,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Limit => "limit",
            OrderType::Market => "market",
            OrderType::Stop => "stop",
            OrderType::StopLimit => "stop_limit",
        }
    }

    /// 지정가가 필요한 주문 타입인지
    pub fn requires_price(&self) -> bool {
        matches!(self, OrderType::Limit | OrderType::StopLimit)
    }

    /// 스탑 가격이 필요한 주문 타입인지
    pub fn requires_stop_price(&self) -> bool {
        matches!(self, OrderType::Stop | OrderType::StopLimit)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 주문 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// 주문 ID
    pub id: String,
    /// 타임스탬프 (밀리초)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// ISO 8601 datetime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    /// 최종 체결 타임스탬프
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_trade_timestamp: Option<i64>,
    /// 주문 상태
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// 심볼
    pub symbol: String,
    /// 주문 타입 (거래소 표기, 소문자)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    /// 매수/매도
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// 주문 가격
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// 평균 체결가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<Decimal>,
    /// 주문 수량 (base 화폐)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// 체결된 수량
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filled: Option<Decimal>,
    /// 미체결 수량
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<Decimal>,
    /// 총 비용 (quote 화폐)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
    /// 수수료
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
    /// 원본 응답
    #[serde(default)]
    pub info: serde_json::Value,
}

impl Order {
    /// 새 주문 생성
    pub fn new(id: String, symbol: String) -> Self {
        Self {
            id,
            timestamp: None,
            datetime: None,
            last_trade_timestamp: None,
            status: None,
            symbol,
            order_type: None,
            side: None,
            price: None,
            average: None,
            amount: None,
            filled: None,
            remaining: None,
            cost: None,
            fee: None,
            info: serde_json::Value::Null,
        }
    }

    /// 타임스탬프 설정
    pub fn with_timestamp(mut self, ts: Option<i64>) -> Self {
        self.timestamp = ts;
        self.datetime = ts.and_then(iso8601);
        self
    }

    /// 상태 설정
    pub fn with_status(mut self, status: Option<OrderStatus>) -> Self {
        self.status = status;
        self
    }

    /// 미체결 여부
    pub fn is_open(&self) -> bool {
        self.status == Some(OrderStatus::Open)
    }

    /// 체결 완료 여부
    pub fn is_closed(&self) -> bool {
        self.status == Some(OrderStatus::Closed)
    }

    /// 취소됨 여부
    pub fn is_canceled(&self) -> bool {
        self.status == Some(OrderStatus::Canceled)
    }
}

/// 주문 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// 심볼 (예: "BTC/AED")
    pub symbol: String,
    /// 주문 타입
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// 매수/매도
    pub side: OrderSide,
    /// 주문 수량
    pub amount: Decimal,
    /// 주문 가격 (지정가 주문시)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// 스탑 가격 (스탑 주문시)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
}

impl OrderRequest {
    /// 새 주문 요청 생성
    pub fn new(symbol: &str, order_type: OrderType, side: OrderSide, amount: Decimal) -> Self {
        Self {
            symbol: symbol.to_string(),
            order_type,
            side,
            amount,
            price: None,
            stop_price: None,
        }
    }

    /// 지정가 주문 요청
    pub fn limit(symbol: &str, side: OrderSide, amount: Decimal, price: Decimal) -> Self {
        Self::new(symbol, OrderType::Limit, side, amount).with_price(price)
    }

    /// 시장가 주문 요청
    pub fn market(symbol: &str, side: OrderSide, amount: Decimal) -> Self {
        Self::new(symbol, OrderType::Market, side, amount)
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_stop_price(mut self, stop_price: Decimal) -> Self {
        self.stop_price = Some(stop_price);
        self
    }
}
