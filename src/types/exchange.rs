//! Exchange trait - Unified exchange interface

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{
    Balances, DepositAddress, Market, Order, OrderBook, OrderSide, OrderType, Ticker, Trade,
    Transaction,
};
use crate::errors::{CcxtError, CcxtResult};

/// Exchange ID - identifies the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeId {
    Bitoasis,
}

impl ExchangeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeId::Bitoasis => "bitoasis",
        }
    }
}

impl std::fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exchange feature flags - indicates supported functionality
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeFeatures {
    // === Market Types ===
    pub spot: bool,

    // === Public API ===
    pub fetch_markets: bool,
    pub fetch_ticker: bool,
    pub fetch_order_book: bool,
    pub fetch_trades: bool,

    // === Private Trading API ===
    pub fetch_balance: bool,
    pub create_order: bool,
    pub create_stop_order: bool,
    pub create_stop_limit_order: bool,
    pub cancel_order: bool,
    pub fetch_order: bool,
    pub fetch_orders: bool,
    pub fetch_open_orders: bool,
    pub fetch_closed_orders: bool,

    // === Account/Wallet ===
    pub fetch_deposit: bool,
    pub fetch_deposits: bool,
    pub fetch_withdrawal: bool,
    pub fetch_withdrawals: bool,
    pub fetch_deposit_address: bool,
    pub withdraw: bool,
}

/// 거래소 URL 정보
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeUrls {
    pub logo: Option<String>,
    pub api: HashMap<String, String>,
    pub www: Option<String>,
    pub doc: Vec<String>,
    pub fees: Option<String>,
}

/// 서명된 요청
#[derive(Debug, Clone, PartialEq)]
pub struct SignedRequest {
    pub url: String,
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

/// 거래소 통합 인터페이스
///
/// 구현체가 지원하지 않는 기능은 기본 구현이 `NotSupported`를 반환한다.
#[async_trait]
pub trait Exchange: Send + Sync {
    // === 메타데이터 ===

    /// 거래소 ID
    fn id(&self) -> ExchangeId;

    /// 거래소 이름
    fn name(&self) -> &str;

    /// API 버전
    fn version(&self) -> &str {
        "v1"
    }

    /// 국가 목록
    fn countries(&self) -> &[&str] {
        &[]
    }

    /// 레이트 리밋 (밀리초)
    fn rate_limit(&self) -> u64 {
        1000
    }

    /// 지원 기능
    fn has(&self) -> &ExchangeFeatures;

    /// 특정 기능 지원 여부
    fn has_feature(&self, feature: &str) -> bool {
        let features = self.has();
        match feature {
            "spot" => features.spot,
            "fetchMarkets" => features.fetch_markets,
            "fetchTicker" => features.fetch_ticker,
            "fetchOrderBook" => features.fetch_order_book,
            "fetchTrades" => features.fetch_trades,
            "fetchBalance" => features.fetch_balance,
            "createOrder" => features.create_order,
            "createStopOrder" => features.create_stop_order,
            "createStopLimitOrder" => features.create_stop_limit_order,
            "cancelOrder" => features.cancel_order,
            "fetchOrder" => features.fetch_order,
            "fetchOrders" => features.fetch_orders,
            "fetchOpenOrders" => features.fetch_open_orders,
            "fetchClosedOrders" => features.fetch_closed_orders,
            "fetchDeposit" => features.fetch_deposit,
            "fetchDeposits" => features.fetch_deposits,
            "fetchWithdrawal" => features.fetch_withdrawal,
            "fetchWithdrawals" => features.fetch_withdrawals,
            "fetchDepositAddress" => features.fetch_deposit_address,
            "withdraw" => features.withdraw,
            _ => false,
        }
    }

    /// URL 정보
    fn urls(&self) -> &ExchangeUrls;

    // === Public API ===

    /// 마켓 로드 (캐싱)
    async fn load_markets(&self, reload: bool) -> CcxtResult<HashMap<String, Market>>;

    /// 마켓 목록 조회
    async fn fetch_markets(&self) -> CcxtResult<Vec<Market>>;

    /// 시세 조회
    async fn fetch_ticker(&self, symbol: &str) -> CcxtResult<Ticker>;

    /// 호가창 조회
    async fn fetch_order_book(&self, symbol: &str, limit: Option<u32>) -> CcxtResult<OrderBook>;

    /// 체결 내역 조회
    async fn fetch_trades(
        &self,
        symbol: &str,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Trade>>;

    // === Private API ===

    /// 잔고 조회
    async fn fetch_balance(&self) -> CcxtResult<Balances>;

    /// 주문 생성
    ///
    /// Not idempotent: resubmitting after a transport failure may place a
    /// second order.
    async fn create_order(
        &self,
        symbol: &str,
        order_type: OrderType,
        side: OrderSide,
        amount: Decimal,
        price: Option<Decimal>,
    ) -> CcxtResult<Order>;

    /// 지정가 주문 생성
    async fn create_limit_order(
        &self,
        symbol: &str,
        side: OrderSide,
        amount: Decimal,
        price: Decimal,
    ) -> CcxtResult<Order> {
        self.create_order(symbol, OrderType::Limit, side, amount, Some(price))
            .await
    }

    /// 시장가 주문 생성
    async fn create_market_order(
        &self,
        symbol: &str,
        side: OrderSide,
        amount: Decimal,
    ) -> CcxtResult<Order> {
        self.create_order(symbol, OrderType::Market, side, amount, None)
            .await
    }

    /// 스탑 주문 생성
    async fn create_stop_order(
        &self,
        symbol: &str,
        order_type: OrderType,
        side: OrderSide,
        amount: Decimal,
        price: Option<Decimal>,
        stop_price: Decimal,
    ) -> CcxtResult<Order> {
        let _ = (symbol, order_type, side, amount, price, stop_price);
        Err(CcxtError::NotSupported {
            feature: "createStopOrder".into(),
        })
    }

    /// 스탑 지정가 주문 생성
    async fn create_stop_limit_order(
        &self,
        symbol: &str,
        side: OrderSide,
        amount: Decimal,
        price: Decimal,
        stop_price: Decimal,
    ) -> CcxtResult<Order> {
        self.create_stop_order(symbol, OrderType::StopLimit, side, amount, Some(price), stop_price)
            .await
    }

    /// 주문 취소
    async fn cancel_order(&self, id: &str) -> CcxtResult<Order>;

    /// 주문 조회
    async fn fetch_order(&self, id: &str) -> CcxtResult<Order>;

    /// 전체 주문 목록
    async fn fetch_orders(
        &self,
        symbol: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Order>> {
        let _ = (symbol, since, limit);
        Err(CcxtError::NotSupported {
            feature: "fetchOrders".into(),
        })
    }

    /// 미체결 주문 목록
    async fn fetch_open_orders(
        &self,
        symbol: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Order>> {
        let _ = (symbol, since, limit);
        Err(CcxtError::NotSupported {
            feature: "fetchOpenOrders".into(),
        })
    }

    /// 체결 완료 주문 목록
    async fn fetch_closed_orders(
        &self,
        symbol: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Order>> {
        let _ = (symbol, since, limit);
        Err(CcxtError::NotSupported {
            feature: "fetchClosedOrders".into(),
        })
    }

    // === 입출금 ===

    /// 입금 내역
    async fn fetch_deposits(
        &self,
        code: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Transaction>> {
        let _ = (code, since, limit);
        Err(CcxtError::NotSupported {
            feature: "fetchDeposits".into(),
        })
    }

    /// 출금 내역
    async fn fetch_withdrawals(
        &self,
        code: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Transaction>> {
        let _ = (code, since, limit);
        Err(CcxtError::NotSupported {
            feature: "fetchWithdrawals".into(),
        })
    }

    /// 출금 요청
    ///
    /// Not idempotent, see [`Exchange::create_order`].
    async fn withdraw(
        &self,
        code: &str,
        amount: Decimal,
        address: &str,
        tag: Option<&str>,
    ) -> CcxtResult<Transaction> {
        let _ = (code, amount, address, tag);
        Err(CcxtError::NotSupported {
            feature: "withdraw".into(),
        })
    }

    /// 입금 주소 조회
    async fn fetch_deposit_address(&self, code: &str) -> CcxtResult<DepositAddress> {
        let _ = code;
        Err(CcxtError::NotSupported {
            feature: "fetchDepositAddress".into(),
        })
    }

    // === Utilities ===

    /// Convert symbol to market ID
    fn market_id(&self, symbol: &str) -> Option<String>;

    /// Convert market ID to symbol
    fn symbol(&self, market_id: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_id() {
        assert_eq!(ExchangeId::Bitoasis.as_str(), "bitoasis");
        assert_eq!(format!("{}", ExchangeId::Bitoasis), "bitoasis");
        assert_eq!(
            serde_json::to_string(&ExchangeId::Bitoasis).unwrap(),
            "\"bitoasis\""
        );
    }

    #[test]
    fn test_features_default_to_unsupported() {
        let features = ExchangeFeatures::default();
        assert!(!features.spot);
        assert!(!features.fetch_ticker);
    }

    #[test]
    fn test_features_serialize_camel_case() {
        let features = ExchangeFeatures {
            fetch_deposit_address: true,
            ..Default::default()
        };
        let value = serde_json::to_value(&features).unwrap();
        assert_eq!(value["fetchDepositAddress"], true);
        assert_eq!(value["spot"], false);
        assert!(value.get("ws").is_none());
    }
}
