//! BitOasis Exchange Implementation
//!
//! UAE spot exchange. Private endpoints authenticate with a long-lived bearer
//! token; there is no per-request signing.

mod pair;
mod parse;
mod request;

pub use pair::{compose_pair, PairInfo};
pub use parse::{
    parse_balance, parse_deposit, parse_deposit_address, parse_deposit_status, parse_market,
    parse_markets, parse_order, parse_order_book, parse_order_status, parse_orders, parse_ticker,
    parse_trade, parse_withdrawal, parse_withdrawal_status,
};
pub use request::{compose, routes, Api, Method, Params, Route};

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::client::{ExchangeConfig, HttpClient, RateLimiter, Transport};
use crate::errors::{CcxtError, CcxtResult};
use crate::types::{
    Balances, DepositAddress, Exchange, ExchangeFeatures, ExchangeId, ExchangeUrls, Market,
    Order, OrderBook, OrderRequest, OrderSide, OrderType, Ticker, Trade, Transaction,
};
use crate::utils::{
    amount_to_precision, check_address, filter_by_since_limit, ms_to_rounded_secs, now_ms,
    price_to_precision, CommonCurrencies, CurrencyCodes,
};

/// BitOasis 거래소
pub struct Bitoasis {
    config: ExchangeConfig,
    base_url: String,
    transport: Arc<dyn Transport>,
    rate_limiter: RateLimiter,
    currency_codes: Box<dyn CurrencyCodes>,
    markets: RwLock<HashMap<String, Market>>,
    markets_by_id: RwLock<HashMap<String, String>>,
    features: ExchangeFeatures,
    urls: ExchangeUrls,
}

impl Bitoasis {
    const BASE_URL: &'static str = "https://api.bitoasis.net/v1";
    const RATE_LIMIT_MS: u64 = 500;

    /// 새 BitOasis 인스턴스 생성 (reqwest 기반 HTTP 클라이언트)
    pub fn new(config: ExchangeConfig) -> CcxtResult<Self> {
        let client = HttpClient::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(client)))
    }

    /// 전송 계층을 주입하여 생성
    pub fn with_transport(config: ExchangeConfig, transport: Arc<dyn Transport>) -> Self {
        let base_url = match config.hostname() {
            Some(host) => format!("https://{host}/v1"),
            None => Self::BASE_URL.to_string(),
        };
        let rate_limiter =
            RateLimiter::new(config.rate_limit_ms().unwrap_or(Self::RATE_LIMIT_MS));

        let features = ExchangeFeatures {
            spot: true,
            fetch_markets: true,
            fetch_ticker: true,
            fetch_order_book: true,
            fetch_trades: true,
            fetch_balance: true,
            create_order: true,
            create_stop_order: true,
            create_stop_limit_order: true,
            cancel_order: true,
            fetch_order: true,
            fetch_orders: true,
            fetch_open_orders: true,
            fetch_closed_orders: true,
            fetch_deposit: true,
            fetch_deposits: true,
            fetch_withdrawal: true,
            fetch_withdrawals: true,
            fetch_deposit_address: true,
            withdraw: true,
            ..Default::default()
        };

        let mut api_urls = HashMap::new();
        api_urls.insert("public".into(), base_url.clone());
        api_urls.insert("private".into(), base_url.clone());

        let urls = ExchangeUrls {
            logo: Some("https://user-images.githubusercontent.com/1294454/29604020-d5483cdc-87ee-11e7-94c7-d1a8d9169293.jpg".into()),
            api: api_urls,
            www: Some("https://bitoasis.net".into()),
            doc: vec!["https://bitoasis.docs.apiary.io".into()],
            fees: Some("https://bitoasis.net/en/page/fees".into()),
        };

        Self {
            config,
            base_url,
            transport,
            rate_limiter,
            currency_codes: Box::new(CommonCurrencies),
            markets: RwLock::new(HashMap::new()),
            markets_by_id: RwLock::new(HashMap::new()),
            features,
            urls,
        }
    }

    /// 화폐 코드 변환기 교체
    pub fn with_currency_codes(mut self, codes: impl CurrencyCodes + 'static) -> Self {
        self.currency_codes = Box::new(codes);
        self
    }

    fn codes(&self) -> &dyn CurrencyCodes {
        self.currency_codes.as_ref()
    }

    /// 요청 구성 → 레이트 리밋 → 전송
    async fn request(&self, route: &Route, params: Params) -> CcxtResult<Value> {
        let signed = compose(route, params, self.config.token(), &self.base_url)?;
        self.rate_limiter.throttle().await;
        tracing::debug!(method = %signed.method, url = %signed.url, "bitoasis request");
        self.transport.execute(signed).await
    }

    /// 비공개 API 호출 전 토큰 확인
    fn check_token(&self) -> CcxtResult<()> {
        if self.config.has_token() {
            Ok(())
        } else {
            Err(CcxtError::AuthenticationRequired {
                message: "bitoasis private endpoints require a bearer token".into(),
            })
        }
    }

    /// 심볼로 마켓 조회
    fn market(&self, symbol: &str) -> CcxtResult<Market> {
        let cache = self.markets.read().unwrap_or_else(PoisonError::into_inner);
        cache.get(symbol).cloned().ok_or_else(|| CcxtError::BadSymbol {
            symbol: symbol.to_string(),
        })
    }

    /// 통합 화폐 코드 → 거래소 화폐 ID
    fn currency_id(&self, code: &str) -> CcxtResult<String> {
        let cache = self.markets.read().unwrap_or_else(PoisonError::into_inner);
        cache
            .values()
            .find_map(|m| {
                if m.base == code {
                    Some(m.base_id.clone())
                } else if m.quote == code {
                    Some(m.quote_id.clone())
                } else {
                    None
                }
            })
            .ok_or_else(|| CcxtError::BadRequest {
                message: format!("unknown currency code {code}"),
            })
    }

    /// 단일 입금 조회
    pub async fn fetch_deposit(&self, id: &str) -> CcxtResult<Transaction> {
        require_id(id, "deposit")?;
        self.check_token()?;
        let response = self.request(&routes::DEPOSIT, id_params(id)).await?;
        let raw = parse::required(&response, "deposit", "Deposit")?;
        Ok(parse_deposit(raw, self.codes()))
    }

    /// 단일 출금 조회
    pub async fn fetch_withdrawal(&self, id: &str) -> CcxtResult<Transaction> {
        require_id(id, "withdrawal")?;
        self.check_token()?;
        let response = self.request(&routes::WITHDRAWAL, id_params(id)).await?;
        let raw = parse::required(&response, "withdrawal", "Withdrawal")?;
        Ok(parse_withdrawal(raw, self.codes()))
    }

    /// 상태 필터가 있는 주문 목록 (`OPEN`, `DONE`, ...)
    pub async fn fetch_orders_with_status(
        &self,
        symbol: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
        status: Option<&str>,
    ) -> CcxtResult<Vec<Order>> {
        self.check_token()?;
        self.load_markets(false).await?;

        let mut params = pagination(since, limit);
        if let Some(status) = status {
            params.insert("status".into(), status.into());
        }
        let route = match symbol {
            Some(symbol) => {
                params.insert("pair".into(), self.market(symbol)?.id.into());
                &routes::ORDERS_BY_PAIR
            },
            None => &routes::ORDERS,
        };

        let response = self.request(route, params).await?;
        parse_orders(parse::list(&response, "orders"), self.codes())
    }

    /// 주문 요청 객체로 주문 생성
    pub async fn submit_order(&self, request: &OrderRequest) -> CcxtResult<Order> {
        self.place_order(
            &request.symbol,
            request.order_type,
            request.side,
            request.amount,
            request.price,
            request.stop_price,
        )
        .await
    }

    async fn place_order(
        &self,
        symbol: &str,
        order_type: OrderType,
        side: OrderSide,
        amount: Decimal,
        price: Option<Decimal>,
        stop_price: Option<Decimal>,
    ) -> CcxtResult<Order> {
        if order_type.requires_price() && price.is_none() {
            return Err(CcxtError::MissingPrice {
                order_type: order_type.to_string(),
            });
        }
        if order_type.requires_stop_price() && stop_price.is_none() {
            return Err(CcxtError::MissingStopPrice {
                order_type: order_type.to_string(),
            });
        }
        self.check_token()?;
        self.load_markets(false).await?;
        let market = self.market(symbol)?;

        let mut params = Params::new();
        params.insert("pair".into(), market.id.clone().into());
        params.insert(
            "amount".into(),
            amount_to_precision(amount, market.precision.amount).into(),
        );
        params.insert("type".into(), order_type.as_str().into());
        params.insert("side".into(), side.as_str().into());
        if let Some(price) = price {
            params.insert(
                "price".into(),
                price_to_precision(price, market.precision.price).into(),
            );
        }
        if let Some(stop_price) = stop_price {
            params.insert(
                "stopPrice".into(),
                price_to_precision(stop_price, market.precision.price).into(),
            );
        }

        let response = self.request(&routes::CREATE_ORDER, params).await?;
        let raw = parse::required(&response, "order", "Order")?;
        parse_order(raw, self.codes())
    }

    async fn fetch_funding(
        &self,
        route: &Route,
        key: &str,
        code: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Value>> {
        let code = code.unwrap_or_default();
        require_code(code)?;
        self.check_token()?;
        self.load_markets(false).await?;

        let mut params = pagination(since, limit);
        params.insert("currency".into(), self.currency_id(code)?.into());
        let response = self.request(route, params).await?;
        Ok(parse::list(&response, key).to_vec())
    }
}

fn require_id(id: &str, entity: &str) -> CcxtResult<()> {
    if id.trim().is_empty() {
        return Err(CcxtError::ArgumentsRequired {
            message: format!("{entity} id is required"),
        });
    }
    Ok(())
}

fn require_code(code: &str) -> CcxtResult<()> {
    if code.trim().is_empty() {
        return Err(CcxtError::ArgumentsRequired {
            message: "currency code is required".into(),
        });
    }
    Ok(())
}

fn id_params(id: &str) -> Params {
    let mut params = Params::new();
    params.insert("id".into(), id.into());
    params
}

/// `since` (ms) → `from_date` (초, 반올림), `limit` → `limit`
fn pagination(since: Option<i64>, limit: Option<u32>) -> Params {
    let mut params = Params::new();
    if let Some(since) = since {
        params.insert("from_date".into(), ms_to_rounded_secs(since).into());
    }
    if let Some(limit) = limit {
        params.insert("limit".into(), limit.into());
    }
    params
}

/// 호가 깊이를 매수/매도 양쪽에 반씩 (반올림)
fn half_depth(limit: u32) -> u32 {
    limit / 2 + limit % 2
}

#[async_trait]
impl Exchange for Bitoasis {
    fn id(&self) -> ExchangeId {
        ExchangeId::Bitoasis
    }

    fn name(&self) -> &str {
        "BitOasis"
    }

    fn countries(&self) -> &[&str] {
        &["AE", "SA", "KW", "BH", "OM", "JO", "EG", "MA"]
    }

    fn rate_limit(&self) -> u64 {
        self.rate_limiter.interval().as_millis() as u64
    }

    fn has(&self) -> &ExchangeFeatures {
        &self.features
    }

    fn urls(&self) -> &ExchangeUrls {
        &self.urls
    }

    async fn load_markets(&self, reload: bool) -> CcxtResult<HashMap<String, Market>> {
        {
            let cache = self.markets.read().unwrap_or_else(PoisonError::into_inner);
            if !reload && !cache.is_empty() {
                return Ok(cache.clone());
            }
        }

        let markets = self.fetch_markets().await?;
        tracing::debug!(count = markets.len(), "bitoasis markets loaded");

        let mut result = HashMap::new();
        let mut cache = self.markets.write().unwrap_or_else(PoisonError::into_inner);
        let mut by_id = self.markets_by_id.write().unwrap_or_else(PoisonError::into_inner);
        cache.clear();
        by_id.clear();

        for market in markets {
            by_id.insert(market.id.clone(), market.symbol.clone());
            cache.insert(market.symbol.clone(), market.clone());
            result.insert(market.symbol.clone(), market);
        }

        Ok(result)
    }

    async fn fetch_markets(&self) -> CcxtResult<Vec<Market>> {
        let response = self.request(&routes::PAIR_DETAILS, Params::new()).await?;
        parse_markets(&response, self.codes())
    }

    async fn fetch_ticker(&self, symbol: &str) -> CcxtResult<Ticker> {
        self.load_markets(false).await?;
        let market = self.market(symbol)?;

        let mut params = Params::new();
        params.insert("pair".into(), market.id.into());
        let response = self.request(&routes::TICKER, params).await?;
        let raw = parse::required(&response, "ticker", "Ticker")?;
        Ok(parse_ticker(raw, &market.symbol, now_ms()))
    }

    async fn fetch_order_book(&self, symbol: &str, limit: Option<u32>) -> CcxtResult<OrderBook> {
        self.load_markets(false).await?;
        let market = self.market(symbol)?;
        let timestamp = now_ms();

        let mut params = Params::new();
        params.insert("pair".into(), market.id.into());
        if let Some(limit) = limit {
            params.insert("bids_limit".into(), half_depth(limit).into());
            params.insert("asks_limit".into(), half_depth(limit).into());
        }
        let response = self.request(&routes::ORDER_BOOK, params).await?;
        Ok(parse_order_book(&response, &market.symbol, timestamp))
    }

    async fn fetch_trades(
        &self,
        symbol: &str,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Trade>> {
        self.load_markets(false).await?;
        let market = self.market(symbol)?;

        let mut params = pagination(since, limit);
        params.insert("pair".into(), market.id.into());
        let response = self.request(&routes::TRADES, params).await?;

        let trades = parse::list(&response, "trades")
            .iter()
            .map(|raw| parse_trade(raw, &market.symbol))
            .collect();
        Ok(filter_by_since_limit(trades, since, limit))
    }

    async fn fetch_balance(&self) -> CcxtResult<Balances> {
        self.check_token()?;
        self.load_markets(false).await?;
        let response = self.request(&routes::BALANCES, Params::new()).await?;
        parse_balance(&response, self.codes(), now_ms())
    }

    async fn create_order(
        &self,
        symbol: &str,
        order_type: OrderType,
        side: OrderSide,
        amount: Decimal,
        price: Option<Decimal>,
    ) -> CcxtResult<Order> {
        self.place_order(symbol, order_type, side, amount, price, None)
            .await
    }

    async fn create_stop_order(
        &self,
        symbol: &str,
        order_type: OrderType,
        side: OrderSide,
        amount: Decimal,
        price: Option<Decimal>,
        stop_price: Decimal,
    ) -> CcxtResult<Order> {
        self.place_order(symbol, order_type, side, amount, price, Some(stop_price))
            .await
    }

    async fn cancel_order(&self, id: &str) -> CcxtResult<Order> {
        require_id(id, "order")?;
        self.check_token()?;
        let response = self.request(&routes::CANCEL_ORDER, id_params(id)).await?;
        let raw = parse::required(&response, "order", "Order")?;
        parse_order(raw, self.codes())
    }

    async fn fetch_order(&self, id: &str) -> CcxtResult<Order> {
        require_id(id, "order")?;
        self.check_token()?;
        let response = self.request(&routes::ORDER, id_params(id)).await?;
        let raw = parse::required(&response, "order", "Order")?;
        parse_order(raw, self.codes())
    }

    async fn fetch_orders(
        &self,
        symbol: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Order>> {
        self.fetch_orders_with_status(symbol, since, limit, None)
            .await
    }

    async fn fetch_open_orders(
        &self,
        symbol: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Order>> {
        self.fetch_orders_with_status(symbol, since, limit, Some("OPEN"))
            .await
    }

    async fn fetch_closed_orders(
        &self,
        symbol: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Order>> {
        self.fetch_orders_with_status(symbol, since, limit, Some("DONE"))
            .await
    }

    async fn fetch_deposits(
        &self,
        code: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Transaction>> {
        let raw = self.fetch_funding(&routes::DEPOSITS, "deposits", code, since, limit).await?;
        Ok(raw.iter().map(|d| parse_deposit(d, self.codes())).collect())
    }

    async fn fetch_withdrawals(
        &self,
        code: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> CcxtResult<Vec<Transaction>> {
        let raw = self.fetch_funding(&routes::WITHDRAWALS, "withdrawals", code, since, limit).await?;
        Ok(raw.iter().map(|w| parse_withdrawal(w, self.codes())).collect())
    }

    async fn withdraw(
        &self,
        code: &str,
        amount: Decimal,
        address: &str,
        tag: Option<&str>,
    ) -> CcxtResult<Transaction> {
        require_code(code)?;
        let address = check_address(address)?;
        self.check_token()?;
        self.load_markets(false).await?;

        let amount_number: serde_json::Number =
            amount.normalize().to_string().parse().map_err(|_| CcxtError::BadRequest {
                message: format!("withdrawal amount {amount} is not representable"),
            })?;

        let mut params = Params::new();
        params.insert("currency".into(), self.currency_id(code)?.into());
        params.insert("amount".into(), Value::Number(amount_number));
        params.insert("withdrawal_address".into(), address.into());
        if let Some(tag) = tag {
            params.insert("withdrawal_address_id".into(), tag.into());
        }

        let response = self.request(&routes::WITHDRAW, params).await?;
        let id = crate::utils::safe_string(&response, "id").unwrap_or_default();
        let mut tx = Transaction::withdrawal(id)
            .with_address(Some(address.to_string()), tag.map(str::to_string));
        tx.currency = Some(code.to_string());
        tx.amount = Some(amount);
        tx.info = response;
        Ok(tx)
    }

    async fn fetch_deposit_address(&self, code: &str) -> CcxtResult<DepositAddress> {
        require_code(code)?;
        self.check_token()?;
        self.load_markets(false).await?;

        let mut params = Params::new();
        params.insert("currency".into(), self.currency_id(code)?.into());
        let response = self.request(&routes::DEPOSIT_ADDRESS, params).await?;
        parse_deposit_address(&response, code)
    }

    fn market_id(&self, symbol: &str) -> Option<String> {
        let cache = self.markets.read().unwrap_or_else(PoisonError::into_inner);
        cache.get(symbol).map(|m| m.id.clone())
    }

    fn symbol(&self, market_id: &str) -> Option<String> {
        let by_id = self.markets_by_id.read().unwrap_or_else(PoisonError::into_inner);
        by_id.get(market_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_depth_rounds_up() {
        assert_eq!(half_depth(10), 5);
        assert_eq!(half_depth(5), 3);
        assert_eq!(half_depth(1), 1);
        assert_eq!(half_depth(0), 0);
    }

    #[test]
    fn test_pagination() {
        let params = pagination(Some(1_481_553_232_500), Some(50));
        assert_eq!(params.get("from_date"), Some(&Value::from(1_481_553_233i64)));
        assert_eq!(params.get("limit"), Some(&Value::from(50u32)));
        let params = pagination(Some(1_481_553_232_499), None);
        assert_eq!(params.get("from_date"), Some(&Value::from(1_481_553_232i64)));
        assert!(pagination(None, None).is_empty());
    }

    #[test]
    fn test_hostname_override() {
        let exchange = Bitoasis::new(ExchangeConfig::new().with_hostname("sandbox.bitoasis.net")).unwrap();
        assert_eq!(exchange.base_url, "https://sandbox.bitoasis.net/v1");
        assert_eq!(exchange.rate_limit(), 500);
        assert!(exchange.has_feature("withdraw"));
        assert!(!exchange.has_feature("fetchOHLCV"));
    }
}
