//! Tests for the Exchange trait surface

use ccxt_bitoasis::types::{ExchangeId, OrderSide, OrderType};
use ccxt_bitoasis::{Bitoasis, CcxtError, Exchange, ExchangeConfig, RateLimiter};
use rust_decimal_macros::dec;

/// Bitoasis가 trait object로 사용 가능한지 확인
#[tokio::test]
async fn test_bitoasis_is_object_safe() {
    let exchange: Box<dyn Exchange> = Box::new(Bitoasis::new(ExchangeConfig::new()).unwrap());
    assert_eq!(exchange.id(), ExchangeId::Bitoasis);
}

/// ExchangeConfig 구조체 테스트
#[tokio::test]
async fn test_exchange_config() {
    let config = ExchangeConfig::new()
        .with_token("bearer-token")
        .with_timeout(5_000)
        .with_rate_limit_ms(250);

    assert_eq!(config.token(), Some("bearer-token"));
    assert!(config.has_token());
    assert_eq!(config.timeout_ms(), 5_000);
    assert_eq!(config.rate_limit_ms(), Some(250));

    let config = ExchangeConfig::new().with_token("");
    assert_eq!(config.token(), None);
    assert!(!config.has_token());
}

/// Rate limiter 테스트
#[tokio::test]
async fn test_rate_limiter_disabled() {
    let limiter = RateLimiter::new(0);
    assert!(!limiter.is_enabled());
    limiter.throttle().await;
}

/// BitOasis 메타데이터
#[tokio::test]
async fn test_bitoasis_metadata() {
    let exchange = Bitoasis::new(ExchangeConfig::new()).unwrap();

    assert_eq!(exchange.name(), "BitOasis");
    assert_eq!(exchange.version(), "v1");
    assert_eq!(
        exchange.countries(),
        &["AE", "SA", "KW", "BH", "OM", "JO", "EG", "MA"]
    );
    assert_eq!(exchange.rate_limit(), 500);
    assert_eq!(
        exchange.urls().api.get("private").map(String::as_str),
        Some("https://api.bitoasis.net/v1")
    );

    let has = exchange.has();
    assert!(has.spot);
    assert!(has.withdraw);
    assert!(has.create_stop_limit_order);
    assert!(exchange.has_feature("fetchDepositAddress"));
    assert!(exchange.has_feature("fetchClosedOrders"));
    assert!(!exchange.has_feature("fetchMyTrades"));
    assert!(!exchange.has_feature("fetchTickers"));
    assert!(!exchange.has_feature("swap"));
    assert!(!exchange.has_feature("ws"));
}

/// 설정된 레이트 리밋이 기본값을 덮어쓴다
#[tokio::test]
async fn test_rate_limit_override() {
    let exchange = Bitoasis::new(ExchangeConfig::new().with_rate_limit_ms(0)).unwrap();
    assert_eq!(exchange.rate_limit(), 0);
}

/// 토큰 없이 주문하면 네트워크 전에 실패
#[tokio::test]
async fn test_order_without_token_fails_before_network() {
    let exchange = Bitoasis::new(ExchangeConfig::new()).unwrap();
    let err = exchange
        .create_order("BTC/AED", OrderType::Market, OrderSide::Buy, dec!(1), None)
        .await
        .unwrap_err();
    assert!(matches!(err, CcxtError::AuthenticationRequired { .. }));
}
