//! Integration tests for error handling
//!
//! Tests for CcxtError types, classification helpers, and propagation through `?`

use ccxt_bitoasis::{CcxtError, CcxtResult};

// === Error Type Tests ===

#[test]
fn test_precondition_errors_are_permanent() {
    let errors = vec![
        CcxtError::AuthenticationRequired {
            message: "token missing".into(),
        },
        CcxtError::ArgumentsRequired {
            message: "currency code is required".into(),
        },
        CcxtError::BadRequest {
            message: "unknown currency code DOGE".into(),
        },
        CcxtError::BadSymbol {
            symbol: "DOGE/AED".into(),
        },
        CcxtError::MalformedIdentifier {
            id: "BTCAED".into(),
        },
        CcxtError::InvalidRoute {
            route: "exchange/ticker/{pair}".into(),
            message: "missing value for {pair}".into(),
        },
        CcxtError::InvalidAddress {
            address: " ".into(),
        },
        CcxtError::MissingPrice {
            order_type: "limit".into(),
        },
        CcxtError::MissingStopPrice {
            order_type: "stop".into(),
        },
        CcxtError::ParseError {
            data_type: "Order".into(),
            message: "order has no 'pair' field".into(),
        },
    ];

    for err in errors {
        assert!(!err.code().is_empty());
        assert!(!err.is_retryable(), "{err:?} should not be retryable");
        assert!(!err.is_network_error());
        assert_eq!(err.suggested_retry_after(), None);
    }
}

#[test]
fn test_network_errors_are_retryable() {
    let errors = vec![
        CcxtError::NetworkError {
            url: "https://api.bitoasis.net/v1/exchange/balances".into(),
            message: "connection reset".into(),
        },
        CcxtError::RateLimitExceeded {
            message: "Too many requests".into(),
            retry_after_ms: Some(2000),
        },
        CcxtError::ExchangeNotAvailable {
            message: "Service down".into(),
        },
        CcxtError::RequestTimeout {
            url: "https://api.bitoasis.net/v1/exchange/order".into(),
        },
    ];

    for err in errors {
        assert!(err.is_network_error(), "Expected network error: {err:?}");
        assert!(err.is_retryable());
        assert!(err.suggested_retry_after().is_some());
    }
}

#[test]
fn test_rate_limit_retry_hint() {
    let err = CcxtError::RateLimitExceeded {
        message: "slow down".into(),
        retry_after_ms: Some(2000),
    };
    assert_eq!(err.suggested_retry_after(), Some(2000));

    let err = CcxtError::RateLimitExceeded {
        message: "slow down".into(),
        retry_after_ms: None,
    };
    assert_eq!(err.suggested_retry_after(), Some(1000));
}

#[test]
fn test_order_error_classification() {
    assert!(CcxtError::MissingPrice {
        order_type: "stop_limit".into()
    }
    .is_order_error());
    assert!(CcxtError::OrderNotFound {
        order_id: "1096341".into()
    }
    .is_order_error());
    assert!(!CcxtError::BadSymbol {
        symbol: "BTC/AED".into()
    }
    .is_order_error());
}

#[test]
fn test_auth_error_classification() {
    assert!(CcxtError::AuthenticationRequired {
        message: "no token".into()
    }
    .is_auth_error());
    assert!(CcxtError::AuthenticationError {
        message: "401".into()
    }
    .is_auth_error());
    assert!(!CcxtError::BadRequest {
        message: "x".into()
    }
    .is_auth_error());
}

#[test]
fn test_error_display_mentions_context() {
    let err = CcxtError::InvalidAddress {
        address: "1Boat SLRH".into(),
    };
    assert!(err.to_string().contains("1Boat SLRH"));

    let err = CcxtError::BadSymbol {
        symbol: "DOGE/AED".into(),
    };
    assert!(err.to_string().contains("DOGE/AED"));
}

// === Propagation ===

fn decode(raw: &str) -> CcxtResult<serde_json::Value> {
    Ok(serde_json::from_str(raw)?)
}

#[test]
fn test_json_error_propagates_through_question_mark() {
    assert!(decode(r#"{"pairs": []}"#).is_ok());

    let err = decode("{not json").unwrap_err();
    assert!(matches!(err, CcxtError::JsonError { .. }));
    assert_eq!(err.code(), "JSON_ERROR");
}
