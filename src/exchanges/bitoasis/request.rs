//! Request composition for the BitOasis REST API
//!
//! Routes are templates such as `exchange/order-book/{pair}`. [`compose`] fills
//! the placeholders from the parameter bag, encodes whatever is left as a
//! query string (GET) or JSON body (POST), and attaches the bearer token for
//! private routes. It performs no I/O.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

use crate::errors::{CcxtError, CcxtResult};
use crate::types::SignedRequest;

/// 요청 파라미터
pub type Params = Map<String, Value>;

/// API 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    Public,
    Private,
}

/// HTTP 메서드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// 라우트 템플릿
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub api: Api,
    pub method: Method,
    pub path: &'static str,
}

impl Route {
    const fn new(api: Api, method: Method, path: &'static str) -> Self {
        Self { api, method, path }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method.as_str(), self.path)
    }
}

/// BitOasis 라우트 목록
pub mod routes {
    use super::{Api::*, Method::*, Route};

    pub const PAIR_DETAILS: Route = Route::new(Public, Get, "exchange/pair-details");
    pub const ORDER_BOOK: Route = Route::new(Public, Get, "exchange/order-book/{pair}");
    pub const TRADES: Route = Route::new(Public, Get, "exchange/trades/{pair}");
    pub const TICKER: Route = Route::new(Public, Get, "exchange/ticker/{pair}");

    pub const BALANCES: Route = Route::new(Private, Get, "exchange/balances");
    pub const ORDER: Route = Route::new(Private, Get, "exchange/order/{id}");
    pub const ORDERS: Route = Route::new(Private, Get, "exchange/orders");
    pub const ORDERS_BY_PAIR: Route = Route::new(Private, Get, "exchange/orders/{pair}");
    pub const DEPOSIT: Route = Route::new(Private, Get, "exchange/coin-deposit/{id}");
    pub const DEPOSITS: Route = Route::new(Private, Get, "exchange/coin-deposits/{currency}");
    pub const WITHDRAWAL: Route = Route::new(Private, Get, "exchange/coin-withdrawal/{id}");
    pub const WITHDRAWALS: Route =
        Route::new(Private, Get, "exchange/coin-withdrawals/{currency}");

    pub const CREATE_ORDER: Route = Route::new(Private, Post, "exchange/order");
    pub const CANCEL_ORDER: Route = Route::new(Private, Post, "exchange/cancel-order");
    pub const DEPOSIT_ADDRESS: Route = Route::new(Private, Post, "exchange/coin-deposit");
    pub const WITHDRAW: Route = Route::new(Private, Post, "exchange/coin-withdrawal");
}

/// 라우트 + 파라미터 → 요청
pub fn compose(
    route: &Route,
    mut params: Params,
    token: Option<&str>,
    base_url: &str,
) -> CcxtResult<SignedRequest> {
    let mut headers = HashMap::new();
    if route.api == Api::Private {
        let token = token.ok_or_else(|| CcxtError::AuthenticationRequired {
            message: format!("a bearer token is required for {route}"),
        })?;
        headers.insert("Authorization".to_string(), format!("Bearer {token}"));
    }

    let path = fill_placeholders(route, &mut params)?;
    let mut url = format!("{}/{}", base_url.trim_end_matches('/'), path);

    let body = match route.method {
        Method::Get => {
            let query = encode_query(&params);
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query);
            }
            None
        },
        Method::Post => {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
            Some(serde_json::to_string(&Value::Object(params))?)
        },
    };

    Ok(SignedRequest {
        url,
        method: route.method.as_str().to_string(),
        headers,
        body,
    })
}

fn fill_placeholders(route: &Route, params: &mut Params) -> CcxtResult<String> {
    let mut path = String::with_capacity(route.path.len());
    let mut rest = route.path;

    while let Some(start) = rest.find('{') {
        path.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| CcxtError::InvalidRoute {
            route: route.path.to_string(),
            message: "unterminated placeholder".into(),
        })?;
        let key = &after[..end];
        let value = params
            .remove(key)
            .as_ref()
            .and_then(scalar_to_string)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| CcxtError::InvalidRoute {
                route: route.path.to_string(),
                message: format!("missing value for {{{key}}}"),
            })?;
        path.push_str(&urlencoding::encode(&value));
        rest = &after[end + 1..];
    }
    path.push_str(rest);
    Ok(path)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn encode_query(params: &Params) -> String {
    let mut pairs: Vec<(&String, String)> = params
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k, scalar_to_string(v).unwrap_or_else(|| v.to_string())))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "https://api.bitoasis.net/v1";

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            _ => panic!("params must be an object"),
        }
    }

    #[test]
    fn test_public_get_fills_placeholder() {
        let req = compose(
            &routes::ORDER_BOOK,
            params(json!({"pair": "BTC-AED", "bids_limit": 5, "asks_limit": 5})),
            None,
            BASE,
        )
        .unwrap();

        assert_eq!(req.method, "GET");
        assert_eq!(
            req.url,
            "https://api.bitoasis.net/v1/exchange/order-book/BTC-AED?asks_limit=5&bids_limit=5"
        );
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn test_get_without_params_has_no_query() {
        let req = compose(&routes::PAIR_DETAILS, Params::new(), None, BASE).unwrap();
        assert_eq!(req.url, "https://api.bitoasis.net/v1/exchange/pair-details");
    }

    #[test]
    fn test_private_requires_token() {
        let err = compose(&routes::BALANCES, Params::new(), None, BASE).unwrap_err();
        assert!(matches!(err, CcxtError::AuthenticationRequired { .. }));

        let req = compose(&routes::BALANCES, Params::new(), Some("abc"), BASE).unwrap();
        assert_eq!(
            req.headers.get("Authorization").map(String::as_str),
            Some("Bearer abc")
        );
    }

    #[test]
    fn test_post_serializes_json_body() {
        let req = compose(
            &routes::CANCEL_ORDER,
            params(json!({"id": "1096341"})),
            Some("abc"),
            BASE,
        )
        .unwrap();

        assert_eq!(req.method, "POST");
        assert_eq!(req.url, "https://api.bitoasis.net/v1/exchange/cancel-order");
        assert_eq!(
            req.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"id": "1096341"}));
    }

    #[test]
    fn test_placeholder_value_removed_from_query() {
        let req = compose(
            &routes::ORDERS_BY_PAIR,
            params(json!({"pair": "ETH-AED", "status": "OPEN"})),
            Some("abc"),
            BASE,
        )
        .unwrap();
        assert_eq!(
            req.url,
            "https://api.bitoasis.net/v1/exchange/orders/ETH-AED?status=OPEN"
        );
    }

    #[test]
    fn test_placeholder_and_query_are_percent_encoded() {
        let req = compose(
            &routes::ORDER,
            params(json!({"id": "a/b c", "note": "x&y"})),
            Some("abc"),
            BASE,
        )
        .unwrap();
        assert_eq!(
            req.url,
            "https://api.bitoasis.net/v1/exchange/order/a%2Fb%20c?note=x%26y"
        );
    }

    #[test]
    fn test_unfilled_placeholder_fails_fast() {
        let err = compose(&routes::TICKER, Params::new(), None, BASE).unwrap_err();
        assert!(matches!(err, CcxtError::InvalidRoute { .. }));

        let err = compose(&routes::TICKER, params(json!({"pair": null})), None, BASE).unwrap_err();
        assert!(matches!(err, CcxtError::InvalidRoute { .. }));

        let err = compose(&routes::TICKER, params(json!({"pair": ""})), None, BASE).unwrap_err();
        assert!(matches!(err, CcxtError::InvalidRoute { .. }));

        let broken = Route::new(Api::Public, Method::Get, "exchange/ticker/{pair");
        let err = compose(&broken, params(json!({"pair": "BTC-AED"})), None, BASE).unwrap_err();
        assert!(matches!(err, CcxtError::InvalidRoute { .. }));
    }

    #[test]
    fn test_private_token_checked_before_placeholders() {
        let err = compose(&routes::DEPOSIT, Params::new(), None, BASE).unwrap_err();
        assert!(matches!(err, CcxtError::AuthenticationRequired { .. }));
    }
}
