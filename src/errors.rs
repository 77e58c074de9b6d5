//! CCXT Error Hierarchy
//!
//! The subset of CCXT's error classes an exchange adapter raises, plus the
//! local precondition failures of the BitOasis normalization layer.

use thiserror::Error;

/// CCXT error hierarchy
///
/// - ExchangeError (exchange-specific errors)
///   - AuthenticationError
///     - AuthenticationRequired
///   - ArgumentsRequired
///   - BadRequest
///     - BadSymbol
///     - MalformedIdentifier
///     - InvalidRoute
///   - InvalidAddress
///   - InvalidOrder
///     - MissingPrice
///     - MissingStopPrice
///     - OrderNotFound
///   - NotSupported
/// - OperationFailed
///   - NetworkError
///     - RateLimitExceeded
///     - ExchangeNotAvailable
///     - RequestTimeout
///   - BadResponse
///     - ParseError
///     - JsonError
#[derive(Error, Debug)]
pub enum CcxtError {
    // === ExchangeError family ===
    /// Generic exchange error
    #[error("Exchange error: {message}")]
    ExchangeError { message: String },

    /// Exchange rejected the credentials
    #[error("Authentication error: {message}")]
    AuthenticationError { message: String },

    /// Private route called without a configured token
    #[error("Authentication required: {message}")]
    AuthenticationRequired { message: String },

    /// Required arguments missing
    #[error("Arguments required: {message}")]
    ArgumentsRequired { message: String },

    /// Invalid request parameters
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Invalid trading symbol
    #[error("Bad symbol: {symbol}")]
    BadSymbol { symbol: String },

    /// Native market id does not decompose into base and quote
    #[error("Malformed identifier: {id}")]
    MalformedIdentifier { id: String },

    /// Route template could not be filled from the request parameters
    #[error("Invalid route {route}: {message}")]
    InvalidRoute { route: String, message: String },

    /// Invalid deposit/withdrawal address
    #[error("Invalid address: {address}")]
    InvalidAddress { address: String },

    /// Generic invalid order error
    #[error("Invalid order: {message}")]
    InvalidOrder { message: String },

    /// Order type requires a price
    #[error("Invalid order: a price is required for a {order_type} order")]
    MissingPrice { order_type: String },

    /// Order type requires a stop price
    #[error("Invalid order: a stop price is required for a {order_type} order")]
    MissingStopPrice { order_type: String },

    /// Order not found on exchange
    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: String },

    /// Feature not supported by this exchange
    #[error("Not supported: {feature}")]
    NotSupported { feature: String },

    // === OperationFailed / NetworkError family ===
    /// Generic operation failed error
    #[error("Operation failed: {message}")]
    OperationFailed { message: String },

    /// Generic network error
    #[error("Network error: {url} - {message}")]
    NetworkError { url: String, message: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {message}")]
    RateLimitExceeded {
        message: String,
        /// Suggested retry after in milliseconds (if provided by exchange)
        retry_after_ms: Option<u64>,
    },

    /// Exchange is temporarily unavailable
    #[error("Exchange not available: {message}")]
    ExchangeNotAvailable { message: String },

    /// Request timed out
    #[error("Request timeout: {url}")]
    RequestTimeout { url: String },

    /// Invalid response from exchange
    #[error("Bad response: {message}")]
    BadResponse { message: String },

    // === Parsing errors ===
    /// Failed to parse response data
    #[error("Parse error: {data_type} - {message}")]
    ParseError { data_type: String, message: String },

    /// JSON parsing error
    #[error("JSON error: {message}")]
    JsonError { message: String },
}

impl CcxtError {
    /// Returns the error code as a string constant
    pub fn code(&self) -> &'static str {
        match self {
            CcxtError::ExchangeError { .. } => "EXCHANGE_ERROR",
            CcxtError::AuthenticationError { .. } => "AUTHENTICATION_ERROR",
            CcxtError::AuthenticationRequired { .. } => "AUTHENTICATION_REQUIRED",
            CcxtError::ArgumentsRequired { .. } => "ARGUMENTS_REQUIRED",
            CcxtError::BadRequest { .. } => "BAD_REQUEST",
            CcxtError::BadSymbol { .. } => "BAD_SYMBOL",
            CcxtError::MalformedIdentifier { .. } => "MALFORMED_IDENTIFIER",
            CcxtError::InvalidRoute { .. } => "INVALID_ROUTE",
            CcxtError::InvalidAddress { .. } => "INVALID_ADDRESS",
            CcxtError::InvalidOrder { .. } => "INVALID_ORDER",
            CcxtError::MissingPrice { .. } => "MISSING_PRICE",
            CcxtError::MissingStopPrice { .. } => "MISSING_STOP_PRICE",
            CcxtError::OrderNotFound { .. } => "ORDER_NOT_FOUND",
            CcxtError::NotSupported { .. } => "NOT_SUPPORTED",
            CcxtError::OperationFailed { .. } => "OPERATION_FAILED",
            CcxtError::NetworkError { .. } => "NETWORK_ERROR",
            CcxtError::RateLimitExceeded { .. } => "RATE_LIMIT_EXCEEDED",
            CcxtError::ExchangeNotAvailable { .. } => "EXCHANGE_NOT_AVAILABLE",
            CcxtError::RequestTimeout { .. } => "REQUEST_TIMEOUT",
            CcxtError::BadResponse { .. } => "BAD_RESPONSE",
            CcxtError::ParseError { .. } => "PARSE_ERROR",
            CcxtError::JsonError { .. } => "JSON_ERROR",
        }
    }

    /// Returns true if this error is temporary and the operation can be retried
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CcxtError::OperationFailed { .. }
                | CcxtError::NetworkError { .. }
                | CcxtError::RequestTimeout { .. }
                | CcxtError::RateLimitExceeded { .. }
                | CcxtError::ExchangeNotAvailable { .. }
        )
    }

    /// Returns true if this is an authentication-related error
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            CcxtError::AuthenticationError { .. } | CcxtError::AuthenticationRequired { .. }
        )
    }

    /// Returns true if this is an order-related error
    pub fn is_order_error(&self) -> bool {
        matches!(
            self,
            CcxtError::InvalidOrder { .. }
                | CcxtError::MissingPrice { .. }
                | CcxtError::MissingStopPrice { .. }
                | CcxtError::OrderNotFound { .. }
        )
    }

    /// Returns true if this is a network-related error
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            CcxtError::OperationFailed { .. }
                | CcxtError::NetworkError { .. }
                | CcxtError::RateLimitExceeded { .. }
                | CcxtError::ExchangeNotAvailable { .. }
                | CcxtError::RequestTimeout { .. }
        )
    }

    /// Returns the suggested retry delay in milliseconds for retryable errors
    pub fn suggested_retry_after(&self) -> Option<u64> {
        match self {
            CcxtError::RateLimitExceeded { retry_after_ms, .. } => retry_after_ms.or(Some(1000)),
            CcxtError::RequestTimeout { .. } => Some(5000),
            CcxtError::ExchangeNotAvailable { .. } => Some(30000),
            CcxtError::NetworkError { .. } => Some(1000),
            CcxtError::OperationFailed { .. } => Some(1000),
            _ => None,
        }
    }
}

// === From implementations for common error types ===

impl From<serde_json::Error> for CcxtError {
    fn from(err: serde_json::Error) -> Self {
        CcxtError::JsonError {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for CcxtError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_default();
        if err.is_timeout() {
            CcxtError::RequestTimeout { url }
        } else if err.is_connect() {
            CcxtError::NetworkError {
                url,
                message: "Connection failed".into(),
            }
        } else {
            CcxtError::NetworkError {
                url,
                message: err.to_string(),
            }
        }
    }
}

/// Result type alias
pub type CcxtResult<T> = Result<T, CcxtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = CcxtError::AuthenticationRequired {
            message: "token missing".into(),
        };
        assert_eq!(err.code(), "AUTHENTICATION_REQUIRED");

        let err = CcxtError::MalformedIdentifier {
            id: "BTCAED".into(),
        };
        assert_eq!(err.code(), "MALFORMED_IDENTIFIER");
        assert_eq!(err.to_string(), "Malformed identifier: BTCAED");
    }

    #[test]
    fn test_missing_price_is_invalid_order() {
        let err = CcxtError::MissingPrice {
            order_type: "limit".into(),
        };
        assert!(err.is_order_error());
        assert!(err.to_string().starts_with("Invalid order"));

        let err = CcxtError::MissingStopPrice {
            order_type: "stop".into(),
        };
        assert!(err.is_order_error());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_retryable_errors() {
        let network_err = CcxtError::NetworkError {
            url: "https://api.bitoasis.net/v1".into(),
            message: "Connection refused".into(),
        };
        assert!(network_err.is_retryable());
        assert!(network_err.is_network_error());

        let auth_err = CcxtError::AuthenticationRequired {
            message: "no token".into(),
        };
        assert!(!auth_err.is_retryable());
        assert!(auth_err.is_auth_error());
    }

    #[test]
    fn test_suggested_retry_after() {
        let err = CcxtError::RateLimitExceeded {
            message: "slow down".into(),
            retry_after_ms: None,
        };
        assert_eq!(err.suggested_retry_after(), Some(1000));

        let err = CcxtError::BadSymbol {
            symbol: "FOO/BAR".into(),
        };
        assert_eq!(err.suggested_retry_after(), None);
    }

    #[test]
    fn test_json_error_conversion() {
        let err: CcxtError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "JSON_ERROR");
    }
}
