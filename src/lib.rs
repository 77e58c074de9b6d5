//! BitOasis exchange adapter
//!
//! CCXT 스타일의 통합 타입으로 BitOasis REST API를 감싸는 라이브러리

pub mod client;
pub mod errors;
pub mod exchanges;
pub mod types;
pub mod utils;

// Re-exports
pub use client::{ExchangeConfig, HttpClient, RateLimiter, Transport};
pub use errors::{CcxtError, CcxtResult};
pub use exchanges::Bitoasis;
pub use types::Exchange;
