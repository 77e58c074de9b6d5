//! Unified types - 거래소 공통 타입

mod account;
mod balance;
mod exchange;
mod fee;
mod market;
mod order;
mod orderbook;
mod ticker;
mod trade;
mod transaction;

pub use account::DepositAddress;
pub use balance::{Balance, Balances};
pub use exchange::{Exchange, ExchangeFeatures, ExchangeId, ExchangeUrls, SignedRequest};
pub use fee::Fee;
pub use market::{Market, MarketLimits, MarketPrecision, MarketType, MinMax};
pub use order::{Order, OrderRequest, OrderSide, OrderStatus, OrderType};
pub use orderbook::{OrderBook, OrderBookEntry};
pub use ticker::Ticker;
pub use trade::Trade;
pub use transaction::{Transaction, TransactionStatus, TransactionType};
