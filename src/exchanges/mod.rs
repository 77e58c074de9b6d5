//! Exchange Implementations
//!
//! 거래소별 구현체

pub mod bitoasis;

pub use bitoasis::Bitoasis;
