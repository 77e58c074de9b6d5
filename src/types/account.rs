//! Account types - 입금 주소

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 입금 주소
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositAddress {
    /// Raw exchange response
    #[serde(default)]
    pub info: Value,

    /// Currency code
    pub currency: String,

    /// Network (e.g., "ERC20", "TRC20")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    /// Deposit address
    pub address: String,

    /// Address tag/memo (for currencies like XRP, XLM)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl DepositAddress {
    pub fn new(currency: impl Into<String>, address: impl Into<String>) -> Self {
        DepositAddress {
            info: Value::Null,
            currency: currency.into(),
            network: None,
            address: address.into(),
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_address() {
        let address = DepositAddress::new("XRP", "rLW9gnQo7BQhU6igk5keqYnH3TVrCxGRzm")
            .with_tag(Some("123".into()));

        assert_eq!(address.currency, "XRP");
        assert_eq!(address.tag.as_deref(), Some("123"));
        assert!(address.network.is_none());
    }
}
