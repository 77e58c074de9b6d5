//! Currency code canonicalization and address checks

use crate::errors::{CcxtError, CcxtResult};

/// 거래소 화폐 ID → 통합 화폐 코드 변환
pub trait CurrencyCodes: Send + Sync {
    fn code(&self, id: &str) -> String;
}

/// 대문자화 후 공통 별칭 적용 (XBT → BTC 등)
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonCurrencies;

impl CommonCurrencies {
    const ALIASES: &'static [(&'static str, &'static str)] = &[
        ("XBT", "BTC"),
        ("BCC", "BCH"),
        ("BCHABC", "BCH"),
        ("BCHSV", "BSV"),
        ("DRK", "DASH"),
    ];
}

impl CurrencyCodes for CommonCurrencies {
    fn code(&self, id: &str) -> String {
        let upper = id.to_uppercase();
        Self::ALIASES
            .iter()
            .find(|(alias, _)| *alias == upper)
            .map(|(_, code)| (*code).to_string())
            .unwrap_or(upper)
    }
}

/// 출금 주소 검사: 비어 있지 않고 공백 문자가 없어야 한다
pub fn check_address(address: &str) -> CcxtResult<&str> {
    if address.is_empty() || address.chars().any(char::is_whitespace) {
        return Err(CcxtError::InvalidAddress {
            address: address.to_string(),
        });
    }
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_codes() {
        let codes = CommonCurrencies;
        assert_eq!(codes.code("btc"), "BTC");
        assert_eq!(codes.code("XBT"), "BTC");
        assert_eq!(codes.code("bchsv"), "BSV");
        assert_eq!(codes.code("AED"), "AED");
    }

    #[test]
    fn test_check_address() {
        assert_eq!(check_address("3Asaq1").ok(), Some("3Asaq1"));
        assert!(matches!(
            check_address("3Asaq 1"),
            Err(CcxtError::InvalidAddress { .. })
        ));
        assert!(check_address("\t").is_err());
        assert!(check_address("").is_err());
    }
}
