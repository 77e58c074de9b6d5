//! BitOasis pair notation (`BTC-AED`) ⇄ unified symbol (`BTC/AED`)

use crate::errors::{CcxtError, CcxtResult};
use crate::utils::CurrencyCodes;

const SEPARATOR: char = '-';

/// 분해된 거래쌍 정보
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairInfo {
    /// 거래소 원본 표기 (예: "BTC-AED")
    pub pair: String,
    pub base: String,
    pub quote: String,
    pub base_id: String,
    pub quote_id: String,
    /// 통합 심볼 (예: "BTC/AED")
    pub symbol: String,
}

impl PairInfo {
    /// 거래소 표기를 분해한다
    ///
    /// Fails with `MalformedIdentifier` unless the pair splits into exactly two
    /// non-empty segments.
    pub fn decompose(pair: &str, codes: &dyn CurrencyCodes) -> CcxtResult<Self> {
        let mut parts = pair.split(SEPARATOR);
        let (base_id, quote_id) = match (parts.next(), parts.next(), parts.next()) {
            (Some(b), Some(q), None) if !b.is_empty() && !q.is_empty() => (b, q),
            _ => {
                return Err(CcxtError::MalformedIdentifier {
                    id: pair.to_string(),
                })
            },
        };

        let base = codes.code(base_id);
        let quote = codes.code(quote_id);
        Ok(Self {
            pair: pair.to_string(),
            symbol: format!("{base}/{quote}"),
            base,
            quote,
            base_id: base_id.to_string(),
            quote_id: quote_id.to_string(),
        })
    }
}

/// 거래소 표기 생성
pub fn compose_pair(base_id: &str, quote_id: &str) -> String {
    format!("{base_id}{SEPARATOR}{quote_id}")
}
