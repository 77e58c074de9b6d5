//! Market type - 거래소 마켓 정보

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 마켓 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarketType {
    #[default]
    Spot,
}

/// 마켓 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// 거래소 내부 ID (예: 'BTC-AED')
    pub id: String,
    /// 통합 심볼 (예: 'BTC/AED')
    pub symbol: String,
    /// 기준 화폐 (예: 'BTC')
    pub base: String,
    /// 견적 화폐 (예: 'AED')
    pub quote: String,
    /// 거래소 기준 화폐 ID
    pub base_id: String,
    /// 거래소 견적 화폐 ID
    pub quote_id: String,
    /// 마켓 타입
    #[serde(rename = "type")]
    pub market_type: MarketType,
    /// 현물 여부
    pub spot: bool,
    /// 활성 상태
    pub active: bool,
    /// 정밀도
    pub precision: MarketPrecision,
    /// 거래 제한
    pub limits: MarketLimits,
    /// 원본 응답
    #[serde(default)]
    pub info: serde_json::Value,
}

/// 마켓 정밀도
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketPrecision {
    /// 수량 정밀도
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
    /// 가격 정밀도 (소수점 자릿수)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i32>,
}

/// 마켓 제한
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketLimits {
    /// 수량 제한
    #[serde(default)]
    pub amount: MinMax,
    /// 가격 제한
    #[serde(default)]
    pub price: MinMax,
    /// 비용 제한
    #[serde(default)]
    pub cost: MinMax,
}

/// 최소/최대 값
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinMax {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Decimal>,
}

impl Market {
    /// 현물 마켓 생성
    pub fn spot(
        id: String,
        base: String,
        quote: String,
        base_id: String,
        quote_id: String,
    ) -> Self {
        Self {
            id,
            symbol: format!("{base}/{quote}"),
            base,
            quote,
            base_id,
            quote_id,
            market_type: MarketType::Spot,
            spot: true,
            active: true,
            precision: MarketPrecision::default(),
            limits: MarketLimits::default(),
            info: serde_json::Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_market() {
        let market = Market::spot(
            "BTC-AED".into(),
            "BTC".into(),
            "AED".into(),
            "BTC".into(),
            "AED".into(),
        );
        assert!(market.spot);
        assert!(market.active);
        assert_eq!(market.symbol, "BTC/AED");
        assert_eq!(market.market_type, MarketType::Spot);
    }
}
