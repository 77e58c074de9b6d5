//! Transaction type - 입출금 내역

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Fee;
use crate::utils::iso8601;

/// 트랜잭션 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

/// 트랜잭션 상태
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionStatus {
    Pending,
    Ok,
    Canceled,
    Failed,
    Unknown(String),
}

impl TransactionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Ok => "ok",
            TransactionStatus::Canceled => "canceled",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Unknown(raw) => raw,
        }
    }
}

impl From<String> for TransactionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => TransactionStatus::Pending,
            "ok" => TransactionStatus::Ok,
            "canceled" => TransactionStatus::Canceled,
            "failed" => TransactionStatus::Failed,
            _ => TransactionStatus::Unknown(value),
        }
    }
}

impl From<TransactionStatus> for String {
    fn from(status: TransactionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 입출금 트랜잭션
///
/// For deposits `address`/`tag` are the depositor-facing side (`*_from`);
/// for withdrawals they are the destination (`*_to`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// 트랜잭션 ID
    pub id: String,
    /// 타임스탬프 (밀리초)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// ISO 8601 datetime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    /// 업데이트 타임스탬프
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,
    /// 트랜잭션 타입
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    /// 화폐 코드
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// 금액
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// 상태
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    /// 주소
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_to: Option<String>,
    /// 태그 (memo, destination tag 등)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_to: Option<String>,
    /// 트랜잭션 해시
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
    /// 수수료
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
    /// 원본 응답
    #[serde(default)]
    pub info: serde_json::Value,
}

impl Transaction {
    fn empty(id: String, tx_type: TransactionType) -> Self {
        Self {
            id,
            timestamp: None,
            datetime: None,
            updated: None,
            tx_type,
            currency: None,
            amount: None,
            status: None,
            address: None,
            address_from: None,
            address_to: None,
            tag: None,
            tag_from: None,
            tag_to: None,
            txid: None,
            fee: None,
            info: serde_json::Value::Null,
        }
    }

    /// 새 입금 트랜잭션 생성
    pub fn deposit(id: String) -> Self {
        Self::empty(id, TransactionType::Deposit)
    }

    /// 새 출금 트랜잭션 생성
    pub fn withdrawal(id: String) -> Self {
        Self::empty(id, TransactionType::Withdrawal)
    }

    /// 타임스탬프 설정 (updated 동일)
    pub fn with_timestamp(mut self, ts: Option<i64>) -> Self {
        self.timestamp = ts;
        self.updated = ts;
        self.datetime = ts.and_then(iso8601);
        self
    }

    /// 주소 설정
    pub fn with_address(mut self, address: Option<String>, tag: Option<String>) -> Self {
        match self.tx_type {
            TransactionType::Deposit => {
                self.address_from = address.clone();
                self.tag_from = tag.clone();
            },
            TransactionType::Withdrawal => {
                self.address_to = address.clone();
                self.tag_to = tag.clone();
            },
        }
        self.address = address;
        self.tag = tag;
        self
    }

    /// 입금인지 확인
    pub fn is_deposit(&self) -> bool {
        self.tx_type == TransactionType::Deposit
    }

    /// 출금인지 확인
    pub fn is_withdrawal(&self) -> bool {
        self.tx_type == TransactionType::Withdrawal
    }

    /// 완료됨인지 확인
    pub fn is_completed(&self) -> bool {
        self.status == Some(TransactionStatus::Ok)
    }

    /// 대기 중인지 확인
    pub fn is_pending(&self) -> bool {
        self.status == Some(TransactionStatus::Pending)
    }
}
