//! Exchange configuration

/// 거래소 설정
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    token: Option<String>,
    timeout_ms: u64,
    rate_limit_ms: Option<u64>,
    hostname: Option<String>,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeConfig {
    /// 새로운 빈 설정 생성
    pub fn new() -> Self {
        Self {
            token: None,
            timeout_ms: 30000,
            rate_limit_ms: None,
            hostname: None,
        }
    }

    /// Bearer 토큰 설정
    ///
    /// The token is issued by the exchange out of band and attached verbatim
    /// to every private request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// 타임아웃 설정 (밀리초)
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// 레이트 리밋 설정 (밀리초). 0 disables throttling.
    pub fn with_rate_limit_ms(mut self, rate_limit_ms: u64) -> Self {
        self.rate_limit_ms = Some(rate_limit_ms);
        self
    }

    /// 호스트네임 설정
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    // === Getters ===

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Configured interval, if the caller overrode the exchange default
    pub fn rate_limit_ms(&self) -> Option<u64> {
        self.rate_limit_ms
    }

    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    /// 인증 정보 유효성 확인
    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ExchangeConfig::new()
            .with_token("abc")
            .with_timeout(5000)
            .with_rate_limit_ms(0)
            .with_hostname("api.example.test");

        assert_eq!(config.token(), Some("abc"));
        assert_eq!(config.timeout_ms(), 5000);
        assert_eq!(config.rate_limit_ms(), Some(0));
        assert_eq!(config.hostname(), Some("api.example.test"));
        assert!(config.has_token());
    }

    #[test]
    fn test_config_default() {
        let config = ExchangeConfig::default();
        assert!(config.token().is_none());
        assert!(!config.has_token());
        assert_eq!(config.timeout_ms(), 30000);
        assert_eq!(config.rate_limit_ms(), None);
    }

    #[test]
    fn test_empty_token_is_absent() {
        let config = ExchangeConfig::new().with_token("");
        assert!(!config.has_token());
    }
}
