//! # Authentication Configuration Module
//!
//! JWT 토큰과 인증 쿠키 관련 설정을 관리하는 모듈입니다.
//! 액세스 토큰과 리프레시 토큰은 서로 다른 비밀키와 만료 시간을 사용합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export ACCESS_TOKEN_SECRET="your-access-token-secret"
//! export ACCESS_TOKEN_EXPIRATION_HOURS="24"
//! export REFRESH_TOKEN_SECRET="your-refresh-token-secret"
//! export REFRESH_TOKEN_EXPIRATION_DAYS="10"
//!
//! # 로컬 HTTP 개발 환경에서만 false로 설정
//! export COOKIE_SECURE="true"
//! ```

use std::env;

pub struct JwtConfig;

impl JwtConfig {
    pub fn access_secret() -> String {
        env::var("ACCESS_TOKEN_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("ACCESS_TOKEN_SECRET not set, using default (not secure for production!)");
                "access-token-secret".to_string()
            })
    }

    pub fn refresh_secret() -> String {
        env::var("REFRESH_TOKEN_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("REFRESH_TOKEN_SECRET not set, using default (not secure for production!)");
                "refresh-token-secret".to_string()
            })
    }

    pub fn access_expiration_hours() -> i64 {
        env::var("ACCESS_TOKEN_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }

    pub fn refresh_expiration_days() -> i64 {
        env::var("REFRESH_TOKEN_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

/// 인증 쿠키 설정
pub struct CookieConfig;

impl CookieConfig {
    pub const ACCESS_TOKEN: &'static str = "accessToken";
    pub const REFRESH_TOKEN: &'static str = "refreshToken";

    /// `Secure` 속성 사용 여부 (기본값: true)
    pub fn secure() -> bool {
        env::var("COOKIE_SECURE")
            .map(|value| !matches!(value.to_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_names() {
        assert_eq!(CookieConfig::ACCESS_TOKEN, "accessToken");
        assert_eq!(CookieConfig::REFRESH_TOKEN, "refreshToken");
    }

    #[test]
    fn test_expiration_defaults() {
        if env::var("ACCESS_TOKEN_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::access_expiration_hours(), 24);
        }

        if env::var("REFRESH_TOKEN_EXPIRATION_DAYS").is_err() {
            assert_eq!(JwtConfig::refresh_expiration_days(), 10);
        }
    }
}
