//! JWT 인증 토큰 클레임과 토큰 쌍
//!
//! 액세스 토큰과 리프레시 토큰은 서로 다른 비밀키로 서명되며,
//! 리프레시 토큰은 사용자 식별자만 담습니다.
use serde::{Deserialize, Serialize};

/// 액세스 토큰 클레임
///
/// - `sub`: 사용자 ID (ObjectId 16진수 문자열)
/// - `email`, `username`, `full_name`: 클라이언트 표시용 사용자 정보
/// - `iat` / `exp`: 발급/만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 ID (같은 초에 발급된 토큰도 서로 다름)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// 리프레시 토큰 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// 액세스/리프레시 토큰 쌍
///
/// 로그인과 토큰 갱신 응답의 `data`로 직렬화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
