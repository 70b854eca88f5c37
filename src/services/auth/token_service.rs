//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰의 생성, 검증을 담당합니다.
//! 두 토큰은 서로 다른 비밀키와 수명을 사용하므로, 리프레시 토큰을
//! 액세스 토큰 자리에 제시하거나 그 반대로 사용하면 서명 검증에서 거부됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;
use crate::{
    config::JwtConfig,
    core::{AppError, AppResult},
    domain::entities::users::User,
    domain::models::token::{AccessTokenClaims, RefreshTokenClaims, TokenPair},
};

const BEARER_PREFIX: &str = "Bearer ";

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용합니다.
/// 기본 수명은 액세스 토큰 24시간, 리프레시 토큰 10일이며 환경 변수로 조정합니다.
pub struct TokenService {
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(access_secret: &str, refresh_secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            access_encoding_key: EncodingKey::from_secret(access_secret.as_bytes()),
            access_decoding_key: DecodingKey::from_secret(access_secret.as_bytes()),
            refresh_encoding_key: EncodingKey::from_secret(refresh_secret.as_bytes()),
            refresh_decoding_key: DecodingKey::from_secret(refresh_secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// 환경 변수 설정으로 서비스를 생성합니다.
    pub fn from_config() -> Self {
        Self::new(
            &JwtConfig::access_secret(),
            &JwtConfig::refresh_secret(),
            Duration::hours(JwtConfig::access_expiration_hours()),
            Duration::days(JwtConfig::refresh_expiration_days()),
        )
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();

        let claims = AccessTokenClaims {
            sub: Self::subject(user)?,
            email: user.email.clone(),
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            iat: now.timestamp(),
            exp: (now + self.access_ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        Self::sign(&claims, &self.access_encoding_key)
    }

    /// 사용자를 위한 리프레시 토큰 생성
    ///
    /// 리프레시 토큰에는 사용자 ID만 담깁니다.
    pub fn generate_refresh_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();

        let claims = RefreshTokenClaims {
            sub: Self::subject(user)?,
            iat: now.timestamp(),
            exp: (now + self.refresh_ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        Self::sign(&claims, &self.refresh_encoding_key)
    }

    pub fn generate_token_pair(&self, user: &User) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.generate_access_token(user)?,
            refresh_token: self.generate_refresh_token(user)?,
        })
    }

    /// 액세스 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 서명 불일치, 형식 오류
    pub fn verify_access_token(&self, token: &str) -> AppResult<AccessTokenClaims> {
        Self::verify(token, &self.access_decoding_key)
    }

    pub fn verify_refresh_token(&self, token: &str) -> AppResult<RefreshTokenClaims> {
        Self::verify(token, &self.refresh_decoding_key)
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 추출합니다.
    ///
    /// ```rust,ignore
    /// let token = token_service.extract_bearer_token("Bearer eyJhbGciOi...")?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix(BEARER_PREFIX).map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }

    fn subject(user: &User) -> AppResult<String> {
        user.id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))
    }

    fn sign<T: Serialize>(claims: &T, key: &EncodingKey) -> AppResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    fn verify<T: DeserializeOwned>(token: &str, key: &DecodingKey) -> AppResult<T> {
        decode::<T>(token, key, &Validation::new(Algorithm::HS256))
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }
}
