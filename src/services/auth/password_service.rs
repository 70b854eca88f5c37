//! 비밀번호 해싱/검증 서비스

use std::time::Instant;
use actix_web::web;
use crate::config::PasswordConfig;
use crate::core::{AppError, AppResult};

/// bcrypt 기반 비밀번호 서비스
///
/// cost는 `BCRYPT_COST` 또는 실행 환경별 기본값을 사용합니다.
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    /// bcrypt 연산은 `web::block`으로 블로킹 스레드 풀에서 실행됩니다.
    pub async fn hash(&self, password: &str) -> AppResult<String> {
        let cost = self.cost;
        let password = password.to_string();

        let hash_start = Instant::now();
        let password_hash = web::block(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(password_hash)
    }

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    pub async fn verify(&self, password: &str, password_hash: &str) -> AppResult<bool> {
        let password = password.to_string();
        let password_hash = password_hash.to_string();

        let verify_start = Instant::now();
        let is_valid = web::block(move || bcrypt::verify(password, &password_hash))
            .await
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        log::debug!("Password verification took: {:?}", verify_start.elapsed());
        Ok(is_valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_hash_and_verify() {
        let service = PasswordService::new(4);
        let hash = service.hash("p1").await.unwrap();

        assert_ne!(hash, "p1");
        assert!(service.verify("p1", &hash).await.unwrap());
        assert!(!service.verify("p2", &hash).await.unwrap());
    }

    #[actix_web::test]
    async fn test_malformed_hash_is_internal_error() {
        let service = PasswordService::new(4);
        assert!(matches!(
            service.verify("p1", "not-a-hash").await,
            Err(AppError::InternalError(_))
        ));
    }
}
