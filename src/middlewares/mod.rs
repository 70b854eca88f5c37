//! HTTP 미들웨어
//!
//! - [`AuthMiddleware`] - 액세스 토큰 검증 후 `AuthenticatedUser`를 요청에 주입

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
