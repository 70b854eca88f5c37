//! 자격 증명 서비스
//!
//! - [`PasswordService`] - bcrypt 비밀번호 해싱/검증
//! - [`TokenService`] - 액세스/리프레시 JWT 발급과 검증

pub mod password_service;
pub mod token_service;

pub use password_service::PasswordService;
pub use token_service::TokenService;
