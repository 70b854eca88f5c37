//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트가 보낸 요청 본문을 구조화된 타입으로 변환합니다.
//!
//! - [`RegisterUserForm`] / [`RegisterUserRequest`] - multipart 회원가입 요청
//! - [`LoginRequest`] - 로그인 요청 (`validator`로 검증)
//! - [`RefreshTokenRequest`] - 쿠키가 없을 때 본문으로 전달되는 리프레시 토큰
//!
//! 검증 실패는 `AppError::ValidationError`(400)로 변환됩니다.

pub mod auth_request;
pub mod register_request;

pub use auth_request::{LoginRequest, RefreshTokenRequest};
pub use register_request::{RegisterUserForm, RegisterUserRequest};
