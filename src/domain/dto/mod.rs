//! # Data Transfer Objects Module
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청/응답 타입입니다.
//! 도메인 엔티티([`User`](crate::domain::entities::users::User))는 응답에 직접 쓰지 않고
//! 항상 이 모듈의 응답 DTO로 변환한 뒤 [`ApiResponse`] envelope에 담아 반환합니다.
//!
//! ```text
//! dto/
//! ├── common/   # 성공 응답 envelope
//! └── users/    # 회원가입, 로그인, 토큰 갱신 요청과 사용자 응답
//! ```

pub mod common;
pub mod users;

pub use common::ApiResponse;
