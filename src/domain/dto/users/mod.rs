//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── register_request.rs   # multipart 회원가입 폼
//! │   └── auth_request.rs       # 로그인 / 토큰 갱신
//! └── response/
//!     └── user_response.rs      # 사용자 프로필, 로그인 응답
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
