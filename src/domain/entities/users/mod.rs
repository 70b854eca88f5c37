//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! - [`User`](user::User): `users` 컬렉션 문서 (비밀번호 해시, 리프레시 토큰 포함)
//! - [`UserProfile`](user::UserProfile): 민감 필드를 제외한 공개 프로젝션
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new(
//!     "A B".to_string(),
//!     "a@b.com".to_string(),
//!     "AB",
//!     password_hash,
//!     avatar_url,
//!     None,
//! );
//! assert_eq!(user.username, "ab");
//! ```

pub mod user;

pub use user::{User, UserProfile};
