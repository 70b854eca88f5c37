//! # Service Layer
//!
//! ```text
//! services/
//! ├── auth/    # PasswordService, TokenService
//! ├── media/   # MediaUploader, CloudinaryUploader
//! └── users/   # UserService (회원가입, 로그인, 로그아웃, 토큰 갱신)
//! ```

pub mod auth;
pub mod media;
pub mod users;
