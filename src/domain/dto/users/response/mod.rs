//! # 사용자 관련 응답 DTO 모듈
//!
//! 비밀번호 해시와 리프레시 토큰은 어떤 응답 DTO에도 포함되지 않습니다.
//!
//! ```json
//! {
//!   "_id": "507f1f77bcf86cd799439011",
//!   "username": "ab",
//!   "email": "a@b.com",
//!   "fullName": "A B",
//!   "avatar": "https://res.cloudinary.com/demo/image/upload/avatar.png",
//!   "coverImage": "",
//!   "createdAt": "2024-06-01T10:00:00Z",
//!   "updatedAt": "2024-06-01T10:00:00Z"
//! }
//! ```

pub mod user_response;

pub use user_response::{LoginResponse, UserResponse};
