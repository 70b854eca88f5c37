//! # Domain Layer Module
//!
//! 도메인 계층은 세 부분으로 구성됩니다.
//!
//! ```text
//! domain/
//! ├── entities   - MongoDB 문서와 대응되는 사용자 엔티티
//! ├── dto        - HTTP 요청/응답 계약
//! └── models     - 토큰 클레임, 인증 사용자, 업로드 파일 등 값 모델
//! ```

pub mod entities;
pub mod dto;
pub mod models;
