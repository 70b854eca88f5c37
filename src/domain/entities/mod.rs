//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (영속성 엔티티)
//! ├── models/       ← 토큰, 인증 사용자, 업로드 파일 등 값 객체
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```
//!
//! 모든 엔티티는 `serde`를 통해 BSON으로 직렬화되며, `_id` 필드는
//! `ObjectId`로 매핑됩니다.

pub mod users;
