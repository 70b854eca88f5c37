//! 사용자 계정 서비스 백엔드
//!
//! 회원가입(프로필 이미지 업로드 포함), 로그인, 로그아웃, 토큰 갱신을 제공하는
//! Actix-web + MongoDB 기반 서비스입니다.
//!
//! # Features
//!
//! - **회원가입**: multipart 폼 수신, 아바타/커버 이미지를 Cloudinary에 업로드
//! - **JWT 인증**: HS256 액세스/리프레시 토큰, HttpOnly 쿠키 또는 Bearer 헤더
//! - **MongoDB**: 사용자 문서 저장, 사용자명/이메일 유니크 인덱스
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 쿠키
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 토큰, 업로드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (UserStore)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! let repository = UserRepository::new(database);
//! let service = UserService::new(
//!     Arc::new(repository),
//!     Arc::new(CloudinaryUploader::from_config()),
//!     PasswordService::from_config(),
//!     Arc::new(TokenService::from_config()),
//! );
//!
//! let result = service.login(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
