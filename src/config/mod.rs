//! # Configuration Module
//!
//! 서비스 설정을 환경 변수 기반으로 중앙에서 관리하는 모듈입니다.
//! 각 설정 구조체는 필요한 시점에 환경 변수를 읽어 값을 반환하며,
//! 서비스 구조체는 시작 시점에 이 값들을 받아 생성됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, bcrypt, CORS, 업로드 제한
//! - [`auth_config`] - JWT 토큰, 인증 쿠키
//! - [`media_config`] - Cloudinary 업로드
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8000"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="videotube"
//!
//! # JWT
//! export ACCESS_TOKEN_SECRET="..."
//! export REFRESH_TOKEN_SECRET="..."
//!
//! # Cloudinary
//! export CLOUDINARY_CLOUD_NAME="..."
//! export CLOUDINARY_API_KEY="..."
//! export CLOUDINARY_API_SECRET="..."
//!
//! # CORS
//! export CORS_ORIGIN="http://localhost:3000"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod media_config;

pub use data_config::*;
pub use auth_config::*;
pub use media_config::*;
