//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 에러 envelope 자동 변환
//! - **추출기 에러 변환**: JSON/multipart 추출 실패도 같은 envelope으로 응답

pub mod errors;

pub use errors::*;
