//! # Domain Models Module
//!
//! 영속성과 무관한 도메인 값 객체를 정의하는 모듈입니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//!
//! ### Models (`./`)
//! - **값 객체**: 식별자보다 값 자체가 중요
//! - **수명**: 요청 하나의 범위에서만 존재
//!
//! ## 구성
//!
//! - [`auth`] - 액세스 토큰에서 추출된 인증 사용자 (`AuthenticatedUser`)
//! - [`token`] - JWT 클레임과 토큰 쌍
//! - [`media`] - 업로드 대기 임시 파일(`StagedFile`)과 업로드 결과

pub mod auth;
pub mod token;
pub mod media;
