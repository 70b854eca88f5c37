//! 미디어 업로드 관련 값 객체

pub mod staged_file;

pub use staged_file::{StagedFile, UploadedMedia};
