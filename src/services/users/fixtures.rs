//! 서비스/핸들러 테스트 공용 헬퍼

use std::io::Write;
use chrono::Duration;
use tempfile::NamedTempFile;
use crate::domain::models::media::StagedFile;
use crate::services::auth::TokenService;

pub fn test_token_service() -> TokenService {
    TokenService::new("test-access-secret", "test-refresh-secret", Duration::hours(1), Duration::days(10))
}

/// 내용이 있는 임시 파일을 업로드 대기 파일로 만듭니다.
pub fn staged_file(file_name: &str) -> StagedFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"\x89PNG fake image").unwrap();

    StagedFile::new(file, Some(file_name.to_string()), Some("image/png".to_string()), 15)
}
