//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 `Arc<dyn UserStore>`로 저장소를 주입받습니다.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(database.clone()));
//! let user = store.find_by_username_or_email(Some("ab"), None).await?;
//! ```

pub mod users;
