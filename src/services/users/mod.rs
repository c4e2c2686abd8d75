//! 사용자 검증 서비스 모듈
//!
//! 사용자 레코드의 디코딩과 필드 규칙 검증을 담당하는 서비스를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserValidationService;
//!
//! let service = UserValidationService::new();
//! let result = service.process_json(r#"{"name":"Jo","email":"jo@x.com","idade":150}"#)?;
//! assert_eq!(result.errors, vec!["Idade deve ser realista (máximo 120 anos)"]);
//! ```

pub mod user_validation_service;

pub use user_validation_service::UserValidationService;
