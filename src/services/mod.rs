//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 사용자 검증과 외부 검증기 호출 기능을 담당합니다.
//!
//! # Features
//!
//! - JSON 사용자 레코드 디코딩
//! - 이름/이메일/나이 필드 규칙 검증
//! - 검증기 실행 파일 서브프로세스 호출 (제한 시간 포함)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{client::ValidationClient, users::UserValidationService};
//!
//! let local = UserValidationService::new().process_json(raw)?;
//! let remote = ValidationClient::from_env().validate_json(raw);
//! ```

pub mod users;
pub mod client;
