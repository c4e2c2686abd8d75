//! 사용자 레코드 검증기
//!
//! 이름, 이메일, 나이(`idade`)로 구성된 사용자 JSON을 고정된 규칙으로 검증하고
//! 결과를 JSON으로 출력하는 명령줄 도구와 라이브러리입니다.
//!
//! # Features
//!
//! - **두 가지 입력 모드**: 표준 입력 한 줄 (`stdin`) 또는 CLI 인자 (`single`)
//! - **전체 오류 수집**: 실패한 모든 필드 규칙을 이름 → 이메일 → 나이 순으로 보고
//! - **서브프로세스 클라이언트**: 다른 프로그램에서 검증기 실행 파일을 제한 시간과 함께 호출
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Handlers     │ ← 모드 선택, stdin/stdout
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 디코딩, 필드 규칙 검증, 서브프로세스 호출
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │      DTOs       │ ← UserRequest, ValidationResult
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use user_validator::services::users::UserValidationService;
//!
//! let service = UserValidationService::new();
//! let result = service
//!     .process_json(r#"{"name":"Ana","email":"ana@example.com","idade":25}"#)
//!     .unwrap();
//!
//! assert!(result.valid);
//! assert_eq!(result.message.as_deref(), Some("Usuário válido"));
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod handlers;
