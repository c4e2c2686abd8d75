//! # CLI Handlers Module
//!
//! 프로세스 입출력을 처리하는 핸들러를 정의하는 모듈입니다.
//! 인자 해석과 입력 읽기, 결과 출력을 담당하고 비즈니스 로직은 서비스 계층에 위임합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   main - 로깅/설정 초기화, 종료 코드 결정
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - 모드 선택, stdin/stdout     ← I/O Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 디코딩과 검증                       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   DTOs - UserRequest / ValidationResult        ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```

pub mod validation_handler;

pub use validation_handler::{handle, read_payload, CliArgs, Mode};
