//! # Domain Layer Module
//!
//! 검증 대상 레코드와 검증 결과 등 도메인 타입을 담는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! └── DTOs  - 입력 레코드와 결과 레코드
//!      │
//!      ▼
//! Services  - 디코딩, 검증, 외부 프로세스 호출
//! ```

pub mod dto;
