//! # 사용자 관련 요청 DTO 모듈
//!
//! 검증기에 입력되는 사용자 레코드를 정의합니다.
//! 원시 JSON 텍스트를 구조화된 Rust 타입으로 변환하고,
//! `validator` 크레이트의 derive 속성으로 필드별 비즈니스 규칙을 선언합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 이름 길이, 이메일 패턴, 나이 범위 (`validator`)
//!
//! 구문 검증 실패는 `AppError::DecodeError`가 되고,
//! 형식 검증 실패는 `valid: false` 결과로 보고됩니다.

pub mod user_request;

pub use user_request::{FieldRule, UserRequest};
