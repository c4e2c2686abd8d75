//! # User Data Transfer Objects Module
//!
//! 사용자 검증의 입력과 출력 데이터 구조를 정의하는 모듈입니다.
//!
//! ```text
//! users/
//! ├── request/                 # 입력 JSON → UserRequest
//! │   └── user_request.rs     # 필드 규칙 포함
//! └── response/                # ValidationResult → 출력 JSON
//!     └── validation_result.rs
//! ```

pub mod request;
pub mod response;
