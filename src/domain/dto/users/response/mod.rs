//! # 사용자 관련 응답 DTO 모듈
//!
//! 검증 결과를 표준 출력으로 내보내기 위한 데이터 구조를 정의합니다.
//!
//! 출력 형식은 다음 세 가지 중 하나입니다:
//!
//! ```json
//! {"valid":true,"message":"Usuário válido"}
//! {"valid":false,"errors":["Nome é obrigatório","E-mail deve ter formato válido"]}
//! {"valid":false,"message":"JSON inválido: expected value at line 1 column 1"}
//! ```

pub mod validation_result;

pub use validation_result::{ValidationResult, VALID_USER_MESSAGE};
