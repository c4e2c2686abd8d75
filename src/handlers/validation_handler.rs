//! # Validation CLI Handler
//!
//! 명령줄 인자로 선택된 모드에 따라 JSON 페이로드를 읽고,
//! 검증 결과를 표준 출력에 한 줄의 JSON으로 기록합니다.
//!
//! ## 모드
//!
//! | 모드 | 페이로드 출처 | 실패 조건 |
//! |------|---------------|-----------|
//! | `stdin` (기본값) | 표준 입력 한 줄 | - |
//! | `single` | `--input` 값 | `--input`이 비어 있음 |
//! | 그 외 | - | 항상 `UsageError` |
//!
//! ## 결과 처리
//!
//! | 상황 | 표준 출력 | 반환값 |
//! |------|-----------|--------|
//! | 검증 완료 (유효/무효 모두) | 결과 JSON | `Ok(result)` |
//! | JSON 디코딩 실패 | `JSON inválido: ...` 결과 JSON | `Err(DecodeError)` |
//! | 사용법 오류 | 없음 | `Err(UsageError)` |

use std::fmt;
use std::io::{BufRead, Write};

use clap::Parser;
use log::{debug, info};

use crate::{
    core::errors::{AppError, AppResult},
    domain::dto::users::response::ValidationResult,
    services::users::UserValidationService,
    utils::string_utils::strip_line_ending,
};

/// 명령줄 인자
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "user_validator",
    version,
    about = "Validates a user JSON record (name, email, idade) and prints a JSON result"
)]
pub struct CliArgs {
    /// Modo: stdin ou single
    #[arg(long, default_value = "stdin")]
    pub mode: String,

    /// JSON input para modo single
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub input: String,
}

/// 실행 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 표준 입력에서 한 줄을 읽음
    Stdin,
    /// `--input` 인자를 사용
    Single,
}

impl Mode {
    /// 모드 문자열을 해석합니다. 알 수 없는 값은 `UsageError`입니다.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "stdin" => Ok(Mode::Stdin),
            "single" => Ok(Mode::Single),
            other => Err(AppError::UsageError(format!("Modo inválido: {}", other))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Stdin => write!(f, "stdin"),
            Mode::Single => write!(f, "single"),
        }
    }
}

/// 모드에 맞게 JSON 페이로드를 가져옵니다
///
/// `stdin` 모드는 한 줄 전체를 바이트로 읽고 끝의 줄바꿈만 제거합니다.
/// 공백이 포함된 JSON도 잘리지 않으며, UTF-8 검사는 디코더에 맡깁니다.
pub fn read_payload<R: BufRead>(mode: Mode, input: &str, mut stdin: R) -> AppResult<Vec<u8>> {
    match mode {
        Mode::Stdin => {
            let mut line = Vec::new();
            stdin.read_until(b'\n', &mut line)?;
            Ok(strip_line_ending(&line).to_vec())
        }
        Mode::Single => {
            if input.is_empty() {
                return Err(AppError::UsageError(
                    "Input JSON é obrigatório no modo single".to_string(),
                ));
            }
            Ok(input.as_bytes().to_vec())
        }
    }
}

/// 한 번의 검증 실행을 처리합니다
///
/// 검증이 끝나면 결과를 `stdout`에 기록하고 반환합니다.
/// 디코딩에 실패하면 실패 결과를 기록한 뒤 `DecodeError`를 반환하므로,
/// 호출자는 에러 메시지를 표준 에러로 출력하고 종료 코드 1로 끝내면 됩니다.
pub fn handle<R, W>(args: &CliArgs, stdin: R, stdout: &mut W) -> AppResult<ValidationResult>
where
    R: BufRead,
    W: Write,
{
    let mode = Mode::parse(&args.mode)?;
    let payload = read_payload(mode, &args.input, stdin)?;

    debug!("모드 {} - 페이로드 {} bytes", mode, payload.len());

    let service = UserValidationService::new();
    match service.process_bytes(&payload) {
        Ok(result) => {
            info!("검증 결과: valid={}, errors={}", result.valid, result.errors.len());
            write_result(stdout, &result)?;
            Ok(result)
        }
        Err(AppError::DecodeError(detail)) => {
            write_result(stdout, &ValidationResult::invalid_json(&detail))?;
            Err(AppError::DecodeError(detail))
        }
        Err(e) => Err(e),
    }
}

fn write_result<W: Write>(stdout: &mut W, result: &ValidationResult) -> AppResult<()> {
    let json = result.to_json()?;
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}
