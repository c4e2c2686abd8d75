//! # 검증기 서브프로세스 클라이언트
//!
//! 다른 Rust 코드(또는 데모 바이너리)에서 검증기 실행 파일을 `single` 모드로 호출하고,
//! 표준 출력의 JSON을 `ValidationResult`로 되돌려 받습니다.
//!
//! ```text
//! ValidationClient ──spawn──► user_validator --mode single --input=<json>
//!        ▲                               │
//!        └──────── stdout JSON ◄─────────┘
//! ```
//!
//! 클라이언트는 실패를 에러로 전파하지 않고 항상 `ValidationResult`를 반환합니다.
//!
//! | 상황 | message |
//! |------|---------|
//! | 제한 시간 초과 | `Timeout na validação` |
//! | 0이 아닌 종료 코드 | `Erro na execução: <출력>` |
//! | 실행/파싱 실패 | `Erro interno: <상세>` |
//! | 입력 직렬화 실패 | `Erro ao converter dados para JSON: <상세>` |

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, warn};
use serde::Serialize;

use crate::{
    config::ClientConfig,
    core::errors::{AppError, AppResult, ErrorContext},
    domain::dto::users::response::ValidationResult,
};

/// 종료 여부 확인 주기
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// 검증기 프로세스 실행 결과
#[derive(Debug)]
struct ProcessOutput {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

impl ProcessOutput {
    /// 표준 출력과 표준 에러를 줄바꿈 없이 이어 붙입니다.
    fn combined(&self) -> String {
        self.stdout.lines().chain(self.stderr.lines()).collect()
    }
}

/// 검증기 실행 파일을 호출하는 클라이언트
///
/// # 사용 예제
///
/// ```rust,ignore
/// use std::time::Duration;
/// use crate::services::client::ValidationClient;
///
/// let client = ValidationClient::new("./user_validator", Duration::from_secs(5));
/// let result = client.validate_json(r#"{"name":"Ana","email":"ana@usp.br","idade":16}"#);
/// assert!(!result.valid);
/// ```
#[derive(Debug, Clone)]
pub struct ValidationClient {
    executable_path: PathBuf,
    timeout: Duration,
}

impl ValidationClient {
    pub fn new(executable_path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            executable_path: executable_path.into(),
            timeout,
        }
    }

    /// `VALIDATOR_PATH`, `VALIDATOR_TIMEOUT_MS` 환경 변수로 클라이언트를 생성합니다.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::executable_path(), ClientConfig::timeout())
    }

    pub fn executable_path(&self) -> &Path {
        &self.executable_path
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// JSON 문자열을 검증합니다.
    pub fn validate_json(&self, user_json: &str) -> ValidationResult {
        match self.run(user_json) {
            Ok(result) => result,
            Err(e) => {
                warn!("검증기 호출 실패 ({}): {}", self.executable_path.display(), e);
                Self::error_result(e)
            }
        }
    }

    /// 직렬화 가능한 값을 JSON으로 변환한 뒤 검증합니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let user = serde_json::json!({"name": "João Silva", "email": "raywall@usp.br", "idade": 25});
    /// let result = client.validate_value(&user);
    /// ```
    pub fn validate_value<T: Serialize + ?Sized>(&self, user_data: &T) -> ValidationResult {
        match serde_json::to_string(user_data) {
            Ok(user_json) => self.validate_json(&user_json),
            Err(e) => ValidationResult::failure(format!(
                "Erro ao converter dados para JSON: {}",
                e
            )),
        }
    }

    fn run(&self, user_json: &str) -> AppResult<ValidationResult> {
        let output = self.execute(user_json)?;

        if !output.status.success() {
            return Err(AppError::ExternalProcessError(output.combined()));
        }

        serde_json::from_str::<ValidationResult>(output.stdout.trim())
            .context("resposta do validador não é JSON")
    }

    fn execute(&self, user_json: &str) -> AppResult<ProcessOutput> {
        debug!(
            "검증기 실행: {} (timeout {:?})",
            self.executable_path.display(),
            self.timeout
        );

        let mut child = Command::new(&self.executable_path)
            .arg("--mode")
            .arg("single")
            .arg(format!("--input={}", user_json))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("falha ao executar {}", self.executable_path.display()))?;

        let stdout_reader = spawn_reader(child.stdout.take());
        let stderr_reader = spawn_reader(child.stderr.take());

        let status = self.wait_with_deadline(&mut child)?;

        Ok(ProcessOutput {
            status,
            stdout: join_reader(stdout_reader)?,
            stderr: join_reader(stderr_reader)?,
        })
    }

    fn wait_with_deadline(&self, child: &mut Child) -> AppResult<ExitStatus> {
        let deadline = Instant::now() + self.timeout;

        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }

            if Instant::now() >= deadline {
                // 이미 종료된 경우 kill이 실패할 수 있음
                let _ = child.kill();
                let _ = child.wait();
                return Err(AppError::TimeoutError(timeout_millis(self.timeout)));
            }

            thread::sleep(POLL_INTERVAL);
        }
    }

    fn error_result(error: AppError) -> ValidationResult {
        match error {
            AppError::TimeoutError(_) => ValidationResult::failure("Timeout na validação"),
            AppError::ExternalProcessError(output) => {
                ValidationResult::failure(format!("Erro na execução: {}", output))
            }
            AppError::InternalError(detail) => {
                ValidationResult::failure(format!("Erro interno: {}", detail))
            }
            other => ValidationResult::failure(format!("Erro interno: {}", other)),
        }
    }
}

impl Default for ValidationClient {
    fn default() -> Self {
        Self::from_env()
    }
}

fn spawn_reader<R>(pipe: Option<R>) -> JoinHandle<std::io::Result<String>>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf)?;
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    })
}

fn join_reader(handle: JoinHandle<std::io::Result<String>>) -> AppResult<String> {
    let text = handle
        .join()
        .map_err(|_| AppError::InternalError("leitor de saída do validador falhou".to_string()))??;
    Ok(text)
}

/// 타임아웃을 밀리초로 변환 (`u64` 범위를 넘으면 `u64::MAX`)
fn timeout_millis(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
}
