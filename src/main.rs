//! 사용자 검증기 메인 애플리케이션
//!
//! 명령줄 인자를 해석하고 한 번의 검증을 수행한 뒤 종료합니다.
//! 결과 JSON은 표준 출력으로, 에러 메시지와 로그는 표준 에러로 출력됩니다.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use env_logger::Env;
use log::debug;
use user_validator::config::{Environment, LogConfig};
use user_validator::handlers::{self, CliArgs};

fn main() -> ExitCode {
    // 환경 설정 및 로깅 초기화
    let env_file_status = load_env_file();
    init_logging();
    debug!("{}", env_file_status);

    let args = CliArgs::parse();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match handlers::handle(&args, stdin.lock(), &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 로거 초기화 전에 호출되므로 결과는 문자열로 돌려주고, 호출자가 로깅합니다.
/// 파일이 없어도 실행은 계속됩니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=test` - .env.test 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> String {
    let profile = Environment::current();

    match profile.env_file() {
        Some(file) => match dotenv::from_filename(file) {
            Ok(_) => format!("{} 파일 로드 됨 ({:?})", file, profile),
            Err(e) => format!("{} 파일 로드 실패: {}", file, e),
        },
        None => match dotenv() {
            Ok(_) => "기본 .env 파일 로드".to_string(),
            Err(e) => format!("기본 .env 파일 로드 실패: {}", e),
        },
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 로그는 표준 에러로만 출력되므로 표준 출력의 결과 JSON과 섞이지 않습니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: `LOG_FILTER` 또는 "warn")
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug user_validator --mode single --input '{"name":"Ana"}'
/// ```
fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or(LogConfig::default_filter()))
        .target(env_logger::Target::Stderr)
        .init();
}
