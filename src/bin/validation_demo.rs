//! 검증기 서브프로세스 클라이언트 데모
//!
//! `ValidationClient`로 검증기 실행 파일을 호출하여 세 가지 시나리오의 결과를 출력합니다.
//! 실행 파일 경로와 제한 시간은 `VALIDATOR_PATH`, `VALIDATOR_TIMEOUT_MS`로 지정합니다.
//!
//! ```bash
//! VALIDATOR_PATH=target/debug/user_validator cargo run --bin validation_demo
//! ```

use env_logger::Env;
use serde_json::json;
use user_validator::config::LogConfig;
use user_validator::domain::dto::users::response::ValidationResult;
use user_validator::services::client::ValidationClient;

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or(LogConfig::default_filter()));

    println!("=== Teste de Validação de Usuário ===");

    let client = ValidationClient::from_env();

    // 테스트 1: 유효한 사용자
    println!("\n--- Teste 1: Usuário Válido ---");
    let valid_user = json!({
        "name": "João Silva",
        "email": "raywall@usp.br",
        "idade": 25,
    });
    print_result("Usuário Válido", &client.validate_value(&valid_user));

    // 테스트 2: 미성년 사용자
    println!("\n--- Teste 2: Usuário Menor de Idade ---");
    let minor_user = json!({
        "name": "Ana",
        "email": "ana@usp.br",
        "idade": 16,
    });
    print_result("Usuário Menor", &client.validate_value(&minor_user));

    // 테스트 3: JSON 문자열 직접 전달
    println!("\n--- Teste 3: JSON Direto ---");
    let json_request = r#"{"name":"nome","email":"raywall@usp.br","idade":18}"#;
    print_result("JSON Direto", &client.validate_json(json_request));
}

fn print_result(test_name: &str, result: &ValidationResult) {
    println!("{}:", test_name);
    println!("Válido: {}", result.valid);

    if let Some(message) = result.message.as_deref().filter(|m| !m.is_empty()) {
        println!("Mensagem: {}", message);
    }

    if !result.errors.is_empty() {
        println!("Erros:");
        for error in &result.errors {
            println!("     - {}", error);
        }
    }
}
