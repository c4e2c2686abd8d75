// Subprocess client tests driving the built validator binary.
use std::time::Duration;

use serde_json::json;
use user_validator::domain::dto::users::response::ValidationResult;
use user_validator::services::client::ValidationClient;

fn client() -> ValidationClient {
    ValidationClient::new(
        env!("CARGO_BIN_EXE_user_validator"),
        Duration::from_secs(10),
    )
}

#[test]
fn client_valid_user_from_value() {
    let user = json!({
        "name": "João Silva",
        "email": "raywall@usp.br",
        "idade": 25,
    });

    assert_eq!(client().validate_value(&user), ValidationResult::valid_user());
}

#[test]
fn client_minor_user_reports_age_error() {
    let user = json!({
        "name": "Ana",
        "email": "ana@usp.br",
        "idade": 16,
    });

    let result = client().validate_value(&user);
    assert!(!result.valid);
    assert_eq!(result.message, None);
    assert_eq!(result.errors, vec!["Idade deve ser maior ou igual a 18 anos"]);
}

#[test]
fn client_direct_json_string() {
    let result = client().validate_json(r#"{"name":"nome","email":"raywall@usp.br","idade":18}"#);
    assert!(result.valid);
}

#[test]
fn client_json_with_leading_dash_like_content() {
    let result = client().validate_json(r#"{"name":"-x-","email":"a@b.co","idade":30}"#);
    assert!(result.valid);
}

#[test]
fn client_malformed_json_reports_execution_error() {
    let result = client().validate_json("not valid json");

    assert!(!result.valid);
    let message = result.message.expect("message");
    assert!(message.starts_with("Erro na execução: "), "{}", message);
    assert!(message.contains("JSON inválido: "), "{}", message);
}

#[test]
fn client_empty_json_reports_usage_error() {
    let result = client().validate_json("");

    let message = result.message.expect("message");
    assert!(message.starts_with("Erro na execução: "), "{}", message);
    assert!(message.contains("Input JSON é obrigatório no modo single"), "{}", message);
}
