use code_assist::{
    Error,
    config::{self, Config},
    prompt::{Mode, PromptBuilder},
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

async fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("config.yaml");
    tokio::fs::write(&path, content).await.unwrap();
    path.to_string_lossy().to_string()
}

#[tokio::test]
async fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
llm:
  base_url: "http://localhost:9999/v1"
  api_key: "file-key"
  model: "davinci-002"
  temperature: 0.2
  max_tokens: 64
server:
  host: "127.0.0.1"
  port: 4000
  logs:
    level: "debug"
"#,
    )
    .await;

    let config = config::load_from(&path).await.unwrap();

    assert_eq!(config.llm.base_url, "http://localhost:9999/v1");
    assert_eq!(config.llm.api_key, "file-key");
    assert_eq!(config.llm.model, "davinci-002");
    assert_eq!(config.llm.temperature, 0.2);
    assert_eq!(config.llm.max_tokens, 64);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 4000);
    assert_eq!(config.server.logs.level, "debug");
}

#[tokio::test]
async fn test_prompt_overrides_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
prompts:
  convert: "Rewrite in {language}:\n{code}"
"#,
    )
    .await;

    let config = config::load_from(&path).await.unwrap();
    let builder = PromptBuilder::new(config.prompts.clone());

    assert_eq!(
        builder.build("x = 1", Some("Rust"), Mode::Convert),
        "Rewrite in Rust:\nx = 1"
    );
    // Templates not named in the file keep the built-in wording
    assert_eq!(config.prompts.debug, Config::default().prompts.debug);
}

#[tokio::test]
async fn test_env_overrides_file_values() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "llm:\n  api_key: \"file-key\"\n").await;

    let mut config = config::load_from(&path).await.unwrap();
    config
        .apply_env(|key| match key {
            "OPENAI_API_KEY" => Some("env-key".to_string()),
            "PORT" => Some("5050".to_string()),
            _ => None,
        })
        .unwrap();

    assert_eq!(config.llm.api_key, "env-key");
    assert_eq!(config.server.port, 5050);
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yaml");

    let result = config::load_from(&path.to_string_lossy()).await;

    assert!(matches!(result, Err(Error::Io(_))));
}

#[tokio::test]
async fn test_invalid_yaml_is_yaml_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "server:\n  port: [not, a, port]\n").await;

    let result = config::load_from(&path).await;

    assert!(matches!(result, Err(Error::Yaml(_))));
}
