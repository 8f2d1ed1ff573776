use super::types::{
    CodeRequest, ConvertRequest, ConvertResponse, DebugResponse, ErrorResponse, QualityResponse,
};
use crate::{
    llm::CompletionClient,
    prompt::{Mode, PromptBuilder},
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{error, info, warn};

const INDEX_HTML: &str = include_str!("../../public/index.html");

type HandlerError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub prompts: Arc<PromptBuilder>,
    pub client: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(prompts: PromptBuilder, client: impl CompletionClient + 'static) -> Self {
        Self {
            prompts: Arc::new(prompts),
            client: Arc::new(client),
        }
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConvertResponse>, HandlerError> {
    let Json(request) = payload.map_err(rejected)?;

    let language = request
        .language
        .as_deref()
        .filter(|language| !language.trim().is_empty())
        .ok_or_else(|| {
            warn!("Rejected convert request without a target language");
            error_response(
                StatusCode::BAD_REQUEST,
                "A target language is required to convert code",
            )
        })?;

    let converted_code = run_task(&state, Mode::Convert, &request.code, Some(language)).await?;

    Ok(Json(ConvertResponse {
        converted_code,
        ok: true,
    }))
}

pub async fn debug(
    State(state): State<AppState>,
    payload: Result<Json<CodeRequest>, JsonRejection>,
) -> Result<Json<DebugResponse>, HandlerError> {
    let Json(request) = payload.map_err(rejected)?;

    let debug_result = run_task(&state, Mode::Debug, &request.code, None).await?;

    Ok(Json(DebugResponse {
        debug_result,
        ok: true,
    }))
}

pub async fn check_quality(
    State(state): State<AppState>,
    payload: Result<Json<CodeRequest>, JsonRejection>,
) -> Result<Json<QualityResponse>, HandlerError> {
    let Json(request) = payload.map_err(rejected)?;

    let quality_result = run_task(&state, Mode::CheckQuality, &request.code, None).await?;

    Ok(Json(QualityResponse {
        quality_result,
        ok: true,
    }))
}

async fn run_task(
    state: &AppState,
    mode: Mode,
    code: &str,
    language: Option<&str>,
) -> Result<String, HandlerError> {
    info!("Received {} request with {} bytes of code", mode, code.len());

    let prompt = state.prompts.build(code, language, mode);

    match state.client.complete(&prompt).await {
        Ok(text) => {
            info!("Completed {} request", mode);
            Ok(text)
        }
        Err(e) => {
            error!("Failed to complete {} request: {}", mode, e);

            let mut message = e.to_string();
            if message.is_empty() {
                message = "Completion request failed".to_string();
            }
            Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, message))
        }
    }
}

fn rejected(rejection: JsonRejection) -> HandlerError {
    warn!("Rejected request body: {}", rejection.body_text());
    error_response(rejection.status(), rejection.body_text())
}

fn error_response(status: StatusCode, message: impl Into<String>) -> HandlerError {
    (status, Json(ErrorResponse::new(message)))
}
