//! HTTP surface: the page route and the roast pipeline behind `POST /roast`.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::encode::{encode_image, EncodeError};
use crate::page;
use crate::prompts::RoastStyle;
use crate::roast::{InferenceError, MistralClient};

/// Uploads above this size are rejected before buffering.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Per-process immutable state: the inference client and the env credential.
#[derive(Clone)]
pub struct AppState {
    pub mistral: MistralClient,
    pub env_api_key: Option<String>,
}

impl AppState {
    pub fn new(mistral: MistralClient, env_api_key: Option<String>) -> Self {
        Self {
            mistral,
            env_api_key,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoastResponse {
    pub roast: String,
    pub style: RoastStyle,
    pub model: String,
    pub processing_time_ms: u128,
}

#[derive(Debug)]
pub enum AppError {
    /// Malformed form data: bad multipart, missing fields, unknown style.
    BadRequest(String),
    Encode(EncodeError),
    /// No credential in the environment nor in the form.
    MissingApiKey,
    Inference(InferenceError),
}

impl From<EncodeError> for AppError {
    fn from(err: EncodeError) -> Self {
        AppError::Encode(err)
    }
}

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        AppError::Inference(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, "request", message),
            AppError::Encode(err) => (StatusCode::BAD_REQUEST, "encode", err.to_string()),
            AppError::MissingApiKey => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "config",
                "Aucune clé API Mistral configurée. Renseigne la variable MISTRAL_KEY \
                 côté serveur ou saisis une clé dans le formulaire."
                    .to_string(),
            ),
            AppError::Inference(err) => (StatusCode::BAD_GATEWAY, "inference", err.to_string()),
        };
        warn!(kind, %message, "roast request failed");
        (status, Json(json!({ "error": message, "kind": kind }))).into_response()
    }
}

/// Builds the application router around shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/roast", post(generate_roast))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

#[derive(Default)]
struct RoastForm {
    image: Option<Vec<u8>>,
    style: Option<String>,
    api_key: Option<String>,
}

/// One roast per request: collect the form, resolve the credential, encode the
/// image, call the inference API, reply with the generated text.
async fn generate_roast(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<RoastResponse>, AppError> {
    let start = Instant::now();
    let mut form = RoastForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(format!("invalid multipart body: {err}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("image") => {
                let data = field.bytes().await.map_err(|err| {
                    AppError::BadRequest(format!("could not read image field: {err}"))
                })?;
                form.image = Some(data.to_vec());
            }
            Some("style") => {
                let value = field.text().await.map_err(|err| {
                    AppError::BadRequest(format!("could not read style field: {err}"))
                })?;
                form.style = Some(value);
            }
            Some("api_key") => {
                let value = field.text().await.map_err(|err| {
                    AppError::BadRequest(format!("could not read api_key field: {err}"))
                })?;
                form.api_key = Some(value);
            }
            _ => {}
        }
    }

    let image = form
        .image
        .ok_or_else(|| AppError::BadRequest("missing image field".to_string()))?;
    let style: RoastStyle = form
        .style
        .ok_or_else(|| AppError::BadRequest("missing style field".to_string()))?
        .parse()
        .map_err(|err| AppError::BadRequest(format!("{err}")))?;

    // Resolved before any encoding work: without a credential the inference
    // call must never be attempted.
    let api_key = resolve_api_key(state.env_api_key.as_deref(), form.api_key.as_deref())
        .ok_or(AppError::MissingApiKey)?
        .to_string();

    let encoded = encode_image(&image)?;
    let roast = state
        .mistral
        .request_roast(&api_key, &encoded, style)
        .await?;

    let processing_time_ms = start.elapsed().as_millis();
    info!(%style, elapsed_ms = processing_time_ms as u64, "roast served");

    Ok(Json(RoastResponse {
        roast,
        style,
        model: state.mistral.model().to_string(),
        processing_time_ms,
    }))
}

/// Ordered credential resolution: the server's environment wins, then the key
/// typed into the page. Blank values count as absent.
fn resolve_api_key<'a>(env_key: Option<&'a str>, form_key: Option<&'a str>) -> Option<&'a str> {
    env_key
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .or_else(|| form_key.map(str::trim).filter(|key| !key.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_key_wins_over_form_key() {
        assert_eq!(
            resolve_api_key(Some("sk-env"), Some("sk-form")),
            Some("sk-env")
        );
    }

    #[test]
    fn form_key_is_the_fallback() {
        assert_eq!(resolve_api_key(None, Some(" sk-form ")), Some("sk-form"));
    }

    #[test]
    fn blank_keys_count_as_absent() {
        assert_eq!(resolve_api_key(Some("   "), Some("")), None);
        assert_eq!(resolve_api_key(None, None), None);
    }

    #[test]
    fn error_kinds_map_to_their_statuses() {
        let cases = [
            (
                AppError::BadRequest("nope".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Encode(EncodeError::Empty),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::MissingApiKey, StatusCode::UNPROCESSABLE_ENTITY),
            (
                AppError::Inference(InferenceError::EmptyCompletion),
                StatusCode::BAD_GATEWAY,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
