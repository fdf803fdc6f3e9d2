use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Form;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use gist_extract::ExtractError;
use gist_summarize::SummarizeError;

use crate::state::AppState;

const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your internet connection.";
const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "Unsupported file format. Please upload a PDF or DOCX file.";

// ── Template context ──────────────────────────────────────────────

#[derive(Debug, Default, Serialize)]
pub struct PageContext {
    pub input_text: Option<String>,
    pub summarized_text: Option<String>,
    pub error_message: Option<String>,
}

impl PageContext {
    fn result(input_text: String, summarized_text: String) -> Self {
        Self {
            input_text: Some(input_text),
            summarized_text: Some(summarized_text),
            error_message: None,
        }
    }

    fn error(message: &str) -> Self {
        Self {
            error_message: Some(message.to_string()),
            ..Self::default()
        }
    }
}

fn render(
    state: &AppState,
    name: &str,
    ctx: &PageContext,
) -> Result<Html<String>, (StatusCode, String)> {
    let template = state
        .templates
        .get_template(name)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("Template error: {e}")))?;
    template
        .render(ctx)
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("Template error: {e}")))
}

// ── GET / and POST / ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SummarizeForm {
    pub input_text: String,
}

pub async fn index(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    render(&state, "index.html", &PageContext::default())
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SummarizeForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    match state.summarizer.summarize(&form.input_text).await {
        Ok(summarized_text) => render(
            &state,
            "index.html",
            &PageContext::result(form.input_text, summarized_text),
        ),
        Err(SummarizeError::Network(e)) => {
            warn!("Summarization hit a network failure: {}", e);
            render(&state, "index.html", &PageContext::error(NETWORK_ERROR_MESSAGE))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Summarization failed: {e}"),
        )),
    }
}

// ── GET /upload and POST /upload ──────────────────────────────────

pub async fn upload_form(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    render(&state, "upload.html", &PageContext::default())
}

pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Html<String>, (StatusCode, String)> {
    // Pull the "file" field; anything else in the form is ignored.
    let mut file: Option<(String, axum::body::Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Multipart error: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("unnamed").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read file: {e}")))?;
            file = Some((filename, bytes));
            break;
        }
    }
    let (filename, bytes) =
        file.ok_or((StatusCode::BAD_REQUEST, "No file provided".to_string()))?;

    let input_text = match gist_extract::extract_text(&bytes, &filename) {
        Ok(text) => text,
        Err(ExtractError::Unsupported(_)) => {
            return render(
                &state,
                "upload.html",
                &PageContext::error(UNSUPPORTED_FORMAT_MESSAGE),
            );
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Text extraction failed: {e}"),
            ));
        }
    };

    info!("Extracted '{}': {} chars", filename, input_text.chars().count());

    match state.summarizer.summarize(&input_text).await {
        Ok(summarized_text) => render(
            &state,
            "upload.html",
            &PageContext::result(input_text, summarized_text),
        ),
        Err(SummarizeError::Network(e)) => {
            warn!("Summarization hit a network failure: {}", e);
            render(&state, "upload.html", &PageContext::error(NETWORK_ERROR_MESSAGE))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Summarization failed: {e}"),
        )),
    }
}
