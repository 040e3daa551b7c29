//! Localization endpoints
//!
//! Ships complete string bundles to the frontend and manages the
//! persisted language preference. The frontend applies the bundle and
//! the RTL flag as configuration; it never hardcodes strings.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use td_core::i18n::{Language, Translations};

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BundleResponse {
    language: Language,
    rtl: bool,
    strings: &'static Translations,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LanguageResponse {
    language: Language,
    rtl: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetLanguageRequest {
    language: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn unsupported(code: &str, status: StatusCode) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: format!("Unsupported language: {}", code),
        }),
    )
}

/// GET /api/i18n/:code - Full strings bundle for a supported language
async fn get_bundle(
    Path(code): Path<String>,
) -> Result<Json<BundleResponse>, (StatusCode, Json<ErrorResponse>)> {
    match Language::from_code(&code) {
        Some(language) => Ok(Json(BundleResponse {
            language,
            rtl: language.is_rtl(),
            strings: language.bundle(),
        })),
        None => Err(unsupported(&code, StatusCode::NOT_FOUND)),
    }
}

/// GET /api/language - Current persisted preference
async fn get_language(State(state): State<AppState>) -> Json<LanguageResponse> {
    let store = state.store().read().await;
    let language = store.language();
    Json(LanguageResponse {
        language,
        rtl: language.is_rtl(),
    })
}

/// PUT /api/language - Switch and persist the preference
async fn set_language(
    State(state): State<AppState>,
    Json(req): Json<SetLanguageRequest>,
) -> Result<Json<LanguageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(language) = Language::from_code(&req.language) else {
        return Err(unsupported(&req.language, StatusCode::BAD_REQUEST));
    };

    let mut store = state.store().write().await;
    store.set_language(language);
    Ok(Json(LanguageResponse {
        language,
        rtl: language.is_rtl(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/i18n/{code}", get(get_bundle))
        .route("/api/language", get(get_language).put(set_language))
}
