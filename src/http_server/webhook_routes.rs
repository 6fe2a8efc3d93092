//! Chat-bot skill webhook
//!
//! `POST /webhook/skill` receives a skill request whose utterance carries an
//! optional `/<device>` selector and a code, e.g. `/w 1001`. The handler
//! extracts the first signed integer token, resolves it, and replies with a
//! `simpleText` card envelope. All user-facing prose lives here; the core
//! only hands back a record or a typed miss.

use std::sync::{Arc, OnceLock};

use axum::{extract::State, routing::post, Json, Router};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resolver::{resolve, ResolveError};

use super::server::AppState;

// ==================
// Request / Response
// ==================

#[derive(Debug, Default, Deserialize)]
pub struct SkillUserRequest {
    #[serde(default)]
    pub utterance: String,
}

/// Skill platform request envelope. Only the utterance is consumed; the
/// action block is accepted and ignored.
#[derive(Debug, Deserialize)]
pub struct SkillRequest {
    #[serde(rename = "userRequest", default)]
    pub user_request: SkillUserRequest,
    #[serde(default)]
    pub action: Value,
}

#[derive(Debug, Serialize)]
pub struct SimpleText {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SkillOutput {
    #[serde(rename = "simpleText")]
    pub simple_text: SimpleText,
}

#[derive(Debug, Serialize)]
pub struct SkillTemplate {
    pub outputs: Vec<SkillOutput>,
}

/// `simpleText` card envelope, version 2.0
#[derive(Debug, Serialize)]
pub struct SkillResponse {
    pub version: String,
    pub template: SkillTemplate,
}

impl SkillResponse {
    /// Wrap plain text in the card envelope
    pub fn simple_text(text: impl Into<String>) -> Self {
        Self {
            version: "2.0".to_string(),
            template: SkillTemplate {
                outputs: vec![SkillOutput {
                    simple_text: SimpleText { text: text.into() },
                }],
            },
        }
    }
}

// ==================
// Utterance parsing
// ==================

fn code_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-?\d+").expect("static pattern"))
}

fn device_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/([A-Za-z]+)").expect("static pattern"))
}

/// First signed integer token in the utterance, verbatim
pub fn extract_code(utterance: &str) -> Option<&str> {
    code_pattern().find(utterance).map(|m| m.as_str())
}

/// Explicit `/<device>` selector, lowercased; `None` when absent
pub fn extract_device(utterance: &str) -> Option<String> {
    device_pattern()
        .captures(utterance)
        .map(|c| c[1].to_lowercase())
}

// ==================
// Routes
// ==================

/// Create the webhook routes
pub fn webhook_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/skill", post(skill_handler))
        .with_state(state)
}

async fn skill_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SkillRequest>,
) -> Json<SkillResponse> {
    let utterance = &request.user_request.utterance;
    let catalog = state.catalog.snapshot();

    let Some(code) = extract_code(utterance) else {
        return Json(SkillResponse::simple_text(
            "No numeric code found in the message.\ne.g. /w 1001",
        ));
    };

    let device = extract_device(utterance).unwrap_or_else(|| state.default_device.clone());

    let text = match resolve(&catalog, &device, code) {
        Ok(record) => format!(
            "[Error {}]\n{}\n\n{}",
            record.code, record.err_name, record.desc
        ),
        Err(ResolveError::UnknownDevice { device, .. }) => {
            let known: Vec<&str> = catalog.device_ids().collect();
            format!(
                "Unknown device '{}'. Configured devices: {}",
                device,
                known.join(", ")
            )
        }
        Err(err) => format!("No information found for code {}.", err.input()),
    };

    Json(SkillResponse::simple_text(text))
}
