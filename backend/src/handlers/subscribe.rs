use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

use crate::AppState;

#[derive(Deserialize)]
pub struct SubscribeRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub source: Option<String>,
}

/// A submission must carry something that at least looks like an email.
/// Anything stricter is left to the mailing-list provider.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@')
}

pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubscribeRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let email = payload.email.as_deref().unwrap_or("").trim();
    if !is_valid_email(email) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Valid email is required"})),
        ));
    }

    let first_name = payload.first_name.as_deref().unwrap_or("");
    let source = payload.source.as_deref().unwrap_or("unknown");

    match &state.sendfox {
        Some(sendfox) => {
            if let Err(e) = sendfox.create_contact(email, first_name).await {
                // raw provider response stays server-side
                error!("SendFox error: {}", e);
                return Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Failed to subscribe"})),
                ));
            }
            info!("New subscriber: {} (source: {}, SendFox: success)", email, source);
        }
        None => {
            info!(
                "New subscriber: {} (name: {}, source: {})",
                email,
                if first_name.is_empty() { "N/A" } else { first_name },
                source
            );
            warn!("SendFox not configured. Set SENDFOX_API_TOKEN and SENDFOX_LIST_ID env vars.");
        }
    }

    Ok(Json(json!({"success": true})))
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_anything_with_an_at_sign() {
        assert!(is_valid_email("listener@example.com"));
        assert!(is_valid_email("a@b"));
    }

    #[test]
    fn rejects_empty_and_at_less_strings() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("nope"));
        assert!(!is_valid_email("listener.example.com"));
    }
}
