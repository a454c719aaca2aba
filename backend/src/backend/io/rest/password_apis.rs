//! # REST API for Password Resets
//!
//! Single endpoint that generates a fresh password for a user and mails it
//! out. The caller receives the password to apply to the auth store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, info};

use crate::backend::domain::commands::passwords::ResetPasswordCommand;
use crate::backend::AppState;
use shared::ResetPasswordResponse;

/// Reset a user's password and email the new one
pub async fn reset_password(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> impl IntoResponse {
    info!("POST /api/profiles/{}/reset-password", username);

    let command = ResetPasswordCommand {
        username: username.clone(),
    };
    match state.password_service.reset_password(command) {
        Ok(result) => (
            StatusCode::OK,
            Json(ResetPasswordResponse {
                password: result.password,
                delivered: result.delivered,
                recipients: result.recipients,
                success_message: format!("Password reset for '{}'.", username),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to reset password: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}
