use crate::web::render::{Forward, field_messages};
use crate::{AppState, WebResult};

use ck_client::ClientError;
use ck_core::ResetPasswordForm;
use ck_core::forms::MISSING_RESET_TOKEN;
use ck_core::gate::LOGIN_PATH;

use std::collections::BTreeMap;

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{info, warn};
use serde::{Deserialize, Serialize};

const RESET_FAILED: &str = "Failed to reset password.";
const RESET_DONE: &str = "Your password has been successfully changed.";

#[derive(Debug, Default, Deserialize)]
pub struct ResetInput {
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "confirmPassword")]
    pub confirm_password: String,
}

#[derive(Default, Serialize)]
struct ResetPage {
    /// Form is only offered while a token is present
    has_token: bool,
    errors: BTreeMap<&'static str, String>,
    failure: Option<String>,
    success: Option<&'static str>,
    forward: Option<Forward>,
}

/// GET /reset-password
pub async fn missing_token(State(state): State<AppState>) -> WebResult<Response> {
    render(&state, StatusCode::BAD_REQUEST, missing_token_page())
}

/// GET /reset-password/{token}
pub async fn reset_page(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> WebResult<Response> {
    if token.trim().is_empty() {
        return render(&state, StatusCode::BAD_REQUEST, missing_token_page());
    }

    let page = ResetPage {
        has_token: true,
        ..ResetPage::default()
    };
    render(&state, StatusCode::OK, page)
}

/// POST /reset-password/{token}
pub async fn reset_submit(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Form(input): Form<ResetInput>,
) -> WebResult<Response> {
    let token = token.trim();
    if token.is_empty() {
        return render(&state, StatusCode::BAD_REQUEST, missing_token_page());
    }

    let form = ResetPasswordForm {
        password: input.password,
        confirm_password: input.confirm_password,
    };

    let errors = form.validate();
    if !errors.is_empty() {
        let page = ResetPage {
            has_token: true,
            errors: field_messages(&errors),
            ..ResetPage::default()
        };
        return render(&state, StatusCode::UNPROCESSABLE_ENTITY, page);
    }

    match state.client.reset_password(token, &form.password).await {
        Ok(()) => {
            info!("Password reset completed");
            let page = ResetPage {
                success: Some(RESET_DONE),
                forward: Some(Forward::new(LOGIN_PATH, state.ui.reset_redirect_delay_ms)),
                ..ResetPage::default()
            };
            render(&state, StatusCode::OK, page)
        }
        Err(e) => {
            warn!("Password reset failed: {}", e);
            let status = match &e {
                ClientError::Api { .. } => StatusCode::BAD_REQUEST,
                _ => StatusCode::BAD_GATEWAY,
            };
            let page = ResetPage {
                has_token: true,
                failure: Some(e.backend_message().unwrap_or(RESET_FAILED).to_string()),
                ..ResetPage::default()
            };
            render(&state, status, page)
        }
    }
}

fn missing_token_page() -> ResetPage {
    ResetPage {
        failure: Some(MISSING_RESET_TOKEN.to_string()),
        ..ResetPage::default()
    }
}

fn render(state: &AppState, status: StatusCode, page: ResetPage) -> WebResult<Response> {
    let html = state.renderer.render("reset_password.html", page)?;
    Ok((status, html).into_response())
}
