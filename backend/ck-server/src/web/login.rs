use crate::web::render::{Forward, field_messages};
use crate::web::session::{access_cookie, clear_session, renewal_cookie};
use crate::{AppState, OperatorSession, WebResult};

use ck_client::ClientError;
use ck_core::LoginForm;
use ck_core::gate::{DASHBOARD_PATH, LOGIN_PATH};

use std::collections::BTreeMap;

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

const LOGIN_REJECTED: &str = "Invalid credentials";
const LOGIN_UNAVAILABLE: &str = "Something went wrong. Try again.";

#[derive(Debug, Default, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Human-verification checkbox; only sent when ticked
    #[serde(default)]
    pub human: Option<String>,
}

#[derive(Serialize)]
struct LoginPage<'a> {
    email: &'a str,
    errors: BTreeMap<&'static str, String>,
}

/// GET /
pub async fn login_page(State(state): State<AppState>) -> WebResult<Html<String>> {
    state.renderer.render(
        "login.html",
        LoginPage {
            email: "",
            errors: BTreeMap::new(),
        },
    )
}

/// POST /
pub async fn login_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<LoginInput>,
) -> WebResult<Response> {
    let form = LoginForm {
        email: input.email.trim().to_string(),
        password: input.password,
        human_verified: input.human.is_some(),
    };

    let errors = form.validate();
    if !errors.is_empty() {
        debug!("Login form has {} invalid field(s)", errors.len());
        let page = state.renderer.render(
            "login.html",
            LoginPage {
                email: &form.email,
                errors: field_messages(&errors),
            },
        )?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
    }

    match state.client.login(&form.email, &form.password).await {
        Ok(outcome) => {
            info!("Operator signed in");

            let mut jar = jar.add(access_cookie(&state.session, outcome.access_token));
            if let Some(renewal_token) = outcome.renewal_token {
                jar = jar.add(renewal_cookie(&state.session, renewal_token));
            }

            let page = state.renderer.render(
                "login_success.html",
                Forward::new(DASHBOARD_PATH, state.ui.login_redirect_delay_ms),
            )?;
            Ok((jar, page).into_response())
        }
        Err(e) => {
            warn!("Login rejected: {}", e);

            let (status, message) = match &e {
                ClientError::Api { .. } => (
                    StatusCode::UNAUTHORIZED,
                    e.backend_message().unwrap_or(LOGIN_REJECTED).to_string(),
                ),
                _ => (StatusCode::BAD_GATEWAY, LOGIN_UNAVAILABLE.to_string()),
            };

            let page = state.renderer.render(
                "login.html",
                LoginPage {
                    email: &form.email,
                    errors: BTreeMap::from([("password", message)]),
                },
            )?;
            Ok((status, page).into_response())
        }
    }
}

/// POST /dashboard/logout
///
/// The local session ends even when the backend call fails.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    OperatorSession(session): OperatorSession,
) -> impl IntoResponse {
    match state.client.logout(&session).await {
        Ok(()) => info!("Operator signed out"),
        Err(e) => warn!("Backend logout failed, clearing local session anyway: {}", e),
    }

    (clear_session(jar, &state.session), Redirect::to(LOGIN_PATH))
}
