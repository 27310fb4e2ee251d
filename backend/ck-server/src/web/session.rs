//! Session gate and session extractor
//!
//! The gate is the only code that reads the credential cookies. It resolves a
//! [`Session`] once per request and leaves it in the request extensions for
//! [`OperatorSession`] to hand to the page handlers.

use crate::{AppState, WebError};

use ck_config::SessionConfig;
use ck_core::gate::{DASHBOARD_PATH, LOGIN_PATH};
use ck_core::{GateDecision, PathClass, Session, decide};

use std::future::Future;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use log::{debug, info, warn};

/// Session resolved by the gate for a protected page
#[derive(Debug, Clone)]
pub struct OperatorSession(pub Session);

impl<S: Send + Sync> FromRequestParts<S> for OperatorSession {
    type Rejection = WebError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<Session>()
                .cloned()
                .map(OperatorSession)
                .ok_or_else(WebError::unauthenticated)
        }
    }
}

/// Gate middleware: serve, redirect to login, or redirect to the dashboard
pub async fn gate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let class = PathClass::classify(&path);

    if class == PathClass::Public {
        return next.run(request).await;
    }

    let mut access = cookie_value(&jar, &state.session.access_cookie);
    let mut renewal = cookie_value(&jar, &state.session.renewal_cookie);
    let mut renewed_jar = None;

    if access.is_none()
        && state.session.silent_renewal
        && let Some(ref renewal_token) = renewal
    {
        match state.client.refresh_token(renewal_token).await {
            Ok(outcome) => {
                info!("Renewed session at the gate for {}", path);
                let mut jar = jar.add(access_cookie(
                    &state.session,
                    outcome.access_token.clone(),
                ));
                if let Some(ref rotated) = outcome.renewal_token {
                    jar = jar.add(renewal_cookie(&state.session, rotated.clone()));
                    renewal = Some(rotated.clone());
                }
                access = Some(outcome.access_token);
                renewed_jar = Some(jar);
            }
            Err(e) => warn!("Silent renewal failed, treating as signed out: {}", e),
        }
    }

    let session = access.map(|token| match renewal {
        Some(renewal_token) => Session::new(token).with_renewal(renewal_token),
        None => Session::new(token),
    });

    let decision = decide(session.is_some(), class);
    debug!("Gate {} -> {:?}", path, decision);

    let response = match decision {
        GateDecision::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
        GateDecision::RedirectToDashboard => Redirect::to(DASHBOARD_PATH).into_response(),
        GateDecision::ServeLogin | GateDecision::PassThrough => next.run(request).await,
        GateDecision::ServePage => {
            if let Some(session) = session {
                request.extensions_mut().insert(session);
            }
            next.run(request).await
        }
    };

    match renewed_jar {
        Some(jar) => (jar, response).into_response(),
        None => response,
    }
}

/// Non-empty value of cookie `name`
fn cookie_value(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Bearer credential cookie, never readable from page scripts
pub(crate) fn access_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    session_cookie(config, config.access_cookie.clone(), token)
}

/// Renewal credential cookie
pub(crate) fn renewal_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    session_cookie(config, config.renewal_cookie.clone(), token)
}

fn session_cookie(config: &SessionConfig, name: String, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookies)
        .max_age(time::Duration::seconds(config.max_age_secs))
        .build()
}

/// Drop both credential cookies
pub(crate) fn clear_session(jar: CookieJar, config: &SessionConfig) -> CookieJar {
    jar.remove(Cookie::build(config.access_cookie.clone()).path("/"))
        .remove(Cookie::build(config.renewal_cookie.clone()).path("/"))
}
