use crate::{ClientError, ClientResult, LoginOutcome};

use ck_core::{Attendee, RosterSource, Session, Touchpoint};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::debug;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use reqwest::{Client as ReqwestClient, Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cookie the backend uses for the bearer credential
pub const ACCESS_COOKIE: &str = "accessToken";
/// Cookie the backend uses for the renewal credential
pub const RENEWAL_COOKIE: &str = "refreshToken";

const LOGIN_FALLBACK: &str = "Invalid credentials";
const LOGOUT_FALLBACK: &str = "Logout failed";
const RESET_FALLBACK: &str = "Failed to reset password.";
const REFRESH_FALLBACK: &str = "Session renewal failed";
const ROSTER_FALLBACK: &str = "Failed to fetch data";
const MARK_FALLBACK: &str = "Something went wrong";

/// HTTP client for the check-in backend REST API
#[derive(Clone)]
pub struct BackendClient {
    pub base_url: String,
    client: ReqwestClient,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenBody {
    access_token: Option<String>,
    data: Option<TokenData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenData {
    access_token: Option<String>,
}

#[derive(Deserialize)]
struct RosterBody {
    data: Option<Vec<Attendee>>,
}

impl BackendClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "https://api.example.org")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Build an unauthenticated request
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.client.request(method, &url)
    }

    /// Build a request carrying the session's bearer credential
    fn authorized(&self, method: Method, path: &str, session: &Session) -> reqwest::RequestBuilder {
        self.request(method, path)
            .header(AUTHORIZATION, session.bearer())
    }

    /// Send and turn non-2xx responses into [`ClientError::Api`]
    async fn execute(
        &self,
        req: reqwest::RequestBuilder,
        fallback: &str,
    ) -> ClientResult<Response> {
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<Value>(&body)
            .ok()
            .and_then(|json| {
                json.get("message")
                    .and_then(|v| v.as_str())
                    .filter(|m| !m.trim().is_empty())
                    .map(String::from)
            })
            .unwrap_or_else(|| fallback.to_string());

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Read and deserialize a JSON body
    async fn json_body<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // =========================================================================
    // Session Operations
    // =========================================================================

    /// Exchange email and password for a bearer credential
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginOutcome> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/users/login")
            .json(&LoginRequest { email, password });
        let response = self.execute(req, LOGIN_FALLBACK).await?;

        Self::token_outcome(response).await
    }

    /// Invalidate the server-side session
    pub async fn logout(&self, session: &Session) -> ClientResult<()> {
        let mut req = self.authorized(Method::POST, "/api/users/logout", session);
        // The backend revokes the renewal credential too
        if let Some(renewal_token) = session.renewal_token() {
            req = req.header(COOKIE, format!("{}={}", RENEWAL_COOKIE, renewal_token));
        }
        self.execute(req, LOGOUT_FALLBACK).await?;
        Ok(())
    }

    /// Set a new password using an emailed reset token
    pub async fn reset_password(&self, token: &str, password: &str) -> ClientResult<()> {
        #[derive(Serialize)]
        struct ResetRequest<'a> {
            password: &'a str,
        }

        let path = format!("/api/users/reset-password/{}", urlencoding::encode(token));
        let req = self
            .request(Method::POST, &path)
            .json(&ResetRequest { password });
        self.execute(req, RESET_FALLBACK).await?;
        Ok(())
    }

    /// Trade a renewal credential for a fresh bearer credential
    pub async fn refresh_token(&self, renewal_token: &str) -> ClientResult<LoginOutcome> {
        let req = self
            .request(Method::GET, "/api/users/refresh-token")
            .header(COOKIE, format!("{}={}", RENEWAL_COOKIE, renewal_token));
        let response = self.execute(req, REFRESH_FALLBACK).await?;

        Self::token_outcome(response).await
    }

    /// Pull the access credential from the body (or its cookie) and the
    /// renewal credential from `Set-Cookie`
    async fn token_outcome(response: Response) -> ClientResult<LoginOutcome> {
        let cookie_access = cookie_value(&response, ACCESS_COOKIE);
        let renewal_token = cookie_value(&response, RENEWAL_COOKIE);

        let body_access = match Self::json_body::<TokenBody>(response).await {
            Ok(body) => body
                .access_token
                .or_else(|| body.data.and_then(|data| data.access_token)),
            Err(ClientError::Json { .. }) => None,
            Err(e) => return Err(e),
        };

        let access_token = body_access
            .or(cookie_access)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ClientError::MissingToken {
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(LoginOutcome {
            access_token,
            renewal_token,
        })
    }

    // =========================================================================
    // Roster Operations
    // =========================================================================

    /// Fetch a roster collection
    pub async fn list_roster(
        &self,
        session: &Session,
        source: RosterSource,
    ) -> ClientResult<Vec<Attendee>> {
        let req = self.authorized(Method::GET, source.path(), session);
        let response = self.execute(req, ROSTER_FALLBACK).await?;
        let body: RosterBody = Self::json_body(response).await?;

        Ok(body.data.unwrap_or_default())
    }

    /// Flip one touchpoint's status flag to true for one record
    pub async fn mark_touchpoint(
        &self,
        session: &Session,
        touchpoint: Touchpoint,
        id: &str,
    ) -> ClientResult<()> {
        let path = touchpoint.mutation_path(&urlencoding::encode(id));
        let req = self
            .authorized(Method::PUT, &path, session)
            .header(CONTENT_TYPE, "application/json");
        self.execute(req, MARK_FALLBACK).await?;
        Ok(())
    }
}

/// Value of cookie `name` set by `response`
pub(crate) fn cookie_value(response: &Response, name: &str) -> Option<String> {
    response
        .cookies()
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
