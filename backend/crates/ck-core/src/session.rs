//! Session credential handed to every backend call.

use std::fmt;

/// Bearer credential plus the optional renewal credential issued at login.
///
/// Built once per request from the session cookies and passed by reference to
/// each backend call; nothing else reads the cookies.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Session {
    access_token: String,
    renewal_token: Option<String>,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            renewal_token: None,
        }
    }

    pub fn with_renewal(mut self, renewal_token: impl Into<String>) -> Self {
        self.renewal_token = Some(renewal_token.into());
        self
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn renewal_token(&self) -> Option<&str> {
        self.renewal_token.as_deref()
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

// Tokens never reach the logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field(
                "renewal_token",
                &self.renewal_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
