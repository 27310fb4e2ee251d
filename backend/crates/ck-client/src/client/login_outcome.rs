use std::fmt;

/// Credentials issued by a successful login or renewal
#[derive(Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub access_token: String,
    /// Renewal credential from the `refreshToken` cookie, when issued
    pub renewal_token: Option<String>,
}

impl fmt::Debug for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginOutcome")
            .field("access_token", &"<redacted>")
            .field(
                "renewal_token",
                &self.renewal_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
