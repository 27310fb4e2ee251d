//! Session gate decision table.
//!
//! Evaluated for every incoming navigation before any page renders. The
//! caller resolves credentials; this module only decides.

/// Login page path
pub const LOGIN_PATH: &str = "/";
/// Landing page for authenticated operators
pub const DASHBOARD_PATH: &str = "/dashboard";

const PROTECTED_PREFIXES: [&str; 4] = ["/dashboard", "/checkin", "/admin", "/faculty"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    Login,
    Protected,
    /// Not gated at all (assets, probes, password reset)
    Public,
}

impl PathClass {
    pub fn classify(path: &str) -> Self {
        if path == LOGIN_PATH {
            return Self::Login;
        }

        let protected = PROTECTED_PREFIXES.iter().any(|prefix| {
            path.strip_prefix(prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        });

        if protected {
            Self::Protected
        } else {
            Self::Public
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Unauthenticated request for the login page
    ServeLogin,
    RedirectToLogin,
    RedirectToDashboard,
    /// Authenticated request for a protected page
    ServePage,
    /// Path is outside the gate
    PassThrough,
}

pub fn decide(has_access_token: bool, class: PathClass) -> GateDecision {
    match (has_access_token, class) {
        (_, PathClass::Public) => GateDecision::PassThrough,
        (false, PathClass::Login) => GateDecision::ServeLogin,
        (false, PathClass::Protected) => GateDecision::RedirectToLogin,
        (true, PathClass::Login) => GateDecision::RedirectToDashboard,
        (true, PathClass::Protected) => GateDecision::ServePage,
    }
}
