use crate::{ServerErrorResult, WebResult};

use ck_core::FieldError;

use std::collections::BTreeMap;

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

/// Page templates, compiled into the binary
const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../templates/base.html")),
    ("login.html", include_str!("../templates/login.html")),
    (
        "login_success.html",
        include_str!("../templates/login_success.html"),
    ),
    (
        "reset_password.html",
        include_str!("../templates/reset_password.html"),
    ),
    ("dashboard.html", include_str!("../templates/dashboard.html")),
    ("roster.html", include_str!("../templates/roster.html")),
];

/// HTML renderer backed by a preloaded template environment.
///
/// Templates with an `.html` name are auto-escaped.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> ServerErrorResult<Self> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, context: S) -> WebResult<Html<String>> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(context)?))
    }
}

/// First message per field, keyed by field name
pub(crate) fn field_messages(errors: &[FieldError]) -> BTreeMap<&'static str, String> {
    let mut messages = BTreeMap::new();
    for error in errors {
        messages
            .entry(error.field)
            .or_insert_with(|| error.message.clone());
    }
    messages
}

/// Timed client-side navigation after a successful form
#[derive(Debug, Serialize)]
pub(crate) struct Forward {
    pub target: &'static str,
    pub delay_ms: u64,
    /// Whole-second fallback for `<meta http-equiv="refresh">`
    pub delay_secs: u64,
}

impl Forward {
    pub fn new(target: &'static str, delay_ms: u64) -> Self {
        Self {
            target,
            delay_ms,
            delay_secs: delay_ms.div_ceil(1000),
        }
    }
}
