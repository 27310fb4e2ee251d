pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod web;


pub use error::{Result as ServerErrorResult, ServerError};
pub use routes::build_router;
pub use web::{
    app_state::AppState,
    error::{Result as WebResult, WebError},
    render::Renderer,
    session::OperatorSession,
    submission::{SubmissionGuard, SubmissionKey, SubmissionRegistry},
};
