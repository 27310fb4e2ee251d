pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod login_outcome;

pub use client::BackendClient;
pub use error::{ClientError, Result as ClientResult};
pub use login_outcome::LoginOutcome;
