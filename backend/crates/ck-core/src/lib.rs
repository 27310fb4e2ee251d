pub mod error;
pub mod forms;
pub mod gate;
pub mod models;
pub mod roster;
pub mod session;
pub mod timestamp;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use forms::{FieldError, LoginForm, ResetPasswordForm};
pub use gate::{GateDecision, PathClass, decide};
pub use models::attendee::Attendee;
pub use models::roster_source::RosterSource;
pub use models::touchpoint::{DetailLine, Touchpoint};
pub use roster::page::Page;
pub use roster::page_window::PageWindow;
pub use roster::search::search;
pub use session::Session;
