pub mod app_state;
pub mod checkin;
pub mod dashboard;
pub mod error;
pub mod login;
pub mod render;
pub mod reset;
pub mod roster_view;
pub mod session;
pub mod submission;
