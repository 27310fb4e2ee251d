mod error;
mod render;
mod roster_view;
mod submission;
