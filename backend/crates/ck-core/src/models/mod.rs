pub mod attendee;
pub mod roster_source;
pub mod touchpoint;
