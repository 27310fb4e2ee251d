mod attendee;
mod touchpoint;
