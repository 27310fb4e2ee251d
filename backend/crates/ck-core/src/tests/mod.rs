mod models;
mod roster;

use crate::Attendee;

pub(crate) fn attendee(id: &str, name: &str, email: &str, mobile: &str) -> Attendee {
    Attendee {
        id: id.to_string(),
        faculty_name: Some(name.to_string()),
        email: Some(email.to_string()),
        mobile: Some(mobile.to_string()),
        ..Attendee::default()
    }
}
