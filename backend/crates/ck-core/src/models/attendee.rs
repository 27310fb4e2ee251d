//! Attendee record as served by the check-in backend.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const MAX_ID_LEN: usize = 64;

/// One faculty member or delegate on the event roster.
///
/// The backend owns identity and every timestamp. Status flags only ever move
/// from `false` to `true`; the dashboard never sends a reversal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub faculty_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,

    // Airport arrival
    #[serde(default)]
    pub arrival_date: Option<String>,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub arrival_flight_detail: Option<String>,
    #[serde(default)]
    pub arrival_check_in_status: Option<bool>,
    /// Last backend write; doubles as the arrival check-in time
    #[serde(default)]
    pub updated_at: Option<String>,

    // Airport departure
    #[serde(default)]
    pub departure_date: Option<String>,
    #[serde(default)]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub departure_flight_detail: Option<String>,
    #[serde(default)]
    pub departure_check_in_status: Option<bool>,
    #[serde(default)]
    pub departure_check_in_time: Option<String>,

    // Hotel
    #[serde(default)]
    pub hotel_name: Option<String>,
    #[serde(default)]
    pub check_in_date: Option<String>,
    #[serde(default)]
    pub check_out_date: Option<String>,
    #[serde(default)]
    pub hotel_check_in_status: Option<bool>,
    #[serde(default)]
    pub hotel_check_in_time: Option<String>,

    // Talk
    #[serde(default)]
    pub topic_name: Option<String>,
    #[serde(default)]
    pub talk_date: Option<String>,
    #[serde(default)]
    pub talk_start_time: Option<String>,
    #[serde(default)]
    pub talk_end_time: Option<String>,

    // Hall session
    #[serde(default)]
    pub hall_check_in_status: Option<bool>,
    #[serde(default)]
    pub hall_check_in_time: Option<String>,

    // Preview room
    #[serde(default)]
    pub presentation_submit_status: Option<bool>,
    #[serde(default)]
    pub presentation_submit_time: Option<String>,
}

impl Attendee {
    /// Display name, empty when the backend sent none
    pub fn name(&self) -> &str {
        self.faculty_name.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    pub fn mobile(&self) -> &str {
        self.mobile.as_deref().unwrap_or_default()
    }

    /// Whether a talk is assigned to this attendee
    pub fn has_topic(&self) -> bool {
        self.topic_name
            .as_deref()
            .is_some_and(|topic| !topic.trim().is_empty())
    }

    /// Check a record identity taken from a URL before it reaches a backend path.
    ///
    /// Backend identities are short opaque tokens of ASCII letters, digits,
    /// `-` and `_`.
    #[track_caller]
    pub fn validate_id(id: &str) -> CoreErrorResult<&str> {
        let well_formed = !id.is_empty()
            && id.len() <= MAX_ID_LEN
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if well_formed {
            Ok(id)
        } else {
            Err(CoreError::Validation {
                message: format!("Malformed record id '{}'", id),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
