//! Event touchpoints and the per-touchpoint descriptor table.
//!
//! Every check-in screen is the same roster view parameterized by one of these
//! variants: where the roster comes from, which flag it flips, which field the
//! search also looks at, and how the card and dialog are labelled.

use crate::{Attendee, CoreError, Result as CoreErrorResult, RosterSource};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Touchpoint {
    AirportArrival,
    AirportDeparture,
    Hotel,
    HallSession,
    PreviewRoom,
}

/// One labelled descriptive line on a roster card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
}

impl DetailLine {
    fn new(label: &'static str, value: Option<&str>) -> Self {
        Self {
            label,
            value: value.unwrap_or_default().to_string(),
        }
    }
}

impl Touchpoint {
    /// Dashboard order
    pub const ALL: [Touchpoint; 5] = [
        Touchpoint::AirportArrival,
        Touchpoint::AirportDeparture,
        Touchpoint::Hotel,
        Touchpoint::HallSession,
        Touchpoint::PreviewRoom,
    ];

    /// URL slug under `/dashboard/check-in/`
    pub fn slug(&self) -> &'static str {
        match self {
            Self::AirportArrival => "airport-arrival",
            Self::AirportDeparture => "airport-departure",
            Self::Hotel => "hotel",
            Self::HallSession => "faculty-hall-session",
            Self::PreviewRoom => "preview-room",
        }
    }

    /// Dashboard tile label
    pub fn label(&self) -> &'static str {
        match self {
            Self::AirportArrival => "Airport Arrival",
            Self::AirportDeparture => "Airport Departure",
            Self::Hotel => "Hotel",
            Self::HallSession => "Faculty in Hall Session",
            Self::PreviewRoom => "Preview Room",
        }
    }

    /// Roster page heading
    pub fn title(&self) -> &'static str {
        match self {
            Self::AirportArrival => "Faculty Airport Arrival",
            Self::AirportDeparture => "Faculty Airport Departure",
            Self::Hotel => "Faculty Hotel Check-In",
            Self::HallSession => "Faculty Hall Session Check-In",
            Self::PreviewRoom => "Faculty Preview Room",
        }
    }

    pub fn roster_source(&self) -> RosterSource {
        match self {
            Self::AirportArrival | Self::AirportDeparture | Self::Hotel => RosterSource::All,
            Self::HallSession | Self::PreviewRoom => RosterSource::TopicAssigned,
        }
    }

    /// Last path segment of `PUT /api/checkin-details/{id}/{segment}`
    pub fn mutation_segment(&self) -> &'static str {
        match self {
            Self::AirportArrival => "arrival",
            Self::AirportDeparture => "departure",
            Self::Hotel => "hotel",
            Self::HallSession => "hall",
            Self::PreviewRoom => "presentation",
        }
    }

    /// Full backend path of the status transition for one record
    pub fn mutation_path(&self, id: &str) -> String {
        format!("/api/checkin-details/{}/{}", id, self.mutation_segment())
    }

    /// Status flag of this touchpoint on `attendee`
    pub fn is_complete(&self, attendee: &Attendee) -> bool {
        let flag = match self {
            Self::AirportArrival => attendee.arrival_check_in_status,
            Self::AirportDeparture => attendee.departure_check_in_status,
            Self::Hotel => attendee.hotel_check_in_status,
            Self::HallSession => attendee.hall_check_in_status,
            Self::PreviewRoom => attendee.presentation_submit_status,
        };
        flag.unwrap_or(false)
    }

    /// Completion timestamp, only reported while the status flag is set
    pub fn completed_at<'a>(&self, attendee: &'a Attendee) -> Option<&'a str> {
        if !self.is_complete(attendee) {
            return None;
        }

        let raw = match self {
            Self::AirportArrival => attendee.updated_at.as_deref(),
            Self::AirportDeparture => attendee.departure_check_in_time.as_deref(),
            Self::Hotel => attendee.hotel_check_in_time.as_deref(),
            Self::HallSession => attendee.hall_check_in_time.as_deref(),
            Self::PreviewRoom => attendee.presentation_submit_time.as_deref(),
        };
        raw.filter(|value| !value.trim().is_empty())
    }

    /// Descriptive field searched alongside name, email and phone
    pub fn search_field<'a>(&self, attendee: &'a Attendee) -> Option<&'a str> {
        match self {
            Self::AirportArrival => attendee.arrival_flight_detail.as_deref(),
            Self::AirportDeparture => attendee.departure_flight_detail.as_deref(),
            Self::Hotel => attendee.hotel_name.as_deref(),
            Self::HallSession | Self::PreviewRoom => attendee.topic_name.as_deref(),
        }
    }

    /// Descriptive card lines; empty when a talk-based card has no topic
    pub fn details(&self, attendee: &Attendee) -> Vec<DetailLine> {
        match self {
            Self::AirportArrival => vec![
                DetailLine::new("Arrival Date", attendee.arrival_date.as_deref()),
                DetailLine::new("Arrival Time", attendee.arrival_time.as_deref()),
                DetailLine::new("Flight", attendee.arrival_flight_detail.as_deref()),
            ],
            Self::AirportDeparture => vec![
                DetailLine::new("Departure Date", attendee.departure_date.as_deref()),
                DetailLine::new("Departure Time", attendee.departure_time.as_deref()),
                DetailLine::new("Flight", attendee.departure_flight_detail.as_deref()),
            ],
            Self::Hotel => vec![
                DetailLine::new("Hotel", attendee.hotel_name.as_deref()),
                DetailLine::new("Check-In", attendee.check_in_date.as_deref()),
                DetailLine::new("Check-Out", attendee.check_out_date.as_deref()),
            ],
            Self::HallSession | Self::PreviewRoom if attendee.has_topic() => vec![
                DetailLine::new("Topic", attendee.topic_name.as_deref()),
                DetailLine::new("Talk Date", attendee.talk_date.as_deref()),
                DetailLine::new("Start", attendee.talk_start_time.as_deref()),
                DetailLine::new("End", attendee.talk_end_time.as_deref()),
            ],
            Self::HallSession | Self::PreviewRoom => Vec::new(),
        }
    }

    /// Shown instead of the detail lines when [`Touchpoint::details`] is empty
    pub fn details_placeholder(&self) -> &'static str {
        match self {
            Self::PreviewRoom => "No presentation details available",
            _ => "No session details available",
        }
    }

    pub fn completed_label(&self) -> &'static str {
        match self {
            Self::PreviewRoom => "Submitted At",
            _ => "Check-in Time",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            Self::PreviewRoom => "Submit Presentation",
            _ => "Check-In",
        }
    }

    pub fn done_label(&self) -> &'static str {
        match self {
            Self::PreviewRoom => "Submitted",
            _ => "Done",
        }
    }

    pub fn confirm_title(&self) -> &'static str {
        match self {
            Self::PreviewRoom => "Confirm Submission",
            _ => "Confirm Check-In",
        }
    }

    pub fn confirm_lead(&self) -> &'static str {
        match self {
            Self::PreviewRoom => "Submit presentation for",
            _ => "Check in",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::PreviewRoom => "Submission Successful",
            _ => "Check-In Successful",
        }
    }
}

impl FromStr for Touchpoint {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let location = ErrorLocation::from(Location::caller());
        Touchpoint::ALL
            .into_iter()
            .find(|touchpoint| touchpoint.slug() == s)
            .ok_or(CoreError::UnknownTouchpoint {
                value: s.to_string(),
                location,
            })
    }
}

impl std::fmt::Display for Touchpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}
