use crate::{Attendee, RosterSource, Touchpoint};

use std::str::FromStr;

#[test]
fn test_slug_round_trips_for_every_touchpoint() {
    for touchpoint in Touchpoint::ALL {
        assert_eq!(Touchpoint::from_str(touchpoint.slug()).unwrap(), touchpoint);
    }
}

#[test]
fn test_unknown_slug_is_error() {
    assert!(Touchpoint::from_str("lunch").is_err());
    assert!(Touchpoint::from_str("").is_err());
}

#[test]
fn test_roster_sources() {
    assert_eq!(Touchpoint::AirportArrival.roster_source(), RosterSource::All);
    assert_eq!(Touchpoint::Hotel.roster_source(), RosterSource::All);
    assert_eq!(
        Touchpoint::HallSession.roster_source(),
        RosterSource::TopicAssigned
    );
    assert_eq!(
        RosterSource::TopicAssigned.path(),
        "/api/checkin-details/topic/exist"
    );
}

#[test]
fn test_mutation_paths() {
    assert_eq!(
        Touchpoint::AirportArrival.mutation_path("abc"),
        "/api/checkin-details/abc/arrival"
    );
    assert_eq!(
        Touchpoint::Hotel.mutation_path("abc"),
        "/api/checkin-details/abc/hotel"
    );
    assert_eq!(
        Touchpoint::HallSession.mutation_path("abc"),
        "/api/checkin-details/abc/hall"
    );
    assert_eq!(
        Touchpoint::PreviewRoom.mutation_path("abc"),
        "/api/checkin-details/abc/presentation"
    );
}

#[test]
fn test_completed_at_hidden_until_flag_is_set() {
    let mut attendee = Attendee {
        id: "a1".into(),
        hotel_check_in_time: Some("2025-02-14T10:00:00Z".into()),
        ..Attendee::default()
    };
    assert_eq!(Touchpoint::Hotel.completed_at(&attendee), None);

    attendee.hotel_check_in_status = Some(true);
    assert_eq!(
        Touchpoint::Hotel.completed_at(&attendee),
        Some("2025-02-14T10:00:00Z")
    );
}

#[test]
fn test_arrival_uses_updated_at_as_completion_time() {
    let attendee = Attendee {
        id: "a1".into(),
        arrival_check_in_status: Some(true),
        updated_at: Some("2025-02-14T04:15:00Z".into()),
        ..Attendee::default()
    };

    assert_eq!(
        Touchpoint::AirportArrival.completed_at(&attendee),
        Some("2025-02-14T04:15:00Z")
    );
}

#[test]
fn test_talk_details_empty_without_topic() {
    let attendee = Attendee {
        id: "a1".into(),
        talk_date: Some("2025-02-15".into()),
        ..Attendee::default()
    };

    assert!(Touchpoint::PreviewRoom.details(&attendee).is_empty());
    assert_eq!(
        Touchpoint::PreviewRoom.details_placeholder(),
        "No presentation details available"
    );
}

#[test]
fn test_hotel_details_lines() {
    let attendee = Attendee {
        id: "a1".into(),
        hotel_name: Some("Leela Palace".into()),
        check_in_date: Some("2025-02-13".into()),
        ..Attendee::default()
    };

    let lines = Touchpoint::Hotel.details(&attendee);

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].label, "Hotel");
    assert_eq!(lines[0].value, "Leela Palace");
    assert_eq!(lines[2].label, "Check-Out");
    assert_eq!(lines[2].value, "");
}

#[test]
fn test_preview_room_labels() {
    assert_eq!(Touchpoint::PreviewRoom.action_label(), "Submit Presentation");
    assert_eq!(Touchpoint::PreviewRoom.done_label(), "Submitted");
    assert_eq!(
        Touchpoint::PreviewRoom.success_message(),
        "Submission Successful"
    );
    assert_eq!(Touchpoint::Hotel.success_message(), "Check-In Successful");
}
