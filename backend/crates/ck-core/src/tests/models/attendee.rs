use crate::{Attendee, Touchpoint};

#[test]
fn test_deserialize_backend_record() {
    let json = r#"{
        "_id": "665f1c2e9b1e4a0012345678",
        "facultyName": "Dr. Asha Rao",
        "email": "asha@example.org",
        "mobile": "+91 98450 12345",
        "arrivalDate": "2025-02-14",
        "arrivalTime": "09:40",
        "arrivalFlightDetail": "AI 504",
        "arrivalCheckInStatus": true,
        "updatedAt": "2025-02-14T04:15:00.000Z",
        "hotelName": "Taj West End",
        "hotelCheckInStatus": false,
        "__v": 0
    }"#;

    let attendee: Attendee = serde_json::from_str(json).unwrap();

    assert_eq!(attendee.id, "665f1c2e9b1e4a0012345678");
    assert_eq!(attendee.name(), "Dr. Asha Rao");
    assert_eq!(attendee.arrival_flight_detail.as_deref(), Some("AI 504"));
    assert_eq!(attendee.arrival_check_in_status, Some(true));
    assert_eq!(attendee.hotel_name.as_deref(), Some("Taj West End"));
    assert!(attendee.hall_check_in_status.is_none());
}

#[test]
fn test_missing_contact_fields_read_as_empty() {
    let attendee: Attendee = serde_json::from_str(r#"{"_id": "a1"}"#).unwrap();

    assert_eq!(attendee.name(), "");
    assert_eq!(attendee.email(), "");
    assert_eq!(attendee.mobile(), "");
    for touchpoint in Touchpoint::ALL {
        assert!(!touchpoint.is_complete(&attendee));
    }
}

#[test]
fn test_record_without_identity_is_rejected() {
    let result = serde_json::from_str::<Attendee>(r#"{"facultyName": "No Id"}"#);
    assert!(result.is_err());
}

#[test]
fn test_blank_topic_is_not_assigned() {
    let mut attendee = Attendee {
        id: "a1".into(),
        topic_name: Some("   ".into()),
        ..Attendee::default()
    };
    assert!(!attendee.has_topic());

    attendee.topic_name = Some("Cardiac imaging".into());
    assert!(attendee.has_topic());
}

#[test]
fn test_validate_id_accepts_backend_identities() {
    assert_eq!(
        Attendee::validate_id("665f1c2e9b1e4a0012345678").unwrap(),
        "665f1c2e9b1e4a0012345678"
    );
    assert!(Attendee::validate_id("guest_01-b").is_ok());
}

#[test]
fn test_validate_id_rejects_path_and_query_characters() {
    for id in ["", "a/b", "..", "a?x=1", "a b", "caf\u{e9}"] {
        assert!(Attendee::validate_id(id).is_err(), "accepted {id:?}");
    }
    assert!(Attendee::validate_id(&"a".repeat(65)).is_err());
}
