use crate::Renderer;
use crate::tests::attendee;
use crate::web::render::{Forward, field_messages};
use crate::web::roster_view::{RosterQuery, RosterView};

use ck_config::UiConfig;
use ck_core::{FieldError, Touchpoint};

use googletest::prelude::*;

#[test]
fn test_all_templates_load() {
    assert!(Renderer::new().is_ok());
}

#[test]
fn test_field_messages_keeps_first_message_per_field() {
    let errors = vec![
        FieldError::new("email", "Enter a valid email"),
        FieldError::new("password", "too short"),
        FieldError::new("email", "second"),
    ];

    let messages = field_messages(&errors);

    assert_eq!(messages.len(), 2);
    assert_eq!(messages["email"], "Enter a valid email");
}

#[test]
fn test_forward_rounds_delay_up_to_whole_seconds() {
    assert_that!(Forward::new("/dashboard", 900).delay_secs, eq(1));
    assert_that!(Forward::new("/", 3000).delay_secs, eq(3));
    assert_that!(Forward::new("/", 0).delay_secs, eq(0));
}

#[test]
fn test_roster_renders_cards_and_dialog() {
    let renderer = Renderer::new().unwrap();
    let mut done = attendee("b2", "Ben Ito");
    done.hotel_check_in_status = Some(true);
    done.hotel_check_in_time = Some(String::from("2025-02-14T10:15:00Z"));
    let pending = attendee("a1", "Asha <Rao>");
    let records = vec![pending.clone(), done];

    let view = RosterView::build(
        Touchpoint::Hotel,
        &records,
        &RosterQuery::default(),
        &UiConfig::default(),
    )
    .with_dialog(&pending);

    let html = renderer.render("roster.html", view).unwrap().0;

    assert!(html.contains("Faculty Hotel Check-In"));
    assert!(html.contains("Asha &lt;Rao&gt;"));
    assert!(html.contains("10:15:00"));
    assert!(html.contains("Confirm Check-In"));
    assert!(html.contains(r#"id="commit-form""#));
}

#[test]
fn test_roster_renders_fetch_error_instead_of_empty_state() {
    let renderer = Renderer::new().unwrap();
    let view = RosterView::failed(
        Touchpoint::AirportArrival,
        &RosterQuery::default(),
        "Failed to fetch data",
        &UiConfig::default(),
    );

    let html = renderer.render("roster.html", view).unwrap().0;

    assert!(html.contains("Failed to fetch data"));
    assert!(!html.contains("No faculty members found"));
}
