use crate::tests::attendee;
use crate::web::roster_view::{
    NO_MATCHES, NO_RECORDS, RosterQuery, RosterView, list_url, record_url,
};

use ck_config::UiConfig;
use ck_core::{Attendee, Touchpoint};

use googletest::prelude::*;

fn roster(count: usize) -> Vec<Attendee> {
    (1..=count)
        .map(|n| attendee(&format!("id{n}"), &format!("Faculty {n:02}")))
        .collect()
}

#[test]
fn test_query_page_parsing_is_lenient() {
    assert_that!(RosterQuery::default().page(), eq(1));
    assert_that!(RosterQuery::new("", 3).page(), eq(3));

    for raw in ["", "0", "-2", "abc"] {
        let query = RosterQuery {
            q: String::new(),
            page: Some(raw.to_string()),
        };
        assert_that!(query.page(), eq(1));
    }
}

#[test]
fn test_list_url_carries_search_and_page() {
    assert_eq!(
        list_url(Touchpoint::Hotel, "", 1),
        "/dashboard/check-in/hotel"
    );
    assert_eq!(
        list_url(Touchpoint::AirportArrival, " asha rao ", 2),
        "/dashboard/check-in/airport-arrival?q=asha%20rao&page=2"
    );
    assert_eq!(
        record_url(Touchpoint::PreviewRoom, "a1"),
        "/dashboard/check-in/preview-room/a1"
    );
}

#[test]
fn test_build_slices_requested_page() {
    let records = roster(23);

    let view = RosterView::build(
        Touchpoint::Hotel,
        &records,
        &RosterQuery::new("", 3),
        &UiConfig::default(),
    );

    assert_that!(view.page, eq(3));
    assert_that!(view.total_pages, eq(3));
    assert_that!(view.matched, eq(23));
    assert_eq!(view.cards.len(), 3);
    assert_eq!(view.cards[0].name, "Faculty 21");
    assert!(view.empty_message.is_none());

    let pager = view.pager.unwrap();
    let numbers: Vec<u32> = pager.links.iter().map(|link| link.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert!(pager.next_url.is_none());
    assert_eq!(
        pager.prev_url.as_deref(),
        Some("/dashboard/check-in/hotel?page=2")
    );
}

#[test]
fn test_page_past_end_lands_on_last_page() {
    let records = roster(25);

    let view = RosterView::build(
        Touchpoint::Hotel,
        &records,
        &RosterQuery::new("", 99),
        &UiConfig::default(),
    );

    assert_that!(view.page, eq(3));
    assert_that!(view.cards.len(), eq(5));
    assert_that!(view.cards[0].id, eq("id21"));
    assert_eq!(view.empty_message, None);
    assert_eq!(view.list_url, "/dashboard/check-in/hotel?page=3");

    let pager = view.pager.unwrap();
    let current: Vec<u32> = pager
        .links
        .iter()
        .filter(|link| link.current)
        .map(|link| link.number)
        .collect();
    assert_eq!(current, vec![3]);
    assert_eq!(pager.next_url, None);
}

#[test]
fn test_search_narrows_and_links_keep_query() {
    let records = roster(15);

    let view = RosterView::build(
        Touchpoint::Hotel,
        &records,
        &RosterQuery::new("faculty 1", 1),
        &UiConfig::default(),
    );

    assert_that!(view.matched, eq(7));
    assert!(view.pager.is_none());
    assert_eq!(
        view.cards[0].confirm_url,
        "/dashboard/check-in/hotel/id1/confirm?q=faculty%201"
    );
}

#[test]
fn test_empty_messages() {
    let ui = UiConfig::default();

    let none = RosterView::build(Touchpoint::Hotel, &[], &RosterQuery::default(), &ui);
    let no_match = RosterView::build(
        Touchpoint::Hotel,
        &roster(3),
        &RosterQuery::new("zzz", 1),
        &ui,
    );

    assert_eq!(none.empty_message, Some(NO_RECORDS));
    assert_eq!(no_match.empty_message, Some(NO_MATCHES));
}

#[test]
fn test_completed_card_reports_timestamp_only_when_done() {
    let mut done = attendee("a1", "Asha Rao");
    done.hall_check_in_status = Some(true);
    done.hall_check_in_time = Some(String::from("2025-02-14T10:15:00Z"));
    let mut stale = attendee("b2", "Ben Ito");
    stale.hall_check_in_time = Some(String::from("2025-02-14T10:15:00Z"));

    let view = RosterView::build(
        Touchpoint::HallSession,
        &[done, stale],
        &RosterQuery::default(),
        &UiConfig::default(),
    );

    assert!(view.cards[0].completed);
    assert_eq!(view.cards[0].completed_at, "14/02/2025, 10:15:00");
    assert!(!view.cards[1].completed);
    assert_eq!(view.cards[1].completed_at, "-");
}

#[test]
fn test_dialog_targets_record_and_cancels_to_same_list() {
    let records = roster(12);

    let view = RosterView::build(
        Touchpoint::AirportDeparture,
        &records,
        &RosterQuery::new("", 2),
        &UiConfig::default(),
    )
    .with_dialog(&records[10]);

    let dialog = view.dialog.unwrap();
    assert_eq!(dialog.commit_url, "/dashboard/check-in/airport-departure/id11");
    assert_eq!(
        dialog.cancel_url,
        "/dashboard/check-in/airport-departure?page=2"
    );
}

#[test]
fn test_failed_view_has_banner_and_no_empty_message() {
    let view = RosterView::failed(
        Touchpoint::PreviewRoom,
        &RosterQuery::default(),
        "Failed to fetch data",
        &UiConfig::default(),
    )
    .with_toast(Touchpoint::PreviewRoom.success_message());

    assert_eq!(view.fetch_error.as_deref(), Some("Failed to fetch data"));
    assert!(view.empty_message.is_none());
    assert_eq!(view.toast, Some("Submission Successful"));
    assert_that!(view.toast_ms, eq(1800));
}
