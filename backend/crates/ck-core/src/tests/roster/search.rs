use crate::tests::attendee;
use crate::{Attendee, Touchpoint, search};

fn roster() -> Vec<Attendee> {
    let mut rao = attendee("1", "Asha Rao", "asha@example.org", "98450 12345");
    rao.arrival_flight_detail = Some("AI 504".into());
    rao.hotel_name = Some("Taj West End".into());

    let mut menon = attendee("2", "Vikram Menon", "vikram@example.org", "99000 11111");
    menon.arrival_flight_detail = Some("6E 221".into());
    menon.hotel_name = Some("Leela Palace".into());

    let mut iyer = attendee("3", "Meera Iyer", "meera@clinic.in", "90080 22222");
    iyer.topic_name = Some("Pediatric   Cardiology".into());

    vec![rao, menon, iyer]
}

fn ids(found: &[&Attendee]) -> Vec<String> {
    found.iter().map(|a| a.id.clone()).collect()
}

#[test]
fn test_blank_query_returns_all_in_order() {
    let roster = roster();

    assert_eq!(
        ids(&search(&roster, "", Touchpoint::Hotel)),
        vec!["1", "2", "3"]
    );
    assert_eq!(
        ids(&search(&roster, "  \t ", Touchpoint::Hotel)),
        vec!["1", "2", "3"]
    );
}

#[test]
fn test_query_is_case_insensitive() {
    let roster = roster();
    assert_eq!(ids(&search(&roster, "RAO", Touchpoint::Hotel)), vec!["1"]);
}

#[test]
fn test_every_keyword_must_match() {
    let roster = roster();

    assert_eq!(
        ids(&search(&roster, "example.org vikram", Touchpoint::Hotel)),
        vec!["2"]
    );
    assert!(search(&roster, "asha vikram", Touchpoint::Hotel).is_empty());
}

#[test]
fn test_descriptive_field_depends_on_touchpoint() {
    let roster = roster();

    assert_eq!(
        ids(&search(&roster, "leela", Touchpoint::Hotel)),
        vec!["2"]
    );
    assert!(search(&roster, "leela", Touchpoint::AirportArrival).is_empty());
    assert_eq!(
        ids(&search(&roster, "6e", Touchpoint::AirportArrival)),
        vec!["2"]
    );
}

#[test]
fn test_internal_whitespace_collapsed_in_haystack() {
    let roster = roster();

    assert_eq!(
        ids(&search(
            &roster,
            "pediatric cardiology",
            Touchpoint::HallSession
        )),
        vec!["3"]
    );
}

#[test]
fn test_phone_digits_match() {
    let roster = roster();
    assert_eq!(
        ids(&search(&roster, "22222", Touchpoint::PreviewRoom)),
        vec!["3"]
    );
}
