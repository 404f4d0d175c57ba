use super::*;

use crate::clock::Millis;
use crate::leads::{LeadField, LeadForm};

const NOW: Millis = 1_700_000_000_000;

fn session_with_leads(names: &[&str]) -> ChatSession {
    let mut session = ChatSession::new(NOW);
    for (i, name) in names.iter().enumerate() {
        session.set_form_field(LeadField::Name, *name);
        session.set_form_field(LeadField::Email, "lead@example.com");
        let _ = session.submit_current_lead(NOW + i as Millis).unwrap();
    }
    session
}

#[test]
fn fresh_session_has_no_conversion() {
    let figures = Analytics::from_session(&ChatSession::new(NOW));
    assert_eq!(figures.messages, 1);
    assert_eq!(figures.leads, 0);
    assert_eq!(figures.conversion_percent, 0);
    assert!(figures.recent_leads.is_empty());
}

#[test]
fn conversion_rounds_to_nearest_percent() {
    assert_eq!(conversion_percent(1, 3), 33);
    assert_eq!(conversion_percent(2, 3), 67);
    assert_eq!(conversion_percent(1, 2), 50);
    assert_eq!(conversion_percent(0, 10), 0);
    assert_eq!(conversion_percent(3, 0), 0);
}

#[test]
fn counts_follow_the_session() {
    // welcome plus one confirmation per lead
    let figures = Analytics::from_session(&session_with_leads(&["Ann", "Bob"]));
    assert_eq!(figures.messages, 3);
    assert_eq!(figures.leads, 2);
    assert_eq!(figures.conversion_percent, 67);
}

#[test]
fn recent_leads_are_newest_first_and_capped() {
    let figures = Analytics::from_session(&session_with_leads(&["a", "b", "c", "d", "e", "f", "g"]));
    let names: Vec<&str> = figures.recent_leads.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["g", "f", "e", "d", "c"]);
}

#[test]
fn weekly_activity_is_labelled_monday_to_sunday() {
    let bars = Analytics::weekly_activity();
    assert_eq!(bars.len(), 7);
    assert_eq!(bars[0], ActivityBar { label: "ПН", value: 65 });
    assert_eq!(bars[6], ActivityBar { label: "ВС", value: 80 });
}

#[test]
fn blank_form_is_not_counted() {
    let mut session = ChatSession::new(NOW);
    let _ = session.submit_lead(LeadForm::default(), NOW);
    assert_eq!(Analytics::from_session(&session).leads, 0);
}
