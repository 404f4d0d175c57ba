use super::*;

use crate::chat::{LeadMode, Sender};
use crate::clock::Millis;
use crate::notify::{Notice, NoticeLog};
use crate::rules::{GREETING_REPLY, LEAD_PROMPT_REPLY};
use crate::scheduler::ManualScheduler;

const T0: Millis = 1_700_000_000_000;

type TestWidget = ChatWidget<ManualScheduler, ManualScheduler, Rc<NoticeLog>>;

struct Harness {
    scheduler: ManualScheduler,
    notices: Rc<NoticeLog>,
    snapshots: Rc<RefCell<Vec<ChatSession>>>,
    widget: TestWidget,
}

fn harness() -> Harness {
    let scheduler = ManualScheduler::starting_at(T0);
    let notices = Rc::new(NoticeLog::new());
    let snapshots = Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let snapshots = Rc::clone(&snapshots);
        move |session: ChatSession| snapshots.borrow_mut().push(session)
    };
    let widget =
        ChatWidget::new(scheduler.clone(), scheduler.clone(), Rc::clone(&notices), &LaunchConfig::default(), sink);
    widget.unlock();
    Harness { scheduler, notices, snapshots, widget }
}

fn lead(name: &str, email: &str) -> LeadForm {
    LeadForm { name: name.into(), email: email.into(), ..LeadForm::default() }
}

// =============================================================
// Locking
// =============================================================

#[test]
fn locked_widget_ignores_messages() {
    let scheduler = ManualScheduler::starting_at(T0);
    let widget: TestWidget = ChatWidget::new(
        scheduler.clone(),
        scheduler.clone(),
        Rc::new(NoticeLog::new()),
        &LaunchConfig::default(),
        |_| {},
    );
    assert!(!widget.is_unlocked());
    assert!(!widget.submit_user_message("привет"));
    assert_eq!(widget.snapshot().messages().len(), 1);

    widget.unlock();
    assert!(widget.submit_user_message("привет"));
}

#[test]
fn locked_widget_ignores_edits_and_leads() {
    let scheduler = ManualScheduler::starting_at(T0);
    let notices = Rc::new(NoticeLog::new());
    let snapshots = Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let snapshots = Rc::clone(&snapshots);
        move |session: ChatSession| snapshots.borrow_mut().push(session)
    };
    let widget: TestWidget =
        ChatWidget::new(scheduler.clone(), scheduler.clone(), Rc::clone(&notices), &LaunchConfig::default(), sink);

    widget.set_draft("x");
    widget.set_form_field(LeadField::Name, "Ann");
    assert_eq!(widget.submit_lead(lead("Ann", "a@b.c")), Err(LeadError::ChatClosed));

    let session = widget.snapshot();
    assert_eq!(session.draft(), "");
    assert_eq!(session.form(), &LeadForm::default());
    assert!(session.leads().is_empty());
    assert!(notices.notices().is_empty());
    assert!(snapshots.borrow().is_empty());
}

// =============================================================
// Delayed replies
// =============================================================

#[test]
fn reply_arrives_only_after_delay() {
    let h = harness();
    assert!(h.widget.submit_user_message("привет, как дела?"));
    assert_eq!(h.widget.snapshot().messages().len(), 2);

    h.scheduler.advance(Duration::from_millis(799));
    assert_eq!(h.widget.snapshot().messages().len(), 2);

    h.scheduler.advance(Duration::from_millis(1));
    let session = h.widget.snapshot();
    let last = session.messages().last().unwrap();
    assert_eq!(last.sender, Sender::Bot);
    assert_eq!(last.text, GREETING_REPLY);
    assert_eq!(last.sent_at, T0 + 800);
}

#[test]
fn exactly_one_reply_per_message() {
    let h = harness();
    for text in ["один", "два", "три"] {
        assert!(h.widget.submit_user_message(text));
    }
    h.scheduler.advance(Duration::from_secs(5));

    let session = h.widget.snapshot();
    let bots = session.messages().iter().filter(|m| m.sender == Sender::Bot).count();
    let users = session.messages().iter().filter(|m| m.sender == Sender::User).count();
    assert_eq!(users, 3);
    assert_eq!(bots, 1 + 3);
}

#[test]
fn ids_strictly_increase_across_replies() {
    let h = harness();
    assert!(h.widget.submit_user_message("a"));
    h.scheduler.advance(Duration::from_millis(400));
    assert!(h.widget.submit_user_message("b"));
    h.scheduler.advance(Duration::from_secs(2));
    assert!(h.widget.submit_user_message("c"));
    h.scheduler.advance(Duration::from_secs(2));

    let ids: Vec<u64> = h.widget.snapshot().messages().iter().map(|m| m.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not increasing: {ids:?}");
    assert_eq!(ids.len(), 7);
}

#[test]
fn blank_message_schedules_nothing() {
    let h = harness();
    assert!(!h.widget.submit_user_message("  "));
    assert_eq!(h.scheduler.pending(), 0);
    assert!(h.snapshots.borrow().is_empty());
}

#[test]
fn submit_draft_posts_and_clears_draft() {
    let h = harness();
    h.widget.set_draft("привет");
    assert!(h.widget.submit_draft());
    assert_eq!(h.widget.snapshot().draft(), "");
    assert_eq!(h.widget.snapshot().messages()[1].text, "привет");
}

#[test]
fn delivered_reply_timers_are_released() {
    let h = harness();
    for text in ["a", "b", "c"] {
        assert!(h.widget.submit_user_message(text));
        h.scheduler.advance(Duration::from_secs(1));
    }
    assert_eq!(h.widget.reply_timers(), 1);

    assert!(h.widget.submit_user_message("d"));
    assert!(h.widget.submit_user_message("e"));
    assert_eq!(h.widget.reply_timers(), 2);
    h.scheduler.advance(Duration::from_secs(1));
    assert_eq!(h.widget.snapshot().messages().len(), 11);
}

#[test]
fn lead_intent_enters_collecting_when_reply_lands() {
    let h = harness();
    assert!(h.widget.submit_user_message("хочу оставить заявку"));
    assert_eq!(h.widget.snapshot().lead_mode(), LeadMode::Idle);

    h.scheduler.advance(Duration::from_millis(800));
    let session = h.widget.snapshot();
    assert_eq!(session.lead_mode(), LeadMode::Collecting);
    assert_eq!(session.messages().last().unwrap().text, LEAD_PROMPT_REPLY);
}

#[test]
fn every_change_is_published() {
    let h = harness();
    h.widget.set_draft("x");
    assert!(h.widget.submit_draft());
    h.scheduler.advance(Duration::from_secs(1));
    // draft edit, user message, bot reply
    assert_eq!(h.snapshots.borrow().len(), 3);
    assert_eq!(h.snapshots.borrow().last().unwrap().messages().len(), 3);
}

// =============================================================
// Leads
// =============================================================

#[test]
fn invalid_lead_notifies_error_and_changes_nothing() {
    let h = harness();
    let err = h.widget.submit_lead(lead("", "a@b.c")).unwrap_err();

    assert_eq!(err, LeadError::MissingRequired(vec![LeadField::Name]));
    assert!(h.widget.snapshot().leads().is_empty());
    assert_eq!(
        h.notices.notices(),
        vec![Notice { kind: NoticeKind::Error, message: "Заполни имя и email!".into() }]
    );
    assert!(h.snapshots.borrow().is_empty());
}

#[test]
fn valid_lead_notifies_success_and_confirms_in_chat() {
    let h = harness();
    assert!(h.widget.submit_user_message("контакт"));
    h.scheduler.advance(Duration::from_secs(1));
    h.widget.set_form_field(LeadField::Name, "Ann");
    h.widget.set_form_field(LeadField::Email, "a@b.c");

    let record = h.widget.submit_current_lead().unwrap();
    assert_eq!(record.name, "Ann");

    let session = h.widget.snapshot();
    assert_eq!(session.leads().len(), 1);
    assert_eq!(session.form(), &LeadForm::default());
    assert_eq!(session.lead_mode(), LeadMode::Idle);
    assert!(session.messages().last().unwrap().text.contains("Ann"));
    assert_eq!(
        h.notices.notices(),
        vec![Notice { kind: NoticeKind::Success, message: LEAD_SUCCESS_NOTICE.into() }]
    );
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn teardown_cancels_pending_reply() {
    let h = harness();
    assert!(h.widget.submit_user_message("привет"));
    h.widget.teardown();
    assert_eq!(h.scheduler.pending(), 0);

    h.scheduler.advance(Duration::from_secs(5));
    assert_eq!(h.widget.snapshot().messages().len(), 2);
    assert!(!h.widget.submit_user_message("ещё"));
}

#[test]
fn torn_down_widget_ignores_edits_and_leads() {
    let h = harness();
    h.widget.teardown();

    h.widget.set_draft("x");
    h.widget.set_form_field(LeadField::Email, "a@b.c");
    assert_eq!(h.widget.submit_lead(lead("Ann", "a@b.c")), Err(LeadError::ChatClosed));
    assert_eq!(h.widget.submit_current_lead(), Err(LeadError::ChatClosed));

    let session = h.widget.snapshot();
    assert_eq!(session.draft(), "");
    assert_eq!(session.form(), &LeadForm::default());
    assert!(session.leads().is_empty());
    assert!(h.notices.notices().is_empty());
    assert!(h.snapshots.borrow().is_empty());
}

#[test]
fn whitespace_name_is_accepted() {
    let h = harness();
    let record = h.widget.submit_lead(lead(" ", "a@b.c")).unwrap();
    assert_eq!(record.name, " ");
    assert_eq!(h.widget.snapshot().leads().len(), 1);
}

#[test]
fn dropping_widget_cancels_pending_reply() {
    let h = harness();
    assert!(h.widget.submit_user_message("привет"));
    let Harness { scheduler, snapshots, widget, .. } = h;
    drop(widget);

    assert_eq!(scheduler.pending(), 0);
    scheduler.advance(Duration::from_secs(5));
    assert_eq!(snapshots.borrow().len(), 1);
}
