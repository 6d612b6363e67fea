//! End-to-end intake conversation tests
//!
//! Drives the session the way a chat frontend would: one utterance at a
//! time, reading only the returned replies and the public snapshot.

use std::sync::Arc;

use intake_agent_agent::{DialogueEngine, IntakeSession};
use intake_agent_core::{IntakeStep, PatientProfile};

fn new_session() -> IntakeSession {
    IntakeSession::new(Arc::new(DialogueEngine::new()))
}

#[test]
fn test_happy_path_booking() {
    let mut session = new_session();

    session.submit("mera naam Rahul Verma hai");
    assert_eq!(session.step(), IntakeStep::AskAge);

    session.submit("umar 32 hai");
    assert_eq!(session.step(), IntakeStep::AskIssue);

    session.submit("mujhe do din se bukhar hai");
    assert_eq!(session.step(), IntakeStep::AskTime);

    let replies = session.submit("kal subah 10 baje").to_vec();
    assert_eq!(session.step(), IntakeStep::Completed);
    assert!(session.is_booked());

    let profile = session.profile();
    assert_eq!(profile.name(), Some("Rahul Verma"));
    assert_eq!(profile.age(), Some(32));
    assert_eq!(profile.issue(), Some("do din se bukhar hai"));
    assert_eq!(profile.slot(), Some("kal subah 10 baje"));

    // Hold, confirmation naming everything, follow-up promise, closing ask
    assert_eq!(replies.len(), 4);
    assert!(replies[1].text.contains("Rahul Verma"));
    assert!(replies[1].text.contains("Dr. Anjali Sharma"));
}

#[test]
fn test_faq_mid_intake_keeps_the_step() {
    let mut session = new_session();
    session.submit("mera naam Sunita hai");
    assert_eq!(session.step(), IntakeStep::AskAge);

    // Asking about fees does not advance the age question
    let replies = session.submit("aapke yahan kitni fees lagti hai bataiye zara").to_vec();
    assert_eq!(session.step(), IntakeStep::AskAge);
    assert!(replies[0].text.contains("₹300"));
    // The age question is repeated so the caller knows where they were
    assert!(replies.iter().any(|r| r.text.contains("umar")));

    // The intake then continues normally
    session.submit("45");
    assert_eq!(session.step(), IntakeStep::AskIssue);
}

#[test]
fn test_retries_do_not_lose_progress() {
    let mut session = new_session();
    session.submit("mera naam Arjun hai");
    session.submit("bahut hui");
    assert_eq!(session.step(), IntakeStep::AskAge);
    assert_eq!(session.profile().name(), Some("Arjun"));

    session.submit("28");
    assert_eq!(session.step(), IntakeStep::AskIssue);
}

#[test]
fn test_reschedule_after_booking() {
    let mut session = new_session();
    session.submit("mera naam Rahul Verma hai");
    session.submit("32");
    session.submit("mujhe bukhar hai");
    session.submit("kal subah 10 baje");
    assert_eq!(session.step(), IntakeStep::Completed);

    // Giving a new parsable slot reschedules silently
    session.submit("Mangalvaar shaam 6 baje");
    assert_eq!(session.step(), IntakeStep::Completed);
    assert_eq!(session.profile().slot(), Some("Mangalvaar shaam 6 baje"));

    // A reschedule request without a slot reopens the time question
    session.submit("mujhe slot change karna hai");
    assert_eq!(session.step(), IntakeStep::AskTime);

    session.submit("Budhvaar dopahar 2 baje");
    assert_eq!(session.step(), IntakeStep::Completed);
    assert_eq!(session.profile().slot(), Some("Budhvaar dopahar 2 baje"));
}

#[test]
fn test_reset_returns_to_start() {
    let mut session = new_session();
    session.submit("mera naam Rahul Verma hai");
    session.submit("32");
    session.submit("mujhe bukhar hai");
    session.submit("kal subah 10 baje");
    assert_eq!(session.step(), IntakeStep::Completed);

    session.reset();
    assert_eq!(session.step(), IntakeStep::AskName);
    assert_eq!(session.profile(), &PatientProfile::new());
    assert_eq!(session.transcript().len(), 1);

    // A fresh intake works end to end after the reset
    session.submit("mera naam Priya hai");
    assert_eq!(session.step(), IntakeStep::AskAge);
    assert_eq!(session.profile().name(), Some("Priya"));
}
