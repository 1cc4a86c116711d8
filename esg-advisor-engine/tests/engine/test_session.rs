//! Session orchestration tests

use esg_advisor_engine::error::ProfileError;
use esg_advisor_engine::message::{MessageBody, Origin};
use esg_advisor_engine::profile::AdvisorProfile;
use esg_advisor_engine::session::{ChatSession, SessionEvent};

use super::common::*;

fn open_session() -> ChatSession {
    ChatSession::open(profile(), secs(0))
}

/// Number of agent messages whose text equals `text`.
fn count_agent_text(session: &ChatSession, text: &str) -> usize {
    session
        .log()
        .iter()
        .filter(|m| m.origin == Origin::Agent && m.body.as_text() == Some(text))
        .count()
}

#[test]
fn intro_message_arrives_after_the_load_delay() {
    let mut session = open_session();
    session.advance_to(ms(999));
    assert!(session.log().is_empty());

    session.advance_to(ms(1_000));
    assert_eq!(session.log().len(), 1);
    let intro = session.log().last().unwrap();
    assert_eq!(intro.origin, Origin::Agent);
    assert_eq!(intro.author_label, "Assistant");
    assert_eq!(
        intro.body.as_text(),
        Some(session.profile().intro_message.as_str())
    );
    assert!(session.events().contains(&SessionEvent::IntroDelivered));
}

#[test]
fn submit_appends_user_message_and_delays_the_reply() {
    let mut session = open_session();
    session.advance_to(secs(2));

    assert!(session.submit("Hello!", Vec::new(), secs(2)));
    assert_eq!(session.log().len(), 2);
    assert_eq!(session.log().last().unwrap().origin, Origin::User);
    assert!(session.awaiting_reply());

    session.advance_to(ms(3_999));
    assert_eq!(session.log().len(), 2);

    session.advance_to(ms(4_000));
    assert_eq!(session.log().len(), 3);
    assert!(!session.awaiting_reply());
    let reply = session.log().last().unwrap();
    assert_eq!(reply.origin, Origin::Agent);
    assert_eq!(
        reply.body.as_text(),
        Some(template(session.profile(), "greeting").as_str())
    );
}

#[test]
fn blank_input_is_rejected() {
    let mut session = open_session();
    session.advance_to(secs(2));

    assert!(!session.submit("", Vec::new(), secs(2)));
    assert!(!session.submit("   \n ", Vec::new(), secs(2)));
    assert_eq!(session.log().len(), 1);
    assert!(!session.awaiting_reply());
}

#[test]
fn input_is_rejected_while_a_reply_is_pending() {
    let mut session = open_session();
    session.advance_to(secs(2));

    assert!(session.submit("Hello!", Vec::new(), secs(2)));
    assert!(!session.submit("Anyone there?", Vec::new(), ms(2_500)));
    assert_eq!(session.log().len(), 2);

    // Accepted again once the reply has landed.
    session.advance_to(secs(5));
    assert!(session.submit("Anyone there?", Vec::new(), secs(5)));
}

#[test]
fn attachments_ride_on_the_user_message() {
    let mut session = open_session();
    session.advance_to(secs(2));

    let attachments = vec!["profile.pdf".to_string(), "checklist.docx".to_string()];
    assert!(session.submit("Here are our documents", attachments.clone(), secs(2)));
    assert_eq!(session.log().last().unwrap().attachments, attachments);

    // Agent replies never carry attachments.
    session.advance_to(secs(5));
    assert!(session.log().last().unwrap().attachments.is_empty());
}

#[test]
fn research_input_offers_the_panel_instead_of_text() {
    let mut session = open_session();
    session.advance_to(secs(2));

    session.submit("Research", Vec::new(), secs(2));
    assert!(!session.research_offered());

    session.advance_to(secs(4));
    assert!(session.research_offered());
    assert_eq!(session.log().last().unwrap().body, MessageBody::ResearchPanel);
    assert!(session.events().contains(&SessionEvent::ResearchPanelOffered));
}

#[test]
fn start_research_is_ignored_until_offered() {
    let mut session = open_session();
    session.advance_to(secs(2));

    session.start_research(secs(2));
    assert!(session.research().is_none());
}

#[test]
fn research_completion_appends_exactly_one_message() {
    let mut session = open_session();
    session.advance_to(secs(2));
    session.submit("Research", Vec::new(), secs(2));
    session.advance_to(secs(4));

    session.start_research(secs(4));
    let completion = session.profile().plan.completion_message.clone();

    // One millisecond short of the final offset: still running.
    session.advance_to(secs(4) + ms(19_999));
    assert_eq!(count_agent_text(&session, &completion), 0);
    assert!(!session.report_available());

    // Exactly the final offset: completed, report available.
    session.advance_to(secs(4) + ms(20_000));
    assert_eq!(count_agent_text(&session, &completion), 1);
    assert!(session.report_available());
    let run = session.research().unwrap();
    assert!(run.is_completed());
    assert_eq!(run.state().active_stage, None);

    // Advancing further never duplicates the completion message.
    session.advance_to(secs(120));
    assert_eq!(count_agent_text(&session, &completion), 1);
}

#[test]
fn start_research_is_a_noop_while_running() {
    let mut session = open_session();
    session.advance_to(secs(2));
    session.submit("Research", Vec::new(), secs(2));
    session.advance_to(secs(4));

    session.start_research(secs(4));
    session.advance_to(secs(10));
    let subtasks_done = session
        .research()
        .unwrap()
        .state()
        .completed_subtasks
        .len();

    // A second start mid-run must not reset anything.
    session.start_research(secs(10));
    assert_eq!(
        session.research().unwrap().state().completed_subtasks.len(),
        subtasks_done
    );

    session.advance_to(secs(24));
    assert!(session.research().unwrap().is_completed());
}

#[test]
fn restart_after_completion_starts_a_fresh_run() {
    let mut session = open_session();
    session.advance_to(secs(2));
    session.submit("Research", Vec::new(), secs(2));
    session.advance_to(secs(4));

    session.start_research(secs(4));
    session.advance_to(secs(24));
    assert!(session.research().unwrap().is_completed());
    assert!(session.report_available());

    session.start_research(secs(30));
    let run = session.research().unwrap();
    assert!(run.is_running());
    assert!(run.state().completed_subtasks.is_empty());
    assert!(!session.report_available());
}

#[test]
fn user_and_completion_appends_serialize_in_firing_order() {
    let mut session = open_session();
    session.advance_to(secs(2));
    session.submit("Research", Vec::new(), secs(2));
    session.advance_to(secs(4));
    session.start_research(secs(4));

    // Reply due at 25s, completion due at 24s: the completion message must
    // land first even though the user message was appended before it.
    session.submit("How is it going?", Vec::new(), secs(23));
    session.advance_to(secs(30));

    let completion = session.profile().plan.completion_message.clone();
    let texts: Vec<Option<&str>> = session.log().iter().map(|m| m.body.as_text()).collect();
    let completion_idx = texts
        .iter()
        .position(|t| *t == Some(completion.as_str()))
        .unwrap();
    let question_idx = texts
        .iter()
        .position(|t| *t == Some("How is it going?"))
        .unwrap();
    assert!(question_idx < completion_idx);
    // The reply to the question lands after the completion message.
    assert_eq!(completion_idx, session.log().len() - 2);
}

#[test]
fn delivery_failure_is_absorbed_with_the_apology_template() {
    let mut session = open_session();
    session.advance_to(secs(2));

    session.fail_next_delivery();
    session.submit("Hello!", Vec::new(), secs(2));
    session.advance_to(secs(5));

    let apology = session.profile().apology_template.clone();
    assert_eq!(count_agent_text(&session, &apology), 1);
    assert!(session
        .events()
        .iter()
        .any(|e| matches!(e, SessionEvent::DeliveryFailureAbsorbed { .. })));

    // The session keeps working afterwards.
    session.submit("Hello again!", Vec::new(), secs(5));
    session.advance_to(secs(8));
    assert_eq!(
        session.log().last().unwrap().body.as_text(),
        Some(template(session.profile(), "greeting").as_str())
    );
}

#[test]
fn trace_records_stage_and_subtask_events() {
    let mut session = open_session();
    session.advance_to(secs(2));
    session.submit("Research", Vec::new(), secs(2));
    session.advance_to(secs(4));
    session.start_research(secs(4));
    session.advance_to(secs(24));

    let stage_events = session
        .events()
        .iter()
        .filter(|e| matches!(e, SessionEvent::StageActivated { .. }))
        .count();
    let subtask_events = session
        .events()
        .iter()
        .filter(|e| matches!(e, SessionEvent::SubtaskCompleted { .. }))
        .count();
    assert_eq!(stage_events, 3);
    assert_eq!(subtask_events, 6);
    assert!(session.events().contains(&SessionEvent::ResearchCompleted));
}

#[test]
fn profile_yaml_roundtrip_preserves_rules_and_plan() {
    let original = AdvisorProfile::default();
    let yaml = serde_yaml::to_string(&original).unwrap();
    let parsed = AdvisorProfile::from_yaml(&yaml).unwrap();
    assert_eq!(parsed.client_name, original.client_name);
    assert_eq!(parsed.rules.rules.len(), original.rules.rules.len());
    assert_eq!(parsed.plan.complete_at_ms, original.plan.complete_at_ms);
}

#[test]
fn plan_with_regressing_stage_offsets_is_rejected() {
    // Stage 2 would activate at 12s, after stage 3's 10s; letting this
    // through would move the active stage backwards mid-run.
    let mut profile = profile();
    profile.plan.stages[1].activate_at_ms = 12_000;
    assert!(matches!(
        profile.validate(),
        Err(ProfileError::StageOrder(title)) if title == profile.plan.stages[2].title
    ));
}

#[test]
fn plan_with_tied_stage_offsets_is_rejected() {
    let mut profile = profile();
    profile.plan.stages[1].activate_at_ms = profile.plan.stages[0].activate_at_ms;
    assert!(matches!(
        profile.validate(),
        Err(ProfileError::StageOrder(_))
    ));
}

#[test]
fn plan_completing_before_its_last_stage_is_rejected() {
    let mut profile = profile();
    profile.plan.complete_at_ms = 5_000; // last activation is at 10s
    assert!(matches!(
        profile.validate(),
        Err(ProfileError::CompletionBeforeLastStage {
            complete_at_ms: 5_000,
            last_activation_ms: 10_000,
        })
    ));
}

#[test]
fn partial_profile_yaml_falls_back_to_defaults() {
    let parsed = AdvisorProfile::from_yaml("client_name: Sunshine Resort\n").unwrap();
    assert_eq!(parsed.client_name, "Sunshine Resort");
    assert_eq!(parsed.reply_delay_ms, 2_000);
    assert_eq!(parsed.plan.stages.len(), 3);
}
