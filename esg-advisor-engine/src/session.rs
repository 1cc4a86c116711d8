//! Conversation session orchestration
//!
//! A [`ChatSession`] owns the one shared mutable resource in the system,
//! the append-only conversation log, plus the pending-reply schedule and at
//! most one research run. Nothing here blocks: `submit` and `start_research`
//! only record intent, and every effect lands when [`ChatSession::advance_to`]
//! is called with a later clock reading. Dropping the session drops both
//! timelines, so no completion can ever land in a torn-down conversation.

use std::time::Duration;

use crate::error::DeliveryError;
use crate::message::{ConversationLog, Message, MessageBody};
use crate::profile::AdvisorProfile;
use crate::research::{ResearchRun, ResearchTransition};
use crate::responder::Reply;
use crate::timeline::Timeline;

/// Work scheduled on the session's own timeline.
#[derive(Debug)]
enum SessionTask {
    /// The agent greeting, shown shortly after the session opens.
    Intro,
    /// A pending agent reply to the captured user input.
    Reply { input: String },
}

/// Structured trace of session effects, surfaced in the TUI trace pane.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    IntroDelivered,
    ReplyScheduled { delay_ms: u64 },
    ReplyDelivered { rule: String },
    /// A simulated delivery failure was absorbed by substituting the
    /// apology template.
    DeliveryFailureAbsorbed { detail: String },
    ResearchPanelOffered,
    ResearchStarted,
    StageActivated { index: usize, title: String },
    SubtaskCompleted { name: String },
    ResearchCompleted,
}

/// One advisory conversation.
pub struct ChatSession {
    profile: AdvisorProfile,
    log: ConversationLog,
    timeline: Timeline<SessionTask>,
    research: Option<ResearchRun>,
    events: Vec<SessionEvent>,
    awaiting_reply: bool,
    research_offered: bool,
    report_available: bool,
    fail_next_delivery: bool,
}

impl ChatSession {
    /// Open a session at `now`. The profile's intro message is scheduled
    /// `intro_delay_ms` later, mirroring the prototype's initial load pause.
    pub fn open(profile: AdvisorProfile, now: Duration) -> Self {
        let mut timeline = Timeline::new();
        timeline.schedule(
            now + Duration::from_millis(profile.intro_delay_ms),
            SessionTask::Intro,
        );
        Self {
            profile,
            log: ConversationLog::new(),
            timeline,
            research: None,
            events: Vec::new(),
            awaiting_reply: false,
            research_offered: false,
            report_available: false,
            fail_next_delivery: false,
        }
    }

    pub fn profile(&self) -> &AdvisorProfile {
        &self.profile
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    pub fn research(&self) -> Option<&ResearchRun> {
        self.research.as_ref()
    }

    /// True while an agent reply is scheduled but not yet delivered. The
    /// input box is disabled meanwhile.
    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// True once the responder has offered the research workflow.
    pub fn research_offered(&self) -> bool {
        self.research_offered
    }

    /// True once a research run has completed and the report can be viewed.
    pub fn report_available(&self) -> bool {
        self.report_available
    }

    /// Force the next reply delivery to fail, exercising the apology path.
    /// The failure is otherwise unreachable: classification is total.
    pub fn fail_next_delivery(&mut self) {
        self.fail_next_delivery = true;
    }

    /// Submit one user message at `now`.
    ///
    /// Blank input is ignored, as is input while a reply is already pending;
    /// returns whether the message was accepted. On acceptance the user
    /// message is appended immediately and the reply is scheduled
    /// `reply_delay_ms` later.
    pub fn submit(&mut self, text: &str, attachments: Vec<String>, now: Duration) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.awaiting_reply {
            return false;
        }

        self.log.push(Message::user(
            &self.profile.user_id,
            &self.profile.user_label,
            trimmed,
            attachments,
        ));
        self.awaiting_reply = true;
        self.timeline.schedule(
            now + Duration::from_millis(self.profile.reply_delay_ms),
            SessionTask::Reply {
                input: trimmed.to_string(),
            },
        );
        self.events.push(SessionEvent::ReplyScheduled {
            delay_ms: self.profile.reply_delay_ms,
        });
        true
    }

    /// Start (or restart) the research workflow at `now`.
    ///
    /// Ignored until the responder has offered the workflow, and while a
    /// run is already in flight; restart after completion is allowed.
    pub fn start_research(&mut self, now: Duration) {
        if !self.research_offered {
            return;
        }
        if self.research.as_ref().is_some_and(|run| run.is_running()) {
            return;
        }
        let mut run = ResearchRun::new(self.profile.plan.clone());
        run.start(now);
        self.research = Some(run);
        self.report_available = false;
        self.events.push(SessionEvent::ResearchStarted);
    }

    /// Apply every effect due at or before `now`: intro delivery, pending
    /// replies, and research transitions.
    ///
    /// The session timeline and the research run are drained together in
    /// global due-time order, so a reply and a research completion always
    /// land in the log in the order their offsets dictate, whichever path
    /// scheduled them first.
    pub fn advance_to(&mut self, now: Duration) {
        loop {
            let session_due = self.timeline.next_due().filter(|due| *due <= now);
            let research_due = self
                .research
                .as_ref()
                .and_then(|run| run.next_due())
                .filter(|due| *due <= now);

            match (session_due, research_due) {
                (None, None) => break,
                (Some(s), Some(r)) if r < s => self.step_research(r),
                (Some(_), _) => self.step_session(),
                (None, Some(r)) => self.step_research(r),
            }
        }
    }

    fn step_session(&mut self) {
        let Some(task) = self.timeline.pop_next() else {
            return;
        };
        match task {
            SessionTask::Intro => {
                let message =
                    self.agent_message(MessageBody::Text(self.profile.intro_message.clone()));
                self.log.push(message);
                self.events.push(SessionEvent::IntroDelivered);
            }
            SessionTask::Reply { input } => {
                self.awaiting_reply = false;
                self.deliver_reply(&input);
            }
        }
    }

    fn step_research(&mut self, up_to: Duration) {
        let fired = match &mut self.research {
            Some(run) => run.advance_to(up_to),
            None => Vec::new(),
        };
        for transition in fired {
            match transition {
                ResearchTransition::StageActivated(index) => {
                    let title = self
                        .profile
                        .plan
                        .stages
                        .get(index)
                        .map(|s| s.title.clone())
                        .unwrap_or_default();
                    self.events.push(SessionEvent::StageActivated { index, title });
                }
                ResearchTransition::SubtaskCompleted(name) => {
                    self.events.push(SessionEvent::SubtaskCompleted { name });
                }
                ResearchTransition::Completed => {
                    let message = self.agent_message(MessageBody::Text(
                        self.profile.plan.completion_message.clone(),
                    ));
                    self.log.push(message);
                    self.report_available = true;
                    self.events.push(SessionEvent::ResearchCompleted);
                }
            }
        }
    }

    fn deliver_reply(&mut self, input: &str) {
        match self.compose(input) {
            Ok((Reply::Text(text), rule)) => {
                let message = self.agent_message(MessageBody::Text(text));
                self.log.push(message);
                self.events.push(SessionEvent::ReplyDelivered { rule });
            }
            Ok((Reply::LaunchResearch, rule)) => {
                let message = self.agent_message(MessageBody::ResearchPanel);
                self.log.push(message);
                self.research_offered = true;
                self.events.push(SessionEvent::ReplyDelivered { rule });
                self.events.push(SessionEvent::ResearchPanelOffered);
            }
            Err(err) => {
                // Absorbed here: the conversation always gets some reply.
                let message = self.agent_message(MessageBody::Text(
                    self.profile.apology_template.clone(),
                ));
                self.log.push(message);
                self.events.push(SessionEvent::DeliveryFailureAbsorbed {
                    detail: err.to_string(),
                });
            }
        }
    }

    fn compose(&mut self, input: &str) -> Result<(Reply, String), DeliveryError> {
        if std::mem::take(&mut self.fail_next_delivery) {
            return Err(DeliveryError::Simulated);
        }
        Ok(self.profile.rules.classify_traced(input))
    }

    fn agent_message(&self, body: MessageBody) -> Message {
        Message::agent(&self.profile.agent_author_id, &self.profile.agent_label, body)
    }
}
