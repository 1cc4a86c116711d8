//! Application state and input-driven operations
//!
//! [`App`] owns the chat session and every piece of view state: overlay
//! flags, scroll positions, input buffers. The render layer only reads
//! snapshots; all mutation goes through the methods here and in the
//! submodules.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use esg_advisor_engine::profile::AdvisorProfile;
use esg_advisor_engine::session::ChatSession;

mod models;
pub use models::*;

mod attachments;

const SPINNER: [char; 8] = ['\u{280b}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283c}', '\u{2834}', '\u{2826}', '\u{2827}'];

/// Main application state.
pub struct App {
    pub session: ChatSession,
    pub input_buffer: String,
    /// Attachment names for the next message, cleared once it is sent.
    pub pending_attachments: Vec<String>,
    pub should_quit: bool,

    /// Pane with keyboard scroll focus.
    pub active_pane: ActivePane,
    /// Lines scrolled up from the bottom; 0 follows the newest entry.
    pub message_scroll: u16,
    pub trace_scroll: u16,

    // Report overlay state
    pub show_report: bool,
    pub report_scroll: u16,
    report_ready_at: Duration,

    // Attachment picker state
    pub show_file_browser: bool,
    pub file_browser_items: Vec<PathBuf>,
    pub file_browser_selected: usize,
    pub file_browser_search: String,
    pub current_dir: PathBuf,

    // Typing indicator
    pub spinner_frame: usize,
    response_start: Option<Instant>,

    started_at: Instant,
    now: Duration,
}

impl App {
    pub fn new(profile: AdvisorProfile) -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        Self {
            session: ChatSession::open(profile, Duration::ZERO),
            input_buffer: String::new(),
            pending_attachments: Vec::new(),
            should_quit: false,
            active_pane: ActivePane::Messages,
            message_scroll: 0,
            trace_scroll: 0,
            show_report: false,
            report_scroll: 0,
            report_ready_at: Duration::ZERO,
            show_file_browser: false,
            file_browser_items: Vec::new(),
            file_browser_selected: 0,
            file_browser_search: String::new(),
            current_dir,
            spinner_frame: 0,
            response_start: None,
            started_at: Instant::now(),
            now: Duration::ZERO,
        }
    }

    /// Advance the session to the current clock reading and refresh
    /// animation state. Called once per event-loop tick.
    pub fn on_tick(&mut self) {
        self.now = self.started_at.elapsed();
        self.session.advance_to(self.now);

        if self.session.awaiting_reply() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        } else {
            self.response_start = None;
        }
    }

    /// Send the input buffer as a user message, with pending attachments.
    pub fn send_message(&mut self) {
        if self.input_buffer.trim().is_empty() {
            return;
        }
        let text = self.input_buffer.clone();
        let attachments = self.pending_attachments.clone();
        if self.session.submit(&text, attachments, self.now) {
            self.input_buffer.clear();
            self.pending_attachments.clear();
            self.response_start = Some(Instant::now());
            self.message_scroll = 0;
        }
    }

    /// Start the research workflow. The session ignores this until the
    /// panel has been offered, and while a run is in flight.
    pub fn start_research(&mut self) {
        self.session.start_research(self.now);
    }

    pub fn open_report(&mut self) {
        if !self.session.report_available() {
            return;
        }
        self.show_report = true;
        self.report_scroll = 0;
        // Brief simulated load before the content appears.
        self.report_ready_at = self.now + Duration::from_millis(500);
    }

    pub fn close_report(&mut self) {
        self.show_report = false;
    }

    pub fn report_loading(&self) -> bool {
        self.now < self.report_ready_at
    }

    /// Switch scroll focus between the chat messages and the trace pane.
    pub fn next_pane(&mut self) {
        self.active_pane = match self.active_pane {
            ActivePane::Messages => ActivePane::Trace,
            ActivePane::Trace => ActivePane::Messages,
        };
    }

    pub fn scroll_up(&mut self, lines: u16) {
        match self.active_pane {
            ActivePane::Messages => {
                self.message_scroll = self.message_scroll.saturating_add(lines);
            }
            ActivePane::Trace => {
                self.trace_scroll = self.trace_scroll.saturating_add(lines);
            }
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        match self.active_pane {
            ActivePane::Messages => {
                self.message_scroll = self.message_scroll.saturating_sub(lines);
            }
            ActivePane::Trace => {
                self.trace_scroll = self.trace_scroll.saturating_sub(lines);
            }
        }
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.spinner_frame]
    }

    /// Seconds elapsed since the pending message was sent.
    pub fn thinking_seconds(&self) -> u64 {
        self.response_start
            .map(|start| start.elapsed().as_secs())
            .unwrap_or(0)
    }
}
