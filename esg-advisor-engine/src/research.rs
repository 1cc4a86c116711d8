//! Staged research progress simulation
//!
//! A [`ResearchRun`] models a multi-stage background "research" task that
//! does no real work: stages activate at fixed offsets from run start,
//! subtasks complete at their own offsets after their stage activates, and
//! the run completes at a final offset, all driven by [`ResearchRun::advance_to`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

use crate::timeline::Timeline;

/// One named unit of work nested under a stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtaskDefinition {
    /// Unique across the whole plan.
    pub name: String,
    /// Completion offset relative to the owning stage's activation.
    pub complete_after_ms: u64,
}

/// A titled group of subtasks, shown as one column in the panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtaskGroup {
    pub category: String,
    pub subtasks: Vec<SubtaskDefinition>,
}

/// One phase of the simulated research workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDefinition {
    pub title: String,
    pub description: String,
    /// Activation offset relative to run start.
    pub activate_at_ms: u64,
    #[serde(default)]
    pub subtask_groups: Vec<SubtaskGroup>,
}

impl StageDefinition {
    pub fn has_subtasks(&self) -> bool {
        !self.subtask_groups.is_empty()
    }
}

/// Fixed plan for one research workflow, known at configuration time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchPlan {
    pub title: String,
    /// Stages in activation order.
    pub stages: Vec<StageDefinition>,
    /// Offset at which the whole run completes.
    pub complete_at_ms: u64,
    /// Agent message appended to the conversation when the run completes.
    pub completion_message: String,
    /// Footer label shown before a run starts.
    pub estimate_label: String,
}

/// Mutable run-time state for one simulation instance.
#[derive(Debug, Clone, Default)]
pub struct ProgressState {
    /// True between start and completion.
    pub is_running: bool,
    /// True after the final stage finishes.
    pub is_completed: bool,
    /// Index of the single active stage; `None` before start and after
    /// completion.
    pub active_stage: Option<usize>,
    /// Subtask names that have individually finished. Grows monotonically
    /// during a run, reset to empty when a new run starts.
    pub completed_subtasks: HashSet<String>,
}

/// Derived display status of one stage. Always recomputed from
/// [`ProgressState`], never stored, so it cannot go stale when the run
/// completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Pending,
    Active,
    Completed,
}

/// A transition fired by the run's timeline.
#[derive(Debug, Clone, PartialEq)]
pub enum ResearchTransition {
    StageActivated(usize),
    SubtaskCompleted(String),
    /// Fires exactly once per run.
    Completed,
}

/// One simulated research run: progress state plus the timeline driving it.
#[derive(Debug)]
pub struct ResearchRun {
    plan: ResearchPlan,
    state: ProgressState,
    timeline: Timeline<ResearchTransition>,
}

impl ResearchRun {
    /// Create an idle run for `plan`. Nothing is scheduled until
    /// [`ResearchRun::start`].
    pub fn new(plan: ResearchPlan) -> Self {
        Self {
            plan,
            state: ProgressState::default(),
            timeline: Timeline::new(),
        }
    }

    /// Begin (or restart) the run at `now`.
    ///
    /// Clears all progress and schedules every stage activation, subtask
    /// completion, and the final completion relative to `now`. The run does
    /// not defend against being restarted mid-flight; the host disables the
    /// start control while `is_running`.
    pub fn start(&mut self, now: Duration) {
        self.state = ProgressState {
            is_running: true,
            ..ProgressState::default()
        };
        self.timeline.clear();

        for (idx, stage) in self.plan.stages.iter().enumerate() {
            let activate_at = now + Duration::from_millis(stage.activate_at_ms);
            self.timeline
                .schedule(activate_at, ResearchTransition::StageActivated(idx));
            for group in &stage.subtask_groups {
                for subtask in &group.subtasks {
                    self.timeline.schedule(
                        activate_at + Duration::from_millis(subtask.complete_after_ms),
                        ResearchTransition::SubtaskCompleted(subtask.name.clone()),
                    );
                }
            }
        }
        self.timeline.schedule(
            now + Duration::from_millis(self.plan.complete_at_ms),
            ResearchTransition::Completed,
        );
    }

    /// Apply every transition due at or before `now`, returning them in
    /// firing order.
    pub fn advance_to(&mut self, now: Duration) -> Vec<ResearchTransition> {
        let mut fired = self.timeline.advance_to(now);
        let mut applied = 0;
        for transition in &fired {
            applied += 1;
            match transition {
                ResearchTransition::StageActivated(idx) => {
                    self.state.active_stage = Some(*idx);
                }
                ResearchTransition::SubtaskCompleted(name) => {
                    self.state.completed_subtasks.insert(name.clone());
                }
                ResearchTransition::Completed => {
                    self.state.is_running = false;
                    self.state.is_completed = true;
                    self.state.active_stage = None;
                    // A mis-specified plan could schedule work past the
                    // completion offset; nothing may fire after it.
                    self.timeline.clear();
                    break;
                }
            }
        }
        fired.truncate(applied);
        fired
    }

    /// Due time of the next pending transition, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.timeline.next_due()
    }

    pub fn plan(&self) -> &ResearchPlan {
        &self.plan
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_completed
    }

    /// Derived status of stage `index` at this instant.
    pub fn stage_status(&self, index: usize) -> StageStatus {
        if self.state.is_completed {
            return StageStatus::Completed;
        }
        match self.state.active_stage {
            Some(active) if index < active => StageStatus::Completed,
            Some(active) if index == active => StageStatus::Active,
            _ => StageStatus::Pending,
        }
    }

    /// Whether `name` should display as done: individually completed, or
    /// swept up by its whole stage having completed.
    pub fn subtask_done(&self, stage_index: usize, name: &str) -> bool {
        self.state.completed_subtasks.contains(name)
            || self.stage_status(stage_index) == StageStatus::Completed
    }
}
