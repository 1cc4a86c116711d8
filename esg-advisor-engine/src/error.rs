//! Engine error types

use thiserror::Error;

/// Simulated failure while producing an agent reply.
///
/// Absorbed inside the session by substituting the profile's apology
/// template; never surfaced to callers. The conversation always gets some
/// reply rather than an error value.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("simulated delivery failure")]
    Simulated,
}

/// Errors reading or validating an advisor profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to parse profile: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("research plan has no stages")]
    EmptyPlan,
    #[error("duplicate subtask name '{0}' in research plan")]
    DuplicateSubtask(String),
    #[error("stage '{0}' does not activate after the stage before it")]
    StageOrder(String),
    #[error("completion offset {complete_at_ms}ms precedes the last stage activation at {last_activation_ms}ms")]
    CompletionBeforeLastStage {
        complete_at_ms: u64,
        last_activation_ms: u64,
    },
}
