//! Staged research simulator tests

use esg_advisor_engine::research::{
    ResearchRun, ResearchTransition, StageStatus, SubtaskDefinition,
};

use super::common::*;

#[test]
fn idle_run_has_no_active_stage() {
    let run = ResearchRun::new(sample_plan());
    assert!(!run.is_running());
    assert!(!run.is_completed());
    assert_eq!(run.state().active_stage, None);
    assert_eq!(run.stage_status(0), StageStatus::Pending);
    assert_eq!(run.stage_status(1), StageStatus::Pending);
}

#[test]
fn stages_activate_strictly_in_sequence() {
    let mut run = ResearchRun::new(sample_plan());
    run.start(ms(0));

    run.advance_to(ms(0));
    assert_eq!(run.state().active_stage, Some(0));
    assert_eq!(run.stage_status(0), StageStatus::Active);
    assert_eq!(run.stage_status(1), StageStatus::Pending);

    run.advance_to(ms(500));
    assert_eq!(run.state().active_stage, Some(1));
    assert_eq!(run.stage_status(0), StageStatus::Completed);
    assert_eq!(run.stage_status(1), StageStatus::Active);
}

#[test]
fn subtasks_complete_on_their_own_offsets() {
    let mut run = ResearchRun::new(sample_plan());
    run.start(ms(0));

    run.advance_to(ms(599));
    assert!(run.state().completed_subtasks.is_empty());

    run.advance_to(ms(600));
    assert!(run.state().completed_subtasks.contains("alpha"));
    assert!(!run.state().completed_subtasks.contains("beta"));
    // Subtask completion never moves the active stage.
    assert_eq!(run.state().active_stage, Some(1));

    run.advance_to(ms(700));
    assert!(run.state().completed_subtasks.contains("beta"));
}

#[test]
fn subtask_completion_is_monotonic_within_a_run() {
    let mut run = ResearchRun::new(sample_plan());
    run.start(ms(0));

    run.advance_to(ms(600));
    assert!(run.state().completed_subtasks.contains("alpha"));

    for at in [700, 800, 1_000, 5_000] {
        run.advance_to(ms(at));
        assert!(run.state().completed_subtasks.contains("alpha"));
    }
}

#[test]
fn completion_at_exactly_the_final_offset() {
    let mut run = ResearchRun::new(sample_plan());
    run.start(ms(0));

    run.advance_to(ms(999));
    assert!(run.is_running());
    assert!(!run.is_completed());

    let fired = run.advance_to(ms(1_000));
    assert!(fired.contains(&ResearchTransition::Completed));
    assert!(!run.is_running());
    assert!(run.is_completed());
    assert_eq!(run.state().active_stage, None);
}

#[test]
fn no_duplicate_completion_when_advancing_further() {
    let mut run = ResearchRun::new(sample_plan());
    run.start(ms(0));
    run.advance_to(ms(1_000));

    assert!(run.advance_to(ms(2_000)).is_empty());
    assert!(run.advance_to(ms(60_000)).is_empty());
    assert!(run.is_completed());
}

#[test]
fn nothing_fires_after_completion_in_a_single_jump() {
    // "gamma" is mis-scheduled past the completion offset (500 + 2000ms
    // vs completion at 1000ms). It must never fire, even when one call
    // covers the whole run.
    let mut plan = sample_plan();
    plan.stages[1].subtask_groups[0]
        .subtasks
        .push(SubtaskDefinition {
            name: "gamma".to_string(),
            complete_after_ms: 2_000,
        });

    let mut run = ResearchRun::new(plan);
    run.start(ms(0));
    let fired = run.advance_to(ms(10_000));

    assert_eq!(fired.last(), Some(&ResearchTransition::Completed));
    assert!(run.is_completed());
    assert!(!run.state().completed_subtasks.contains("gamma"));
}

#[test]
fn completed_run_reports_every_stage_completed() {
    let mut run = ResearchRun::new(sample_plan());
    run.start(ms(0));
    run.advance_to(ms(1_000));

    assert_eq!(run.stage_status(0), StageStatus::Completed);
    assert_eq!(run.stage_status(1), StageStatus::Completed);
    // Subtasks display as done once their stage has completed, whether or
    // not they fired individually.
    assert!(run.subtask_done(1, "alpha"));
    assert!(run.subtask_done(1, "beta"));
}

#[test]
fn restart_resets_progress() {
    let mut run = ResearchRun::new(sample_plan());
    run.start(ms(0));
    run.advance_to(ms(1_000));
    assert!(run.is_completed());
    assert!(!run.state().completed_subtasks.is_empty());

    run.start(ms(2_000));
    assert!(run.is_running());
    assert!(!run.is_completed());
    assert!(run.state().completed_subtasks.is_empty());

    // The restarted run follows its own schedule relative to the new start.
    run.advance_to(ms(2_000));
    assert_eq!(run.state().active_stage, Some(0));
    run.advance_to(ms(3_000));
    assert!(run.is_completed());
}

#[test]
fn exactly_one_stage_active_before_completion() {
    let mut run = ResearchRun::new(sample_plan());
    run.start(ms(0));

    let stage_count = run.plan().stages.len();
    for at in [0, 100, 499, 500, 600, 700, 999] {
        run.advance_to(ms(at));
        let active = (0..stage_count)
            .filter(|&i| run.stage_status(i) == StageStatus::Active)
            .count();
        assert_eq!(active, 1, "at {}ms", at);

        // Everything before the active stage is completed, everything
        // after is pending.
        let active_idx = run.state().active_stage.unwrap();
        for i in 0..active_idx {
            assert_eq!(run.stage_status(i), StageStatus::Completed);
        }
        for i in active_idx + 1..stage_count {
            assert_eq!(run.stage_status(i), StageStatus::Pending);
        }
    }
}

#[test]
fn default_plan_timings_match_the_prototype() {
    let plan = profile().plan;
    assert_eq!(plan.stages.len(), 3);
    assert_eq!(plan.stages[0].activate_at_ms, 0);
    assert_eq!(plan.stages[1].activate_at_ms, 3_000);
    assert_eq!(plan.stages[2].activate_at_ms, 10_000);
    assert_eq!(plan.complete_at_ms, 20_000);

    let mut run = ResearchRun::new(plan);
    run.start(ms(0));

    // Six subtasks complete one per second from 4s through 9s.
    run.advance_to(ms(4_000));
    assert_eq!(run.state().completed_subtasks.len(), 1);
    run.advance_to(ms(9_000));
    assert_eq!(run.state().completed_subtasks.len(), 6);

    run.advance_to(ms(20_000));
    assert!(run.is_completed());
}
