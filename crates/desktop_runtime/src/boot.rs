//! Boot log sequencer.
//!
//! Stage messages are typed one character per scheduler task. Between stages the log may gain a
//! cosmetic status line; a `FAIL` line there is decoration only and never affects sequencing.
//! After the last stage the closing lines are shown, the overlay fades, and the shell completes.

use rand::Rng;

use crate::{
    model::{BootLine, BootOverlay, BootPhase, BootTag, DesktopState},
    reducer::RuntimeEffect,
    scheduler::ScheduledAction,
    terminal,
};

pub const BOOT_STAGES: &[&str] = &[
    "Initializing portfolio kernel",
    "Mounting /home/visitor",
    "Loading application registry",
    "Starting window manager",
    "Attaching dock and desktop icons",
    "Spawning desktop terminal",
];

pub const CLOSING_LINES: [&str; 2] = ["All systems nominal.", "Welcome."];

const OK_LINES: &[&str] = &[
    "checksum verified",
    "cache warmed",
    "fonts resident",
    "input devices ready",
];
const INFO_LINES: &[&str] = &[
    "coffee level adequate",
    "2 cores idle, 0 cores complaining",
    "theme: midnight",
];
const FAIL_LINES: &[&str] = &[
    "printer not found (nobody has one anyway)",
    "floppy drive missing",
];

/// Tags a decorative line may carry, weighted toward `OK`.
const DECORATIVE_TAGS: [BootTag; 4] = [BootTag::Ok, BootTag::Ok, BootTag::Info, BootTag::Fail];

/// Text of the decorative line `index` for `tag`, if it exists.
pub fn decorative_text(tag: BootTag, index: usize) -> Option<&'static str> {
    let pool = match tag {
        BootTag::Ok => OK_LINES,
        BootTag::Info => INFO_LINES,
        BootTag::Fail => FAIL_LINES,
        BootTag::Stage | BootTag::Closing => return None,
    };
    pool.get(index).copied()
}

/// Starts the boot sequence. Re-entry after the first call is ignored.
///
/// Without a boot surface the sequence is skipped and the shell completes before this returns.
pub fn start_boot<R: Rng + ?Sized>(
    state: &mut DesktopState,
    rng: &mut R,
    surface_present: bool,
    effects: &mut Vec<RuntimeEffect>,
) {
    if state.boot.phase != BootPhase::NotStarted {
        return;
    }
    if !surface_present || !state.config.show_boot_log || BOOT_STAGES.is_empty() {
        state.boot.overlay = BootOverlay::Absent;
        complete(state, rng, effects);
        return;
    }

    state.boot.overlay = BootOverlay::Visible;
    begin_stage(state, rng, 0);
}

/// Applies a boot continuation produced by the scheduler.
pub fn apply_boot_step<R: Rng + ?Sized>(
    state: &mut DesktopState,
    rng: &mut R,
    action: ScheduledAction,
    effects: &mut Vec<RuntimeEffect>,
) {
    if state.boot.completed {
        return;
    }
    match action {
        ScheduledAction::BootTypeChar => type_char(state, rng),
        ScheduledAction::BootStageDone => stage_done(state, rng),
        ScheduledAction::BootDecorativeLine { tag, text_index } => {
            if let Some(text) = decorative_text(tag, text_index) {
                push_full_line(state, tag, text);
            }
        }
        ScheduledAction::BootFadeOut => {
            state.boot.overlay = BootOverlay::Fading;
            state
                .scheduler
                .schedule(state.config.boot.fade_ms, ScheduledAction::BootRemoveOverlay);
        }
        ScheduledAction::BootRemoveOverlay => {
            state.boot.overlay = BootOverlay::Removed;
            complete(state, rng, effects);
        }
        _ => {}
    }
}

fn begin_stage<R: Rng + ?Sized>(state: &mut DesktopState, rng: &mut R, stage: usize) {
    let Some(text) = BOOT_STAGES.get(stage) else {
        return;
    };
    state.boot.phase = BootPhase::Running { stage };
    state.boot.lines.push(BootLine {
        tag: BootTag::Stage,
        text: (*text).to_string(),
        revealed: 0,
    });
    if text.is_empty() {
        stage_revealed(state, rng);
    } else {
        let delay = state.config.boot.char_delay.sample(rng);
        state.scheduler.schedule(delay, ScheduledAction::BootTypeChar);
    }
}

fn type_char<R: Rng + ?Sized>(state: &mut DesktopState, rng: &mut R) {
    let Some(line) = state
        .boot
        .lines
        .iter_mut()
        .rev()
        .find(|line| line.tag == BootTag::Stage && !line.is_fully_revealed())
    else {
        return;
    };
    line.revealed += 1;
    if line.is_fully_revealed() {
        stage_revealed(state, rng);
    } else {
        let delay = state.config.boot.char_delay.sample(rng);
        state.scheduler.schedule(delay, ScheduledAction::BootTypeChar);
    }
}

fn stage_revealed<R: Rng + ?Sized>(state: &mut DesktopState, rng: &mut R) {
    let timings = state.config.boot.clone();
    let probability = if timings.decorative_probability.is_nan() {
        0.0
    } else {
        timings.decorative_probability.clamp(0.0, 1.0)
    };
    if rng.gen_bool(probability) {
        let tag = DECORATIVE_TAGS[rng.gen_range(0..DECORATIVE_TAGS.len())];
        let pool_len = match tag {
            BootTag::Ok => OK_LINES.len(),
            BootTag::Info => INFO_LINES.len(),
            _ => FAIL_LINES.len(),
        };
        let text_index = rng.gen_range(0..pool_len);
        state.scheduler.schedule(
            timings.decorative_delay.sample(rng),
            ScheduledAction::BootDecorativeLine { tag, text_index },
        );
    }
    state.scheduler.schedule(
        timings.stage_pause.sample(rng),
        ScheduledAction::BootStageDone,
    );
}

fn stage_done<R: Rng + ?Sized>(state: &mut DesktopState, rng: &mut R) {
    let BootPhase::Running { stage } = state.boot.phase else {
        return;
    };
    let next = stage + 1;
    if next < BOOT_STAGES.len() {
        begin_stage(state, rng, next);
        return;
    }

    state.boot.phase = BootPhase::Closing;
    for text in CLOSING_LINES {
        push_full_line(state, BootTag::Closing, text);
    }
    state.scheduler.schedule(
        state.config.boot.closing_hold_ms,
        ScheduledAction::BootFadeOut,
    );
}

fn push_full_line(state: &mut DesktopState, tag: BootTag, text: &str) {
    state.boot.lines.push(BootLine {
        tag,
        text: text.to_string(),
        revealed: text.chars().count(),
    });
}

fn complete<R: Rng + ?Sized>(
    state: &mut DesktopState,
    rng: &mut R,
    effects: &mut Vec<RuntimeEffect>,
) {
    if state.boot.completed {
        return;
    }
    state.boot.phase = BootPhase::Complete;
    state.boot.completed = true;
    effects.push(RuntimeEffect::BootCompleted);
    terminal::start_greeting(state, rng);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    fn run_to_completion(state: &mut DesktopState, rng: &mut SmallRng) -> Vec<RuntimeEffect> {
        let mut effects = Vec::new();
        let mut guard = 0;
        while let Some((task, action)) = state.scheduler.begin_next_due(u64::MAX) {
            apply_boot_step(state, rng, action, &mut effects);
            state.scheduler.finish(task);
            guard += 1;
            assert!(guard < 10_000, "boot never settled");
            if state.boot.completed {
                break;
            }
        }
        effects
    }

    #[test]
    fn missing_surface_completes_synchronously_once() {
        let mut state = DesktopState::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut effects = Vec::new();

        start_boot(&mut state, &mut rng, false, &mut effects);
        start_boot(&mut state, &mut rng, false, &mut effects);

        assert_eq!(effects, vec![RuntimeEffect::BootCompleted]);
        assert_eq!(state.boot.phase, BootPhase::Complete);
        assert_eq!(state.boot.overlay, BootOverlay::Absent);
        assert!(state.boot.lines.is_empty());
    }

    #[test]
    fn disabled_boot_log_behaves_like_a_missing_surface() {
        let mut state = DesktopState::default();
        state.config.show_boot_log = false;
        let mut effects = Vec::new();

        start_boot(&mut state, &mut SmallRng::seed_from_u64(3), true, &mut effects);
        assert!(state.boot.completed);
        assert_eq!(effects, vec![RuntimeEffect::BootCompleted]);
    }

    #[test]
    fn every_stage_is_typed_in_order_before_the_closing_lines() {
        let mut state = DesktopState::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut effects = Vec::new();
        start_boot(&mut state, &mut rng, true, &mut effects);
        assert_eq!(state.boot.phase, BootPhase::Running { stage: 0 });
        assert!(effects.is_empty());

        effects.extend(run_to_completion(&mut state, &mut rng));

        let stages: Vec<&str> = state
            .boot
            .lines
            .iter()
            .filter(|line| line.tag == BootTag::Stage)
            .map(|line| line.text.as_str())
            .collect();
        assert_eq!(stages, BOOT_STAGES.to_vec());
        assert!(state.boot.lines.iter().all(BootLine::is_fully_revealed));

        let closing: Vec<&str> = state
            .boot
            .lines
            .iter()
            .rev()
            .take(2)
            .map(|line| line.text.as_str())
            .collect();
        assert_eq!(closing, vec![CLOSING_LINES[1], CLOSING_LINES[0]]);
        assert_eq!(state.boot.overlay, BootOverlay::Removed);
        assert_eq!(effects, vec![RuntimeEffect::BootCompleted]);
    }

    #[test]
    fn boot_completes_for_any_seed() {
        for seed in 0..64 {
            let mut state = DesktopState::default();
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut effects = Vec::new();
            start_boot(&mut state, &mut rng, true, &mut effects);
            effects.extend(run_to_completion(&mut state, &mut rng));

            assert!(state.boot.completed, "seed {seed} did not complete");
            assert_eq!(effects, vec![RuntimeEffect::BootCompleted], "seed {seed}");
        }
    }

    #[test]
    fn decorative_lines_appear_only_when_certain() {
        let mut state = DesktopState::default();
        state.config.boot.decorative_probability = 1.0;
        let mut rng = SmallRng::seed_from_u64(9);
        let mut effects = Vec::new();
        start_boot(&mut state, &mut rng, true, &mut effects);
        run_to_completion(&mut state, &mut rng);

        let decorative = state
            .boot
            .lines
            .iter()
            .filter(|line| line.tag.label().is_some())
            .count();
        assert_eq!(decorative, BOOT_STAGES.len());

        let mut quiet = DesktopState::default();
        quiet.config.boot.decorative_probability = 0.0;
        start_boot(&mut quiet, &mut rng, true, &mut effects);
        run_to_completion(&mut quiet, &mut rng);
        assert!(quiet.boot.lines.iter().all(|line| line.tag.label().is_none()));
    }

    #[test]
    fn decorative_text_lookup_rejects_structural_tags() {
        assert_eq!(decorative_text(BootTag::Ok, 0), Some(OK_LINES[0]));
        assert_eq!(decorative_text(BootTag::Stage, 0), None);
        assert_eq!(decorative_text(BootTag::Fail, 99), None);
    }
}
