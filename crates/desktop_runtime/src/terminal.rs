//! Desktop terminal: typed greeting and a small command set routed through the window manager.

use rand::Rng;

use crate::{
    lock,
    model::{AppId, DesktopState, TerminalLine, TerminalLineKind},
    reducer::{ReducerError, RuntimeEffect},
    scheduler::ScheduledAction,
    window_manager,
};

pub const GREETING_LINES: &[&str] = &[
    "Welcome to the portfolio shell.",
    "Type `help` to see what this terminal can do.",
];

const HELP_TEXT: &[&str] = &[
    "help            show this list",
    "apps            list installed applications",
    "open <id>       open an application window",
    "close <id>      close an application window",
    "maximize <id>   toggle a window between maximized and normal",
    "whoami          print the current user",
    "lock            lock the screen",
    "clear           clear the terminal",
];

pub fn prompt(state: &DesktopState) -> String {
    format!("{}@portfolio:~$ ", state.config.terminal_user)
}

/// Appends the greeting lines unrevealed and schedules the first character.
pub fn start_greeting<R: Rng + ?Sized>(state: &mut DesktopState, rng: &mut R) {
    if GREETING_LINES.is_empty() {
        return;
    }
    let first = state.terminal.lines.len();
    state
        .terminal
        .lines
        .extend(GREETING_LINES.iter().map(|text| TerminalLine {
            kind: TerminalLineKind::Output,
            text: (*text).to_string(),
            revealed: 0,
        }));
    state.terminal.greeting_line = Some(first);
    schedule_greeting_char(state, rng);
}

/// Reveals one more greeting character, moving to the next greeting line when one completes.
pub fn type_greeting_char<R: Rng + ?Sized>(state: &mut DesktopState, rng: &mut R) {
    let Some(index) = state.terminal.greeting_line else {
        return;
    };
    let Some(line) = state.terminal.lines.get_mut(index) else {
        state.terminal.greeting_line = None;
        return;
    };

    let total = line.text.chars().count();
    line.revealed = (line.revealed + 1).min(total);
    if line.revealed < total {
        schedule_greeting_char(state, rng);
        return;
    }

    let next = index + 1;
    let next_pending = state
        .terminal
        .lines
        .get(next)
        .is_some_and(|line| line.revealed < line.text.chars().count());
    if next_pending {
        state.terminal.greeting_line = Some(next);
        schedule_greeting_char(state, rng);
    } else {
        state.terminal.greeting_line = None;
    }
}

fn schedule_greeting_char<R: Rng + ?Sized>(state: &mut DesktopState, rng: &mut R) {
    let delay = state.config.greeting_char_delay.sample(rng);
    state
        .scheduler
        .schedule(delay, ScheduledAction::GreetingTypeChar);
}

/// Runs the buffered input line as a command.
pub fn submit(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    run_command(state, effects);
    trim_scrollback(state);
}

fn trim_scrollback(state: &mut DesktopState) {
    let excess = state
        .terminal
        .lines
        .len()
        .saturating_sub(state.config.terminal_scrollback);
    if excess == 0 {
        return;
    }
    state.terminal.lines.drain(..excess);
    state.terminal.greeting_line = state
        .terminal
        .greeting_line
        .and_then(|index| index.checked_sub(excess));
}

fn run_command(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    let input = std::mem::take(&mut state.terminal.input);
    let command_line = input.trim();
    let echo = format!("{}{}", prompt(state), command_line);
    state
        .terminal
        .lines
        .push(TerminalLine::full(TerminalLineKind::Command, echo));

    let mut parts = command_line.split_whitespace();
    let Some(command) = parts.next() else {
        return;
    };
    let argument = parts.next();

    match (command, argument) {
        ("help", _) => {
            for line in HELP_TEXT {
                output(state, *line);
            }
        }
        ("apps", _) => {
            let listing: Vec<String> = state
                .registry
                .apps()
                .iter()
                .map(|app| format!("{} {:<14}{}", app.glyph(), app.id, app.title))
                .collect();
            if listing.is_empty() {
                output(state, "no applications installed");
            }
            for line in listing {
                output(state, line);
            }
        }
        ("whoami", _) => {
            let user = state.config.terminal_user.clone();
            output(state, user);
        }
        ("clear", _) => {
            state.terminal.lines.clear();
            state.terminal.greeting_line = None;
        }
        ("lock", _) => {
            lock::lock(state);
            effects.push(RuntimeEffect::FocusLockInput);
        }
        ("open" | "close" | "maximize", None) => {
            error(state, format!("{command}: missing application id"));
        }
        ("open", Some(id)) => {
            let result = window_manager::open_window(state, &AppId::from(id));
            report(state, result, format!("opening {id}"));
        }
        ("close", Some(id)) => {
            let result = window_manager::close_window(state, &AppId::from(id));
            report(state, result, format!("closing {id}"));
        }
        ("maximize", Some(id)) => {
            let result = window_manager::toggle_maximize(state, &AppId::from(id));
            report(state, result, format!("toggling {id}"));
        }
        (other, _) => error(state, format!("{other}: command not found")),
    }
}

fn report(state: &mut DesktopState, result: Result<(), ReducerError>, success: String) {
    match result {
        Ok(()) => output(state, success),
        Err(err) => error(state, err.to_string()),
    }
}

fn output(state: &mut DesktopState, text: impl Into<String>) {
    state
        .terminal
        .lines
        .push(TerminalLine::full(TerminalLineKind::Output, text));
}

fn error(state: &mut DesktopState, text: impl Into<String>) {
    state
        .terminal
        .lines
        .push(TerminalLine::full(TerminalLineKind::Error, text));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;
    use crate::{
        model::{Application, WindowLifecycle},
        registry::AppRegistry,
    };

    fn state_with_about() -> DesktopState {
        let mut state = DesktopState::default();
        state.registry = AppRegistry::new(vec![Application {
            id: AppId::from("about"),
            title: "About".to_string(),
            content: "<p>Hi</p>".to_string(),
            subtitle: None,
        }]);
        window_manager::sync_windows_with_registry(&mut state);
        state
    }

    fn run(state: &mut DesktopState, input: &str) -> Vec<RuntimeEffect> {
        let mut effects = Vec::new();
        state.terminal.input = input.to_string();
        submit(state, &mut effects);
        effects
    }

    fn texts(state: &DesktopState) -> Vec<String> {
        state
            .terminal
            .lines
            .iter()
            .map(|line| line.text.clone())
            .collect()
    }

    #[test]
    fn greeting_is_typed_line_by_line() {
        let mut state = DesktopState::default();
        let mut rng = SmallRng::seed_from_u64(5);
        start_greeting(&mut state, &mut rng);
        assert_eq!(state.terminal.greeting_line, Some(0));
        assert!(state.terminal.lines.iter().all(|line| line.revealed == 0));

        while let Some((task, action)) = state.scheduler.begin_next_due(u64::MAX) {
            assert_eq!(action, ScheduledAction::GreetingTypeChar);
            type_greeting_char(&mut state, &mut rng);
            state.scheduler.finish(task);
        }

        assert_eq!(state.terminal.greeting_line, None);
        let revealed: Vec<String> = state
            .terminal
            .lines
            .iter()
            .map(TerminalLine::revealed_text)
            .collect();
        assert_eq!(revealed, GREETING_LINES.to_vec());
    }

    #[test]
    fn open_command_drives_the_window_manager() {
        let mut state = state_with_about();
        run(&mut state, "  open   about ");

        assert_eq!(
            state.window(&AppId::from("about")).unwrap().lifecycle,
            WindowLifecycle::Open
        );
        assert_eq!(
            texts(&state),
            vec![
                "visitor@portfolio:~$ open   about".to_string(),
                "opening about".to_string()
            ]
        );
        assert!(state.terminal.input.is_empty());
    }

    #[test]
    fn window_errors_are_printed() {
        let mut state = state_with_about();
        run(&mut state, "open ghost");
        run(&mut state, "close");
        run(&mut state, "sudo rm -rf /");

        let errors: Vec<String> = state
            .terminal
            .lines
            .iter()
            .filter(|line| line.kind == TerminalLineKind::Error)
            .map(|line| line.text.clone())
            .collect();
        assert_eq!(
            errors,
            vec![
                ReducerError::UnknownApp(AppId::from("ghost")).to_string(),
                "close: missing application id".to_string(),
                "sudo: command not found".to_string(),
            ]
        );
    }

    #[test]
    fn lock_and_clear_commands() {
        let mut state = state_with_about();
        run(&mut state, "whoami");
        assert_eq!(texts(&state).last().map(String::as_str), Some("visitor"));

        let effects = run(&mut state, "lock");
        assert!(state.lock.locked);
        assert_eq!(effects, vec![RuntimeEffect::FocusLockInput]);

        run(&mut state, "clear");
        assert!(state.terminal.lines.is_empty());
    }

    #[test]
    fn clearing_mid_greeting_stops_typing() {
        let mut state = DesktopState::default();
        let mut rng = SmallRng::seed_from_u64(8);
        start_greeting(&mut state, &mut rng);
        run(&mut state, "clear");
        type_greeting_char(&mut state, &mut rng);

        assert!(state.terminal.lines.is_empty());
        assert_eq!(state.terminal.greeting_line, None);
    }

    #[test]
    fn scrollback_keeps_only_the_newest_lines() {
        let mut state = state_with_about();
        state.config.terminal_scrollback = 5;
        for _ in 0..4 {
            run(&mut state, "whoami");
        }

        assert_eq!(state.terminal.lines.len(), 5);
        assert_eq!(state.terminal.lines[0].text, "visitor");
        assert_eq!(texts(&state).last().map(String::as_str), Some("visitor"));
    }

    #[test]
    fn scrolling_the_greeting_away_stops_typing() {
        let mut state = DesktopState::default();
        state.config.terminal_scrollback = 2;
        let mut rng = SmallRng::seed_from_u64(8);
        start_greeting(&mut state, &mut rng);
        run(&mut state, "whoami");

        assert_eq!(state.terminal.greeting_line, None);
        assert_eq!(state.terminal.lines.len(), 2);
    }
}
