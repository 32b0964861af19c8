//! Lock screen gate.

use crate::model::DesktopState;

pub fn lock(state: &mut DesktopState) {
    state.lock.locked = true;
    state.lock.credential_buffer.clear();
    state.lock.error_visible = false;
}

pub fn set_credential_input(state: &mut DesktopState, value: String) {
    if state.lock.locked {
        state.lock.credential_buffer = value;
    }
}

/// Checks the buffered credential and clears the buffer. Returns whether the shell unlocked.
///
/// Attempts are unlimited. A mismatch shows the error indicator until the next attempt.
pub fn submit_credential(state: &mut DesktopState) -> bool {
    if !state.lock.locked {
        return true;
    }
    let candidate = std::mem::take(&mut state.lock.credential_buffer);
    let matched = candidate == state.config.unlock_credential;
    state.lock.locked = !matched;
    state.lock.error_visible = !matched;
    matched
}
