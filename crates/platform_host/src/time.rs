//! Time helpers shared across host contracts and adapters.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

thread_local! {
    static CLOCK_ORIGIN_MS: Cell<Option<u64>> = const { Cell::new(None) };
    static LAST_ELAPSED_MS: Cell<u64> = const { Cell::new(0) };
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns milliseconds elapsed since the first call on this thread.
///
/// Values never decrease, even when the wall clock is adjusted backwards.
pub fn shell_elapsed_ms() -> u64 {
    let now = unix_time_ms_now();
    let origin = CLOCK_ORIGIN_MS.with(|origin| match origin.get() {
        Some(origin) => origin,
        None => {
            origin.set(Some(now));
            now
        }
    });
    let elapsed = now.saturating_sub(origin);
    LAST_ELAPSED_MS.with(|last| {
        let next = elapsed.max(last.get());
        last.set(next);
        next
    })
}
