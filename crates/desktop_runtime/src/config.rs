//! Shell configuration: breakpoints, animation timings, boot pacing, and the unlock credential.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive millisecond range sampled uniformly for randomized delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Draws one delay. A range whose `max_ms` is below `min_ms` always yields `min_ms`.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> u64 {
        if self.max_ms <= self.min_ms {
            return self.min_ms;
        }
        rng.gen_range(self.min_ms..=self.max_ms)
    }
}

/// Boot log pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootTimings {
    /// Delay between revealed characters of a stage message.
    pub char_delay: DelayRange,
    /// Pause after a stage message is fully revealed.
    pub stage_pause: DelayRange,
    /// Chance that a stage is followed by a cosmetic status line.
    pub decorative_probability: f64,
    /// Delay before a cosmetic status line is appended.
    pub decorative_delay: DelayRange,
    /// How long the closing lines stay on screen before the fade starts.
    pub closing_hold_ms: u64,
    /// Fade-out duration of the boot overlay.
    pub fade_ms: u64,
}

impl Default for BootTimings {
    fn default() -> Self {
        Self {
            char_delay: DelayRange::new(10, 35),
            stage_pause: DelayRange::new(120, 380),
            decorative_probability: 0.28,
            decorative_delay: DelayRange::new(40, 110),
            closing_hold_ms: 450,
            fade_ms: 600,
        }
    }
}

/// Runtime configuration for the desktop shell.
///
/// Every field has a default, so partial JSON documents deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Viewports at or below this width use the mobile list layout.
    pub mobile_breakpoint_px: i32,
    /// Entrance (bounce-in) animation length.
    pub bounce_in_ms: u64,
    /// Exit (bounce-out) animation length.
    pub bounce_out_ms: u64,
    /// Minimize-to-dock flight length.
    pub minimize_ms: u64,
    /// Final scale of a window arriving at the dock, in percent.
    pub dock_flight_scale_pct: u32,
    pub default_window_width: i32,
    pub default_window_height: i32,
    /// Whether the boot log overlay is rendered at all.
    pub show_boot_log: bool,
    pub boot: BootTimings,
    /// Delay between revealed characters of the terminal greeting.
    pub greeting_char_delay: DelayRange,
    /// Fixed value the lock screen compares against.
    pub unlock_credential: String,
    /// User name shown in the terminal prompt.
    pub terminal_user: String,
    /// Terminal lines kept after a command runs; older lines scroll away.
    pub terminal_scrollback: usize,
    /// Path of the app registry document, relative to the page.
    pub registry_path: String,
    /// Session flag key recording that the help overlay was dismissed.
    pub help_flag_key: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 767,
            bounce_in_ms: 500,
            bounce_out_ms: 400,
            minimize_ms: 500,
            dock_flight_scale_pct: 20,
            default_window_width: 760,
            default_window_height: 520,
            show_boot_log: true,
            boot: BootTimings::default(),
            greeting_char_delay: DelayRange::new(15, 40),
            unlock_credential: "guest".to_string(),
            terminal_user: "visitor".to_string(),
            terminal_scrollback: 200,
            registry_path: "content.json".to_string(),
            help_flag_key: "portfolio.help.dismissed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    #[test]
    fn partial_documents_fill_in_defaults() {
        let config: ShellConfig = serde_json::from_str(
            r#"{ "mobile_breakpoint_px": 600, "boot": { "fade_ms": 10 } }"#,
        )
        .expect("parse config");

        assert_eq!(config.mobile_breakpoint_px, 600);
        assert_eq!(config.boot.fade_ms, 10);
        assert_eq!(config.boot.char_delay, DelayRange::new(10, 35));
        assert_eq!(config.unlock_credential, ShellConfig::default().unlock_credential);
    }

    #[test]
    fn delay_samples_stay_within_bounds() {
        let mut rng = SmallRng::seed_from_u64(11);
        let range = DelayRange::new(120, 380);
        for _ in 0..500 {
            let delay = range.sample(&mut rng);
            assert!((120..=380).contains(&delay), "out of range: {delay}");
        }
        assert_eq!(DelayRange::new(50, 10).sample(&mut rng), 50);
    }
}
