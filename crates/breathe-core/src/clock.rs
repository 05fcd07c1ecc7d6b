//! Box-breathing phase clock.
//!
//! The clock is wall-clock based and holds no internal timer -- the caller
//! (the TUI draw loop) asks for the current phase as often as it redraws.
//! Phase is a pure function of elapsed time modulo the cycle length, so the
//! textual cue and the moving indicator can never drift apart.

use std::time::{SystemTime, UNIX_EPOCH};

/// One full inhale-hold-exhale-hold loop, in milliseconds.
pub const CYCLE_MS: u64 = 16_000;

/// Duration of each of the four equal quarters.
pub const QUARTER_MS: u64 = CYCLE_MS / 4;

/// The four cues of a box-breathing cycle.
///
/// The two holds are distinct variants because they occupy different sides
/// of the visual track (right after inhaling, left after exhaling), but they
/// share the same user-facing label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathPhase {
    Inhale,
    HoldIn,
    Exhale,
    HoldOut,
}

impl BreathPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inhale => "breathe in",
            Self::HoldIn | Self::HoldOut => "hold",
            Self::Exhale => "breathe out",
        }
    }
}

/// Map elapsed session time to a breathing phase.
///
/// Total and periodic with period [`CYCLE_MS`]; any elapsed value is valid.
pub fn phase_at(elapsed_ms: u64) -> BreathPhase {
    let e = elapsed_ms % CYCLE_MS;
    match e / QUARTER_MS {
        0 => BreathPhase::Inhale,
        1 => BreathPhase::HoldIn,
        2 => BreathPhase::Exhale,
        _ => BreathPhase::HoldOut,
    }
}

/// A running breathing session's clock.
///
/// Captures the start timestamp once; every query takes `now_ms` explicitly
/// so the math stays deterministic under test. Dropping the clock is the
/// only cancellation there is -- nothing fires on its own.
#[derive(Debug, Clone, Copy)]
pub struct BreathClock {
    started_at_ms: u64,
}

impl BreathClock {
    pub fn start_at(now_ms: u64) -> Self {
        Self {
            started_at_ms: now_ms,
        }
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_at_ms)
    }

    pub fn elapsed_secs(&self, now_ms: u64) -> u64 {
        self.elapsed_ms(now_ms) / 1000
    }

    pub fn phase(&self, now_ms: u64) -> BreathPhase {
        phase_at(self.elapsed_ms(now_ms))
    }

    /// Position within the current cycle, `0.0..1.0`.
    ///
    /// One quarter per side of the square track, so the dot and the phase
    /// label are derived from the same number.
    pub fn cycle_progress(&self, now_ms: u64) -> f64 {
        (self.elapsed_ms(now_ms) % CYCLE_MS) as f64 / CYCLE_MS as f64
    }
}

/// Format an elapsed-seconds counter as `MM:SS`.
///
/// Minutes keep counting past 59; there is no hour rollover.
pub fn format_elapsed(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_boundaries_match_the_quarter_grid() {
        assert_eq!(phase_at(0), BreathPhase::Inhale);
        assert_eq!(phase_at(3_999), BreathPhase::Inhale);
        assert_eq!(phase_at(4_000), BreathPhase::HoldIn);
        assert_eq!(phase_at(7_999), BreathPhase::HoldIn);
        assert_eq!(phase_at(8_000), BreathPhase::Exhale);
        assert_eq!(phase_at(11_999), BreathPhase::Exhale);
        assert_eq!(phase_at(12_000), BreathPhase::HoldOut);
        assert_eq!(phase_at(15_999), BreathPhase::HoldOut);
        // Cycle restart is idempotent under the modulo.
        assert_eq!(phase_at(16_000), BreathPhase::Inhale);
    }

    #[test]
    fn phase_is_periodic() {
        for offset in [0u64, 1_234, 4_000, 9_500, 15_999] {
            for cycles in [1u64, 7, 1_000] {
                assert_eq!(phase_at(offset), phase_at(offset + cycles * CYCLE_MS));
            }
        }
    }

    #[test]
    fn clock_is_anchored_to_its_start() {
        let clock = BreathClock::start_at(5_000);
        assert_eq!(clock.phase(5_000), BreathPhase::Inhale);
        assert_eq!(clock.phase(5_000 + 4_000), BreathPhase::HoldIn);
        assert_eq!(clock.elapsed_secs(5_000 + 12_500), 12);
    }

    #[test]
    fn progress_covers_the_unit_interval() {
        let clock = BreathClock::start_at(0);
        assert_eq!(clock.cycle_progress(0), 0.0);
        assert_eq!(clock.cycle_progress(8_000), 0.5);
        assert!(clock.cycle_progress(15_999) < 1.0);
        assert_eq!(clock.cycle_progress(16_000), 0.0);
    }

    #[test]
    fn elapsed_counter_formatting() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(65), "01:05");
        assert_eq!(format_elapsed(3_661), "61:01");
    }

    #[test]
    fn hold_variants_share_a_label() {
        assert_eq!(BreathPhase::HoldIn.label(), BreathPhase::HoldOut.label());
        assert_ne!(BreathPhase::Inhale.label(), BreathPhase::Exhale.label());
    }
}
