//! # Animated statistic counters
//!
//! [`StatCounter`] drives the numbers in the landing-page hero. Each counter
//! is keyed by a stat name; [`stat_target`] maps the name to a fixed target
//! value (these would come from a backend endpoint in a real deployment).
//! Unknown keys are silently skipped — the counter stays at 0 and never
//! animates.
//!
//! The animation interpolates linearly from 0 to the target over
//! [`COUNTER_DURATION_MS`], keyed to elapsed wall-clock time rather than
//! frame count, so a dropped frame skips ahead instead of stretching the
//! animation. It runs once per mount and is not restartable.

use dioxus::prelude::*;

/// Total animation duration in milliseconds.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

const FRAME_MS: u64 = 16;

/// Fixed demo targets for the marketing statistics.
pub fn stat_target(key: &str) -> Option<u64> {
    match key {
        "donors" => Some(12_543),
        "hospitals" => Some(487),
        "saved" => Some(8_932),
        _ => None,
    }
}

/// Displayed value after `elapsed_ms` of a `duration_ms` animation to `target`.
pub fn counter_value(elapsed_ms: f64, duration_ms: f64, target: u64) -> u64 {
    if duration_ms <= 0.0 {
        return target;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    (progress * target as f64).floor() as u64
}

/// Format with thousands separators: `12543` → `"12,543"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}

/// One animated counter, e.g. `StatCounter { stat: "donors" }`.
#[component]
pub fn StatCounter(stat: String) -> Element {
    let mut shown = use_signal(|| 0u64);

    let key = stat.clone();
    use_effect(move || {
        let key = key.clone();
        spawn(async move {
            let Some(target) = stat_target(&key) else {
                return;
            };
            let started = now_ms();
            loop {
                let elapsed = now_ms() - started;
                shown.set(counter_value(elapsed, COUNTER_DURATION_MS, target));
                if elapsed >= COUNTER_DURATION_MS {
                    break;
                }
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_millis(FRAME_MS)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_millis(FRAME_MS)).await;
            }
        });
    });

    rsx! {
        span { class: "stat-number", "{format_count(shown())}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_targets() {
        assert_eq!(stat_target("donors"), Some(12_543));
        assert_eq!(stat_target("hospitals"), Some(487));
        assert_eq!(stat_target("saved"), Some(8_932));
        assert_eq!(stat_target("volunteers"), None);
    }

    #[test]
    fn counter_starts_at_zero_and_ends_at_target() {
        for key in ["donors", "hospitals", "saved"] {
            let target = stat_target(key).unwrap();
            assert_eq!(counter_value(0.0, COUNTER_DURATION_MS, target), 0);
            assert_eq!(counter_value(2000.0, COUNTER_DURATION_MS, target), target);
            assert_eq!(counter_value(2500.0, COUNTER_DURATION_MS, target), target);
        }
    }

    #[test]
    fn counter_never_decreases() {
        for key in ["donors", "hospitals", "saved"] {
            let target = stat_target(key).unwrap();
            let mut previous = 0;
            let mut elapsed = 0.0;
            while elapsed <= 2100.0 {
                let value = counter_value(elapsed, COUNTER_DURATION_MS, target);
                assert!(value >= previous, "{key} decreased at {elapsed}ms");
                previous = value;
                elapsed += 16.0;
            }
            assert_eq!(previous, target);
        }
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        assert_eq!(counter_value(0.0, 0.0, 487), 487);
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(487), "487");
        assert_eq!(format_count(8_932), "8,932");
        assert_eq!(format_count(12_543), "12,543");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
