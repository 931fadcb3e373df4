//! Count-Up Numbers

use web_sys::Element;

use crate::frame::sleep;

/// Interval between counter updates
pub const COUNTER_TICK_MS: u32 = 16;
pub const DEFAULT_COUNTER_DURATION_MS: u32 = 2000;

/// Linear count from zero to a target, advanced once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTicker {
    current: f64,
    increment: f64,
    target: i64,
}

impl CounterTicker {
    pub fn new(target: i64, duration_ms: u32) -> Self {
        let ticks = (f64::from(duration_ms) / f64::from(COUNTER_TICK_MS)).max(1.0);
        Self {
            current: 0.0,
            increment: target as f64 / ticks,
            target,
        }
    }

    /// Advance one tick. Returns the value to display and whether the
    /// counter has finished.
    pub fn tick(&mut self) -> (i64, bool) {
        self.current += self.increment;
        if self.increment <= 0.0 || self.current >= self.target as f64 {
            return (self.target, true);
        }
        let shown = (self.current.round() as i64).min(self.target);
        (shown, false)
    }
}

/// Count `element`'s text from 0 up to `target` over `duration_ms`.
pub async fn animate_counter(element: Element, target: i64, duration_ms: u32) {
    let mut ticker = CounterTicker::new(target, duration_ms);
    loop {
        sleep(COUNTER_TICK_MS).await;
        let (shown, done) = ticker.tick();
        element.set_text_content(Some(&shown.to_string()));
        if done {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: i64, duration_ms: u32) -> Vec<i64> {
        let mut ticker = CounterTicker::new(target, duration_ms);
        let mut shown = Vec::new();
        loop {
            let (value, done) = ticker.tick();
            shown.push(value);
            if done {
                return shown;
            }
            assert!(shown.len() < 10_000, "counter never finished");
        }
    }

    #[test]
    fn test_counter_ends_exactly_on_target() {
        for target in [1, 7, 42, 125, 999, 123_456] {
            let shown = run(target, DEFAULT_COUNTER_DURATION_MS);
            assert_eq!(*shown.last().unwrap(), target);
            assert!(shown.iter().all(|v| *v <= target), "overshoot for {target}");
        }
    }

    #[test]
    fn test_counter_is_monotonic() {
        let shown = run(350, DEFAULT_COUNTER_DURATION_MS);
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_counter_tick_count_follows_duration() {
        // 2000ms / 16ms = 125 ticks
        let shown = run(1000, 2000);
        assert!((124..=126).contains(&shown.len()));
    }

    #[test]
    fn test_non_positive_target_finishes_at_once() {
        assert_eq!(run(0, 2000), vec![0]);
        assert_eq!(run(-4, 2000), vec![-4]);
    }

    #[test]
    fn test_tiny_duration_still_finishes() {
        assert_eq!(run(10, 0), vec![10]);
    }
}
