use crate::domain::GameTuning;
use std::{env, str::FromStr, time::Duration};

// Runtime constants (not gameplay tuning).

pub const INPUT_CHANNEL_CAPACITY: usize = 1024;
pub const WORLD_BROADCAST_CAPACITY: usize = 128;

pub const DEFAULT_TICK_RATE_HZ: u32 = 60;
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / DEFAULT_TICK_RATE_HZ as u64);

pub fn tick_interval() -> Duration {
    let hz = parse_or(env::var("TICK_RATE_HZ").ok().as_deref(), DEFAULT_TICK_RATE_HZ);
    interval_for_rate(hz)
}

/// Default tuning with spawn policy overrides from the environment.
pub fn game_tuning() -> GameTuning {
    let mut tuning = GameTuning::default();
    tuning.enemy.spawn_interval_ticks = parse_or(
        env::var("SPAWN_INTERVAL_TICKS").ok().as_deref(),
        tuning.enemy.spawn_interval_ticks,
    );
    tuning.enemy.max_live = parse_or(
        env::var("MAX_ENEMIES").ok().as_deref(),
        tuning.enemy.max_live,
    );
    tuning
}

pub fn spawn_seed() -> Option<u64> {
    env::var("SPAWN_SEED")
        .ok()
        .and_then(|value| value.trim().parse().ok())
}

pub fn emit_frames() -> bool {
    parse_flag(env::var("EMIT_FRAMES").ok().as_deref())
}

fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes")
    )
}

// Rates of zero or above 1 MHz have no usable period; fall back to the default.
fn interval_for_rate(hz: u32) -> Duration {
    match 1_000_000u64.checked_div(u64::from(hz)) {
        Some(micros) if micros > 0 => Duration::from_micros(micros),
        _ => TICK_INTERVAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_value_is_missing_or_invalid_then_default_is_used() {
        assert_eq!(parse_or::<u32>(None, 60), 60);
        assert_eq!(parse_or::<u32>(Some("fast"), 60), 60);
        assert_eq!(parse_or::<u32>(Some(" 30 "), 60), 30);
    }

    #[test]
    fn when_flag_is_truthy_then_it_is_enabled() {
        assert!(parse_flag(Some("1")));
        assert!(parse_flag(Some("TRUE")));
        assert!(!parse_flag(Some("0")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn when_rate_is_zero_then_default_interval_is_used() {
        assert_eq!(interval_for_rate(0), TICK_INTERVAL);
        assert_eq!(interval_for_rate(100), Duration::from_millis(10));
    }

    #[test]
    fn when_rate_exceeds_one_megahertz_then_default_interval_is_used() {
        assert_eq!(interval_for_rate(1_000_000), Duration::from_micros(1));
        assert_eq!(interval_for_rate(2_000_000), TICK_INTERVAL);
        assert_eq!(interval_for_rate(u32::MAX), TICK_INTERVAL);
    }

    #[tokio::test]
    async fn when_rate_is_out_of_range_then_interval_can_still_be_built() {
        let mut interval = tokio::time::interval(interval_for_rate(2_000_000));

        interval.tick().await;
    }
}
