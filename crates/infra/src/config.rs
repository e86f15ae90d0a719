use tracing::{info, warn};

const DEFAULT_SNOOZE_MINUTES_ENV: &str = "REMINDERS_DEFAULT_SNOOZE_MINUTES";
const DEFAULT_SNOOZE_MINUTES: i64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Number of minutes a `Reminder` is snoozed for when the caller
    /// does not ask for a specific snooze length
    pub default_snooze_minutes: i64,
}

impl Config {
    pub fn new() -> Self {
        let default_snooze_minutes =
            parse_snooze_minutes(std::env::var(DEFAULT_SNOOZE_MINUTES_ENV).ok().as_deref());
        Self {
            default_snooze_minutes,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_snooze_minutes(value: Option<&str>) -> i64 {
    match value {
        None => {
            info!(
                "Did not find {} environment variable. Snoozing for {} minutes by default.",
                DEFAULT_SNOOZE_MINUTES_ENV, DEFAULT_SNOOZE_MINUTES
            );
            DEFAULT_SNOOZE_MINUTES
        }
        Some(value) => match value.trim().parse::<i64>() {
            Ok(minutes) => minutes,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    DEFAULT_SNOOZE_MINUTES_ENV, value, DEFAULT_SNOOZE_MINUTES
                );
                DEFAULT_SNOOZE_MINUTES
            }
        },
    }
}
