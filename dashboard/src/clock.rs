use chrono::Local;

/// Timestamp format stored with every reading.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of ingest timestamps, injectable so tests stay deterministic.
pub trait Clock: Send + Sync {
    /// Current time, already formatted as `YYYY-MM-DD HH:MM:SS`.
    fn now(&self) -> String;
}

/// Wall clock in the host's local time zone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Clock pinned to a fixed instant, a test double for [`SystemClock`].
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_system_clock_format() {
        let now = SystemClock.now();
        assert!(NaiveDateTime::parse_from_str(&now, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_fixed_clock_returns_pinned_value() {
        let clock = FixedClock("2026-08-29 12:00:00".to_string());
        assert_eq!(clock.now(), "2026-08-29 12:00:00");
        assert_eq!(clock.now(), "2026-08-29 12:00:00");
    }
}
