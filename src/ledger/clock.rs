use chrono::{DateTime, Utc};

/// Where the history gets its timestamps from.
///
/// The history records when each transaction was applied. Hard-wiring it to
/// the system clock would make those timestamps impossible to assert on, so
/// the time source is injected instead: production code uses [`SystemClock`],
/// tests use a fixed clock.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The real, wall-clock time source.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub mod test_clock {
    use super::Clock;
    use chrono::{DateTime, TimeZone, Utc};

    /// A clock that always returns the same instant.
    pub struct FixedClock(pub DateTime<Utc>);

    impl FixedClock {
        pub fn at_noon() -> Self {
            Self(Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap())
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }
}
