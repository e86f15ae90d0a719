use chrono::{DateTime, Utc};

// Time is read through the context so tests can pin "now" to a fixed instant
pub trait ISys: Send + Sync {
    /// The current time, at the full precision of `DateTime<Utc>`
    fn get_datetime(&self) -> DateTime<Utc>;
}

/// Reads the system clock
pub struct RealSys {}
impl ISys for RealSys {
    fn get_datetime(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
