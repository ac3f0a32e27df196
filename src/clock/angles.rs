use chrono::Timelike;

/// Clockwise hand rotations in degrees, 0 pointing at twelve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandAngles {
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl HandAngles {
    pub fn at<T: Timelike>(time: &T) -> Self {
        let hour = f64::from(time.hour() % 12);
        let minute = f64::from(time.minute());
        let second = f64::from(time.second());
        // chrono encodes a leap second as nanoseconds >= 1e9.
        let millis = f64::from((time.nanosecond() / 1_000_000).min(999));

        Self {
            hours: hour * 30.0 + minute / 2.0,
            minutes: (minute + second / 60.0) * 6.0,
            seconds: (second + millis / 1000.0) * 6.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/angles.rs"]
mod tests;
