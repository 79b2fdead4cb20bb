//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct for the timestamps embedded in
//! generated documents (the `generated-on` comment and the sitemap index
//! `<lastmod>` entries).
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::from_unix(1_000_000_000);
//! assert_eq!(dt.to_rfc3339(), "2001-09-09T01:46:40Z");
//! ```

use crate::error::SitemapError;

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Current time in UTC.
    pub fn now() -> Self {
        use std::time::SystemTime;
        let secs = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix(secs)
    }

    /// Convert seconds since the Unix epoch to a civil UTC datetime.
    #[allow(clippy::cast_possible_truncation)] // All components are range-reduced first
    #[allow(clippy::cast_sign_loss)]
    pub fn from_unix(secs: u64) -> Self {
        let days = (secs / 86_400) as i64;
        let rem = secs % 86_400;
        let hour = (rem / 3600) as u8;
        let minute = ((rem / 60) % 60) as u8;
        let second = (rem % 60) as u8;

        // Civil-from-days conversion over 400-year eras
        let z = days + 719_468;
        let era = z / 146_097;
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = (if month <= 2 { y + 1 } else { y }) as u16;

        Self::new(year, month, day, hour, minute, second)
    }

    pub fn validate(self) -> Result<(), SitemapError> {
        let invalid = |reason: String| SitemapError::Validation {
            field: "datetime",
            reason,
        };

        if !(1..=12).contains(&self.month) {
            return Err(invalid(format!("month is invalid: {}", self.month)));
        }
        let max_days = Self::days_in_month(self.year, self.month);
        if self.day == 0 || self.day > max_days {
            return Err(invalid(format!("day is invalid: {}", self.day)));
        }
        if self.hour > 23 {
            return Err(invalid(format!("hour is invalid: {}", self.hour)));
        }
        if self.minute > 59 {
            return Err(invalid(format!("minute is invalid: {}", self.minute)));
        }
        if self.second > 59 {
            return Err(invalid(format!("second is invalid: {}", self.second)));
        }
        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Format as RFC 3339 (ISO 8601).
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
