//! Dates relative to a reference instant

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};

use super::context::GeneratorContext;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const YEAR_MS: i64 = 365 * DAY_MS;

/// Output style for generated dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// Any instant within a year of the reference, as ISO-8601
    #[default]
    Iso,
    /// Like `Iso`, as epoch millis
    Unix,
    Recent,
    Soon,
    Past,
    Future,
}

impl FromStr for DateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "iso" => Ok(Self::Iso),
            "unix" => Ok(Self::Unix),
            "recent" => Ok(Self::Recent),
            "soon" => Ok(Self::Soon),
            "past" => Ok(Self::Past),
            "future" => Ok(Self::Future),
            other => Err(format!("Unknown date format: {}", other)),
        }
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix
pub fn to_iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl GeneratorContext {
    /// Uniform instant in `[from, to]`
    pub fn between(&mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> DateTime<Utc> {
        let (lo, hi) = ordered(from.timestamp_millis(), to.timestamp_millis());
        let millis = self.int(lo..=hi);
        DateTime::from_timestamp_millis(millis).unwrap_or(from)
    }

    pub fn anytime(&mut self, reference: DateTime<Utc>) -> DateTime<Utc> {
        self.offset(reference, -YEAR_MS, YEAR_MS)
    }

    pub fn recent(&mut self, days: i64, reference: DateTime<Utc>) -> DateTime<Utc> {
        self.offset(reference, -days.saturating_mul(DAY_MS), 0)
    }

    pub fn soon(&mut self, days: i64, reference: DateTime<Utc>) -> DateTime<Utc> {
        self.offset(reference, 0, days.saturating_mul(DAY_MS))
    }

    pub fn past(&mut self, years: i64, reference: DateTime<Utc>) -> DateTime<Utc> {
        self.offset(reference, -years.saturating_mul(YEAR_MS), -1000)
    }

    pub fn future(&mut self, years: i64, reference: DateTime<Utc>) -> DateTime<Utc> {
        self.offset(reference, 1000, years.saturating_mul(YEAR_MS))
    }

    fn offset(&mut self, reference: DateTime<Utc>, from_ms: i64, to_ms: i64) -> DateTime<Utc> {
        let base = reference.timestamp_millis();
        let (lo, hi) = ordered(base.saturating_add(from_ms), base.saturating_add(to_ms));
        let millis = self.int(lo..=hi);
        DateTime::from_timestamp_millis(millis).unwrap_or(reference)
    }
}

fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generator::Locale;

    fn reference() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("UNIX".parse::<DateFormat>().unwrap(), DateFormat::Unix);
        assert_eq!("past".parse::<DateFormat>().unwrap(), DateFormat::Past);
        assert!("weekday".parse::<DateFormat>().is_err());
        assert_eq!(DateFormat::default(), DateFormat::Iso);
    }

    #[test]
    fn test_relative_windows() {
        let mut ctx = GeneratorContext::seeded(Locale::En, 444);
        let now = reference();

        for _ in 0..20 {
            let past = ctx.past(1, now);
            assert!(past < now);
            assert!(now - past <= chrono::Duration::days(365));

            let future = ctx.future(2, now);
            assert!(future > now);
            assert!(future - now <= chrono::Duration::days(730));

            assert!(ctx.recent(3, now) <= now);
            assert!(ctx.soon(3, now) >= now);
        }
    }

    #[test]
    fn test_seeded_dates_repeat() {
        let mut a = GeneratorContext::seeded(Locale::En, 10);
        let mut b = GeneratorContext::seeded(Locale::En, 10);

        assert_eq!(a.anytime(reference()), b.anytime(reference()));
    }

    #[test]
    fn test_iso_rendering() {
        assert_eq!(to_iso(reference()), "2024-06-01T00:00:00.000Z");
    }

    #[test]
    fn test_between_accepts_reversed_bounds() {
        let mut ctx = GeneratorContext::seeded(Locale::En, 2);
        let later = reference() + chrono::Duration::days(1);

        let drawn = ctx.between(later, reference());
        assert!(drawn >= reference() && drawn <= later);
    }
}
