use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, TimeZone, Weekday};

/// A weekday as the Swedish menu pages name it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WeekdayLabel(Weekday);

impl WeekdayLabel {
    pub const ALL: [Self; 7] = [
        Self(Weekday::Mon),
        Self(Weekday::Tue),
        Self(Weekday::Wed),
        Self(Weekday::Thu),
        Self(Weekday::Fri),
        Self(Weekday::Sat),
        Self(Weekday::Sun),
    ];

    /// Monday through Friday, the days the restaurants publish menus for.
    pub const BUSINESS_DAYS: [Self; 5] = [
        Self(Weekday::Mon),
        Self(Weekday::Tue),
        Self(Weekday::Wed),
        Self(Weekday::Thu),
        Self(Weekday::Fri),
    ];

    pub fn of<Tz: TimeZone>(date: &DateTime<Tz>) -> Self {
        Self(date.weekday())
    }

    /// Lookup form, e.g. `TISDAG`.
    #[must_use]
    pub const fn upper(self) -> &'static str {
        match self.0 {
            Weekday::Mon => "MÅNDAG",
            Weekday::Tue => "TISDAG",
            Weekday::Wed => "ONSDAG",
            Weekday::Thu => "TORSDAG",
            Weekday::Fri => "FREDAG",
            Weekday::Sat => "LÖRDAG",
            Weekday::Sun => "SÖNDAG",
        }
    }

    /// Display form, e.g. `Tisdag`.
    #[must_use]
    pub const fn capitalized(self) -> &'static str {
        match self.0 {
            Weekday::Mon => "Måndag",
            Weekday::Tue => "Tisdag",
            Weekday::Wed => "Onsdag",
            Weekday::Thu => "Torsdag",
            Weekday::Fri => "Fredag",
            Weekday::Sat => "Lördag",
            Weekday::Sun => "Söndag",
        }
    }
}

impl fmt::Display for WeekdayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.upper())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownWeekday(pub String);

impl fmt::Display for UnknownWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a Swedish weekday", self.0)
    }
}

impl std::error::Error for UnknownWeekday {}

impl FromStr for WeekdayLabel {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|day| day.upper() == upper)
            .ok_or_else(|| UnknownWeekday(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Stockholm;

    #[test]
    fn test_parse_any_case() {
        assert_eq!("TISDAG".parse(), Ok(WeekdayLabel(Weekday::Tue)));
        assert_eq!("måndag".parse(), Ok(WeekdayLabel(Weekday::Mon)));
        assert_eq!(" Söndag ".parse(), Ok(WeekdayLabel(Weekday::Sun)));
        assert!("Tuesday".parse::<WeekdayLabel>().is_err());
    }

    #[test]
    fn test_capitalized_matches_upper() {
        for day in WeekdayLabel::ALL {
            assert_eq!(day.capitalized().to_uppercase(), day.upper());
        }
    }

    #[test]
    fn test_weekday_uses_local_date() {
        // 23:30 UTC on a Tuesday is already Wednesday in Stockholm.
        let utc = chrono::Utc.with_ymd_and_hms(2024, 10, 15, 23, 30, 0).unwrap();
        let local = utc.with_timezone(&Stockholm);
        assert_eq!(WeekdayLabel::of(&utc).upper(), "TISDAG");
        assert_eq!(WeekdayLabel::of(&local).upper(), "ONSDAG");
    }
}
