use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PromotionId(pub Uuid);

impl PromotionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<PromotionId> for Uuid {
    fn from(value: PromotionId) -> Self {
        value.0
    }
}

impl From<Uuid> for PromotionId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for PromotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Day codes as they travel on the wire: `MON`..`SUN`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Mon => Self::Mon,
            chrono::Weekday::Tue => Self::Tue,
            chrono::Weekday::Wed => Self::Wed,
            chrono::Weekday::Thu => Self::Thu,
            chrono::Weekday::Fri => Self::Fri,
            chrono::Weekday::Sat => Self::Sat,
            chrono::Weekday::Sun => Self::Sun,
        }
    }
}

impl Weekday {
    pub fn code(self) -> &'static str {
        match self {
            Self::Mon => "MON",
            Self::Tue => "TUE",
            Self::Wed => "WED",
            Self::Thu => "THU",
            Self::Fri => "FRI",
            Self::Sat => "SAT",
            Self::Sun => "SUN",
        }
    }

    pub fn from_code(code: &str) -> DomainResult<Self> {
        match code {
            "MON" => Ok(Self::Mon),
            "TUE" => Ok(Self::Tue),
            "WED" => Ok(Self::Wed),
            "THU" => Ok(Self::Thu),
            "FRI" => Ok(Self::Fri),
            "SAT" => Ok(Self::Sat),
            "SUN" => Ok(Self::Sun),
            other => Err(DomainError::Validation(format!(
                "unknown weekday code: {other}"
            ))),
        }
    }
}

const MINUTES_PER_DAY: u16 = 24 * 60;

/// Clock time as minutes since midnight (0..=1439).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn new(minutes: u16) -> DomainResult<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(DomainError::InvalidTimeWindow(format!(
                "time of day out of range: {minutes}"
            )));
        }
        Ok(Self(minutes))
    }

    /// Parse `"HH:MM"`.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let invalid =
            || DomainError::InvalidTimeWindow(format!("expected HH:MM, got {value:?}"));
        let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
        let hours: u16 = hours.parse().map_err(|_| invalid())?;
        let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }
        Ok(Self(hours * 60 + minutes))
    }

    pub fn from_datetime<Tz: chrono::TimeZone>(value: &chrono::DateTime<Tz>) -> Self {
        use chrono::Timelike;
        Self((value.hour() * 60 + value.minute()) as u16)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Validated daily validity window. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeWindow {
    /// Shortest window a promotion may declare.
    pub const MIN_SPAN_MINUTES: u16 = 15;

    pub fn new(start: TimeOfDay, end: TimeOfDay) -> DomainResult<Self> {
        if start >= end {
            return Err(DomainError::InvalidTimeWindow(format!(
                "start {start} must be before end {end}"
            )));
        }
        if end.minutes() - start.minutes() < Self::MIN_SPAN_MINUTES {
            return Err(DomainError::InvalidTimeWindow(format!(
                "window {start}..{end} is shorter than {} minutes",
                Self::MIN_SPAN_MINUTES
            )));
        }
        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> DomainResult<Self> {
        Self::new(TimeOfDay::parse(start)?, TimeOfDay::parse(end)?)
    }

    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.start <= time && time <= self.end
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }
}

/// Exactly one discount mode per promotion. The wire carries two optional
/// fields; `from_parts` rejects the states the entity must never hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discount {
    /// Fixed replacement price in the smallest currency unit.
    Price(i64),
    /// Percentage off the original price, 0..=100.
    Percentage(u8),
}

impl Discount {
    pub fn from_parts(price: Option<i64>, percentage: Option<u8>) -> DomainResult<Self> {
        match (price, percentage) {
            (Some(_), Some(_)) => Err(DomainError::InvalidPromotion(
                "discount price and percentage are mutually exclusive".into(),
            )),
            (None, None) => Err(DomainError::InvalidPromotion(
                "a discount price or percentage is required".into(),
            )),
            (Some(price), None) => {
                if price < 0 {
                    return Err(DomainError::InvalidPromotion(format!(
                        "discount price cannot be negative, got {price}"
                    )));
                }
                Ok(Self::Price(price))
            }
            (None, Some(percentage)) => {
                if percentage > 100 {
                    return Err(DomainError::InvalidPromotion(format!(
                        "discount percentage must be within 0..=100, got {percentage}"
                    )));
                }
                Ok(Self::Percentage(percentage))
            }
        }
    }

    pub fn price(&self) -> Option<i64> {
        match self {
            Self::Price(value) => Some(*value),
            Self::Percentage(_) => None,
        }
    }

    pub fn percentage(&self) -> Option<u8> {
        match self {
            Self::Price(_) => None,
            Self::Percentage(value) => Some(*value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    #[test]
    fn parses_hh_mm() {
        assert_eq!(TimeOfDay::parse("00:00").unwrap().minutes(), 0);
        assert_eq!(TimeOfDay::parse("09:30").unwrap().minutes(), 570);
        assert_eq!(TimeOfDay::parse("23:59").unwrap().minutes(), 1439);
    }

    #[test]
    fn rejects_malformed_times() {
        for bad in ["24:00", "12:60", "12", "ab:cd", "9:3:1", ""] {
            assert!(
                matches!(TimeOfDay::parse(bad), Err(DomainError::InvalidTimeWindow(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn window_requires_start_before_end() {
        assert!(TimeWindow::parse("17:00", "09:00").is_err());
        assert!(TimeWindow::parse("09:00", "09:00").is_err());
    }

    #[test]
    fn window_requires_minimum_span() {
        assert!(TimeWindow::parse("09:00", "09:10").is_err());
        assert!(TimeWindow::parse("09:00", "09:14").is_err());
        assert!(TimeWindow::parse("09:00", "09:15").is_ok());
        // Spans crossing an hour boundary are measured in minutes, not in
        // HHMM arithmetic.
        assert!(TimeWindow::parse("09:55", "10:05").is_err());
    }

    #[test]
    fn contains_is_inclusive_on_both_bounds() {
        let window = TimeWindow::parse("09:00", "17:00").unwrap();
        assert!(window.contains(TimeOfDay::parse("09:00").unwrap()));
        assert!(window.contains(TimeOfDay::parse("12:34").unwrap()));
        assert!(window.contains(TimeOfDay::parse("17:00").unwrap()));
        assert!(!window.contains(TimeOfDay::parse("17:01").unwrap()));
        assert!(!window.contains(TimeOfDay::parse("08:59").unwrap()));
    }

    #[test]
    fn discount_requires_exactly_one_mode() {
        assert!(matches!(
            Discount::from_parts(None, None),
            Err(DomainError::InvalidPromotion(_))
        ));
        assert!(matches!(
            Discount::from_parts(Some(500), Some(10)),
            Err(DomainError::InvalidPromotion(_))
        ));
        assert_eq!(
            Discount::from_parts(Some(500), None).unwrap(),
            Discount::Price(500)
        );
        assert_eq!(
            Discount::from_parts(None, Some(10)).unwrap(),
            Discount::Percentage(10)
        );
    }

    #[test]
    fn discount_bounds_are_enforced() {
        assert!(Discount::from_parts(Some(-1), None).is_err());
        assert!(Discount::from_parts(None, Some(101)).is_err());
        assert!(Discount::from_parts(None, Some(0)).is_ok());
        assert!(Discount::from_parts(None, Some(100)).is_ok());
    }

    #[test]
    fn weekday_codes_round_trip() {
        for code in ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"] {
            assert_eq!(Weekday::from_code(code).unwrap().code(), code);
        }
        assert!(Weekday::from_code("LUN").is_err());
    }
}
