use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// 出發時間窗，兩端都包含。以查詢當天為基準日。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub first: NaiveDateTime,
    pub last: NaiveDateTime,
}

impl TimeWindow {
    /// 以今天為基準建立時間窗
    pub fn resolve(first: NaiveTime, last: NaiveTime) -> Self {
        Self::resolve_on(Local::now().date_naive(), first, last)
    }

    pub fn resolve_on(day: NaiveDate, first: NaiveTime, last: NaiveTime) -> Self {
        Self {
            first: day.and_time(first),
            last: day.and_time(last),
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.first.date()
    }

    /// `last` 早於 `first` 時永遠不成立
    pub fn contains(&self, time: NaiveTime) -> bool {
        let at = self.day().and_time(time);
        self.first <= at && at <= self.last
    }

    /// Checks a departure time as printed by the vendor ("HH:MM").
    /// Anything that does not parse as a clock time is outside the window.
    pub fn contains_clock(&self, departure: &str) -> bool {
        parse_departure(departure).is_some_and(|time| self.contains(time))
    }
}

fn parse_departure(departure: &str) -> Option<NaiveTime> {
    let (hour, minute) = departure.trim().split_once(':')?;
    let hour: u32 = hour.trim().parse().ok()?;
    let minute: u32 = minute.trim().parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_resolve_anchors_to_today() {
        let window = TimeWindow::resolve(hm(8, 0), hm(9, 15));
        let today = Local::now().date_naive();

        assert_eq!(window.first.date(), today);
        assert_eq!(window.last.date(), today);
        assert_eq!((window.first.hour(), window.first.minute()), (8, 0));
        assert_eq!((window.last.hour(), window.last.minute()), (9, 15));
        assert_eq!(window.first.second(), 0);
        assert_eq!(window.last.nanosecond(), 0);
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let window = TimeWindow::resolve(hm(8, 0), hm(9, 15));

        assert!(window.contains_clock("08:00"));
        assert!(!window.contains_clock("07:59"));
        assert!(window.contains_clock("09:15"));
        assert!(!window.contains_clock("09:16"));
        assert!(window.contains_clock(" 8:30 "));
    }

    #[test]
    fn test_unparseable_departure_is_outside() {
        let window = TimeWindow::resolve(hm(0, 0), hm(23, 59));

        assert!(!window.contains_clock(""));
        assert!(!window.contains_clock("08h30"));
        assert!(!window.contains_clock("25:00"));
        assert!(!window.contains_clock("ab:cd"));
    }

    #[test]
    fn test_inverted_window_contains_nothing() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let window = TimeWindow::resolve_on(day, hm(22, 0), hm(2, 0));

        assert_eq!(window.day(), day);
        assert!(!window.contains(hm(23, 0)));
        assert!(!window.contains(hm(1, 0)));
        assert!(!window.contains(hm(12, 0)));
    }
}
