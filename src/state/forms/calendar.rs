//! Date picker state for the booking calendar

use super::validator::DateRule;
use chrono::{Datelike, Days, NaiveDate};

/// A month view with a movable cursor and an optional picked date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    cursor: NaiveDate,
    selected: Option<NaiveDate>,
}

impl DatePicker {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            cursor: today,
            selected: None,
        }
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Move the cursor by whole days (negative goes back)
    pub fn move_days(&mut self, days: i64) {
        let step = Days::new(days.unsigned_abs());
        let moved = if days >= 0 {
            self.cursor.checked_add_days(step)
        } else {
            self.cursor.checked_sub_days(step)
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    pub fn move_weeks(&mut self, weeks: i64) {
        self.move_days(weeks * 7);
    }

    /// Pick the date under the cursor if the rule allows it
    pub fn select_cursor(&mut self, rule: &DateRule, today: NaiveDate) -> bool {
        if rule.is_available(self.cursor, today) {
            self.selected = Some(self.cursor);
            true
        } else {
            tracing::debug!(date = %self.cursor, "date not available");
            false
        }
    }

    /// Forget the picked date and put the cursor back on `today`
    pub fn reset(&mut self, today: NaiveDate) {
        self.cursor = today;
        self.selected = None;
    }

    /// Weeks of the cursor's month, Sunday first. Days outside the month are `None`.
    pub fn month_grid(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let Some(first) = self.cursor.with_day(1) else {
            return Vec::new();
        };
        let lead = first.weekday().num_days_from_sunday() as usize;

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut slot = lead;
        let mut day = Some(first);

        while let Some(date) = day.filter(|d| d.month() == first.month()) {
            week[slot] = Some(date);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
            day = date.succ_opt();
        }
        if slot > 0 {
            weeks.push(week);
        }
        weeks
    }
}
