//! Countdown text for the overlay.
//!
//! A [`Countdown`] knows its next target instant, how long to celebrate once a
//! target passes, and how to phrase the time that is left.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Display {
    Remaining(String),
    Celebrate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageAnchor {
    Center,
    TopCenter,
}

pub trait Countdown {
    /// The most recent target at or before `now`.
    fn previous_target(&self, now: NaiveDateTime) -> NaiveDateTime;
    /// The first target strictly after `now`.
    fn next_target(&self, now: NaiveDateTime) -> NaiveDateTime;
    /// How long the celebration lasts after a target passes.
    fn celebration(&self) -> TimeDelta;
    fn format_remaining(&self, now: NaiveDateTime, target: NaiveDateTime) -> String;
    fn message(&self) -> &'static str;
    fn message_anchor(&self) -> MessageAnchor;

    fn pulses(&self) -> bool {
        false
    }

    fn display(&self, now: NaiveDateTime) -> Display {
        if now - self.previous_target(now) < self.celebration() {
            Display::Celebrate
        } else {
            Display::Remaining(self.format_remaining(now, self.next_target(now)))
        }
    }
}

/// Counts down to 1 January with a calendar breakdown.
#[derive(Clone, Copy, Debug, Default)]
pub struct NewYear;

/// Counts down to the next local midnight.
#[derive(Clone, Copy, Debug, Default)]
pub struct Midnight;

/// Midnight on 1 January of `year`. Only years outside chrono's range fall back to `now`.
fn new_year(year: i32, now: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .map(|date| date.and_time(NaiveTime::default()))
        .unwrap_or(now)
}

fn clock(seconds: i64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

impl Countdown for NewYear {
    fn previous_target(&self, now: NaiveDateTime) -> NaiveDateTime {
        new_year(now.year(), now)
    }

    fn next_target(&self, now: NaiveDateTime) -> NaiveDateTime {
        new_year(now.year() + 1, now)
    }

    fn celebration(&self) -> TimeDelta {
        TimeDelta::days(1)
    }

    fn format_remaining(&self, now: NaiveDateTime, target: NaiveDateTime) -> String {
        // Whole calendar months first, clamping the day like a month step on a calendar
        let mut months = (target.year() - now.year()) * 12 + target.month() as i32 - now.month() as i32;
        while months > 0
            && now
                .checked_add_months(Months::new(months as u32))
                .map_or(true, |stepped| stepped > target)
        {
            months -= 1;
        }
        let months = months.max(0);
        let anchor = now
            .checked_add_months(Months::new(months as u32))
            .unwrap_or(now);

        let rest = (target - anchor).num_seconds().max(0);
        format!(
            "{} months, {} days, {}",
            months,
            rest / 86_400,
            clock(rest % 86_400)
        )
    }

    fn message(&self) -> &'static str {
        "Happy New Year!"
    }

    fn message_anchor(&self) -> MessageAnchor {
        MessageAnchor::Center
    }

    fn pulses(&self) -> bool {
        true
    }
}

impl Countdown for Midnight {
    fn previous_target(&self, now: NaiveDateTime) -> NaiveDateTime {
        now.date().and_time(NaiveTime::default())
    }

    fn next_target(&self, now: NaiveDateTime) -> NaiveDateTime {
        (now.date() + Days::new(1)).and_time(NaiveTime::default())
    }

    fn celebration(&self) -> TimeDelta {
        TimeDelta::seconds(60)
    }

    fn format_remaining(&self, now: NaiveDateTime, target: NaiveDateTime) -> String {
        clock((target - now).num_seconds().max(0))
    }

    fn message(&self) -> &'static str {
        "Midnight!"
    }

    fn message_anchor(&self) -> MessageAnchor {
        MessageAnchor::TopCenter
    }
}
