use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use api::theme::{Theme, ThemeTable};

// a calendar day without a year, ordered the same way as its MM-DD spelling
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        MonthDay {
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn today() -> Self {
        Self::from_date(&chrono::Local::now().date_naive())
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month, day) = s
            .split_once('-')
            .ok_or_else(|| anyhow::Error::msg(format!("expected MM-DD, got {s:?}")))?;

        let month: u32 = month.parse()?;
        let day: u32 = day.parse()?;

        // 2000 is a leap year, so 02-29 is accepted
        NaiveDate::from_ymd_opt(2000, month, day)
            .ok_or_else(|| anyhow::Error::msg(format!("not a calendar day: {s:?}")))?;

        Ok(MonthDay { month, day })
    }
}

// inclusive on both ends; a start after the end means the range runs over new year
pub fn in_range(today: MonthDay, start: MonthDay, end: MonthDay) -> bool {
    if start <= end {
        today >= start && today <= end
    } else {
        today >= start || today <= end
    }
}

fn theme_matches(key: &str, theme: &Theme, today: MonthDay) -> bool {
    let Some([start, end]) = theme.date_range.as_deref() else {
        return false;
    };

    match (start.parse(), end.parse()) {
        (Ok(start), Ok(end)) => in_range(today, start, end),
        (Err(err), _) | (_, Err(err)) => {
            warn!({ theme = key }, "ignoring malformed date range: {err}");
            false
        }
    }
}

// the first festive theme (in declared order) whose range contains today, falling
// back to the default entry
pub fn select_theme(table: &ThemeTable, today: MonthDay) -> anyhow::Result<(&str, &Theme)> {
    if let Some(found) = table
        .festive()
        .find(|(key, theme)| theme_matches(key, theme, today))
    {
        return Ok(found);
    }

    table
        .default_theme()
        .map(|theme| (api::theme::DEFAULT_THEME, theme))
        .ok_or_else(|| anyhow::Error::msg("theme table has no default entry"))
}
