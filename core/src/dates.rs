use lazy_static::lazy_static;
use regex::{Captures, Regex};
use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime};

use crate::{Error, Result};

// optional trailing clock time: "в 14:05", "at 3:15 pm", ", 09:00"
const CLOCK: &str = r"(?:\s*,?\s*(?:в|at)?\s*\d{1,2}:\d{2}(?:\s*[ap]\.?m\.?)?)?";

// larger offsets overflow `Duration::days`; no calendar date is that far back anyway
const MAX_DAYS_BACK: i64 = i32::MAX as i64;

lazy_static! {
    static ref NAMED_DAY: Regex =
        Regex::new(&format!(r"^(сегодня|вчера|позавчера|today|yesterday){CLOCK}$")).expect("valid regex");
    static ref ISO: Regex = Regex::new(r"^(\d{4}-\d{2}-\d{2})(?:[t ].*)?$").expect("valid regex");
    static ref DOTTED: Regex =
        Regex::new(&format!(r"^(\d{{1,2}})\.(\d{{1,2}})\.(\d{{4}}){CLOCK}$")).expect("valid regex");
    static ref DAY_MONTH: Regex =
        Regex::new(&format!(r"^(\d{{1,2}})\s+(\p{{L}}+)\.?(?:\s+(\d{{4}}))?(?:\s*г\.?)?{CLOCK}$")).expect("valid regex");
    static ref MONTH_DAY: Regex =
        Regex::new(&format!(r"^(\p{{L}}+)\.?\s+(\d{{1,2}})(?:,?\s+(\d{{4}}))?{CLOCK}$")).expect("valid regex");
    static ref AGO: Regex = Regex::new(r"^(?:(\d+)\s+)?(\p{L}+)\s+(?:назад|ago)$").expect("valid regex");
}

const MONTHS: &[(&str, Month)] = &[
    ("янв", Month::January),
    ("фев", Month::February),
    ("мар", Month::March),
    ("апр", Month::April),
    ("ма", Month::May),
    ("июн", Month::June),
    ("июл", Month::July),
    ("авг", Month::August),
    ("сен", Month::September),
    ("окт", Month::October),
    ("ноя", Month::November),
    ("дек", Month::December),
    ("jan", Month::January),
    ("feb", Month::February),
    ("mar", Month::March),
    ("apr", Month::April),
    ("may", Month::May),
    ("jun", Month::June),
    ("jul", Month::July),
    ("aug", Month::August),
    ("sep", Month::September),
    ("oct", Month::October),
    ("nov", Month::November),
    ("dec", Month::December),
];

fn month_from_name(name: &str) -> Option<Month> {
    MONTHS.iter().find(|(prefix, _)| name.starts_with(prefix)).map(|(_, month)| *month)
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_iso_date(text: &str) -> Result<Date> {
    Date::parse(text.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| Error::DateParse { text: text.to_string() })
}

/// Turns the free-text publish dates shown on listing pages into calendar
/// dates. Relative expressions ("вчера в 10:12", "3 days ago") and dates
/// without a year are resolved against `today`.
#[derive(Debug, Clone, Copy)]
pub struct DateParser {
    today: Date,
}

impl DateParser {
    pub fn new(today: Date) -> Self {
        Self { today }
    }

    pub fn from_clock() -> Self {
        Self::new(OffsetDateTime::now_utc().date())
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn parse(&self, text: &str) -> Result<Date> {
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        self.parse_normalized(&normalized)
            .ok_or_else(|| Error::DateParse { text: text.trim().to_string() })
    }

    fn parse_normalized(&self, text: &str) -> Option<Date> {
        if let Some(caps) = NAMED_DAY.captures(text) {
            let back = match &caps[1] {
                "сегодня" | "today" => 0,
                "вчера" | "yesterday" => 1,
                _ => 2,
            };
            return self.days_ago(back);
        }
        if let Some(caps) = ISO.captures(text) {
            return parse_iso_date(&caps[1]).ok();
        }
        if let Some(caps) = DOTTED.captures(text) {
            let month = Month::try_from(caps[2].parse::<u8>().ok()?).ok()?;
            return Date::from_calendar_date(caps[3].parse().ok()?, month, caps[1].parse().ok()?).ok();
        }
        if let Some(caps) = DAY_MONTH.captures(text) {
            return self.calendar(&caps, 1, 2, 3);
        }
        if let Some(caps) = MONTH_DAY.captures(text) {
            return self.calendar(&caps, 2, 1, 3);
        }
        if let Some(caps) = AGO.captures(text) {
            let count: i64 = caps.get(1).map_or(Some(1), |m| m.as_str().parse().ok())?;
            let unit = &caps[2];
            let days = if ["сек", "мин", "час", "second", "minute", "hour"].iter().any(|u| unit.starts_with(u)) {
                0
            } else if ["дн", "ден", "day"].iter().any(|u| unit.starts_with(u)) {
                count
            } else if ["нед", "week"].iter().any(|u| unit.starts_with(u)) {
                count.checked_mul(7)?
            } else {
                return None;
            };
            return self.days_ago(days);
        }
        None
    }

    fn calendar(&self, caps: &Captures<'_>, day: usize, month: usize, year: usize) -> Option<Date> {
        let day: u8 = caps[day].parse().ok()?;
        let month = month_from_name(&caps[month])?;
        match caps.get(year) {
            Some(year) => Date::from_calendar_date(year.as_str().parse().ok()?, month, day).ok(),
            None => {
                // no year: the most recent such date not after today
                let this_year = Date::from_calendar_date(self.today.year(), month, day).ok();
                match this_year {
                    Some(date) if date <= self.today => Some(date),
                    _ => Date::from_calendar_date(self.today.year() - 1, month, day).ok(),
                }
            }
        }
    }

    fn days_ago(&self, days: i64) -> Option<Date> {
        if !(0..=MAX_DAYS_BACK).contains(&days) {
            return None;
        }
        self.today.checked_sub(Duration::days(days))
    }
}
