use time::{Date, Month, OffsetDateTime};

/// Same day `months` calendar months earlier, clamped to the end of the
/// target month (31 March minus one month is the last day of February).
pub fn months_before(date: Date, months: u32) -> Date {
    let mut year = date.year();
    let mut month = date.month();

    for _ in 0..months {
        if month == Month::January {
            year -= 1;
        }
        month = month.previous();
    }

    let mut day = date.day();
    loop {
        match Date::from_calendar_date(year, month, day) {
            Ok(date) => return date,
            Err(_) if day > 28 => day -= 1,
            Err(_) => return Date::MIN,
        }
    }
}

/// Start of the window in which a cooked recipe counts as recent.
pub fn recent_cutoff(now: OffsetDateTime) -> Date {
    months_before(now.date(), 1)
}
