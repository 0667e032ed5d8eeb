use hifitime::Epoch;
use regex::Regex;
use std::sync::LazyLock;

use crate::neo_errors::NeoError;

/// `YYYY-Mon-DD hh:mm`, the calendar date format of the JPL close-approach API
static CALENDAR_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-([A-Za-z]{3})-(\d{1,2}) (\d{1,2}):(\d{2})$")
        .expect("calendar date regex is valid")
});

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Transformation from a calendar date in the format `YYYY-Mon-DD hh:mm` (UTC) to an epoch
///
/// Month abbreviations are matched case-insensitively.
///
/// Argument
/// --------
/// * `calendar_date`: a string like `2020-Jan-01 12:30`
///
/// Return
/// ------
/// * the corresponding [`Epoch`] in the UTC time scale, or
///   [`NeoError::InvalidCalendarDate`] if the string is malformed or names an impossible date
pub fn cd_to_epoch(calendar_date: &str) -> Result<Epoch, NeoError> {
    let invalid = || NeoError::InvalidCalendarDate(calendar_date.to_string());

    let caps = CALENDAR_DATE
        .captures(calendar_date.trim())
        .ok_or_else(invalid)?;

    let year: i32 = caps[1].parse().map_err(|_| invalid())?;
    let month_name = caps[2].to_ascii_lowercase();
    let month = MONTHS
        .iter()
        .position(|m| *m == month_name)
        .ok_or_else(invalid)? as u8
        + 1;
    let day: u8 = caps[3].parse().map_err(|_| invalid())?;
    let hour: u8 = caps[4].parse().map_err(|_| invalid())?;
    let minute: u8 = caps[5].parse().map_err(|_| invalid())?;

    Epoch::maybe_from_gregorian_utc(year, month, day, hour, minute, 0, 0).map_err(|_| invalid())
}

/// Transformation from an epoch to the display string `YYYY-MM-DD hh:mm` (UTC)
///
/// Seconds are dropped: the source data only has minute precision.
///
/// Argument
/// --------
/// * `epoch`: the epoch to format
///
/// Return
/// ------
/// * a string like `2020-01-01 12:30`
pub fn epoch_to_str(epoch: &Epoch) -> String {
    let (year, month, day, hour, minute, _, _) = epoch.to_gregorian_utc();
    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}")
}

#[cfg(test)]
mod time_test {
    use super::*;

    #[test]
    fn test_cd_to_epoch() {
        let epoch = cd_to_epoch("2020-Jan-01 00:00").unwrap();
        assert_eq!(epoch, Epoch::from_gregorian_utc(2020, 1, 1, 0, 0, 0, 0));

        let epoch = cd_to_epoch("1900-Dec-31 23:59").unwrap();
        assert_eq!(epoch, Epoch::from_gregorian_utc(1900, 12, 31, 23, 59, 0, 0));

        let epoch = cd_to_epoch("2101-mar-5 7:05").unwrap();
        assert_eq!(epoch, Epoch::from_gregorian_utc(2101, 3, 5, 7, 5, 0, 0));
    }

    #[test]
    fn test_cd_to_epoch_rejects_malformed() {
        for bad in [
            "",
            "2020-01-01 00:00",
            "2020-Foo-01 00:00",
            "2020-Feb-30 00:00",
            "2020-Jan-01 25:00",
            "2020-Jan-01",
            "2020-Jan-01 00:00:00",
        ] {
            assert_eq!(
                cd_to_epoch(bad),
                Err(NeoError::InvalidCalendarDate(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_epoch_to_str() {
        let epoch = Epoch::from_gregorian_utc(2020, 1, 1, 12, 30, 0, 0);
        assert_eq!(epoch_to_str(&epoch), "2020-01-01 12:30");

        let epoch = Epoch::from_gregorian_utc(1999, 7, 4, 3, 9, 45, 0);
        assert_eq!(epoch_to_str(&epoch), "1999-07-04 03:09");
    }

    #[test]
    fn test_round_trip_keeps_minutes() {
        let epoch = cd_to_epoch("2029-Apr-13 21:46").unwrap();
        assert_eq!(epoch_to_str(&epoch), "2029-04-13 21:46");
    }
}
