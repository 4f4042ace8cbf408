use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";
pub const DAY_FMT: &str = "%Y-%m-%d";

// Publication dates arrive in whatever precision the dataset carries: a full
// timestamp, a calendar day, a year-month, or a bare year. A month resolves
// to its first day and a year to January 1 so comparisons stay consistent
// between stored dates and filter arguments.
pub(crate) fn parse_published(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.date_naive());
    }
    if let Ok(time) = NaiveDateTime::parse_from_str(value, DATE_FMT) {
        return Some(time.date());
    }
    if let Ok(day) = NaiveDate::parse_from_str(value, DAY_FMT) {
        return Some(day);
    }
    if let Ok(day) = NaiveDate::parse_from_str(format!("{}-01", value).as_str(), DAY_FMT) {
        return Some(day);
    }
    value.parse::<i32>().ok().and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::utils::date::parse_published;

    #[tokio::test]
    async fn test_should_parse_year() {
        assert_eq!(NaiveDate::from_ymd_opt(1759, 1, 1), parse_published("1759"));
    }

    #[tokio::test]
    async fn test_should_parse_year_month() {
        assert_eq!(NaiveDate::from_ymd_opt(1759, 3, 1), parse_published("1759-03"));
    }

    #[tokio::test]
    async fn test_should_parse_day() {
        assert_eq!(NaiveDate::from_ymd_opt(1950, 5, 11), parse_published("1950-05-11"));
    }

    #[tokio::test]
    async fn test_should_parse_timestamp() {
        assert_eq!(NaiveDate::from_ymd_opt(1950, 5, 11), parse_published("1950-05-11T10:30:00.000"));
        assert_eq!(NaiveDate::from_ymd_opt(1950, 5, 11), parse_published("1950-05-11T10:30:00+00:00"));
    }

    #[tokio::test]
    async fn test_should_trim_whitespace() {
        assert_eq!(NaiveDate::from_ymd_opt(1748, 1, 1), parse_published(" 1748 "));
    }

    #[tokio::test]
    async fn test_should_reject_garbage() {
        assert_eq!(None, parse_published("not a date"));
        assert_eq!(None, parse_published(""));
        assert_eq!(None, parse_published("1759-13"));
    }
}
