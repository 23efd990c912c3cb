//! Week-key resolution and date filtering.
//!
//! The backend is queried by "week key": the Monday of a week in
//! `YYYY-MM-DD`, or whatever partial date the user has typed so far. All
//! formatting works from calendar fields on [`NaiveDate`] so the key never
//! shifts across time zones the way a UTC-normalized timestamp would.

use chrono::{Datelike, Days, NaiveDate};

use crate::ad::Ad;

/// Returns the Monday of the week containing `date`.
///
/// Sunday shifts back six days; any other day shifts back to the Monday of
/// the same week.
#[must_use]
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date - Days::new(back)
}

/// [`monday_of`] formatted as a `YYYY-MM-DD` week key.
#[must_use]
pub fn monday_iso(date: NaiveDate) -> String {
    monday_of(date).format("%Y-%m-%d").to_string()
}

/// Progressively formats raw user input into a partial `YYYY-MM-DD` string.
///
/// Strips every non-digit, truncates to eight digits, and re-inserts the
/// separators as enough digits arrive: `"2024"`, `"2024-01"`, `"2024-01-15"`.
/// Total on any input; the result is simply shorter while the user is still
/// typing.
#[must_use]
pub fn normalize_partial_date_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(8).collect();
    match digits.len() {
        0..=4 => digits,
        5 | 6 => format!("{}-{}", &digits[..4], &digits[4..]),
        _ => format!("{}-{}-{}", &digits[..4], &digits[4..6], &digits[6..]),
    }
}

/// Picks the week key to query: a non-empty normalized user input verbatim,
/// otherwise the Monday of the week containing `today`.
#[must_use]
pub fn resolve_week(normalized_input: &str, today: NaiveDate) -> String {
    if normalized_input.is_empty() {
        monday_iso(today)
    } else {
        normalized_input.to_string()
    }
}

/// Applies the local date filter to an assembled ad list.
///
/// `YYYY` and `YYYY-MM` inputs keep ads whose date starts with the prefix; a
/// full `YYYY-MM-DD` keeps ads dated within seven days of the target. Empty
/// or unrecognized input returns the list unchanged. Ads without a date never
/// match a non-empty filter.
#[must_use]
pub fn filter_by_date(ads: Vec<Ad>, filter: &str) -> Vec<Ad> {
    let df = filter.trim();
    if df.is_empty() {
        return ads;
    }

    if is_year(df) || is_year_month(df) {
        return ads
            .into_iter()
            .filter(|ad| ad.date.as_deref().is_some_and(|d| d.starts_with(df)))
            .collect();
    }

    if let Ok(target) = NaiveDate::parse_from_str(df, "%Y-%m-%d") {
        return ads
            .into_iter()
            .filter(|ad| {
                ad.date
                    .as_deref()
                    .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
                    .is_some_and(|d| (d - target).num_days().abs() <= 7)
            })
            .collect();
    }

    ads
}

fn is_year(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_year_month(s: &str) -> bool {
    s.len() == 7
        && s.as_bytes()[4] == b'-'
        && s.bytes().enumerate().all(|(i, b)| i == 4 || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::ad::Price;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dated_ad(date: Option<&str>) -> Ad {
        Ad {
            product: "item".to_string(),
            price: Price::default(),
            store: "HEB".to_string(),
            date: date.map(str::to_owned),
            image_filename: None,
            image_base64: None,
            image_uri: None,
        }
    }

    #[test]
    fn monday_of_a_sunday_shifts_back_six_days() {
        assert_eq!(monday_of(date(2024, 1, 7)), date(2024, 1, 1));
    }

    #[test]
    fn monday_of_a_monday_is_itself() {
        assert_eq!(monday_of(date(2024, 1, 8)), date(2024, 1, 8));
    }

    #[test]
    fn monday_of_is_always_a_monday_within_six_days() {
        let mut d = date(2023, 12, 20);
        for _ in 0..30 {
            let monday = monday_of(d);
            assert_eq!(monday.weekday(), Weekday::Mon);
            assert!(monday <= d);
            assert!((d - monday).num_days() <= 6);
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn monday_iso_formats_calendar_fields() {
        assert_eq!(monday_iso(date(2024, 1, 7)), "2024-01-01");
    }

    #[test]
    fn normalize_partial_keeps_short_inputs_bare() {
        assert_eq!(normalize_partial_date_input("2024"), "2024");
        assert_eq!(normalize_partial_date_input("20"), "20");
        assert_eq!(normalize_partial_date_input(""), "");
    }

    #[test]
    fn normalize_partial_inserts_separators_progressively() {
        assert_eq!(normalize_partial_date_input("202401"), "2024-01");
        assert_eq!(normalize_partial_date_input("2024010"), "2024-01-0");
        assert_eq!(normalize_partial_date_input("20240115"), "2024-01-15");
    }

    #[test]
    fn normalize_partial_strips_non_digits_and_truncates() {
        assert_eq!(normalize_partial_date_input("2024-01-15"), "2024-01-15");
        assert_eq!(normalize_partial_date_input("ab2024/01x15"), "2024-01-15");
        assert_eq!(normalize_partial_date_input("202401159999"), "2024-01-15");
    }

    #[test]
    fn resolve_week_uses_nonempty_input_verbatim() {
        assert_eq!(resolve_week("2024-01-08", date(2025, 6, 1)), "2024-01-08");
        assert_eq!(resolve_week("2024-01", date(2025, 6, 1)), "2024-01");
    }

    #[test]
    fn resolve_week_falls_back_to_current_monday() {
        assert_eq!(resolve_week("", date(2024, 1, 7)), "2024-01-01");
    }

    #[test]
    fn filter_by_date_empty_filter_is_identity() {
        let ads = vec![dated_ad(Some("2024-01-08")), dated_ad(None)];
        assert_eq!(filter_by_date(ads.clone(), ""), ads);
        assert_eq!(filter_by_date(ads.clone(), "   "), ads);
    }

    #[test]
    fn filter_by_date_year_prefix() {
        let ads = vec![
            dated_ad(Some("2024-01-08")),
            dated_ad(Some("2023-12-25")),
            dated_ad(None),
        ];
        let kept = filter_by_date(ads, "2024");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].date.as_deref(), Some("2024-01-08"));
    }

    #[test]
    fn filter_by_date_year_month_prefix() {
        let ads = vec![dated_ad(Some("2024-01-08")), dated_ad(Some("2024-02-05"))];
        let kept = filter_by_date(ads, "2024-01");
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn filter_by_date_full_date_keeps_week_neighbors() {
        let ads = vec![
            dated_ad(Some("2024-01-08")),
            dated_ad(Some("2024-01-15")),
            dated_ad(Some("2024-01-16")),
            dated_ad(None),
        ];
        let kept = filter_by_date(ads, "2024-01-08");
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn filter_by_date_unrecognized_input_is_identity() {
        let ads = vec![dated_ad(Some("2024-01-08"))];
        assert_eq!(filter_by_date(ads.clone(), "last week"), ads);
    }
}
