use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeSet;

pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Counts consecutive marked days walking backward from `anchor` inclusive.
/// Returns 0 when the anchor itself is unmarked or does not parse.
pub fn streak_from(anchor: &str, dates: &BTreeSet<String>) -> u32 {
    let Ok(mut day) = NaiveDate::parse_from_str(anchor, DAY_FORMAT) else {
        return 0;
    };

    let mut streak = 0;
    while dates.contains(&day_key(day)) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

/// Longest run of chronologically consecutive days anywhere in `dates`,
/// independent of any anchor. Ids that do not parse are skipped.
pub fn longest_run(dates: &BTreeSet<String>) -> u32 {
    let mut parsed: Vec<NaiveDate> = dates
        .iter()
        .filter_map(|id| NaiveDate::parse_from_str(id, DAY_FORMAT).ok())
        .collect();
    parsed.sort();
    parsed.dedup();

    if parsed.is_empty() {
        return 0;
    }

    let mut longest = 1;
    let mut current = 1;
    for pair in parsed.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }
    longest
}

pub fn day_key(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

pub fn today_key() -> String {
    day_key(Local::now().date_naive())
}

pub fn days_ago_key(days: i64) -> String {
    day_key(Local::now().date_naive() - Duration::days(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn streak_counts_back_from_anchor() {
        let set = dates(&["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert_eq!(streak_from("2024-01-03", &set), 3);
    }

    #[test]
    fn streak_is_zero_when_anchor_unmarked() {
        let set = dates(&["2024-01-01", "2024-01-02"]);
        assert_eq!(streak_from("2024-01-03", &set), 0);
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let set = dates(&["2024-01-01", "2024-01-03"]);
        assert_eq!(streak_from("2024-01-03", &set), 1);
    }

    #[test]
    fn streak_ignores_days_after_anchor() {
        let set = dates(&["2024-01-02", "2024-01-03", "2024-01-04"]);
        assert_eq!(streak_from("2024-01-03", &set), 2);
    }

    #[test]
    fn streak_with_unparsable_anchor_is_zero() {
        let set = dates(&["2024-01-01"]);
        assert_eq!(streak_from("not-a-date", &set), 0);
    }

    #[test]
    fn longest_run_of_empty_set_is_zero() {
        assert_eq!(longest_run(&BTreeSet::new()), 0);
    }

    #[test]
    fn longest_run_of_single_day_is_one() {
        assert_eq!(longest_run(&dates(&["2024-01-01"])), 1);
    }

    #[test]
    fn longest_run_resets_at_gaps() {
        let set = dates(&["2024-01-01", "2024-01-03"]);
        assert_eq!(longest_run(&set), 1);

        let set = dates(&[
            "2024-01-01",
            "2024-01-02",
            "2024-01-05",
            "2024-01-06",
            "2024-01-07",
        ]);
        assert_eq!(longest_run(&set), 3);
    }

    #[test]
    fn longest_run_spans_month_boundaries() {
        let set = dates(&["2024-01-30", "2024-01-31", "2024-02-01"]);
        assert_eq!(longest_run(&set), 3);
    }

    #[test]
    fn longest_run_skips_malformed_ids() {
        let set = dates(&["2024-01-01", "garbage", "2024-01-02"]);
        assert_eq!(longest_run(&set), 2);
    }
}
