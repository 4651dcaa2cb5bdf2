//! 締め切りまでの残り日数

use chrono::{Local, NaiveDate};
use std::fmt;

/// 締め切り日の入力形式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 残り日数の計算結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysLeft {
    /// 締め切りまでの日数（当日は0）
    Remaining(i64),
    /// 締め切りを過ぎている
    Passed,
    /// 日付として解釈できない
    DateError,
}

impl fmt::Display for DaysLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaysLeft::Remaining(days) => write!(f, "{} 日", days),
            DaysLeft::Passed => f.write_str("締切済み"),
            DaysLeft::DateError => f.write_str("日付エラー"),
        }
    }
}

/// `today` を基準に残り日数を計算
///
/// 形式が合わない入力はすべて `DateError` にまとめる。
pub fn days_left(date_text: &str, today: NaiveDate) -> DaysLeft {
    let Ok(deadline) = NaiveDate::parse_from_str(date_text.trim(), DATE_FORMAT) else {
        return DaysLeft::DateError;
    };

    let days = (deadline - today).num_days();
    if days >= 0 {
        DaysLeft::Remaining(days)
    } else {
        DaysLeft::Passed
    }
}

/// ローカル時刻の今日を基準に残り日数を計算
pub fn days_left_from_today(date_text: &str) -> DaysLeft {
    days_left(date_text, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deadline_today_is_zero() {
        let today = day(2025, 7, 31);
        assert_eq!(days_left("2025-07-31", today), DaysLeft::Remaining(0));
        assert_eq!(days_left("2025-07-31", today).to_string(), "0 日");
    }

    #[test]
    fn test_deadline_in_future() {
        let today = day(2025, 12, 30);
        assert_eq!(days_left("2026-01-02", today), DaysLeft::Remaining(3));
    }

    #[test]
    fn test_deadline_passed() {
        let today = day(2025, 8, 1);
        assert_eq!(days_left("2025-07-31", today), DaysLeft::Passed);
        assert_eq!(days_left("1999-01-01", today).to_string(), "締切済み");
    }

    #[test]
    fn test_deadline_invalid_inputs() {
        let today = day(2025, 8, 1);
        for input in ["", "2025/07/31", "2025-02-30", "令和7年7月31日", "tomorrow", "2025-13-01"] {
            assert_eq!(days_left(input, today), DaysLeft::DateError, "input: {input}");
        }
        assert_eq!(DaysLeft::DateError.to_string(), "日付エラー");
    }

    #[test]
    fn test_deadline_surrounding_whitespace() {
        let today = day(2025, 7, 30);
        assert_eq!(days_left(" 2025-07-31\n", today), DaysLeft::Remaining(1));
    }

    #[test]
    fn test_days_left_from_today_uses_local_date() {
        let today = Local::now().date_naive();
        let text = today.format(DATE_FORMAT).to_string();
        assert_eq!(days_left_from_today(&text), DaysLeft::Remaining(0));
    }
}
