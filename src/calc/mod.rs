//! 表示用の派生値計算 - 残り日数と進捗率

mod deadline;
mod progress;

pub use deadline::{days_left, days_left_from_today, DaysLeft, DATE_FORMAT};
pub use progress::{calculate_progress, parse_word_limit, Progress, DEFAULT_WORD_LIMIT};

use crate::award::AwardRecord;
use chrono::NaiveDate;

/// 一覧の1行に表示する値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub name: String,
    pub start_label: String,
    pub end_label: String,
    pub days_left: DaysLeft,
    pub progress: Progress,
}

impl RowView {
    pub fn new(record: &AwardRecord, today: NaiveDate) -> Self {
        Self {
            name: record.name.clone(),
            start_label: format!("開始: {}", record.start_date),
            end_label: format!("締切: {}", record.end_date),
            days_left: days_left(&record.end_date, today),
            progress: calculate_progress(&record.current_words, &record.word_limit),
        }
    }

    pub fn days_label(&self) -> String {
        format!("残り: {}", self.days_left)
    }

    pub fn progress_label(&self) -> String {
        format!("進捗: {}", self.progress)
    }
}
